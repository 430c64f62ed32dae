//! Contexts the host framework hands to filters around an action.

use std::fmt;
use std::sync::Arc;

use crate::metadata::{ControllerType, MethodId};
use crate::scope::ResolutionScope;

/// An in-flight request together with its resolution scope.
///
/// The host builds one per request and drops it (and the scope with it)
/// when the request completes.
pub struct HttpRequest {
    request_id: String,
    method: String,
    path: String,
    scope: Arc<dyn ResolutionScope>,
}

impl HttpRequest {
    /// Creates a request bound to `scope`.
    pub fn new(
        request_id: impl Into<String>,
        method: impl Into<String>,
        path: impl Into<String>,
        scope: Arc<dyn ResolutionScope>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            method: method.into(),
            path: path.into(),
            scope,
        }
    }

    /// Returns the request ID.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the request path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the request's resolution scope.
    pub fn scope(&self) -> &dyn ResolutionScope {
        self.scope.as_ref()
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequest")
            .field("request_id", &self.request_id)
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Identifies the action selected for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescriptor {
    controller_type: ControllerType,
    method: MethodId,
}

impl ActionDescriptor {
    /// Describes `method` on controller `C`.
    pub fn of<C: 'static>(method: MethodId) -> Self {
        Self::new(ControllerType::of::<C>(), method)
    }

    /// Creates a descriptor from its parts.
    pub fn new(controller_type: ControllerType, method: MethodId) -> Self {
        Self {
            controller_type,
            method,
        }
    }

    /// Returns the controller type.
    pub fn controller_type(&self) -> ControllerType {
        self.controller_type
    }

    /// Returns the action method.
    pub fn method(&self) -> MethodId {
        self.method
    }

    /// Returns the action name.
    pub fn action_name(&self) -> &'static str {
        self.method.name()
    }
}

/// Context passed to pre-action filters.
#[derive(Debug, Clone)]
pub struct ActionContext {
    request: Arc<HttpRequest>,
    descriptor: ActionDescriptor,
}

impl ActionContext {
    /// Creates the context for running `descriptor` on `request`.
    pub fn new(request: Arc<HttpRequest>, descriptor: ActionDescriptor) -> Self {
        Self {
            request,
            descriptor,
        }
    }

    /// Returns the in-flight request.
    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    /// Returns the selected action.
    pub fn descriptor(&self) -> &ActionDescriptor {
        &self.descriptor
    }
}

/// How the action finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action produced a response
    Completed {
        /// HTTP status of the response
        status: u16,
    },
    /// The action failed
    Failed {
        /// Description of the failure
        message: String,
    },
}

/// Context passed to post-action filters.
#[derive(Debug, Clone)]
pub struct ActionExecutedContext {
    action: ActionContext,
    outcome: ActionOutcome,
}

impl ActionExecutedContext {
    /// Creates the context for an action that finished with `outcome`.
    pub fn new(action: ActionContext, outcome: ActionOutcome) -> Self {
        Self { action, outcome }
    }

    /// Returns the pre-action context this one extends.
    pub fn action_context(&self) -> &ActionContext {
        &self.action
    }

    /// Returns the in-flight request.
    pub fn request(&self) -> &HttpRequest {
        self.action.request()
    }

    /// Returns how the action finished.
    pub fn outcome(&self) -> &ActionOutcome {
        &self.outcome
    }
}
