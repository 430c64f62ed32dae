//! Identity metadata used to pair filter wrappers with registered filters.
//!
//! A [`FilterMetadata`] is the fingerprint `(controller type, scope, method)`
//! recorded when a filter is registered. Wrappers carry one fingerprint and
//! only dispatch to candidates carrying an equal one.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_METHOD_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a controller type.
///
/// Equality and hashing use the [`TypeId`] only. The type name is kept for
/// diagnostics and never compared.
///
/// # Examples
///
/// ```
/// use scoped_filters::ControllerType;
///
/// struct ValuesController;
/// struct OrdersController;
///
/// assert_eq!(ControllerType::of::<ValuesController>(), ControllerType::of::<ValuesController>());
/// assert_ne!(ControllerType::of::<ValuesController>(), ControllerType::of::<OrdersController>());
/// ```
#[derive(Clone, Copy)]
pub struct ControllerType {
    id: TypeId,
    name: &'static str,
}

impl ControllerType {
    /// Returns the identity of controller type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns the fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ControllerType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ControllerType {}

impl Hash for ControllerType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ControllerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ControllerType").field(&self.name).finish()
    }
}

impl fmt::Display for ControllerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The level at which a filter was registered.
///
/// Ordered from the widest scope to the narrowest. This is the order
/// [`FilterProvider::filters_for`](crate::FilterProvider::filters_for)
/// returns wrappers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterScope {
    /// Applies to every action of every controller
    Global,
    /// Applies to every action of one controller
    Controller,
    /// Applies to a single action method
    Action,
}

impl fmt::Display for FilterScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterScope::Global => write!(f, "global"),
            FilterScope::Controller => write!(f, "controller"),
            FilterScope::Action => write!(f, "action"),
        }
    }
}

/// Stable identity of an action method.
///
/// IDs are assigned once at startup, either by [`MethodId::register`] (which
/// draws from a process-wide counter) or by the host via
/// [`MethodId::from_raw`]. Equality and hashing use the numeric ID only.
///
/// # Examples
///
/// ```
/// use scoped_filters::MethodId;
///
/// let get = MethodId::register("get");
/// let post = MethodId::register("post");
///
/// assert_ne!(get, post);
/// assert_eq!(get, get.clone());
/// assert_eq!(get.name(), "get");
/// ```
#[derive(Clone, Copy)]
pub struct MethodId {
    id: u64,
    name: &'static str,
}

impl MethodId {
    /// Allocates a new unique method identity.
    pub fn register(name: &'static str) -> Self {
        Self {
            id: NEXT_METHOD_ID.fetch_add(1, Ordering::Relaxed),
            name,
        }
    }

    /// Builds a method identity from an ID the host assigned itself.
    ///
    /// The host is responsible for keeping these IDs unique and must not mix
    /// them with IDs from [`MethodId::register`].
    pub fn from_raw(id: u64, name: &'static str) -> Self {
        Self { id, name }
    }

    /// Returns the numeric identity.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the method name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for MethodId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MethodId {}

impl Hash for MethodId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MethodId({}#{})", self.name, self.id)
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Identity triple of a registered filter.
///
/// Immutable once constructed and compared structurally. Controller-scoped
/// filters carry no method.
///
/// # Examples
///
/// ```
/// use scoped_filters::{FilterMetadata, FilterScope, MethodId};
///
/// struct ValuesController;
/// let get = MethodId::register("get");
///
/// let on_action = FilterMetadata::action::<ValuesController>(get);
/// assert_eq!(on_action.scope(), FilterScope::Action);
/// assert_eq!(on_action.method(), Some(get));
///
/// let on_controller = FilterMetadata::controller::<ValuesController>();
/// assert_ne!(on_action, on_controller);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterMetadata {
    controller_type: ControllerType,
    scope: FilterScope,
    method: Option<MethodId>,
}

impl FilterMetadata {
    /// Creates metadata from its three parts.
    pub fn new(
        controller_type: ControllerType,
        scope: FilterScope,
        method: Option<MethodId>,
    ) -> Self {
        Self {
            controller_type,
            scope,
            method,
        }
    }

    /// Metadata for a filter applied to every action of controller `C`.
    pub fn controller<C: 'static>() -> Self {
        Self::new(ControllerType::of::<C>(), FilterScope::Controller, None)
    }

    /// Metadata for a filter applied to one action method of controller `C`.
    pub fn action<C: 'static>(method: MethodId) -> Self {
        Self::new(ControllerType::of::<C>(), FilterScope::Action, Some(method))
    }

    /// Returns the controller type.
    pub fn controller_type(&self) -> ControllerType {
        self.controller_type
    }

    /// Returns the filter scope.
    pub fn scope(&self) -> FilterScope {
        self.scope
    }

    /// Returns the method identity, if the filter is method-bound.
    pub fn method(&self) -> Option<MethodId> {
        self.method
    }
}

impl fmt::Display for FilterMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.method {
            Some(method) => write!(f, "{}::{} ({})", self.controller_type, method, self.scope),
            None => write!(f, "{} ({})", self.controller_type, self.scope),
        }
    }
}
