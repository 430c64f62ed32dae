//! Filter and hook contracts.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::context::{ActionContext, ActionExecutedContext};
use crate::error::Error;

/// A unit of cross-cutting logic run around an action.
///
/// Implementations are registered with the host's container and resolved
/// per request. Both hooks default to doing nothing, so a filter only needs
/// to implement the stage it cares about.
///
/// Cancellation is passed through untouched; honoring it is up to the
/// filter.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use tokio_util::sync::CancellationToken;
/// use scoped_filters::{ActionContext, ActionFilter, Error};
///
/// struct RequireJson;
///
/// #[async_trait]
/// impl ActionFilter for RequireJson {
///     async fn on_action_executing(
///         &self,
///         ctx: &ActionContext,
///         _cancel: &CancellationToken,
///     ) -> Result<(), Error> {
///         if ctx.request().method() == "TRACE" {
///             return Err(Error::message("method not allowed"));
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait ActionFilter: Send + Sync {
    /// Runs before the action method is invoked.
    async fn on_action_executing(
        &self,
        _ctx: &ActionContext,
        _cancel: &CancellationToken,
    ) -> Result<(), Error> {
        Ok(())
    }

    /// Runs after the action method is invoked.
    async fn on_action_executed(
        &self,
        _ctx: &ActionExecutedContext,
        _cancel: &CancellationToken,
    ) -> Result<(), Error> {
        Ok(())
    }
}

/// The entry points the host framework's pipeline calls.
///
/// The framework may call a hook without a context; implementations must
/// reject that with [`Error::InvalidArgument`] before doing any other work.
#[async_trait]
pub trait ActionFilterHook: Send + Sync {
    /// Called immediately before the action executes.
    async fn on_action_executing(
        &self,
        ctx: Option<&ActionContext>,
        cancel: &CancellationToken,
    ) -> Result<(), Error>;

    /// Called immediately after the action executes.
    async fn on_action_executed(
        &self,
        ctx: Option<&ActionExecutedContext>,
        cancel: &CancellationToken,
    ) -> Result<(), Error>;
}
