//! The request-bound resolution scope the adapter queries.

use async_trait::async_trait;

use crate::candidate::FilterCandidate;
use crate::filter::ActionFilter;

/// A role filter implementations register against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Filters invoked immediately before the action runs
    PreAction,
    /// Filters invoked immediately after the action runs
    PostAction,
}

/// Request-scoped source of registered filters.
///
/// Owned by the request; the adapter only reads from it. The container
/// behind it is outside this crate.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use scoped_filters::{ActionFilter, Capability, FilterCandidate, ResolutionScope};
///
/// struct EmptyScope;
///
/// #[async_trait]
/// impl ResolutionScope for EmptyScope {
///     async fn resolve_action_filters(
///         &self,
///         _capability: Capability,
///     ) -> Vec<FilterCandidate<dyn ActionFilter>> {
///         Vec::new()
///     }
/// }
/// ```
#[async_trait]
pub trait ResolutionScope: Send + Sync {
    /// Resolves every registered filter for `capability`.
    ///
    /// Candidates are returned in registration order, each with its
    /// instance still unconstructed.
    async fn resolve_action_filters(
        &self,
        capability: Capability,
    ) -> Vec<FilterCandidate<dyn ActionFilter>>;
}
