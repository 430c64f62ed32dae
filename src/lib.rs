//! Request-scoped action filter dispatch.
//!
//! This crate connects a dependency-injection container's per-request
//! resolution scope to a web framework's action-filter pipeline:
//! - **Wrappers**: one [`FilterWrapper`] per registered filter fingerprint sits
//!   in the framework pipeline
//! - **Matching**: on each request the wrapper resolves every candidate filter
//!   from the request's [`ResolutionScope`] and keeps those whose
//!   [`FilterMetadata`] equals its own
//! - **Dispatch**: matching filters run one at a time, in registration order,
//!   each awaited before the next starts
//!
//! # Core Types
//!
//! - [`FilterMetadata`]: identity triple (controller type, scope, method)
//! - [`CandidateMetadata`]: typed metadata record attached to a registration
//! - [`LazyFilter`]: deferred-construction handle for a filter instance
//! - [`ActionFilter`]: the trait registered filters implement
//! - [`ActionFilterHook`]: the entry points the framework pipeline calls
//! - [`FilterProvider`]: builds wrappers once at startup
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use tokio_util::sync::CancellationToken;
//! use scoped_filters::{
//!     ActionContext, ActionDescriptor, ActionFilter, ActionFilterHook, CandidateMetadata,
//!     Capability, Error, FilterCandidate, FilterMetadata, FilterWrapper, HttpRequest,
//!     LazyFilter, MethodId, ResolutionScope,
//! };
//!
//! struct ValuesController;
//! struct Audit;
//!
//! #[async_trait]
//! impl ActionFilter for Audit {
//!     async fn on_action_executing(
//!         &self,
//!         _ctx: &ActionContext,
//!         _cancel: &CancellationToken,
//!     ) -> Result<(), Error> {
//!         Ok(())
//!     }
//! }
//!
//! struct Scope;
//!
//! #[async_trait]
//! impl ResolutionScope for Scope {
//!     async fn resolve_action_filters(
//!         &self,
//!         _capability: Capability,
//!     ) -> Vec<FilterCandidate<dyn ActionFilter>> {
//!         vec![FilterCandidate::new(
//!             LazyFilter::new(|| Arc::new(Audit) as Arc<dyn ActionFilter>),
//!             CandidateMetadata::action_filter(FilterMetadata::controller::<ValuesController>()),
//!         )]
//!     }
//! }
//!
//! # tokio_test_block_on(async {
//! let get = MethodId::register("get");
//! let request = Arc::new(HttpRequest::new("req-1", "GET", "/values", Arc::new(Scope)));
//! let ctx = ActionContext::new(request, ActionDescriptor::of::<ValuesController>(get));
//!
//! let wrapper = FilterWrapper::new(FilterMetadata::controller::<ValuesController>());
//! wrapper
//!     .on_action_executing(Some(&ctx), &CancellationToken::new())
//!     .await
//!     .expect("filters succeed");
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod candidate;
mod context;
mod error;
mod filter;
mod logging;
mod metadata;
mod provider;
mod scope;
mod wrapper;

pub use candidate::{CandidateMetadata, FilterCandidate, LazyFilter, MetadataSlot};
pub use context::{
    ActionContext, ActionDescriptor, ActionExecutedContext, ActionOutcome, HttpRequest,
};
pub use error::{BoxError, Error};
pub use filter::{ActionFilter, ActionFilterHook};
pub use metadata::{ControllerType, FilterMetadata, FilterScope, MethodId};
pub use provider::{FilterInfo, FilterProvider};
pub use scope::{Capability, ResolutionScope};
pub use wrapper::FilterWrapper;
