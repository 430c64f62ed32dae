//! The filter wrapper placed in the host pipeline.
//!
//! A [`FilterWrapper`] stands in for every filter registered under one
//! fingerprint. On each request it asks the request's resolution scope for
//! all candidates of the stage's capability, keeps those whose metadata
//! equals its own, and awaits them one after another in resolution order.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::candidate::{CandidateMetadata, FilterCandidate, MetadataSlot};
use crate::context::{ActionContext, ActionExecutedContext};
use crate::error::Error;
use crate::filter::{ActionFilter, ActionFilterHook};
use crate::logging::DispatchLog;
use crate::metadata::FilterMetadata;
use crate::scope::Capability;

/// Dispatches to the filters registered under one metadata fingerprint.
///
/// Created once per fingerprint at startup and never mutated, so a single
/// wrapper can serve any number of concurrent requests.
///
/// # Examples
///
/// ```
/// use scoped_filters::{CandidateMetadata, FilterMetadata, FilterWrapper, MethodId};
///
/// struct ValuesController;
/// let get = MethodId::register("get");
///
/// let wrapper = FilterWrapper::new(FilterMetadata::action::<ValuesController>(get));
///
/// assert!(wrapper.matches(&CandidateMetadata::action_filter(
///     FilterMetadata::action::<ValuesController>(get)
/// )));
/// assert!(!wrapper.matches(&CandidateMetadata::action_filter(
///     FilterMetadata::controller::<ValuesController>()
/// )));
/// assert!(!wrapper.matches(&CandidateMetadata::new()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterWrapper {
    metadata: FilterMetadata,
    slot: MetadataSlot,
}

impl FilterWrapper {
    /// Creates a wrapper for ordinary action filters registered under `metadata`.
    pub fn new(metadata: FilterMetadata) -> Self {
        Self::for_slot(MetadataSlot::ActionFilter, metadata)
    }

    /// Creates a wrapper for override filters registered under `metadata`.
    pub fn overriding(metadata: FilterMetadata) -> Self {
        Self::for_slot(MetadataSlot::ActionFilterOverride, metadata)
    }

    /// Creates a wrapper reading `slot` of each candidate's metadata.
    pub fn for_slot(slot: MetadataSlot, metadata: FilterMetadata) -> Self {
        Self { metadata, slot }
    }

    /// Returns this wrapper's fingerprint.
    pub fn metadata(&self) -> &FilterMetadata {
        &self.metadata
    }

    /// Returns the metadata slot this wrapper reads.
    pub fn slot(&self) -> MetadataSlot {
        self.slot
    }

    /// Returns `true` if the host should suppress lower-scoped action
    /// filters while this wrapper is in the pipeline.
    pub fn overrides_lower_scopes(&self) -> bool {
        self.slot == MetadataSlot::ActionFilterOverride
    }

    /// Returns `true` if a candidate registered with `metadata` belongs to
    /// this wrapper.
    ///
    /// A candidate matches only when its record holds a value in this
    /// wrapper's slot and that value has the same controller type, scope
    /// and method identity.
    pub fn matches(&self, metadata: &CandidateMetadata) -> bool {
        metadata.get(self.slot).is_some_and(|candidate| {
            candidate.controller_type() == self.metadata.controller_type()
                && candidate.scope() == self.metadata.scope()
                && candidate.method() == self.metadata.method()
        })
    }

    fn select<'c>(
        &self,
        candidates: &'c [FilterCandidate<dyn ActionFilter>],
    ) -> Vec<&'c FilterCandidate<dyn ActionFilter>> {
        candidates
            .iter()
            .filter(|candidate| self.matches(candidate.metadata()))
            .collect()
    }
}

#[async_trait]
impl ActionFilterHook for FilterWrapper {
    async fn on_action_executing(
        &self,
        ctx: Option<&ActionContext>,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        let ctx = ctx.ok_or(Error::InvalidArgument {
            parameter: "action_context",
        })?;
        let request = ctx.request();
        let log = DispatchLog::new(request.request_id(), &self.metadata);

        let candidates = request
            .scope()
            .resolve_action_filters(Capability::PreAction)
            .await;
        let selected = self.select(&candidates);
        log.matched("executing", candidates.len(), selected.len());

        for (position, candidate) in selected.into_iter().enumerate() {
            log.invoking("executing", position);
            candidate
                .filter()
                .get()
                .on_action_executing(ctx, cancel)
                .await?;
        }

        Ok(())
    }

    async fn on_action_executed(
        &self,
        ctx: Option<&ActionExecutedContext>,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        let ctx = ctx.ok_or(Error::InvalidArgument {
            parameter: "action_executed_context",
        })?;
        let request = ctx.request();
        let log = DispatchLog::new(request.request_id(), &self.metadata);

        let candidates = request
            .scope()
            .resolve_action_filters(Capability::PostAction)
            .await;
        let selected = self.select(&candidates);
        log.matched("executed", candidates.len(), selected.len());

        for (position, candidate) in selected.into_iter().enumerate() {
            log.invoking("executed", position);
            candidate
                .filter()
                .get()
                .on_action_executed(ctx, cancel)
                .await?;
        }

        Ok(())
    }
}
