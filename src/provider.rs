//! Startup-time set of filter wrappers.

use std::collections::HashSet;
use std::sync::Arc;

use crate::candidate::{CandidateMetadata, MetadataSlot};
use crate::context::ActionDescriptor;
use crate::metadata::{FilterMetadata, FilterScope};
use crate::wrapper::FilterWrapper;

/// A wrapper selected for an action, with the scope it runs at.
#[derive(Debug, Clone)]
pub struct FilterInfo {
    wrapper: Arc<FilterWrapper>,
    scope: FilterScope,
}

impl FilterInfo {
    /// Returns the wrapper.
    pub fn wrapper(&self) -> &Arc<FilterWrapper> {
        &self.wrapper
    }

    /// Returns the scope the wrapper was registered at.
    pub fn scope(&self) -> FilterScope {
        self.scope
    }
}

/// Read-only set of wrappers built from registration metadata.
///
/// The host collects the metadata of every filter registered with its
/// container once at startup and hands it to [`FilterProvider::new`]. One
/// wrapper is created per distinct `(slot, fingerprint)` pair, since a
/// single wrapper already dispatches to every filter sharing its
/// fingerprint.
///
/// # Examples
///
/// ```
/// use scoped_filters::{ActionDescriptor, CandidateMetadata, FilterMetadata, FilterProvider, FilterScope, MethodId};
///
/// struct ValuesController;
/// let get = MethodId::register("get");
///
/// let provider = FilterProvider::new([
///     CandidateMetadata::action_filter(FilterMetadata::action::<ValuesController>(get)),
///     CandidateMetadata::action_filter(FilterMetadata::controller::<ValuesController>()),
///     CandidateMetadata::action_filter(FilterMetadata::controller::<ValuesController>()),
/// ]);
/// assert_eq!(provider.len(), 2);
///
/// let filters = provider.filters_for(&ActionDescriptor::of::<ValuesController>(get));
/// let scopes: Vec<_> = filters.iter().map(|f| f.scope()).collect();
/// assert_eq!(scopes, vec![FilterScope::Controller, FilterScope::Action]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterProvider {
    wrappers: Vec<Arc<FilterWrapper>>,
}

impl FilterProvider {
    /// Builds the wrapper set from registration metadata.
    pub fn new(registrations: impl IntoIterator<Item = CandidateMetadata>) -> Self {
        let mut seen: HashSet<(MetadataSlot, FilterMetadata)> = HashSet::new();
        let mut wrappers = Vec::new();

        for record in registrations {
            for (slot, metadata) in record.iter() {
                if seen.insert((slot, *metadata)) {
                    wrappers.push(Arc::new(FilterWrapper::for_slot(slot, *metadata)));
                }
            }
        }

        tracing::debug!(wrappers = wrappers.len(), "built action filter wrappers");
        Self { wrappers }
    }

    /// Returns the wrappers that apply to `action`, widest scope first.
    ///
    /// Global wrappers apply to every action and come first. Controller-scoped
    /// wrappers apply to every method of their controller; action-scoped
    /// wrappers only to their own method. Wrappers at the same scope keep
    /// registration order.
    pub fn filters_for(&self, action: &ActionDescriptor) -> Vec<FilterInfo> {
        let mut selected: Vec<FilterInfo> = self
            .wrappers
            .iter()
            .filter(|wrapper| applies_to(wrapper.metadata(), action))
            .map(|wrapper| FilterInfo {
                wrapper: Arc::clone(wrapper),
                scope: wrapper.metadata().scope(),
            })
            .collect();

        // Stable sort keeps registration order within a scope
        selected.sort_by_key(|info| info.scope);
        selected
    }

    /// Returns the number of wrappers.
    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    /// Returns `true` if no wrappers were built.
    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }
}

fn applies_to(metadata: &FilterMetadata, action: &ActionDescriptor) -> bool {
    // Global filters ignore the controller they were recorded against
    if let (FilterScope::Global, None) = (metadata.scope(), metadata.method()) {
        return true;
    }
    if metadata.controller_type() != action.controller_type() {
        return false;
    }

    match (metadata.scope(), metadata.method()) {
        (FilterScope::Controller, None) => true,
        (FilterScope::Action, Some(method)) => method == action.method(),
        _ => false,
    }
}
