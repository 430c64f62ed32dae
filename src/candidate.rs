//! Per-request filter candidates produced by a resolution scope.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::metadata::FilterMetadata;

/// Typed position in a candidate's metadata record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataSlot {
    /// Metadata of an ordinary action filter registration
    ActionFilter,
    /// Metadata of an action filter registered as an override of
    /// lower-scoped action filters
    ActionFilterOverride,
}

/// Metadata attached to a candidate by its registration.
///
/// Each slot holds at most one [`FilterMetadata`]. A registration may fill
/// several slots; a wrapper only ever reads its own.
///
/// # Examples
///
/// ```
/// use scoped_filters::{CandidateMetadata, FilterMetadata, MetadataSlot};
///
/// struct ValuesController;
///
/// let meta = CandidateMetadata::new()
///     .with(MetadataSlot::ActionFilter, FilterMetadata::controller::<ValuesController>());
///
/// assert!(meta.get(MetadataSlot::ActionFilter).is_some());
/// assert!(meta.get(MetadataSlot::ActionFilterOverride).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateMetadata {
    action_filter: Option<FilterMetadata>,
    action_filter_override: Option<FilterMetadata>,
}

impl CandidateMetadata {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a record with only the [`MetadataSlot::ActionFilter`] slot set.
    pub fn action_filter(metadata: FilterMetadata) -> Self {
        Self::new().with(MetadataSlot::ActionFilter, metadata)
    }

    /// Shorthand for a record with only the [`MetadataSlot::ActionFilterOverride`] slot set.
    pub fn action_filter_override(metadata: FilterMetadata) -> Self {
        Self::new().with(MetadataSlot::ActionFilterOverride, metadata)
    }

    /// Sets `slot`, replacing any previous value.
    pub fn with(mut self, slot: MetadataSlot, metadata: FilterMetadata) -> Self {
        *self.slot_mut(slot) = Some(metadata);
        self
    }

    /// Returns the metadata stored in `slot`, if any.
    pub fn get(&self, slot: MetadataSlot) -> Option<&FilterMetadata> {
        match slot {
            MetadataSlot::ActionFilter => self.action_filter.as_ref(),
            MetadataSlot::ActionFilterOverride => self.action_filter_override.as_ref(),
        }
    }

    /// Iterates over the filled slots.
    pub fn iter(&self) -> impl Iterator<Item = (MetadataSlot, &FilterMetadata)> {
        [MetadataSlot::ActionFilter, MetadataSlot::ActionFilterOverride]
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|meta| (slot, meta)))
    }

    fn slot_mut(&mut self, slot: MetadataSlot) -> &mut Option<FilterMetadata> {
        match slot {
            MetadataSlot::ActionFilter => &mut self.action_filter,
            MetadataSlot::ActionFilterOverride => &mut self.action_filter_override,
        }
    }
}

type Factory<F> = Box<dyn Fn() -> Arc<F> + Send + Sync>;

/// Deferred-construction handle for a filter instance.
///
/// The factory runs at most once, on the first call to [`LazyFilter::get`].
/// Candidates rejected by a wrapper are never constructed.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use scoped_filters::LazyFilter;
///
/// let lazy = LazyFilter::new(|| Arc::new(String::from("audit")));
/// assert!(!lazy.is_constructed());
///
/// assert_eq!(lazy.get().as_str(), "audit");
/// assert!(lazy.is_constructed());
/// ```
pub struct LazyFilter<F: ?Sized> {
    factory: Factory<F>,
    instance: OnceLock<Arc<F>>,
}

impl<F: ?Sized> LazyFilter<F> {
    /// Creates a handle that will build its instance with `factory`.
    pub fn new(factory: impl Fn() -> Arc<F> + Send + Sync + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            instance: OnceLock::new(),
        }
    }

    /// Creates a handle around an instance that already exists.
    pub fn ready(instance: Arc<F>) -> Self
    where
        F: Send + Sync + 'static,
    {
        Self {
            instance: OnceLock::from(Arc::clone(&instance)),
            factory: Box::new(move || Arc::clone(&instance)),
        }
    }

    /// Returns the instance, constructing it on first access.
    pub fn get(&self) -> Arc<F> {
        Arc::clone(self.instance.get_or_init(|| (self.factory)()))
    }

    /// Returns `true` once the instance has been constructed.
    pub fn is_constructed(&self) -> bool {
        self.instance.get().is_some()
    }
}

impl<F: ?Sized> fmt::Debug for LazyFilter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyFilter")
            .field("constructed", &self.is_constructed())
            .finish()
    }
}

/// A registered filter paired with its registration metadata.
///
/// Produced fresh for each request by a
/// [`ResolutionScope`](crate::ResolutionScope) and dropped with it.
#[derive(Debug)]
pub struct FilterCandidate<F: ?Sized> {
    filter: LazyFilter<F>,
    metadata: CandidateMetadata,
}

impl<F: ?Sized> FilterCandidate<F> {
    /// Pairs a deferred filter with its metadata.
    pub fn new(filter: LazyFilter<F>, metadata: CandidateMetadata) -> Self {
        Self { filter, metadata }
    }

    /// Returns the deferred filter handle.
    pub fn filter(&self) -> &LazyFilter<F> {
        &self.filter
    }

    /// Returns the registration metadata.
    pub fn metadata(&self) -> &CandidateMetadata {
        &self.metadata
    }
}
