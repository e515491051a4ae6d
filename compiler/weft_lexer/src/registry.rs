//! Language registry: descriptor cache and embedding lookup.
//!
//! The registry loads [`LanguageDescriptor`]s from a [`LanguageSource`] on
//! first use and caches them by mime type. The source notifies subscribers
//! when a definition changes; the registry subscribes on construction,
//! drops the stale entry on each notification, and unsubscribes on drop.
//!
//! # Concurrency
//!
//! The cache is read-mostly. Descriptors are built outside any lock and are
//! never mutated once cached; an invalidation replaces the entry instead. A
//! load that overlaps an invalidation still returns its descriptor but does
//! not cache it, so a stale definition is never pinned.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::definition::LanguageDefinition;
use crate::descriptor::LanguageDescriptor;
use crate::error::DefinitionError;
use crate::token::Token;

/// Callback invoked with the mime type of a changed definition.
pub type ChangeListener = Arc<dyn Fn(&str) + Send + Sync>;

/// Handle returned by [`LanguageSource::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owner of language definitions.
pub trait LanguageSource: Send + Sync {
    /// The current definition for `mime_type`.
    fn definition(&self, mime_type: &str) -> Result<LanguageDefinition, DefinitionError>;

    /// Register `listener` for change notifications.
    fn subscribe(&self, listener: ChangeListener) -> SubscriptionId;

    /// Remove a listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Subscription list for [`LanguageSource`] implementations.
///
/// Listeners are called outside the lock, so a listener may subscribe or
/// unsubscribe without deadlocking.
#[derive(Default)]
pub struct Listeners {
    next_id: AtomicU64,
    entries: Mutex<Vec<(SubscriptionId, ChangeListener)>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: ChangeListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries.lock().push((id, listener));
        debug!(id = id.0, "subscribed to language changes");
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.entries.lock().retain(|(entry, _)| *entry != id);
        debug!(id = id.0, "unsubscribed from language changes");
    }

    /// Call every listener registered at the time of the call.
    pub fn notify(&self, mime_type: &str) {
        let snapshot: Vec<ChangeListener> = self
            .entries
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(mime_type);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// A [`LanguageSource`] backed by an in-memory map.
#[derive(Debug, Default)]
pub struct InMemoryLanguageSource {
    definitions: RwLock<FxHashMap<String, LanguageDefinition>>,
    listeners: Listeners,
}

impl InMemoryLanguageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a definition and notify subscribers.
    pub fn define(&self, definition: LanguageDefinition) {
        let mime_type = definition.mime_type.clone();
        self.definitions.write().insert(mime_type.clone(), definition);
        self.listeners.notify(&mime_type);
    }

    /// Remove a definition, notifying subscribers if it existed.
    pub fn remove(&self, mime_type: &str) -> bool {
        let removed = self.definitions.write().remove(mime_type).is_some();
        if removed {
            self.listeners.notify(mime_type);
        }
        removed
    }

    /// Defined mime types, sorted.
    pub fn mime_types(&self) -> Vec<String> {
        let mut names: Vec<String> = self.definitions.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }
}

impl LanguageSource for InMemoryLanguageSource {
    fn definition(&self, mime_type: &str) -> Result<LanguageDefinition, DefinitionError> {
        self.definitions
            .read()
            .get(mime_type)
            .cloned()
            .ok_or_else(|| DefinitionError::UnknownLanguage(mime_type.to_owned()))
    }

    fn subscribe(&self, listener: ChangeListener) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.unsubscribe(id);
    }
}

/// Cached descriptors, shared with the change listener.
#[derive(Default)]
struct DescriptorCache {
    descriptors: RwLock<FxHashMap<String, Arc<LanguageDescriptor>>>,
    /// Bumped under the write lock on every invalidation.
    generation: AtomicU64,
}

impl DescriptorCache {
    fn invalidate(&self, mime_type: &str) {
        let mut descriptors = self.descriptors.write();
        descriptors.remove(mime_type);
        self.generation.fetch_add(1, Ordering::AcqRel);
        debug!(language = mime_type, "invalidated language descriptor");
    }
}

/// An inner language mounted over part of an outer token.
#[derive(Clone, Debug)]
pub struct Embedding {
    pub language: Arc<LanguageDescriptor>,
    /// Delimiter characters to strip from the token's start.
    pub start_skip: u32,
    /// Delimiter characters to strip from the token's end.
    pub end_skip: u32,
}

impl Embedding {
    /// The embedded sub-range of `token`, delimiters stripped.
    pub fn range(&self, token: &Token) -> (u32, u32) {
        (token.start + self.start_skip, token.end - self.end_skip)
    }
}

/// Descriptor cache over a [`LanguageSource`].
pub struct LanguageRegistry {
    source: Arc<dyn LanguageSource>,
    cache: Arc<DescriptorCache>,
    subscription: SubscriptionId,
}

impl LanguageRegistry {
    /// Create a registry and subscribe it to `source`'s change notifications.
    pub fn new(source: Arc<dyn LanguageSource>) -> Self {
        let cache = Arc::new(DescriptorCache::default());
        let listener_cache = Arc::clone(&cache);
        let subscription =
            source.subscribe(Arc::new(move |mime_type: &str| listener_cache.invalidate(mime_type)));
        Self {
            source,
            cache,
            subscription,
        }
    }

    /// The descriptor for `mime_type`, loading it on first use.
    pub fn load(&self, mime_type: &str) -> Result<Arc<LanguageDescriptor>, DefinitionError> {
        if let Some(descriptor) = self.cache.descriptors.read().get(mime_type) {
            debug!(language = mime_type, "language descriptor cache hit");
            return Ok(Arc::clone(descriptor));
        }

        let generation = self.cache.generation.load(Ordering::Acquire);
        let definition = self.source.definition(mime_type)?;
        let descriptor = Arc::new(LanguageDescriptor::build(definition)?);

        let mut descriptors = self.cache.descriptors.write();
        if self.cache.generation.load(Ordering::Acquire) != generation {
            debug!(
                language = mime_type,
                "definition changed during load, not caching"
            );
            return Ok(descriptor);
        }
        let cached = descriptors
            .entry(mime_type.to_owned())
            .or_insert(descriptor);
        Ok(Arc::clone(cached))
    }

    /// Like [`load`](Self::load), but logs the failure and returns `None`.
    pub fn descriptor(&self, mime_type: &str) -> Option<Arc<LanguageDescriptor>> {
        match self.load(mime_type) {
            Ok(descriptor) => Some(descriptor),
            Err(err) => {
                warn!(language = mime_type, error = %err, "no language descriptor");
                None
            }
        }
    }

    /// Drop any cached descriptor for `mime_type`.
    pub fn invalidate(&self, mime_type: &str) {
        self.cache.invalidate(mime_type);
    }

    pub fn is_cached(&self, mime_type: &str) -> bool {
        self.cache.descriptors.read().contains_key(mime_type)
    }

    /// The inner language embedded by `token`, if any.
    ///
    /// `language_path` lists the enclosing languages from outermost to the
    /// token's own language, which comes last. Injected segments resolve
    /// through that language's preprocessor import; any other token through
    /// its token imports. Every failure, including an inner language that
    /// cannot be loaded, is reported as no embedding.
    pub fn find_embedding(&self, token: &Token, language_path: &[&str]) -> Option<Embedding> {
        let outer = self.descriptor(language_path.last()?)?;

        let inner_mime_type = if token.is_injected() {
            let import = outer.preprocessor_import()?;
            if import.rule.ty != token.ty {
                return None;
            }
            import.inner_mime_type.as_str()
        } else {
            outer.token_import(token.ty)?
        };

        let skip = token.properties.skip.unwrap_or_default();
        if skip.start + skip.end > token.len() {
            debug!(
                start = token.start,
                end = token.end,
                "embedding delimiters exceed token"
            );
            return None;
        }

        let language = self.descriptor(inner_mime_type)?;
        Some(Embedding {
            language,
            start_skip: skip.start,
            end_skip: skip.end,
        })
    }
}

impl Drop for LanguageRegistry {
    fn drop(&mut self) {
        self.source.unsubscribe(self.subscription);
    }
}

impl std::fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageRegistry")
            .field("cached", &self.cache.descriptors.read().len())
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}
