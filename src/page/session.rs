// ABOUTME: Bounded in-memory store of page sessions keyed by cookie id
// ABOUTME: Evicts the least recently used page once capacity is reached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::PredictionPage;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;
use uuid::Uuid;

/// Page sessions with LRU eviction
///
/// Lookups promote the session. The lock only guards the map; each page has
/// its own state lock.
pub struct SessionStore {
    sessions: Mutex<LruCache<Uuid, PredictionPage>>,
}

impl SessionStore {
    /// Store holding at most `capacity` pages
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            sessions: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Page for `id`, if still held
    #[must_use]
    pub fn get(&self, id: &Uuid) -> Option<PredictionPage> {
        self.lock().get(id).cloned()
    }

    /// Start a new empty page
    #[must_use]
    pub fn create(&self) -> (Uuid, PredictionPage) {
        let id = Uuid::new_v4();
        let page = PredictionPage::new();
        if let Some((evicted, _)) = self.lock().push(id, page.clone()) {
            debug!(session = %evicted, "Evicted least recently used page session");
        }
        (id, page)
    }

    /// Page for the cookie id, or a fresh one when absent or unknown.
    ///
    /// The flag is true when a new session was created and the cookie must
    /// be set.
    #[must_use]
    pub fn resolve(&self, id: Option<Uuid>) -> (Uuid, PredictionPage, bool) {
        if let Some(id) = id {
            if let Some(page) = self.get(&id) {
                return (id, page, false);
            }
            debug!(session = %id, "Unknown page session, starting a new one");
        }
        let (id, page) = self.create();
        (id, page, true)
    }

    /// Number of held sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no session is held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<Uuid, PredictionPage>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
