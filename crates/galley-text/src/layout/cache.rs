//! Memoization of wrapped paragraphs.
//!
//! The cache is an explicit object owned by the caller, not ambient process
//! state. Callers that share one across threads bring their own lock; the
//! engine itself only needs `&mut` access around a wrap call.

use std::sync::Arc;

use hashbrown::HashMap;

use crate::layout::Align;
use crate::layout::wrap::Word;

/// Every input that determines a layout. Two wraps with equal parameters
/// must produce byte-identical word lists, which is what makes this a
/// sound cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WrapParams {
    pub text: String,
    /// Identity of the glyph-metrics provider.
    pub font_id: u32,
    pub space: i32,
    pub wrap_width: i32,
    pub tab_width: i32,
    pub line_height: i32,
    pub paragraph_break: i32,
    pub alignment: Align,
}

/// A memoized layout result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheData {
    pub words: Vec<Word>,
    pub height: i32,
}

#[derive(Debug)]
struct Entry {
    data: Arc<CacheData>,
    last_used: u64,
}

/// Bounded key/value store for layout results.
///
/// Capacity is enforced on insert by evicting the least recently used
/// entry. Independently, [`advance`](Self::advance) ticks a generation
/// counter; every `refresh_interval` generations, entries that went unused
/// for a whole interval are dropped.
#[derive(Debug)]
pub struct LayoutCache {
    entries: HashMap<WrapParams, Entry>,
    capacity: usize,
    refresh_interval: u64,
    generation: u64,
}

impl LayoutCache {
    pub const DEFAULT_CAPACITY: usize = 128;
    pub const DEFAULT_REFRESH_INTERVAL: u64 = 60;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            refresh_interval: Self::DEFAULT_REFRESH_INTERVAL,
            generation: 0,
        }
    }

    /// Generations between expiry sweeps; also how long an entry may sit
    /// unused before a sweep drops it.
    pub fn set_refresh_interval(&mut self, interval: u64) {
        self.refresh_interval = interval.max(1);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&mut self, params: &WrapParams) -> Option<Arc<CacheData>> {
        let generation = self.generation;
        match self.entries.get_mut(params) {
            Some(entry) => {
                entry.last_used = generation;
                log::trace!("layout cache hit ({} bytes)", params.text.len());
                Some(entry.data.clone())
            }
            None => {
                log::trace!("layout cache miss ({} bytes)", params.text.len());
                None
            }
        }
    }

    pub fn put(&mut self, params: WrapParams, data: Arc<CacheData>) {
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&params) {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(key, _)| key.clone());
            if let Some(key) = oldest {
                self.entries.remove(&key);
            }
        }
        self.entries.insert(
            params,
            Entry {
                data,
                last_used: self.generation,
            },
        );
    }

    /// Tick the generation counter, sweeping stale entries once per
    /// interval.
    pub fn advance(&mut self) {
        self.generation += 1;
        if self.generation % self.refresh_interval == 0 {
            let horizon = self.generation.saturating_sub(self.refresh_interval);
            let before = self.entries.len();
            self.entries.retain(|_, entry| entry.last_used >= horizon);
            let expired = before - self.entries.len();
            if expired > 0 {
                log::trace!("layout cache expired {expired} entries");
            }
        }
    }
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(text: &str) -> WrapParams {
        WrapParams {
            text: text.to_string(),
            font_id: 1,
            space: 10,
            wrap_width: 100,
            tab_width: 40,
            line_height: 12,
            paragraph_break: 4,
            alignment: Align::Justified,
        }
    }

    fn data(height: i32) -> Arc<CacheData> {
        Arc::new(CacheData {
            words: Vec::new(),
            height,
        })
    }

    #[test]
    fn round_trips_by_value_equality() {
        let mut cache = LayoutCache::new();
        assert!(cache.get(&params("a")).is_none());
        cache.put(params("a"), data(12));
        assert_eq!(cache.get(&params("a")).unwrap().height, 12);
        // Any differing parameter is a different key.
        let mut other = params("a");
        other.wrap_width = 99;
        assert!(cache.get(&other).is_none());
    }

    #[test]
    fn capacity_evicts_least_recently_used() {
        let mut cache = LayoutCache::with_capacity(2);
        cache.put(params("a"), data(1));
        cache.advance();
        cache.put(params("b"), data(2));
        cache.advance();
        // Touch "a" so "b" is now the oldest.
        cache.get(&params("a"));
        cache.put(params("c"), data(3));
        assert_eq!(cache.len(), 2);
        assert!(cache.get(&params("a")).is_some());
        assert!(cache.get(&params("b")).is_none());
        assert!(cache.get(&params("c")).is_some());
    }

    #[test]
    fn refresh_interval_expires_untouched_entries() {
        let mut cache = LayoutCache::new();
        cache.set_refresh_interval(4);
        cache.put(params("old"), data(1));
        cache.advance();
        cache.advance();
        cache.put(params("young"), data(2));
        // Keep "young" warm through the sweeps; "old" goes stale.
        for _ in 0..6 {
            cache.get(&params("young"));
            cache.advance();
        }
        assert!(cache.get(&params("old")).is_none());
        assert!(cache.get(&params("young")).is_some());
    }

    #[test]
    fn reinsert_updates_in_place_at_capacity() {
        let mut cache = LayoutCache::with_capacity(1);
        cache.put(params("a"), data(1));
        cache.put(params("a"), data(2));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&params("a")).unwrap().height, 2);
    }
}
