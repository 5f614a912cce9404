//! Per-label cache of marshalled item lists for list-style widgets
//! (combo boxes, list boxes).
//!
//! An entry is rebuilt whenever the caller passes a different item list
//! allocation than last time. Content is never compared. Entries not
//! touched during a frame are evicted at the following frame boundary.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

#[derive(Debug)]
struct CacheEntry<H> {
    items: Arc<[String]>,
    handles: H,
    touched: bool,
}

impl<H> CacheEntry<H> {
    fn build(items: &Arc<[String]>, build: impl FnOnce(&[String]) -> H) -> Self {
        Self {
            items: Arc::clone(items),
            handles: build(items),
            touched: false,
        }
    }
}

#[derive(Debug)]
pub struct LabelCache<H> {
    entries: HashMap<String, CacheEntry<H>>,
}

impl<H> Default for LabelCache<H> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<H> LabelCache<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handles for `label`, rebuilding them with `build` if `items`
    /// is not the same allocation that was cached. Marks the entry touched.
    pub fn get_or_build(
        &mut self,
        label: &str,
        items: &Arc<[String]>,
        build: impl FnOnce(&[String]) -> H,
    ) -> &H {
        let entry = match self.entries.entry(label.to_owned()) {
            Entry::Occupied(occupied) => {
                let entry = occupied.into_mut();
                if !Arc::ptr_eq(&entry.items, items) {
                    *entry = CacheEntry::build(items, build);
                }
                entry
            }
            Entry::Vacant(vacant) => vacant.insert(CacheEntry::build(items, build)),
        };

        entry.touched = true;
        &entry.handles
    }

    /// Frame boundary: evicts untouched entries and clears the touched flag on the rest.
    pub fn end_frame(&mut self) {
        self.entries.retain(|_, entry| {
            let keep = entry.touched;
            entry.touched = false;
            keep
        });
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Arc<[String]> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    fn upper(items: &[String]) -> Vec<String> {
        items.iter().map(|s| s.to_uppercase()).collect()
    }

    #[test]
    fn same_allocation_does_not_rebuild() {
        let mut cache = LabelCache::new();
        let list = items(&["a", "b"]);
        let mut builds = 0;

        cache.get_or_build("mode", &list, |i| {
            builds += 1;
            upper(i)
        });
        let handles = cache.get_or_build("mode", &list, |i| {
            builds += 1;
            upper(i)
        });

        assert_eq!(handles, &vec!["A".to_owned(), "B".to_owned()]);
        assert_eq!(builds, 1);
    }

    #[test]
    fn equal_content_in_new_allocation_rebuilds() {
        let mut cache = LabelCache::new();
        let mut builds = 0;

        cache.get_or_build("mode", &items(&["a"]), |i| {
            builds += 1;
            upper(i)
        });
        cache.get_or_build("mode", &items(&["a"]), |i| {
            builds += 1;
            upper(i)
        });

        assert_eq!(builds, 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn access_in_later_frame_keeps_entry() {
        let mut cache = LabelCache::new();
        let list = items(&["a"]);

        cache.get_or_build("mode", &list, upper);
        cache.end_frame();
        cache.get_or_build("mode", &list, upper);
        cache.end_frame();

        assert!(cache.contains("mode"));
    }

    #[test]
    fn label_skipped_for_a_frame_is_evicted() {
        let mut cache = LabelCache::new();
        let list = items(&["a"]);

        cache.get_or_build("mode", &list, upper);
        cache.get_or_build("shading", &list, upper);
        cache.end_frame();

        cache.get_or_build("mode", &list, upper);
        cache.end_frame();

        assert!(cache.contains("mode"));
        assert!(!cache.contains("shading"));
    }

    #[test]
    fn entry_built_this_frame_survives_the_boundary() {
        let mut cache = LabelCache::new();

        cache.get_or_build("mode", &items(&["a"]), upper);
        cache.end_frame();

        assert_eq!(cache.len(), 1);

        cache.end_frame();
        assert!(cache.is_empty());
    }
}
