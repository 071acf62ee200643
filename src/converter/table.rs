use std::hash::Hash;

use indexmap::{map::Entry, IndexMap};

/// A table keyed by `(K, i32, i32)` that answers lookups with the
/// nearest sampled key, one key level at a time.
///
/// Entries live in a single map on the composite key; `index` mirrors
/// the three key levels, in insertion order, to find nearest keys.
pub(crate) struct NearestMap<K, V> {
    entries: IndexMap<(K, i32, i32), V>,
    index: IndexMap<K, IndexMap<i32, Vec<i32>>>,
}

impl<K, V> NearestMap<K, V>
where K: Clone + Eq + Hash {
    pub(crate) fn new() -> Self {
        NearestMap { entries: IndexMap::new(), index: IndexMap::new() }
    }

    /// Add an entry.  Return `false` (and keep the previous entry) if
    /// the key is already present.
    pub(crate) fn insert(&mut self, k0: K, k1: i32, k2: i32, v: V) -> bool {
        match self.entries.entry((k0.clone(), k1, k2)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(v);
                self.index.entry(k0).or_default()
                    .entry(k1).or_default()
                    .push(k2);
                true
            }
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// First level keys, in insertion order.
    pub(crate) fn keys(&self) -> impl Iterator<Item = &K> + Clone {
        self.index.keys()
    }

    #[inline]
    pub(crate) fn contains_key(&self, k0: &K) -> bool {
        self.index.contains_key(k0)
    }

    /// Second level keys under `k0`, each with its third level keys,
    /// all in insertion order.
    pub(crate) fn levels(&self, k0: &K)
                         -> Option<impl Iterator<Item = (i32, &[i32])>> {
        let level = self.index.get(k0)?;
        Some(level.iter().map(|(&k1, k2s)| (k1, k2s.as_slice())))
    }

    /// Return the entry under the first level key `k0` whose second
    /// and third keys are the nearest to `k1` and `k2`.
    pub(crate) fn lookup(&self, k0: &K, k1: f32, k2: f32) -> Option<&V> {
        let level = self.index.get(k0)?;
        let k1 = nearest(level.keys().copied(), k1)?;
        let k2 = nearest(level.get(&k1)?.iter().copied(), k2)?;
        self.entries.get(&(k0.clone(), k1, k2))
    }
}

/// Return the key equal to the truncation of `wanted` if there is
/// one, otherwise the key closest to `wanted`.  On ties, the earliest
/// key wins.
pub(crate) fn nearest<I>(keys: I, wanted: f32) -> Option<i32>
where I: Iterator<Item = i32> + Clone {
    let exact = wanted as i32;
    if keys.clone().any(|k| k == exact) {
        return Some(exact)
    }
    keys.fold(None, |best, k| match best {
        Some(b) if (wanted - b as f32).abs() <= (wanted - k as f32).abs()
            => Some(b),
        _ => Some(k),
    })
}
