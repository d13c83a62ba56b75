// map transform over a Dict
use tracing::debug;

use crate::core::dict::Dict;

impl<T> Dict<T> {
    /// Apply `f` to every present value, keeping its key.
    ///
    /// Keys are visited in natural order and `f` receives the key's zero-based
    /// position among *all* keys, so an absent slot still consumes an index.
    /// Absent slots produce no entry in the output. `self` is left untouched.
    pub fn map<S, F>(&self, mut f: F) -> Dict<S>
    where
        F: FnMut(&T, usize) -> S,
    {
        let mut out = Dict::new();
        let mut skipped = 0usize;

        for (idx, (key, slot)) in self.slots.iter().enumerate() {
            match slot {
                Some(v) => {
                    out.slots.insert(key.clone(), Some(f(v, idx)));
                }
                None => skipped += 1,
            }
        }

        debug!(keys = self.len(), mapped = out.len(), skipped, "mapped dict");
        out
    }

    /// Like [`Dict::map`], but stops at the first error from `f` and returns it.
    pub fn try_map<S, E, F>(&self, mut f: F) -> Result<Dict<S>, E>
    where
        F: FnMut(&T, usize) -> Result<S, E>,
    {
        let mut out = Dict::new();
        let mut skipped = 0usize;

        for (idx, (key, slot)) in self.slots.iter().enumerate() {
            match slot {
                Some(v) => {
                    out.slots.insert(key.clone(), Some(f(v, idx)?));
                }
                None => skipped += 1,
            }
        }

        debug!(keys = self.len(), mapped = out.len(), skipped, "mapped dict");
        Ok(out)
    }
}

/// `Array.prototype.map`, but for a [`Dict`].
pub fn map_dict<T, S, F>(dict: &Dict<T>, f: F) -> Dict<S>
where
    F: FnMut(&T, usize) -> S,
{
    dict.map(f)
}

/// Fallible [`map_dict`].
pub fn try_map_dict<T, S, E, F>(dict: &Dict<T>, f: F) -> Result<Dict<S>, E>
where
    F: FnMut(&T, usize) -> Result<S, E>,
{
    dict.try_map(f)
}
