// fold over a Dict
//
// contract:
// - the caller always supplies the initial accumulator, an empty dict returns it as is
// - values are folded in natural key order
// - the index is the key's position among all keys (same as map)
// - absent slots are skipped and never reach the accumulator
use tracing::debug;

use crate::core::dict::Dict;

impl<T> Dict<T> {
    /// Fold every present value into `init`, in natural key order.
    pub fn reduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &T, usize) -> A,
    {
        let mut acc = init;
        let mut skipped = 0usize;

        for (idx, slot) in self.slots.values().enumerate() {
            match slot {
                Some(v) => acc = f(acc, v, idx),
                None => skipped += 1,
            }
        }

        debug!(keys = self.len(), skipped, "reduced dict");
        acc
    }

    /// Fallible [`Dict::reduce`]; the first error from `f` is returned unchanged.
    pub fn try_reduce<A, E, F>(&self, init: A, mut f: F) -> Result<A, E>
    where
        F: FnMut(A, &T, usize) -> Result<A, E>,
    {
        let mut acc = init;
        let mut skipped = 0usize;

        for (idx, slot) in self.slots.values().enumerate() {
            match slot {
                Some(v) => acc = f(acc, v, idx)?,
                None => skipped += 1,
            }
        }

        debug!(keys = self.len(), skipped, "reduced dict");
        Ok(acc)
    }
}

/// `Array.prototype.reduce`, but for a [`Dict`].
pub fn reduce_dict<T, A, F>(dict: &Dict<T>, init: A, f: F) -> A
where
    F: FnMut(A, &T, usize) -> A,
{
    dict.reduce(init, f)
}

/// Fallible [`reduce_dict`].
pub fn try_reduce_dict<T, A, E, F>(dict: &Dict<T>, init: A, f: F) -> Result<A, E>
where
    F: FnMut(A, &T, usize) -> Result<A, E>,
{
    dict.try_reduce(init, f)
}
