// string-keyed container of optional values
use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DictError {
    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("key {0} has no value")]
    ValueAbsent(String),

    #[error("failed to decode dict: {source}")]
    Decode {
        #[source]
        source: toon_format::ToonError,
    },

    #[error("failed to encode dict: {source}")]
    Encode {
        #[source]
        source: toon_format::ToonError,
    },
}

/// Mapping from string keys to optional values of one element type.
///
/// A key can hold an absent slot (`None`), which is distinct from the key not
/// being there at all. Enumeration is in ascending key order, and that order
/// defines the index handed to [`Dict::map`] and [`Dict::reduce`] callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dict<T> {
    pub(crate) slots: BTreeMap<String, Option<T>>,
}

impl<T> Default for Dict<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Dict<T> {
    pub fn new() -> Self {
        Self { slots: BTreeMap::new() }
    }

    /// Build from `(key, slot)` pairs, absent slots included.
    pub fn from_slots<K, I>(slots: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Option<T>)>,
    {
        Self {
            slots: slots.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    //returns the previous slot if the key was already there
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<Option<T>> {
        self.slots.insert(key.into(), Some(value))
    }

    pub fn insert_absent(&mut self, key: impl Into<String>) -> Option<Option<T>> {
        self.slots.insert(key.into(), None)
    }

    pub fn remove(&mut self, key: &str) -> Option<Option<T>> {
        self.slots.remove(key)
    }

    //None for both missing keys and absent slots, use contains_key to tell them apart
    pub fn get(&self, key: &str) -> Option<&T> {
        self.slots.get(key).and_then(Option::as_ref)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    pub fn is_present(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Look up a value that must be present.
    pub fn require(&self, key: &str) -> Result<&T, DictError> {
        match self.slots.get(key) {
            None => Err(DictError::KeyNotFound(key.to_string())),
            Some(None) => Err(DictError::ValueAbsent(key.to_string())),
            Some(Some(v)) => Ok(v),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn present_len(&self) -> usize {
        self.slots.values().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.keys().map(String::as_str)
    }

    //every slot in natural order, absent ones included
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&T>)> + '_ {
        self.slots.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn iter_present(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.slots
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.as_str(), v)))
    }

    pub fn into_inner(self) -> BTreeMap<String, Option<T>> {
        self.slots
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Dict<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self::from_slots(iter.into_iter().map(|(k, v)| (k, Some(v))))
    }
}

impl<T> From<BTreeMap<String, Option<T>>> for Dict<T> {
    fn from(slots: BTreeMap<String, Option<T>>) -> Self {
        Self { slots }
    }
}

impl<T> IntoIterator for Dict<T> {
    type Item = (String, Option<T>);
    type IntoIter = btree_map::IntoIter<String, Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_dict() -> Dict<i32> {
        Dict::from_slots([("b", Some(2)), ("a", Some(1)), ("gone", None)])
    }

    #[test]
    fn get_hides_absent_slots_but_contains_key_sees_them() {
        let d = mk_dict();

        assert_eq!(d.get("a"), Some(&1));
        assert_eq!(d.get("gone"), None);
        assert_eq!(d.get("nope"), None);

        assert!(d.contains_key("gone"));
        assert!(!d.is_present("gone"));
        assert!(!d.contains_key("nope"));

        assert_eq!(d.len(), 3);
        assert_eq!(d.present_len(), 2);
    }

    #[test]
    fn require_distinguishes_missing_from_absent() {
        let d = mk_dict();

        assert_eq!(d.require("b").unwrap(), &2);

        let err = d.require("gone").unwrap_err();
        assert!(matches!(err, DictError::ValueAbsent(ref k) if k == "gone"));

        let err = d.require("nope").unwrap_err();
        match err {
            DictError::KeyNotFound(k) => assert_eq!(k, "nope"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn keys_enumerate_in_ascending_order() {
        let d = mk_dict();
        let keys: Vec<&str> = d.keys().collect();
        assert_eq!(keys, vec!["a", "b", "gone"]);

        let present: Vec<(&str, &i32)> = d.iter_present().collect();
        assert_eq!(present, vec![("a", &1), ("b", &2)]);
    }

    #[test]
    fn insert_replaces_and_returns_previous_slot() {
        let mut d: Dict<i32> = Dict::new();
        assert!(d.is_empty());

        assert_eq!(d.insert("a", 1), None);
        assert_eq!(d.insert_absent("a"), Some(Some(1)));
        assert_eq!(d.insert("a", 3), Some(None));
        assert_eq!(d.remove("a"), Some(Some(3)));
        assert!(d.is_empty());
    }

    #[test]
    fn serde_shape_is_a_plain_map_with_null_for_absent() {
        let d = mk_dict();
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json, serde_json::json!({"a": 1, "b": 2, "gone": null}));

        let back: Dict<i32> = serde_json::from_value(json).unwrap();
        assert_eq!(back, d);
    }
}
