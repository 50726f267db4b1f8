//! Property bags and dotted property paths
//!
//! A [`PropertyBag`] is the live property state of the selected component.
//! Dotted schema keys such as `animationConfig.splitBy` address a leaf inside
//! a nested object stored under the top-level key (`animationConfig`).
//! Writes through a dotted path merge into the existing nested object so
//! sibling keys survive.

use std::fmt;

use crate::value::{PropMap, PropValue};

/// A property name, possibly dotted (`a.b.c`)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropPath {
    raw: String,
}

impl PropPath {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.split('.')
    }

    /// First segment, the key stored at the top level of the bag
    pub fn root(&self) -> &str {
        self.raw.split('.').next().unwrap_or(&self.raw)
    }

    pub fn is_nested(&self) -> bool {
        self.raw.contains('.')
    }
}

impl fmt::Display for PropPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for PropPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for PropPath {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Live property state of one component instance
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyBag {
    props: PropMap,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    /// Insert or replace a top-level value, returning the previous one
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        self.props.insert(key.into(), value.into())
    }

    /// Remove a top-level value, keeping the order of the remaining keys
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.props.shift_remove(key)
    }

    /// Whether `key` holds something other than `Unset`
    pub fn is_set(&self, key: &str) -> bool {
        self.props.get(key).is_some_and(|v| !v.is_unset())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn as_map(&self) -> &PropMap {
        &self.props
    }

    /// Read through a dotted path.
    ///
    /// Returns `None` when any segment is missing or an intermediate value is
    /// not a nested object.
    pub fn get_path(&self, path: &PropPath) -> Option<&PropValue> {
        let mut segments = path.segments();
        let mut current = self.props.get(segments.next()?)?;
        for segment in segments {
            current = current.as_nested()?.get(segment)?;
        }
        Some(current)
    }

    /// Write through a dotted path.
    ///
    /// The leaf is merged into a copy of the existing nested object(s); only
    /// the addressed key changes. A missing or non-object intermediate is
    /// replaced with a fresh object containing just the new leaf.
    pub fn set_path(&mut self, path: &PropPath, value: PropValue) {
        let segments: Vec<&str> = path.segments().collect();
        match segments.split_first() {
            Some((root, [])) => {
                self.props.insert((*root).to_string(), value);
            }
            Some((root, rest)) => {
                let merged = merge_into(self.props.get(*root), rest, value);
                self.props.insert((*root).to_string(), merged);
            }
            None => {}
        }
    }
}

fn merge_into(existing: Option<&PropValue>, path: &[&str], value: PropValue) -> PropValue {
    let Some((head, rest)) = path.split_first() else {
        return value;
    };
    let mut map = match existing {
        Some(PropValue::Nested(map)) => map.clone(),
        _ => PropMap::new(),
    };
    let child = merge_into(map.get(*head), rest, value);
    map.insert((*head).to_string(), child);
    PropValue::Nested(map)
}

impl From<PropMap> for PropertyBag {
    fn from(props: PropMap) -> Self {
        Self { props }
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            props: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animated() -> PropertyBag {
        PropertyBag::new().with("animation", "split").with(
            "animationConfig",
            PropValue::nested([("splitBy", "words"), ("direction", "top")]),
        )
    }

    #[test]
    fn test_path_segments() {
        let path = PropPath::from("animationConfig.splitBy");
        assert!(path.is_nested());
        assert_eq!(path.root(), "animationConfig");
        assert_eq!(path.segments().collect::<Vec<_>>(), ["animationConfig", "splitBy"]);
        assert!(!PropPath::from("color").is_nested());
    }

    #[test]
    fn test_get_path() {
        let bag = animated();
        assert_eq!(
            bag.get_path(&"animationConfig.splitBy".into()),
            Some(&PropValue::from("words"))
        );
        assert_eq!(bag.get_path(&"animationConfig.missing".into()), None);
        // Intermediate that is not an object
        assert_eq!(bag.get_path(&"animation.speed".into()), None);
        assert_eq!(bag.get_path(&"nothing.here".into()), None);
    }

    #[test]
    fn test_set_path_merges_siblings() {
        let mut bag = animated();
        bag.set_path(&"animationConfig.direction".into(), "bottom".into());
        assert_eq!(
            bag.get("animationConfig"),
            Some(&PropValue::nested([("splitBy", "words"), ("direction", "bottom")]))
        );
    }

    #[test]
    fn test_set_path_creates_missing_parent() {
        let mut bag = PropertyBag::new().with("animation", "split");
        bag.set_path(&"animationConfig.splitBy".into(), "chars".into());
        assert_eq!(
            bag.get("animationConfig"),
            Some(&PropValue::nested([("splitBy", "chars")]))
        );

        // A scalar in the way is replaced by an object
        let mut bag = PropertyBag::new().with("animationConfig", true);
        bag.set_path(&"animationConfig.splitBy".into(), "chars".into());
        assert_eq!(
            bag.get_path(&"animationConfig.splitBy".into()),
            Some(&PropValue::from("chars"))
        );
    }

    #[test]
    fn test_set_top_level_keeps_order() {
        let mut bag = PropertyBag::new().with("a", 1).with("b", 2).with("c", 3);
        bag.set_path(&"b".into(), PropValue::from(20));
        assert_eq!(bag.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(bag.get("b"), Some(&PropValue::from(20)));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = animated();
        let mut copy = original.clone();
        copy.set_path(&"animationConfig.splitBy".into(), "lines".into());
        assert_eq!(
            original.get_path(&"animationConfig.splitBy".into()),
            Some(&PropValue::from("words"))
        );
    }

    #[test]
    fn test_is_set() {
        let bag = PropertyBag::new().with("theme", PropValue::Unset).with("color", "primary");
        assert!(!bag.is_set("theme"));
        assert!(bag.is_set("color"));
        assert!(!bag.is_set("missing"));
    }
}
