use indexmap::IndexMap;
use serde::Serialize;

use crate::SharedString;

/// An ordered set of presentation attributes (style tokens).
///
/// Merging follows last-writer-wins semantics: attributes merged later
/// override earlier ones with the same key, while insertion order of the
/// surviving keys is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttrSet(IndexMap<SharedString, SharedString>);

impl AttrSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn set(mut self, key: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<SharedString>, value: impl Into<SharedString>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&SharedString> {
        self.0.get(key)
    }

    /// Overlays `other` on top of this set.
    pub fn merge(&mut self, other: &AttrSet) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn merged(mut self, other: &AttrSet) -> Self {
        self.merge(other);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SharedString, &SharedString)> {
        self.0.iter()
    }
}

impl<K: Into<SharedString>, V: Into<SharedString>> FromIterator<(K, V)> for AttrSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = AttrSet::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_and_appends() {
        let mut base = AttrSet::new().set("bg", "background.primary").set("px", "padding.md");
        let over = AttrSet::new().set("px", "padding.sm").set("border", "1px");

        base.merge(&over);

        assert_eq!(base.get("bg").unwrap(), "background.primary");
        assert_eq!(base.get("px").unwrap(), "padding.sm", "Later attributes should win");
        assert_eq!(base.get("border").unwrap(), "1px");
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn test_from_iterator() {
        let attrs: AttrSet = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(attrs.get("a").unwrap(), "1");
        assert_eq!(attrs.get("b").unwrap(), "2");
    }
}
