//! Ordered label → value mapping for persona profiles.
//!
//! Profile facts are displayed in the order they were declared, so the map
//! keeps insertion order on both sides of the wire. On JSON it is a plain
//! object: `{"年龄": "19岁", "职业": "数字游民"}`.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailMap(Vec<(String, String)>);

impl DetailMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a fact. An existing label keeps its position and takes the new value.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DetailMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = DetailMap::new();
        for (label, value) in iter {
            map.insert(label, value);
        }
        map
    }
}

impl Serialize for DetailMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

struct DetailMapVisitor;

impl<'de> Visitor<'de> for DetailMapVisitor {
    type Value = DetailMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of string labels to string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = DetailMap::new();
        while let Some((label, value)) = access.next_entry::<String, String>()? {
            map.insert(label, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for DetailMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DetailMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_declaration_order() {
        let mut map = DetailMap::new();
        map.insert("年龄", "19岁");
        map.insert("职业", "数字游民");
        map.insert("爱好", "旅行");
        let labels: Vec<_> = map.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["年龄", "职业", "爱好"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map: DetailMap = [("a", "1"), ("b", "2")].into_iter().collect();
        map.insert("a", "3");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some("3"));
        assert_eq!(map.iter().next(), Some(("a", "3")));
    }

    #[test]
    fn test_json_preserves_order() {
        // Keys deliberately out of lexical order.
        let raw = r#"{"zeta":"1","alpha":"2","mid":"3"}"#;
        let map: DetailMap = serde_json::from_str(raw).unwrap();
        let labels: Vec<_> = map.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["zeta", "alpha", "mid"]);
        assert_eq!(serde_json::to_string(&map).unwrap(), raw);
    }

    #[test]
    fn test_rejects_non_string_values() {
        assert!(serde_json::from_str::<DetailMap>(r#"{"age": 19}"#).is_err());
    }
}
