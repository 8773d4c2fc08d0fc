//! Input data model: an insertion-ordered mapping from category label to value.

/// Category label → magnitude, with unique labels and stable insertion order.
///
/// Inserting a label that already exists replaces its value but keeps its original slot, so
/// the iteration order is always "order of first insertion". That order breaks ties when a
/// chart sorts categories by value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryValues {
    entries: Vec<(String, f64)>,
}

impl CategoryValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Returns the previous value for `label`, if any.
    pub fn insert(&mut self, label: impl Into<String>, value: f64) -> Option<f64> {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.entries.push((label, value));
                None
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), *v))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for CategoryValues {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut out = CategoryValues::new();
        for (k, v) in iter {
            out.insert(k, v);
        }
        out
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for CategoryValues {
    fn from(arr: [(K, f64); N]) -> Self {
        arr.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reinsert_keeps_slot() {
        let mut m = CategoryValues::from([("a", 1.0), ("b", 2.0)]);
        assert_eq!(m.insert("a", 5.0), Some(1.0));
        let items: Vec<_> = m.iter().collect();
        assert_eq!(items, vec![("a", 5.0), ("b", 2.0)]);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn lookup_missing_label() {
        let m = CategoryValues::from([("x", 1.0)]);
        assert_eq!(m.get("x"), Some(1.0));
        assert_eq!(m.get("y"), None);
    }
}
