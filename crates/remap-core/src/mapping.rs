use serde_json::Value;

/// Options resolved once per [`Remapper`](crate::Remapper) instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Separator used to split every from-path and to-path. May be longer
    /// than one character.
    pub delimiter: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiter: "/".to_string(),
        }
    }
}

impl Options {
    pub fn with_delimiter(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }
}

/// An ordered set of from-path → to-path entries, plus an optional
/// fallback value substituted for lookups that resolve to nothing.
///
/// Entries are applied in insertion order; a later entry writing to the
/// same target path (or under the same prefix) wins over an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(String, String)>,
    default: Option<Value>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.entries.push((from.into(), to.into()));
        self
    }

    /// Fallback written whenever a from-path resolves to absent or `null`.
    /// A present `false` is a real value and is never substituted.
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F: Into<String>, T: Into<String>> FromIterator<(F, T)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (F, T)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
            default: None,
        }
    }
}

impl<F: Into<String>, T: Into<String>, const N: usize> From<[(F, T); N]> for Mapping {
    fn from(entries: [(F, T); N]) -> Self {
        entries.into_iter().collect()
    }
}
