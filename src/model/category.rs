use serde::{Deserialize, Serialize};

/// A single expense category as served by the remote store.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub(crate) id: i64,
    pub(crate) name: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The set of known categories, in server order.
///
/// This is the registry the filter pipeline resolves category ids against.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Categories {
    data: Vec<Category>,
}

impl Categories {
    pub fn new(data: Vec<Category>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &[Category] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Resolves a category id to its display name.
    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.data
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Resolves a display name to a category id, comparing case-insensitively.
    ///
    /// The registry is not deduplicated: if two names differ only by case, the first
    /// match wins.
    pub fn id_of(&self, name: &str) -> Option<i64> {
        let want = name.to_lowercase();
        self.data
            .iter()
            .find(|c| c.name.to_lowercase() == want)
            .map(|c| c.id)
    }
}
