use serde::Serialize;

/// Catalog entry (one academic program)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Positional index in the catalog
    pub id: usize,

    /// Program title
    pub title: String,

    /// Short description
    pub description: String,
}

impl Item {
    pub fn new(id: usize, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Text handed to the embedder for this item
    pub fn embedding_text(&self) -> String {
        format!("{}. {}", self.title, self.description)
    }
}

/// One ranked match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    /// Matched catalog item
    pub item: Item,

    /// Cosine similarity, clamped to [-1, 1] and rounded to 4 decimals
    pub score: f64,
}

/// Ranked search output: descending score, ties by ascending catalog index
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryResult {
    matches: Vec<ScoredItem>,
}

impl QueryResult {
    pub(crate) fn new(matches: Vec<ScoredItem>) -> Self {
        Self { matches }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredItem> {
        self.matches.iter()
    }

    pub fn matches(&self) -> &[ScoredItem] {
        &self.matches
    }

    /// Highest-ranked match, if any
    pub fn top(&self) -> Option<&ScoredItem> {
        self.matches.first()
    }
}

impl IntoIterator for QueryResult {
    type Item = ScoredItem;
    type IntoIter = std::vec::IntoIter<ScoredItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a ScoredItem;
    type IntoIter = std::slice::Iter<'a, ScoredItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
