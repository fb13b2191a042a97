use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// One story returned by the search index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hit {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_comments: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: i64,
}

/// The merged pages fetched so far for one query key. Both fields are
/// required on the wire; a reply missing either is not a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResultPage {
    pub hits: Vec<Hit>,
    pub page: u32,
}

impl SearchResultPage {
    pub fn new(hits: Vec<Hit>, page: u32) -> Self {
        Self { hits, page }
    }

    /// Appends a freshly fetched page. Hits are not deduplicated, so two
    /// overlapping fetches for the same key both land in the list.
    pub fn merged_with(&self, next: SearchResultPage) -> Self {
        let mut hits = Vec::with_capacity(self.hits.len() + next.hits.len());
        hits.extend(self.hits.iter().cloned());
        hits.extend(next.hits);
        Self {
            hits,
            page: next.page,
        }
    }

    pub fn without_hit(&self, object_id: &str) -> Self {
        Self {
            hits: self
                .hits
                .iter()
                .filter(|hit| hit.object_id != object_id)
                .cloned()
                .collect(),
            page: self.page,
        }
    }
}

/// Query key -> merged result pages. Entries are never evicted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsCache {
    entries: HashMap<String, SearchResultPage>,
}

impl ResultsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, query_key: &str) -> Option<&SearchResultPage> {
        self.entries.get(query_key)
    }

    pub fn contains(&self, query_key: &str) -> bool {
        self.entries.contains_key(query_key)
    }

    pub fn insert(&mut self, query_key: impl Into<String>, page: SearchResultPage) {
        self.entries.insert(query_key.into(), page);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// The index sends `null` for missing story fields (Ask HN posts have no url, etc).
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
pub(crate) fn hit(id: &str) -> Hit {
    Hit {
        object_id: id.to_string(),
        title: format!("Story {id}"),
        url: format!("https://example.com/{id}"),
        author: "pg".to_string(),
        num_comments: 3,
        points: 42,
    }
}
