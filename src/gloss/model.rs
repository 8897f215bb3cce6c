use serde::{Deserialize, Deserializer, Serialize};

/// A single glossary record.
///
/// The term is the entry's identity: within one glossary at most one entry
/// holds a given term under case-insensitive comparison. Renaming changes
/// identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "tags_or_empty")]
    pub tags: Vec<String>,
}

impl Entry {
    pub fn new(
        term: String,
        definition: String,
        category: Option<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            term,
            definition,
            category,
            tags: dedup_tags(tags),
        }
    }
}

// Older files may carry `"tags": null` instead of omitting the key.
fn tags_or_empty<'de, D>(de: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = Option::<Vec<String>>::deserialize(de)?;
    Ok(tags.unwrap_or_default())
}

/// Drop duplicate tags, first occurrence wins. Comparison is case-sensitive.
pub fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    unique
}
