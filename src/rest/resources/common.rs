//! Field helpers shared by resource types.

use serde::{Deserialize, Deserializer};

/// Either a bare id or an expanded object carrying one.
#[derive(Deserialize)]
#[serde(untagged)]
enum Reference {
    Id(String),
    Object { id: String },
}

/// Deserializes an expandable reference into its id.
///
/// The API sends a bare id string unless the field was named in `expand`,
/// in which case the whole object is inlined. Both shapes yield the id;
/// `null` yields `None`.
pub(crate) fn expandable_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let reference = Option::<Reference>::deserialize(deserializer)?;
    Ok(reference.map(|r| match r {
        Reference::Id(id) | Reference::Object { id } => id,
    }))
}
