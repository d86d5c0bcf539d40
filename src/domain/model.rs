use crate::utils::error::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Result entities with a stable text encoding.
///
/// Field order follows struct declaration order, so the encoding of equal
/// values is byte-identical across calls and processes.
pub trait Entity: Serialize {
    fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub northeast: Coordinates,
    pub southwest: Coordinates,
}

impl GeoBounds {
    pub fn new(northeast: Coordinates, southwest: Coordinates) -> Self {
        Self {
            northeast,
            southwest,
        }
    }
}

/// Pagination window. Forwarded as-is; the backend owns validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Page {
    pub limit: i32,
    pub offset: i32,
}

impl Page {
    pub fn new(limit: i32, offset: i32) -> Self {
        Self { limit, offset }
    }

    pub fn first(limit: i32) -> Self {
        Self { limit, offset: 0 }
    }
}

/// A review or reply.
///
/// Encodes as `Id, ParentId, UserId, Text, ReplyId, Grade, Timestamp,
/// Attachments`. An absent reply encodes as `""`. Readers that expect the
/// seven-key form without `ParentId` byte-for-byte will not match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "ParentId")]
    pub parent_id: String,
    #[serde(rename = "UserId")]
    pub user_id: String,
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(
        rename = "ReplyId",
        serialize_with = "empty_if_none",
        deserialize_with = "none_if_empty"
    )]
    pub reply_id: Option<String>,
    #[serde(rename = "Grade")]
    pub grade: i32,
    #[serde(rename = "Timestamp")]
    pub timestamp: i64,
    #[serde(rename = "Attachments")]
    pub attachments: Vec<String>,
}

impl Entity for Comment {}

/// Encodes as `Id, Liked, Rating`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPreview {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Liked")]
    pub liked: bool,
    #[serde(rename = "Rating")]
    pub rating: f64,
}

impl Entity for LandmarkPreview {}

#[derive(Debug, Clone, PartialEq)]
pub struct TagWithScore {
    pub id: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkItem {
    pub id: String,
    pub score: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub tags: Vec<String>,
}

impl LandmarkItem {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

fn empty_if_none<S: Serializer>(
    value: &Option<String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

fn none_if_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    let value = String::deserialize(deserializer)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}
