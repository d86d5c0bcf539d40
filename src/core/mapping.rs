//! Conversions between wire messages and domain values.
//!
//! Outbound coordinates and scores narrow from `f64` to the wire's `f32`;
//! inbound floats widen back losslessly.

use crate::domain::model::{
    Comment, Coordinates, GeoBounds, LandmarkItem, LandmarkPreview, TagWithScore,
};
use crate::rpc::{feed, storage};
use crate::utils::error::{GatewayError, Result};
use uuid::Uuid;

/// Parses every id or none: the first invalid entry fails the whole batch.
pub fn parse_identifiers(ids: Vec<String>) -> Result<Vec<Uuid>> {
    ids.into_iter()
        .map(|value| {
            Uuid::parse_str(&value)
                .map_err(|source| GatewayError::InvalidIdentifierError { value, source })
        })
        .collect()
}

impl From<Coordinates> for storage::Point {
    fn from(value: Coordinates) -> Self {
        Self {
            latitude: narrow(value.latitude),
            longitude: narrow(value.longitude),
        }
    }
}

impl From<Coordinates> for feed::Point {
    fn from(value: Coordinates) -> Self {
        Self {
            latitude: narrow(value.latitude),
            longitude: narrow(value.longitude),
        }
    }
}

impl From<GeoBounds> for storage::BoundingBox {
    fn from(value: GeoBounds) -> Self {
        Self {
            northeast: Some(value.northeast.into()),
            southwest: Some(value.southwest.into()),
        }
    }
}

impl From<storage::GetLandmarkResponse> for LandmarkPreview {
    fn from(value: storage::GetLandmarkResponse) -> Self {
        Self {
            id: value.id,
            liked: value.liked,
            rating: f64::from(value.rating),
        }
    }
}

impl From<storage::Comment> for Comment {
    fn from(value: storage::Comment) -> Self {
        Self {
            id: value.id,
            parent_id: value.parent_id,
            user_id: value.user_id,
            text: value.text,
            reply_id: Some(value.reply_id).filter(|reply| !reply.is_empty()),
            grade: value.grade,
            timestamp: value.timestamp,
            attachments: value.attachments,
        }
    }
}

impl From<storage::TagScore> for TagWithScore {
    fn from(value: storage::TagScore) -> Self {
        Self {
            id: value.id,
            score: f64::from(value.score),
        }
    }
}

impl From<storage::LandmarkItem> for LandmarkItem {
    fn from(value: storage::LandmarkItem) -> Self {
        Self {
            id: value.id,
            score: f64::from(value.score),
            latitude: f64::from(value.latitude),
            longitude: f64::from(value.longitude),
            tags: value.tags,
        }
    }
}

pub fn narrow(value: f64) -> f32 {
    value as f32
}

pub fn map_all<W, D: From<W>>(items: Vec<W>) -> Vec<D> {
    items.into_iter().map(D::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifiers_all_valid() {
        let ids = vec![
            "8e20a909-1a4c-43a3-b1d2-2f4505ec19fe".to_string(),
            "d00ba81c-4fd9-4e01-a383-97e25f926020".to_string(),
        ];
        let parsed = parse_identifiers(ids).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(
            parsed[0],
            Uuid::parse_str("8e20a909-1a4c-43a3-b1d2-2f4505ec19fe").unwrap()
        );
    }

    #[test]
    fn test_parse_identifiers_rejects_whole_batch() {
        let ids = vec![
            "8e20a909-1a4c-43a3-b1d2-2f4505ec19fe".to_string(),
            "invalidId".to_string(),
            "d00ba81c-4fd9-4e01-a383-97e25f926020".to_string(),
        ];
        match parse_identifiers(ids) {
            Err(GatewayError::InvalidIdentifierError { value, .. }) => assert_eq!(value, "invalidId"),
            other => panic!("expected identifier error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_identifiers_empty_is_empty() {
        assert!(parse_identifiers(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_comment_empty_reply_is_absent() {
        let wire = storage::Comment {
            id: "c1".to_string(),
            parent_id: "l1".to_string(),
            user_id: "u1".to_string(),
            text: "great view".to_string(),
            grade: 5,
            attachments: vec!["a1".to_string()],
            reply_id: String::new(),
            timestamp: 1_700_000_000,
        };
        let comment = Comment::from(wire.clone());
        assert_eq!(comment.reply_id, None);
        assert_eq!(comment.parent_id, "l1");
        assert_eq!(comment.attachments, vec!["a1".to_string()]);

        let reply = Comment::from(storage::Comment {
            reply_id: "c0".to_string(),
            ..wire
        });
        assert_eq!(reply.reply_id.as_deref(), Some("c0"));
    }

    #[test]
    fn test_coordinates_narrow_to_wire_precision() {
        let point = storage::Point::from(Coordinates::new(55.751_244_123_456, 37.618_423_987_654));
        assert_eq!(point.latitude, 55.751_244_123_456_f64 as f32);
        assert_eq!(point.longitude, 37.618_423_987_654_f64 as f32);

        let bounds = storage::BoundingBox::from(GeoBounds::new(
            Coordinates::new(1.0, 2.0),
            Coordinates::new(-1.0, -2.0),
        ));
        assert_eq!(bounds.northeast.unwrap().longitude, 2.0);
        assert_eq!(bounds.southwest.unwrap().latitude, -1.0);
    }

    #[test]
    fn test_landmark_item_widens() {
        let item = LandmarkItem::from(storage::LandmarkItem {
            id: "l1".to_string(),
            score: 0.5,
            latitude: 10.25,
            longitude: -3.5,
            tags: vec!["park".to_string(), "museum".to_string()],
        });
        assert_eq!(item.coordinates(), Coordinates::new(10.25, -3.5));
        assert_eq!(item.score, 0.5);
        assert_eq!(item.tags, vec!["park".to_string(), "museum".to_string()]);
    }
}
