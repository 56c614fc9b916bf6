use std::collections::BTreeSet;

use foundation::{LatLng, SceneId};
use serde::Deserialize;

use crate::scene::Scene;

/// Wire shape of one record in `data/scenes.json`.
#[derive(Debug, Clone, Deserialize)]
struct RawScene {
    id: u32,
    movie: String,
    title: String,
    lat: f64,
    lng: f64,
    image: String,
    description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    Parse(String),
    DuplicateId(SceneId),
    InvalidCoordinates { id: SceneId, lat: f64, lng: f64 },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Parse(msg) => write!(f, "scene data malformed: {msg}"),
            DatasetError::DuplicateId(id) => write!(f, "duplicate scene id {id}"),
            DatasetError::InvalidCoordinates { id, lat, lng } => {
                write!(f, "scene {id} has invalid coordinates ({lat}, {lng})")
            }
        }
    }
}

impl std::error::Error for DatasetError {}

/// The immutable scene collection, validated at load.
///
/// Iteration order is the order of records in the source file; the sidebar
/// and the marker table both rely on that order being stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneDataset {
    scenes: Vec<Scene>,
}

impl SceneDataset {
    /// Parses and validates a JSON array of scene records.
    ///
    /// Fails on malformed JSON, a repeated `id`, or out-of-range coordinates.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: Vec<RawScene> =
            serde_json::from_str(json).map_err(|e| DatasetError::Parse(e.to_string()))?;

        let mut seen = BTreeSet::new();
        let mut scenes = Vec::with_capacity(raw.len());
        for record in raw {
            let id = SceneId::new(record.id);
            if !seen.insert(id) {
                return Err(DatasetError::DuplicateId(id));
            }
            let position = LatLng::new(record.lat, record.lng);
            if !position.is_valid() {
                return Err(DatasetError::InvalidCoordinates {
                    id,
                    lat: record.lat,
                    lng: record.lng,
                });
            }
            scenes.push(Scene {
                id,
                movie: record.movie,
                title: record.title,
                position,
                image: record.image,
                description: record.description,
            });
        }

        Ok(Self { scenes })
    }

    /// The dataset shipped with the application.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(include_str!("../data/scenes.json"))
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn get(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{DatasetError, SceneDataset};
    use foundation::SceneId;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_and_preserves_order() {
        let json = r#"[
            {"id": 2, "movie": "A", "title": "Pier", "lat": 22.28, "lng": 114.16,
             "image": "a.jpg", "description": "x"},
            {"id": 1, "movie": "B", "title": "Alley", "lat": 22.32, "lng": 114.17,
             "image": "b.jpg", "description": "y"}
        ]"#;
        let ds = SceneDataset::from_json(json).unwrap();
        assert_eq!(ds.len(), 2);
        let ids: Vec<u32> = ds.scenes().iter().map(|s| s.id.raw()).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(ds.get(SceneId::new(1)).unwrap().title, "Alley");
        assert_eq!(ds.get(SceneId::new(9)), None);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id": 1, "movie": "A", "title": "t", "lat": 0.0, "lng": 0.0,
             "image": "", "description": ""},
            {"id": 1, "movie": "B", "title": "t", "lat": 0.0, "lng": 0.0,
             "image": "", "description": ""}
        ]"#;
        assert_eq!(
            SceneDataset::from_json(json),
            Err(DatasetError::DuplicateId(SceneId::new(1)))
        );
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let json = r#"[
            {"id": 1, "movie": "A", "title": "t", "lat": 91.0, "lng": 0.0,
             "image": "", "description": ""}
        ]"#;
        match SceneDataset::from_json(json) {
            Err(DatasetError::InvalidCoordinates { id, lat, .. }) => {
                assert_eq!(id, SceneId::new(1));
                assert_eq!(lat, 91.0);
            }
            other => panic!("expected InvalidCoordinates, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            SceneDataset::from_json("not json"),
            Err(DatasetError::Parse(_))
        ));
    }

    #[test]
    fn bundled_dataset_is_valid() {
        let ds = SceneDataset::bundled().unwrap();
        assert!(!ds.is_empty());
        // Every bundled scene must be addressable by id.
        for scene in ds.scenes() {
            assert_eq!(ds.get(scene.id), Some(scene));
        }
    }
}
