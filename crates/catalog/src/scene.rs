use foundation::{LatLng, SceneId};

/// One filming-location record.
///
/// Scenes are immutable once loaded; the dataset offers no create, update, or
/// delete operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub id: SceneId,
    /// Display name of the film. Also the sidebar grouping key, so two
    /// distinct films sharing a title would share one accordion group.
    pub movie: String,
    /// Location label shown in the list and in the marker popup.
    pub title: String,
    pub position: LatLng,
    /// Display asset reference (URL or bundled path).
    pub image: String,
    pub description: String,
}
