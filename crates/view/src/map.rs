use std::collections::BTreeMap;

use catalog::Scene;
use foundation::{LatLng, SceneId};

/// Initial map center (Hong Kong).
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 22.3193,
    lng: 114.1694,
};
/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 12.0;
/// Zoom level used when focusing one scene.
pub const FOCUS_ZOOM: f64 = 15.0;

pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";
pub const TILE_MAX_ZOOM: f64 = 19.0;

/// Seam between the map view-controller and the concrete map widget.
///
/// The browser build backs this with Leaflet; tests use a recording fake.
/// Tile and icon loading happen behind this trait and never surface here.
pub trait MapBackend {
    type Marker;

    fn set_view(&mut self, center: LatLng, zoom: f64);
    fn add_tile_layer(&mut self, url_template: &str, attribution: &str, max_zoom: f64);
    fn add_marker(&mut self, at: LatLng, popup_html: &str) -> Self::Marker;
    fn open_popup(&mut self, marker: &Self::Marker);
    /// Releases the underlying widget and everything attached to it.
    fn remove(&mut self);
}

/// Owns the map widget and the only scene-id to marker association in the
/// program.
///
/// Markers are created once at initialization and never recreated.
pub struct MapView<B: MapBackend> {
    backend: Option<B>,
    markers: BTreeMap<SceneId, SceneMarker<B::Marker>>,
}

impl<B: MapBackend> Default for MapView<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct SceneMarker<M> {
    position: LatLng,
    handle: M,
}

impl<B: MapBackend> MapView<B> {
    pub fn new() -> Self {
        Self {
            backend: None,
            markers: BTreeMap::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.backend.is_some()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Sets up the widget: default view, tile layer, one marker per scene.
    ///
    /// Idempotent: once initialized, further calls are ignored (development
    /// reloads may re-run setup). Returns whether this call did the work.
    pub fn initialize(
        &mut self,
        mut backend: B,
        scenes: &[Scene],
        popup_html: impl Fn(&Scene) -> String,
    ) -> bool {
        if self.backend.is_some() {
            return false;
        }

        backend.set_view(DEFAULT_CENTER, DEFAULT_ZOOM);
        backend.add_tile_layer(TILE_URL_TEMPLATE, TILE_ATTRIBUTION, TILE_MAX_ZOOM);
        for scene in scenes {
            let handle = backend.add_marker(scene.position, &popup_html(scene));
            self.markers.insert(
                scene.id,
                SceneMarker {
                    position: scene.position,
                    handle,
                },
            );
        }

        self.backend = Some(backend);
        true
    }

    /// Re-centers on the scene at [`FOCUS_ZOOM`] and opens its popup.
    ///
    /// Silent no-op for an unknown id or an uninitialized map. Returns
    /// whether the viewport changed.
    pub fn focus(&mut self, id: SceneId) -> bool {
        let Some(backend) = self.backend.as_mut() else {
            return false;
        };
        let Some(marker) = self.markers.get(&id) else {
            return false;
        };

        backend.set_view(marker.position, FOCUS_ZOOM);
        backend.open_popup(&marker.handle);
        true
    }

    /// Releases the widget and all markers. Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some(mut backend) = self.backend.take() {
            backend.remove();
        }
        self.markers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_CENTER, DEFAULT_ZOOM, FOCUS_ZOOM, MapBackend, MapView};
    use catalog::Scene;
    use foundation::{LatLng, SceneId};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        SetView(LatLng, f64),
        TileLayer(String),
        AddMarker(LatLng),
        OpenPopup(usize),
        Removed,
    }

    /// Records every backend call; marker handles are insertion indices.
    struct FakeBackend {
        events: Rc<RefCell<Vec<Event>>>,
        next_marker: usize,
    }

    impl FakeBackend {
        fn new() -> (Self, Rc<RefCell<Vec<Event>>>) {
            let events = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    events: Rc::clone(&events),
                    next_marker: 0,
                },
                events,
            )
        }
    }

    impl MapBackend for FakeBackend {
        type Marker = usize;

        fn set_view(&mut self, center: LatLng, zoom: f64) {
            self.events.borrow_mut().push(Event::SetView(center, zoom));
        }

        fn add_tile_layer(&mut self, url_template: &str, _attribution: &str, _max_zoom: f64) {
            self.events
                .borrow_mut()
                .push(Event::TileLayer(url_template.to_string()));
        }

        fn add_marker(&mut self, at: LatLng, _popup_html: &str) -> usize {
            self.events.borrow_mut().push(Event::AddMarker(at));
            let handle = self.next_marker;
            self.next_marker += 1;
            handle
        }

        fn open_popup(&mut self, marker: &usize) {
            self.events.borrow_mut().push(Event::OpenPopup(*marker));
        }

        fn remove(&mut self) {
            self.events.borrow_mut().push(Event::Removed);
        }
    }

    fn scene(id: u32, lat: f64, lng: f64) -> Scene {
        Scene {
            id: SceneId::new(id),
            movie: format!("movie-{id}"),
            title: format!("title-{id}"),
            position: LatLng::new(lat, lng),
            image: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn initialize_sets_view_tiles_and_markers() {
        let scenes = vec![scene(1, 22.28, 114.16), scene(2, 22.32, 114.17)];
        let (backend, events) = FakeBackend::new();
        let mut map = MapView::new();

        assert!(map.initialize(backend, &scenes, |_| String::new()));
        assert!(map.is_initialized());
        assert_eq!(map.marker_count(), 2);
        assert_eq!(
            *events.borrow(),
            vec![
                Event::SetView(DEFAULT_CENTER, DEFAULT_ZOOM),
                Event::TileLayer(super::TILE_URL_TEMPLATE.to_string()),
                Event::AddMarker(LatLng::new(22.28, 114.16)),
                Event::AddMarker(LatLng::new(22.32, 114.17)),
            ]
        );
    }

    #[test]
    fn initialize_is_idempotent() {
        let scenes = vec![scene(1, 22.28, 114.16)];
        let (backend, events) = FakeBackend::new();
        let mut map = MapView::new();
        assert!(map.initialize(backend, &scenes, |_| String::new()));

        let recorded = events.borrow().len();
        let (second, second_events) = FakeBackend::new();
        assert!(!map.initialize(second, &scenes, |_| String::new()));
        assert_eq!(events.borrow().len(), recorded);
        assert!(second_events.borrow().is_empty());
        assert_eq!(map.marker_count(), 1);
    }

    #[test]
    fn focus_known_scene_recenters_and_opens_popup() {
        let scenes = vec![scene(1, 22.28, 114.16), scene(2, 22.32, 114.17)];
        let (backend, events) = FakeBackend::new();
        let mut map = MapView::new();
        map.initialize(backend, &scenes, |_| String::new());
        events.borrow_mut().clear();

        assert!(map.focus(SceneId::new(2)));
        assert_eq!(
            *events.borrow(),
            vec![
                Event::SetView(LatLng::new(22.32, 114.17), FOCUS_ZOOM),
                Event::OpenPopup(1),
            ]
        );
    }

    #[test]
    fn focus_unknown_scene_is_a_no_op() {
        let scenes = vec![scene(1, 22.28, 114.16)];
        let (backend, events) = FakeBackend::new();
        let mut map = MapView::new();
        map.initialize(backend, &scenes, |_| String::new());
        events.borrow_mut().clear();

        assert!(!map.focus(SceneId::new(99)));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn focus_before_initialize_is_a_no_op() {
        let mut map: MapView<FakeBackend> = MapView::new();
        assert!(!map.focus(SceneId::new(1)));
    }

    #[test]
    fn teardown_removes_widget_and_markers() {
        let scenes = vec![scene(1, 22.28, 114.16)];
        let (backend, events) = FakeBackend::new();
        let mut map = MapView::new();
        map.initialize(backend, &scenes, |_| String::new());

        map.teardown();
        assert!(!map.is_initialized());
        assert_eq!(map.marker_count(), 0);
        assert_eq!(events.borrow().last(), Some(&Event::Removed));

        // Second teardown must not touch the (released) backend again.
        let recorded = events.borrow().len();
        map.teardown();
        assert_eq!(events.borrow().len(), recorded);
    }
}
