//! Bindings to the Leaflet widget loaded by the host page (global `L`).

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use foundation::LatLng;
use view::MapBackend;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;
    pub type TileLayer;
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn l_map(container_id: &str) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: f64);

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn l_tile_layer(url_template: &str, options: &Object) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap);

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn l_marker(at: &Array) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to_map(this: &Marker, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, html: &str);

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &Marker);
}

fn lat_lng_array(at: LatLng) -> Array {
    Array::of2(&JsValue::from_f64(at.lat), &JsValue::from_f64(at.lng))
}

/// [`MapBackend`] backed by one Leaflet map bound to a container element.
pub struct LeafletBackend {
    map: LeafletMap,
}

impl LeafletBackend {
    pub fn new(container_id: &str) -> Self {
        Self {
            map: l_map(container_id),
        }
    }
}

impl MapBackend for LeafletBackend {
    type Marker = Marker;

    fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.map.set_view(&lat_lng_array(center), zoom);
    }

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str, max_zoom: f64) {
        let options = Object::new();
        let _ = Reflect::set(&options, &"attribution".into(), &attribution.into());
        let _ = Reflect::set(&options, &"maxZoom".into(), &max_zoom.into());
        l_tile_layer(url_template, &options).add_to(&self.map);
    }

    fn add_marker(&mut self, at: LatLng, popup_html: &str) -> Marker {
        let marker = l_marker(&lat_lng_array(at));
        marker.add_to_map(&self.map);
        marker.bind_popup(popup_html);
        marker
    }

    fn open_popup(&mut self, marker: &Marker) {
        marker.open_popup();
    }

    fn remove(&mut self) {
        // Leaflet detaches the tile layer and every marker with the map.
        self.map.remove();
    }
}
