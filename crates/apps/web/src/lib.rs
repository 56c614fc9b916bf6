//! Browser entry point: owns the application state and exports the event
//! handlers the host page calls (`www/index.html`).

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::prelude::*;

use catalog::SceneDataset;
use foundation::SceneId;
use view::{MapView, SidebarState};

mod leaflet;
mod render;

use leaflet::LeafletBackend;

const MAP_CONTAINER_ID: &str = "map";
const SCENE_LIST_ID: &str = "scene-list";

// Guard against double-initialization of global state (hot-reload edge cases).
static STARTED: AtomicBool = AtomicBool::new(false);

struct App {
    dataset: SceneDataset,
    map: MapView<LeafletBackend>,
    sidebar: SidebarState,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|slot| slot.borrow_mut().as_mut().map(f))
}

fn log_error(err: JsValue) {
    web_sys::console::error_1(&err);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    console_error_panic_hook::set_once();
    Ok(())
}

/// Builds the map, markers, and the initial sidebar. Idempotent: a repeated
/// call after successful initialization is a no-op.
#[wasm_bindgen]
pub fn init() {
    if let Err(err) = init_inner() {
        log_error(err);
    }
}

fn init_inner() -> Result<(), JsValue> {
    let already = with_app(|_| ()).is_some();
    if already {
        return Ok(());
    }

    let dataset = SceneDataset::bundled().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut map = MapView::new();
    map.initialize(
        LeafletBackend::new(MAP_CONTAINER_ID),
        dataset.scenes(),
        render::popup_html,
    );

    let app = App {
        dataset,
        map,
        sidebar: SidebarState::new(),
    };
    render_sidebar(&app)?;

    web_sys::console::log_1(&JsValue::from_str(&format!(
        "scene map ready: {} scenes",
        app.dataset.len()
    )));
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

/// Replaces the search term and re-renders the sidebar.
#[wasm_bindgen]
pub fn set_search_term(term: &str) {
    let result = with_app(|app| {
        app.sidebar.set_search_term(term);
        render_sidebar(app)
    });
    if let Some(Err(err)) = result {
        log_error(err);
    }
}

/// Expands or collapses one movie's accordion group.
#[wasm_bindgen]
pub fn toggle_group(movie: &str) {
    let result = with_app(|app| {
        app.sidebar.toggle_accordion(movie);
        render_sidebar(app)
    });
    if let Some(Err(err)) = result {
        log_error(err);
    }
}

/// Centers the map on the scene and opens its popup. Unknown ids are ignored.
#[wasm_bindgen]
pub fn select_scene(id: u32) {
    with_app(|app| app.map.focus(SceneId::new(id)));
}

/// Releases the map widget; called when the page unloads.
#[wasm_bindgen]
pub fn teardown() {
    APP.with(|slot| {
        if let Some(mut app) = slot.borrow_mut().take() {
            app.map.teardown();
        }
    });
}

fn render_sidebar(app: &App) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let list = document
        .get_element_by_id(SCENE_LIST_ID)
        .ok_or_else(|| JsValue::from_str("missing scene-list element"))?;

    let model = app.sidebar.model(app.dataset.scenes());
    list.set_inner_html(&render::sidebar_html(&model));
    Ok(())
}
