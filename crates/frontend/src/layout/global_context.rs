use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Path part of the location hash: "#/order/list" -> "/order/list".
/// An empty hash means the console root.
fn hash_path() -> String {
    let hash = window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    let path = hash.trim_start_matches('#');
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

/// Navigation state shared by the whole shell
#[derive(Clone, Copy)]
pub struct NavContext {
    /// Key of the active section, kept in sync with the location hash
    pub current_path: RwSignal<String>,
}

impl NavContext {
    pub fn new() -> Self {
        Self {
            current_path: RwSignal::new(hash_path()),
        }
    }

    /// Install the hashchange listener that feeds `current_path`.
    /// Runs once when the shell is created.
    pub fn init_router_integration(&self) {
        let this = *self;
        let listener = Closure::wrap(Box::new(move || {
            let path = hash_path();
            leptos::logging::log!("navigate: '{}'", path);
            this.current_path.set(path);
        }) as Box<dyn Fn()>);

        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback(
                "hashchange",
                listener.as_ref().unchecked_ref::<js_sys::Function>(),
            );
        }
        // The listener lives for the page lifetime
        listener.forget();
    }

    /// Jump to a menu entry. The hashchange listener picks the change up
    /// and updates `current_path`.
    pub fn navigate(&self, key: &str) {
        if key.is_empty() {
            return;
        }
        if let Some(w) = window() {
            let _ = w.location().set_hash(key);
        }
    }
}
