//! Browser Adapters
//!
//! Address bar, local storage and clipboard access through web-sys.

use board_core::{board_query, AddressBar, LocalStore};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Board id in the `?<param>=` query parameter, rewritten with `history.replaceState`
pub struct BrowserAddressBar {
    param: String,
}

impl BrowserAddressBar {
    pub fn new(param: &str) -> Self {
        Self {
            param: param.to_string(),
        }
    }
}

impl AddressBar for BrowserAddressBar {
    fn board_param(&self) -> Option<String> {
        let search = web_sys::window()?.location().search().ok()?;
        let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
        params.get(&self.param)
    }

    fn set_board_param(&self, board_id: &str) {
        let Some(history) = web_sys::window().and_then(|win| win.history().ok()) else {
            return;
        };
        let url = board_query(&self.param, board_id);
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
            warn!("[BROWSER] replaceState failed: {:?}", e);
        }
    }
}

/// `window.localStorage`
pub struct BrowserLocalStore;

impl BrowserLocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl LocalStore for BrowserLocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            warn!("[BROWSER] localStorage unavailable, {} not remembered", key);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            warn!("[BROWSER] localStorage write failed: {:?}", e);
        }
    }
}

/// Full address of the current page (share link)
pub fn current_href() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

/// `navigator.clipboard.writeText(text)`
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let navigator = window.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| format!("{:?}", e))?;
    if clipboard.is_undefined() {
        return Err("clipboard API unavailable".to_string());
    }
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| "writeText is not a function".to_string())?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| "writeText did not return a promise".to_string())?;
    JsFuture::from(promise).await.map_err(|e| format!("{:?}", e))?;
    Ok(())
}
