//! Attach/detach lifecycle for embedding the form in a host page.
//!
//! The custom-element shim (`js/nobi-form-element.js`) calls `attach` when
//! the element is connected and `detach` when it is disconnected. The handle
//! is consumed by `detach`, so a form can only be torn down once; the shim
//! keeps at most one handle per element.

use std::any::Any;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::domain::nobi_request::ui::form::NobiForm;
use crate::shared::config::load_config;

/// Mounted form; dropping it unmounts the view
#[wasm_bindgen]
pub struct NobiFormHandle {
    _mounted: Box<dyn Any>,
}

/// Mount the form into `container`
///
/// `auth_token` is the host's opaque token (sent as "" when absent);
/// `config_toml` optionally overrides the embedded default configuration.
#[wasm_bindgen]
pub fn attach(
    container: HtmlElement,
    auth_token: Option<String>,
    config_toml: Option<String>,
) -> Result<NobiFormHandle, JsValue> {
    let config = load_config(config_toml.as_deref())
        .map_err(|e| JsValue::from_str(&e))?
        .with_auth_token(auth_token);

    log::info!("Attaching NOBI form");
    let mounted = leptos::mount::mount_to(container, move || view! { <NobiForm config=config /> });

    Ok(NobiFormHandle {
        _mounted: Box::new(mounted),
    })
}

/// Unmount a form previously returned by `attach`
#[wasm_bindgen]
pub fn detach(handle: NobiFormHandle) {
    log::info!("Detaching NOBI form");
    drop(handle);
}
