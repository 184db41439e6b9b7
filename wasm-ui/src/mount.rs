//! Locating the mount element and reading its configuration.

use orquesta_editor::{ConfigError, MountConfig};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::Element;

/// Id of the element the editor is rendered into.
pub const MOUNT_ELEMENT_ID: &str = "container";

#[derive(Debug, Error)]
pub enum MountError {
    #[error("no document available")]
    NoDocument,
    #[error("mount element #{0} not found")]
    MissingElement(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// The element to render into and the config read from it.
pub struct Mount {
    pub element: Element,
    pub config: MountConfig,
}

/// Find `#element_id` in the page and build its [`MountConfig`].
pub fn locate(element_id: &str) -> Result<Mount, MountError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MountError::NoDocument)?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| MountError::MissingElement(element_id.to_string()))?;
    let config = MountConfig::from_attributes(data_attributes(&element))?;
    Ok(Mount { element, config })
}

fn data_attributes(element: &Element) -> Vec<(String, String)> {
    element
        .get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter(|name| name.starts_with("data-"))
        .filter_map(|name| element.get_attribute(&name).map(|value| (name, value)))
        .collect()
}
