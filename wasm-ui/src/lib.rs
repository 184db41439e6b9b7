//! Web UI for orquesta-editor
//!
//! A Yew-based two-pane page: a YAML editor on the left and the workflow
//! preview on the right.

mod app;
mod components;
pub mod mount;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
///
/// Fails startup when the mount element is missing or its attributes are
/// invalid.
#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn run_app() -> Result<(), JsValue> {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(level);

    let mount = mount::locate(mount::MOUNT_ELEMENT_ID).inspect_err(|e| {
        log::error!("editor startup failed: {}", e);
    })?;
    log::info!(
        "mounting editor on #{} (editor id `{}`)",
        mount::MOUNT_ELEMENT_ID,
        mount.config.editor_id
    );

    yew::Renderer::<app::EditorView>::with_root_and_props(
        mount.element,
        app::EditorViewProps {
            config: mount.config,
        },
    )
    .render();
    Ok(())
}
