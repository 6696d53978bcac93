//! `parley.ui` — the bridge functions exposed to chat scripts.
//!
//! Every function delegates to the injected [`UiBridgePort`]. Relative
//! resource paths (popup prompt files, images) resolve against the
//! directory of the currently loaded script.

use mlua::prelude::*;
use parley_application::UiBridgePort;
use parley_domain::ImageRef;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Resolve a script-supplied path against the script's directory.
fn resolve(script_dir: &Mutex<Option<PathBuf>>, raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match script_dir.lock().ok().and_then(|dir| dir.clone()) {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}

/// Register the `ui` sub-table on the `parley` global.
pub fn register_ui_api(
    lua: &Lua,
    parley: &LuaTable,
    bridge: Arc<dyn UiBridgePort>,
    script_dir: Arc<Mutex<Option<PathBuf>>>,
) -> LuaResult<()> {
    let ui = lua.create_table()?;

    {
        let bridge = Arc::clone(&bridge);
        ui.set(
            "print",
            lua.create_function(move |_, text: String| {
                bridge.print_text(&text);
                Ok(())
            })?,
        )?;
    }

    {
        let bridge = Arc::clone(&bridge);
        let dir = Arc::clone(&script_dir);
        ui.set(
            "print_image",
            lua.create_function(move |_, path: String| {
                bridge.print_image(&ImageRef::new(resolve(&dir, &path)));
                Ok(())
            })?,
        )?;
    }

    {
        let bridge = Arc::clone(&bridge);
        ui.set(
            "is_canceled",
            lua.create_function(move |_, ()| Ok(bridge.is_canceled()))?,
        )?;
    }

    {
        let bridge = Arc::clone(&bridge);
        let dir = Arc::clone(&script_dir);
        ui.set(
            "popup_input",
            lua.create_function(move |_, path: String| {
                bridge
                    .start_popup_input(&resolve(&dir, &path))
                    .map_err(LuaError::external)
            })?,
        )?;
    }

    {
        let bridge = Arc::clone(&bridge);
        ui.set(
            "receive_input",
            lua.create_function(move |_, ()| Ok(bridge.receive_input()))?,
        )?;
    }

    {
        let bridge = Arc::clone(&bridge);
        let dir = Arc::clone(&script_dir);
        ui.set(
            "popup_msg",
            lua.create_function(move |_, path: String| {
                bridge
                    .start_popup_message(&resolve(&dir, &path))
                    .map_err(LuaError::external)
            })?,
        )?;
    }

    {
        let bridge = Arc::clone(&bridge);
        ui.set(
            "pick_from_library",
            lua.create_function(move |_, count: usize| {
                bridge
                    .start_pick_from_library(count)
                    .map_err(LuaError::external)
            })?,
        )?;
    }

    {
        let bridge = Arc::clone(&bridge);
        ui.set(
            "receive_picked",
            lua.create_function(move |_, ()| {
                let paths: Vec<String> = bridge
                    .receive_picked()
                    .into_iter()
                    .map(|image| image.path().display().to_string())
                    .collect();
                Ok(paths)
            })?,
        )?;
    }

    parley.set("ui", ui)
}
