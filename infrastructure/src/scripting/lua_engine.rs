//! Main Lua chat engine — ties together sandbox, handler registry and UI API.
//!
//! `LuaChatEngine` implements `ScriptEnginePort` from the application
//! layer, providing the concrete Lua 5.4 runtime backed by mlua. The UI
//! bridge is injected at construction; there is no global accessor.

use mlua::prelude::*;
use parley_application::{ScriptEnginePort, ScriptError, UiBridgePort};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::handlers::{HandlerKind, HandlerRegistry};
use super::sandbox::apply_sandbox;
use super::ui_api::register_ui_api;

/// Lua 5.4 chat engine implementing `ScriptEnginePort`.
///
/// Owns the Lua VM and the handler registry. Thread-safe via internal
/// `Mutex` wrapping of the Lua state.
pub struct LuaChatEngine {
    lua: Mutex<Lua>,
    handlers: Arc<Mutex<HandlerRegistry>>,
    script_dir: Arc<Mutex<Option<PathBuf>>>,
}

impl LuaChatEngine {
    /// Create a new engine bound to the given UI bridge.
    ///
    /// Sets up the VM with:
    /// - Sandbox (C module blocking)
    /// - `parley.welcome(fn)` / `parley.on_message(fn)` / `parley.help(fn)`
    ///   handler registration
    /// - `parley.ui.*` bridge functions delegating to `bridge`
    pub fn new(bridge: Arc<dyn UiBridgePort>) -> Result<Self, ScriptError> {
        let lua = Lua::new();
        let handlers = Arc::new(Mutex::new(HandlerRegistry::new()));
        let script_dir: Arc<Mutex<Option<PathBuf>>> = Arc::new(Mutex::new(None));

        apply_sandbox(&lua).map_err(|e| ScriptError::new(format!("sandbox setup failed: {}", e)))?;

        let parley = lua.create_table().map_err(lua_to_script_error)?;

        for kind in [HandlerKind::Welcome, HandlerKind::Message, HandlerKind::Help] {
            let registry = Arc::clone(&handlers);
            let register_fn = lua
                .create_function(move |lua, callback: LuaFunction| {
                    let key = lua.create_registry_value(callback)?;
                    let mut registry = registry.lock().map_err(|e| {
                        LuaError::external(format!("handler registry lock poisoned: {}", e))
                    })?;
                    if let Some(old) = registry.set(kind, key) {
                        let _ = lua.remove_registry_value(old);
                    }
                    Ok(())
                })
                .map_err(lua_to_script_error)?;
            parley
                .set(kind.as_str(), register_fn)
                .map_err(lua_to_script_error)?;
        }

        register_ui_api(&lua, &parley, bridge, Arc::clone(&script_dir))
            .map_err(lua_to_script_error)?;

        lua.globals()
            .set("parley", parley)
            .map_err(lua_to_script_error)?;

        Ok(Self {
            lua: Mutex::new(lua),
            handlers,
            script_dir,
        })
    }

    /// Invoke the handler in `slot` with `args`, if one is registered.
    fn call_handler<A, R>(&self, slot: HandlerKind, args: A) -> Result<Option<R>, ScriptError>
    where
        A: IntoLuaMulti,
        R: FromLuaMulti,
    {
        let lua = self.lua.lock().map_err(|e| {
            ScriptError::new(format!("lua lock poisoned: {}", e))
        })?;
        let handlers = self.handlers.lock().map_err(|e| {
            ScriptError::new(format!("handler registry lock poisoned: {}", e))
        })?;

        let Some(key) = handlers.get(slot) else {
            return Ok(None);
        };
        let func: LuaFunction = lua.registry_value(key).map_err(lua_to_script_error)?;
        let result = func.call::<R>(args).map_err(lua_to_script_error)?;
        Ok(Some(result))
    }
}

impl ScriptEnginePort for LuaChatEngine {
    fn load_script(&self, path: &Path) -> Result<(), ScriptError> {
        let lua = self.lua.lock().map_err(|e| {
            ScriptError::new(format!("lua lock poisoned: {}", e))
        })?;

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScriptError::new(format!("failed to read {}: {}", path.display(), e))
        })?;

        // Reloading replaces the previous script's handlers
        if let Ok(mut handlers) = self.handlers.lock() {
            for old in handlers.clear() {
                let _ = lua.remove_registry_value(old);
            }
        }
        if let Ok(mut dir) = self.script_dir.lock() {
            *dir = path.parent().map(|p| p.to_path_buf());
        }

        lua.load(&content)
            .set_name(path.to_string_lossy())
            .exec()
            .map_err(lua_to_script_error)?;

        Ok(())
    }

    fn welcome(&self) -> Result<Option<String>, ScriptError> {
        Ok(self
            .call_handler::<_, Option<String>>(HandlerKind::Welcome, ())?
            .flatten())
    }

    fn handle_message(&self, input: &str) -> Result<String, ScriptError> {
        match self.call_handler::<_, Option<String>>(HandlerKind::Message, input.to_string())? {
            Some(reply) => Ok(reply.unwrap_or_default()),
            None => Err(ScriptError::new(
                "script registered no message handler (parley.on_message)",
            )),
        }
    }

    fn help(&self) -> Result<Option<String>, ScriptError> {
        Ok(self
            .call_handler::<_, Option<String>>(HandlerKind::Help, ())?
            .flatten())
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Convert an mlua error to a ScriptError.
fn lua_to_script_error(e: LuaError) -> ScriptError {
    ScriptError::new(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_application::BridgeError;
    use parley_domain::{ImageRef, PickOutcome};

    /// Scripted bridge double: popups and picker sessions complete with
    /// pre-arranged results, and all output is recorded.
    #[derive(Default)]
    struct TestBridge {
        printed: Mutex<Vec<String>>,
        shown_images: Mutex<Vec<ImageRef>>,
        next_input: Mutex<Option<String>>,
        next_pick: Mutex<Option<PickOutcome>>,
        input: Mutex<Option<String>>,
        picked: Mutex<Vec<ImageRef>>,
        canceled: Mutex<bool>,
    }

    impl TestBridge {
        fn with_input(self, line: &str) -> Self {
            *self.next_input.lock().unwrap() = Some(line.to_string());
            self
        }

        fn with_pick(self, outcome: PickOutcome) -> Self {
            *self.next_pick.lock().unwrap() = Some(outcome);
            self
        }
    }

    impl UiBridgePort for TestBridge {
        fn print_text(&self, text: &str) {
            self.printed.lock().unwrap().push(text.to_string());
        }

        fn print_image(&self, image: &ImageRef) {
            self.shown_images.lock().unwrap().push(image.clone());
        }

        fn is_canceled(&self) -> bool {
            *self.canceled.lock().unwrap()
        }

        fn start_popup_input(&self, _prompt_path: &Path) -> Result<(), BridgeError> {
            *self.canceled.lock().unwrap() = false;
            match self.next_input.lock().unwrap().take() {
                Some(line) => *self.input.lock().unwrap() = Some(line),
                None => *self.canceled.lock().unwrap() = true,
            }
            Ok(())
        }

        fn receive_input(&self) -> Option<String> {
            self.input.lock().unwrap().take()
        }

        fn start_popup_message(&self, _message_path: &Path) -> Result<(), BridgeError> {
            Ok(())
        }

        fn start_pick_from_library(&self, count: usize) -> Result<(), BridgeError> {
            *self.canceled.lock().unwrap() = false;
            let outcome = self
                .next_pick
                .lock()
                .unwrap()
                .take()
                .unwrap_or(PickOutcome::Canceled);
            match outcome {
                PickOutcome::Selected(mut images) => {
                    images.truncate(count);
                    *self.picked.lock().unwrap() = images;
                }
                PickOutcome::Canceled => {
                    *self.canceled.lock().unwrap() = true;
                    self.picked.lock().unwrap().clear();
                }
            }
            Ok(())
        }

        fn receive_picked(&self) -> Vec<ImageRef> {
            std::mem::take(&mut self.picked.lock().unwrap())
        }
    }

    fn make_engine(bridge: Arc<TestBridge>) -> LuaChatEngine {
        LuaChatEngine::new(bridge).unwrap()
    }

    fn load(engine: &LuaChatEngine, source: &str) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.lua");
        std::fs::write(&path, source).unwrap();
        engine.load_script(&path).unwrap();
    }

    #[test]
    fn test_engine_is_available() {
        let engine = make_engine(Arc::new(TestBridge::default()));
        assert!(engine.is_available());
    }

    #[test]
    fn test_fresh_bridge_not_canceled_from_lua() {
        let engine = make_engine(Arc::new(TestBridge::default()));
        load(
            &engine,
            r#"
            parley.on_message(function(input)
                return tostring(parley.ui.is_canceled())
            end)
        "#,
        );
        assert_eq!(engine.handle_message("x").unwrap(), "false");
    }

    #[test]
    fn test_handler_dispatch() {
        let engine = make_engine(Arc::new(TestBridge::default()));
        load(
            &engine,
            r#"
            parley.welcome(function() return "hi there" end)
            parley.help(function() return "no help" end)
            parley.on_message(function(input) return "you said: " .. input end)
        "#,
        );

        assert_eq!(engine.welcome().unwrap().as_deref(), Some("hi there"));
        assert_eq!(engine.help().unwrap().as_deref(), Some("no help"));
        assert_eq!(engine.handle_message("ping").unwrap(), "you said: ping");
    }

    #[test]
    fn test_missing_handlers() {
        let engine = make_engine(Arc::new(TestBridge::default()));
        load(&engine, "-- registers nothing\n");

        assert!(engine.welcome().unwrap().is_none());
        assert!(engine.help().unwrap().is_none());
        let err = engine.handle_message("hello").unwrap_err();
        assert!(err.message.contains("on_message"));
    }

    #[test]
    fn test_nil_reply_becomes_empty_string() {
        let engine = make_engine(Arc::new(TestBridge::default()));
        load(&engine, "parley.on_message(function(input) end)");
        assert_eq!(engine.handle_message("x").unwrap(), "");
    }

    #[test]
    fn test_print_reaches_bridge() {
        let bridge = Arc::new(TestBridge::default());
        let engine = make_engine(bridge.clone());
        load(
            &engine,
            r#"
            parley.on_message(function(input)
                parley.ui.print("side channel")
                return "ok"
            end)
        "#,
        );

        engine.handle_message("x").unwrap();
        assert_eq!(*bridge.printed.lock().unwrap(), vec!["side channel"]);
    }

    #[test]
    fn test_print_image_resolves_relative_to_script_dir() {
        let bridge = Arc::new(TestBridge::default());
        let engine = make_engine(bridge.clone());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.lua");
        std::fs::write(
            &path,
            r#"parley.on_message(function(input)
                parley.ui.print_image("img/cat.png")
                return ""
            end)"#,
        )
        .unwrap();
        engine.load_script(&path).unwrap();
        engine.handle_message("x").unwrap();

        let images = bridge.shown_images.lock().unwrap();
        assert_eq!(images[0].path(), dir.path().join("img/cat.png"));
    }

    #[test]
    fn test_picker_selection_in_order_and_consumed_once() {
        let bridge = Arc::new(TestBridge::default().with_pick(PickOutcome::Selected(vec![
            ImageRef::new("/lib/b.png"),
            ImageRef::new("/lib/a.png"),
        ])));
        let engine = make_engine(bridge);
        load(
            &engine,
            r#"
            parley.on_message(function(input)
                parley.ui.pick_from_library(4)
                local first = parley.ui.receive_picked()
                local second = parley.ui.receive_picked()
                return table.concat(first, ",") .. "|" .. #second
            end)
        "#,
        );

        // Selection order preserved; second receive is empty
        assert_eq!(
            engine.handle_message("x").unwrap(),
            "/lib/b.png,/lib/a.png|0"
        );
    }

    #[test]
    fn test_picker_limit_applies() {
        let bridge = Arc::new(TestBridge::default().with_pick(PickOutcome::Selected(vec![
            ImageRef::new("/lib/a.png"),
            ImageRef::new("/lib/b.png"),
            ImageRef::new("/lib/c.png"),
        ])));
        let engine = make_engine(bridge);
        load(
            &engine,
            r#"
            parley.on_message(function(input)
                parley.ui.pick_from_library(2)
                return tostring(#parley.ui.receive_picked())
            end)
        "#,
        );
        assert_eq!(engine.handle_message("x").unwrap(), "2");
    }

    #[test]
    fn test_picker_cancellation() {
        let bridge = Arc::new(TestBridge::default().with_pick(PickOutcome::Canceled));
        let engine = make_engine(bridge);
        load(
            &engine,
            r#"
            parley.on_message(function(input)
                parley.ui.pick_from_library(3)
                local picked = parley.ui.receive_picked()
                return tostring(parley.ui.is_canceled()) .. "|" .. #picked
            end)
        "#,
        );
        assert_eq!(engine.handle_message("x").unwrap(), "true|0");
    }

    #[test]
    fn test_popup_input_flow() {
        let bridge = Arc::new(TestBridge::default().with_input("Ada"));
        let engine = make_engine(bridge);
        load(
            &engine,
            r#"
            parley.on_message(function(input)
                parley.ui.popup_input("prompts/name.txt")
                local name = parley.ui.receive_input()
                local again = parley.ui.receive_input()
                return tostring(name) .. "|" .. tostring(again)
            end)
        "#,
        );
        // Input popup result is also consume-once
        assert_eq!(engine.handle_message("x").unwrap(), "Ada|nil");
    }

    #[test]
    fn test_popup_input_cancellation() {
        let bridge = Arc::new(TestBridge::default());
        let engine = make_engine(bridge);
        load(
            &engine,
            r#"
            parley.on_message(function(input)
                parley.ui.popup_input("prompts/name.txt")
                return tostring(parley.ui.is_canceled()) .. "|" .. tostring(parley.ui.receive_input())
            end)
        "#,
        );
        assert_eq!(engine.handle_message("x").unwrap(), "true|nil");
    }

    #[test]
    fn test_reload_replaces_handlers() {
        let engine = make_engine(Arc::new(TestBridge::default()));
        load(&engine, "parley.on_message(function(input) return 'first' end)");
        assert_eq!(engine.handle_message("x").unwrap(), "first");

        load(&engine, "parley.welcome(function() return 'w' end)");
        // Second script registered no message handler, so the first one is gone
        assert!(engine.handle_message("x").is_err());
        assert_eq!(engine.welcome().unwrap().as_deref(), Some("w"));
    }

    #[test]
    fn test_load_nonexistent_script() {
        let engine = make_engine(Arc::new(TestBridge::default()));
        let result = engine.load_script(Path::new("/nonexistent/chat.lua"));
        assert!(result.is_err());
        assert!(result.unwrap_err().message.contains("/nonexistent/chat.lua"));
    }

    #[test]
    fn test_script_syntax_error_names_file() {
        let engine = make_engine(Arc::new(TestBridge::default()));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.lua");
        std::fs::write(&path, "this is not lua {{{{").unwrap();

        let result = engine.load_script(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().message.contains("bad.lua"));
    }

    #[test]
    fn test_sandbox_active() {
        let engine = make_engine(Arc::new(TestBridge::default()));
        load(
            &engine,
            r#"
            parley.on_message(function(input)
                return tostring(package.loadlib)
            end)
        "#,
        );
        assert_eq!(engine.handle_message("x").unwrap(), "nil");
    }
}
