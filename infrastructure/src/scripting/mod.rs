//! Lua chat script engine
//!
//! `LuaChatEngine` implements `ScriptEnginePort` over a sandboxed Lua 5.4
//! VM. Scripts register chat handlers through the `parley` global and
//! reach the UI through `parley.ui.*`, which delegates to the injected
//! `UiBridgePort`.

pub mod handlers;
pub mod lua_engine;
pub mod sandbox;
pub mod ui_api;

pub use lua_engine::LuaChatEngine;
