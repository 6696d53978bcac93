//! Handler registry for chat scripts.
//!
//! A script registers at most one handler per kind (`parley.welcome`,
//! `parley.on_message`, `parley.help`). Handlers are stored as Lua
//! registry keys; re-registration replaces the previous handler and
//! reloading a script clears all of them.

use mlua::prelude::*;

/// The three handler slots a chat script can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Welcome,
    Message,
    Help,
}

impl HandlerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Message => "on_message",
            Self::Help => "help",
        }
    }
}

/// Registry of script handlers, one slot per kind.
#[derive(Default)]
pub struct HandlerRegistry {
    welcome: Option<LuaRegistryKey>,
    message: Option<LuaRegistryKey>,
    help: Option<LuaRegistryKey>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a handler, returning the key it replaced (if any) so the
    /// caller can drop it from the Lua registry.
    pub fn set(&mut self, kind: HandlerKind, key: LuaRegistryKey) -> Option<LuaRegistryKey> {
        self.slot(kind).replace(key)
    }

    pub fn get(&self, kind: HandlerKind) -> Option<&LuaRegistryKey> {
        match kind {
            HandlerKind::Welcome => self.welcome.as_ref(),
            HandlerKind::Message => self.message.as_ref(),
            HandlerKind::Help => self.help.as_ref(),
        }
    }

    /// Drain every registered handler (used on script reload).
    pub fn clear(&mut self) -> Vec<LuaRegistryKey> {
        [
            self.welcome.take(),
            self.message.take(),
            self.help.take(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn slot(&mut self, kind: HandlerKind) -> &mut Option<LuaRegistryKey> {
        match kind {
            HandlerKind::Welcome => &mut self.welcome,
            HandlerKind::Message => &mut self.message,
            HandlerKind::Help => &mut self.help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(lua: &Lua, body: &str) -> LuaRegistryKey {
        let func = lua.load(body).eval::<LuaFunction>().unwrap();
        lua.create_registry_value(func).unwrap()
    }

    #[test]
    fn test_registry_set_and_get() {
        let lua = Lua::new();
        let mut registry = HandlerRegistry::new();

        assert!(registry.get(HandlerKind::Message).is_none());
        let replaced = registry.set(HandlerKind::Message, make_key(&lua, "function() end"));
        assert!(replaced.is_none());
        assert!(registry.get(HandlerKind::Message).is_some());
        assert!(registry.get(HandlerKind::Welcome).is_none());
    }

    #[test]
    fn test_re_registration_returns_old_key() {
        let lua = Lua::new();
        let mut registry = HandlerRegistry::new();

        registry.set(HandlerKind::Welcome, make_key(&lua, "function() return 'a' end"));
        let replaced = registry.set(
            HandlerKind::Welcome,
            make_key(&lua, "function() return 'b' end"),
        );
        assert!(replaced.is_some());

        // Latest registration wins
        let func: LuaFunction = lua
            .registry_value(registry.get(HandlerKind::Welcome).unwrap())
            .unwrap();
        let result: String = func.call(()).unwrap();
        assert_eq!(result, "b");
    }

    #[test]
    fn test_clear_drains_all_slots() {
        let lua = Lua::new();
        let mut registry = HandlerRegistry::new();

        registry.set(HandlerKind::Welcome, make_key(&lua, "function() end"));
        registry.set(HandlerKind::Message, make_key(&lua, "function() end"));

        let drained = registry.clear();
        assert_eq!(drained.len(), 2);
        assert!(registry.get(HandlerKind::Welcome).is_none());
        assert!(registry.get(HandlerKind::Message).is_none());
    }
}
