//! Lua sandbox — blocks C module loading.
//!
//! Chat scripts are the user's own files, so the standard library stays
//! available; only C extension loading is blocked to avoid ABI
//! incompatibility crashes.

use mlua::prelude::*;

/// Apply sandbox restrictions to the Lua VM.
///
/// Blocks `package.loadlib` and clears `package.cpath` so scripts cannot
/// pull in arbitrary shared objects. Pure-Lua `require` keeps working.
pub fn apply_sandbox(lua: &Lua) -> LuaResult<()> {
    lua.load(
        r#"
        package.loadlib = nil
        package.cpath = ''
    "#,
    )
    .exec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loadlib_blocked() {
        let lua = Lua::new();
        apply_sandbox(&lua).unwrap();

        let loadlib: LuaValue = lua
            .globals()
            .get::<LuaTable>("package")
            .unwrap()
            .get("loadlib")
            .unwrap();
        assert_eq!(loadlib, LuaValue::Nil);
    }

    #[test]
    fn test_cpath_cleared() {
        let lua = Lua::new();
        apply_sandbox(&lua).unwrap();

        let cpath: String = lua
            .globals()
            .get::<LuaTable>("package")
            .unwrap()
            .get("cpath")
            .unwrap();
        assert!(cpath.is_empty());
    }

    #[test]
    fn test_standard_library_untouched() {
        let lua = Lua::new();
        apply_sandbox(&lua).unwrap();

        let upper: String = lua.load("string.upper('chat')").eval().unwrap();
        assert_eq!(upper, "CHAT");

        let joined: String = lua
            .load("table.concat({'1', '2', '3'}, '-')")
            .eval()
            .unwrap();
        assert_eq!(joined, "1-2-3");
    }
}
