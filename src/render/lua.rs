//! Lua language-server stub renderer.
//!
//! Each command becomes a commented copy of its reference entry followed by
//! a stub declaration:
//!
//! ```text
//! ---@overload fun(tile_x: unknown, tile_y: unknown, sx: unknown, sy: unknown, tile_w: unknown, tile_h: unknown): unknown
//! ---@overload fun(tile_x: unknown, tile_y: unknown, sx: unknown, sy: unknown): unknown
//! ---@param tile_x unknown
//! ---@param tile_y unknown
//! ---@return unknown
//! function map(tile_x, tile_y) end
//! ```
//!
//! The declaration carries only the arguments outside every optional group;
//! each admissible expansion of the groups becomes one overload, most
//! expanded first. The reference has no type information, so every type is
//! `unknown`.

use crate::error::Result;
use crate::model::*;
use crate::overload::progress_overloads;
use crate::render::Renderer;

pub const DEFAULT_MANUAL_URL: &str = "https://www.lexaloffle.com/dl/docs/pico-8_manual.html";

const META: &str = "---@meta";
const VARIADIC: &str = "...";

pub struct LuaRenderer {
    manual_url: String,
}

impl LuaRenderer {
    pub fn new(manual_url: impl Into<String>) -> Self {
        Self {
            manual_url: manual_url.into(),
        }
    }

    /// Commented reference entry plus the stub for one command.
    pub fn render_command(&self, command: &Command) -> String {
        let mut out = String::new();
        push_comment(&mut out, &command.original);
        for line in command.doc.split_inclusive('\n') {
            push_comment(&mut out, line);
        }
        push_comment(
            &mut out,
            &format!("[View Online]({}#{})", self.manual_url, command.name),
        );
        out.push_str("---\n");
        out.push_str(&command_to_lua_function(command));
        out.push_str("\n\n");
        out
    }
}

impl Default for LuaRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_MANUAL_URL)
    }
}

impl Renderer for LuaRenderer {
    fn render(&self, section: &Section) -> Result<String> {
        let mut out = String::new();
        out.push_str(META);
        out.push_str("\n\n");

        for line in section.header.iter().chain(&section.doc) {
            push_comment(&mut out, line);
        }
        out.push_str("\n\n");

        for command in &section.commands {
            out.push_str(&self.render_command(command));
        }
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "lua"
    }
}

/// `--- <line>`, keeping the output line-structured when the source line
/// has no terminator.
fn push_comment(out: &mut String, line: &str) {
    out.push_str("--- ");
    out.push_str(line);
    if !line.ends_with('\n') {
        out.push('\n');
    }
}

/// Annotation lines for a command, top to bottom.
pub fn lua_function_lines(command: &Command) -> Vec<String> {
    let defaults: Vec<String> = command.default_args().map(str::to_lowercase).collect();
    let mut overloads: Vec<Vec<&str>> = progress_overloads(&command.args).collect();
    overloads.reverse();

    let mut lines = Vec::with_capacity(overloads.len() + defaults.len() + 2);
    for signature in &overloads {
        let params: Vec<String> = signature
            .iter()
            .map(|name| {
                if is_variadic(name) {
                    VARIADIC.to_string()
                } else {
                    format!("{}: unknown", name.to_lowercase())
                }
            })
            .collect();
        lines.push(format!("---@overload fun({}): unknown", params.join(", ")));
    }

    for name in defaults.iter().filter(|name| !is_variadic(name)) {
        lines.push(format!("---@param {} unknown", name));
    }
    lines.push("---@return unknown".to_string());

    let declared: Vec<&str> = defaults
        .iter()
        .map(|name| if is_variadic(name) { VARIADIC } else { name.as_str() })
        .collect();
    lines.push(format!(
        "function {}({}) end",
        command.name.to_lowercase(),
        declared.join(", ")
    ));
    lines
}

/// The stub for a command as a single newline-joined block.
pub fn command_to_lua_function(command: &Command) -> String {
    lua_function_lines(command).join("\n")
}
