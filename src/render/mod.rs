//! Renderer trait and format dispatch.

pub mod json;
pub mod lua;

use crate::error::{Error, Result};
use crate::model::Section;

/// Trait for rendering one section into a specific output format.
pub trait Renderer {
    fn render(&self, section: &Section) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
///
/// `manual_url` is the base of the per-command "View Online" links.
pub fn create_renderer(format: &str, manual_url: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "lua" => Ok(Box::new(lua::LuaRenderer::new(manual_url))),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(Error::UnknownFormat(format.to_string())),
    }
}
