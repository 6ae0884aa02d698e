//! JSON renderer: structured output for tooling integration.
//!
//! Serializes a section together with the signatures derived from each
//! command's argument grammar, so consumers do not need to re-implement the
//! overload expansion.

use crate::error::{Error, Result};
use crate::model::*;
use crate::overload::progress_overloads;
use crate::render::Renderer;
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct SectionJson<'a> {
    title: &'a str,
    header: &'a [String; 3],
    documentation: &'a [String],
    commands: Vec<CommandJson<'a>>,
}

#[derive(Serialize)]
struct CommandJson<'a> {
    name: &'a str,
    original: &'a str,
    documentation: &'a str,
    arguments: &'a [ArgNode],
    /// Arguments outside every optional group
    parameters: Vec<&'a str>,
    /// Most expanded first
    overloads: Vec<Vec<&'a str>>,
}

impl<'a> From<&'a Command> for CommandJson<'a> {
    fn from(command: &'a Command) -> Self {
        let mut overloads: Vec<_> = progress_overloads(&command.args).collect();
        overloads.reverse();
        CommandJson {
            name: &command.name,
            original: &command.original,
            documentation: &command.doc,
            arguments: &command.args,
            parameters: command.default_args().collect(),
            overloads,
        }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, section: &Section) -> Result<String> {
        let view = SectionJson {
            title: &section.title,
            header: &section.header,
            documentation: &section.doc,
            commands: section.commands.iter().map(CommandJson::from).collect(),
        };
        let mut out =
            serde_json::to_string_pretty(&view).map_err(|e| Error::Serialize(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use serde_json::{json, Value};

    #[test]
    fn section_as_json() {
        let text = "----------\nGraphics\n----------\n    CAMERA([X, Y])\n        offset\n";
        let sections = parse(text).unwrap();
        let out = JsonRenderer.render(&sections[0]).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["title"], "Graphics");
        assert_eq!(value["documentation"], json!([]));
        let camera = &value["commands"][0];
        assert_eq!(camera["name"], "CAMERA");
        assert_eq!(camera["original"], "CAMERA([X, Y])");
        assert_eq!(camera["documentation"], "        offset\n");
        assert_eq!(camera["arguments"], json!([["X", "Y"]]));
        assert_eq!(camera["parameters"], json!([]));
        assert_eq!(camera["overloads"], json!([["X", "Y"]]));
    }

    #[test]
    fn overloads_most_expanded_first() {
        let text = "----------\nMap\n----------\n    MAP(TILE_X, TILE_Y, [SX, SY], [TILE_W, TILE_H])\n";
        let sections = parse(text).unwrap();
        let value: Value = serde_json::from_str(&JsonRenderer.render(&sections[0]).unwrap()).unwrap();
        assert_eq!(
            value["commands"][0]["overloads"],
            json!([
                ["TILE_X", "TILE_Y", "SX", "SY", "TILE_W", "TILE_H"],
                ["TILE_X", "TILE_Y", "SX", "SY"]
            ])
        );
        assert_eq!(value["commands"][0]["parameters"], json!(["TILE_X", "TILE_Y"]));
    }
}
