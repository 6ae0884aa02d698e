//! pico8-stubs: generate Lua language-server stubs from the PICO-8 API
//! reference text.
//!
//! - **stdin mode**: `pico8-stubs < pico8_api_reference.txt` prints every
//!   section to stdout
//! - **file mode**: `pico8-stubs pico8_api_reference.txt -o library/pico8`
//!   writes one file per section, named through the title table

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use pico8_stubs::render::{self, lua::DEFAULT_MANUAL_URL, Renderer};
use pico8_stubs::titles::{self, TitleMap};
use pico8_stubs::{parse, Error, Section};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "pico8-stubs",
    version,
    about = "Generate Lua language-server stubs from the PICO-8 API reference"
)]
struct Cli {
    /// Reference text file. If omitted, reads from stdin and writes to stdout.
    input: Option<PathBuf>,

    /// Output directory (required when an input file is given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: lua (default), json
    #[arg(short = 'f', long, default_value = "lua")]
    format: String,

    /// Base URL for the "View Online" links
    #[arg(long, default_value = DEFAULT_MANUAL_URL)]
    manual_url: String,

    /// Map a section title to an output name, e.g. "Graphics=gfx".
    /// Can be specified multiple times.
    #[arg(short = 'm', long = "map", value_parser = titles::parse_mapping)]
    mappings: Vec<(String, String)>,

    /// Skip sections whose title has no output name instead of failing
    #[arg(long)]
    skip_unknown: bool,

    /// Log parsing progress
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let renderer = render::create_renderer(&cli.format, &cli.manual_url)?;

    match cli.input {
        Some(ref input) => file_mode(&cli, input, renderer.as_ref()),
        None => stdin_mode(renderer.as_ref()),
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

/// stdin mode: read the reference from stdin, print every section.
fn stdin_mode(renderer: &dyn Renderer) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let sections = parse(&input).context("failed to parse reference from stdin")?;
    for section in &sections {
        print!("{}", renderer.render(section)?);
    }
    Ok(())
}

/// file mode: one output file per section in the output directory.
fn file_mode(cli: &Cli, input: &Path, renderer: &dyn Renderer) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when an input file is given")?;

    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let sections =
        parse(&text).with_context(|| format!("failed to parse {}", input.display()))?;

    let mut title_map = TitleMap::default();
    for (title, name) in &cli.mappings {
        title_map.insert(title, name);
    }

    let planned = plan_outputs(&sections, &title_map, output_dir, renderer, cli.skip_unknown)?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    for (path, section) in planned {
        fs::write(&path, renderer.render(section)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(
            "wrote {} ({} commands)",
            path.display(),
            section.commands.len()
        );
    }

    Ok(())
}

/// Target path for every written section. Fails on an unmapped title or
/// two sections sharing a target, before anything touches the disk.
fn plan_outputs<'a>(
    sections: &'a [Section],
    title_map: &TitleMap,
    output_dir: &Path,
    renderer: &dyn Renderer,
    skip_unknown: bool,
) -> Result<Vec<(PathBuf, &'a Section)>> {
    let mut planned: Vec<(PathBuf, &Section)> = Vec::with_capacity(sections.len());
    for section in sections {
        let Some(path) = output_path(section, title_map, output_dir, renderer, skip_unknown)? else {
            continue;
        };
        if let Some((_, earlier)) = planned.iter().find(|(p, _)| *p == path) {
            bail!(
                "sections {:?} and {:?} both map to {}",
                earlier.title,
                section.title,
                path.display()
            );
        }
        planned.push((path, section));
    }
    Ok(planned)
}

/// Where a section goes, or `None` when it is skipped.
fn output_path(
    section: &Section,
    title_map: &TitleMap,
    output_dir: &Path,
    renderer: &dyn Renderer,
    skip_unknown: bool,
) -> Result<Option<PathBuf>> {
    match title_map.lookup(&section.title) {
        Ok(name) => Ok(Some(
            output_dir.join(format!("{}.{}", name, renderer.file_extension())),
        )),
        Err(Error::UnknownSection(title)) if skip_unknown => {
            warn!("skipping section with unmapped title {:?}", title);
            Ok(None)
        }
        Err(e) => Err(e).context("use --map TITLE=NAME or --skip-unknown"),
    }
}
