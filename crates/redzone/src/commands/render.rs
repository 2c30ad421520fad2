//! Render command - compile a template and render it with data

use crate::context::Context;
use crate::output;
use anyhow::{Context as _, Result};
use colored::Colorize;
use redzone_core::RedzoneError;
use redzone_core::data::load_context;
use redzone_core::template::Context as RenderContext;
use std::fs;
use std::path::Path;

/// Render `template` to stdout or `output`
///
/// Status lines go to stderr so that stdout carries only the rendered text.
pub fn run(
    ctx: &Context,
    template: &str,
    data: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    if ctx.verbose {
        eprintln!("{} Compiling '{}'", "→".cyan(), template);
    }
    let compiled = ctx.compile(template)?;

    let data = match data {
        Some(path) => {
            if ctx.verbose {
                eprintln!("{} Loading data from '{}'", "→".cyan(), path.display());
            }
            load_context(path)?
        }
        None => RenderContext::new(),
    };

    let rendered = compiled
        .render_to_string(&data)
        .map_err(RedzoneError::from)?;

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            if ctx.verbose {
                eprintln!("{} Wrote '{}'", "✓".green().bold(), path.display());
            }
        }
        None => output::print_raw(&rendered)?,
    }

    Ok(())
}
