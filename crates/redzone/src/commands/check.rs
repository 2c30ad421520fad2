//! Check command - compile templates without rendering

use crate::context::Context;
use anyhow::{Result, bail};
use colored::Colorize;

/// Compile every template, printing one status line each
pub fn run(ctx: &Context, templates: &[String]) -> Result<()> {
    let mut failed = 0;

    for name in templates {
        match ctx.compile(name) {
            Ok(template) => {
                println!("{} {}", "✓".green().bold(), name);
                if ctx.verbose {
                    println!("  {} {} nodes", "→".cyan(), template.len());
                }
            }
            Err(e) => {
                println!("{} {}: {}", "✗".red().bold(), name, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} templates failed to compile", failed, templates.len());
    }

    Ok(())
}
