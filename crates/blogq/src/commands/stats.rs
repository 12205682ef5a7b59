//! Stats command implementation.

use blog_store_rs::blog_stats;

use super::{CommandContext, Result};
use crate::output::{format_stats_json, format_stats_table};

/// Executes the stats command.
///
/// # Errors
///
/// Returns an error if the data file cannot be read or parsed.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let stats = blog_stats(&ctx.store()?)?;

    if ctx.json_output {
        println!("{}", format_stats_json(&stats)?);
    } else if !ctx.quiet {
        print!("{}", format_stats_table(&stats, ctx.use_colors));
    }

    Ok(())
}
