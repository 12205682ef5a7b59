//! Show command implementation.
//!
//! Displays one post with its category filled in.

use blog_store_rs::get_post;
use tracing::debug;

use super::{CommandContext, CommandError, Result};
use crate::output::{format_post_detail_json, format_post_detail_table};

/// Options for the show command.
#[derive(Debug)]
pub struct ShowOptions {
    /// Post ID.
    pub id: String,
    /// Username for `isLiked`.
    pub viewer: Option<String>,
}

/// Executes the show command.
///
/// # Errors
///
/// Returns an error if the data file cannot be read or if the post is not found.
pub fn execute(ctx: &CommandContext, opts: &ShowOptions) -> Result<()> {
    let store = ctx.store()?;
    debug!(path = %store.path().display(), id = %opts.id, "showing post");

    let detail = get_post(&store, &opts.id, opts.viewer.as_deref())?.ok_or_else(|| {
        CommandError::NotFound {
            resource_type: "Post",
            identifier: opts.id.clone(),
        }
    })?;

    if ctx.json_output {
        println!("{}", format_post_detail_json(&detail)?);
    } else if !ctx.quiet {
        print!("{}", format_post_detail_table(&detail, ctx.use_colors));
    }

    Ok(())
}
