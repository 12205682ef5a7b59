//! Comments command implementation.
//!
//! Lists the comments on one post, newest first, one page at a time.

use blog_store_rs::listing::DEFAULT_LIMIT;
use blog_store_rs::{list_comments, CommentListOptions};
use tracing::debug;

use super::{CommandContext, CommandError, Result};
use crate::output::{format_comments_json, format_comments_table};

/// Options for the comments command.
#[derive(Debug, Default)]
pub struct CommentsOptions {
    /// The post whose comments are listed.
    pub post_id: String,
    /// Filter by moderation state.
    pub estado: Option<String>,
    /// Page number.
    pub pagina: usize,
    /// Page size; falls back to `listing.limit`.
    pub limite: Option<usize>,
    /// Username for `isLiked`.
    pub viewer: Option<String>,
}

/// Executes the comments command.
///
/// # Errors
///
/// Returns an error if the data file cannot be read or if the post is not found.
pub fn execute(ctx: &CommandContext, opts: &CommentsOptions) -> Result<()> {
    let store = ctx.store()?;
    debug!(path = %store.path().display(), post_id = %opts.post_id, "listing comments");

    let list_opts = build_list_options(ctx, opts);
    let page = list_comments(&store, &opts.post_id, &list_opts)?.ok_or_else(|| {
        CommandError::NotFound {
            resource_type: "Post",
            identifier: opts.post_id.clone(),
        }
    })?;

    if ctx.json_output {
        println!("{}", format_comments_json(&page)?);
    } else if !ctx.quiet {
        print!("{}", format_comments_table(&page, ctx.use_colors));
    }

    Ok(())
}

fn build_list_options(ctx: &CommandContext, opts: &CommentsOptions) -> CommentListOptions {
    CommentListOptions {
        estado: opts.estado.clone(),
        pagina: opts.pagina,
        limite: opts
            .limite
            .or(ctx.config.listing.limit)
            .unwrap_or(DEFAULT_LIMIT),
        viewer: opts.viewer.clone(),
    }
}
