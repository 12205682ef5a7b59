//! Posts command implementation.
//!
//! Lists posts from the data file through the listing pipeline: simple
//! filters, structured query, sort and pagination.

use blog_store_rs::listing::DEFAULT_LIMIT;
use blog_store_rs::{list_posts, ListOptions, SortField};
use tracing::debug;

use super::{CommandContext, Result};
use crate::cli::SortArg;
use crate::output::{format_posts_json, format_posts_table};

/// Options for the posts command.
#[derive(Debug, Default)]
pub struct PostsOptions {
    /// Structured query.
    pub query: Option<String>,
    /// Filter by author.
    pub autor: Option<String>,
    /// Filter by state.
    pub estado: Option<String>,
    /// Filter by tag.
    pub etiqueta: Option<String>,
    /// Filter by category ID.
    pub categoria: Option<String>,
    /// Legacy title/body search.
    pub busqueda: Option<String>,
    /// Sort order; falls back to `listing.sort`.
    pub ordenar: Option<SortArg>,
    /// Page number.
    pub pagina: usize,
    /// Page size; falls back to `listing.limit`.
    pub limite: Option<usize>,
    /// Username for `isLiked`.
    pub viewer: Option<String>,
}

/// Executes the posts command.
///
/// # Errors
///
/// Returns an error if the data file cannot be read or parsed.
pub fn execute(ctx: &CommandContext, opts: &PostsOptions) -> Result<()> {
    let store = ctx.store()?;
    debug!(path = %store.path().display(), "listing posts");

    let list_opts = build_list_options(ctx, opts);
    let page = list_posts(&store, &list_opts)?;

    if ctx.json_output {
        println!("{}", format_posts_json(&page)?);
    } else if !ctx.quiet {
        print!("{}", format_posts_table(&page, ctx.use_colors));
    }

    Ok(())
}

/// Merges command options with configured defaults.
fn build_list_options(ctx: &CommandContext, opts: &PostsOptions) -> ListOptions {
    let ordenar = opts
        .ordenar
        .map(sort_field)
        .or_else(|| ctx.config.listing.sort_field())
        .unwrap_or_default();
    let limite = opts
        .limite
        .or(ctx.config.listing.limit)
        .unwrap_or(DEFAULT_LIMIT);

    ListOptions {
        autor: opts.autor.clone(),
        estado: opts.estado.clone(),
        etiqueta: opts.etiqueta.clone(),
        categoria: opts.categoria.clone(),
        busqueda: opts.busqueda.clone(),
        q: opts.query.clone(),
        ordenar,
        pagina: opts.pagina,
        limite,
        viewer: opts.viewer.clone(),
    }
}

fn sort_field(arg: SortArg) -> SortField {
    match arg {
        SortArg::Titulo => SortField::Titulo,
        SortArg::Visitas => SortField::Visitas,
        SortArg::FechaCreacion => SortField::FechaCreacion,
    }
}
