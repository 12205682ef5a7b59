//! Parse command implementation.
//!
//! Shows how a query string is split into tokens and read as clauses,
//! without evaluating it against any data.

use blog_store_rs::query::{Lexer, QueryParser};

use super::{CommandContext, Result};
use crate::output::{format_parsed_query_json, format_parsed_query_table};

/// Executes the parse command.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn execute(ctx: &CommandContext, query: &str) -> Result<()> {
    let tokens = Lexer::new(query).tokenize();
    let parsed = QueryParser::parse(query);

    if ctx.json_output {
        println!("{}", format_parsed_query_json(&tokens, &parsed)?);
    } else if !ctx.quiet {
        print!("{}", format_parsed_query_table(&tokens, &parsed, ctx.use_colors));
    }

    Ok(())
}
