//! Filter command implementation.
//!
//! Applies a structured query to an arbitrary JSON array of objects and
//! prints the matching objects as JSON, in input order.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use blog_store_rs::query::{QueryEvaluator, QueryParser};
use blog_store_rs::POST_SEARCH_FIELDS;
use serde_json::Value;
use tracing::debug;

use super::{CommandContext, CommandError, Result};

/// Options for the filter command.
#[derive(Debug)]
pub struct FilterOptions<'a> {
    /// JSON input file; `-` reads stdin.
    pub file: &'a Path,
    /// Query to apply.
    pub query: &'a str,
    /// Free-text fields; falls back to `search.fields`, then the post fields.
    pub fields: &'a [String],
}

/// Executes the filter command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is not valid JSON, or is
/// not a JSON array.
pub fn execute(ctx: &CommandContext, opts: &FilterOptions<'_>) -> Result<()> {
    let input = read_input(opts.file)?;
    let fields = text_fields(ctx, opts.fields);

    let matches = filter_json(&input, opts.query, &fields)?;
    println!("{}", serde_json::to_string_pretty(&matches)?);

    Ok(())
}

/// Resolves the free-text field list.
fn text_fields(ctx: &CommandContext, flags: &[String]) -> Vec<String> {
    if !flags.is_empty() {
        return flags.to_vec();
    }
    if !ctx.config.search.fields.is_empty() {
        return ctx.config.search.fields.clone();
    }
    POST_SEARCH_FIELDS.iter().map(|f| f.to_string()).collect()
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(fs::read_to_string(path)?)
}

/// Parses `input` as a JSON array and returns the elements matching `query`.
///
/// Elements that are not objects have no fields, so they only survive an
/// empty query.
fn filter_json(input: &str, query: &str, fields: &[String]) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(input)?;
    let Value::Array(records) = value else {
        return Err(CommandError::Input(
            "expected a JSON array of objects".to_string(),
        ));
    };

    let query = QueryParser::parse(query);
    let evaluator = QueryEvaluator::new(&query, fields);
    debug!(
        clauses = query.len(),
        records = records.len(),
        fields = ?fields,
        "filtering JSON input"
    );

    Ok(evaluator.filter_iter(records).collect())
}
