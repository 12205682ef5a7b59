//! Query evaluation against records.
//!
//! This module provides the [`QueryEvaluator`] for testing parsed queries
//! against any type implementing [`Record`].
//!
//! # Example
//!
//! ```
//! use blog_store_rs::query::{QueryEvaluator, QueryParser};
//! use serde_json::json;
//!
//! let posts = vec![
//!     json!({ "titulo": "Hola", "visitas": 10 }),
//!     json!({ "titulo": "Adiós", "visitas": 20 }),
//! ];
//!
//! let query = QueryParser::parse("visitas:>15");
//! let evaluator = QueryEvaluator::new(&query, &["titulo"]);
//! let results = evaluator.filter_records(&posts);
//!
//! assert_eq!(results, vec![&posts[1]]);
//! ```

use tracing::debug;

use super::ast::{Clause, Query};
use super::comparator::compare;
use super::parser::QueryParser;
use crate::record::Record;

/// Evaluates a parsed query against records.
///
/// A record matches when every clause holds. Field predicates compare the
/// named field; free-text terms must appear (case-insensitively) in at least
/// one of the text fields.
#[derive(Debug, Clone)]
pub struct QueryEvaluator<'a> {
    query: &'a Query,
    text_fields: Vec<&'a str>,
}

impl<'a> QueryEvaluator<'a> {
    /// Creates a new query evaluator.
    ///
    /// # Arguments
    ///
    /// * `query` - The parsed query to evaluate
    /// * `text_fields` - Fields searched by free-text terms
    pub fn new<S: AsRef<str>>(query: &'a Query, text_fields: &'a [S]) -> Self {
        Self {
            query,
            text_fields: text_fields.iter().map(AsRef::as_ref).collect(),
        }
    }

    /// Returns the query being evaluated.
    pub fn query(&self) -> &Query {
        self.query
    }

    /// Returns true if the record satisfies every clause.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.query
            .clauses()
            .iter()
            .all(|clause| self.evaluate_clause(clause, record))
    }

    /// Filters a slice of records, returning only those that match.
    ///
    /// The result keeps the input order.
    pub fn filter_records<'b, R: Record>(&self, records: &'b [R]) -> Vec<&'b R> {
        let matched: Vec<&R> = records.iter().filter(|r| self.matches(*r)).collect();
        debug!(
            clauses = self.query.len(),
            total = records.len(),
            matched = matched.len(),
            "filtered records"
        );
        matched
    }

    /// Lazily filters any sequence of records.
    pub fn filter_iter<I>(&'a self, records: I) -> impl Iterator<Item = I::Item> + 'a
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: Record,
    {
        records.into_iter().filter(move |record| self.matches(record))
    }

    /// Evaluates a single clause against a record.
    fn evaluate_clause<R: Record + ?Sized>(&self, clause: &Clause, record: &R) -> bool {
        match clause {
            Clause::FieldPredicate {
                field,
                operator,
                literal,
            } => compare(&record.field(field), literal, *operator),
            Clause::FreeText { term } => self.contains_text(record, term),
        }
    }

    /// Returns true if any text field contains `term`, ignoring case.
    ///
    /// Missing, null, `false`, zero and empty fields never match.
    fn contains_text<R: Record + ?Sized>(&self, record: &R, term: &str) -> bool {
        let term = term.to_lowercase();
        self.text_fields.iter().any(|name| {
            let value = record.field(name);
            value.is_truthy() && value.to_string().to_lowercase().contains(&term)
        })
    }
}

/// Parses `query` and returns the records that satisfy it, in input order.
///
/// Free-text terms are searched in `text_fields`. An empty query keeps every
/// record.
///
/// # Example
///
/// ```
/// use blog_store_rs::query::filter;
/// use serde_json::json;
///
/// let posts = vec![
///     json!({ "titulo": "Hello World", "autor": "admin" }),
///     json!({ "titulo": "Otro post", "autor": "maria" }),
/// ];
///
/// let results = filter(&posts, r#""hello world" autor:Admin"#, &["titulo"]);
/// assert_eq!(results, vec![&posts[0]]);
/// ```
pub fn filter<'r, R, S>(records: &'r [R], query: &str, text_fields: &[S]) -> Vec<&'r R>
where
    R: Record,
    S: AsRef<str>,
{
    let query = QueryParser::parse(query);
    QueryEvaluator::new(&query, text_fields).filter_records(records)
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
