//! Clause parser for query strings.

use tracing::trace;

use super::ast::{Clause, Operator, Query};
use super::lexer::Lexer;

/// Parser for structured query strings.
///
/// The grammar is flat: a query is a whitespace-separated list of clauses,
/// all of which must hold.
///
/// ```text
/// query     ::= clause*
/// clause    ::= predicate | term
/// predicate ::= field ":" operator? literal
/// operator  ::= ">=" | ">" | "<=" | "<"
/// term      ::= any token without a ":" after its first character
/// ```
///
/// Parsing never fails: every token maps to exactly one clause.
///
/// # Example
///
/// ```
/// use blog_store_rs::query::{Clause, Operator, QueryParser};
///
/// let query = QueryParser::parse(r#"visitas:>=5 "hola mundo""#);
/// assert_eq!(
///     query.clauses(),
///     &[
///         Clause::field("visitas", Operator::Gte, "5"),
///         Clause::free_text("hola mundo"),
///     ]
/// );
/// ```
pub struct QueryParser;

impl QueryParser {
    /// Parses a query string into its clauses.
    pub fn parse(input: &str) -> Query {
        let query: Query = Lexer::new(input)
            .map(|token| parse_clause(&token.text))
            .collect();
        trace!(input, clauses = query.len(), "parsed query");
        query
    }
}

/// Classifies a single token as a field predicate or a free-text term.
///
/// The token is a field predicate when its first `:` is not its first
/// character. The text after the colon is checked for an operator prefix.
pub fn parse_clause(token: &str) -> Clause {
    match token.find(':') {
        Some(idx) if idx > 0 => {
            let field = &token[..idx];
            let (operator, literal) = Operator::split_prefix(&token[idx + 1..]);
            Clause::field(field, operator, literal)
        }
        _ => Clause::free_text(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clause_free_text() {
        assert_eq!(parse_clause("Hello"), Clause::free_text("Hello"));
    }

    #[test]
    fn test_parse_clause_equality() {
        assert_eq!(
            parse_clause("autor:admin"),
            Clause::field("autor", Operator::Eq, "admin")
        );
    }

    #[test]
    fn test_parse_clause_operators() {
        assert_eq!(parse_clause("v:>1"), Clause::field("v", Operator::Gt, "1"));
        assert_eq!(parse_clause("v:>=1"), Clause::field("v", Operator::Gte, "1"));
        assert_eq!(parse_clause("v:<1"), Clause::field("v", Operator::Lt, "1"));
        assert_eq!(parse_clause("v:<=1"), Clause::field("v", Operator::Lte, "1"));
    }

    #[test]
    fn test_parse_clause_leading_colon_is_free_text() {
        assert_eq!(parse_clause(":foo"), Clause::free_text(":foo"));
        assert_eq!(parse_clause(":a:b"), Clause::free_text(":a:b"));
    }

    #[test]
    fn test_parse_clause_splits_on_first_colon() {
        assert_eq!(
            parse_clause("fecha:>2023-01-01T10:00:00Z"),
            Clause::field("fecha", Operator::Gt, "2023-01-01T10:00:00Z")
        );
    }

    #[test]
    fn test_parse_clause_empty_literal() {
        assert_eq!(parse_clause("estado:"), Clause::field("estado", Operator::Eq, ""));
        assert_eq!(parse_clause("visitas:>="), Clause::field("visitas", Operator::Gte, ""));
    }

    #[test]
    fn test_parse_clause_equals_sign_is_literal() {
        assert_eq!(parse_clause("v:=5"), Clause::field("v", Operator::Eq, "=5"));
        assert_eq!(parse_clause("v:>>5"), Clause::field("v", Operator::Gt, ">5"));
    }

    #[test]
    fn test_parse_empty_query() {
        assert!(QueryParser::parse("").is_empty());
        assert!(QueryParser::parse("   ").is_empty());
    }

    #[test]
    fn test_parse_preserves_order() {
        let query = QueryParser::parse("b a:1 c");
        assert_eq!(
            query.clauses(),
            &[
                Clause::free_text("b"),
                Clause::field("a", Operator::Eq, "1"),
                Clause::free_text("c"),
            ]
        );
    }
}
