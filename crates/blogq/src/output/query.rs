//! Parsed query output formatting.

use blog_store_rs::query::{Clause, Query, Token};
use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON output structure for the parse command.
#[derive(Serialize)]
pub struct ParsedQueryOutput<'a> {
    pub tokens: Vec<TokenOutput<'a>>,
    pub clauses: Vec<ClauseOutput<'a>>,
    /// The query rendered back to query syntax.
    pub normalized: String,
}

/// JSON output structure for a single token.
#[derive(Serialize)]
pub struct TokenOutput<'a> {
    pub text: &'a str,
    pub position: usize,
}

/// JSON output structure for a single clause.
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClauseOutput<'a> {
    Field {
        field: &'a str,
        operator: String,
        literal: &'a str,
    },
    Text {
        term: &'a str,
    },
}

impl<'a> From<&'a Clause> for ClauseOutput<'a> {
    fn from(clause: &'a Clause) -> Self {
        match clause {
            Clause::FieldPredicate {
                field,
                operator,
                literal,
            } => ClauseOutput::Field {
                field,
                operator: operator.to_string(),
                literal,
            },
            Clause::FreeText { term } => ClauseOutput::Text { term },
        }
    }
}

/// Formats tokens and clauses as JSON.
pub fn format_parsed_query_json(tokens: &[Token], query: &Query) -> Result<String, serde_json::Error> {
    let output = ParsedQueryOutput {
        tokens: tokens
            .iter()
            .map(|t| TokenOutput {
                text: &t.text,
                position: t.position,
            })
            .collect(),
        clauses: query.clauses().iter().map(ClauseOutput::from).collect(),
        normalized: query.to_string(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats tokens and clauses as a human-readable listing.
pub fn format_parsed_query_table(tokens: &[Token], query: &Query, use_colors: bool) -> String {
    if query.is_empty() {
        return "Empty query (matches everything).\n".to_string();
    }

    let mut output = String::new();
    let heading = |text: &str| {
        if use_colors {
            format!("{}\n", text.bold())
        } else {
            format!("{text}\n")
        }
    };

    output.push_str(&heading("Tokens:"));
    for token in tokens {
        output.push_str(&format!("  {:>4}  {}\n", token.position, token.text));
    }

    output.push_str(&heading("\nClauses:"));
    for clause in query.clauses() {
        let line = match clause {
            Clause::FieldPredicate {
                field,
                operator,
                literal,
            } => format!("  field  {field} {operator} {literal}"),
            Clause::FreeText { term } => format!("  text   {term}"),
        };
        output.push_str(&line);
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_store_rs::query::{Lexer, QueryParser};

    fn parse(input: &str) -> (Vec<Token>, Query) {
        (Lexer::new(input).tokenize(), QueryParser::parse(input))
    }

    #[test]
    fn test_parsed_query_table() {
        let (tokens, query) = parse(r#"visitas:>=5 "hola mundo""#);
        let table = format_parsed_query_table(&tokens, &query, false);

        assert_eq!(
            table,
            "Tokens:\n     0  visitas:>=5\n    12  hola mundo\n\nClauses:\n  field  visitas >= 5\n  text   hola mundo\n"
        );
    }

    #[test]
    fn test_parsed_query_table_empty() {
        let (tokens, query) = parse("   ");
        assert_eq!(
            format_parsed_query_table(&tokens, &query, false),
            "Empty query (matches everything).\n"
        );
    }

    #[test]
    fn test_parsed_query_json() {
        let (tokens, query) = parse(r#"autor:admin "hola mundo""#);
        let json: serde_json::Value =
            serde_json::from_str(&format_parsed_query_json(&tokens, &query).unwrap()).unwrap();

        assert_eq!(json["tokens"][1]["position"], 12);
        assert_eq!(json["clauses"][0]["kind"], "field");
        assert_eq!(json["clauses"][0]["operator"], "=");
        assert_eq!(json["clauses"][1]["kind"], "text");
        assert_eq!(json["clauses"][1]["term"], "hola mundo");
        assert_eq!(json["normalized"], r#"autor:admin "hola mundo""#);
    }
}
