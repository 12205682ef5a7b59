//! Structured query parser and evaluator.
//!
//! A query is a single string of whitespace-separated clauses, all of which
//! must hold for a record to be kept.
//!
//! # Supported Syntax
//!
//! ## Free Text
//! - `hello` - some text field contains "hello" (case-insensitive)
//! - `"hello world"` - some text field contains the whole phrase
//!
//! ## Field Predicates
//! - `autor:admin` - field equals the literal (case-insensitive)
//! - `visitas:>10`, `visitas:>=10` - greater than / at least
//! - `visitas:<10`, `visitas:<=10` - less than / at most
//! - `titulo:"Hello World"` - quoted literals may contain spaces
//!
//! Comparisons are numeric when both sides are numbers, chronological when
//! both sides are dates, and textual otherwise. A record without the named
//! field never matches.
//!
//! There is no OR, negation or grouping; every clause is AND-ed.
//!
//! # Example
//!
//! ```
//! use blog_store_rs::query::{QueryEvaluator, QueryParser};
//! use serde_json::json;
//!
//! let posts = vec![
//!     json!({ "titulo": "Hello World", "autor": "admin", "visitas": 12 }),
//!     json!({ "titulo": "Hola Mundo", "autor": "maria", "visitas": 3 }),
//! ];
//!
//! let query = QueryParser::parse("hello visitas:>=10");
//! let evaluator = QueryEvaluator::new(&query, &["titulo", "autor"]);
//!
//! let results = evaluator.filter_records(&posts);
//! assert_eq!(results.len(), 1);
//! ```

mod ast;
mod comparator;
mod evaluator;
mod lexer;
mod parser;

pub use ast::{Clause, Operator, Query};
pub use comparator::{compare, domain, parse_instant, parse_number, Domain};
pub use evaluator::{filter, QueryEvaluator};
pub use lexer::{tokenize, Lexer, Token};
pub use parser::{parse_clause, QueryParser};
