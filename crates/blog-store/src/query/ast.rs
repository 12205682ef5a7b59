//! Parsed query representation.

use std::fmt;

/// Comparison operator of a field predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `field:value` - equality (the default when no prefix is given).
    Eq,
    /// `field:>value`
    Gt,
    /// `field:>=value`
    Gte,
    /// `field:<value`
    Lt,
    /// `field:<=value`
    Lte,
}

impl Operator {
    /// Operator prefixes in resolution order.
    ///
    /// Two-character prefixes come before their one-character counterparts so
    /// that `>=5` is never read as `>` followed by `=5`.
    pub const PREFIXES: [(&'static str, Operator); 4] = [
        (">=", Operator::Gte),
        (">", Operator::Gt),
        ("<=", Operator::Lte),
        ("<", Operator::Lt),
    ];

    /// Splits an operator prefix off the start of `expr`.
    ///
    /// Returns [`Operator::Eq`] and the whole input when no prefix matches.
    ///
    /// # Example
    ///
    /// ```
    /// use blog_store_rs::query::Operator;
    ///
    /// assert_eq!(Operator::split_prefix(">=5"), (Operator::Gte, "5"));
    /// assert_eq!(Operator::split_prefix("<x"), (Operator::Lt, "x"));
    /// assert_eq!(Operator::split_prefix("=5"), (Operator::Eq, "=5"));
    /// ```
    pub fn split_prefix(expr: &str) -> (Operator, &str) {
        Self::PREFIXES
            .iter()
            .find_map(|(prefix, op)| expr.strip_prefix(*prefix).map(|rest| (*op, rest)))
            .unwrap_or((Operator::Eq, expr))
    }

    /// Returns the query syntax prefix for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operator::Eq => "=",
            other => other.symbol(),
        };
        f.write_str(name)
    }
}

/// One parsed unit of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// Constrains one named field: `field:[op]literal`.
    FieldPredicate {
        /// Field name (never empty).
        field: String,
        /// Comparison operator.
        operator: Operator,
        /// Literal to compare against, operator prefix removed.
        literal: String,
    },

    /// Requires a substring match in any of the searchable fields.
    FreeText {
        /// Search term, case preserved.
        term: String,
    },
}

impl Clause {
    /// Creates a field predicate clause.
    pub fn field(field: impl Into<String>, operator: Operator, literal: impl Into<String>) -> Self {
        Clause::FieldPredicate {
            field: field.into(),
            operator,
            literal: literal.into(),
        }
    }

    /// Creates a free-text clause.
    pub fn free_text(term: impl Into<String>) -> Self {
        Clause::FreeText { term: term.into() }
    }
}

/// Writes `text`, wrapped in quotes when it contains whitespace.
fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    if text.chars().any(char::is_whitespace) {
        write!(f, "\"{text}\"")
    } else {
        f.write_str(text)
    }
}

/// Renders the clause back to query syntax.
impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::FieldPredicate {
                field,
                operator,
                literal,
            } => {
                write_quoted(f, field)?;
                write!(f, ":{}", operator.symbol())?;
                write_quoted(f, literal)
            }
            Clause::FreeText { term } => write_quoted(f, term),
        }
    }
}

/// An ordered AND-conjunction of clauses.
///
/// An empty query matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    clauses: Vec<Clause>,
}

impl Query {
    /// Creates a query from clauses.
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    /// Returns the clauses in query order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns true if the query has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns the number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Iterates over the field predicates as `(field, operator, literal)`.
    pub fn field_predicates(&self) -> impl Iterator<Item = (&str, Operator, &str)> {
        self.clauses.iter().filter_map(|clause| match clause {
            Clause::FieldPredicate {
                field,
                operator,
                literal,
            } => Some((field.as_str(), *operator, literal.as_str())),
            Clause::FreeText { .. } => None,
        })
    }

    /// Iterates over the free-text terms.
    pub fn free_text_terms(&self) -> impl Iterator<Item = &str> {
        self.clauses.iter().filter_map(|clause| match clause {
            Clause::FreeText { term } => Some(term.as_str()),
            Clause::FieldPredicate { .. } => None,
        })
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}

impl FromIterator<Clause> for Query {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Query {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}
