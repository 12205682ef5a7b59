//! Lexer (tokenizer) for query strings.
//!
//! Splits a query on whitespace, except inside double-quoted spans. Quote
//! characters are removed from token content, and quoted and unquoted runs
//! that touch each other form a single token (`titulo:"Hello World"` is one
//! token with content `titulo:Hello World`).

use std::iter::Peekable;
use std::str::CharIndices;

/// A token with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token content, with quote characters removed. Never empty.
    pub text: String,
    /// The byte position where the token starts (0-indexed).
    pub position: usize,
}

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside quotes: whitespace ends the current token.
    Unquoted,
    /// Inside a double-quoted span: whitespace is content.
    Quoted,
}

/// Lexer for tokenizing query strings.
pub struct Lexer<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    /// Returns the next token, or None if at end of input.
    ///
    /// A run whose content is empty after quote removal (e.g. `""`) yields
    /// no token; scanning continues with the next run.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            self.skip_whitespace();
            let &(position, _) = self.chars.peek()?;

            let mut text = String::new();
            let mut state = State::Unquoted;

            while let Some(&(_, c)) = self.chars.peek() {
                match (state, c) {
                    (State::Unquoted, c) if c.is_whitespace() => break,
                    (State::Unquoted, '"') => state = State::Quoted,
                    (State::Quoted, '"') => state = State::Unquoted,
                    (_, c) => text.push(c),
                }
                self.chars.next();
            }

            // An unterminated quote simply runs to the end of input.
            if !text.is_empty() {
                return Some(Token { text, position });
            }
        }
    }

    /// Collects all tokens into a vector.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Tokenizes a query string, returning the token contents in order.
///
/// # Example
///
/// ```
/// use blog_store_rs::query::tokenize;
///
/// assert_eq!(
///     tokenize(r#"autor:admin "Hello World""#),
///     vec!["autor:admin".to_string(), "Hello World".to_string()]
/// );
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    Lexer::new(query).map(|token| token.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input)
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(texts("").is_empty());
        assert!(texts(" \t\n ").is_empty());
    }

    #[test]
    fn test_tokenize_simple_words() {
        assert_eq!(texts("rust blog"), vec!["rust", "blog"]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(texts("  rust \t  blog\n"), vec!["rust", "blog"]);
    }

    #[test]
    fn test_tokenize_quoted_phrase() {
        assert_eq!(texts(r#""Hello World""#), vec!["Hello World"]);
    }

    #[test]
    fn test_tokenize_quoted_value_after_field() {
        assert_eq!(
            texts(r#"titulo:"Hello World" visitas:>5"#),
            vec!["titulo:Hello World", "visitas:>5"]
        );
    }

    #[test]
    fn test_tokenize_adjacent_runs_concatenate() {
        assert_eq!(texts(r#"ab"c d"ef"#), vec!["abc def"]);
        assert_eq!(texts(r#""a b""c d""#), vec!["a bc d"]);
    }

    #[test]
    fn test_tokenize_whole_clause_quoted() {
        assert_eq!(texts(r#""autor:John Doe""#), vec!["autor:John Doe"]);
    }

    #[test]
    fn test_tokenize_unterminated_quote_runs_to_end() {
        assert_eq!(texts(r#"x "open phrase  here"#), vec!["x", "open phrase  here"]);
    }

    #[test]
    fn test_tokenize_empty_quotes_yield_no_token() {
        assert_eq!(texts(r#"a "" b"#), vec!["a", "b"]);
        assert!(texts(r#""""#).is_empty());
    }

    #[test]
    fn test_tokenize_positions() {
        let tokens = Lexer::new(r#"  one "two three" four"#).tokenize();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![2, 6, 18]);
    }

    #[test]
    fn test_tokenize_unicode() {
        assert_eq!(texts("categoría:tecnología año"), vec!["categoría:tecnología", "año"]);
    }

    #[test]
    fn test_tokenize_is_pure() {
        let input = r#"a:"b c" d"#;
        assert_eq!(texts(input), texts(input));
    }
}
