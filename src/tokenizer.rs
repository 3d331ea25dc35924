//! Splitting one LTSV line into raw fields.
//!
//! The tokenizer works on a single line that no longer carries its
//! terminator. Blank lines are the caller's business and never reach it.
//! Empty positions produced by consecutive, leading or trailing tabs are
//! padding and are skipped.
//!
//! With [`Quoting::Csv`] a field starting with `"` extends to its closing
//! quote, may contain tabs, and uses `""` for a literal quote.
//!
//! ```rust
//! use serde_ltsv::tokenizer::tokenize;
//! use serde_ltsv::Quoting;
//!
//! let fields = tokenize("a:1\t\tb:2", Quoting::Never).unwrap();
//! assert_eq!(fields, vec!["a:1", "b:2"]);
//!
//! let fields = tokenize("\"a:x\ty\"\tb:2", Quoting::Csv).unwrap();
//! assert_eq!(fields, vec!["a:x\ty", "b:2"]);
//! ```

use crate::error::FieldFormatKind;
use crate::options::Quoting;
use std::borrow::Cow;

/// A field the tokenizer could not delimit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenError<'a> {
    pub kind: FieldFormatKind,
    /// The offending input, from the opening quote to the end of the line.
    pub field: &'a str,
}

/// Lazy iterator over the fields of one line.
///
/// Unquoted fields are borrowed from the line; quoted fields are unescaped
/// into owned strings.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: Option<&'a str>,
    quoting: Quoting,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a str, quoting: Quoting) -> Self {
        Tokens {
            rest: Some(line),
            quoting,
        }
    }

    fn next_quoted(&mut self, rest: &'a str) -> Result<String, TokenError<'a>> {
        let body = &rest[1..];
        let mut field = String::with_capacity(body.len());
        let mut chars = body.char_indices();

        while let Some((i, ch)) = chars.next() {
            if ch != '"' {
                field.push(ch);
                continue;
            }
            let after = &body[i + 1..];
            if after.starts_with('"') {
                field.push('"');
                chars.next();
                continue;
            }
            if after.is_empty() {
                self.rest = None;
                return Ok(field);
            }
            if let Some(tail) = after.strip_prefix('\t') {
                self.rest = Some(tail);
                return Ok(field);
            }
            self.rest = None;
            return Err(TokenError {
                kind: FieldFormatKind::TrailingCharacters,
                field: rest,
            });
        }

        self.rest = None;
        Err(TokenError {
            kind: FieldFormatKind::UnterminatedQuote,
            field: rest,
        })
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Cow<'a, str>, TokenError<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.rest?;

            if self.quoting.is_enabled() && rest.starts_with('"') {
                match self.next_quoted(rest) {
                    Ok(field) if field.is_empty() => continue,
                    Ok(field) => return Some(Ok(Cow::Owned(field))),
                    Err(e) => return Some(Err(e)),
                }
            }

            let field = match rest.split_once('\t') {
                Some((field, tail)) => {
                    self.rest = Some(tail);
                    field
                }
                None => {
                    self.rest = None;
                    rest
                }
            };
            if !field.is_empty() {
                return Some(Ok(Cow::Borrowed(field)));
            }
        }
    }
}

/// Collects all fields of `line`, failing on the first undelimitable one.
pub fn tokenize(line: &str, quoting: Quoting) -> Result<Vec<Cow<'_, str>>, TokenError<'_>> {
    Tokens::new(line, quoting).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_split() {
        let fields = tokenize("host:127.0.0.1\tident:-\tuser:frank", Quoting::Never).unwrap();
        assert_eq!(fields, vec!["host:127.0.0.1", "ident:-", "user:frank"]);
    }

    #[test]
    fn test_padding_is_skipped() {
        let fields = tokenize("\ta:1\t\t\tb:2\t", Quoting::Never).unwrap();
        assert_eq!(fields, vec!["a:1", "b:2"]);
    }

    #[test]
    fn test_quotes_are_literal_without_quoting() {
        let fields = tokenize("\"a:1\tb\"", Quoting::Never).unwrap();
        assert_eq!(fields, vec!["\"a:1", "b\""]);
    }

    #[test]
    fn test_quoted_field_with_tab_and_escaped_quote() {
        let fields = tokenize("\"msg:say \"\"hi\"\"\tnow\"\tlevel:info", Quoting::Csv).unwrap();
        assert_eq!(fields, vec!["msg:say \"hi\"\tnow", "level:info"]);
        assert!(matches!(fields[0], Cow::Owned(_)));
        assert!(matches!(fields[1], Cow::Borrowed(_)));
    }

    #[test]
    fn test_quote_inside_unquoted_field() {
        let fields = tokenize("a:say \"hi\"", Quoting::Csv).unwrap();
        assert_eq!(fields, vec!["a:say \"hi\""]);
    }

    #[test]
    fn test_empty_quoted_field_is_padding() {
        let fields = tokenize("a:1\t\"\"\tb:2", Quoting::Csv).unwrap();
        assert_eq!(fields, vec!["a:1", "b:2"]);
    }

    #[test]
    fn test_unterminated_quote() {
        let err = tokenize("a:1\t\"b:2", Quoting::Csv).unwrap_err();
        assert_eq!(err.kind, FieldFormatKind::UnterminatedQuote);
        assert_eq!(err.field, "\"b:2");
    }

    #[test]
    fn test_characters_after_closing_quote() {
        let err = tokenize("\"a:1\"x\tb:2", Quoting::Csv).unwrap_err();
        assert_eq!(err.kind, FieldFormatKind::TrailingCharacters);
    }
}
