//! Command-line tokenizer.
//!
//! One rule, borrowed from the original panel: a double-quoted span is
//! one token with the quotes stripped, otherwise a maximal run of
//! non-whitespace characters is one token. A leading `wp ` prefix is
//! dropped so users can paste wp-cli invocations unchanged.

use regex::Regex;

use siteshell_types::ShellError;

/// Splits raw command lines into token sequences.
///
/// Holds the compiled token pattern; build one per kernel and reuse it.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    /// Compile the token pattern.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(r#""([^"]*)"|\S+"#)?,
        })
    }

    /// Tokenize a command line.
    ///
    /// Trims surrounding whitespace and strips a leading `wp` word, then
    /// applies the token pattern. An unterminated quote is not an error:
    /// the non-whitespace-run rule picks it up and surrounding `"` are
    /// trimmed from the match.
    ///
    /// Fails with [`ShellError::InvalidCommand`] when nothing remains.
    pub fn tokenize(&self, line: &str) -> Result<Vec<String>, ShellError> {
        let line = line.trim();
        let line = match line.strip_prefix("wp") {
            Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
            _ => line,
        };

        let mut tokens = Vec::new();
        for caps in self.pattern.captures_iter(line) {
            match caps.get(1) {
                Some(quoted) => tokens.push(quoted.as_str().to_string()),
                None => tokens.push(caps[0].trim_matches('"').to_string()),
            }
        }

        if tokens.is_empty() {
            return Err(ShellError::InvalidCommand);
        }
        Ok(tokens)
    }
}
