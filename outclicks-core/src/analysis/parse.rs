use crate::analysis::error::LineError;
use crate::analysis::types::{Field, ParsedFields};
use once_cell::sync::Lazy;
use regex::Regex;

/// Combined log format, one capture group per [`Field`].
///
/// The leading group accepts anything that looks like a list of hosts or
/// addresses (`10.0.0.1, 10.0.0.2 `) so proxy-chain prefixes still parse.
/// Word, digit and space classes are ASCII-only: a client token with
/// non-ASCII letters is rejected. Field order is fixed; reordered fields do
/// not match.
const COMBINED_LOG_PATTERN: &str = concat!(
    // client id
    r"^(-?(?-u:\s)?|(?:(?:(?-u:\w)*|(?-u:\d){1,3})\.*,?(?-u:\s)?)*)",
    // identity, auth user
    r"\S* \S* ",
    // [timestamp]
    r"\[([^\]]*)\] ",
    // "METHOD /path PROTOCOL", only the path is kept
    r#""(?-u:\w)* (/*\S*) [^"]*" "#,
    // status, response size
    r"(\S*) (\S*) ",
    // "referrer" "user agent"
    r#""([^"]*)" "([^"]*)""#,
);

static COMBINED_LOG: Lazy<Regex> =
    Lazy::new(|| Regex::new(COMBINED_LOG_PATTERN).expect("combined log pattern must compile"));

/// Splits raw access log lines into their seven fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineParser;

impl LineParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses the line at `index` (0-based), or reports it as incompatible.
    pub fn parse(&self, index: usize, line: &str) -> Result<ParsedFields, LineError> {
        let caps = COMBINED_LOG
            .captures(line)
            .ok_or_else(|| LineError::Parse {
                index,
                line: line.to_string(),
            })?;

        let fields = Field::ALL
            .iter()
            .map(|field| {
                caps.get(field.position() + 1)
                    .map(|m| m.as_str().trim().to_string())
            })
            .collect();

        Ok(ParsedFields::new(index, fields))
    }
}
