use crate::analysis::constants::CORRUPT_MINUTE_KEY;
use crate::analysis::error::LineError;
use std::fmt;

/// Positions of the fields captured from one combined-format log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ClientId,
    Timestamp,
    RequestPath,
    StatusCode,
    ResponseSize,
    Referrer,
    UserAgent,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::ClientId,
        Field::Timestamp,
        Field::RequestPath,
        Field::StatusCode,
        Field::ResponseSize,
        Field::Referrer,
        Field::UserAgent,
    ];

    pub fn position(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::ClientId => "client id",
            Field::Timestamp => "timestamp",
            Field::RequestPath => "request path",
            Field::StatusCode => "status code",
            Field::ResponseSize => "response size",
            Field::Referrer => "referrer",
            Field::UserAgent => "user agent",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fields of one successfully parsed log line, in [`Field`] order.
///
/// A slot is `None` when its capture group did not take part in the match.
/// Asking for such a field is reported as [`LineError::MissingField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFields {
    index: usize,
    fields: Vec<Option<String>>,
}

impl ParsedFields {
    pub(crate) fn new(index: usize, fields: Vec<Option<String>>) -> Self {
        Self { index, fields }
    }

    /// 0-based index of the line these fields came from.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: Field) -> Result<&str, LineError> {
        self.fields
            .get(field.position())
            .and_then(Option::as_deref)
            .ok_or(LineError::MissingField {
                index: self.index,
                field,
            })
    }
}

/// Minute-of-hour bucket an exit event is counted in.
///
/// `Corrupt` sorts after every valid minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Minute {
    Valid(u8),
    Corrupt,
}

impl Minute {
    /// Values past 59 cannot be a minute-of-hour and land in the corrupt bucket.
    pub fn new(value: u8) -> Self {
        if value <= 59 {
            Minute::Valid(value)
        } else {
            Minute::Corrupt
        }
    }

    pub fn is_corrupt(self) -> bool {
        matches!(self, Minute::Corrupt)
    }

    /// Numeric aggregation key: the minute itself, or 404 for the corrupt bucket.
    pub fn key(self) -> u16 {
        match self {
            Minute::Valid(m) => u16::from(m),
            Minute::Corrupt => CORRUPT_MINUTE_KEY,
        }
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Minute::Valid(m) => write!(f, "{m:02}"),
            Minute::Corrupt => f.write_str("corrupt"),
        }
    }
}
