//! Book record model and request types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    error::{AppError, AppResult},
    messages,
};

/// A book as stored on disk and returned by the list endpoint.
///
/// The schema is open: any fields the client sent on creation beyond the
/// required ones are kept in `extra` and written back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub category: String,
    #[serde(rename = "isRead", default)]
    pub is_read: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Book {
    pub fn from_new(id: i64, new: NewBook) -> Self {
        Self {
            id,
            title: new.title,
            author: new.author,
            category: new.category,
            is_read: false,
            extra: new.extra,
        }
    }
}

/// Validated create request
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub category: String,
    pub extra: Map<String, Value>,
}

impl NewBook {
    /// Parse and validate a raw request body.
    ///
    /// Unparsable JSON is a format error; a well-formed document lacking
    /// one of the required fields is a validation error.
    pub fn from_json(body: &[u8]) -> AppResult<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|_| AppError::BadRequest(messages::MALFORMED_BODY.to_string()))?;

        let mut fields = match value {
            Value::Object(fields) => fields,
            Value::Null => return Err(AppError::BadRequest(messages::MALFORMED_BODY.to_string())),
            _ => return Err(AppError::Validation(messages::REQUIRED_FIELDS.to_string())),
        };

        let title = take_required(&mut fields, "title")?;
        let author = take_required(&mut fields, "author")?;
        let category = take_required(&mut fields, "category")?;

        // Server-assigned
        fields.remove("id");
        fields.remove("isRead");

        Ok(Self {
            title,
            author,
            category,
            extra: fields,
        })
    }
}

/// Take a required string field.
///
/// Absent, `null`, `false`, zero and blank strings count as missing; any
/// other non-string value is a format error.
fn take_required(fields: &mut Map<String, Value>, key: &str) -> AppResult<String> {
    let missing = || AppError::Validation(messages::REQUIRED_FIELDS.to_string());
    match fields.remove(key) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(missing()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(missing()),
        Some(Value::String(s)) if is_blank(&s) => Err(missing()),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(AppError::BadRequest(messages::MALFORMED_BODY.to_string())),
    }
}

/// Blank after trimming Unicode whitespace and the byte order mark
fn is_blank(s: &str) -> bool {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
}

/// Query parameters for the list endpoint
#[derive(Debug, Default)]
pub struct BookQuery {
    pub category: Option<String>,
}

impl BookQuery {
    /// Build from raw query pairs; a repeated parameter keeps its first value
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let category = pairs
            .into_iter()
            .find(|(key, _)| key == "category")
            .map(|(_, value)| value);
        Self { category }
    }

    /// Category to filter on; an empty value means no filter
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// Parse the `{id}` path segment.
///
/// Reads an optional sign and the leading decimal digits, ignoring anything
/// after them (`"42abc"` is 42). Returns `None` when there are no digits to
/// read or the value overflows, which callers treat as an unknown book.
pub fn parse_book_id(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
