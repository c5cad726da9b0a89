//! Tabular result type and response shaping.
//!
//! Every operation's payload — JSON or CSV — is reshaped into a [`Table`]:
//! ordered columns, ordered rows, and an optional promoted index column.
//! Shaping is a pure, single-pass transform; a malformed payload yields an
//! error, never a partial table.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::Error;

/// Tabular view of a response payload.
///
/// Columns appear in payload order. When an index column has been promoted,
/// its name moves to `index` and each row carries its value as the row key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Name of the promoted index column, if any.
    pub index: Option<String>,
    /// Data column labels, in payload order.
    pub columns: Vec<String>,
    /// Data rows, in payload order.
    pub rows: Vec<Row>,
}

/// One table row: an optional row key plus one value per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub key: Option<String>,
    pub values: Vec<String>,
}

impl Table {
    /// Shapes a symbol-search payload: a single-key object wrapping an
    /// array of match records. Column labels are prefix-stripped.
    pub fn from_match_list(raw: &str) -> Result<Self, Error> {
        let matches = match unwrap_envelope(raw)? {
            Value::Array(items) => items,
            _ => return Err(Error::Parse("expected an array of matches".to_string())),
        };
        let mut columns = Vec::new();
        let mut rows = Vec::with_capacity(matches.len());
        for item in &matches {
            let fields = match item {
                Value::Object(fields) => fields,
                _ => return Err(Error::Parse("expected a match object".to_string())),
            };
            if columns.is_empty() {
                columns = strip_labels(fields)?;
            }
            rows.push(Row {
                key: None,
                values: fields.values().map(cell).collect(),
            });
        }
        Ok(Self {
            index: None,
            columns,
            rows,
        })
    }

    /// Shapes a time-series payload by transposing the timestamp-keyed
    /// series object: each timestamp becomes one row (keyed by it), each
    /// field one column. `rename` strips the numeric label prefixes
    /// (intraday series); historical and indicator series keep their
    /// labels as-is.
    pub fn from_time_series(raw: &str, rename: bool) -> Result<Self, Error> {
        let series = match unwrap_envelope(raw)? {
            Value::Object(series) => series,
            _ => {
                return Err(Error::Parse(
                    "expected a timestamp-keyed series object".to_string(),
                ))
            }
        };
        let mut columns = Vec::new();
        let mut rows = Vec::with_capacity(series.len());
        for (timestamp, entry) in series {
            let fields = match entry {
                Value::Object(fields) => fields,
                _ => {
                    return Err(Error::Parse(format!(
                        "expected a field object at '{timestamp}'"
                    )))
                }
            };
            if columns.is_empty() {
                columns = if rename {
                    strip_labels(&fields)?
                } else {
                    fields.keys().cloned().collect()
                };
            }
            rows.push(Row {
                key: Some(timestamp),
                values: fields.values().map(cell).collect(),
            });
        }
        Ok(Self {
            index: None,
            columns,
            rows,
        })
    }

    /// Shapes a quote payload: a single-key object wrapping one flat record
    /// becomes a one-row table. Column labels are prefix-stripped; the
    /// `index` column (post-rename name) is then promoted to the row key.
    pub fn from_quote_object(raw: &str, index: Option<&str>) -> Result<Self, Error> {
        let fields = match unwrap_envelope(raw)? {
            Value::Object(fields) => fields,
            _ => return Err(Error::Parse("expected a quote object".to_string())),
        };
        let mut columns = strip_labels(&fields)?;
        let mut values: Vec<String> = fields.values().map(cell).collect();
        let mut key = None;
        if let Some(name) = index {
            let pos = position_of(&columns, name)?;
            columns.remove(pos);
            key = Some(values.remove(pos));
        }
        Ok(Self {
            index: index.map(str::to_string),
            columns,
            rows: vec![Row { key, values }],
        })
    }

    /// Shapes a delimited-text payload with a header row. An index column,
    /// when named, is promoted to the row key and removed from the data
    /// columns.
    pub fn from_csv(raw: &str, index: Option<&str>) -> Result<Self, Error> {
        let mut reader = csv::Reader::from_reader(raw.as_bytes());
        let headers = reader
            .headers()
            .map_err(|e| Error::Parse(format!("malformed CSV header: {e}")))?
            .clone();
        let mut columns: Vec<String> = headers.iter().map(str::to_string).collect();
        let index_pos = match index {
            Some(name) => {
                let pos = position_of(&columns, name)?;
                columns.remove(pos);
                Some(pos)
            }
            None => None,
        };
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| Error::Parse(format!("malformed CSV record: {e}")))?;
            let mut values: Vec<String> = record.iter().map(str::to_string).collect();
            let key = index_pos.map(|pos| values.remove(pos));
            rows.push(Row { key, values });
        }
        Ok(Self {
            index: index.map(str::to_string),
            columns,
            rows,
        })
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn position_of(columns: &[String], name: &str) -> Result<usize, Error> {
    columns
        .iter()
        .position(|column| column == name)
        .ok_or_else(|| Error::Parse(format!("index column '{name}' not present")))
}

/// Strips the fixed 3-character numeric prefix (`"1. "`, `"2. "`, ...) from
/// a column label. A label without that exact shape is undefined input and
/// is flagged rather than guessed at.
fn strip_label(label: &str) -> Result<String, Error> {
    let mut chars = label.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(digit), Some('.'), Some(' ')) if digit.is_ascii_digit() => Ok(chars.collect()),
        _ => Err(Error::Parse(format!(
            "column label '{label}' does not carry a numeric prefix"
        ))),
    }
}

fn strip_labels(fields: &Map<String, Value>) -> Result<Vec<String>, Error> {
    fields.keys().map(|label| strip_label(label)).collect()
}

/// Unwraps the single-key envelope common to all JSON payloads, dropping a
/// `Meta Data` sibling when present. An `Error Message` payload — the API
/// reports request errors inside a 200 body — surfaces as [`Error::Api`].
fn unwrap_envelope(raw: &str) -> Result<Value, Error> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| Error::Parse(format!("malformed JSON: {e}")))?;
    let mut payload = match value {
        Value::Object(payload) => payload,
        _ => return Err(Error::Parse("expected a JSON object payload".to_string())),
    };
    if let Some(message) = payload.get("Error Message").and_then(Value::as_str) {
        return Err(Error::Api(message.to_string()));
    }
    payload.remove("Meta Data");
    if payload.len() != 1 {
        return Err(Error::Parse(format!(
            "expected a single payload key, found {}",
            payload.len()
        )));
    }
    match payload.into_iter().next() {
        Some((_, inner)) => Ok(inner),
        None => Err(Error::Parse("empty payload object".to_string())),
    }
}
