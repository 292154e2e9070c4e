use serde::Serialize;

/// A pipeline error. Structural problems (bad tags, wrong levels, broken
/// references) are never errors; only unreadable input and malformed dates
/// abort a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GedcomError {
    /// A date line primed by a marker tag could not be parsed into a
    /// calendar date. Fatal for the whole run.
    #[error("malformed date '{value}' in record {record_id} at line {line}: {reason}")]
    MalformedDate {
        record_id: String,
        line: u32,
        value: String,
        reason: String,
    },

    /// The input could not be read.
    #[error("cannot read '{path}': {message}")]
    Source { path: String, message: String },
}

impl GedcomError {
    pub fn malformed_date(
        record_id: &str,
        line: u32,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        GedcomError::MalformedDate {
            record_id: record_id.to_owned(),
            line,
            value: value.to_owned(),
            reason: reason.into(),
        }
    }

    pub fn source(path: &str, err: &std::io::Error) -> Self {
        GedcomError::Source {
            path: path.to_owned(),
            message: err.to_string(),
        }
    }

    /// Serialize to a flat JSON object with a `kind` discriminator.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self)
            .unwrap_or_else(|_| serde_json::json!({ "kind": "unknown", "message": self.to_string() }))
    }
}
