use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse semantic category the admin UI uses to pick a rendering widget.
///
/// Wire names are the lowercase property-type strings the UI consumes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Number,
    Float,
    String,
    Boolean,
    Datetime,
    Mixed,
    Uuid,
    Reference,
    /// Sentinel for a column whose SQL type has no mapping. Rendering cannot
    /// handle it; callers must filter these out.
    Unknown,
}

impl PropertyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Number => "number",
            PropertyKind::Float => "float",
            PropertyKind::String => "string",
            PropertyKind::Boolean => "boolean",
            PropertyKind::Datetime => "datetime",
            PropertyKind::Mixed => "mixed",
            PropertyKind::Uuid => "uuid",
            PropertyKind::Reference => "reference",
            PropertyKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
