use serde::Deserialize;

/// Text-like value returned by Jusibe as either JSON string or JSON number
/// (ids and timestamps are not consistently typed across endpoints).
///
/// Every scalar here ends with an `Other` variant so an unexpected JSON type
/// in one field decodes as `None` instead of failing the whole reply.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportText {
    String(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl TransportText {
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::String(value) => Some(value),
            Self::Number(value) => Some(value.to_string()),
            Self::Other(_) => None,
        }
    }
}

/// Non-negative count returned as JSON number or numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportCount {
    Int(u64),
    Float(f64),
    String(String),
    Other(serde_json::Value),
}

impl TransportCount {
    pub fn into_u64(self) -> Option<u64> {
        match self {
            Self::Int(value) => Some(value),
            Self::Float(value) if value >= 0.0 && value.fract() == 0.0 => Some(value as u64),
            Self::Float(_) => None,
            Self::String(value) => value.trim().parse::<u64>().ok(),
            Self::Other(_) => None,
        }
    }
}

/// Fractional value returned as JSON number or numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportDecimal {
    Number(f64),
    String(String),
    Other(serde_json::Value),
}

impl TransportDecimal {
    pub fn into_f64(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::String(value) => value.trim().parse::<f64>().ok(),
            Self::Other(_) => None,
        }
    }
}
