use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Body temperature as read from the log.
///
/// `Missing` and `Unreadable` are both "unknown": they never take part in
/// numeric comparisons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BodyTemp {
    Missing,
    Unreadable(String),
    /// Parsed value plus the text as it appeared in the log.
    Reading { value: f64, raw: String },
}

fn temp_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // number, then an optional degree sign and/or unit letter
        Regex::new(r"^([-+]?\d+(?:[.,]\d+)?)\s*[°º]?\s*[CcFf]?$").expect("valid temperature regex")
    })
}

impl BodyTemp {
    /// Strip the unit decoration (`°C`, `°F`, `°`, `C`...) and parse the number.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return BodyTemp::Missing;
        }

        temp_regex()
            .captures(trimmed)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().replace(',', ".").parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .map(|value| BodyTemp::Reading {
                value,
                raw: trimmed.to_string(),
            })
            .unwrap_or_else(|| BodyTemp::Unreadable(trimmed.to_string()))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            BodyTemp::Reading { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// True when the source row carried any temperature text at all.
    pub fn is_present(&self) -> bool {
        !matches!(self, BodyTemp::Missing)
    }

    /// Source text for tables and exports, never rounded.
    pub fn display(&self) -> String {
        match self {
            BodyTemp::Missing => String::new(),
            BodyTemp::Unreadable(raw) | BodyTemp::Reading { raw, .. } => raw.clone(),
        }
    }
}
