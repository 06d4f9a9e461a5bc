//! Parsing and validation of frame preset overrides

use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fmt::{self, Display};

use super::models::{FramePosition, FramePreset, FrameStyle};
use crate::frames::FrameKey;

/// Error type for override payloads that cannot be read as a preset list
#[derive(Debug, thiserror::Error)]
pub enum OverrideParseError {
    #[error("Invalid frame presets JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Expected a JSON array of frame presets, found {0}")]
    NotAnArray(&'static str),
}

/// Part of a preset record a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetField {
    /// The record as a whole
    Record,
    Name,
    Style,
    Text,
    Position,
    Type,
}

impl Display for PresetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            PresetField::Record => "record",
            PresetField::Name => "name",
            PresetField::Style => "style",
            PresetField::Text => "text",
            PresetField::Position => "position",
            PresetField::Type => "type",
        };
        write!(f, "{}", str)
    }
}

/// Why a preset record or field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticReason {
    Missing,
    Empty,
    WrongShape,
    UnknownValue,
}

impl Display for DiagnosticReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            DiagnosticReason::Missing => "is missing",
            DiagnosticReason::Empty => "is empty",
            DiagnosticReason::WrongShape => "has the wrong shape",
            DiagnosticReason::UnknownValue => "has an unknown value",
        };
        write!(f, "{}", str)
    }
}

/// Problem found in a preset record during validation.
///
/// Problems with `text` or `position` only clear that field; any other
/// problem drops the whole record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetDiagnostic {
    /// Position of the record in the override list
    pub index: usize,
    /// Name of the record, when it got far enough to have one
    pub name: Option<String>,
    pub field: PresetField,
    pub reason: DiagnosticReason,
    /// Offending value, if there is one worth showing
    pub value: Option<String>,
}

impl PresetDiagnostic {
    /// True when the record was dropped, false when only a field was ignored.
    pub fn drops_record(&self) -> bool {
        !matches!(self.field, PresetField::Text | PresetField::Position)
    }
}

impl Display for PresetDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame preset #{}", self.index)?;
        if let Some(name) = &self.name {
            write!(f, " ({name:?})")?;
        }
        write!(f, ": {} {}", self.field, self.reason)?;
        if let Some(value) = &self.value {
            write!(f, ": {value}")?;
        }
        Ok(())
    }
}

/// Presets surviving validation, with diagnostics for dropped records and
/// ignored fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedPresets {
    pub presets: Vec<FramePreset>,
    pub diagnostics: Vec<PresetDiagnostic>,
}

type Rejection = (DiagnosticReason, Option<String>);

/// Parse a JSON array of partial presets and validate each record.
pub fn parse_overrides(
    raw: &str,
    valid_keys: &BTreeSet<FrameKey>,
) -> Result<ValidatedPresets, OverrideParseError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Array(records) => Ok(validate_records(records, valid_keys)),
        other => Err(OverrideParseError::NotAnArray(json_kind(&other))),
    }
}

/// Validate records one by one. Invalid records are dropped, never the list.
pub fn validate_records(records: Vec<Value>, valid_keys: &BTreeSet<FrameKey>) -> ValidatedPresets {
    let mut validated = ValidatedPresets::default();
    for (index, record) in records.into_iter().enumerate() {
        match validate_record(index, record, valid_keys) {
            Ok((preset, ignored)) => {
                validated.presets.push(preset);
                validated.diagnostics.extend(ignored);
            }
            Err(diagnostic) => validated.diagnostics.push(diagnostic),
        }
    }
    validated
}

fn validate_record(
    index: usize,
    record: Value,
    valid_keys: &BTreeSet<FrameKey>,
) -> Result<(FramePreset, Vec<PresetDiagnostic>), PresetDiagnostic> {
    let reject = |name: Option<&String>, field: PresetField, (reason, value): Rejection| {
        PresetDiagnostic {
            index,
            name: name.cloned(),
            field,
            reason,
            value,
        }
    };

    let mut fields = match record {
        Value::Object(fields) => fields,
        other => {
            return Err(reject(
                None,
                PresetField::Record,
                (DiagnosticReason::WrongShape, Some(json_kind(&other).to_string())),
            ))
        }
    };

    let name = required_string(&mut fields, "name")
        .map_err(|rejection| reject(None, PresetField::Name, rejection))?;
    let style = style_field(&mut fields)
        .map_err(|rejection| reject(Some(&name), PresetField::Style, rejection))?;
    let frame_type = type_field(&mut fields, valid_keys)
        .map_err(|rejection| reject(Some(&name), PresetField::Type, rejection))?;

    // Bad optional fields are cleared, the record is kept
    let mut ignored = Vec::new();
    let text = optional_string(&mut fields, "text").unwrap_or_else(|rejection| {
        ignored.push(reject(Some(&name), PresetField::Text, rejection));
        None
    });
    let position = position_field(&mut fields).unwrap_or_else(|rejection| {
        ignored.push(reject(Some(&name), PresetField::Position, rejection));
        None
    });

    let preset = FramePreset {
        name,
        style,
        text,
        position,
        frame_type,
    };
    Ok((preset, ignored))
}

fn required_string(fields: &mut Map<String, Value>, key: &str) -> Result<String, Rejection> {
    match fields.remove(key) {
        None | Some(Value::Null) => Err((DiagnosticReason::Missing, None)),
        Some(Value::String(s)) if s.is_empty() => Err((DiagnosticReason::Empty, None)),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err((DiagnosticReason::WrongShape, Some(json_kind(&other).to_string()))),
    }
}

fn optional_string(fields: &mut Map<String, Value>, key: &str) -> Result<Option<String>, Rejection> {
    match fields.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err((DiagnosticReason::WrongShape, Some(json_kind(&other).to_string()))),
    }
}

const STYLE_ATTRIBUTES: [&str; 6] = [
    "textColor",
    "backgroundColor",
    "borderColor",
    "borderWidth",
    "borderRadius",
    "padding",
];

/// A style must be an object carrying all six string attributes.
fn style_field(fields: &mut Map<String, Value>) -> Result<FrameStyle, Rejection> {
    let style = match fields.remove("style") {
        None | Some(Value::Null) => return Err((DiagnosticReason::Missing, None)),
        Some(Value::Object(style)) => style,
        Some(other) => {
            return Err((DiagnosticReason::WrongShape, Some(json_kind(&other).to_string())))
        }
    };
    for attribute in STYLE_ATTRIBUTES {
        match style.get(attribute) {
            Some(Value::String(_)) => {}
            None | Some(Value::Null) => {
                return Err((
                    DiagnosticReason::WrongShape,
                    Some(format!("{attribute} is missing")),
                ))
            }
            Some(other) => {
                return Err((
                    DiagnosticReason::WrongShape,
                    Some(format!("{attribute} is a {}", json_kind(other))),
                ))
            }
        }
    }
    serde_json::from_value(Value::Object(style))
        .map_err(|e| (DiagnosticReason::WrongShape, Some(e.to_string())))
}

fn type_field(
    fields: &mut Map<String, Value>,
    valid_keys: &BTreeSet<FrameKey>,
) -> Result<FrameKey, Rejection> {
    // An empty type is as good as no type
    let raw = required_string(fields, "type").map_err(|(reason, value)| match reason {
        DiagnosticReason::Empty => (DiagnosticReason::Missing, value),
        _ => (reason, value),
    })?;
    match raw.parse::<FrameKey>() {
        Ok(key) if valid_keys.contains(&key) => Ok(key),
        _ => Err((DiagnosticReason::UnknownValue, Some(raw))),
    }
}

fn position_field(fields: &mut Map<String, Value>) -> Result<Option<FramePosition>, Rejection> {
    match optional_string(fields, "position")? {
        None => Ok(None),
        Some(raw) => raw
            .parse::<FramePosition>()
            .map(Some)
            .map_err(|_| (DiagnosticReason::UnknownValue, Some(raw))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
