//! Per-action parameter contracts.
//!
//! Defaulting (missing axis -> y, missing degrees -> 90, missing translate
//! components -> 0) is the only silent repair. Every other deviation is
//! reported as `Command::Error` with a field-specific reason: silently
//! misreading a magnitude on a live model is worse than an explicit failure.

use crate::command::{
    is_hex_color, named_color_hex, Axis, Command, MaterialParams, ToggleAction, TransformMode,
};
use serde_json::Value;

const DEFAULT_AXIS: Axis = Axis::Y;
const DEFAULT_DEGREES: f64 = 90.0;

/// Validate a recognized action's payload into a `Command`. Total: every
/// violation becomes `Command::Error`, never a panic or a coercion.
pub fn validate(action: &str, value: Option<&Value>) -> Command {
    if let Some(toggle) = ToggleAction::parse(action) {
        // Flag actions carry no semantic payload; any value is ignored.
        return Command::Toggle(toggle);
    }

    match action {
        a if a.eq_ignore_ascii_case("rotateAxis") => validate_rotate_axis(value),
        a if a.eq_ignore_ascii_case("scale") => validate_scale(value),
        a if a.eq_ignore_ascii_case("translate") => validate_translate(value),
        a if a.eq_ignore_ascii_case("color") => validate_color(value),
        a if a.eq_ignore_ascii_case("selectPart") => validate_select_part(value),
        a if a.eq_ignore_ascii_case("setTransformMode") => validate_transform_mode(value),
        a if a.eq_ignore_ascii_case("setMaterial") => validate_material(value),
        a if a.eq_ignore_ascii_case("conversational") => validate_conversational(value),
        a if a.eq_ignore_ascii_case("error") => validate_error(value),
        other => Command::Error {
            reason: format!("unknown action: {other}"),
        },
    }
}

fn validate_rotate_axis(value: Option<&Value>) -> Command {
    let obj = match value {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map),
        Some(other) => {
            return Command::Error {
                reason: format!("rotateAxis: value must be an object, got {}", kind_of(other)),
            }
        }
    };

    let axis = match obj.and_then(|m| m.get("axis")) {
        None | Some(Value::Null) => DEFAULT_AXIS,
        Some(Value::String(s)) => match Axis::parse(s) {
            Some(a) => a,
            None => {
                return Command::Error {
                    reason: format!("rotateAxis: axis must be one of x, y, z, got {s:?}"),
                }
            }
        },
        Some(other) => {
            return Command::Error {
                reason: format!("rotateAxis: axis must be a string, got {}", kind_of(other)),
            }
        }
    };

    let degrees = match obj.and_then(|m| m.get("degrees")) {
        None | Some(Value::Null) => DEFAULT_DEGREES,
        Some(v) => match finite_number(v) {
            Some(n) => n,
            None => {
                return Command::Error {
                    reason: format!("rotateAxis: degrees must be a number, got {}", kind_of(v)),
                }
            }
        },
    };

    Command::RotateAxis { axis, degrees }
}

fn validate_scale(value: Option<&Value>) -> Command {
    let Some(v) = value else {
        return Command::Error {
            reason: "scale: missing value (expected a positive number)".to_string(),
        };
    };
    match finite_number(v) {
        Some(factor) if factor > 0.0 => Command::Scale { factor },
        Some(factor) => Command::Error {
            reason: format!("scale: factor must be strictly positive, got {factor}"),
        },
        None => Command::Error {
            reason: format!("scale: value must be a number, got {}", kind_of(v)),
        },
    }
}

fn validate_translate(value: Option<&Value>) -> Command {
    let obj = match value {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map),
        Some(other) => {
            return Command::Error {
                reason: format!("translate: value must be an object, got {}", kind_of(other)),
            }
        }
    };

    let mut out = [0.0f64; 3];
    for (i, key) in ["x", "y", "z"].iter().enumerate() {
        match obj.and_then(|m| m.get(*key)) {
            None | Some(Value::Null) => {} // missing axis defaults to 0
            Some(v) => match finite_number(v) {
                Some(n) => out[i] = n,
                None => {
                    return Command::Error {
                        reason: format!("translate: {key} must be a number, got {}", kind_of(v)),
                    }
                }
            },
        }
    }

    Command::Translate {
        x: out[0],
        y: out[1],
        z: out[2],
    }
}

fn validate_color(value: Option<&Value>) -> Command {
    let Some(Value::String(s)) = value else {
        return Command::Error {
            reason: "color: value must be a string (\"#RRGGBB\" or a known color name)"
                .to_string(),
        };
    };
    let s = s.trim();
    if is_hex_color(s) {
        return Command::Color { hex: s.to_string() };
    }
    if let Some(hex) = named_color_hex(s) {
        return Command::Color {
            hex: hex.to_string(),
        };
    }
    Command::Error {
        reason: format!("color: {s:?} is neither #RRGGBB nor a known color name"),
    }
}

fn validate_select_part(value: Option<&Value>) -> Command {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Command::SelectPart {
            name: s.trim().to_string(),
        },
        Some(Value::String(_)) => Command::Error {
            reason: "selectPart: name must be a non-empty string".to_string(),
        },
        _ => Command::Error {
            reason: "selectPart: missing part name".to_string(),
        },
    }
}

fn validate_transform_mode(value: Option<&Value>) -> Command {
    let Some(Value::String(s)) = value else {
        return Command::Error {
            reason: "setTransformMode: mode must be one of translate, rotate, scale".to_string(),
        };
    };
    match TransformMode::parse(s) {
        Some(mode) => Command::SetTransformMode { mode },
        None => Command::Error {
            reason: format!("setTransformMode: mode must be one of translate, rotate, scale, got {s:?}"),
        },
    }
}

fn validate_material(value: Option<&Value>) -> Command {
    let Some(Value::Object(obj)) = value else {
        return Command::Error {
            reason: "setMaterial: value must be an object".to_string(),
        };
    };

    let mut params = MaterialParams::default();
    for (key, slot) in [
        ("roughness", &mut params.roughness),
        ("metalness", &mut params.metalness),
        ("opacity", &mut params.opacity),
    ] {
        match obj.get(key) {
            None | Some(Value::Null) => {}
            Some(v) => match finite_number(v) {
                Some(n) if (0.0..=1.0).contains(&n) => *slot = Some(n),
                Some(n) => {
                    return Command::Error {
                        reason: format!("setMaterial: {key} must be in [0, 1], got {n}"),
                    }
                }
                None => {
                    return Command::Error {
                        reason: format!("setMaterial: {key} must be a number, got {}", kind_of(v)),
                    }
                }
            },
        }
    }

    if params == MaterialParams::default() {
        return Command::Error {
            reason: "setMaterial: expected at least one of roughness, metalness, opacity"
                .to_string(),
        };
    }
    Command::SetMaterial(params)
}

// An explicit conversational action must carry its own text; the raw-reply
// fallback only applies when no structured command was located at all.
fn validate_conversational(value: Option<&Value>) -> Command {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Command::Conversational {
            text: s.trim().to_string(),
        },
        _ => Command::Error {
            reason: "conversational: missing text".to_string(),
        },
    }
}

fn validate_error(value: Option<&Value>) -> Command {
    let reason = match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => "the assistant reported an unspecified error".to_string(),
    };
    Command::Error { reason }
}

/// JSON numbers only — a numeric string is not a number, and non-finite
/// values never make it into a live transform.
fn finite_number(v: &Value) -> Option<f64> {
    v.as_f64().filter(|n| n.is_finite())
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
