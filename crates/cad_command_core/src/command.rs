use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One fully interpreted model reply. Exactly one variant is active per turn;
/// the value is created when the reply arrives and discarded after dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RotateAxis { axis: Axis, degrees: f64 },
    Scale { factor: f64 },
    Translate { x: f64, y: f64, z: f64 },
    Color { hex: String },
    SelectPart { name: String },
    SetTransformMode { mode: TransformMode },
    SetMaterial(MaterialParams),
    Toggle(ToggleAction),
    /// Universal fallback: the reply is plain chat, not a command.
    Conversational { text: String },
    /// Terminal for the turn. Surfaced to the transcript, never dispatched.
    Error { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("x") => Some(Self::X),
            v if v.eq_ignore_ascii_case("y") => Some(Self::Y),
            v if v.eq_ignore_ascii_case("z") => Some(Self::Z),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    Translate,
    Rotate,
    Scale,
}

impl TransformMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("translate") => Some(Self::Translate),
            v if v.eq_ignore_ascii_case("rotate") => Some(Self::Rotate),
            v if v.eq_ignore_ascii_case("scale") => Some(Self::Scale),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
        }
    }
}

/// Boolean-flag actions: no payload, triggering them is the whole effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToggleAction {
    Hide,
    Show,
    Duplicate,
    RemoveObject,
    ResetView,
    DesignInfo,
    ListParts,
    IdentifySelectedObject,
    GoBack,
}

impl ToggleAction {
    pub const ALL: [ToggleAction; 9] = [
        Self::Hide,
        Self::Show,
        Self::Duplicate,
        Self::RemoveObject,
        Self::ResetView,
        Self::DesignInfo,
        Self::ListParts,
        Self::IdentifySelectedObject,
        Self::GoBack,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hide => "hide",
            Self::Show => "show",
            Self::Duplicate => "duplicate",
            Self::RemoveObject => "removeObject",
            Self::ResetView => "resetView",
            Self::DesignInfo => "designInfo",
            Self::ListParts => "listParts",
            Self::IdentifySelectedObject => "identifySelectedObject",
            Self::GoBack => "goBack",
        }
    }
}

/// Material overrides for the selected object. All fields optional; present
/// fields must be in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roughness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metalness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// Resolve a handful of well-known color names to their hex form. Anything
/// outside this table must already be `#RRGGBB` or the command is rejected.
pub fn named_color_hex(name: &str) -> Option<&'static str> {
    match name.trim().to_ascii_lowercase().as_str() {
        "red" => Some("#FF0000"),
        "green" => Some("#00FF00"),
        "blue" => Some("#0000FF"),
        "black" => Some("#000000"),
        "white" => Some("#FFFFFF"),
        "yellow" => Some("#FFFF00"),
        _ => None,
    }
}

pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

impl Command {
    /// The `action` discriminant as it appears on the wire.
    pub fn action_name(&self) -> &'static str {
        match self {
            Self::RotateAxis { .. } => "rotateAxis",
            Self::Scale { .. } => "scale",
            Self::Translate { .. } => "translate",
            Self::Color { .. } => "color",
            Self::SelectPart { .. } => "selectPart",
            Self::SetTransformMode { .. } => "setTransformMode",
            Self::SetMaterial(_) => "setMaterial",
            Self::Toggle(t) => t.as_str(),
            Self::Conversational { .. } => "conversational",
            Self::Error { .. } => "error",
        }
    }

    /// Canonical `{"action": ..., "value": ...}` wire shape. This is the one
    /// bit-exact JSON contract shared with the model backend.
    pub fn to_wire(&self) -> Value {
        match self {
            Self::RotateAxis { axis, degrees } => json!({
                "action": "rotateAxis",
                "value": { "axis": axis.as_str(), "degrees": degrees }
            }),
            Self::Scale { factor } => json!({ "action": "scale", "value": factor }),
            Self::Translate { x, y, z } => json!({
                "action": "translate",
                "value": { "x": x, "y": y, "z": z }
            }),
            Self::Color { hex } => json!({ "action": "color", "value": hex }),
            Self::SelectPart { name } => json!({ "action": "selectPart", "value": name }),
            Self::SetTransformMode { mode } => json!({
                "action": "setTransformMode",
                "value": mode.as_str()
            }),
            Self::SetMaterial(params) => json!({ "action": "setMaterial", "value": params }),
            Self::Toggle(t) => json!({ "action": t.as_str() }),
            Self::Conversational { text } => json!({ "action": "conversational", "value": text }),
            Self::Error { reason } => json!({ "action": "error", "value": reason }),
        }
    }

    pub fn is_dispatchable(&self) -> bool {
        !matches!(self, Self::Conversational { .. } | Self::Error { .. })
    }
}

impl Serialize for Command {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_wire().serialize(serializer)
    }
}
