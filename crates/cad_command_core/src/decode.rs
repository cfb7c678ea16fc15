//! Total decoder from a normalized candidate to a typed `Command`.
//!
//! Malformed JSON is not the user's fault: structural and syntactic failures
//! degrade to `Conversational` so they never read as system errors. Only a
//! recognized-but-invalid command surfaces as `Command::Error`.

use crate::command::Command;
use crate::normalize::normalize;
use crate::validate::validate;
use serde_json::Value;

/// Decode a candidate into exactly one `Command`. Total: every input maps to
/// a variant of the union, never a decode-failed state outside it.
pub fn decode(candidate: Option<&str>, raw_fallback: &str) -> Command {
    let Some(candidate) = candidate else {
        return conversational(raw_fallback);
    };

    let parsed: Value = match serde_json::from_str(candidate) {
        Ok(v) => v,
        Err(err) => {
            tracing::debug!("candidate failed JSON parse, treating as chat: {err}");
            return conversational(raw_fallback);
        }
    };

    let Some(action) = parsed.get("action").and_then(Value::as_str) else {
        tracing::debug!("parsed JSON has no string 'action' key, treating as chat");
        return conversational(raw_fallback);
    };

    // The original relay emits the payload under "value"; some prompt
    // variants used "message" for conversational text. Accept either.
    let value = parsed.get("value").or_else(|| parsed.get("message"));

    validate(action, value)
}

/// Full pipeline for one reply: normalize, then decode with the raw text as
/// the conversational fallback.
pub fn interpret(raw: &str) -> Command {
    decode(normalize(raw).as_deref(), raw)
}

fn conversational(raw: &str) -> Command {
    Command::Conversational {
        text: raw.trim().to_string(),
    }
}
