//! Best-effort extraction of a JSON candidate from a raw model reply.
//!
//! Models wrap structured output in code fences or bury it in prose. This
//! pass strips the presentation and hands the decoder something that at
//! least looks like JSON, or reports that nothing structured was found.

/// Extract a JSON candidate substring from `raw`, or `None` when the reply
/// carries no locatable structure. Pure; never panics.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(inner) = strip_code_fence(trimmed) {
        return Some(inner.to_string());
    }

    first_balanced_object(trimmed).map(|s| s.to_string())
}

/// If the whole reply is one fenced code block, return the inner text
/// verbatim (internal whitespace and newlines preserved). The language tag
/// on the opening fence, if any, is discarded.
fn strip_code_fence(s: &str) -> Option<&str> {
    let rest = s.strip_prefix("```")?;
    let body = match rest.find('\n') {
        // Opening fence is its own line, possibly with a language tag.
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    let inner = body.strip_suffix("```")?;
    Some(inner.trim_matches('\n'))
}

/// First balanced `{ ... }` substring, found by brace-depth counting. A
/// naive `{.*}` regex mismatches on nested objects, so we walk the braces.
fn first_balanced_object(s: &str) -> Option<&str> {
    let start = s.find('{')?;
    let mut depth = 0usize;
    for (offset, c) in s[start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[start..start + offset + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_json_block() {
        let raw = "```json\n{\"action\":\"scale\",\"value\":2}\n```";
        assert_eq!(
            normalize(raw).as_deref(),
            Some("{\"action\":\"scale\",\"value\":2}")
        );
    }

    #[test]
    fn test_fence_without_language_tag() {
        let raw = "```\n{\"action\":\"resetView\"}\n```";
        assert_eq!(normalize(raw).as_deref(), Some("{\"action\":\"resetView\"}"));
    }

    #[test]
    fn test_fence_preserves_internal_newlines() {
        let raw = "```json\n{\n  \"action\": \"translate\",\n  \"value\": {}\n}\n```";
        assert_eq!(
            normalize(raw).as_deref(),
            Some("{\n  \"action\": \"translate\",\n  \"value\": {}\n}")
        );
    }

    #[test]
    fn test_json_buried_in_prose() {
        let raw = "Sure! Here is the command: {\"action\":\"hide\"} — let me know.";
        assert_eq!(normalize(raw).as_deref(), Some("{\"action\":\"hide\"}"));
    }

    #[test]
    fn test_nested_braces_are_balanced() {
        let raw = "ok {\"action\":\"rotateAxis\",\"value\":{\"axis\":\"y\"}} done";
        assert_eq!(
            normalize(raw).as_deref(),
            Some("{\"action\":\"rotateAxis\",\"value\":{\"axis\":\"y\"}}")
        );
    }

    #[test]
    fn test_unclosed_brace_yields_none() {
        assert_eq!(normalize("broken {\"action\":\"scale\""), None);
    }

    #[test]
    fn test_plain_chat_yields_none() {
        assert_eq!(normalize("Hello! How can I help?"), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   \n  "), None);
    }
}
