/// Extract the JSON payload from model output that may be wrapped in
/// markdown code fences or surrounded by prose.
///
/// Models asked for "JSON only" still occasionally return
/// ` ```json { ... } ``` ` or a leading sentence. Strategy: prefer a fenced
/// block if one exists, otherwise slice from the first `{` to the last `}`.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(start) = trimmed.find("```") {
        // Skip an optional language tag on the fence line.
        let body = trimmed[start + 3..]
            .strip_prefix("json")
            .unwrap_or(&trimmed[start + 3..]);
        if let Some(end) = body.find("```") {
            return body[..end].trim();
        }
    }

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if end > start => trimmed[start..=end].trim(),
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_bare_json() {
        assert_eq!(extract_json(r#"{"a": 1}"#), r#"{"a": 1}"#);
    }

    #[test]
    fn strips_json_fence() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json(text), r#"{"a": 1}"#);
    }

    #[test]
    fn strips_anonymous_fence() {
        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json(text), r#"{"a": 1}"#);
    }

    #[test]
    fn slices_json_out_of_prose() {
        let text = "Here is the site content:\n{\"pages\": []}\nHope that helps!";
        assert_eq!(extract_json(text), r#"{"pages": []}"#);
    }

    #[test]
    fn leaves_non_json_untouched() {
        assert_eq!(extract_json("no json here"), "no json here");
    }
}
