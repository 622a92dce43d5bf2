//! Keeps player-supplied text on one log line.

const MAX_PREVIEW: usize = 120;

/// Escapes newlines, tabs, backslashes and other control characters, and truncates
/// anything longer than a short preview with an ellipsis.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_log;

    #[test]
    fn escapes_control_characters() {
        assert_eq!(escape_log("Won\n20\tIGC"), "Won\\n20\\tIGC");
        assert_eq!(escape_log("a\u{7}b"), "a\\x07b");
    }

    #[test]
    fn truncates_long_descriptions() {
        let long = "x".repeat(500);
        let escaped = escape_log(&long);
        assert_eq!(escaped.chars().count(), 121);
        assert!(escaped.ends_with('…'));
    }
}
