//! Balanced-parenthesis argument extraction.

/// Returns the text strictly between the first `(` at or after `start_at`
/// and its matching `)`, trimmed of surrounding whitespace.
///
/// Nested parenthesized sub-expressions are skipped by depth counting, so
/// `extract("foo(a, bar(b,c), d)", 0)` yields `a, bar(b,c), d`.
///
/// Returns `None` when no opening parenthesis exists before end of text,
/// or when depth never returns to zero (unbalanced input). Callers must
/// treat `None` as a malformed declaration, not silently continue.
pub fn extract(text: &str, start_at: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut body_start = None;

    for (i, c) in text[start_at..].char_indices() {
        match c {
            '(' => {
                if depth == 0 {
                    body_start = Some(start_at + i + 1);
                }
                depth += 1;
            }
            ')' => {
                // A stray ')' before any '(' is host-language text, not ours.
                if depth == 0 {
                    continue;
                }
                depth -= 1;
                if depth == 0 {
                    return Some(text[body_start?..start_at + i].trim());
                }
            }
            _ => {}
        }
    }
    None
}
