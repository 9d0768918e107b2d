/// Escapes text for insertion as HTML text content or attribute values.
///
/// This is the only defense against result cells that look like markup, so it
/// is applied to every header, cell, and user-echoed string without
/// exception.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
