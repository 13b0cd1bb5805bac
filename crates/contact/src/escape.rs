/// Escapes `& < > " '` for safe interpolation into an HTML email body.
///
/// The relay builds its HTML by string interpolation rather than through a
/// template engine, so every user-supplied value must pass through here
/// before it reaches a message body or subject.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}
