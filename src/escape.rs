//! HTML escaping for annotated output.
//!
//! [`escape_html`] is the only thing standing between arbitrary pasted text
//! and the markup produced by [`crate::transform::annotate`], so it must be
//! total: every `&`, `<`, `>`, `"` and `'` in the input is replaced by an
//! entity, and nothing else is touched.

/// Escape HTML special characters.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with `&amp;`, `&lt;`, `&gt;`,
/// `&quot;` and `&#39;`. The input is scanned once, so an ampersand produced
/// by one entity is never escaped again.
///
/// # Examples
///
/// ```
/// use llm_textfix::escape::escape_html;
///
/// assert_eq!(escape_html("AT&T <Company>"), "AT&amp;T &lt;Company&gt;");
/// assert_eq!(escape_html("it's \"fine\""), "it&#39;s &quot;fine&quot;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(&mut out, text);
    out
}

/// Append the escaped form of `text` to `out`.
pub fn escape_html_into(out: &mut String, text: &str) {
    let mut last = 0;
    for (i, b) in text.bytes().enumerate() {
        let entity = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        // All five are ASCII, so `i` is always a char boundary
        out.push_str(&text[last..i]);
        out.push_str(entity);
        last = i + 1;
    }
    out.push_str(&text[last..]);
}

/// Escape a single character into `out`.
pub(crate) fn escape_char_into(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(ch),
    }
}

/// Reverse [`escape_html`].
///
/// Decodes the five entities produced by [`escape_html`] (and the `&#x27;`
/// spelling of the apostrophe). Any other `&` sequence is left as is.
///
/// # Examples
///
/// ```
/// use llm_textfix::escape::{escape_html, unescape_html};
///
/// let original = "<a href='x'>Tom & Jerry</a>";
/// assert_eq!(unescape_html(&escape_html(original)), original);
/// ```
pub fn unescape_html(text: &str) -> String {
    const ENTITIES: [(&str, char); 6] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#39;", '\''),
        ("&#x27;", '\''),
    ];

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match ENTITIES.iter().find(|(entity, _)| tail.starts_with(entity)) {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &tail[entity.len()..];
            },
            None => {
                out.push('&');
                rest = &tail[1..];
            },
        }
    }
    out.push_str(rest);
    out
}
