//! A small markdown-to-HTML formatter for summaries and chat replies.
//!
//! This is not a markdown implementation.  It understands exactly five
//! constructs, applied as substitutions in a fixed order:
//!
//! 1. `**bold**` becomes `<strong>bold</strong>`
//! 2. `*italic*` becomes `<em>italic</em>` (shortest run, so `*a* *b*` is two spans)
//! 3. lines starting with `### `, `## ` or `# ` become `<h3>`, `<h2>` or `<h1>`
//! 4. a blank line becomes `<br><br>`
//! 5. a newline followed by `- ` becomes `<br>• `
//!
//! Input is HTML-escaped before any substitution, so text from the user or the
//! backend can never inject markup of its own.  The output is not a fixed
//! point: formatting it again would escape the generated tags.  Format each
//! raw message exactly once.

use std::sync::OnceLock;

use regex::Regex;

// Spans never cross a line terminator, and `\r` counts as one.
fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\*\*([^\r\n\x{2028}\x{2029}]+?)\*\*").expect("valid bold regex")
    })
}

fn italic_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\*([^\r\n\x{2028}\x{2029}]+?)\*").expect("valid italic regex")
    })
}

// `### ` must run before `## ` before `# `; once a line is wrapped in a tag it
// no longer starts with `#`, so later rules cannot re-match it.
fn heading_res() -> &'static [(Regex, &'static str); 3] {
    static RES: OnceLock<[(Regex, &'static str); 3]> = OnceLock::new();
    RES.get_or_init(|| {
        [
            (
                Regex::new(r"(?m)^### ([^\r\n\x{2028}\x{2029}]+)").expect("valid h3 regex"),
                "<h3>$1</h3>",
            ),
            (
                Regex::new(r"(?m)^## ([^\r\n\x{2028}\x{2029}]+)").expect("valid h2 regex"),
                "<h2>$1</h2>",
            ),
            (
                Regex::new(r"(?m)^# ([^\r\n\x{2028}\x{2029}]+)").expect("valid h1 regex"),
                "<h1>$1</h1>",
            ),
        ]
    })
}

/// Escapes the five characters that are significant in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Converts the supported markdown subset into an HTML fragment.
///
/// Total and deterministic.  Text with no recognised construct comes back
/// escaped but otherwise unchanged, except that the blank-line and bullet
/// rules always apply to literal newlines.
pub fn format_markdown(text: &str) -> String {
    let mut out = escape_html(text);
    out = bold_re()
        .replace_all(&out, "<strong>$1</strong>")
        .into_owned();
    out = italic_re().replace_all(&out, "<em>$1</em>").into_owned();
    for (re, replacement) in heading_res() {
        out = re.replace_all(&out, *replacement).into_owned();
    }
    out.replace("\n\n", "<br><br>").replace("\n- ", "<br>• ")
}
