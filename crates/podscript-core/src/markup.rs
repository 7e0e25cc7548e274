//! Inline Markup Formatter — `**bold**` and `*italic*` to presentational tags.
//! `Markup` marks text that is already in the target markup language; only this crate builds it
//! from raw strings, arbitrary text has to go through `Markup::escape`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Separator placed between formatted lines of one section.
pub const LINE_BREAK: &str = "<br/>";

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern"));

/// Presentational markup that must not be escaped again before it is written to the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    /// Builds markup from untrusted text by escaping it.
    pub fn escape(text: &str) -> Self {
        Markup(html_escape(text))
    }

    /// Wraps a string already assembled from markup pieces.
    pub(crate) fn trusted(s: String) -> Self {
        Markup(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rewrites emphasis syntax in one line. Bold is resolved first so `**x**` never reads as two
/// italic spans. Nothing else is escaped: unbalanced asterisks and literal tags pass through.
pub fn format_line(line: &str) -> Markup {
    let bolded = BOLD.replace_all(line, "<b>${1}</b>");
    let formatted = ITALIC.replace_all(&bolded, "<i>${1}</i>");
    Markup(formatted.into_owned())
}

/// Formats every line and joins them with `<br/>`.
pub fn render_lines<S: AsRef<str>>(lines: &[S]) -> Markup {
    let parts: Vec<String> = lines
        .iter()
        .map(|l| format_line(l.as_ref()).into_string())
        .collect();
    Markup(parts.join(LINE_BREAK))
}

/// Escapes HTML for text placed into generated pages.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
