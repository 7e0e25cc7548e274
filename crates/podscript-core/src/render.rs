//! HTML fragments for the generator page. Script text goes through the formatter, every other
//! piece of user or service text is escaped.

use crate::form::{CommentatorList, MAX_COMMENTATORS};
use crate::markup::{render_lines, Markup};
use crate::sectionizer::SectionedScript;

/// Output block: heading plus the three sections, each formatted line separated by `<br/>`.
pub fn render_script(script: &SectionedScript) -> Markup {
    let sections = [
        ("Introduction", &script.intro),
        ("Main Discussion", &script.main_discussion),
        ("Conclusion", &script.conclusion),
    ];

    let mut html = String::from(
        r#"<div class="script-output"><h2>Generated Podcast Script</h2><div>"#,
    );
    for (heading, lines) in sections {
        html.push_str(&format!(
            "<h3>{}</h3><pre>{}</pre>",
            heading,
            render_lines(lines.as_slice())
        ));
    }
    html.push_str("</div></div>");
    Markup::trusted(html)
}

pub fn render_error(message: &str) -> Markup {
    Markup::trusted(format!(
        r#"<p class="error-message">{}</p>"#,
        Markup::escape(message)
    ))
}

/// Out-of-band replacement of the page's `#error` slot; `None` clears it.
pub fn render_error_slot(message: Option<&str>) -> Markup {
    let inner = message.map(render_error).unwrap_or_default();
    Markup::trusted(format!(r#"<div id="error" hx-swap-oob="true">{}</div>"#, inner))
}

/// One text input per commentator, named `commentator_1`..`commentator_4`.
pub fn render_commentator_fields(list: &CommentatorList) -> Markup {
    let fields: String = list
        .names()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            format!(
                r#"<input type="text" class="commentator-field" name="commentator_{n}" placeholder="Commentator {n}" value="{v}">"#,
                n = i + 1,
                v = Markup::escape(name)
            )
        })
        .collect();
    Markup::trusted(fields)
}

/// `<option>`s for the commentator count selector, 1 through 4.
pub fn render_commentator_options(selected: usize) -> Markup {
    let options: String = (1..=MAX_COMMENTATORS)
        .map(|n| {
            let attr = if n == selected { " selected" } else { "" };
            format!(r#"<option value="{n}"{attr}>{n}</option>"#)
        })
        .collect();
    Markup::trusted(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sectionizer::sectionize;

    #[test]
    fn script_sections_in_order() {
        let script = sectionize([
            "Intro Music starts",
            "Hello **world**",
            "Outro Music plays",
            "Thank you for listening",
        ]);
        let html = render_script(&script).into_string();

        let intro = html.find("<h3>Introduction</h3>").unwrap();
        let main = html.find("<h3>Main Discussion</h3>").unwrap();
        let outro = html.find("<h3>Conclusion</h3>").unwrap();
        assert!(intro < main && main < outro);

        assert!(html.contains("<pre>Intro Music starts</pre>"));
        assert!(html.contains("<pre>Hello <b>world</b></pre>"));
        assert!(html.contains("<pre>Outro Music plays<br/>Thank you for listening</pre>"));
    }

    #[test]
    fn empty_sections_render_empty_blocks() {
        let html = render_script(&SectionedScript::default()).into_string();
        assert_eq!(html.matches("<pre></pre>").count(), 3);
    }

    #[test]
    fn error_is_escaped() {
        let html = render_error("<b>nope</b>").into_string();
        assert_eq!(
            html,
            r#"<p class="error-message">&lt;b&gt;nope&lt;/b&gt;</p>"#
        );
    }

    #[test]
    fn error_slot_swaps_out_of_band() {
        assert_eq!(
            render_error_slot(None).into_string(),
            r#"<div id="error" hx-swap-oob="true"></div>"#
        );
        let html = render_error_slot(Some("a < b")).into_string();
        assert!(html.starts_with(r#"<div id="error" hx-swap-oob="true"><p class="error-message">"#));
        assert!(html.contains("a &lt; b"));
    }

    #[test]
    fn commentator_fields_numbered_and_escaped() {
        let mut list = CommentatorList::from_names(["Ada", "\"><script>"]);
        list.resize(3);
        let html = render_commentator_fields(&list).into_string();
        assert_eq!(html.matches("<input").count(), 3);
        assert!(html.contains(r#"name="commentator_1""#));
        assert!(html.contains(r#"value="Ada""#));
        assert!(html.contains(r#"name="commentator_3" placeholder="Commentator 3" value="""#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn count_options_mark_selection() {
        let html = render_commentator_options(2).into_string();
        assert_eq!(html.matches("<option").count(), MAX_COMMENTATORS);
        assert!(html.contains(r#"<option value="2" selected>2</option>"#));
        assert!(html.contains(r#"<option value="4">4</option>"#));
    }
}
