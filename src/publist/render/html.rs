//! HTML rendering.
//!
//! The row markup reproduces the site's publication table faithfully, inline
//! styles included, so a generated snapshot diffs cleanly against the live
//! page. Title, author names, venue, and description are inserted as raw
//! markup: the data file is author-controlled and may legitimately contain
//! `<sup>`, `<i>` and friends.

use crate::model::Publication;
use crate::panel::FilterPanel;
use crate::render::RenderOptions;

/// Table rows for the visible publications, in the order given.
pub fn rows(visible: &[&Publication], options: &RenderOptions) -> String {
    let mut html = String::with_capacity(64 + visible.len() * 1024);
    for publication in visible {
        push_row(&mut html, publication, options);
    }
    html
}

/// A complete standalone page: checkbox groups, reset buttons, and the
/// publication table, with the checkbox state mirrored from `panel`.
pub fn page(visible: &[&Publication], panel: &FilterPanel, options: &RenderOptions) -> String {
    let mut html = String::with_capacity(4096 + visible.len() * 1024);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", options.page_title));
    html.push_str("<style>\n");
    html.push_str(
        "body { font-family: system-ui, sans-serif; max-width: 900px; margin: 40px auto; padding: 0 20px; }\n",
    );
    html.push_str("fieldset { border: 1px solid #ddd; border-radius: 6px; margin-bottom: 12px; }\n");
    html.push_str("fieldset label { margin-right: 14px; }\n");
    html.push_str(".reset-btn { margin-left: 14px; }\n");
    html.push_str("table { width: 100%; border-collapse: collapse; }\n");
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", options.page_title));

    push_panel(&mut html, panel);

    html.push_str("<table id=\"publication_table\">\n");
    for publication in visible {
        push_row(&mut html, publication, options);
    }
    html.push_str("</table>\n</body>\n</html>\n");
    html
}

fn push_panel(html: &mut String, panel: &FilterPanel) {
    for group in panel.groups() {
        // a category nothing is tagged with gets no controls
        if group.is_empty() {
            continue;
        }
        let category = group.category();
        html.push_str("<fieldset>\n");
        html.push_str(&format!("<legend>{}</legend>\n", category.title()));
        for checkbox in group.boxes() {
            html.push_str(&format!(
                "<label><input type=\"checkbox\" class=\"{}\" value=\"{}\"{}> {}</label>\n",
                category.css_class(),
                checkbox.label,
                if checkbox.checked { " checked" } else { "" },
                checkbox.label
            ));
        }
        html.push_str(&format!(
            "<button type=\"button\" class=\"reset-btn\" data-target=\"{}\">Reset</button>\n",
            category.css_class()
        ));
        html.push_str("</fieldset>\n");
    }
}

fn push_row(html: &mut String, publication: &Publication, options: &RenderOptions) {
    html.push_str("<tr>\n<td style=\"padding:20px; vertical-align:top;\">\n");
    html.push_str("<div style=\"display:flex; align-items:flex-start; gap:20px;\">\n");

    if let Some(src) = publication.image() {
        // fixed 160x120 window, image center-cropped
        html.push_str(
            "<div style=\"width:160px; height:120px; flex:0 0 160px; display:flex; justify-content:center; align-items:center; overflow:hidden;\">\n",
        );
        html.push_str(&format!(
            "<img src=\"{}\" style=\"width:100%; height:100%; object-fit:cover; object-position:center; border-radius:10px;\">\n",
            src
        ));
        html.push_str("</div>\n");
    }

    html.push_str("<div style=\"flex:1;\">\n");

    // the title sits in an anchor either way; a blank ref just leaves it bare
    match publication.link() {
        Some(href) => html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">",
            href
        )),
        None => html.push_str("<a>"),
    }
    html.push_str(&format!(
        "<span class=\"papertitle\" style=\"font-size:18px; font-weight:600;\">{}</span></a><br>\n",
        publication.name
    ));

    push_author_line(html, publication, options);
    html.push_str("<br>\n");

    html.push_str(&format!("<em>{}</em><br>\n", publication.conference));
    html.push_str(&format!(
        "<p style=\"margin-top:6px; margin-bottom:0px;\">{}</p>\n",
        publication.description
    ));

    html.push_str("</div>\n</div>\n</td>\n</tr>\n");
}

fn push_author_line(html: &mut String, publication: &Publication, options: &RenderOptions) {
    for (i, author) in publication.author.iter().enumerate() {
        if i != 0 {
            html.push_str(", ");
        }
        if is_highlighted(&author.name, options) {
            html.push_str(&format!("<strong>{}</strong>", author.name));
        } else {
            // presence of the key decides the link, not its content
            match &author.href {
                Some(href) => {
                    html.push_str(&format!("<a href=\"{}\">{}</a>", href, author.name))
                }
                None => html.push_str(&format!("<a>{}</a>", author.name)),
            }
        }
    }
    if publication.cofirst {
        html.push_str(&options.cofirst_note);
    }
}

fn is_highlighted(name: &str, options: &RenderOptions) -> bool {
    let Some(highlight) = &options.highlight_author else {
        return false;
    };
    name == highlight || name.strip_suffix('*') == Some(highlight.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Author;

    fn sample() -> Publication {
        let mut p = Publication::new("Scaling Laws for Birdsong");
        p.href = Some("https://example.org/birdsong".to_string());
        p.img = Some("images/birdsong.png".to_string());
        p.author = vec![Author::new("Ada Lovelace"), Author::new("Grace Hopper")];
        p.conference = "NeurIPS 2024".to_string();
        p.description = "We scale birdsong models.".to_string();
        p
    }

    fn options() -> RenderOptions {
        RenderOptions {
            highlight_author: Some("Grace Hopper".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn row_links_the_title_when_a_ref_is_present() {
        let p = sample();
        let html = rows(&[&p], &options());
        assert!(html.contains(
            "<a href=\"https://example.org/birdsong\" target=\"_blank\" rel=\"noopener noreferrer\">"
        ));
        assert!(html.contains("<span class=\"papertitle\""));
        assert!(html.contains("Scaling Laws for Birdsong"));
    }

    #[test]
    fn blank_ref_leaves_the_title_unlinked() {
        let mut p = sample();
        p.href = Some("   ".to_string());
        let html = rows(&[&p], &options());
        assert!(html.contains("<a><span class=\"papertitle\""));
        assert!(!html.contains("target=\"_blank\""));
    }

    #[test]
    fn blank_img_omits_the_thumbnail() {
        let mut p = sample();
        p.img = Some(String::new());
        let html = rows(&[&p], &options());
        assert!(!html.contains("<img"));

        p.img = Some("images/x.png".to_string());
        let html = rows(&[&p], &options());
        assert!(html.contains("<img src=\"images/x.png\""));
        assert!(html.contains("object-fit:cover"));
    }

    #[test]
    fn highlight_author_is_strong_with_or_without_star() {
        let mut p = sample();
        let html = rows(&[&p], &options());
        assert!(html.contains("<strong>Grace Hopper</strong>"));

        p.author[1].name = "Grace Hopper*".to_string();
        let html = rows(&[&p], &options());
        assert!(html.contains("<strong>Grace Hopper*</strong>"));
    }

    #[test]
    fn without_a_highlight_author_everyone_is_a_link() {
        let p = sample();
        let html = rows(&[&p], &RenderOptions::default());
        assert!(!html.contains("<strong>"));
        assert!(html.contains("<a>Grace Hopper</a>"));
    }

    #[test]
    fn authors_are_comma_joined_and_linked_by_key_presence() {
        let mut p = sample();
        p.author[0].href = Some("https://ada.example".to_string());
        let html = rows(&[&p], &options());
        assert!(html.contains("<a href=\"https://ada.example\">Ada Lovelace</a>, "));

        // an empty ref still links, exactly as given
        p.author[0].href = Some(String::new());
        let html = rows(&[&p], &options());
        assert!(html.contains("<a href=\"\">Ada Lovelace</a>"));
    }

    #[test]
    fn cofirst_note_follows_the_author_line() {
        let mut p = sample();
        p.cofirst = true;
        let html = rows(&[&p], &options());
        assert!(html.contains(" (* co-first author)<br>"));
    }

    #[test]
    fn raw_markup_passes_through_unescaped() {
        let mut p = sample();
        p.name = "BERT<sup>2</sup>".to_string();
        p.description = "See <i>the paper</i>.".to_string();
        let html = rows(&[&p], &options());
        assert!(html.contains("BERT<sup>2</sup>"));
        assert!(html.contains("See <i>the paper</i>."));
    }

    #[test]
    fn page_carries_the_widget_contract() {
        let pubs = vec![{
            let mut p = sample();
            p.tags.area = vec!["nlp".into(), "cv".into()];
            p
        }];
        let panel = FilterPanel::from_publications(&pubs);
        let visible: Vec<&Publication> = pubs.iter().collect();
        let html = page(&visible, &panel, &options());

        assert!(html.contains("<table id=\"publication_table\">"));
        assert!(html.contains("class=\"filter-area\" value=\"nlp\" checked"));
        assert!(html.contains("data-target=\"filter-area\""));
        assert!(html.contains("<button type=\"button\" class=\"reset-btn\""));
        assert!(html.contains("<title>Publications</title>"));
    }

    #[test]
    fn page_mirrors_unchecked_boxes_and_skips_empty_groups() {
        let mut p = sample();
        p.tags.area = vec!["nlp".into(), "cv".into()];
        let pubs = vec![p];
        let mut panel = FilterPanel::from_publications(&pubs);
        panel
            .toggle(crate::category::Category::Area, "cv")
            .unwrap();

        let visible: Vec<&Publication> = pubs.iter().collect();
        let html = page(&visible, &panel, &options());
        assert!(html.contains("value=\"nlp\" checked"));
        assert!(html.contains("value=\"cv\"> cv"));
        // no authorship or venue tags anywhere, so no such groups
        assert!(!html.contains("filter-authorship"));
        assert!(!html.contains("filter-venue"));
    }

    #[test]
    fn empty_visible_list_renders_no_rows() {
        assert_eq!(rows(&[], &options()), "");
    }
}
