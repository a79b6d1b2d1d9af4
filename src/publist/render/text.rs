//! Plain-text lines for the terminal list view.
//!
//! Produces uncolored strings; the CLI decides what to dim or highlight.
//! Markup that is welcome in the HTML output (`<sup>`, `<i>`, ...) is
//! stripped here.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::Publication;
use crate::render::RenderOptions;

/// `"  1. Title ...                         Venue"`, fitted to `width`.
pub fn title_line(position: usize, publication: &Publication, width: usize) -> String {
    let idx_str = format!("{:>3}. ", position);
    let venue = strip_markup(&publication.conference);
    let title = strip_markup(&publication.name);

    let gap = if venue.is_empty() { 0 } else { 2 };
    let fixed = idx_str.width() + venue.width() + gap;
    let available = width.saturating_sub(fixed);

    let title_display = truncate_to_width(&title, available);
    let padding = available.saturating_sub(title_display.width());

    if venue.is_empty() {
        format!("{}{}", idx_str, title_display)
    } else {
        format!(
            "{}{}{}  {}",
            idx_str,
            title_display,
            " ".repeat(padding),
            venue
        )
    }
}

/// The indented author line under a title, or `None` when there is nothing
/// to show.
pub fn author_line(
    publication: &Publication,
    options: &RenderOptions,
    width: usize,
) -> Option<String> {
    if publication.author.is_empty() {
        return None;
    }
    let mut names = publication
        .author
        .iter()
        .map(|a| strip_markup(&a.name))
        .collect::<Vec<_>>()
        .join(", ");
    if publication.cofirst {
        names.push_str(&options.cofirst_note);
    }
    let indent = "     ";
    Some(format!(
        "{}{}",
        indent,
        truncate_to_width(&names, width.saturating_sub(indent.len()))
    ))
}

/// Drop `<...>` tags, keeping text content.
pub fn strip_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Author;

    fn sample() -> Publication {
        let mut p = Publication::new("A Very Long Title About Transformers");
        p.conference = "ICML 2023".to_string();
        p.author = vec![Author::new("Ada Lovelace"), Author::new("Grace Hopper")];
        p
    }

    #[test]
    fn title_line_right_aligns_the_venue() {
        let line = title_line(1, &sample(), 80);
        assert!(line.starts_with("  1. A Very Long Title About Transformers"));
        assert!(line.ends_with("ICML 2023"));
        assert_eq!(line.width(), 80);
    }

    #[test]
    fn narrow_width_truncates_the_title_not_the_venue() {
        let line = title_line(1, &sample(), 40);
        assert!(line.contains('…'));
        assert!(line.ends_with("ICML 2023"));
    }

    #[test]
    fn missing_venue_leaves_no_trailing_padding() {
        let mut p = sample();
        p.conference = String::new();
        let line = title_line(3, &p, 80);
        assert_eq!(line, "  3. A Very Long Title About Transformers");
    }

    #[test]
    fn markup_is_stripped_for_the_terminal() {
        let mut p = sample();
        p.name = "BERT<sup>2</sup> rocks".to_string();
        let line = title_line(1, &p, 80);
        assert!(line.contains("BERT2 rocks"));
        assert!(!line.contains('<'));
    }

    #[test]
    fn author_line_joins_names_and_appends_the_cofirst_note() {
        let mut p = sample();
        p.cofirst = true;
        let line = author_line(&p, &RenderOptions::default(), 100).unwrap();
        assert_eq!(
            line,
            "     Ada Lovelace, Grace Hopper (* co-first author)"
        );
    }

    #[test]
    fn no_authors_means_no_author_line() {
        let mut p = sample();
        p.author.clear();
        assert!(author_line(&p, &RenderOptions::default(), 100).is_none());
    }

    #[test]
    fn strip_markup_handles_nested_and_unclosed_tags() {
        assert_eq!(strip_markup("a <b>bold</b> move"), "a bold move");
        assert_eq!(strip_markup("dangling <em"), "dangling ");
        assert_eq!(strip_markup("no tags"), "no tags");
    }

    #[test]
    fn wide_characters_count_by_display_width() {
        let mut p = sample();
        p.name = "注意力就是你所需要的一切".to_string();
        p.conference = String::new();
        let line = title_line(1, &p, 20);
        assert!(line.width() <= 20);
        assert!(line.contains('…'));
    }
}
