use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::filter::{visible_publications, Selection};
use crate::model::Publication;
use crate::panel::FilterPanel;
use crate::render::{html, RenderOptions};

/// Render the visible rows, or with `page` a full standalone snapshot. The
/// page variant needs a checkbox panel in a state matching `selection`, so
/// selected labels must exist in the data; the rows variant treats the
/// selection as a plain query.
pub fn run(
    publications: &[Publication],
    selection: &Selection,
    options: &RenderOptions,
    page: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for message in helpers::unknown_label_warnings(publications, selection) {
        result.add_message(message);
    }

    let visible = visible_publications(publications, selection);
    let html = if page {
        let panel = FilterPanel::with_selection(publications, selection)?;
        html::page(&visible, &panel, options)
    } else {
        html::rows(&visible, options)
    };

    Ok(result.with_html(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn area_tagged(name: &str, area: &str) -> Publication {
        let mut p = Publication::new(name);
        p.tags.area = vec![area.to_string()];
        p
    }

    #[test]
    fn rows_cover_only_the_visible_set() {
        let pubs = vec![area_tagged("Alpha", "nlp"), area_tagged("Beta", "cv")];
        let selection = Selection::new().with(Category::Area, &["nlp"]);
        let result = run(&pubs, &selection, &RenderOptions::default(), false).unwrap();
        let html = result.html.unwrap();
        assert!(html.contains("Alpha"));
        assert!(!html.contains("Beta"));
        assert!(!html.contains("<table")); // rows only
    }

    #[test]
    fn page_wraps_rows_and_mirrors_the_selection() {
        let pubs = vec![area_tagged("Alpha", "nlp"), area_tagged("Beta", "cv")];
        let selection = Selection::new().with(Category::Area, &["nlp"]);
        let result = run(&pubs, &selection, &RenderOptions::default(), true).unwrap();
        let html = result.html.unwrap();
        assert!(html.contains("<table id=\"publication_table\">"));
        assert!(html.contains("value=\"nlp\" checked"));
        assert!(html.contains("value=\"cv\"> cv"));
    }

    #[test]
    fn page_rejects_labels_the_panel_cannot_show() {
        let pubs = vec![area_tagged("Alpha", "nlp")];
        let selection = Selection::new().with(Category::Area, &["robotics"]);
        assert!(run(&pubs, &selection, &RenderOptions::default(), true).is_err());
        // the rows variant only warns
        let result = run(&pubs, &selection, &RenderOptions::default(), false).unwrap();
        assert_eq!(result.html.as_deref(), Some(""));
        assert!(!result.messages.is_empty());
    }
}
