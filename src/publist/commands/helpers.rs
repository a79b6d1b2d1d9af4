use crate::category::Category;
use crate::commands::CmdMessage;
use crate::filter::Selection;
use crate::model::Publication;

/// Warn about selected labels that no publication carries. The filter
/// itself happily matches nothing; the warning catches typos.
pub fn unknown_label_warnings(
    publications: &[Publication],
    selection: &Selection,
) -> Vec<CmdMessage> {
    let mut messages = Vec::new();
    for category in Category::ALL {
        for label in selection.labels(category) {
            let known = publications
                .iter()
                .any(|p| p.labels(category).contains(label));
            if !known {
                messages.push(CmdMessage::warning(format!(
                    "No publication is tagged '{}' under {}",
                    label, category
                )));
            }
        }
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_produce_no_warnings() {
        let mut p = Publication::new("A");
        p.tags.area = vec!["nlp".into()];
        let selection = Selection::new().with(Category::Area, &["nlp"]);
        assert!(unknown_label_warnings(&[p], &selection).is_empty());
    }

    #[test]
    fn unknown_labels_are_named_with_their_category() {
        let mut p = Publication::new("A");
        p.tags.area = vec!["nlp".into()];
        let selection = Selection::new()
            .with(Category::Area, &["nlp", "robotics"])
            .with(Category::Venue, &["journal"]);
        let messages = unknown_label_warnings(&[p], &selection);
        assert_eq!(messages.len(), 2);
        assert!(messages[0].content.contains("'robotics' under area"));
        assert!(messages[1].content.contains("'journal' under venue"));
    }
}
