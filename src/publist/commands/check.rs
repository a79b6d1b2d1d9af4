use crate::category::Category;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Publication;
use crate::panel::FilterPanel;

/// Data hygiene report. Warnings are records that will not behave the way
/// their author probably intended; infos are cosmetic.
pub fn run(publications: &[Publication]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let panel = FilterPanel::from_publications(publications);
    let mut problems = 0;

    for (i, publication) in publications.iter().enumerate() {
        let n = i + 1;
        let title = display_title(publication);

        if publication.name.trim().is_empty() {
            problems += 1;
            result.add_message(CmdMessage::warning(format!("record {}: no title", n)));
        }

        if publication.author.is_empty() {
            problems += 1;
            result.add_message(CmdMessage::warning(format!(
                "record {} ({}): no authors",
                n, title
            )));
        } else if publication.author.iter().any(|a| a.name.trim().is_empty()) {
            problems += 1;
            result.add_message(CmdMessage::warning(format!(
                "record {} ({}): an author entry has no name",
                n, title
            )));
        }

        if publication.cofirst && !publication.author.iter().any(|a| a.name.ends_with('*')) {
            problems += 1;
            result.add_message(CmdMessage::warning(format!(
                "record {} ({}): cofirst is set but no author name carries a '*'",
                n, title
            )));
        }

        for category in Category::ALL {
            // only meaningful where the category has checkboxes at all
            if publication.labels(category).is_empty() && !panel.group(category).is_empty() {
                problems += 1;
                result.add_message(CmdMessage::warning(format!(
                    "record {} ({}): no {} tags; hidden whenever any {} box is checked",
                    n, title, category, category
                )));
            }
        }

        if matches!(&publication.href, Some(h) if h.trim().is_empty()) {
            result.add_message(CmdMessage::info(format!(
                "record {} ({}): 'ref' is blank, the title renders unlinked",
                n, title
            )));
        }
        if matches!(&publication.img, Some(im) if im.trim().is_empty()) {
            result.add_message(CmdMessage::info(format!(
                "record {} ({}): 'img' is blank, no thumbnail",
                n, title
            )));
        }
        for author in &publication.author {
            if matches!(&author.href, Some(h) if h.trim().is_empty()) {
                result.add_message(CmdMessage::info(format!(
                    "record {} ({}): author '{}' links to an empty ref",
                    n, title, author.name
                )));
            }
        }
    }

    if problems == 0 {
        result.add_message(CmdMessage::success(format!(
            "No problems found in {} publication(s).",
            publications.len()
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{} problem(s) in {} publication(s).",
            problems,
            publications.len()
        )));
    }
    Ok(result)
}

fn display_title(publication: &Publication) -> String {
    if publication.name.trim().is_empty() {
        "untitled".to_string()
    } else {
        format!("'{}'", publication.name)
    }
}
