use crate::commands::{helpers, CmdResult, ListedPublication};
use crate::error::Result;
use crate::filter::{visible_publications, Selection};
use crate::model::Publication;

pub fn run(publications: &[Publication], selection: &Selection) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for message in helpers::unknown_label_warnings(publications, selection) {
        result.add_message(message);
    }

    let listed = visible_publications(publications, selection)
        .into_iter()
        .enumerate()
        .map(|(i, publication)| ListedPublication {
            position: i + 1,
            publication: publication.clone(),
        })
        .collect();

    Ok(result.with_listed(listed))
}
