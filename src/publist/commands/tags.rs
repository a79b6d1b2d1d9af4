use crate::category::Category;
use crate::commands::{CategoryLabels, CmdResult, LabelCount};
use crate::error::Result;
use crate::model::Publication;

/// Collect every label per category, in first-seen order, with the number
/// of publications carrying it. This is exactly the option list the
/// checkbox panel derives.
pub fn run(publications: &[Publication]) -> Result<CmdResult> {
    let mut label_counts = Vec::new();
    for category in Category::ALL {
        let mut labels: Vec<LabelCount> = Vec::new();
        for publication in publications {
            let mut seen: Vec<&str> = Vec::new();
            for label in publication.labels(category) {
                // a label repeated within one record counts once
                if seen.contains(&label.as_str()) {
                    continue;
                }
                seen.push(label);
                match labels.iter_mut().find(|lc| &lc.label == label) {
                    Some(lc) => lc.publications += 1,
                    None => labels.push(LabelCount {
                        label: label.clone(),
                        publications: 1,
                    }),
                }
            }
        }
        label_counts.push(CategoryLabels { category, labels });
    }
    Ok(CmdResult::default().with_label_counts(label_counts))
}
