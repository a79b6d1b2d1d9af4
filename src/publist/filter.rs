//! Visibility filtering.
//!
//! A `Selection` is the set of checked labels per category, however the UI
//! chose to produce it (checkbox panel, CLI flags, test fixture). Visibility
//! is a pure function of a publication list and a selection: categories
//! combine with AND, labels within a category with OR, and a category with
//! nothing selected imposes no constraint.

use crate::category::Category;
use crate::model::Publication;

/// The selected labels, one list per category.
///
/// Empty list = no constraint for that category. Note the asymmetry on the
/// publication side: a record with no tags in a category intersects nothing,
/// so it is hidden whenever that category has any selection at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub authorship: Vec<String>,
    pub area: Vec<String>,
    pub venue: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for tests and flag parsing.
    pub fn with(mut self, category: Category, labels: &[&str]) -> Self {
        *self.labels_mut(category) = labels.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn labels(&self, category: Category) -> &[String] {
        match category {
            Category::Authorship => &self.authorship,
            Category::Area => &self.area,
            Category::Venue => &self.venue,
        }
    }

    pub fn labels_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Authorship => &mut self.authorship,
            Category::Area => &mut self.area,
            Category::Venue => &mut self.venue,
        }
    }

    /// True when no category has a selection.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|&c| self.labels(c).is_empty())
    }

    /// Check if a publication passes every category's constraint.
    pub fn matches(&self, publication: &Publication) -> bool {
        Category::ALL
            .iter()
            .all(|&c| self.category_matches(c, publication))
    }

    fn category_matches(&self, category: Category, publication: &Publication) -> bool {
        let selected = self.labels(category);
        if selected.is_empty() {
            return true;
        }
        let tagged = publication.labels(category);
        // any-of: one shared label is enough
        selected.iter().any(|label| tagged.contains(label))
    }
}

/// The publications that pass `selection`, in input order.
pub fn visible_publications<'a>(
    publications: &'a [Publication],
    selection: &Selection,
) -> Vec<&'a Publication> {
    publications
        .iter()
        .filter(|p| selection.matches(p))
        .collect()
}
