//! Checkbox panel state.
//!
//! The rendered page shows one checkbox group per filter category plus a
//! reset button. `FilterPanel` is that UI state, detached from any DOM: it
//! derives its options from the dataset (first appearance order), starts
//! fully checked, and enforces the one rule the page enforces—a group never
//! goes all-unchecked. An uncheck that would empty a group is undone and
//! reported as [`ToggleOutcome::Reverted`] so the UI can say why nothing
//! changed.

use crate::category::Category;
use crate::error::{PublistError, Result};
use crate::filter::Selection;
use crate::model::Publication;

/// One checkbox: a label and its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub label: String,
    pub checked: bool,
}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The box changed state; `checked` is its new state.
    Toggled { checked: bool },
    /// Unchecking would have emptied the group, so the box was re-checked.
    Reverted,
}

/// The checkboxes of a single category, in page order.
#[derive(Debug, Clone)]
pub struct CheckboxGroup {
    category: Category,
    boxes: Vec<Checkbox>,
}

impl CheckboxGroup {
    /// Collect the category's labels in first-seen order, all checked.
    fn from_publications(category: Category, publications: &[Publication]) -> Self {
        let mut boxes: Vec<Checkbox> = Vec::new();
        for publication in publications {
            for label in publication.labels(category) {
                if !boxes.iter().any(|b| &b.label == label) {
                    boxes.push(Checkbox {
                        label: label.clone(),
                        checked: true,
                    });
                }
            }
        }
        Self { category, boxes }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn boxes(&self) -> &[Checkbox] {
        &self.boxes
    }

    /// A group with no labels renders nothing and never constrains.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.boxes.iter().filter(|b| b.checked).count()
    }

    pub fn checked_labels(&self) -> Vec<String> {
        self.boxes
            .iter()
            .filter(|b| b.checked)
            .map(|b| b.label.clone())
            .collect()
    }

    /// Flip one box. Unchecking the last checked box is undone on the spot.
    pub fn toggle(&mut self, label: &str) -> Result<ToggleOutcome> {
        let Some(pos) = self.boxes.iter().position(|b| b.label == label) else {
            return Err(PublistError::Panel(format!(
                "no '{}' checkbox in the {} group",
                label, self.category
            )));
        };
        self.boxes[pos].checked = !self.boxes[pos].checked;
        if !self.boxes[pos].checked && self.checked_count() == 0 {
            self.boxes[pos].checked = true;
            return Ok(ToggleOutcome::Reverted);
        }
        Ok(ToggleOutcome::Toggled {
            checked: self.boxes[pos].checked,
        })
    }

    /// Back to the reset state: first box checked, everything else cleared.
    /// No-op for an empty group.
    pub fn reset(&mut self) {
        for (i, b) in self.boxes.iter_mut().enumerate() {
            b.checked = i == 0;
        }
    }

    /// Check exactly `selected`; an empty slice keeps the default all-checked
    /// state. Labels that name no checkbox are an error since the resulting
    /// state would not be reachable on the page.
    fn apply_selection(&mut self, selected: &[String]) -> Result<()> {
        if selected.is_empty() {
            return Ok(());
        }
        for label in selected {
            if !self.boxes.iter().any(|b| &b.label == label) {
                return Err(PublistError::Panel(format!(
                    "no '{}' checkbox in the {} group",
                    label, self.category
                )));
            }
        }
        for b in &mut self.boxes {
            b.checked = selected.contains(&b.label);
        }
        Ok(())
    }
}

/// All three checkbox groups, in [`Category::ALL`] order.
#[derive(Debug, Clone)]
pub struct FilterPanel {
    groups: [CheckboxGroup; 3],
}

impl FilterPanel {
    /// The page's load state: every label present in the data, all checked.
    pub fn from_publications(publications: &[Publication]) -> Self {
        Self {
            groups: Category::ALL.map(|c| CheckboxGroup::from_publications(c, publications)),
        }
    }

    /// A panel pre-set to `selection` (empty categories keep the default
    /// all-checked state).
    pub fn with_selection(publications: &[Publication], selection: &Selection) -> Result<Self> {
        let mut panel = Self::from_publications(publications);
        for group in &mut panel.groups {
            group.apply_selection(selection.labels(group.category))?;
        }
        Ok(panel)
    }

    fn index(category: Category) -> usize {
        match category {
            Category::Authorship => 0,
            Category::Area => 1,
            Category::Venue => 2,
        }
    }

    pub fn group(&self, category: Category) -> &CheckboxGroup {
        &self.groups[Self::index(category)]
    }

    pub fn groups(&self) -> &[CheckboxGroup] {
        &self.groups
    }

    pub fn toggle(&mut self, category: Category, label: &str) -> Result<ToggleOutcome> {
        self.groups[Self::index(category)].toggle(label)
    }

    pub fn reset(&mut self, category: Category) {
        self.groups[Self::index(category)].reset();
    }

    /// The checked labels per category, ready for the filter evaluator.
    pub fn selection(&self) -> Selection {
        let mut selection = Selection::new();
        for group in &self.groups {
            *selection.labels_mut(group.category) = group.checked_labels();
        }
        selection
    }
}
