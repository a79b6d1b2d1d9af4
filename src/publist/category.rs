//! The filter category registry.
//!
//! Publications are tagged along three fixed axes: authorship (first author,
//! corresponding author, ...), research area, and venue kind. Each axis is one
//! group of checkboxes in the rendered page, and the page wires those groups
//! to the engine through a CSS class (`filter-authorship` etc.). This module
//! is the single source of truth for that mapping.

use std::fmt;
use std::str::FromStr;

use crate::error::PublistError;

/// One filter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Authorship,
    Area,
    Venue,
}

impl Category {
    /// Every category, in the order groups appear on the page.
    pub const ALL: [Category; 3] = [Category::Authorship, Category::Area, Category::Venue];

    /// The key used for this category in the data file (`tags.<name>`)
    /// and in CLI flags.
    pub fn name(self) -> &'static str {
        match self {
            Category::Authorship => "authorship",
            Category::Area => "area",
            Category::Venue => "venue",
        }
    }

    /// The CSS class the page puts on this category's checkboxes. Reset
    /// buttons reference the same class via their `data-target` attribute.
    pub fn css_class(self) -> &'static str {
        match self {
            Category::Authorship => "filter-authorship",
            Category::Area => "filter-area",
            Category::Venue => "filter-venue",
        }
    }

    /// Heading for the category's checkbox group.
    pub fn title(self) -> &'static str {
        match self {
            Category::Authorship => "Authorship",
            Category::Area => "Area",
            Category::Venue => "Venue",
        }
    }

    /// Look up a category by its data-file name or its CSS class.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name || c.css_class() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = PublistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_name(s).ok_or_else(|| PublistError::UnknownCategory(s.to_string()))
    }
}
