//! # API Facade
//!
//! A [`Session`] is one loaded dataset plus one checkbox panel: exactly the
//! state a reader's page holds between load and navigation. It is the single
//! entry point for every UI—the interactive loop, one-shot CLI commands run
//! through the command layer with a selection they build themselves.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Routes panel events** (toggle/reset) to the panel state
//! - **Dispatches queries** to the command layer with the panel's selection
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the Facade Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs` and `filter.rs`
//! - **I/O beyond the initial load**: no stdout, stderr, or terminals
//! - **Presentation concerns**: renderers are invoked through commands
//!
//! Two loading policies exist on purpose. `open` fails loudly and suits
//! one-shot commands that should exit non-zero on a broken file.
//! `open_or_empty` is the page policy: report the problem, carry on with an
//! empty list, keep the UI alive.

use std::path::Path;

use crate::category::Category;
use crate::commands;
use crate::error::Result;
use crate::filter::Selection;
use crate::model::Publication;
use crate::panel::FilterPanel;
use crate::render::RenderOptions;
use crate::source;

/// One dataset, one panel, one set of render options.
pub struct Session {
    publications: Vec<Publication>,
    panel: FilterPanel,
    options: RenderOptions,
}

impl Session {
    /// Start from in-memory records with the page's load state: every
    /// checkbox derived from the data, all checked.
    pub fn new(publications: Vec<Publication>, options: RenderOptions) -> Self {
        let panel = FilterPanel::from_publications(&publications);
        Self {
            publications,
            panel,
            options,
        }
    }

    /// Load the data file or fail.
    pub fn open(path: &Path, options: RenderOptions) -> Result<Self> {
        let publications = source::load_publications(path)?;
        Ok(Self::new(publications, options))
    }

    /// Load the data file, or report the problem and start empty.
    pub fn open_or_empty(path: &Path, options: RenderOptions) -> (Self, Vec<commands::CmdMessage>) {
        let (publications, messages) = source::load_or_empty(path);
        (Self::new(publications, options), messages)
    }

    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    pub fn panel(&self) -> &FilterPanel {
        &self.panel
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The checked labels per category, as the evaluator consumes them.
    pub fn selection(&self) -> Selection {
        self.panel.selection()
    }

    /// Flip one checkbox, subject to the at-least-one rule.
    pub fn toggle(&mut self, category: Category, label: &str) -> Result<ToggleOutcome> {
        self.panel.toggle(category, label)
    }

    /// Reset one group to its first checkbox.
    pub fn reset(&mut self, category: Category) {
        self.panel.reset(category);
    }

    /// The visible publications under the current panel state.
    pub fn list(&self) -> Result<commands::CmdResult> {
        self.list_with(&self.panel.selection())
    }

    /// The visible publications under a caller-built selection. One-shot
    /// queries pass labels straight from flags, bypassing the panel.
    pub fn list_with(&self, selection: &Selection) -> Result<commands::CmdResult> {
        commands::list::run(&self.publications, selection)
    }

    /// The visible rows as HTML, rebuilt from scratch.
    pub fn render_rows(&self) -> Result<commands::CmdResult> {
        self.render_rows_with(&self.panel.selection())
    }

    /// The visible rows under a caller-built selection.
    pub fn render_rows_with(&self, selection: &Selection) -> Result<commands::CmdResult> {
        commands::render::run(&self.publications, selection, &self.options, false)
    }

    /// A standalone page snapshot of the current state.
    pub fn render_page(&self) -> Result<commands::CmdResult> {
        self.render_page_with(&self.panel.selection())
    }

    /// A standalone page snapshot under a caller-built selection. Fails when
    /// the selection names labels the panel has no checkbox for.
    pub fn render_page_with(&self, selection: &Selection) -> Result<commands::CmdResult> {
        commands::render::run(&self.publications, selection, &self.options, true)
    }

    /// Labels and usage counts per category.
    pub fn tags(&self) -> Result<commands::CmdResult> {
        commands::tags::run(&self.publications)
    }

    /// Data hygiene findings for the loaded records.
    pub fn check(&self) -> Result<commands::CmdResult> {
        commands::check::run(&self.publications)
    }
}

/// Read or update configuration. Needs no dataset, so it lives outside
/// [`Session`].
pub fn config(
    config: &crate::config::PublistConfig,
    config_dir: Option<&Path>,
    action: ConfigAction,
) -> Result<commands::CmdResult> {
    commands::config::run(config, config_dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{
    CategoryLabels, CmdMessage, CmdResult, LabelCount, ListedPublication, MessageLevel,
};
pub use crate::panel::ToggleOutcome;
