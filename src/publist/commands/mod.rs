use crate::category::Category;
use crate::config::PublistConfig;
use crate::model::Publication;

pub mod check;
pub mod config;
pub mod helpers;
pub mod list;
pub mod render;
pub mod tags;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A visible publication paired with its 1-based position in the visible
/// list.
#[derive(Debug, Clone)]
pub struct ListedPublication {
    pub position: usize,
    pub publication: Publication,
}

/// How many publications carry a label.
#[derive(Debug, Clone)]
pub struct LabelCount {
    pub label: String,
    pub publications: usize,
}

/// One category's labels in first-seen order, with usage counts.
#[derive(Debug, Clone)]
pub struct CategoryLabels {
    pub category: Category,
    pub labels: Vec<LabelCount>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<ListedPublication>,
    pub html: Option<String>,
    pub label_counts: Vec<CategoryLabels>,
    pub config: Option<PublistConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<ListedPublication>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_html(mut self, html: String) -> Self {
        self.html = Some(html);
        self
    }

    pub fn with_label_counts(mut self, label_counts: Vec<CategoryLabels>) -> Self {
        self.label_counts = label_counts;
        self
    }

    pub fn with_config(mut self, config: PublistConfig) -> Self {
        self.config = Some(config);
        self
    }
}
