use colored::Colorize;
use console::Term;
use publist::api::{CategoryLabels, CmdMessage, ListedPublication, MessageLevel};
use publist::config::PublistConfig;
use publist::render::{text, RenderOptions};

use super::styles::STYLES;

const FALLBACK_WIDTH: usize = 100;

/// Columns available for the list view; falls back when stdout is not a
/// terminal (pipes, tests).
pub(crate) fn terminal_width() -> usize {
    Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(FALLBACK_WIDTH)
}

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_listed(listed: &[ListedPublication], options: &RenderOptions) {
    if listed.is_empty() {
        println!("No publications to show.");
        return;
    }

    let width = terminal_width();
    for lp in listed {
        println!("{}", text::title_line(lp.position, &lp.publication, width));
        if let Some(authors) = text::author_line(&lp.publication, options, width) {
            println!("{}", authors.dimmed());
        }
    }
}

pub(crate) fn print_label_counts(label_counts: &[CategoryLabels]) {
    for cl in label_counts {
        println!("{}", STYLES.heading.apply_to(cl.category.title()));
        if cl.labels.is_empty() {
            println!("  (no labels)");
        }
        for lc in &cl.labels {
            println!(
                "  {:<24} {}",
                lc.label,
                STYLES
                    .count
                    .apply_to(format!("{} publication(s)", lc.publications))
            );
        }
        println!();
    }
}

pub(crate) fn print_config(config: &PublistConfig) {
    println!("data_path = {}", config.data_path);
    println!(
        "highlight_author = {}",
        config.highlight_author.clone().unwrap_or_default()
    );
    println!("cofirst_note = {}", config.cofirst_note);
    println!("page_title = {}", config.page_title);
}
