//! The interactive filter session: the terminal stand-in for the page.
//!
//! Loads once with the page policy (a broken data file is reported and
//! treated as empty), starts with every checkbox checked, then processes one
//! event per input line. Each state-changing event re-renders the full list
//! before the next line is read; there is no partial update.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use publist::api::{Session, ToggleOutcome};
use publist::category::Category;
use publist::error::Result;
use publist::render::RenderOptions;

use super::print::{print_label_counts, print_listed, print_messages};
use super::styles::STYLES;

pub(crate) fn run(data_path: &Path, options: RenderOptions) -> Result<()> {
    let (mut session, messages) = Session::open_or_empty(data_path, options);
    print_messages(&messages);

    println!(
        "{} publication(s) loaded. Type 'help' for commands.",
        session.publications().len()
    );
    println!();
    show(&session)?;

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("{} ", STYLES.prompt.apply_to(">"));
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            // EOF: scripted input ran out
            break;
        }

        let words: Vec<&str> = input.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["quit"] | ["q"] | ["exit"] => break,
            ["help"] | ["?"] => print_help(),
            ["show"] => show(&session)?,
            ["tags"] => {
                let result = session.tags()?;
                print_label_counts(&result.label_counts);
            }
            ["html"] => {
                let result = session.render_rows()?;
                if let Some(html) = result.html {
                    println!("{}", html);
                }
            }
            ["toggle", group, label @ ..] if !label.is_empty() => {
                handle_toggle(&mut session, group, &label.join(" "))?;
            }
            ["reset", group] => match group.parse::<Category>() {
                Ok(category) => {
                    session.reset(category);
                    println!("Reset {} to its first checkbox.", category);
                    show(&session)?;
                }
                Err(e) => println!("{}", e.to_string().red()),
            },
            _ => println!("Unrecognized command, type 'help' for the list."),
        }
    }
    Ok(())
}

fn handle_toggle(session: &mut Session, group: &str, label: &str) -> Result<()> {
    let category = match group.parse::<Category>() {
        Ok(c) => c,
        Err(e) => {
            println!("{}", e.to_string().red());
            return Ok(());
        }
    };
    match session.toggle(category, label) {
        Ok(ToggleOutcome::Toggled { checked }) => {
            println!(
                "{} '{}' in {}.",
                if checked { "Checked" } else { "Unchecked" },
                label,
                category
            );
            show(session)?;
        }
        Ok(ToggleOutcome::Reverted) => {
            // nothing changed, so nothing to re-render
            println!(
                "{}",
                format!(
                    "Kept '{}' checked: the {} group needs at least one box.",
                    label, category
                )
                .yellow()
            );
        }
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

/// Panel state plus the visible list, rebuilt from scratch.
fn show(session: &Session) -> Result<()> {
    for group in session.panel().groups() {
        if group.is_empty() {
            continue;
        }
        let boxes: Vec<String> = group
            .boxes()
            .iter()
            .map(|b| format!("[{}] {}", if b.checked { "x" } else { " " }, b.label))
            .collect();
        println!(
            "{} {}",
            STYLES
                .heading
                .apply_to(format!("{:<12}", group.category().title())),
            boxes.join("  ")
        );
    }
    println!();

    let result = session.list()?;
    print_listed(&result.listed, session.options());
    print_messages(&result.messages);
    println!();
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  toggle <group> <label>   flip one checkbox (authorship, area, venue)");
    println!("  reset <group>            check only the group's first checkbox");
    println!("  show                     print the panel and the visible list");
    println!("  tags                     print every label with usage counts");
    println!("  html                     print the visible rows as HTML");
    println!("  quit                     leave the session");
}
