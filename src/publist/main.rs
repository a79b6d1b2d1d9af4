use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use publist::api::{self, ConfigAction, Session};
use publist::config::PublistConfig;
use publist::error::Result;
use publist::filter::Selection;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{print_config, print_label_counts, print_listed, print_messages};

/// A project-local config next to the data, checked before the user dir.
const LOCAL_CONFIG: &str = "publist.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    config: PublistConfig,
    config_dir: Option<PathBuf>,
    data_path: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            authorship,
            area,
            venue,
        }) => handle_list(&ctx, authorship, area, venue),
        Some(Commands::Render {
            page,
            output,
            authorship,
            area,
            venue,
        }) => handle_render(&ctx, page, output, authorship, area, venue),
        Some(Commands::Tags) => handle_tags(&ctx),
        Some(Commands::Check) => handle_check(&ctx),
        Some(Commands::Session) => cli::session::run(&ctx.data_path, ctx.config.render_options()),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, Vec::new(), Vec::new(), Vec::new()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = ProjectDirs::from("com", "publist", "publist")
        .map(|dirs| dirs.config_dir().to_path_buf());

    // An explicitly named config must exist; the fallbacks may not.
    let config = if let Some(path) = &cli.config {
        PublistConfig::load_file(path)?
    } else if Path::new(LOCAL_CONFIG).exists() {
        PublistConfig::load_file(Path::new(LOCAL_CONFIG))?
    } else if let Some(dir) = &config_dir {
        PublistConfig::load_dir(dir)?
    } else {
        PublistConfig::default()
    };

    let data_path = cli
        .data
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data_path));

    Ok(AppContext {
        config,
        config_dir,
        data_path,
    })
}

fn selection_from_flags(
    authorship: Vec<String>,
    area: Vec<String>,
    venue: Vec<String>,
) -> Selection {
    let mut selection = Selection::new();
    selection.authorship = authorship;
    selection.area = area;
    selection.venue = venue;
    selection
}

fn handle_list(
    ctx: &AppContext,
    authorship: Vec<String>,
    area: Vec<String>,
    venue: Vec<String>,
) -> Result<()> {
    let session = Session::open(&ctx.data_path, ctx.config.render_options())?;
    let selection = selection_from_flags(authorship, area, venue);
    let result = session.list_with(&selection)?;
    print_listed(&result.listed, session.options());
    print_messages(&result.messages);
    Ok(())
}

fn handle_render(
    ctx: &AppContext,
    page: bool,
    output: Option<PathBuf>,
    authorship: Vec<String>,
    area: Vec<String>,
    venue: Vec<String>,
) -> Result<()> {
    let session = Session::open(&ctx.data_path, ctx.config.render_options())?;
    let selection = selection_from_flags(authorship, area, venue);
    let result = if page {
        session.render_page_with(&selection)?
    } else {
        session.render_rows_with(&selection)?
    };

    let html = result.html.unwrap_or_default();
    match output {
        Some(path) => {
            fs::write(&path, &html)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", html),
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let session = Session::open(&ctx.data_path, ctx.config.render_options())?;
    let result = session.tags()?;
    print_label_counts(&result.label_counts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_check(ctx: &AppContext) -> Result<()> {
    let session = Session::open(&ctx.data_path, ctx.config.render_options())?;
    let result = session.check()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api::config(&ctx.config, ctx.config_dir.as_deref(), action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
