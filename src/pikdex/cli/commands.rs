//! # CLI Dispatch
//!
//! `run()` parses arguments, builds the [`AppContext`], and hands each command to a
//! `handle_*` function. Handlers turn clap strings into library types, call the API,
//! and print the returned [`pikdex::api::CmdResult`].
//!
//! The data directory is `$PIKDEX_HOME` when set, otherwise the platform data
//! directory. It holds the collection file and `config.json`.

use super::render::{
    print_config, print_entries, print_messages, print_options, print_stats,
};
use super::setup::{Cli, Commands, FilterArgs};
use clap::Parser;
use directories::ProjectDirs;
use pikdex::api::{ConfigAction, ExportTarget, PikdexApi};
use pikdex::config::PikdexConfig;
use pikdex::error::{PikdexError, Result};
use pikdex::model::{Color, DecorType, EntryPatch, NewEntry, Status};
use pikdex::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;

const HOME_ENV: &str = "PIKDEX_HOME";
const DELETE_PROMPT: &str = "Delete this entry forever?";

struct AppContext {
    api: PikdexApi<FileStore>,
    config: PikdexConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            color,
            decor,
            name,
            status,
        }) => handle_add(&mut ctx, &color, &decor, name, &status),
        Some(Commands::List { filter }) => handle_list(&mut ctx, &filter),
        Some(Commands::Edit {
            selector,
            name,
            status,
        }) => handle_edit(&mut ctx, selector, name, status),
        Some(Commands::Delete { selectors, yes }) => handle_delete(&mut ctx, selectors, yes),
        Some(Commands::Stats { filter }) => handle_stats(&mut ctx, &filter),
        Some(Commands::Export {
            filter,
            output,
            stdout,
        }) => handle_export(&mut ctx, &filter, output, stdout),
        Some(Commands::Options) => {
            print_options();
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, &FilterArgs::default()),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr());

    // A logger may already be installed when embedded; keep going without ours.
    let _ = dispatch.apply();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "pikdex", "pikdex")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PikdexError::Config("Could not determine data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    log::debug!("using data directory {}", dir.display());

    let config = PikdexConfig::load(&dir).unwrap_or_else(|e| {
        log::warn!("ignoring unreadable config: {}", e);
        PikdexConfig::default()
    });
    let store = FileStore::new(dir.clone());

    Ok(AppContext {
        api: PikdexApi::new(store, dir),
        config,
    })
}

fn handle_add(
    ctx: &mut AppContext,
    color: &str,
    decor: &str,
    name: Vec<String>,
    status: &str,
) -> Result<()> {
    let draft = NewEntry::new(color.parse::<Color>()?, decor.parse::<DecorType>()?)
        .with_name(name.join(" "))
        .with_status(status.parse::<Status>()?);

    let result = ctx.api.add_entry(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, filter: &FilterArgs) -> Result<()> {
    let result = ctx.api.list_entries(&filter.to_filter()?)?;
    print_entries(&result.listed_entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    selector: String,
    name: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let mut patch = EntryPatch::default();
    if let Some(name) = name {
        patch = patch.with_name(name);
    }
    if let Some(status) = status {
        patch = patch.with_status(status.parse::<Status>()?);
    }

    let result = ctx.api.update_entries(&[selector], &patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>, yes: bool) -> Result<()> {
    if !yes && ctx.config.confirm_delete && !confirm(DELETE_PROMPT)? {
        println!("Nothing deleted.");
        return Ok(());
    }

    let result = ctx.api.delete_entries(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext, filter: &FilterArgs) -> Result<()> {
    let result = ctx.api.stats(&filter.to_filter()?)?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(
    ctx: &mut AppContext,
    filter: &FilterArgs,
    output: Option<PathBuf>,
    stdout: bool,
) -> Result<()> {
    let target = if stdout {
        ExportTarget::Stdout
    } else {
        ExportTarget::File(output.unwrap_or_else(|| PathBuf::from(&ctx.config.export_file)))
    };

    let result = ctx.api.export(&filter.to_filter()?, target)?;
    if let Some(text) = &result.export_text {
        println!("{}", text);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush().map_err(PikdexError::Io)?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(PikdexError::Io)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
