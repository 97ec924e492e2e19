use std::process;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use seek::app::{self, State};
use seek::cli::Cli;
use seek::source::{self, Entry};
use seek_core::config::{self, Config};

static BOOT_PARAMS: Mutex<Option<(Config, String, Vec<Entry>)>> = Mutex::new(None);

fn boot() -> (State, iced::Task<app::Message>) {
    let (config, query, entries) = BOOT_PARAMS
        .lock()
        .ok()
        .and_then(|mut params| params.take())
        .unwrap_or_default();
    State::new(config, query, entries)
}

fn main() {
    // stdout carries the selection, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };
    if let Some(placeholder) = cli.placeholder {
        config.field.placeholder = placeholder;
    }

    let entries = source::read_stdin_entries();
    if entries.is_empty() {
        eprintln!("seek: no items received from stdin");
        process::exit(2);
    }

    if let Ok(mut params) = BOOT_PARAMS.lock() {
        *params = Some((config, cli.query, entries));
    }

    let result = iced::daemon(boot, State::update, State::view)
        .title(State::title)
        .subscription(State::subscription)
        .theme(State::theme)
        .style(State::style)
        .run();

    if let Err(e) = result {
        eprintln!("seek: {e}");
        process::exit(2);
    }

    match app::take_outcome() {
        Some(entry) => match cli.format.render(&entry) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("seek: {e}");
                process::exit(2);
            }
        },
        // Cancelled (Escape or window closed)
        None => process::exit(1),
    }
}
