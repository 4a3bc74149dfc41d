use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{DefaultAppContainer, MarsUiState, MarsViewModel};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
mod screen;

use config::load_settings;
use screen::{parse_action, prompt_for, render_state, UserAction};

#[derive(Parser, Debug)]
#[command(name = "mars-photos", about = "Fetch and show the Mars photo list")]
struct Args {
    /// Photos service base URL; overrides config and environment.
    #[arg(long)]
    base_url: Option<String>,
    /// Config file to read instead of ./mars_photos.toml.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Exit after the first fetch resolves instead of prompting.
    #[arg(long)]
    once: bool,
    /// Print every photo's id and URL on success.
    #[arg(long)]
    show_urls: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(base_url) = &args.base_url {
        settings.base_url = base_url.clone();
    }
    debug!(base_url = %settings.base_url, "starting mars photos");

    let container = DefaultAppContainer::new(settings.container_config())
        .context("failed to build app container")?;
    let view_model = MarsViewModel::factory(Arc::new(container))
        .create()
        .context("failed to create view model")?;

    run_home_screen(&view_model, &args).await
}

async fn run_home_screen(view_model: &MarsViewModel, args: &Args) -> Result<()> {
    let mut rx = view_model.subscribe();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let state = rx.borrow_and_update().clone();
        println!("{}", render_state(&state, args.show_urls));

        if state.is_loading() {
            rx.changed()
                .await
                .context("view model closed while loading")?;
            continue;
        }

        if args.once {
            if state == MarsUiState::Error {
                bail!("failed to load Mars photos");
            }
            return Ok(());
        }

        if let Some(prompt) = prompt_for(&state) {
            println!("{prompt}");
        }
        match read_action(&mut input).await? {
            UserAction::Retry => view_model.fetch_mars_photos(),
            UserAction::Quit => return Ok(()),
        }
    }
}

async fn read_action(input: &mut Lines<BufReader<Stdin>>) -> Result<UserAction> {
    let line = input.next_line().await.context("failed to read stdin")?;
    Ok(parse_action(line.as_deref()))
}
