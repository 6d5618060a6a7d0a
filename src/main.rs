// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use clap::Parser;
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter};

use the_textkit::backends::clipboard::ClipboardFactory;
use the_textkit::cli::{log_filter, Cli, Commands, InputArgs};
use the_textkit::config::{load_and_validate_config, Config, ToolCategory, ToolRegistry};
use the_textkit::engine::{ApplyOutcome, Dispatcher, Session};

type FilterHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

/// Install the fmt subscriber on stderr. The filter starts from `RUST_LOG`
/// or `-v` and can be swapped once the config file has been read.
fn init_tracing(cli: &Cli) -> (FilterHandle, bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let (filter, replaceable) = log_filter(rust_log.as_deref(), cli.verbose, None);
    let (filter_layer, handle) = reload::Layer::new(EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    (handle, replaceable)
}

fn load_configuration(cli: &Cli, handle: &FilterHandle, replaceable: bool) -> Result<Config> {
    let Some(path) = &cli.config else {
        return Ok(Config::default());
    };

    let config = load_and_validate_config(path)?;
    if replaceable {
        if let Some(filter) = &config.logging.filter {
            handle
                .reload(EnvFilter::new(filter))
                .context("failed to apply logging.filter from config")?;
        }
    }
    Ok(config)
}

async fn fill_input(session: &mut Session, input: &InputArgs) -> Result<()> {
    if input.paste {
        if let Some(notice) = session.paste().await {
            bail!("{}", notice);
        }
        return Ok(());
    }

    let text = match &input.text {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("failed to read input from stdin")?;
            buffer
        }
    };
    session.set_input(text);
    Ok(())
}

fn print_tool_list(registry: &ToolRegistry) {
    for category in ToolCategory::ALL {
        let tools: Vec<_> = category
            .tools()
            .filter(|tool| registry.contains_key(*tool))
            .collect();
        if tools.is_empty() {
            continue;
        }
        println!("{}:", category.label());
        for tool in tools {
            println!("  {}", tool);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (handle, replaceable) = init_tracing(&cli);
    let config = load_configuration(&cli, &handle, replaceable)?;

    let dispatcher = Dispatcher::new(ToolRegistry::from_config(&config));
    let clipboard = ClipboardFactory::from_config(&config.clipboard);
    let mut session = Session::new(dispatcher.clone(), clipboard);

    match &cli.command {
        Commands::List => print_tool_list(dispatcher.registry()),
        Commands::Apply(args) => {
            fill_input(&mut session, &args.input).await?;
            match session.apply(&args.tool)? {
                ApplyOutcome::Applied => println!("{}", session.output()),
                ApplyOutcome::SkippedEmptyInput => {
                    eprintln!("Input is empty, nothing to do");
                    return Ok(());
                }
            }
            if args.copy {
                if let Some(notice) = session.copy().await {
                    eprintln!("{}", notice);
                }
            }
        }
        Commands::Stats(args) => {
            fill_input(&mut session, &args.input).await?;
            let stats = session.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{}", stats);
            }
        }
    }

    Ok(())
}
