mod client;
mod clipboard;
mod render;

use anyhow::Context;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use client::RoastClient;
use roaster_core::{
    Collector, CoreConfig, Editing, Handoff, ResultsView, RoastError, RoastService, ViewStatus,
    EMPTY_SUBMIT_MESSAGE, REACTIONS,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_SERVER: &str = "http://127.0.0.1:3000";

#[derive(Parser)]
#[command(name = "roaster")]
#[command(about = "Submit your procrastination list. Get roasted. Get motivated.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Todos given on the command line.
#[derive(Args, Debug, Default)]
struct TodoArgs {
    /// Todos to add, one per argument
    todos: Vec<String>,
    /// Paste todos from a file, one per line ("-" reads stdin)
    #[arg(long, value_name = "FILE")]
    paste: Option<PathBuf>,
    /// Remove the todo shown at number N (from 1); applied in order, may be repeated
    #[arg(long = "remove", value_name = "N")]
    remove: Vec<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect todos and save them for a later `roast --session`
    Collect {
        #[command(flatten)]
        list: TodoArgs,
        /// Where to write the collected list
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
    },
    /// Roast a list of todos
    Roast {
        #[command(flatten)]
        list: TodoArgs,
        /// Roast a list saved by `collect` instead of command-line todos
        #[arg(long, value_name = "FILE")]
        session: Option<PathBuf>,
        /// Roaster server base URL
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
        /// Call the provider directly instead of a server (reads ANTHROPIC_API_KEY)
        #[arg(long)]
        local: bool,
        /// Write a plain-text export into DIR (default: current directory)
        #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = ".")]
        export: Option<PathBuf>,
        /// Copy all roasts to the clipboard
        #[arg(long)]
        copy: bool,
        /// Print a pre-filled tweet link
        #[arg(long)]
        tweet: bool,
        /// React to roast N with an emoji, e.g. `--react 2:🔥`; may be repeated
        #[arg(long, value_name = "N:EMOJI")]
        react: Vec<String>,
    },
    /// Check that a roaster server is up
    Health {
        /// Roaster server base URL
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("roaster_cli=warn".parse()?)
                .add_directive("roaster_core=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Collect { list, out }) => {
            let collector = build_collector(&list)?;
            print!("{}", render::todo_list(&collector));
            match collector.submit() {
                Ok(submitted) => {
                    let handoff = submitted.handoff();
                    std::fs::write(&out, handoff.to_json()?)
                        .with_context(|| format!("failed to write {}", out.display()))?;
                    println!("Saved {} todos to {}", handoff.len(), out.display());
                }
                Err(RoastError::EmptyBatch) => println!("{}", EMPTY_SUBMIT_MESSAGE),
                Err(e) => return Err(e.into()),
            }
        }
        Some(Commands::Roast {
            list,
            session,
            server,
            local,
            export,
            copy,
            tweet,
            react,
        }) => {
            let handoff = match session {
                Some(path) => {
                    ensure_no_list_args(&list)?;
                    match read_session(&path) {
                        Ok(handoff) => handoff,
                        Err(e) => {
                            tracing::error!("Error reading session {}: {:?}", path.display(), e);
                            print!("{}", render::results(&ResultsView::failed()));
                            anyhow::bail!("no todos found");
                        }
                    }
                }
                None => {
                    let collector = build_collector(&list)?;
                    match collector.submit() {
                        Ok(submitted) => submitted.handoff(),
                        Err(RoastError::EmptyBatch) => {
                            println!("{}", EMPTY_SUBMIT_MESSAGE);
                            return Ok(());
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
            };

            let todos = handoff.into_todos();
            let reactions = parse_reactions(&react, todos.len())?;
            let mut view = ResultsView::pending(todos.clone());
            print!("{}", render::results(&view));

            let todos: Vec<String> = todos.into_iter().map(String::from).collect();
            let fetched = if local {
                roast_locally(&todos).await
            } else {
                RoastClient::new(&server)
                    .roast(todos)
                    .await
                    .map_err(anyhow::Error::from)
            };

            match fetched {
                Ok(roasts) => view.resolve(roasts),
                Err(e) => {
                    tracing::error!("Error: {:?}", e);
                    view.fail();
                }
            }

            if view.status() != ViewStatus::Ready {
                print!("{}", render::results(&view));
                anyhow::bail!("roasting failed");
            }

            for (number, emoji) in reactions {
                view.react(number - 1, emoji)?;
            }
            println!();
            print!("{}", render::results(&view));

            let batch = view.batch().context("results are ready")?;
            if let Some(dir) = export {
                let path = batch.write_export(&dir, Utc::now().date_naive())?;
                println!("\nExported to {}", path.display());
            }
            if copy {
                match clipboard::copy_to_clipboard(&batch.clipboard_text()) {
                    Ok(()) => println!("\nCopied {} roasts to the clipboard", batch.len()),
                    Err(e) => eprintln!("\nCould not copy to clipboard: {}", e),
                }
            }
            if tweet {
                println!("\n{}", batch.tweet_url());
            }
        }
        Some(Commands::Health { server }) => {
            let health = RoastClient::new(&server).health().await?;
            println!("{}", health.message);
        }
        None => {
            println!("Use 'roaster --help' for commands");
        }
    }

    Ok(())
}

/// Applies command-line todos, then pasted lines, then removals.
fn build_collector(args: &TodoArgs) -> anyhow::Result<Collector<Editing>> {
    let mut collector = Collector::new();
    for todo in &args.todos {
        collector.add(todo);
    }
    if let Some(path) = &args.paste {
        collector.add_bulk(&read_paste(path)?);
    }
    for &number in &args.remove {
        let removed = number
            .checked_sub(1)
            .and_then(|index| collector.remove(index));
        if removed.is_none() {
            tracing::warn!("no todo at position {}", number);
        }
    }
    Ok(collector)
}

/// A saved session is roasted as-is, so no list edits may be given alongside it.
fn ensure_no_list_args(args: &TodoArgs) -> anyhow::Result<()> {
    if !args.todos.is_empty() || args.paste.is_some() || !args.remove.is_empty() {
        anyhow::bail!("--session cannot be combined with todos, --paste or --remove");
    }
    Ok(())
}

fn read_paste(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_session(path: &Path) -> anyhow::Result<Handoff> {
    let json = std::fs::read_to_string(path)?;
    Ok(Handoff::from_json(&json)?)
}

async fn roast_locally(todos: &[String]) -> anyhow::Result<Vec<String>> {
    let cfg = CoreConfig::from_env()?;
    let service = RoastService::from_config(&cfg)?;
    Ok(service.generate(todos).await?)
}

/// Parses `N:EMOJI` where N is the 1-based roast number.
fn parse_reaction(raw: &str) -> anyhow::Result<(usize, &str)> {
    let (number, emoji) = raw
        .split_once(':')
        .with_context(|| format!("reaction {raw:?} must look like N:EMOJI"))?;
    let number: usize = number
        .trim()
        .parse()
        .with_context(|| format!("reaction {raw:?} has no valid number"))?;
    if number == 0 {
        anyhow::bail!("roast numbers start at 1");
    }
    Ok((number, emoji.trim()))
}

/// Parses every `--react` value up front, checking the number against the batch size and the
/// emoji against the reaction set.
fn parse_reactions(raw: &[String], count: usize) -> anyhow::Result<Vec<(usize, &str)>> {
    raw.iter()
        .map(|reaction| {
            let (number, emoji) = parse_reaction(reaction)?;
            if number > count {
                anyhow::bail!("reaction {reaction:?} points past the last of {count} todos");
            }
            if !REACTIONS.iter().any(|r| *r == emoji) {
                anyhow::bail!("reaction {reaction:?} must use one of {}", REACTIONS.join(" "));
            }
            Ok((number, emoji))
        })
        .collect()
}
