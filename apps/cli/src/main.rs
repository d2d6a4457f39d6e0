use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_settings, Action, CatalogSession, CreateStage, HttpCatalogClient, PageControl, ViewState,
};
use shared::domain::{DraftField, Problem, SearchField};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Problem catalog from the command line")]
struct Cli {
    /// Overrides the backend address from catalog.toml and the environment.
    #[arg(long, global = true)]
    backend_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show one page of the catalog, optionally filtered.
    List {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        topic: String,
        #[arg(long, default_value = "")]
        level: String,
        #[arg(long, default_value = "")]
        platform: String,
        /// Zero-based page index.
        #[arg(long, default_value_t = 0)]
        page: usize,
    },
    /// Store a new problem.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        topic: String,
        #[arg(long)]
        level: String,
        #[arg(long)]
        link: String,
        #[arg(long)]
        platform: String,
    },
    /// Pick a random problem to revise.
    Revise,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let cli = Cli::parse();

    let settings = load_settings().with_backend_url(cli.backend_url);
    let client = HttpCatalogClient::from_settings(&settings).context("configure catalog client")?;
    let mut session = CatalogSession::new(client);

    match cli.command {
        Command::List {
            name,
            topic,
            level,
            platform,
            page,
        } => {
            session.dispatch(Action::Mounted).await;
            for (field, value) in [
                (SearchField::Name, name),
                (SearchField::Topic, topic),
                (SearchField::Level, level),
                (SearchField::Platform, platform),
            ] {
                if !value.is_empty() {
                    session
                        .dispatch(Action::SearchChanged { field, value })
                        .await;
                }
            }
            session.dispatch(Action::PageSelected(page)).await;
            print_listing(session.state());
        }
        Command::Add {
            name,
            topic,
            level,
            link,
            platform,
        } => {
            session.dispatch(Action::OpenCreate).await;
            for (field, value) in [
                (DraftField::Name, name),
                (DraftField::Topic, topic),
                (DraftField::Level, level),
                (DraftField::Link, link),
                (DraftField::Platform, platform),
            ] {
                session.dispatch(Action::DraftEdited { field, value }).await;
            }
            session.dispatch(Action::SubmitDraft).await;

            let state = session.state();
            if let Some(err) = &state.draft_error {
                error!(field = ?err.field(), "draft rejected before submission");
                bail!("problem not submitted: {err}");
            }
            if state.create_stage != CreateStage::Closed {
                error!("create request did not succeed");
                bail!("backend did not store the problem");
            }
            if let Some(created) = state.problems.last() {
                info!(id = %created.id, "problem added");
                println!("added problem {}: {}", created.id, created.name);
            }
        }
        Command::Revise => {
            session.dispatch(Action::ReviseRequested).await;
            let Some(problem) = session.state().open_revision() else {
                error!("random problem request did not succeed");
                bail!("could not fetch a random problem");
            };
            print_revision(problem);
        }
    }

    Ok(())
}

fn print_listing(state: &ViewState) {
    println!(
        "{:<8} {:<32} {:<16} {:<10} {:<12} Link",
        "ID", "Name", "Topic", "Level", "Platform"
    );
    for problem in state.visible_page() {
        println!(
            "{:<8} {:<32} {:<16} {:<10} {:<12} {}",
            problem.id.to_string(),
            problem.name,
            problem.topic,
            problem.level,
            problem.platform,
            problem.link
        );
    }

    println!("\n{}", page_summary(state));
}

fn page_summary(state: &ViewState) -> String {
    let pages: Vec<String> = state
        .page_controls()
        .into_iter()
        .filter_map(|control| match control {
            PageControl::Page { index, selected: true } => Some(format!("[{}]", index + 1)),
            PageControl::Page { index, .. } => Some((index + 1).to_string()),
            PageControl::Break => Some("...".to_string()),
            PageControl::Previous { .. } | PageControl::Next { .. } => None,
        })
        .collect();
    format!(
        "page {} of {} ({} matching) {}",
        state.page.saturating_add(1),
        state.page_count(),
        state.filtered.len(),
        pages.join(" ")
    )
}

fn print_revision(problem: &Problem) {
    println!("{}", problem.name);
    println!("Topic: {}", problem.topic);
    println!("Level: {}", problem.level);
    println!("Platform: {}", problem.platform);
    println!("View Problem: {}", problem.link);
}
