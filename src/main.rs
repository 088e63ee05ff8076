//! talent-scout - terminal front end for the interview orchestrator
//!
//! Collects a candidate profile, then relays candidate messages to the
//! interview commands until the candidate ends the session.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use talent_scout::commands;
use talent_scout::models::session::SessionView;
use talent_scout::models::settings::SettingsUpdate;
use talent_scout::services::interview::TurnOutcome;
use talent_scout::state::AppState;
use talent_scout::storage::ConfigService;
use talent_scout_core::{RawExperience, RawProfile};
use talent_scout_llm::ProviderType;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "talent-scout")]
#[command(about = "Technical screening interviews driven by a language model", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.talent-scout/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Language model backend: huggingface or openai
    #[arg(long)]
    provider: Option<ProviderType>,

    /// Model name
    #[arg(short, long)]
    model: Option<String>,

    /// Endpoint override for compatible servers
    #[arg(long)]
    base_url: Option<String>,

    /// Backend credential (falls back to the provider's own variable)
    #[arg(long, env = "TALENT_SCOUT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Upper bound on one model call, in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Directory /save writes summaries into
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Candidate profile as JSON instead of prompting for it
    #[arg(short, long)]
    profile: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> SettingsUpdate {
        SettingsUpdate {
            provider: self.provider,
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            request_timeout_secs: self.timeout_secs,
            question_generation_attempts: None,
            export_dir: self.export_dir.clone(),
        }
    }
}

type Input = Lines<BufReader<Stdin>>;

const HELP: &str =
    "Commands: /end (summary)  /save (export summary)  /status  /new (new candidate)  /quit";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("talent_scout=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting talent-scout v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConfigService::load_from(path.clone()),
        None => ConfigService::new(),
    }
    .context("Failed to load configuration")?;
    info!(path = %config.path().display(), "configuration loaded");
    config
        .apply_overrides(cli.overrides())
        .context("Invalid command-line settings")?;

    let provider = config.get_config().provider;
    let api_key = cli
        .api_key
        .clone()
        .or_else(|| std::env::var(provider.api_key_env()).ok());
    let state = AppState::initialize(config, api_key).context("Language model backend")?;

    if let Err(e) = state.gateway().health_check().await {
        warn!(provider = %provider, error = %e, "backend health check failed; continuing");
    }

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let session_id = commands::create_session(&state)
        .await
        .into_result()
        .map_err(anyhow::Error::msg)?
        .id;

    let mut shown = 0;
    start_candidate(&state, &session_id, cli.profile.as_deref(), &mut input, &mut shown).await?;

    println!("\n{HELP}");
    while let Some(line) = prompt(&mut input, "\nYou> ").await? {
        let line = line.trim();
        match line {
            "" => continue,
            "/quit" => break,
            "/status" => {
                let view = respond(commands::get_session(&state, &session_id).await)?;
                print_status(&view);
            }
            "/end" => match commands::end_interview(&state, &session_id).await.into_result() {
                Ok(summary) => println!("\n=== Interview Summary ===\n{summary}\n\nUse /save to export it."),
                Err(e) => eprintln!("Could not generate the summary: {e}"),
            },
            "/save" => match commands::export_summary(&state, &session_id).await.into_result() {
                Ok(path) => println!("Summary saved to {path}"),
                Err(e) => eprintln!("{e}"),
            },
            "/new" => {
                respond(commands::start_new_interview(&state, &session_id).await)?;
                shown = 0;
                start_candidate(&state, &session_id, None, &mut input, &mut shown).await?;
            }
            text => match commands::send_message(&state, &session_id, text).await.into_result() {
                Ok(turn) => {
                    print_new(&turn.session, &mut shown);
                    if turn.outcome == TurnOutcome::Ended {
                        println!("\n{HELP}");
                    }
                }
                Err(e) => eprintln!("{e}\nYour answer was not recorded; please send it again."),
            },
        }
    }

    commands::close_session(&state, &session_id).await;
    info!("Goodbye");
    Ok(())
}

/// Collect a valid profile, then greet and ask the first question
async fn start_candidate(
    state: &AppState,
    session_id: &str,
    profile_file: Option<&std::path::Path>,
    input: &mut Input,
    shown: &mut usize,
) -> Result<()> {
    loop {
        let raw = match profile_file {
            Some(path) => RawProfile::from_json_file(path)
                .with_context(|| format!("Failed to read profile {}", path.display()))?,
            None => read_profile(input).await?,
        };

        match commands::start_interview(state, session_id, raw).await.into_result() {
            Ok(_) => break,
            Err(e) if profile_file.is_some() => bail!(e),
            Err(e) => eprintln!("\n{e}\nPlease try again.\n"),
        }
    }

    let view = respond(commands::open_interview(state, session_id).await)?;
    print_new(&view, shown);
    Ok(())
}

async fn read_profile(input: &mut Input) -> Result<RawProfile> {
    println!("Please fill in your details to begin.");
    Ok(RawProfile {
        full_name: ask(input, "Full Name").await?,
        email: ask(input, "Email").await?,
        phone: ask(input, "Phone").await?,
        experience: Some(RawExperience::Text(ask(input, "Years of Experience").await?)),
        position: ask(input, "Position Applied For").await?,
        location: ask(input, "Current Location (optional)").await?,
        tech_stack: ask(input, "Tech Stack (comma-separated)").await?,
    })
}

async fn ask(input: &mut Input, label: &str) -> Result<String> {
    match prompt(input, &format!("{label}: ")).await? {
        Some(value) => Ok(value),
        None => bail!("Input closed before the profile was complete"),
    }
}

async fn prompt(input: &mut Input, label: &str) -> Result<Option<String>> {
    use std::io::Write;
    print!("{label}");
    std::io::stdout().flush()?;
    Ok(input.next_line().await?)
}

fn respond<T>(response: talent_scout::CommandResponse<T>) -> Result<T> {
    response.into_result().map_err(anyhow::Error::msg)
}

fn print_new(view: &SessionView, shown: &mut usize) {
    for message in view.messages.iter().skip(*shown) {
        println!("\n[{}]\n{}", message.role.as_str(), message.content);
    }
    *shown = view.messages.len();
}

fn print_status(view: &SessionView) {
    println!("Stage: {}", view.stage.label());
    if let Some(snapshot) = &view.snapshot {
        println!("Candidate: {}", snapshot.full_name);
        println!("Position: {}", snapshot.position);
        println!("Experience: {} years", snapshot.experience);
        println!("Tech Stack: {}", snapshot.tech_stack);
        println!("Questions Asked: {}", snapshot.questions_asked);
    }
    if let Some(topic) = &view.current_topic {
        println!("Current Topic: {topic}");
    }
    println!("Summary ready: {}", view.summary_ready);
}
