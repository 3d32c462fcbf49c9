mod dreams;
mod pending;
mod persona;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use fc_core::{
    CannedResponder, DreamChain, DreamDraft, DreamTab, FeatureFlags, FixedTranscriber,
    PersonaForge, PersonaTab, Route, SettingsForm, Theme, Transcriber, Transition, Workflow,
    today_iso_date,
};
use fc_store::{AppConfig, Preferences};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::dreams::DreamSession;
use crate::persona::PersonaSession;
use crate::session::print_lines;

#[derive(Parser)]
#[command(name = "fc", about = "PersonaForge + DreamChain in the terminal")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    /// Skip simulated reply latency
    #[arg(long, global = true)]
    instant: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page for a route (/, /persona-forge, /dream-chain, /settings)
    Open {
        /// Route path
        path: String,
    },

    /// Dream journal. Without a subcommand, an interactive session on stdin
    /// (starts from the sample journal; entries are not saved)
    Dreams {
        #[command(subcommand)]
        command: Option<DreamCommands>,
    },

    /// Interactive PersonaForge session on stdin
    Persona,

    /// Show or save application settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },

    /// Show, toggle or set the colour theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand)]
enum DreamCommands {
    /// List journal entries
    List {
        /// Case-insensitive filter on title, content and symbols
        #[arg(long)]
        search: Option<String>,
    },

    /// Show the analysis of one entry
    Show {
        /// Entry id
        id: String,
    },

    /// Symbol and emotion patterns across the journal
    Stats,

    /// Record a new dream
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        content: String,
    },

    /// Simulate a voice recording and fill the new-entry form
    Record {
        /// Submit the transcribed entry to the journal
        #[arg(long)]
        save: bool,
    },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Show the saved theme and feature flags
    Show,

    /// Validate the settings form and save the feature flags
    Save {
        /// Required. Validated, never stored
        #[arg(long, default_value = "")]
        openai_api_key: String,

        #[arg(long)]
        elevenlabs_api_key: Option<String>,

        #[arg(long)]
        pinecone_api_key: Option<String>,

        #[arg(long)]
        voice_cloning: bool,

        #[arg(long)]
        dream_images: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeAction {
    Show,
    Toggle,
    Light,
    Dark,
}

/// Everything loaded once at startup.
struct App {
    config: AppConfig,
    prefs: Preferences,
}

fn data_dir() -> PathBuf {
    std::env::var("FC_DATA_DIR")
        .ok()
        .map(PathBuf::from)
        .unwrap_or_else(fc_store::default_base_dir)
}

fn open_app(cli: &Cli) -> Result<App> {
    let base = data_dir();
    let mut config = AppConfig::load(&base).context("failed to load config")?;
    if cli.instant {
        config = config.instant();
    }
    let prefs = Preferences::open(Some(&base), config.appearance.prefers_dark)
        .context("failed to open preferences")?;
    Ok(App { config, prefs })
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut app = open_app(&cli)?;

    match &cli.command {
        Commands::Open { path } => cmd_open(&app, path),
        Commands::Dreams { command: None } => cmd_dream_session(&app).await,
        Commands::Dreams {
            command: Some(command),
        } => cmd_dreams(&app, command).await,
        Commands::Persona => cmd_persona(&app).await,
        Commands::Settings { command } => cmd_settings(&mut app, command),
        Commands::Theme { action } => cmd_theme(&mut app, action.unwrap_or(ThemeAction::Show)),
    }
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

fn cmd_open(app: &App, path: &str) -> Result<()> {
    let route = Route::resolve(path);
    tracing::debug!(path, resolved = route.path(), "open");
    println!("{}", render::navbar(&route, app.prefs.theme()));
    println!();

    match &route {
        Route::Home => print_lines(render::home()),
        Route::PersonaForge => {
            let page = PersonaForge::new();
            println!("PersonaForge");
            println!("{}", render::tabs(&page, |t: PersonaTab| t.label()));
            println!("run `fc persona` to start a session");
        }
        Route::DreamChain => {
            let page = DreamChain::new();
            println!("DreamChain");
            println!("{}", render::tabs(&page, |t: DreamTab| t.label()));
            print_lines(render::journal(&page.search(""), "", None));
        }
        Route::Settings => print_lines(render::settings(
            app.prefs.theme(),
            app.prefs.theme_is_saved(),
            app.prefs.features(),
        )),
        Route::NotFound(path) => print_lines(render::not_found(path)),
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// DreamChain
// ---------------------------------------------------------------------------

async fn cmd_dream_session(app: &App) -> Result<()> {
    let transcriber = FixedTranscriber::new().with_latency(app.config.transcription_latency());
    session::run(DreamSession::new(transcriber, today_iso_date())).await
}

async fn cmd_dreams(app: &App, command: &DreamCommands) -> Result<()> {
    let mut page = DreamChain::new();

    match command {
        DreamCommands::List { search } => {
            let query = search.as_deref().unwrap_or("");
            print_lines(render::journal(&page.search(query), query, None));
        }
        DreamCommands::Show { id } => {
            if page.select_entry(id) != Transition::Entered {
                bail!("no dream with id '{id}'");
            }
            if let Some(entry) = page.selected() {
                print_lines(render::analysis(entry));
            }
        }
        DreamCommands::Stats => {
            page.enter(DreamTab::Stats);
            print_lines(render::report(&page.report()));
        }
        DreamCommands::Add { title, content } => {
            page.enter(DreamTab::New);
            page.set_draft(DreamDraft::new(title, content));
            submit(&mut page)?;
        }
        DreamCommands::Record { save } => {
            page.enter(DreamTab::New);
            let mut transcriber =
                FixedTranscriber::new().with_latency(app.config.transcription_latency());
            page.start_recording();
            eprintln!("Recording... speak now");
            tokio::time::sleep(transcriber.latency()).await;
            page.finish_recording(transcriber.transcribe());
            tracing::debug!("transcription complete");

            println!("Dream Title: {}", page.draft().title);
            println!("Dream Description: {}", page.draft().content);
            if *save {
                submit(&mut page)?;
            }
        }
    }
    Ok(())
}

/// Submit the new-entry form and print the journal it lands in.
fn submit(page: &mut DreamChain) -> Result<()> {
    let today = today_iso_date();
    let id = match page.submit_draft(&today) {
        Ok(entry) => entry.id.clone(),
        Err(errors) => return Err(anyhow::Error::new(errors).context("dream entry rejected")),
    };
    tracing::info!(%id, "dream recorded");
    println!("Dream recorded: {id}");
    print_lines(render::journal(&page.search(""), "", None));
    Ok(())
}

// ---------------------------------------------------------------------------
// PersonaForge
// ---------------------------------------------------------------------------

async fn cmd_persona(app: &App) -> Result<()> {
    let responder =
        CannedResponder::new(SmallRng::from_os_rng()).with_latency(app.config.chat_latency());
    let persona = PersonaSession::new(responder, SmallRng::from_os_rng());
    session::run(persona).await
}

// ---------------------------------------------------------------------------
// Settings and theme
// ---------------------------------------------------------------------------

fn cmd_settings(app: &mut App, command: &SettingsCommands) -> Result<()> {
    match command {
        SettingsCommands::Show => print_lines(render::settings(
            app.prefs.theme(),
            app.prefs.theme_is_saved(),
            app.prefs.features(),
        )),
        SettingsCommands::Save {
            openai_api_key,
            elevenlabs_api_key,
            pinecone_api_key,
            voice_cloning,
            dream_images,
        } => {
            let form = SettingsForm {
                openai_api_key: openai_api_key.clone(),
                elevenlabs_api_key: elevenlabs_api_key.clone(),
                pinecone_api_key: pinecone_api_key.clone(),
                flags: FeatureFlags {
                    use_voice_cloning: *voice_cloning,
                    use_dream_images: *dream_images,
                },
            };
            let flags = match form.submit() {
                Ok(flags) => flags,
                Err(errors) => {
                    return Err(anyhow::Error::new(errors).context("settings rejected"));
                }
            };
            app.prefs
                .set_features(flags)
                .context("failed to save settings")?;
            println!("Settings updated: Your application settings have been saved.");
        }
    }
    Ok(())
}

fn cmd_theme(app: &mut App, action: ThemeAction) -> Result<()> {
    let theme = match action {
        ThemeAction::Show => app.prefs.theme(),
        ThemeAction::Toggle => app.prefs.toggle_theme().context("failed to save theme")?,
        ThemeAction::Light | ThemeAction::Dark => {
            let theme = if matches!(action, ThemeAction::Dark) {
                Theme::Dark
            } else {
                Theme::Light
            };
            app.prefs.set_theme(theme).context("failed to save theme")?;
            theme
        }
    };
    println!("{theme}");
    Ok(())
}
