//! eventhost library root.
//! Exposes the CLI parser, the high-level run() function and the client
//! modules (API, session, controllers, renderers).

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod render;
pub mod session;
pub mod ui;
pub mod utils;

use api::HttpApi;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::{DashboardController, Landing};
use errors::{AppError, AppResult};
use render::OutputFormat;
use session::SessionStore;
use utils::path::expand_tilde;

/// Everything a command handler needs, built once per invocation.
pub struct AppContext {
    pub cfg: Config,
    pub api: HttpApi,
    pub store: SessionStore,
    pub output: OutputFormat,
}

impl AppContext {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn new(cli: &Cli, mut cfg: Config) -> AppResult<Self> {
        if let Some(url) = &cli.api_url {
            cfg.api_base_url = url.clone();
        }
        if cli.html {
            cfg.output = OutputFormat::Html;
        }

        let session_path = match &cli.session {
            Some(p) => expand_tilde(p),
            None => cfg.session_path(),
        };

        let api = HttpApi::new(&cfg.api_base_url, cfg.request_timeout())?;
        Ok(Self {
            output: cfg.output,
            store: SessionStore::new(session_path),
            api,
            cfg,
        })
    }

    pub fn landing(&self) -> Landing<DashboardController<'_, HttpApi>> {
        DashboardController::init(&self.api, self.store.load(), self.cfg.banner_ttl())
    }

    /// The dashboard for the logged-in user, or [`AppError::NotLoggedIn`].
    pub fn dashboard(&self) -> AppResult<DashboardController<'_, HttpApi>> {
        match self.landing() {
            Landing::Ready(ctrl) => Ok(ctrl),
            Landing::RedirectToLogin => Err(AppError::NotLoggedIn),
        }
    }
}

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, &ctx.cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, ctx).await,
        Commands::Logout => cli::commands::logout::handle(ctx),
        Commands::Dashboard => cli::commands::dashboard::handle(ctx).await,
        Commands::Create(args) => cli::commands::create::handle(args, ctx).await,
        Commands::Register { .. } => cli::commands::register::handle(&cli.command, ctx).await,
        Commands::List { .. } => cli::commands::list::handle(&cli.command, ctx).await,
        Commands::Delete { .. } => cli::commands::delete::handle(&cli.command, ctx).await,
        Commands::Attendees { .. } => cli::commands::attendees::handle(&cli.command, ctx).await,
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = Config::load()?;
    let ctx = AppContext::new(&cli, cfg)?;
    dispatch(&cli, &ctx).await
}
