use anyhow::{Context, Result};
use clap::Parser;
use quizz::config::{self, QuizzConfig};
use quizz::io::stream::StreamConsole;
use quizz::io::terminal::TermConsole;
use quizz::server::Server;
use quizz::session::Session;
use quizz::store::fs::FileStore;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    store: Arc<FileStore>,
    config: QuizzConfig,
    color: bool,
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let ctx = init_context(&cli).await?;
    match cli.command {
        Some(Commands::Serve { listen }) => handle_serve(ctx, listen).await,
        None => handle_local(ctx).await,
    }
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.command.is_some() {
        "info"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = config::home_dir().context("could not determine the quizz home directory")?;
    let config = QuizzConfig::load(&home)
        .with_context(|| format!("failed to read config in {}", home.display()))?;

    let color = config.color && !cli.no_color;
    colored::control::set_override(color);

    let data_path = cli
        .data_file
        .clone()
        .unwrap_or_else(|| config.data_path(&home));
    let store = if config.seed {
        FileStore::open_seeded(data_path.clone())
            .await
            .with_context(|| format!("failed to open {}", data_path.display()))?
    } else {
        FileStore::new(data_path)
    };
    info!(path = %store.path().display(), "using quiz file");

    Ok(AppContext {
        store: Arc::new(store),
        config,
        color,
    })
}

async fn handle_local(ctx: AppContext) -> Result<()> {
    if TermConsole::is_attended() {
        Session::new(ctx.store, TermConsole::new())
            .with_authors(ctx.config.authors)
            .run()
            .await;
    } else {
        let console = StreamConsole::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .with_color(ctx.color);
        Session::new(ctx.store, console)
            .with_authors(ctx.config.authors)
            .run()
            .await;
    }
    Ok(())
}

async fn handle_serve(ctx: AppContext, listen: Option<String>) -> Result<()> {
    let addr = listen.unwrap_or_else(|| ctx.config.listen.clone());
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to listen on {}", addr))?;

    let server = Server::new(listener, ctx.store)
        .with_authors(ctx.config.authors)
        .with_color(ctx.color);
    info!("listening on {}", server.local_addr()?);
    println!("Listening on {}", server.local_addr()?);

    server.run_until_ctrl_c().await;
    Ok(())
}
