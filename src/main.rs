use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use newslens::client::WorldNewsClient;
use newslens::config::{find_config_file, get_config, load_config, Config};
use newslens::models::SearchContext;
use newslens::reference;
use newslens::session::{NewsSession, PageStatus};
use newslens::trend;
use newslens::ui;
use owo_colors::OwoColorize;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Search world news, page through results, and chart publication trends
#[derive(Parser, Debug)]
#[command(name = "newslens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search world news, page through results, and chart publication trends", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search news and show the first page of results
    Search {
        /// Keyword or phrase to search for
        query: String,

        /// Restrict to a language (name or two-letter code)
        #[arg(long, short)]
        language: Option<String>,

        /// Restrict to a source country (name or two-letter code)
        #[arg(long, short)]
        country: Option<String>,

        /// Page through results interactively
        #[arg(long, short)]
        interactive: bool,
    },

    /// Chart how many matching articles were published per day
    Trend {
        /// Keyword or phrase to search for
        query: String,

        /// Restrict to a language (name or two-letter code)
        #[arg(long, short)]
        language: Option<String>,

        /// Restrict to a source country (name or two-letter code)
        #[arg(long, short)]
        country: Option<String>,
    },

    /// List supported country filters
    Countries,

    /// List supported language filters
    Languages,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = match cli.config.clone().or_else(find_config_file) {
        Some(path) => load_config(&path)?,
        None => get_config(),
    };
    config.validate()?;

    match cli.command {
        Commands::Search {
            query,
            language,
            country,
            interactive,
        } => {
            run_search(
                &config,
                &query,
                language.as_deref(),
                country.as_deref(),
                interactive,
            )
            .await
        }
        Commands::Trend {
            query,
            language,
            country,
        } => run_trend(&config, &query, language.as_deref(), country.as_deref()).await,
        Commands::Countries => {
            for (name, code) in reference::country_entries() {
                println!("{}  {}", code, name);
            }
            Ok(())
        }
        Commands::Languages => {
            for (name, code) in reference::language_entries() {
                println!("{}  {}", code, name);
            }
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve CLI filter arguments into a search context.
fn build_context(query: &str, language: Option<&str>, country: Option<&str>) -> Result<SearchContext> {
    let mut ctx = SearchContext::new(query);

    if let Some(arg) = language {
        let code = reference::resolve_language(arg)
            .ok_or_else(|| anyhow!("unknown language: {} (see `newslens languages`)", arg))?;
        ctx = ctx.language(code);
    }
    if let Some(arg) = country {
        let code = reference::resolve_country(arg)
            .ok_or_else(|| anyhow!("unknown country: {} (see `newslens countries`)", arg))?;
        ctx = ctx.country(code);
    }

    Ok(ctx)
}

async fn run_search(
    config: &Config,
    query: &str,
    language: Option<&str>,
    country: Option<&str>,
    interactive: bool,
) -> Result<()> {
    let ctx = build_context(query, language, country)?;
    let client = WorldNewsClient::new(config);
    let mut session = NewsSession::new(client);

    session.search(ctx).await?;
    print_page(&session);

    if interactive {
        interactive_loop(&mut session).await?;
    }

    Ok(())
}

async fn run_trend(
    config: &Config,
    query: &str,
    language: Option<&str>,
    country: Option<&str>,
) -> Result<()> {
    let ctx = build_context(query, language, country)?;
    let client = WorldNewsClient::new(config);
    let mut session = NewsSession::new(client);

    session.search(ctx).await?;
    print_trend(&session).await;

    Ok(())
}

fn print_page(session: &NewsSession<WorldNewsClient>) {
    let window = session.window();
    println!(
        "{}",
        ui::summary_line(window.total_count, window.current_page(), window.total_pages)
    );

    if session.status() == PageStatus::Unavailable {
        println!("{}", "Results unavailable; try again.".yellow());
        return;
    }
    if session.articles().is_empty() {
        println!("No results.");
        return;
    }

    if ui::is_terminal() {
        println!("{}", ui::article_table(session.articles()));
    } else {
        print!("{}", ui::render_plain(session.articles()));
    }
}

async fn print_trend(session: &NewsSession<WorldNewsClient>) {
    let dates = trend::collect_publish_dates(session).await;
    if dates.is_empty() {
        println!("No publish date data found.");
        return;
    }

    let counts = trend::daily_counts(&dates);
    let width = ui::terminal_width().saturating_sub(30).clamp(10, 60);
    if let Some(query) = session.context().map(|c| c.query.as_str()) {
        println!("{}", format!("Publication trend for '{}'", query).bold());
    }
    print!("{}", ui::trend_chart(&counts, width));
}

/// Read navigation commands from stdin and drive the session.
///
/// One command at a time: each operation is awaited before the next
/// prompt, so the session never sees overlapping calls.
async fn interactive_loop(session: &mut NewsSession<WorldNewsClient>) -> Result<()> {
    let stdin = std::io::stdin();

    loop {
        print!("{}", "[n]ext [p]rev [f]irst [l]ast [t]rend [q]uit > ".dimmed());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            "n" => {
                if session.has_next() {
                    session.next_page().await;
                    print_page(session);
                } else {
                    println!("Already on the last page.");
                }
            }
            "p" => {
                if session.has_prev() {
                    session.prev_page().await;
                    print_page(session);
                } else {
                    println!("Already on the first page.");
                }
            }
            "f" => {
                session.first_page().await;
                print_page(session);
            }
            "l" => {
                session.last_page().await;
                print_page(session);
            }
            "t" => print_trend(session).await,
            "q" => break,
            "" => continue,
            other => println!("Unknown command: {}", other),
        }
    }

    Ok(())
}
