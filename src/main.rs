//! postfeed CLI
//!
//! Interactive browser by default, plus a one-shot `fetch` command for scripting.

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{HumanDuration, ProgressBar};
use postfeed::{filter_by_title, AppConfig, HttpPostSource, PostSource, DEFAULT_ENDPOINT};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// postfeed - browse a paginated post collection in the terminal
#[derive(Parser)]
#[command(name = "postfeed")]
#[command(author = "postfeed Contributors")]
#[command(version)]
#[command(about = "Terminal post browser with infinite scroll and search", long_about = None)]
struct Cli {
    /// Collection endpoint; `_page=<n>` is appended to it
    #[arg(long, global = true, env = "POSTFEED_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "10")]
    timeout_secs: u64,

    /// Drop posts whose id was already loaded from an earlier page
    #[arg(long, global = true)]
    dedupe: bool,

    /// Log file (default: postfeed.log next to the executable)
    #[arg(long, global = true, env = "POSTFEED_LOG_FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse posts interactively (default)
    Browse,

    /// Fetch a single page and print it
    Fetch {
        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Only show posts whose title contains this text (case-sensitive)
        #[arg(short, long, allow_hyphen_values = true)]
        search: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn config(&self) -> AppConfig {
        AppConfig {
            endpoint: self.endpoint.clone(),
            request_timeout: Duration::from_secs(self.timeout_secs),
            dedupe_by_id: self.dedupe,
            log_file: self.log_file.clone(),
            ..Default::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config();

    // Logging is best effort; the browser still works without a log file
    if let Err(e) = postfeed::logging::init(config.log_file.as_deref()) {
        eprintln!("{} {}", style("Warning:").yellow().bold(), e);
    }
    tracing::info!(
        version = postfeed::VERSION,
        endpoint = %config.endpoint,
        "postfeed starting up"
    );

    let result = config.validate().and_then(|_| match cli.command {
        None | Some(Commands::Browse) => postfeed::tui::run(&config),
        Some(Commands::Fetch {
            page,
            search,
            output,
        }) => cmd_fetch(&config, page, search.as_deref().unwrap_or(""), output),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("{} {}", style("Error:").red().bold(), e);
        if e.is_fetch_failure() {
            eprintln!(
                "{} check that {} is reachable or pass --endpoint",
                style("Hint:").cyan(),
                config.endpoint
            );
        }
        std::process::exit(1);
    }
}

/// Fetch command implementation
fn cmd_fetch(
    config: &AppConfig,
    page: u32,
    search: &str,
    output: OutputFormat,
) -> postfeed::Result<()> {
    let source = HttpPostSource::new(&config.endpoint, config.request_timeout)?;
    let start = Instant::now();

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Fetching {}", source.page_url(page)));
    spinner.enable_steady_tick(Duration::from_millis(80));
    let fetched = source.fetch_page(page);
    spinner.finish_and_clear();
    let posts = fetched?;

    let shown = filter_by_title(&posts, search);

    match output {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "page": page,
                    "search": search,
                    "fetched": posts.len(),
                    "posts": shown,
                })
            );
        }
        OutputFormat::Text => {
            println!(
                "{} Page {}: {} of {} posts in {}",
                style("✓").green().bold(),
                style(page).yellow(),
                style(shown.len()).green(),
                posts.len(),
                style(HumanDuration(start.elapsed())).cyan()
            );
            println!();

            if shown.is_empty() {
                println!("  No posts found.");
            }
            for post in shown {
                println!(
                    "  {} {}",
                    style(format!("#{:<4}", post.id)).dim(),
                    style(&post.title).cyan().bold()
                );
                for line in post.body_lines() {
                    println!("        {}", style(line).dim());
                }
            }
        }
    }

    Ok(())
}
