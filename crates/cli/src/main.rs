use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use fetch::{CatalogClient, FetchConfig, LoadEvent, DEFAULT_ENDPOINT};
use search::PREVIEW_LIMIT;
use session::{LoadOutcome, VotingSession};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::warn;

/// Movie Awards - vote for one nominee per award category
#[derive(Parser, Debug)]
#[command(name = "movie-awards")]
#[command(about = "Browse award nominees, search titles and fill in a ballot", long_about = None)]
struct Cli {
    /// URI of the catalog document
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Read the catalog from a local JSON file instead of fetching it
    #[arg(long)]
    catalog_file: Option<PathBuf>,

    /// Give up on the fetch after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List award categories and their nominees
    Categories,

    /// Search nominees by title
    Search {
        /// Title to search for (case-insensitive substring match)
        #[arg(long)]
        query: String,

        /// Only search within this category
        #[arg(long)]
        category: Option<String>,

        /// Number of results to list
        #[arg(long, default_value_t = PREVIEW_LIMIT)]
        limit: usize,
    },

    /// Vote for nominees by id and print the submitted ballot
    Vote {
        /// Movie ids to vote for; each vote goes to the movie's own category
        #[arg(long, required = true, num_args = 1..)]
        pick: Vec<String>,

        /// Print the ballot as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = FetchConfig::new(cli.endpoint.clone());
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let client = CatalogClient::new(&config).context("Failed to build catalog client")?;
    let mut session = VotingSession::new(client);

    load_catalog(&mut session, &cli).await?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Categories => handle_categories(&session),
        Commands::Search {
            query,
            category,
            limit,
        } => handle_search(&session, &query, category.as_deref(), limit),
        Commands::Vote { pick, json } => handle_vote(&mut session, &pick, json)?,
    }

    session.shutdown();
    Ok(())
}

/// Load the catalog from disk or over HTTP.
///
/// A failed or interrupted fetch is reported and the command carries on with
/// an empty catalog.
async fn load_catalog(session: &mut VotingSession, cli: &Cli) -> Result<()> {
    let start = Instant::now();

    let outcome = if let Some(path) = &cli.catalog_file {
        println!("Reading catalog from {}...", path.display());
        let catalog = catalog::parse_catalog_file(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        session.install_catalog(catalog)
    } else {
        println!("Fetching catalog from {}...", cli.endpoint);
        let mut fetch = session.begin_load();
        let generation = fetch.generation();

        let cancel = fetch.cancel_handle();
        let interrupt = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, cancelling catalog fetch");
                cancel.cancel();
            }
        });

        let event = fetch.next_event().await;
        interrupt.abort();
        session.apply(generation, event.unwrap_or(LoadEvent::Cancelled))
    };

    match outcome {
        LoadOutcome::Loaded { movies, categories } => println!(
            "{} Loaded {} movies in {} categories in {:?}",
            "✓".green(),
            movies,
            categories,
            start.elapsed()
        ),
        LoadOutcome::Failed(failure) => println!(
            "{} Could not load the catalog ({}); continuing with an empty one",
            "!".yellow(),
            failure
        ),
        LoadOutcome::Cancelled => println!(
            "{} Catalog fetch cancelled; continuing with an empty one",
            "!".yellow()
        ),
        LoadOutcome::Stale { generation } => {
            warn!("Load {} was superseded before it finished", generation)
        }
    }
    Ok(())
}

/// Handle the 'categories' command
fn handle_categories(session: &VotingSession) {
    if session.categories().is_empty() {
        println!("No categories to show.");
        return;
    }

    println!("{}", "Movie Awards".bold().blue());
    for (category, movies) in session.category_index().iter() {
        println!("{}", category.bold());
        for movie in movies {
            println!(
                "  {} {} ({})",
                "•".green(),
                movie.display_label(),
                movie.title
            );
        }
    }
}

/// Handle the 'search' command
fn handle_search(session: &VotingSession, query: &str, category: Option<&str>, limit: usize) {
    let results = match category {
        Some(category) => session.search_in(category, query),
        None => session.search(query),
    };

    if !results.is_active() {
        println!("Type at least one character to search.");
        return;
    }

    println!(
        "{}",
        format!("Results: {}", results.count()).bold().blue()
    );
    for movie in results.preview(limit) {
        println!(
            "  {} {} [{}] ({})",
            "•".green(),
            movie.display_label(),
            movie.category,
            movie.title
        );
    }
    if let Some(featured) = results.featured() {
        if !featured.photo_url.is_empty() {
            println!("Poster: {}", featured.photo_url);
        }
    }
}

/// Handle the 'vote' command
fn handle_vote(session: &mut VotingSession, picks: &[String], json: bool) -> Result<()> {
    for movie_id in picks {
        match session.vote(movie_id) {
            Ok(category) => println!("{}", session.heading(&category).cyan()),
            Err(e) => println!("{} {}", "✗".red(), e),
        }
    }

    let missing = session.missing_categories();
    if !missing.is_empty() {
        println!(
            "{} No vote yet for: {}",
            "!".yellow(),
            missing.join(", ")
        );
    }

    let ballot = session.submit();
    if json {
        let rendered = serde_json::to_string_pretty(&ballot).context("Failed to encode ballot")?;
        println!("{}", rendered);
    } else {
        println!("{}", "VOTES SUBMITTED!".bold().blue());
        println!("Your votes:");
        for line in ballot.lines() {
            println!("  {}", line);
        }
    }

    session.dismiss();
    Ok(())
}
