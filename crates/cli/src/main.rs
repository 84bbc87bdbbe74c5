use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{Backfill, RecommendationAggregator, RecommendationOutcome, Recommendations};
use movie_data::{MovieDetails, MovieId, MovieSummary, Page};
use sources::TmdbSource;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tmdb_client::{TmdbClient, TmdbConfig};
use tracing::info;

/// Marquee - browse TMDB and get recommendations from the terminal
#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Movie browser and recommendation engine backed by TMDB", long_about = None)]
struct Cli {
    /// TMDB API key (falls back to TMDB_API_KEY, also read from .env)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Override the TMDB base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Whole-request timeout for the HTTP client, in seconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    /// Bound on each recommendation source call, in seconds
    #[arg(long, global = true, default_value = "5", value_parser = clap::value_parser!(u64).range(1..))]
    call_timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List popular movies
    Popular {
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Search movies by title
    Search {
        /// Title to search for
        #[arg(long)]
        query: String,

        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Show a movie's details and its recommendations
    Movie {
        /// TMDB movie id
        #[arg(long)]
        id: MovieId,
    },

    /// Show recommendations for a movie
    Recommend {
        /// TMDB movie id
        #[arg(long)]
        id: MovieId,
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
    let client = build_client(&cli)?;
    let call_timeout = Duration::from_secs(cli.call_timeout_secs);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Popular { page } => handle_popular(&client, page).await?,
        Commands::Search { query, page } => handle_search(&client, &query, page).await?,
        Commands::Movie { id } => handle_movie(client, id, call_timeout).await?,
        Commands::Recommend { id } => handle_recommend(client, id, call_timeout).await?,
    }

    Ok(())
}

/// Flags win over the environment
fn build_client(cli: &Cli) -> Result<TmdbClient> {
    let mut config = match &cli.api_key {
        Some(key) => TmdbConfig::new(key.clone()),
        None => TmdbConfig::from_env().context("Failed to load TMDB configuration")?,
    };
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.clone());
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    TmdbClient::new(config).context("Failed to create TMDB client")
}

fn build_aggregator(client: TmdbClient, call_timeout: Duration) -> RecommendationAggregator<TmdbSource> {
    RecommendationAggregator::new(Arc::new(TmdbSource::new(client))).with_call_timeout(call_timeout)
}

/// Handle the 'popular' command
async fn handle_popular(client: &TmdbClient, page: u32) -> Result<()> {
    let listing = client
        .popular_movies(page)
        .await
        .context("Failed to fetch popular movies")?;

    println!("{}", "Popular Movies".bold().blue());
    print_page(&listing);
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(client: &TmdbClient, query: &str, page: u32) -> Result<()> {
    let listing = client
        .search_movies(query, page)
        .await
        .with_context(|| format!("Failed to search for '{}'", query))?;

    if listing.results.is_empty() {
        println!("No movies found for '{}'", query);
        return Ok(());
    }

    println!(
        "{}",
        format!("Search results for '{}' ({} movies found):", query, listing.total_results)
            .bold()
            .blue()
    );
    print_page(&listing);
    Ok(())
}

/// Handle the 'movie' command
async fn handle_movie(client: TmdbClient, movie_id: MovieId, call_timeout: Duration) -> Result<()> {
    let details = client
        .movie_details(movie_id)
        .await
        .with_context(|| format!("Failed to load movie {}", movie_id))?;

    print_details(&details);

    let recommendations = build_aggregator(client, call_timeout)
        .recommend_detailed(movie_id, &details)
        .await;
    println!();
    print_recommendations(&recommendations);
    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(client: TmdbClient, movie_id: MovieId, call_timeout: Duration) -> Result<()> {
    let start = Instant::now();
    let details = client
        .movie_details(movie_id)
        .await
        .with_context(|| format!("Failed to load movie {}", movie_id))?;

    let recommendations = build_aggregator(client, call_timeout)
        .recommend_detailed(movie_id, &details)
        .await;
    info!("Recommendations for '{}' ready in {:?}", details.title(), start.elapsed());

    println!("{}", format!("Because you looked at {}", details.title()).bold());
    print_recommendations(&recommendations);
    Ok(())
}

// ============================================================================
// Output
// ============================================================================

fn print_page(listing: &Page<MovieSummary>) {
    for (rank, movie) in listing.results.iter().enumerate() {
        print_movie_line(rank + 1, movie);
    }
    let more = if listing.has_more() { ", more available" } else { "" };
    println!(
        "{}",
        format!("Page {} of {}{}", listing.page, listing.total_pages.max(1), more).dimmed()
    );
}

fn print_movie_line(rank: usize, movie: &MovieSummary) {
    let year = movie
        .release_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "----".to_string());
    println!(
        "{:>2}. {} ({}) {} {}",
        rank.to_string().green(),
        movie.title.bold(),
        year,
        format!("{:.1}/10", movie.vote_average).yellow(),
        format!("[id {}]", movie.id).dimmed()
    );
}

fn print_details(details: &MovieDetails) {
    let summary = &details.summary;
    println!("{}", summary.title.bold().blue());
    if let Some(tagline) = &details.tagline {
        println!("{}", tagline.italic());
    }

    let year = summary
        .release_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    println!(
        "{} {:.1}/10 ({} votes)  {}  {}",
        "★".yellow(),
        summary.vote_average,
        summary.vote_count,
        year,
        format_runtime(details.runtime_minutes)
    );

    if !details.genres.is_empty() {
        let genres: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
        println!("{}", genres.join(", ").cyan());
    }

    if let Some(overview) = &summary.overview {
        println!("\n{}\n", overview);
    }

    if let Some(credits) = &details.credits {
        if let Some(director) = credits.director() {
            println!("{}Director: {}", "• ".green(), director.name);
        }
        let cast = credits.main_cast(5);
        if !cast.is_empty() {
            println!("{}Cast:", "• ".green());
            for member in cast {
                println!("    {} as {}", member.name, member.character);
            }
        }
    }

    if details.budget > 0 {
        println!("{}Budget: {}", "• ".green(), format_currency(details.budget));
    }
    if details.revenue > 0 {
        println!("{}Revenue: {}", "• ".green(), format_currency(details.revenue));
    }
    println!("{}Status: {}", "• ".green(), details.status);
    println!(
        "{}Original language: {}",
        "• ".green(),
        details.original_language.to_uppercase()
    );
}

fn print_recommendations(recommendations: &Recommendations) {
    println!("{}", "Recommended Movies".bold().blue());
    if recommendations.is_empty() {
        let reason = match recommendations.outcome {
            RecommendationOutcome::Unavailable => "Recommendations are unavailable right now",
            _ => "No recommendations found",
        };
        println!("{}", reason.dimmed());
        return;
    }

    for (rank, movie) in recommendations.movies.iter().enumerate() {
        print_movie_line(rank + 1, movie);
    }
    println!("{}", describe_outcome(&recommendations.outcome).dimmed());
}

fn describe_outcome(outcome: &RecommendationOutcome) -> String {
    match outcome {
        RecommendationOutcome::Primary { backfill } => match backfill {
            Backfill::NotNeeded | Backfill::NoGenres => "from TMDB recommendations".to_string(),
            Backfill::Added(0) => "from TMDB recommendations (no genre matches qualified)".to_string(),
            Backfill::Added(n) => format!("from TMDB recommendations, {} added from the same genre", n),
            Backfill::Failed => "from TMDB recommendations (genre backfill unavailable)".to_string(),
        },
        RecommendationOutcome::Degraded => "from similar movies".to_string(),
        RecommendationOutcome::Unavailable => "unavailable".to_string(),
    }
}

/// "2h 16m", or "Unknown" when the runtime is missing
fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        Some(minutes) if minutes > 0 => format!("{}h {}m", minutes / 60, minutes % 60),
        _ => "Unknown".to_string(),
    }
}

/// Whole US dollars with thousands separators, e.g. "$63,000,000"
fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}
