use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use midi_score_search::config::{AppConfig, CliConfig, FileConfig};
use midi_score_search::search::{suggest, HighlightField, Pagination, ScoredResult};
use midi_score_search::{
    load_catalog, search, Difficulty, FilterSet, FormatRequirement, Genre, Period, Record,
    SearchRequest, SortMode,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON catalog snapshot.
    #[clap(value_parser = parse_path)]
    pub catalog: PathBuf,

    /// Path to a TOML config file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Result ordering: relevance, popularity, rating, quality, title, composer or recent.
    #[clap(long)]
    pub sort: Option<SortMode>,

    /// Maximum number of results per query.
    #[clap(long)]
    pub limit: Option<i64>,

    /// Number of ranked results to skip.
    #[clap(long, default_value_t = 0)]
    pub offset: i64,

    /// Maximum number of autocomplete suggestions.
    #[clap(long)]
    pub suggest_limit: Option<usize>,

    /// Allowed difficulty, can be repeated.
    #[clap(long)]
    pub difficulty: Vec<Difficulty>,

    /// Allowed genre, can be repeated.
    #[clap(long)]
    pub genre: Vec<Genre>,

    /// Allowed period, can be repeated.
    #[clap(long)]
    pub period: Vec<Period>,

    /// Required file format: midi, musicxml or both.
    #[clap(long)]
    pub format: Option<FormatRequirement>,

    #[clap(long)]
    pub min_quality: Option<f64>,

    #[clap(long)]
    pub tempo_min: Option<u32>,

    #[clap(long)]
    pub tempo_max: Option<u32>,

    /// Minimum duration in minutes.
    #[clap(long)]
    pub duration_min: Option<f64>,

    /// Maximum duration in minutes.
    #[clap(long)]
    pub duration_max: Option<f64>,

    /// Print results as JSON instead of one line per record.
    #[clap(long)]
    pub json: bool,
}

impl CliArgs {
    fn to_cli_config(&self) -> Result<CliConfig> {
        let default_limit = match self.limit {
            Some(limit) => Some(Pagination::new(limit, 0)?.limit),
            None => None,
        };
        Ok(CliConfig {
            default_limit,
            suggest_limit: self.suggest_limit,
            default_sort: self.sort,
        })
    }

    fn filters(&self) -> FilterSet {
        fn non_empty<T: Clone>(values: &[T]) -> Option<Vec<T>> {
            (!values.is_empty()).then(|| values.to_vec())
        }
        FilterSet {
            difficulty: non_empty(&self.difficulty),
            genre: non_empty(&self.genre),
            period: non_empty(&self.period),
            tempo_min: self.tempo_min,
            tempo_max: self.tempo_max,
            duration_min: self.duration_min,
            duration_max: self.duration_max,
            file_format: self.format,
            min_quality: self.min_quality,
        }
    }
}

fn print_result(result: &ScoredResult<'_>) {
    let record: &Record = result.record;
    let matched: Vec<String> = result
        .highlights
        .iter()
        .map(|(field, value)| {
            let field = match field {
                HighlightField::Title => "title",
                HighlightField::Composer => "composer",
                HighlightField::Tags => "tag",
            };
            format!("{}={:?}", field, value)
        })
        .collect();
    println!(
        "{:>8.2}  {} - {} [{}, {}] {}",
        result.relevance_score,
        record.title,
        record.composer,
        record.genre,
        record.difficulty,
        matched.join(" "),
    );
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file at {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let app_config = AppConfig::resolve(&cli_args.to_cli_config()?, file_config)?;

    info!("Loading catalog at {:?}...", cli_args.catalog);
    let records = load_catalog(&cli_args.catalog)?;

    let filters = cli_args.filters();
    filters.validate()?;
    let page = Pagination {
        offset: Pagination::new(0, cli_args.offset)?.offset,
        ..app_config.default_page()
    };

    println!("Enter a query, or \"?prefix\" for suggestions. Ctrl-D to quit.");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read line")?;
        let user_input = line.trim();

        if let Some(prefix) = user_input.strip_prefix('?') {
            let suggestions = suggest(&records, prefix.trim(), app_config.suggest_limit);
            if cli_args.json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else if suggestions.is_empty() {
                println!("No suggestions for \"{}\".", prefix.trim());
            } else {
                for suggestion in suggestions {
                    println!("  {}", suggestion);
                }
            }
            continue;
        }

        let request = SearchRequest::new(user_input)
            .with_filters(filters.clone())
            .sorted_by(app_config.default_sort)
            .paginated(page);
        let results = search(&records, &app_config.composer_aliases, &request)?;

        if cli_args.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else if results.is_empty() {
            println!("No matches found for \"{}\".", user_input);
        } else {
            println!("Found {} matches for \"{}\":\n", results.len(), user_input);
            for result in results.iter() {
                print_result(result);
            }
        }
        println!();
    }

    Ok(())
}
