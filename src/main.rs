mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use content_rank::config::RankingConfig;
use content_rank::interests::InterestsCalculator;
use content_rank::scoring::{RankedTopic, RankingPipeline, TopicRanker};
use content_rank::{
    format_float, hot_score, job_breakdown, now_timestamp, rank_topic, JobSnapshot,
    MicroblogSnapshot, TopicSnapshot,
};

#[derive(Parser)]
#[command(name = "content-rank", about = "Content scoring and ranking engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a job posting snapshot (JSON via --json, --file or stdin)
    Score(ScoreArgs),
    /// Rank a single forum topic
    Rank(RankArgs),
    /// Hot score for a microblog entry
    Hot(HotArgs),
    /// Interest ratios from a tag histogram payload
    Interests(InterestsArgs),
    /// Rank a batch of topics and print them best-first
    Batch(BatchArgs),
    /// Print the resolved weight configuration, or write it with --init
    Config(ConfigArgs),
    /// Run the HTTP scoring endpoints
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct ScoreArgs {
    #[arg(long)]
    json: Option<String>,
    #[arg(long)]
    file: Option<PathBuf>,
    #[arg(long)]
    details: bool,
}

#[derive(Args, Debug, Clone)]
struct RankArgs {
    #[arg(long, default_value_t = 0)]
    score: i64,
    #[arg(long, default_value_t = 0)]
    replies: i64,
    #[arg(long, default_value_t = 0)]
    views: i64,
    #[arg(long)]
    last_post_at: Option<i64>,
    #[arg(long)]
    created_at: Option<i64>,
    #[arg(long)]
    now: Option<i64>,
}

#[derive(Args, Debug, Clone)]
struct HotArgs {
    #[arg(long, default_value_t = 0)]
    votes: i64,
    #[arg(long, default_value_t = 0)]
    bonus: i64,
    #[arg(long)]
    created_at: Option<i64>,
    #[arg(long)]
    now: Option<i64>,
}

#[derive(Args, Debug, Clone)]
struct InterestsArgs {
    #[arg(long)]
    json: Option<String>,
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct BatchArgs {
    #[arg(long)]
    json: Option<String>,
    #[arg(long)]
    file: Option<PathBuf>,
    #[arg(long)]
    now: Option<i64>,
}

#[derive(Args, Debug, Clone)]
struct ConfigArgs {
    /// Write the current configuration to this path
    #[arg(long)]
    init: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Score(args) => run_score(args),
        Command::Rank(args) => run_rank(args),
        Command::Hot(args) => run_hot(args),
        Command::Interests(args) => run_interests(args),
        Command::Batch(args) => run_batch(args),
        Command::Config(args) => run_config(args),
        Command::Serve(args) => server::serve(args).await,
    }
}

fn run_score(args: ScoreArgs) -> Result<(), String> {
    let config = load_config()?;
    let payload = read_payload(args.json, args.file.as_deref())?;
    let snapshot: JobSnapshot = serde_json::from_str(&payload)
        .map_err(|err| format!("invalid job snapshot: {}", err))?;

    let breakdown = job_breakdown(&snapshot, &config);

    println!("Job score: {}", breakdown.total);
    if args.details {
        println!("  fields: {}", breakdown.fields);
        println!("  tags: {}", breakdown.tags);
        println!("  features: {}", breakdown.features);
        println!("  firm fields: {}", breakdown.firm_fields);
        println!("  benefits: {}", breakdown.benefits);
        println!("  penalty: -{}", breakdown.penalty);
    }

    Ok(())
}

fn run_rank(args: RankArgs) -> Result<(), String> {
    let config = load_config()?;
    let now = args.now.unwrap_or_else(now_timestamp);
    let snapshot = TopicSnapshot {
        score: args.score,
        replies: args.replies,
        views: args.views,
        last_post_at: args.last_post_at,
        created_at: args.created_at,
    };

    let rank = rank_topic(&snapshot, now, &config);
    println!("Topic rank: {}", format_float(rank, 3));

    Ok(())
}

fn run_hot(args: HotArgs) -> Result<(), String> {
    let config = load_config()?;
    let now = args.now.unwrap_or_else(now_timestamp);
    let snapshot = MicroblogSnapshot {
        votes: args.votes,
        bonus: args.bonus,
        created_at: args.created_at,
    };

    let score = hot_score(&snapshot, now, &config);
    println!("Hot score: {}", score);

    Ok(())
}

fn run_interests(args: InterestsArgs) -> Result<(), String> {
    let payload = read_payload(args.json, args.file.as_deref())?;
    let calculator = InterestsCalculator::from_json(&payload)
        .map_err(|err| format!("{}", err))?;

    let ratios = calculator.ratios();
    if ratios.is_empty() {
        println!("No interests recorded.");
        return Ok(());
    }

    println!("Interest ratios:");
    for (tag, ratio) in ratios {
        println!("  {}: {}", tag, format_float(ratio, 4));
    }

    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<(), String> {
    let config = load_config()?;
    let payload = read_payload(args.json, args.file.as_deref())?;
    let mut topics: Vec<RankedTopic> = serde_json::from_str(&payload)
        .map_err(|err| format!("invalid topic batch: {}", err))?;

    let now = args.now.unwrap_or_else(now_timestamp);
    let pipeline = RankingPipeline::new(TopicRanker::new(config.rank.clone()));
    pipeline.rank(&mut topics, now);

    for topic in &topics {
        println!("{}\t{}", format_float(topic.rank, 3), topic.topic_id);
    }

    Ok(())
}

fn run_config(args: ConfigArgs) -> Result<(), String> {
    let config = load_config()?;

    match args.init {
        Some(path) => {
            config.write(&path)?;
            println!("Wrote ranking config to {}", path.display());
        }
        None => {
            let payload = toml::to_string_pretty(&config)
                .map_err(|err| format!("failed to serialize config: {}", err))?;
            print!("{}", payload);
        }
    }

    Ok(())
}

fn load_config() -> Result<RankingConfig, String> {
    let (config, config_path) = RankingConfig::load(None)?;
    if let Some(path) = config_path {
        tracing::debug!(path = %path.display(), "ranking config resolved");
    }
    Ok(config)
}

fn read_payload(arg: Option<String>, file: Option<&Path>) -> Result<String, String> {
    if let Some(payload) = arg {
        if !payload.trim().is_empty() {
            return Ok(payload);
        }
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .map_err(|err| format!("failed reading {}: {}", path.display(), err));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing payload: pass --json, --file or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
