use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use indicatif::ProgressBar;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use league_rollup::analysis::RollupBuilder;
use league_rollup::api::client::RiotApiClient;
use league_rollup::cache::MatchCache;
use league_rollup::config::{Config, MAX_MATCHES};
use league_rollup::display::output::{
    display_error, display_info, display_report, display_success, display_warning,
};
use league_rollup::error::AppError;
use league_rollup::rate_limit::{RequestLog, SETUP_REQUESTS};
use league_rollup::store::ReportStore;

#[derive(Parser, Debug)]
#[command(name = "League Rollup")]
#[command(about = "Roll up a player's match history into per-champion, per-role and matchup stats", long_about = None)]
#[command(version)]
struct Args {
    /// Riot Game Name, or a full Riot ID (Name#TAG)
    game_name: String,

    /// Riot Tag (tag line)
    tag_line: Option<String>,

    /// Region (default: na1)
    #[arg(short, long)]
    region: Option<String>,

    /// Number of matches to analyze (max: 100)
    #[arg(short, long, default_value = "20")]
    matches: usize,

    /// Skip first N matches (offset from most recent)
    #[arg(long, default_value = "0")]
    offset: usize,

    /// Only include this queue (e.g. 420 for ranked solo)
    #[arg(short, long)]
    queue: Option<u16>,

    /// Number of champions listed per outcome
    #[arg(short, long, default_value = "5")]
    top_n: usize,

    /// Refetch matches even if cached
    #[arg(long)]
    refresh: bool,

    /// Save the rollup to the report store
    #[arg(long)]
    save: bool,

    /// Print the rollup tree as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn parse_riot_id(game_name: &str, tag_line: Option<&str>) -> Result<(String, String), AppError> {
    let (name, tag) = match tag_line {
        Some(tag) => (game_name, tag),
        None => game_name.split_once('#').ok_or(AppError::InvalidRiotId)?,
    };
    let (name, tag) = (name.trim(), tag.trim().trim_start_matches('#'));
    if name.is_empty() || tag.is_empty() {
        return Err(AppError::InvalidRiotId);
    }
    Ok((name.to_string(), tag.to_string()))
}

fn save_budget(budget: &RequestLog) {
    if let Err(e) = budget.save() {
        warn!(player = %budget.player, error = %e, "could not save request budget");
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        config.region = region;
    }

    let (game_name, tag_line) = parse_riot_id(&args.game_name, args.tag_line.as_deref())?;
    let player_key = format!("{}#{}", game_name, tag_line);
    let match_count = args.matches.min(MAX_MATCHES);

    let mut budget = RequestLog::load(
        &config.data_dir,
        &player_key,
        config.daily_budget,
        config.hourly_budget,
        Utc::now(),
    )?;
    let cache = MatchCache::new(&config.data_dir);
    let client = RiotApiClient::new(config.clone());

    if !args.json {
        display_info(&format!("Fetching data for {} in region {}", player_key, config.region));
    }
    info!(player = %player_key, region = %config.region, "starting analysis");

    if budget.remaining() < SETUP_REQUESTS {
        let wait = budget.next_reset() - Utc::now();
        return Err(AppError::BudgetExhausted(wait.num_minutes()).into());
    }

    // Account and match list are required; without them there is nothing to analyze.
    budget.try_spend(Utc::now())?;
    let account = client
        .get_account(&game_name, &tag_line)
        .with_context(|| format!("looking up {}", player_key))?;

    let summoner_level = match budget.try_spend(Utc::now()) {
        Ok(()) => match client.get_summoner(&account.puuid) {
            Ok(summoner) => Some(summoner.summoner_level),
            Err(e) => {
                warn!(error = %e, "summoner lookup failed, continuing without level");
                None
            }
        },
        Err(_) => None,
    };

    budget.try_spend(Utc::now())?;
    let match_ids = client
        .get_match_ids(&account.puuid, args.offset, match_count, args.queue)
        .context("fetching match history")?;
    save_budget(&budget);

    if match_ids.is_empty() {
        return Err(AppError::NoMatches.into());
    }

    let uncached = if args.refresh {
        match_ids.len()
    } else {
        match_ids.iter().filter(|id| !cache.contains(id)).count()
    };
    let fetchable = budget.affordable(uncached);
    if !args.json {
        display_success(&format!(
            "Found {} matches to analyze ({} to download)",
            match_ids.len(),
            uncached
        ));
        if fetchable < uncached {
            display_warning(&format!(
                "Request budget covers {} of {} downloads; the rest will be skipped",
                fetchable, uncached
            ));
        }
    }

    let pb = if args.json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(match_ids.len() as u64)
    };
    pb.set_message("Fetching match details");
    let mut builder = RollupBuilder::new(account.puuid.clone());
    let mut budget_error = None;

    for match_id in &match_ids {
        pb.inc(1);

        if !args.refresh {
            if let Some(game) = cache.get(match_id) {
                builder.fold(&game);
                continue;
            }
        }

        if let Some(error) = &budget_error {
            builder.skip(match_id.as_str(), error);
            continue;
        }

        if let Err(e) = budget.try_spend(Utc::now()) {
            // Keep what was fetched so far; the rest is reported as skipped.
            warn!(error = %e, "request budget exhausted, stopping early");
            builder.skip(match_id.as_str(), &e);
            budget_error = Some(e);
            continue;
        }

        match client.get_match(match_id) {
            Ok(game) => {
                if let Err(e) = cache.put(match_id, &game) {
                    warn!(match_id = %match_id, error = %e, "could not cache match");
                }
                builder.fold(&game);
            }
            Err(e) => builder.skip(match_id.as_str(), &e),
        }
    }

    pb.finish_with_message("✓ Match data fetched");
    save_budget(&budget);

    let rollup = builder.finish();
    if rollup.report.is_empty() {
        anyhow::bail!("none of the {} matches could be analyzed", rollup.report.requested());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&rollup.tree).context("serializing rollup")?;
        println!("{}", json);
    } else {
        if rollup.report.is_partial() {
            display_warning("Some matches were skipped; results are partial");
        }
        display_report(&player_key, summoner_level, &rollup, args.top_n);
        display_info(&format!(
            "API budget: {} requests left before {}",
            budget.remaining(),
            budget.next_reset().format("%H:%M UTC")
        ));
    }

    if args.save {
        let store = ReportStore::new(&config.data_dir);
        let path = store.save(&player_key, &rollup, Utc::now())?;
        if !args.json {
            display_success(&format!("Saved report to {}", path.display()));
        }
    }

    Ok(())
}
