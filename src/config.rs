use crate::error::AppError;
use std::env;
use std::path::PathBuf;

use crate::rate_limit::SETUP_REQUESTS;

/// Most matches one run may request.
pub const MAX_MATCHES: usize = 100;

// A run at MAX_MATCHES with an empty cache must fit in one hour.
const DEFAULT_HOURLY_BUDGET: u32 = SETUP_REQUESTS + MAX_MATCHES as u32;
const DEFAULT_DAILY_BUDGET: u32 = 5 * DEFAULT_HOURLY_BUDGET;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: String,
    pub data_dir: PathBuf,
    pub daily_budget: u32,
    pub hourly_budget: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| {
            AppError::ConfigError("RIOT_API_KEY not found in .env file".to_string())
        })?;

        let region = env::var("RIOT_REGION").unwrap_or_else(|_| "na1".to_string());

        let data_dir = env::var("LEAGUE_ROLLUP_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let daily_budget = budget_var("LEAGUE_ROLLUP_DAILY_BUDGET", DEFAULT_DAILY_BUDGET)?;
        let hourly_budget = budget_var("LEAGUE_ROLLUP_HOURLY_BUDGET", DEFAULT_HOURLY_BUDGET)?;

        Ok(Config {
            api_key,
            region,
            data_dir,
            daily_budget,
            hourly_budget,
        })
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".league_rollup")
}

fn budget_var(name: &str, default: u32) -> Result<u32, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::ConfigError(format!("{} must be a positive integer, got {:?}", name, raw))),
        Err(_) => Ok(default),
    }
}
