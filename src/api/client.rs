use crate::config::Config;
use crate::error::AppError;
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

use super::endpoints;
use super::models::*;

const REQUESTS_PER_SECOND: u32 = 20;
const MAX_RETRIES: u32 = 3;

pub struct RiotApiClient {
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl RiotApiClient {
    pub fn new(config: Config) -> Self {
        let quota = Quota::per_second(NonZeroU32::new(REQUESTS_PER_SECOND).unwrap_or(NonZeroU32::MIN));
        RiotApiClient {
            config,
            rate_limiter: RateLimiter::direct(quota),
        }
    }

    fn wait_for_slot(&self) {
        while self.rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(50));
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let mut retry_count = 0;

        loop {
            self.wait_for_slot();
            debug!(url, "riot api request");

            let response = ureq::get(url)
                .set("User-Agent", concat!("league_rollup/", env!("CARGO_PKG_VERSION")))
                .set("X-Riot-Token", &self.config.api_key)
                .call();

            match response {
                Ok(resp) => {
                    return resp.into_string().map_err(|e| AppError::HttpError(e.to_string()));
                }
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = 2000 * (retry_count + 1) as u64;
                    warn!(wait_ms, "rate limited by riot api, backing off");
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(ureq::Error::Status(404, _)) => {
                    return Err(AppError::ApiError(format!("not found: {}", url)));
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let body = self.execute_request(url)?;
        serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
    }

    /// fetchAccount: resolves a Riot ID to its PUUID.
    pub fn get_account(&self, game_name: &str, tag_line: &str) -> Result<AccountDto, AppError> {
        let url = endpoints::account_by_riot_id(game_name, tag_line);
        self.get_json(&url).map_err(|e| match e {
            AppError::ApiError(_) | AppError::JsonError(_) => {
                AppError::PlayerNotFound(format!("{}#{}", game_name, tag_line))
            }
            other => other,
        })
    }

    pub fn get_summoner(&self, puuid: &str) -> Result<SummonerDto, AppError> {
        let url = endpoints::summoner_by_puuid(&self.config.region, puuid);
        self.get_json(&url)
    }

    /// fetchMatchHistory: one page of match IDs, most recent first.
    pub fn get_match_ids(
        &self,
        puuid: &str,
        start: usize,
        count: usize,
        queue: Option<u16>,
    ) -> Result<Vec<String>, AppError> {
        let url = endpoints::match_ids_by_puuid(&self.config.region, puuid, start, count, queue);
        self.get_json(&url)
    }

    /// fetchMatchInfo
    pub fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError> {
        let url = endpoints::match_by_id(&self.config.region, match_id);
        self.get_json(&url)
    }
}
