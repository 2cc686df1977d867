use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::sanitize;
use crate::error::AppError;

/// Calls made before any match is fetched: account, summoner, match list.
pub const SETUP_REQUESTS: u32 = 3;

/// Per-player request budget, persisted between runs.
///
/// This sits on top of the client's per-second quota: it caps how many calls
/// one analysis may spend per hour and per day.
#[derive(Debug, Serialize, Deserialize)]
pub struct RequestLog {
    pub player: String,
    pub daily_limit: u32,
    pub hourly_limit: u32,
    pub requests_today: u32,
    pub requests_this_hour: u32,
    pub last_request: Option<DateTime<Utc>>,
    pub day_reset: DateTime<Utc>,
    pub hour_reset: DateTime<Utc>,
    #[serde(skip)]
    path: PathBuf,
}

impl RequestLog {
    pub fn new(path: PathBuf, player: &str, daily_limit: u32, hourly_limit: u32, now: DateTime<Utc>) -> Self {
        RequestLog {
            player: player.to_string(),
            daily_limit,
            hourly_limit,
            requests_today: 0,
            requests_this_hour: 0,
            last_request: None,
            day_reset: now + Duration::days(1),
            hour_reset: now + Duration::hours(1),
            path,
        }
    }

    pub fn log_path(data_dir: &Path, player: &str) -> PathBuf {
        data_dir
            .join("budget")
            .join(format!("{}.json", sanitize(player)))
    }

    pub fn load(
        data_dir: &Path,
        player: &str,
        daily_limit: u32,
        hourly_limit: u32,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        let path = Self::log_path(data_dir, player);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Ok(RequestLog::new(path, player, daily_limit, hourly_limit, now)),
        };

        let mut log: RequestLog = serde_json::from_str(&content)
            .map_err(|e| AppError::JsonError(format!("Failed to parse request log: {}", e)))?;
        log.path = path;
        // Limits follow the current configuration, not whatever was saved.
        log.daily_limit = daily_limit;
        log.hourly_limit = hourly_limit;
        log.roll_windows(now);
        Ok(log)
    }

    pub fn save(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize request log: {}", e)))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn roll_windows(&mut self, now: DateTime<Utc>) {
        if now > self.day_reset {
            self.requests_today = 0;
            self.day_reset = now + Duration::days(1);
        }
        if now > self.hour_reset {
            self.requests_this_hour = 0;
            self.hour_reset = now + Duration::hours(1);
        }
    }

    pub fn remaining(&self) -> u32 {
        self.daily_limit
            .saturating_sub(self.requests_today)
            .min(self.hourly_limit.saturating_sub(self.requests_this_hour))
    }

    /// How many of `wanted` requests fit in the remaining budget.
    pub fn affordable(&self, wanted: usize) -> usize {
        wanted.min(self.remaining() as usize)
    }

    /// Spends one request if the budget allows it.
    pub fn try_spend(&mut self, now: DateTime<Utc>) -> Result<(), AppError> {
        self.roll_windows(now);
        if self.remaining() == 0 {
            let wait = self.next_reset() - now;
            return Err(AppError::BudgetExhausted(wait.num_minutes()));
        }
        self.requests_today += 1;
        self.requests_this_hour += 1;
        self.last_request = Some(now);
        Ok(())
    }

    pub fn next_reset(&self) -> DateTime<Utc> {
        self.day_reset.min(self.hour_reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_hourly_budget_exhausts_then_resets() {
        let mut log = RequestLog::new(PathBuf::from("unused.json"), "p#1", 50, 2, at(10, 0));

        log.try_spend(at(10, 1)).unwrap();
        log.try_spend(at(10, 2)).unwrap();
        assert!(matches!(log.try_spend(at(10, 3)), Err(AppError::BudgetExhausted(57))));
        assert_eq!(log.remaining(), 0);

        log.try_spend(at(11, 5)).unwrap();
        assert_eq!(log.requests_this_hour, 1);
        assert_eq!(log.requests_today, 3);
    }

    #[test]
    fn test_daily_budget_caps_remaining() {
        let mut log = RequestLog::new(PathBuf::from("unused.json"), "p#1", 3, 20, at(8, 0));
        for minute in 0..3 {
            log.try_spend(at(8, minute)).unwrap();
        }
        assert_eq!(log.remaining(), 0);
        assert_eq!(log.next_reset(), at(9, 0));
    }

    #[test]
    fn test_affordable_caps_at_remaining() {
        let now = at(9, 0);
        let mut log = RequestLog::new(PathBuf::from("unused.json"), "p#1", 50, 20, now);
        for _ in 0..SETUP_REQUESTS {
            log.try_spend(now).unwrap();
        }

        assert_eq!(log.affordable(20), 17);
        assert_eq!(log.affordable(5), 5);

        let fetched = (0..20).filter(|_| log.try_spend(now).is_ok()).count();
        assert_eq!(fetched, 17);
        assert_eq!(log.affordable(1), 0);
    }

    #[test]
    fn test_save_and_reload_keeps_counts() {
        let dir = tempfile::tempdir().unwrap();
        let now = at(12, 0);

        let mut log = RequestLog::load(dir.path(), "Faker#KR1", 50, 20, now).unwrap();
        log.try_spend(now).unwrap();
        log.save().unwrap();

        let reloaded = RequestLog::load(dir.path(), "Faker#KR1", 40, 20, at(12, 30)).unwrap();
        assert_eq!(reloaded.requests_today, 1);
        assert_eq!(reloaded.daily_limit, 40);
        assert_eq!(reloaded.remaining(), 19);
    }
}
