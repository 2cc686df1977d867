use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::api::models::MatchDto;
use crate::error::AppError;

/// Finished matches never change, so raw match records are kept on disk and
/// reused across runs.
pub struct MatchCache {
    dir: PathBuf,
}

impl MatchCache {
    pub fn new(data_dir: &Path) -> Self {
        MatchCache {
            dir: data_dir.join("matches"),
        }
    }

    fn path_for(&self, match_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize(match_id)))
    }

    /// A cached match, or `None` if absent or unreadable.
    pub fn get(&self, match_id: &str) -> Option<MatchDto> {
        let path = self.path_for(match_id);
        let content = fs::read_to_string(&path).ok()?;

        match serde_json::from_str(&content) {
            Ok(game) => {
                debug!(match_id, "match cache hit");
                Some(game)
            }
            Err(e) => {
                warn!(match_id, error = %e, "discarding unreadable cached match");
                let _ = fs::remove_file(&path);
                None
            }
        }
    }

    pub fn contains(&self, match_id: &str) -> bool {
        self.path_for(match_id).exists()
    }

    pub fn put(&self, match_id: &str, game: &MatchDto) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string(game)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize match: {}", e)))?;
        fs::write(self.path_for(match_id), json)?;
        Ok(())
    }
}

/// Makes a Riot ID or match ID safe to use as a file name.
pub fn sanitize(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '#' | '/' | '\\' | ':' | ' ' => '_',
            c => c,
        })
        .collect()
}
