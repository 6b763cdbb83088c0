use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::CutoffError;

pub const API_KEY_VAR: &str = "RIOT_API_KEY";
const DEFAULT_OUTPUT: &str = "lp_cutoffs.json";
const DEFAULT_PARALLELISM: usize = 6;
const DEFAULT_RETRY_DELAY_SECS: u64 = 5;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub const FETCH_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: FETCH_ATTEMPTS,
            delay: Duration::from_secs(DEFAULT_RETRY_DELAY_SECS),
        }
    }
}

#[derive(Clone)]
pub struct RunConfig {
    pub api_key: String,
    pub output_path: PathBuf,
    pub parallelism: usize,
    pub retry: RetryPolicy,
    pub request_timeout: Duration,
}

// Keeps the key out of logs.
impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("api_key", &"<redacted>")
            .field("output_path", &self.output_path)
            .field("parallelism", &self.parallelism)
            .field("retry", &self.retry)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl RunConfig {
    pub fn from_env() -> Result<Self, CutoffError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CutoffError> {
        let api_key = lookup(API_KEY_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                CutoffError::Configuration(format!("{API_KEY_VAR} environment variable is required"))
            })?;

        let output_path = lookup("LP_CUTOFFS_OUT")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        let parallelism = lookup("FETCH_PARALLELISM")
            .and_then(|val| val.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_PARALLELISM)
            .clamp(2, 32);
        let retry_delay = lookup("FETCH_RETRY_DELAY_SECS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_DELAY_SECS);
        let request_timeout = lookup("REQUEST_TIMEOUT_SECS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .max(1);

        Ok(Self {
            api_key,
            output_path,
            parallelism,
            retry: RetryPolicy {
                attempts: FETCH_ATTEMPTS,
                delay: Duration::from_secs(retry_delay),
            },
            request_timeout: Duration::from_secs(request_timeout),
        })
    }
}

/// Output path from `--out <path>` or `--out=<path>`; blank values are ignored.
pub fn parse_out_arg(args: &[String]) -> Option<PathBuf> {
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix("--out=") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == "--out" {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(PathBuf::from(next));
            }
        }
    }
    None
}
