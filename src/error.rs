use std::path::PathBuf;

use thiserror::Error;

use crate::platform::{Platform, QueueType, Tier};

#[derive(Debug, Error)]
pub enum CutoffError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("transport error for {platform} {queue} {tier}: {message}")]
    Transport {
        platform: Platform,
        queue: QueueType,
        tier: Tier,
        message: String,
    },

    #[error("failed to fetch data for {platform}_{queue}: {detail}")]
    FetchFailure {
        platform: Platform,
        queue: QueueType,
        detail: FetchFailureDetail,
    },

    #[error("unexpected {tier} league body for {platform}_{queue}: {message}")]
    DataShape {
        platform: Platform,
        queue: QueueType,
        tier: Tier,
        message: String,
    },

    #[error("failed to write {}: {message}", path.display())]
    Output { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailureDetail {
    /// Status codes of the challenger, grandmaster and master requests, in that order.
    Status([u16; 3]),
    /// Last transport error after every attempt failed.
    Transport(String),
}

impl std::fmt::Display for FetchFailureDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchFailureDetail::Status([c, g, m]) => write!(f, "status codes: {c}, {g}, {m}"),
            FetchFailureDetail::Transport(message) => write!(f, "retries exhausted: {message}"),
        }
    }
}
