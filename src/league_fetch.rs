use std::thread;

use reqwest::blocking::Client;
use tracing::warn;

use crate::config::RetryPolicy;
use crate::error::{CutoffError, FetchFailureDetail};
use crate::ladder::{LadderLists, LeagueEntry, parse_league_list_json};
use crate::platform::{Platform, QueueType, Tier, pair_label};

const API_TOKEN_HEADER: &str = "X-Riot-Token";

#[derive(Debug, Clone)]
pub struct SourceResponse {
    pub status: u16,
    pub body: String,
}

impl SourceResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn is_retryable(&self) -> bool {
        self.status == 429 || (500..600).contains(&self.status)
    }
}

/// Where league lists come from. `Err` means the request never produced a status.
pub trait LeagueSource: Sync {
    fn get(
        &self,
        platform: Platform,
        queue: QueueType,
        tier: Tier,
    ) -> Result<SourceResponse, CutoffError>;
}

pub fn league_url(platform: Platform, queue: QueueType, tier: Tier) -> String {
    format!(
        "https://{}/lol/league/v4/{}/by-queue/{}",
        platform.host(),
        tier.league_path(),
        queue.code()
    )
}

pub struct RiotLeagueSource {
    client: &'static Client,
    api_key: String,
}

impl RiotLeagueSource {
    pub fn new(client: &'static Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }
}

impl LeagueSource for RiotLeagueSource {
    fn get(
        &self,
        platform: Platform,
        queue: QueueType,
        tier: Tier,
    ) -> Result<SourceResponse, CutoffError> {
        let transport = |err: reqwest::Error| CutoffError::Transport {
            platform,
            queue,
            tier,
            message: err.without_url().to_string(),
        };
        let resp = self
            .client
            .get(league_url(platform, queue, tier))
            .header(API_TOKEN_HEADER, &self.api_key)
            .send()
            .map_err(transport)?;
        let status = resp.status().as_u16();
        let body = resp.text().map_err(transport)?;
        Ok(SourceResponse { status, body })
    }
}

/// Fetches the three apex lists of one platform/queue.
///
/// The three requests are retried together, never one by one, so the lists come from the
/// same moment. Transport failures and 5xx/429 statuses are retried up to
/// `retry.attempts` times with a fixed delay; any other failed status ends the fetch.
pub fn fetch_ladder<S: LeagueSource + ?Sized>(
    source: &S,
    platform: Platform,
    queue: QueueType,
    retry: &RetryPolicy,
) -> Result<LadderLists, CutoffError> {
    let attempts = retry.attempts.max(1);
    let mut last_failure = None;

    for attempt in 1..=attempts {
        match fetch_triple(source, platform, queue) {
            Ok(responses) => {
                if responses.iter().all(SourceResponse::is_success) {
                    return parse_triple(platform, queue, responses);
                }
                let detail = FetchFailureDetail::Status(responses.each_ref().map(|r| r.status));
                if !responses.iter().any(SourceResponse::is_retryable) {
                    return Err(CutoffError::FetchFailure {
                        platform,
                        queue,
                        detail,
                    });
                }
                last_failure = Some(detail);
            }
            Err(err) => {
                last_failure = Some(FetchFailureDetail::Transport(err.to_string()));
            }
        }

        if attempt < attempts {
            if let Some(detail) = last_failure.as_ref() {
                warn!(
                    pair = %pair_label(platform, queue),
                    attempt,
                    "request failed ({detail}), retrying"
                );
            }
            thread::sleep(retry.delay);
        }
    }

    Err(CutoffError::FetchFailure {
        platform,
        queue,
        detail: last_failure
            .unwrap_or_else(|| FetchFailureDetail::Transport("no attempt made".to_string())),
    })
}

fn fetch_triple<S: LeagueSource + ?Sized>(
    source: &S,
    platform: Platform,
    queue: QueueType,
) -> Result<[SourceResponse; 3], CutoffError> {
    let challenger = source.get(platform, queue, Tier::Challenger)?;
    let grandmaster = source.get(platform, queue, Tier::Grandmaster)?;
    let master = source.get(platform, queue, Tier::Master)?;
    Ok([challenger, grandmaster, master])
}

fn parse_triple(
    platform: Platform,
    queue: QueueType,
    responses: [SourceResponse; 3],
) -> Result<LadderLists, CutoffError> {
    let [challenger, grandmaster, master] = responses;
    Ok(LadderLists {
        challenger: parse_entries(platform, queue, Tier::Challenger, &challenger.body)?,
        grandmaster: parse_entries(platform, queue, Tier::Grandmaster, &grandmaster.body)?,
        master: parse_entries(platform, queue, Tier::Master, &master.body)?,
    })
}

fn parse_entries(
    platform: Platform,
    queue: QueueType,
    tier: Tier,
    body: &str,
) -> Result<Vec<LeagueEntry>, CutoffError> {
    parse_league_list_json(body)
        .map(|list| list.entries)
        .map_err(|err| CutoffError::DataShape {
            platform,
            queue,
            tier,
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn league_url_uses_platform_host_and_tier_path() {
        assert_eq!(
            league_url(Platform::Euw1, QueueType::RankedSolo, Tier::Grandmaster),
            "https://euw1.api.riotgames.com/lol/league/v4/grandmasterleagues/by-queue/RANKED_SOLO_5x5"
        );
        assert_eq!(
            league_url(Platform::Kr, QueueType::RankedFlex, Tier::Master),
            "https://kr.api.riotgames.com/lol/league/v4/masterleagues/by-queue/RANKED_FLEX_SR"
        );
    }

    #[test]
    fn retryable_statuses() {
        let resp = |status| SourceResponse {
            status,
            body: String::new(),
        };
        assert!(resp(500).is_retryable());
        assert!(resp(503).is_retryable());
        assert!(resp(429).is_retryable());
        assert!(!resp(403).is_retryable());
        assert!(!resp(404).is_retryable());
        assert!(resp(200).is_success());
        assert!(!resp(304).is_success());
    }
}
