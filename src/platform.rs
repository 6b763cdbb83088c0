use std::fmt;

use serde::{Deserialize, Serialize};

/// Regional platform of the ranked service. The code doubles as the API host prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "BR1")]
    Br1,
    #[serde(rename = "EUN1")]
    Eun1,
    #[serde(rename = "EUW1")]
    Euw1,
    #[serde(rename = "JP1")]
    Jp1,
    #[serde(rename = "KR")]
    Kr,
    #[serde(rename = "LA1")]
    La1,
    #[serde(rename = "LA2")]
    La2,
    #[serde(rename = "NA1")]
    Na1,
    #[serde(rename = "OC1")]
    Oc1,
    #[serde(rename = "RU")]
    Ru,
    #[serde(rename = "TR1")]
    Tr1,
}

impl Platform {
    pub const ALL: [Platform; 11] = [
        Platform::Br1,
        Platform::Eun1,
        Platform::Euw1,
        Platform::Jp1,
        Platform::Kr,
        Platform::La1,
        Platform::La2,
        Platform::Na1,
        Platform::Oc1,
        Platform::Ru,
        Platform::Tr1,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Platform::Br1 => "BR1",
            Platform::Eun1 => "EUN1",
            Platform::Euw1 => "EUW1",
            Platform::Jp1 => "JP1",
            Platform::Kr => "KR",
            Platform::La1 => "LA1",
            Platform::La2 => "LA2",
            Platform::Na1 => "NA1",
            Platform::Oc1 => "OC1",
            Platform::Ru => "RU",
            Platform::Tr1 => "TR1",
        }
    }

    pub fn host(self) -> String {
        format!("{}.api.riotgames.com", self.code().to_ascii_lowercase())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QueueType {
    #[serde(rename = "RANKED_SOLO_5x5")]
    RankedSolo,
    #[serde(rename = "RANKED_FLEX_SR")]
    RankedFlex,
}

impl QueueType {
    pub const ALL: [QueueType; 2] = [QueueType::RankedSolo, QueueType::RankedFlex];

    pub fn code(self) -> &'static str {
        match self {
            QueueType::RankedSolo => "RANKED_SOLO_5x5",
            QueueType::RankedFlex => "RANKED_FLEX_SR",
        }
    }
}

impl fmt::Display for QueueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Apex tiers, each served by its own league endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Challenger,
    Grandmaster,
    Master,
}

impl Tier {
    pub fn league_path(self) -> &'static str {
        match self {
            Tier::Challenger => "challengerleagues",
            Tier::Grandmaster => "grandmasterleagues",
            Tier::Master => "masterleagues",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Challenger => "challenger",
            Tier::Grandmaster => "grandmaster",
            Tier::Master => "master",
        };
        f.write_str(label)
    }
}

/// Label used in progress lines and diagnostics, e.g. `NA1_RANKED_SOLO_5x5`.
pub fn pair_label(platform: Platform, queue: QueueType) -> String {
    format!("{}_{}", platform.code(), queue.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_is_lowercased_code() {
        assert_eq!(Platform::Na1.host(), "na1.api.riotgames.com");
        assert_eq!(Platform::Kr.host(), "kr.api.riotgames.com");
    }

    #[test]
    fn serde_names_match_codes() {
        for platform in Platform::ALL {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{}\"", platform.code()));
        }
        for queue in QueueType::ALL {
            let json = serde_json::to_string(&queue).unwrap();
            assert_eq!(json, format!("\"{}\"", queue.code()));
        }
    }

    #[test]
    fn pair_label_joins_codes() {
        assert_eq!(
            pair_label(Platform::Euw1, QueueType::RankedFlex),
            "EUW1_RANKED_FLEX_SR"
        );
    }
}
