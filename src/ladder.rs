use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cutoff_table::{CutoffTargets, DefaultFloors};

/// One ranked player. Only `leaguePoints` is read; the rest rides along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueEntry {
    #[serde(rename = "leaguePoints")]
    pub league_points: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LeagueEntry {
    pub fn with_points(league_points: i64) -> Self {
        Self {
            league_points,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueList {
    pub entries: Vec<LeagueEntry>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default, rename = "leagueId")]
    pub league_id: Option<String>,
    #[serde(default)]
    pub queue: Option<String>,
}

pub fn parse_league_list_json(raw: &str) -> serde_json::Result<LeagueList> {
    serde_json::from_str(raw.trim())
}

/// Challenger, grandmaster and master lists of one platform/queue.
#[derive(Debug, Clone, Default)]
pub struct LadderLists {
    pub challenger: Vec<LeagueEntry>,
    pub grandmaster: Vec<LeagueEntry>,
    pub master: Vec<LeagueEntry>,
}

impl LadderLists {
    pub fn len(&self) -> usize {
        self.challenger.len() + self.grandmaster.len() + self.master.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cutoffs {
    pub grandmaster: i64,
    pub challenger: i64,
}

impl Cutoffs {
    pub fn floors(floors: DefaultFloors) -> Self {
        Self {
            grandmaster: floors.grandmaster,
            challenger: floors.challenger,
        }
    }
}

/// All three tiers in one list, highest LP first. Ties keep no particular order.
pub fn merge_ladder(lists: LadderLists) -> Vec<LeagueEntry> {
    let LadderLists {
        challenger,
        grandmaster,
        master,
    } = lists;
    let mut ladder = challenger;
    ladder.extend(grandmaster);
    ladder.extend(master);
    ladder.sort_unstable_by(|a, b| b.league_points.cmp(&a.league_points));
    ladder
}

/// LP of the last challenger and of the last grandmaster, floored.
///
/// `ladder` must already be sorted by LP descending (see [`merge_ladder`]). When the pool
/// holds no more players than the grandmaster bound, both cutoffs are the floors.
pub fn compute_cutoffs(
    ladder: &[LeagueEntry],
    targets: CutoffTargets,
    floors: DefaultFloors,
) -> Cutoffs {
    let bound = targets.grandmaster_bound();
    if ladder.len() <= bound || targets.challenger == 0 {
        return Cutoffs::floors(floors);
    }

    let challenger = ladder[targets.challenger - 1]
        .league_points
        .max(floors.challenger);
    let grandmaster = ladder[bound - 1].league_points.max(floors.grandmaster);
    debug_assert!(
        grandmaster <= challenger,
        "grandmaster cutoff {grandmaster} above challenger cutoff {challenger}"
    );

    Cutoffs {
        grandmaster,
        challenger,
    }
}

pub fn cutoffs_for_lists(
    lists: LadderLists,
    targets: CutoffTargets,
    floors: DefaultFloors,
) -> Cutoffs {
    let ladder = merge_ladder(lists);
    compute_cutoffs(&ladder, targets, floors)
}
