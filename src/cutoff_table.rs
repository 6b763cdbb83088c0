use std::collections::HashSet;

use crate::error::CutoffError;
use crate::platform::{Platform, QueueType};

/// How many players each apex tier holds on a platform/queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutoffTargets {
    pub challenger: usize,
    pub grandmaster: usize,
}

impl CutoffTargets {
    pub const fn new(challenger: usize, grandmaster: usize) -> Self {
        Self {
            challenger,
            grandmaster,
        }
    }

    /// Players at or above grandmaster, challengers included.
    pub fn grandmaster_bound(self) -> usize {
        self.challenger + self.grandmaster
    }
}

/// Lowest LP a cutoff is ever reported at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultFloors {
    pub challenger: i64,
    pub grandmaster: i64,
}

impl Default for DefaultFloors {
    fn default() -> Self {
        Self {
            challenger: 500,
            grandmaster: 200,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TableRow {
    pub platform: Platform,
    pub queue: QueueType,
    pub targets: CutoffTargets,
}

const fn row(
    platform: Platform,
    queue: QueueType,
    challenger: usize,
    grandmaster: usize,
) -> TableRow {
    TableRow {
        platform,
        queue,
        targets: CutoffTargets::new(challenger, grandmaster),
    }
}

const LARGE: (usize, usize) = (300, 700);
const MEDIUM: (usize, usize) = (200, 500);
const SMALL: (usize, usize) = (50, 100);

const DEFAULT_ROWS: &[TableRow] = &[
    row(Platform::Br1, QueueType::RankedSolo, MEDIUM.0, MEDIUM.1),
    row(Platform::Br1, QueueType::RankedFlex, MEDIUM.0, MEDIUM.1),
    row(Platform::Eun1, QueueType::RankedSolo, MEDIUM.0, MEDIUM.1),
    row(Platform::Eun1, QueueType::RankedFlex, SMALL.0, SMALL.1),
    row(Platform::Euw1, QueueType::RankedSolo, LARGE.0, LARGE.1),
    row(Platform::Euw1, QueueType::RankedFlex, MEDIUM.0, MEDIUM.1),
    row(Platform::Jp1, QueueType::RankedSolo, SMALL.0, SMALL.1),
    row(Platform::Jp1, QueueType::RankedFlex, SMALL.0, SMALL.1),
    row(Platform::Kr, QueueType::RankedSolo, LARGE.0, LARGE.1),
    row(Platform::Kr, QueueType::RankedFlex, MEDIUM.0, MEDIUM.1),
    row(Platform::La1, QueueType::RankedSolo, MEDIUM.0, MEDIUM.1),
    row(Platform::La1, QueueType::RankedFlex, SMALL.0, SMALL.1),
    row(Platform::La2, QueueType::RankedSolo, MEDIUM.0, MEDIUM.1),
    row(Platform::La2, QueueType::RankedFlex, SMALL.0, SMALL.1),
    row(Platform::Na1, QueueType::RankedSolo, LARGE.0, LARGE.1),
    row(Platform::Na1, QueueType::RankedFlex, SMALL.0, SMALL.1),
    row(Platform::Oc1, QueueType::RankedSolo, SMALL.0, SMALL.1),
    row(Platform::Oc1, QueueType::RankedFlex, SMALL.0, SMALL.1),
    row(Platform::Ru, QueueType::RankedSolo, SMALL.0, SMALL.1),
    row(Platform::Ru, QueueType::RankedFlex, SMALL.0, SMALL.1),
    row(Platform::Tr1, QueueType::RankedSolo, MEDIUM.0, MEDIUM.1),
    row(Platform::Tr1, QueueType::RankedFlex, SMALL.0, SMALL.1),
];

/// Read-only grid of platform/queue pairs and their tier sizes.
#[derive(Debug, Clone)]
pub struct CutoffTable {
    rows: Vec<TableRow>,
    floors: DefaultFloors,
}

impl Default for CutoffTable {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS.to_vec(),
            floors: DefaultFloors::default(),
        }
    }
}

impl CutoffTable {
    pub fn new(rows: Vec<TableRow>, floors: DefaultFloors) -> Result<Self, CutoffError> {
        let table = Self { rows, floors };
        table.validate()?;
        Ok(table)
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn floors(&self) -> DefaultFloors {
        self.floors
    }

    /// Rejects tables that could yield a grandmaster cutoff above the challenger one.
    pub fn validate(&self) -> Result<(), CutoffError> {
        if self.floors.grandmaster > self.floors.challenger {
            return Err(CutoffError::Configuration(format!(
                "grandmaster floor {} exceeds challenger floor {}",
                self.floors.grandmaster, self.floors.challenger
            )));
        }
        let mut seen = HashSet::new();
        for r in &self.rows {
            if r.targets.challenger == 0 || r.targets.grandmaster == 0 {
                return Err(CutoffError::Configuration(format!(
                    "{}_{} has a zero tier size",
                    r.platform, r.queue
                )));
            }
            if !seen.insert((r.platform, r.queue)) {
                return Err(CutoffError::Configuration(format!(
                    "{}_{} is listed twice",
                    r.platform, r.queue
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets_of(
        table: &CutoffTable,
        platform: Platform,
        queue: QueueType,
    ) -> Option<CutoffTargets> {
        table
            .rows()
            .iter()
            .find(|r| r.platform == platform && r.queue == queue)
            .map(|r| r.targets)
    }

    #[test]
    fn default_table_covers_every_pair_once() {
        let table = CutoffTable::default();
        assert!(table.validate().is_ok());
        assert_eq!(table.rows().len(), Platform::ALL.len() * QueueType::ALL.len());
        for platform in Platform::ALL {
            for queue in QueueType::ALL {
                assert!(targets_of(&table, platform, queue).is_some(), "{platform}_{queue}");
            }
        }
    }

    #[test]
    fn bound_adds_challenger_to_grandmaster() {
        let table = CutoffTable::default();
        let na = targets_of(&table, Platform::Na1, QueueType::RankedSolo).unwrap();
        assert_eq!(na, CutoffTargets::new(300, 700));
        assert_eq!(na.grandmaster_bound(), 1000);
    }

    #[test]
    fn rejects_zero_target() {
        let rows = vec![row(Platform::Kr, QueueType::RankedSolo, 0, 700)];
        let err = CutoffTable::new(rows, DefaultFloors::default()).unwrap_err();
        assert!(matches!(err, CutoffError::Configuration(_)));
    }

    #[test]
    fn rejects_duplicate_pair() {
        let rows = vec![
            row(Platform::Kr, QueueType::RankedSolo, 300, 700),
            row(Platform::Kr, QueueType::RankedSolo, 200, 500),
        ];
        assert!(CutoffTable::new(rows, DefaultFloors::default()).is_err());
    }

    #[test]
    fn rejects_inverted_floors() {
        let floors = DefaultFloors {
            challenger: 100,
            grandmaster: 200,
        };
        assert!(CutoffTable::new(Vec::new(), floors).is_err());
    }
}
