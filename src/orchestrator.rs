use rayon::prelude::*;
use tracing::{error, info};

use crate::config::{RetryPolicy, RunConfig};
use crate::cutoff_table::{CutoffTable, DefaultFloors, TableRow};
use crate::error::CutoffError;
use crate::ladder::{Cutoffs, cutoffs_for_lists};
use crate::league_fetch::{LeagueSource, fetch_ladder};
use crate::platform::{Platform, QueueType, pair_label};
use crate::snapshot::{CutoffSnapshot, insert_cutoffs, write_snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairCutoffs {
    pub platform: Platform,
    pub queue: QueueType,
    pub cutoffs: Cutoffs,
    pub pool_size: usize,
}

impl PairCutoffs {
    pub fn progress_line(&self) -> String {
        format!(
            "{} - Challenger: {} - Grandmaster: {}",
            pair_label(self.platform, self.queue),
            self.cutoffs.challenger,
            self.cutoffs.grandmaster
        )
    }
}

/// Fetches and computes every pair of `table` in parallel.
///
/// Fails on the first pair that cannot be fetched; the remaining pairs are not started and
/// no partial snapshot is returned. `on_pair` runs once per finished pair, in completion order.
pub fn refresh_cutoffs<S, F>(
    source: &S,
    table: &CutoffTable,
    retry: &RetryPolicy,
    parallelism: usize,
    on_pair: F,
) -> Result<CutoffSnapshot, CutoffError>
where
    S: LeagueSource + ?Sized,
    F: Fn(&PairCutoffs) + Sync,
{
    let floors = table.floors();
    let results: Result<Vec<PairCutoffs>, CutoffError> = with_fetch_pool(parallelism, || {
        table
            .rows()
            .par_iter()
            .map(|row| -> Result<PairCutoffs, CutoffError> {
                let pair = process_pair(source, row, floors, retry)?;
                on_pair(&pair);
                Ok(pair)
            })
            .collect()
    });

    let mut snapshot = CutoffSnapshot::new();
    for pair in results? {
        insert_cutoffs(&mut snapshot, pair.platform, pair.queue, pair.cutoffs);
    }
    Ok(snapshot)
}

pub fn process_pair<S: LeagueSource + ?Sized>(
    source: &S,
    row: &TableRow,
    floors: DefaultFloors,
    retry: &RetryPolicy,
) -> Result<PairCutoffs, CutoffError> {
    let lists = fetch_ladder(source, row.platform, row.queue, retry)?;
    let pool_size = lists.len();
    let cutoffs = cutoffs_for_lists(lists, row.targets, floors);
    info!(
        pair = %pair_label(row.platform, row.queue),
        pool = pool_size,
        bound = row.targets.grandmaster_bound(),
        challenger = cutoffs.challenger,
        grandmaster = cutoffs.grandmaster,
        "pair computed"
    );
    Ok(PairCutoffs {
        platform: row.platform,
        queue: row.queue,
        cutoffs,
        pool_size,
    })
}

/// One full run: refresh every pair, then write the snapshot. Nothing is written on failure.
pub fn run_once<S: LeagueSource + ?Sized>(
    source: &S,
    table: &CutoffTable,
    cfg: &RunConfig,
) -> Result<CutoffSnapshot, CutoffError> {
    info!(
        pairs = table.rows().len(),
        parallelism = cfg.parallelism,
        "refreshing cutoffs"
    );
    let snapshot = refresh_cutoffs(source, table, &cfg.retry, cfg.parallelism, |pair| {
        println!("{}", pair.progress_line());
    })
    .inspect_err(|err| error!("{err}"))?;

    write_snapshot(&cfg.output_path, &snapshot)?;
    info!(path = %cfg.output_path.display(), "cutoffs written");
    Ok(snapshot)
}

fn with_fetch_pool<T>(threads: usize, action: impl FnOnce() -> T + Send) -> T
where
    T: Send,
{
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(action),
        Err(_) => action(),
    }
}
