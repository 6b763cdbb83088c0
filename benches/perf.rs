use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use lp_cutoffs::cutoff_table::{CutoffTargets, DefaultFloors};
use lp_cutoffs::ladder::{
    LadderLists, LeagueEntry, compute_cutoffs, merge_ladder, parse_league_list_json,
};

fn sample_lists(count: usize) -> LadderLists {
    let mut lists = LadderLists::default();
    for idx in 0..count {
        // Scrambled so the sort has real work to do.
        let lp = ((idx * 7_919) % 2_500) as i64;
        let entry = LeagueEntry::with_points(lp);
        match idx % 3 {
            0 => lists.challenger.push(entry),
            1 => lists.grandmaster.push(entry),
            _ => lists.master.push(entry),
        }
    }
    lists
}

fn bench_merge_ladder(c: &mut Criterion) {
    let lists = sample_lists(6_000);
    c.bench_function("merge_ladder", |b| {
        b.iter(|| {
            let ladder = merge_ladder(black_box(lists.clone()));
            black_box(ladder.len());
        })
    });
}

fn bench_compute_cutoffs(c: &mut Criterion) {
    let ladder = merge_ladder(sample_lists(6_000));
    let targets = CutoffTargets::new(300, 700);
    c.bench_function("compute_cutoffs", |b| {
        b.iter(|| {
            let cutoffs = compute_cutoffs(
                black_box(&ladder),
                black_box(targets),
                DefaultFloors::default(),
            );
            black_box(cutoffs);
        })
    });
}

fn bench_league_parse(c: &mut Criterion) {
    c.bench_function("league_list_parse", |b| {
        b.iter(|| {
            let list = parse_league_list_json(black_box(CHALLENGER_JSON)).unwrap();
            black_box(list.entries.len());
        })
    });
}

criterion_group!(
    perf,
    bench_merge_ladder,
    bench_compute_cutoffs,
    bench_league_parse
);
criterion_main!(perf);

static CHALLENGER_JSON: &str = include_str!("../tests/fixtures/challenger_league.json");
