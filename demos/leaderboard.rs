//! Season Leaderboard Demo
//!
//! Ranks a season's worth of players three ways:
//! - offline top decile with quickselect
//! - offline top decile with an in-place heap
//! - a live streaming leaderboard that never holds more than R players
//!
//! Run with: cargo run --example leaderboard --release
//! Set `RUST_LOG=trueno_rank=debug` to see per-algorithm summaries.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use trueno_rank::offline::{heap_rank, quickselect_rank};
use trueno_rank::online::rank_with_config;
use trueno_rank::source::IterSource;
use trueno_rank::{Player, RankingResult, Ranked, StreamConfig};

const NUM_PLAYERS: usize = 100_000;
const REPORTING_INTERVAL: usize = 50;
const CUTOFFS_SHOWN: usize = 8;

const NAMES: [&str; 10] = [
    "RECLUSE", "WYLDER", "DUCHESS", "RAIDER", "REVENANT", "GUARDIAN", "IRONEYE", "EXECUTOR",
    "SCHOLAR", "UNDERTAKER",
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    print_banner();

    let roster = generate_players(NUM_PLAYERS, 7);
    info!(players = roster.len(), "roster generated");

    // Offline: the population is known up front
    let mut population = roster.clone();
    let by_partition = quickselect_rank(&mut population);
    print_result("🏆 Top 10% (quickselect)", &by_partition);

    let mut population = roster;
    let by_heap = heap_rank(&mut population);
    print_result("🏆 Top 10% (heap)", &by_heap);

    anyhow::ensure!(
        by_partition.levels() == by_heap.levels(),
        "offline selectors disagree"
    );
    println!("✅ Both offline selectors agree on {} levels", by_heap.len());
    println!();

    // Online: players arrive one at a time and are never materialized
    let config = StreamConfig::builder()
        .reporting_interval(REPORTING_INTERVAL)
        .build()?;
    let mut rng = StdRng::seed_from_u64(11);
    let mut stream = IterSource::new((0..NUM_PLAYERS).map(move |i| random_player(&mut rng, i)));
    let live = rank_with_config(&mut stream, &config)?;
    print_result("📡 Live leaderboard (streaming)", &live);
    print_cutoffs(&live);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ Demo complete!");
    println!();
    Ok(())
}

fn print_banner() {
    println!();
    println!("╔═══════════════════════════════════════════════════════╗");
    println!("║  🎮 SEASON LEADERBOARDS - Top-K Selection             ║");
    println!("║  ⚡ Powered by Trueno-Rank                            ║");
    println!("╚═══════════════════════════════════════════════════════╝");
    println!();
}

fn generate_players(count: usize, seed: u64) -> Vec<Player> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|i| random_player(&mut rng, i)).collect()
}

fn random_player(rng: &mut StdRng, index: usize) -> Player {
    let name = format!("{}_{index:06}", NAMES[index % NAMES.len()]);
    // Most players sit around 200-800, a few break 1000
    let base: u32 = rng.gen_range(200..800);
    let bonus: u32 = if rng.gen_ratio(1, 100) {
        rng.gen_range(200..600)
    } else {
        0
    };
    Player::new(name, base + bonus)
}

fn print_result(title: &str, result: &RankingResult<Player>) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{title}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("⚡ Compute Time: {:.3}ms", result.elapsed_ms());
    println!("📋 Selected: {} players", result.len());
    println!();
    println!("  Rank  Player                 Level");
    println!("  ────  ─────────────────────  ─────");

    // `top` is ascending, the leaderboard reads best-first
    for (i, player) in result.top().iter().rev().take(5).enumerate() {
        let medal = match i {
            0 => "🥇",
            1 => "🥈",
            2 => "🥉",
            _ => "  ",
        };
        println!("  {medal} {:>2}  {:<21}  {:>5}", i + 1, player.name(), player.level());
    }
    if let Some(min) = result.min_level() {
        println!("  ...   (lowest selected level: {min})");
    }
    println!();
}

fn print_cutoffs(result: &RankingResult<Player>) {
    println!("📈 Admission threshold by players read:");
    let cutoffs = result.cutoffs();
    for (count, level) in cutoffs.iter().take(CUTOFFS_SHOWN) {
        println!("    {count:>7} → {level}");
    }
    if cutoffs.len() > CUTOFFS_SHOWN {
        if let Some((count, level)) = cutoffs.iter().next_back() {
            println!("    ...");
            println!("    {count:>7} → {level}");
        }
    }
    println!();
}
