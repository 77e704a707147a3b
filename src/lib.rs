//! hero matchup analytics: pairwise advantage matrices over match
//! history, roster win probabilities, counter-roster search, and
//! maximin equilibria over observed team compositions.

pub mod analysis;
pub mod catalog;
pub mod equilibrium;
pub mod error;
pub mod history;
pub mod matchup;

/// normalized signed edge of one hero over another.
pub type Advantage = f64;
/// net win/loss evidence between team compositions.
pub type Payoff = f64;
/// strategy weights and predicted win chances.
pub type Probability = f64;
/// hero identifier as assigned by the upstream catalog.
pub type HeroId = u32;

/// conventional roster size targeted by counter search.
pub const TEAM_SIZE: usize = 5;
/// minimum |advantage| for a hero pair to count as a key matchup.
pub const KEY_MATCHUP_THRESHOLD: Advantage = 0.1;
/// key matchups reported per prediction.
pub const KEY_MATCHUP_LIMIT: usize = 5;
/// relevant match count at which prediction confidence saturates.
pub const CONFIDENCE_SATURATION: f64 = 100.;

/// hard cap on catalog size accepted by the matrix builder.
pub const MAX_HEROES: usize = 4096;
/// hard cap on match history length accepted by the builders.
pub const MAX_MATCHES: usize = 8_000_000;
/// hard cap on distinct compositions accepted by the payoff builder.
pub const MAX_COMPOSITIONS: usize = 2048;

/// pivot budget for the simplex solver.
pub const SIMPLEX_PIVOT_LIMIT: usize = 16_384;
/// feasibility and pivoting tolerance for the simplex solver.
pub const SIMPLEX_TOLERANCE: f64 = 1e-9;
/// acceptable deviation from 1 for a normalized distribution.
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-6;

/// random instance generation for tests and benchmarks.
pub trait Arbitrary {
    fn random() -> Self;
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
