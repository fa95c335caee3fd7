mod config;

use chrono::Utc;
use config::AppConfig;
use env_logger::Env;
use league_core::League;
use league_core::utils::TimeEstimation;
use league_database::{NamePoolLoader, RosterGenerator};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Leagues keyed by id. Each league sits behind its own lock so a
/// re-simulation holds exclusive access to that league only.
#[derive(Default)]
struct LeagueStore {
    leagues: RwLock<HashMap<u32, Arc<RwLock<League>>>>,
}

impl LeagueStore {
    async fn insert(&self, league: League) -> Arc<RwLock<League>> {
        let league_id = league.id;
        let league = Arc::new(RwLock::new(league));

        self.leagues.write().await.insert(league_id, Arc::clone(&league));

        league
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let (pools, estimated) = TimeEstimation::estimate(NamePoolLoader::load);
    let pools = pools?;

    info!("name pools loaded: {} ms", estimated);

    let roster = RosterGenerator::generate(&config.roster_settings(), &pools, &mut rng)?;
    if roster.is_capped() {
        warn!(
            "only {} of {} requested teams could be created",
            roster.created_teams, roster.requested_teams
        );
    }

    let league = League::new(1, config.league_name.clone(), config.league_settings())?
        .with_teams(roster.teams);

    let store = LeagueStore::default();
    let league = store.insert(league).await;

    let start_date = Utc::now().date_naive();

    for run in 0..=config.resimulations {
        let mut league = league.write().await;

        let report = league.simulate(start_date, &mut rng)?;
        info!(
            "run {}: {} games scheduled, complete: {}",
            run + 1,
            report.total_games,
            report.is_complete()
        );
    }

    let league = league.read().await;

    info!("final standings for {}", league.name);
    for team in league.standings() {
        info!(
            "{:>2}. {:<24} {:>3}-{:<3} stars: {}",
            team.rank,
            team.to_string(),
            team.wins,
            team.losses,
            team.star_count()
        );
    }

    if let Some(champion) = league.table.leader().and_then(|row| league.team(row.team_id)) {
        info!("champion: {} ({}-{})", champion, champion.wins, champion.losses);
    }

    Ok(())
}
