use crate::league::{
    ConfigurationError, Game, GameScorer, LeagueTable, ScheduleReport, Scheduler, SeasonResult,
    TeamScheduleEntry,
};
use crate::Team;
use chrono::NaiveDate;
use log::{debug, info, warn};
use rand::Rng;
use std::collections::HashMap;

/// Schedules, plays and ranks a full season.
///
/// `teams` is only read: the returned [`SeasonResult`] carries fresh copies
/// with records reset before the first game, so a rejected configuration
/// leaves the caller's data untouched and a re-simulation never accumulates
/// results from an earlier run.
pub fn simulate_season<R: Rng + ?Sized>(
    teams: &[Team],
    games_per_team: u32,
    start_date: NaiveDate,
    rng: &mut R,
) -> Result<SeasonResult, ConfigurationError> {
    let mut scheduler = Scheduler::new(
        teams.iter().map(|t| t.id).collect(),
        games_per_team,
        start_date,
    )?;

    let mut teams: Vec<Team> = teams.to_vec();

    let mut index: HashMap<u32, usize> = HashMap::with_capacity(teams.len());
    for (idx, team) in teams.iter_mut().enumerate() {
        team.reset_record();
        team.refresh_star_multiplier();
        index.insert(team.id, idx);
    }

    let star_bonus: HashMap<u32, u32> = teams.iter().map(|t| (t.id, t.star_count())).collect();

    let mut games = Vec::new();
    let mut rounds = Vec::with_capacity(games_per_team as usize);

    while !scheduler.is_finished() {
        let scheduled = scheduler.schedule_next_round(rng);
        rounds.push(scheduled.len());

        for item in scheduled {
            let mut game = Game::new(
                games.len() as u32 + 1,
                item.home_team_id,
                item.away_team_id,
                item.date,
            );

            let home_bonus = star_bonus[&item.home_team_id];
            let away_bonus = star_bonus[&item.away_team_id];

            if let Some(outcome) = GameScorer::score(&mut game, home_bonus, away_bonus, rng) {
                teams[index[&outcome.winner_id]].wins += 1;
                teams[index[&outcome.loser_id]].losses += 1;
            }

            debug!(
                "game {} on {}: {} {} - {} {}",
                game.id,
                game.date,
                game.home_team_id,
                game.home_points,
                game.away_points,
                game.away_team_id
            );

            games.push(game);
        }
    }

    let table = LeagueTable::rank(&mut teams);

    let report = ScheduleReport {
        games_per_team,
        total_games: games.len(),
        rounds,
        teams: scheduler
            .team_ids()
            .iter()
            .map(|&team_id| TeamScheduleEntry {
                team_id,
                games_played: scheduler.games_played(team_id).unwrap_or(0),
                shortfall: scheduler.shortfall(team_id).unwrap_or(0),
            })
            .collect(),
    };

    if !report.is_complete() {
        for entry in report.under_scheduled() {
            warn!(
                "team {} played {} of {} games, pairings exhausted",
                entry.team_id, entry.games_played, games_per_team
            );
        }
    }

    info!(
        "season simulated: {} teams, {} games, {} games per team",
        teams.len(),
        report.total_games,
        games_per_team
    );

    Ok(SeasonResult {
        games,
        teams,
        table,
        report,
    })
}
