use crate::league::{
    ConfigurationError, Game, LeagueSettings, LeagueTable, ScheduleReport, simulate_season,
};
use crate::utils::Logging;
use crate::{Team, TeamCollection};
use chrono::NaiveDate;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub settings: LeagueSettings,
    pub teams: TeamCollection,
    pub games: Vec<Game>,
    pub table: LeagueTable,
    pub report: Option<ScheduleReport>,
}

impl League {
    pub fn new(id: u32, name: String, settings: LeagueSettings) -> Result<Self, ConfigurationError> {
        settings.validate()?;

        Ok(League {
            id,
            name,
            settings,
            teams: TeamCollection::default(),
            games: Vec::new(),
            table: LeagueTable::default(),
            report: None,
        })
    }

    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.teams = TeamCollection::new(teams);
        self
    }

    /// Re-simulates the whole season and swaps the result in.
    ///
    /// Validation runs against the teams the league actually holds. On error
    /// nothing changes; on success every previous game, record and rank is
    /// replaced. Taking `&mut self` keeps two runs for one league from
    /// interleaving.
    pub fn simulate<R: Rng + ?Sized>(
        &mut self,
        start_date: NaiveDate,
        rng: &mut R,
    ) -> Result<&ScheduleReport, ConfigurationError> {
        let message = format!("simulate league: {}", self.name);

        let season = Logging::estimate_result(
            || simulate_season(&self.teams.teams, self.settings.games_per_team, start_date, &mut *rng),
            &message,
        )?;

        info!(
            "league {} replaced {} games with {}",
            self.name,
            self.games.len(),
            season.games.len()
        );

        self.teams = TeamCollection::new(season.teams);
        self.games = season.games;
        self.table = season.table;

        Ok(&*self.report.insert(season.report))
    }

    /// Drops the current season and resets every team's record.
    pub fn clear_season(&mut self) {
        self.games.clear();
        self.table = LeagueTable::default();
        self.report = None;

        for team in &mut self.teams.teams {
            team.reset_record();
        }
    }

    pub fn update_settings(&mut self, settings: LeagueSettings) -> Result<(), ConfigurationError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Actual number of teams. Can be lower than the configured count when
    /// roster generation ran out of names.
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn team(&self, team_id: u32) -> Option<&Team> {
        self.teams.by_id(team_id)
    }

    /// Games a team takes part in, earliest first.
    pub fn team_schedule(&self, team_id: u32) -> Vec<&Game> {
        let mut games: Vec<&Game> = self.games.iter().filter(|g| g.involves(team_id)).collect();
        games.sort_by_key(|g| (g.date, g.id));
        games
    }

    /// Games of every team whose name contains `fragment`, case-insensitive.
    /// An empty fragment lists all games, most recently created first.
    pub fn games_for_team_name(&self, fragment: &str) -> Vec<&Game> {
        let fragment = fragment.trim();

        if fragment.is_empty() {
            return self.games.iter().rev().collect();
        }

        let team_ids: Vec<u32> = self
            .teams
            .name_contains(fragment)
            .iter()
            .map(|t| t.id)
            .collect();

        self.games
            .iter()
            .filter(|g| team_ids.iter().any(|id| g.involves(*id)))
            .collect()
    }

    /// Teams ordered by standings position, then wins desc, losses asc.
    /// Unranked teams (rank 0) come after ranked ones.
    pub fn standings(&self) -> Vec<&Team> {
        let mut teams: Vec<&Team> = self.teams.teams.iter().collect();
        teams.sort_by_key(|t| (t.rank == 0, t.rank, Reverse(t.wins), t.losses));
        teams
    }

    /// "<home> vs <away> - Winner: <winner>"
    pub fn describe_game(&self, game: &Game) -> Option<String> {
        let home = self.team(game.home_team_id)?;
        let away = self.team(game.away_team_id)?;

        let winner = game
            .winner_id
            .and_then(|id| self.team(id))
            .map(|t| t.to_string())
            .unwrap_or_default();

        Some(format!("{} vs {} - Winner: {}", home, away, winner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
    }

    fn team(id: u32, name: &str) -> Team {
        Team::builder()
            .id(id)
            .name(name.to_string())
            .city("Boston".to_string())
            .build()
            .unwrap()
    }

    fn league(games_per_team: u32) -> League {
        League::new(1, "Test League".to_string(), LeagueSettings::new(4, games_per_team))
            .unwrap()
            .with_teams(vec![
                team(1, "Hawks"),
                team(2, "Lions"),
                team(3, "Blackhawks"),
                team(4, "Tide"),
            ])
    }

    #[test]
    fn new_rejects_invalid_settings() {
        let result = League::new(1, "Tiny".to_string(), LeagueSettings::new(1, 1));

        assert_eq!(result.unwrap_err(), ConfigurationError::NotEnoughTeams { teams: 1 });
    }

    #[test]
    fn simulate_swaps_in_a_full_season() {
        let mut rng = StdRng::seed_from_u64(100);
        let mut league = league(3);

        let report = league.simulate(start(), &mut rng).unwrap();

        assert_eq!(report.total_games, 6);
        assert_eq!(league.games.len(), 6);
        assert_eq!(league.table.rows.len(), 4);
        assert!(league.teams.teams.iter().all(|t| t.rank > 0));
    }

    #[test]
    fn resimulation_does_not_accumulate() {
        let mut rng = StdRng::seed_from_u64(55);
        let mut league = league(5);

        league.simulate(start(), &mut rng).unwrap();
        league.simulate(start(), &mut rng).unwrap();

        let records: u32 = league.teams.teams.iter().map(|t| t.wins + t.losses).sum();
        assert_eq!(records as usize, 2 * league.games.len());
    }

    #[test]
    fn simulate_with_too_few_teams_keeps_previous_season() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut league = league(3);
        league.simulate(start(), &mut rng).unwrap();

        let games = league.games.clone();
        league.teams = TeamCollection::new(vec![team(1, "Hawks")]);

        assert!(league.simulate(start(), &mut rng).is_err());
        assert_eq!(league.games, games);
        assert!(league.report.is_some());
    }

    #[test]
    fn update_settings_is_validated() {
        let mut league = league(3);

        assert!(league.update_settings(LeagueSettings::new(4, 2)).is_err());
        assert_eq!(league.settings.games_per_team, 3);

        assert!(league.update_settings(LeagueSettings::new(4, 6)).is_ok());
        assert_eq!(league.settings.games_per_team, 6);
    }

    #[test]
    fn team_schedule_is_sorted_by_date() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut league = league(6);
        league.simulate(start(), &mut rng).unwrap();

        let schedule = league.team_schedule(2);

        assert_eq!(schedule.len(), 6);
        assert!(schedule.iter().all(|g| g.involves(2)));
        assert!(schedule.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn games_filter_by_team_name() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut league = league(3);
        league.simulate(start(), &mut rng).unwrap();

        // "hawks" matches Hawks and Blackhawks
        let games = league.games_for_team_name("HAWKS");
        assert_eq!(games.len(), 5);
        assert!(games.iter().all(|g| g.involves(1) || g.involves(3)));

        assert!(league.games_for_team_name("Giants").is_empty());

        let all = league.games_for_team_name("  ");
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].id, 6);
    }

    #[test]
    fn standings_follow_rank() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut league = league(3);
        league.simulate(start(), &mut rng).unwrap();

        let ranks: Vec<u32> = league.standings().iter().map(|t| t.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn clear_season_resets_records() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut league = league(3);
        league.simulate(start(), &mut rng).unwrap();

        league.clear_season();

        assert!(league.games.is_empty());
        assert!(league.report.is_none());
        assert!(league.teams.teams.iter().all(|t| t.wins == 0 && t.losses == 0 && t.rank == 0));
    }

    #[test]
    fn describe_game_names_the_winner() {
        let mut rng = StdRng::seed_from_u64(34);
        let mut league = league(3);
        league.simulate(start(), &mut rng).unwrap();

        let game = &league.games[0];
        let description = league.describe_game(game).unwrap();

        assert!(description.starts_with("Boston Hawks vs Boston Lions - Winner: Boston "));
    }
}
