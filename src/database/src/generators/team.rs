use league_core::Team;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use crate::generators::{PlayerGenerator, RosterError};

pub struct TeamGenerator {
    team_names: Vec<String>,
    cities: Vec<String>,
    created: usize,
}

impl TeamGenerator {
    /// Shuffles both pools once; team names are de-duplicated, cities may repeat.
    pub fn new<R: Rng + ?Sized>(team_names: &[String], cities: &[String], rng: &mut R) -> Self {
        let mut seen = HashSet::with_capacity(team_names.len());

        let mut team_names: Vec<String> = team_names
            .iter()
            .filter(|name| seen.insert(name.as_str()))
            .cloned()
            .collect();

        let mut cities = cities.to_vec();

        team_names.shuffle(rng);
        cities.shuffle(rng);

        TeamGenerator {
            team_names,
            cities,
            created: 0,
        }
    }

    /// Unique team names still available.
    pub fn remaining_names(&self) -> usize {
        self.team_names.len() - self.created
    }

    /// Team ids follow creation order, starting at 1.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        players_per_team: u32,
        player_generator: &mut PlayerGenerator,
        rng: &mut R,
    ) -> Result<Team, RosterError> {
        if self.cities.is_empty() {
            return Err(RosterError::EmptyNamePool("city"));
        }

        let name = self
            .team_names
            .get(self.created)
            .cloned()
            .ok_or(RosterError::EmptyNamePool("team name"))?;

        let city = self.cities[self.created % self.cities.len()].clone();

        let id = self.created as u32 + 1;

        let players = (0..players_per_team)
            .map(|_| player_generator.generate(id, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;

        self.created += 1;

        Team::builder()
            .id(id)
            .name(name)
            .city(city)
            .players(players)
            .build()
            .map_err(RosterError::Build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn player_generator() -> PlayerGenerator {
        PlayerGenerator::with_people_names(
            &names(&["A", "B", "C", "D", "E"]),
            &names(&["V", "W", "X", "Y", "Z"]),
            0.2,
        )
    }

    #[test]
    fn duplicate_team_names_are_skipped() {
        let mut rng = StdRng::seed_from_u64(3);
        let generator = TeamGenerator::new(&names(&["Hawks", "Hawks", "Tide"]), &names(&["Miami"]), &mut rng);

        assert_eq!(generator.remaining_names(), 2);
    }

    #[test]
    fn cities_repeat_when_pool_is_short() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut players = player_generator();
        let mut generator = TeamGenerator::new(
            &names(&["Hawks", "Tide", "Kings"]),
            &names(&["Miami"]),
            &mut rng,
        );

        let teams: Vec<Team> = (0..3)
            .map(|_| generator.generate(5, &mut players, &mut rng).unwrap())
            .collect();

        assert_eq!(teams.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(teams.iter().all(|t| t.city == "Miami"));
        assert!(teams.iter().all(|t| t.players.len() == 5));
        assert!(teams.iter().all(|t| t.players.iter().all(|p| p.team_id == t.id)));

        let unique: HashSet<&str> = teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(unique.len(), 3);

        assert_eq!(generator.remaining_names(), 0);
        assert_eq!(
            generator.generate(5, &mut players, &mut rng).unwrap_err(),
            RosterError::EmptyNamePool("team name")
        );
    }

    #[test]
    fn empty_city_pool_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut players = player_generator();
        let mut generator = TeamGenerator::new(&names(&["Hawks"]), &[], &mut rng);

        assert_eq!(
            generator.generate(5, &mut players, &mut rng).unwrap_err(),
            RosterError::EmptyNamePool("city")
        );
    }
}
