use chrono::NaiveDate;
use league_core::utils::{FloatUtils, IntegerUtils};
use league_core::{FullName, Player, PlayerPositionType};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;

use crate::generators::RosterError;

/// Random picks tried before falling back to a scan of the remaining pairs.
const NAME_ATTEMPTS: usize = 64;

const MIN_BIRTH_YEAR: i32 = 1985;
const MAX_BIRTH_YEAR: i32 = 2005;

pub struct PlayerGenerator {
    first_names: Vec<String>,
    last_names: Vec<String>,
    used_names: HashSet<FullName>,
    star_probability: f64,
    next_id: u32,
}

impl PlayerGenerator {
    pub fn with_people_names(
        first_names: &[String],
        last_names: &[String],
        star_probability: f64,
    ) -> Self {
        PlayerGenerator {
            first_names: unique(first_names),
            last_names: unique(last_names),
            used_names: HashSet::new(),
            star_probability,
            next_id: 1,
        }
    }

    /// Unique (first, last) pairs still available.
    pub fn remaining_names(&self) -> usize {
        self.first_names.len() * self.last_names.len() - self.used_names.len()
    }

    /// Player ids start at 1 for every generator.
    pub fn generate<R: Rng + ?Sized>(&mut self, team_id: u32, rng: &mut R) -> Result<Player, RosterError> {
        let is_star = FloatUtils::chance(rng, self.star_probability);
        let full_name = self.generate_full_name(rng)?;

        let position = *PlayerPositionType::ALL
            .choose(rng)
            .unwrap_or(&PlayerPositionType::Forward);

        let id = self.next_id;
        self.next_id += 1;

        Player::builder()
            .id(id)
            .team_id(team_id)
            .full_name(full_name)
            .position(position)
            .is_star(is_star)
            .birth_date(Self::generate_birth_date(rng))
            .build()
            .map_err(RosterError::Build)
    }

    fn generate_full_name<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<FullName, RosterError> {
        if self.remaining_names() == 0 {
            return Err(RosterError::NamePoolExhausted);
        }

        for _ in 0..NAME_ATTEMPTS {
            let name = FullName::new(
                self.first_names[IntegerUtils::random_index(rng, self.first_names.len())].clone(),
                self.last_names[IntegerUtils::random_index(rng, self.last_names.len())].clone(),
            );

            if self.used_names.insert(name.clone()) {
                return Ok(name);
            }
        }

        // pools close to exhaustion, walk the pairs from a random offset
        let total = self.first_names.len() * self.last_names.len();
        let offset = IntegerUtils::random_index(rng, total);

        for step in 0..total {
            let pair = (offset + step) % total;
            let name = FullName::new(
                self.first_names[pair / self.last_names.len()].clone(),
                self.last_names[pair % self.last_names.len()].clone(),
            );

            if self.used_names.insert(name.clone()) {
                return Ok(name);
            }
        }

        Err(RosterError::NamePoolExhausted)
    }

    fn generate_birth_date<R: Rng + ?Sized>(rng: &mut R) -> NaiveDate {
        let year = IntegerUtils::random(rng, MIN_BIRTH_YEAR, MAX_BIRTH_YEAR);
        let month = IntegerUtils::random(rng, 1, 12) as u32;
        let day = IntegerUtils::random(rng, 1, 28) as u32;

        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }
}

fn unique(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(names.len());

    names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn every_pair_is_handed_out_once() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut generator =
            PlayerGenerator::with_people_names(&names(&["A", "B", "C"]), &names(&["X", "Y"]), 0.2);

        let mut seen = HashSet::new();
        for _ in 0..6 {
            let player = generator.generate(1, &mut rng).unwrap();
            assert!(seen.insert(player.full_name));
        }

        assert_eq!(generator.remaining_names(), 0);
        assert!(matches!(
            generator.generate(1, &mut rng),
            Err(RosterError::NamePoolExhausted)
        ));
    }

    #[test]
    fn duplicate_pool_entries_do_not_count_twice() {
        let generator =
            PlayerGenerator::with_people_names(&names(&["A", "A", "B"]), &names(&["X", "X"]), 0.2);

        assert_eq!(generator.remaining_names(), 2);
    }

    #[test]
    fn star_probability_edges() {
        let mut rng = StdRng::seed_from_u64(10);
        let first = names(&["A", "B", "C", "D", "E", "F", "G", "H"]);
        let last = names(&["X", "Y", "Z", "W"]);

        let mut never = PlayerGenerator::with_people_names(&first, &last, 0.0);
        let mut always = PlayerGenerator::with_people_names(&first, &last, 1.0);

        for _ in 0..16 {
            assert!(!never.generate(1, &mut rng).unwrap().is_star);
            assert!(always.generate(1, &mut rng).unwrap().is_star);
        }
    }

    #[test]
    fn birth_dates_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..500 {
            let date = PlayerGenerator::generate_birth_date(&mut rng);

            assert!((MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&date.year()));
            assert!(date.day() <= 28);
        }
    }

    #[test]
    fn ids_are_sequential_per_generator() {
        let mut rng = StdRng::seed_from_u64(2);
        let first = names(&["A", "B"]);
        let last = names(&["X", "Y"]);

        for _ in 0..2 {
            let mut generator = PlayerGenerator::with_people_names(&first, &last, 0.5);
            let ids: Vec<u32> = (0..4).map(|_| generator.generate(1, &mut rng).unwrap().id).collect();

            assert_eq!(ids, vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn player_belongs_to_requested_team() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut generator = PlayerGenerator::with_people_names(&names(&["A"]), &names(&["X"]), 0.2);

        assert_eq!(generator.generate(77, &mut rng).unwrap().team_id, 77);
    }
}
