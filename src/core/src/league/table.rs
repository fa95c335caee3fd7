use crate::Team;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTableRow {
    pub rank: u32,
    pub team_id: u32,
    pub wins: u32,
    pub losses: u32,
}

impl LeagueTable {
    /// Orders teams by wins descending then losses ascending and writes the
    /// 1-based position into each team's `rank`. The sort is stable: teams
    /// with identical records keep the order they were passed in.
    pub fn rank(teams: &mut [Team]) -> LeagueTable {
        let order: Vec<usize> = teams
            .iter()
            .enumerate()
            .sorted_by(|(_, a), (_, b)| b.wins.cmp(&a.wins).then(a.losses.cmp(&b.losses)))
            .map(|(idx, _)| idx)
            .collect();

        let rows = order
            .into_iter()
            .enumerate()
            .map(|(position, idx)| {
                let team = &mut teams[idx];
                team.rank = position as u32 + 1;

                LeagueTableRow {
                    rank: team.rank,
                    team_id: team.id,
                    wins: team.wins,
                    losses: team.losses,
                }
            })
            .collect();

        LeagueTable { rows }
    }

    pub fn leader(&self) -> Option<&LeagueTableRow> {
        self.rows.first()
    }
}
