use super::team::Team;
use crate::Arbitrary;
use crate::HeroId;
use serde::Deserialize;
use serde::Serialize;

/// one participant row of a recorded match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "hero_id")]
    pub hero: HeroId,
    pub team: Team,
}

/// one recorded contest between two rosters. a record contributes to
/// analytics only when both sides are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "winner_team")]
    pub winner: Team,
    pub participants: Vec<Participant>,
}

impl MatchRecord {
    pub fn side(&self, team: Team) -> impl Iterator<Item = HeroId> + '_ {
        self.participants
            .iter()
            .filter(move |p| p.team == team)
            .map(|p| p.hero)
    }
    pub fn winners(&self) -> impl Iterator<Item = HeroId> + '_ {
        self.side(self.winner)
    }
    pub fn losers(&self) -> impl Iterator<Item = HeroId> + '_ {
        self.side(self.winner.opponent())
    }
    /// both sides fielded at least one hero.
    pub fn decided(&self) -> bool {
        self.winners().next().is_some() && self.losers().next().is_some()
    }
}

impl From<(Vec<HeroId>, Vec<HeroId>, Team)> for MatchRecord {
    fn from((team1, team2, winner): (Vec<HeroId>, Vec<HeroId>, Team)) -> Self {
        let participants = team1
            .into_iter()
            .map(|hero| Participant {
                hero,
                team: Team::One,
            })
            .chain(team2.into_iter().map(|hero| Participant {
                hero,
                team: Team::Two,
            }))
            .collect();
        Self {
            winner,
            participants,
        }
    }
}

impl Arbitrary for MatchRecord {
    fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let split = rng.random_range(1..=5);
        let participants = (0..split + rng.random_range(1..=5))
            .map(|i| Participant {
                hero: rng.random_range(0..16),
                team: if i < split { Team::One } else { Team::Two },
            })
            .collect();
        Self {
            winner: Team::random(),
            participants,
        }
    }
}
