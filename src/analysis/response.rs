use crate::history::composition::Composition;
use crate::Advantage;
use crate::HeroId;
use crate::Payoff;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;

/// which roster a signed advantage favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Favors {
    Team1,
    Team2,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroRef {
    pub id: HeroId,
    pub name: String,
}

/// one significant hero-versus-hero edge inside a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMatchup {
    pub hero1: HeroRef,
    pub hero2: HeroRef,
    pub advantage: Advantage,
    pub favors: Favors,
}

/// predicted outcome of team1 against team2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub win_probability: Probability,
    pub confidence: f64,
    pub key_matchups: Vec<KeyMatchup>,
}

/// one countered enemy inside a recommendation explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Countered {
    pub id: HeroId,
    pub name: String,
    pub advantage: Advantage,
}

/// why one recommended hero made the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub id: HeroId,
    pub name: String,
    pub counters: Vec<Countered>,
    pub overall_value: Advantage,
}

/// counter roster against a fixed enemy team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommended_team: Vec<HeroId>,
    pub win_probability: Probability,
    pub hero_explanations: Vec<Explanation>,
}

/// per-hero aggregates over one history snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroPerformance {
    pub id: HeroId,
    pub name: String,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub pick_rate: f64,
}

/// storage-facing per-composition record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionRecord {
    pub heroes: Composition,
    pub win_count: usize,
    pub loss_count: usize,
    pub win_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equilibrium_value: Option<Payoff>,
}
