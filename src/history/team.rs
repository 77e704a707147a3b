use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

/// side label of one recorded match. serialized as 1 or 2 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub fn opponent(self) -> Self {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

impl TryFrom<u8> for Team {
    type Error = String;
    fn try_from(label: u8) -> Result<Self, Self::Error> {
        match label {
            1 => Ok(Team::One),
            2 => Ok(Team::Two),
            n => Err(format!("invalid team label {}", n)),
        }
    }
}
impl From<Team> for u8 {
    fn from(team: Team) -> Self {
        match team {
            Team::One => 1,
            Team::Two => 2,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

impl Arbitrary for Team {
    fn random() -> Self {
        use rand::Rng;
        match rand::rng().random_range(1..=2) {
            1 => Team::One,
            _ => Team::Two,
        }
    }
}
