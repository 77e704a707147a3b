use super::record::MatchRecord;
use super::team::Team;
use crate::Arbitrary;
use crate::HeroId;
use serde::Deserialize;
use serde::Serialize;

/// canonical roster key: hero ids in sorted order. identical rosters
/// collapse to the same composition regardless of team label or the
/// ordering participants were recorded in. canonicalization survives
/// the wire by routing serde through the id list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<HeroId>", into = "Vec<HeroId>")]
pub struct Composition(Vec<HeroId>);

impl Composition {
    pub fn heroes(&self) -> &[HeroId] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<HeroId>> for Composition {
    fn from(mut heroes: Vec<HeroId>) -> Self {
        heroes.sort_unstable();
        Self(heroes)
    }
}
impl From<&[HeroId]> for Composition {
    fn from(heroes: &[HeroId]) -> Self {
        Self::from(heroes.to_vec())
    }
}
impl From<Composition> for Vec<HeroId> {
    fn from(composition: Composition) -> Self {
        composition.0
    }
}
impl FromIterator<HeroId> for Composition {
    fn from_iter<I: IntoIterator<Item = HeroId>>(heroes: I) -> Self {
        Self::from(heroes.into_iter().collect::<Vec<HeroId>>())
    }
}

/// the roster one side fielded in one match, canonicalized.
impl From<(&MatchRecord, Team)> for Composition {
    fn from((record, team): (&MatchRecord, Team)) -> Self {
        record.side(team).collect()
    }
}

impl std::fmt::Display for Composition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let ids = self
            .0
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<String>>();
        write!(f, "{}", ids.join(","))
    }
}

impl Arbitrary for Composition {
    fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        (0..rng.random_range(1..=5))
            .map(|_| rng.random_range(0..16))
            .collect()
    }
}
