use crate::Arbitrary;
use crate::HeroId;
use serde::Deserialize;
use serde::Serialize;

/// one entry of the hero catalog as supplied by the upstream roster
/// service. the position of an entry within the catalog fixes its
/// matrix index for the duration of one analysis call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

impl std::fmt::Display for Hero {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

impl From<(HeroId, &str)> for Hero {
    fn from((id, name): (HeroId, &str)) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

impl Arbitrary for Hero {
    fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let id = rng.random_range(0..64);
        Self {
            id,
            name: format!("hero-{}", id),
        }
    }
}
