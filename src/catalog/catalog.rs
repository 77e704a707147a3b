use super::hero::Hero;
use crate::error::Error;
use crate::Arbitrary;
use crate::HeroId;
use std::collections::BTreeMap;

/// ordered hero collection defining the hero <-> matrix index
/// bijection. the ordering is fixed for the duration of one analysis
/// call; every operation that resolves ids against the catalog does so
/// through this one map.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    heroes: Vec<Hero>,
    index: BTreeMap<HeroId, usize>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.heroes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }
    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }
    pub fn ids(&self) -> Vec<HeroId> {
        self.heroes.iter().map(|h| h.id).collect()
    }
    pub fn contains(&self, id: HeroId) -> bool {
        self.index.contains_key(&id)
    }
    /// matrix index of a hero id.
    pub fn index(&self, id: HeroId) -> Result<usize, Error> {
        self.index.get(&id).copied().ok_or(Error::UnknownHero(id))
    }
    pub fn hero(&self, id: HeroId) -> Result<&Hero, Error> {
        self.index(id).map(|i| &self.heroes[i])
    }
    /// display name, falling back to the bare id for heroes the
    /// catalog has never heard of.
    pub fn name(&self, id: HeroId) -> String {
        self.hero(id)
            .map(|h| h.name.clone())
            .unwrap_or_else(|_| format!("#{}", id))
    }
}

impl From<Vec<Hero>> for Catalog {
    fn from(heroes: Vec<Hero>) -> Self {
        let index = heroes
            .iter()
            .enumerate()
            .map(|(i, h)| (h.id, i))
            .collect::<BTreeMap<HeroId, usize>>();
        assert!(index.len() == heroes.len(), "duplicate hero ids in catalog");
        Self { heroes, index }
    }
}

impl Arbitrary for Catalog {
    fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let n = rng.random_range(2..=16);
        Self::from(
            (0..n)
                .map(|id| Hero {
                    id,
                    name: format!("hero-{}", id),
                })
                .collect::<Vec<Hero>>(),
        )
    }
}
