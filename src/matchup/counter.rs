use super::matrix::Matchups;
use crate::error::Error;
use crate::HeroId;
use std::collections::BTreeSet;

impl Matchups {
    /// greedy counter search: rank the pool by aggregate advantage
    /// against the enemy roster and take the top k, best-first.
    /// candidates already on the enemy roster are excluded, duplicates
    /// collapse to their first occurrence, and ties keep pool order
    /// under the stable sort. this is a single-pass heuristic with no
    /// synergy among picks and no opponent response modeling.
    pub fn counters(
        &self,
        enemy: &[HeroId],
        pool: &[HeroId],
        k: usize,
    ) -> Result<Vec<HeroId>, Error> {
        let mut seen = BTreeSet::new();
        let mut scored = Vec::new();
        for &candidate in pool {
            self.index(candidate)?;
            if enemy.contains(&candidate) {
                continue;
            }
            if !seen.insert(candidate) {
                continue;
            }
            let score = self.score(&[candidate], enemy)?;
            scored.push((candidate, score));
        }
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        Ok(scored.into_iter().take(k).map(|(c, _)| c).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog::Catalog;
    use crate::catalog::hero::Hero;
    use crate::history::record::MatchRecord;
    use crate::history::team::Team;
    use crate::TEAM_SIZE;

    fn catalog(n: HeroId) -> Catalog {
        Catalog::from(
            (0..n)
                .map(|id| Hero {
                    id,
                    name: format!("hero-{}", id),
                })
                .collect::<Vec<Hero>>(),
        )
    }

    fn duel(winner: HeroId, loser: HeroId) -> MatchRecord {
        MatchRecord::from((vec![winner], vec![loser], Team::One))
    }

    #[test]
    fn strongest_counters_come_first() {
        let catalog = catalog(4);
        // hero 2 always beats hero 0; hero 3 splits its margin between 0 and 1
        let history = vec![duel(2, 0), duel(2, 0), duel(3, 0), duel(3, 1)];
        let matchups = Matchups::try_from((&catalog, history.as_slice())).unwrap();
        let picks = matchups.counters(&[0], &[1, 2, 3], 3).unwrap();
        assert_eq!(picks, vec![2, 3, 1]);
    }

    #[test]
    fn enemies_are_never_recommended() {
        let catalog = catalog(8);
        let matchups = Matchups::try_from((&catalog, [].as_slice())).unwrap();
        let enemy = [0, 1, 2];
        let picks = matchups
            .counters(&enemy, &catalog.ids(), TEAM_SIZE)
            .unwrap();
        assert!(picks.iter().all(|p| !enemy.contains(p)));
        assert!(picks.len() <= TEAM_SIZE);
    }

    #[test]
    fn results_are_unique() {
        let catalog = catalog(4);
        let matchups = Matchups::try_from((&catalog, [].as_slice())).unwrap();
        let picks = matchups.counters(&[0], &[1, 2, 1, 3, 2], TEAM_SIZE).unwrap();
        assert_eq!(picks, vec![1, 2, 3]);
    }

    #[test]
    fn ties_keep_pool_order() {
        let catalog = catalog(8);
        let matchups = Matchups::try_from((&catalog, [].as_slice())).unwrap();
        // all scores are zero on an empty history
        let picks = matchups.counters(&[0], &[5, 3, 7, 1], TEAM_SIZE).unwrap();
        assert_eq!(picks, vec![5, 3, 7, 1]);
    }

    #[test]
    fn short_pools_come_back_whole() {
        let catalog = catalog(8);
        let matchups = Matchups::try_from((&catalog, [].as_slice())).unwrap();
        let picks = matchups.counters(&[0], &[4, 2], TEAM_SIZE).unwrap();
        assert_eq!(picks, vec![4, 2]);
    }

    #[test]
    fn empty_pool_yields_empty_roster() {
        let catalog = catalog(4);
        let matchups = Matchups::try_from((&catalog, [].as_slice())).unwrap();
        assert_eq!(
            matchups.counters(&[0], &[], TEAM_SIZE).unwrap(),
            Vec::<HeroId>::new()
        );
    }

    #[test]
    fn unknown_candidates_are_rejected() {
        let catalog = catalog(2);
        let matchups = Matchups::try_from((&catalog, [].as_slice())).unwrap();
        assert_eq!(
            matchups.counters(&[0], &[1, 42], TEAM_SIZE).unwrap_err(),
            Error::UnknownHero(42),
        );
    }
}
