use super::matrix::Matchups;
use crate::error::Error;
use crate::Advantage;
use crate::HeroId;
use crate::Probability;

impl Matchups {
    /// aggregate advantage of team1 over team2: the sum of every
    /// cross-roster matrix entry.
    pub fn score(&self, team1: &[HeroId], team2: &[HeroId]) -> Result<Advantage, Error> {
        let mut score = 0.;
        for &a in team1 {
            for &b in team2 {
                score += self.advantage(a, b)?;
            }
        }
        Ok(score)
    }

    /// logistic win probability of team1 over team2, strictly inside
    /// (0, 1) for any finite matrix. rows are normalized independently
    /// per hero, so predict(b, a) is only approximately the complement
    /// of predict(a, b).
    pub fn predict(&self, team1: &[HeroId], team2: &[HeroId]) -> Result<Probability, Error> {
        for &hero in team1.iter().chain(team2.iter()) {
            self.index(hero)?;
        }
        self.score(team1, team2).map(|s| 1. / (1. + (-s).exp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog::Catalog;
    use crate::catalog::hero::Hero;
    use crate::history::record::MatchRecord;
    use crate::history::team::Team;

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
    fn probabilities_stay_strictly_inside_unit_interval() {
        let catalog = catalog(4);
        let history = vec![duel(0, 1); 100];
        let matchups = Matchups::try_from((&catalog, history.as_slice())).unwrap();
        let p = matchups.predict(&[0, 2], &[1, 3]).unwrap();
        assert!(p > 0. && p < 1.);
    }

    #[test]
    fn empty_history_predicts_even_odds() {
        let catalog = catalog(6);
        let matchups = Matchups::try_from((&catalog, [].as_slice())).unwrap();
        assert_eq!(matchups.predict(&[0, 1, 2], &[3, 4, 5]).unwrap(), 0.5);
    }

    #[test]
    fn dominant_hero_beats_its_victim() {
        let catalog = catalog(2);
        let history = vec![duel(0, 1); 10];
        let matchups = Matchups::try_from((&catalog, history.as_slice())).unwrap();
        assert!(matchups.predict(&[0], &[1]).unwrap() > 0.5);
        assert!(matchups.predict(&[1], &[0]).unwrap() < 0.5);
    }

    #[test]
    fn reversed_prediction_is_not_the_exact_complement() {
        let catalog = catalog(3);
        let history = vec![duel(0, 1), duel(0, 2), duel(0, 2), duel(0, 2), duel(1, 2)];
        let matchups = Matchups::try_from((&catalog, history.as_slice())).unwrap();
        let forward = matchups.predict(&[0], &[1]).unwrap();
        let reverse = matchups.predict(&[1], &[0]).unwrap();
        assert!(forward > 0.5);
        assert!(reverse < 0.5);
        assert!((forward + reverse - 1.).abs() > 0.01);
    }

    #[test]
    fn unknown_roster_member_is_rejected() {
        let catalog = catalog(2);
        let matchups = Matchups::try_from((&catalog, [].as_slice())).unwrap();
        assert_eq!(
            matchups.predict(&[0], &[9]).unwrap_err(),
            Error::UnknownHero(9),
        );
    }
}
