use crate::catalog::catalog::Catalog;
use crate::error::Error;
use crate::history::record::MatchRecord;
use crate::Advantage;
use crate::HeroId;
use crate::MAX_HEROES;
use crate::MAX_MATCHES;
use nalgebra::DMatrix;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// square advantage matrix over the hero catalog. entry (i, j) is the
/// normalized signed edge of hero i over hero j accumulated from match
/// history: every winner/loser pairing contributes +1 and -1 margin,
/// then each row is scaled by its total margin mass so entries land in
/// [-1, 1]. rows with no evidence stay zero. built once per analysis
/// call and read-only afterward.
#[derive(Debug, Clone)]
pub struct Matchups {
    index: BTreeMap<HeroId, usize>,
    matrix: DMatrix<Advantage>,
}

impl Matchups {
    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }
    pub fn is_empty(&self) -> bool {
        self.matrix.nrows() == 0
    }
    /// normalized edge of hero a over hero b.
    pub fn advantage(&self, a: HeroId, b: HeroId) -> Result<Advantage, Error> {
        let i = self.index(a)?;
        let j = self.index(b)?;
        Ok(self.matrix[(i, j)])
    }

    pub(super) fn index(&self, id: HeroId) -> Result<usize, Error> {
        self.index.get(&id).copied().ok_or(Error::UnknownHero(id))
    }

    /// signed win/loss margins per ordered hero pair. increments are
    /// commutative over matches, so accumulation folds in parallel.
    fn accumulate(
        catalog: &Catalog,
        history: &[MatchRecord],
    ) -> Result<DMatrix<Advantage>, Error> {
        let n = catalog.len();
        history
            .par_iter()
            .try_fold(
                || DMatrix::<Advantage>::zeros(n, n),
                |mut raw, record| {
                    let mut winners = Vec::new();
                    let mut losers = Vec::new();
                    for participant in record.participants.iter() {
                        let index = catalog.index(participant.hero)?;
                        match participant.team == record.winner {
                            true => winners.push(index),
                            false => losers.push(index),
                        }
                    }
                    for &w in winners.iter() {
                        for &l in losers.iter() {
                            raw[(w, l)] += 1.;
                            raw[(l, w)] -= 1.;
                        }
                    }
                    Ok::<_, Error>(raw)
                },
            )
            .try_reduce(|| DMatrix::zeros(n, n), |a, b| Ok(a + b))
    }

    /// scale each row by its margin mass. a row with zero mass carries
    /// no evidence and is left as the zero row rather than divided.
    fn normalize(mut raw: DMatrix<Advantage>) -> DMatrix<Advantage> {
        for i in 0..raw.nrows() {
            let mass = raw.row(i).iter().map(|x| x.abs()).sum::<Advantage>();
            if mass != 0. {
                for j in 0..raw.ncols() {
                    raw[(i, j)] /= mass;
                }
            }
        }
        raw
    }
}

impl TryFrom<(&Catalog, &[MatchRecord])> for Matchups {
    type Error = Error;
    fn try_from((catalog, history): (&Catalog, &[MatchRecord])) -> Result<Self, Error> {
        if catalog.len() > MAX_HEROES {
            return Err(Error::SizeExceeded {
                what: "hero catalog",
                len: catalog.len(),
                max: MAX_HEROES,
            });
        }
        if history.len() > MAX_MATCHES {
            return Err(Error::SizeExceeded {
                what: "match history",
                len: history.len(),
                max: MAX_MATCHES,
            });
        }
        log::debug!(
            "{:<32}{:<32}",
            "building matchup matrix",
            format!("{} heroes, {} matches", catalog.len(), history.len())
        );
        let raw = Self::accumulate(catalog, history)?;
        let matrix = Self::normalize(raw);
        let index = catalog
            .heroes()
            .iter()
            .enumerate()
            .map(|(i, h)| (h.id, i))
            .collect();
        Ok(Self { index, matrix })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::hero::Hero;
    use crate::history::team::Team;
    use crate::Arbitrary;

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
    fn raw_rows_sum_to_win_margins() {
        let catalog = catalog(16);
        let history = (0..64).map(|_| MatchRecord::random()).collect::<Vec<_>>();
        let raw = Matchups::accumulate(&catalog, &history).unwrap();
        let mut margins = vec![0.; catalog.len()];
        for record in history.iter() {
            let wins = record.winners().count() as f64;
            let losses = record.losers().count() as f64;
            for w in record.winners() {
                margins[catalog.index(w).unwrap()] += losses;
            }
            for l in record.losers() {
                margins[catalog.index(l).unwrap()] -= wins;
            }
        }
        for i in 0..catalog.len() {
            assert!((raw.row(i).sum() - margins[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn rows_normalize_to_unit_mass() {
        let catalog = catalog(3);
        let history = vec![duel(0, 1), duel(0, 1), duel(0, 2)];
        let matchups = Matchups::try_from((&catalog, history.as_slice())).unwrap();
        assert!((matchups.advantage(0, 1).unwrap() - 2. / 3.).abs() < 1e-9);
        assert!((matchups.advantage(0, 2).unwrap() - 1. / 3.).abs() < 1e-9);
    }

    #[test]
    fn losses_keep_their_sign() {
        let catalog = catalog(2);
        let history = vec![duel(0, 1); 10];
        let matchups = Matchups::try_from((&catalog, history.as_slice())).unwrap();
        assert!(matchups.advantage(0, 1).unwrap() > 0.);
        assert!(matchups.advantage(1, 0).unwrap() < 0.);
    }

    #[test]
    fn absent_heroes_have_zero_rows() {
        let catalog = catalog(3);
        let history = vec![duel(0, 1)];
        let matchups = Matchups::try_from((&catalog, history.as_slice())).unwrap();
        assert_eq!(matchups.advantage(2, 0).unwrap(), 0.);
        assert_eq!(matchups.advantage(2, 1).unwrap(), 0.);
    }

    #[test]
    fn empty_history_is_all_zero() {
        let catalog = catalog(4);
        let matchups = Matchups::try_from((&catalog, [].as_slice())).unwrap();
        for a in 0..4 {
            for b in 0..4 {
                assert_eq!(matchups.advantage(a, b).unwrap(), 0.);
            }
        }
    }

    #[test]
    fn one_sided_records_contribute_nothing() {
        let catalog = catalog(3);
        let history = vec![MatchRecord::from((vec![0, 1], vec![], Team::One))];
        let matchups = Matchups::try_from((&catalog, history.as_slice())).unwrap();
        assert_eq!(matchups.advantage(0, 1).unwrap(), 0.);
    }

    #[test]
    fn unknown_hero_in_history_is_rejected() {
        let catalog = catalog(2);
        let history = vec![duel(0, 99)];
        assert_eq!(
            Matchups::try_from((&catalog, history.as_slice())).unwrap_err(),
            Error::UnknownHero(99),
        );
    }

    #[test]
    fn oversized_catalog_fails_fast() {
        let catalog = catalog(crate::MAX_HEROES as HeroId + 1);
        assert!(matches!(
            Matchups::try_from((&catalog, [].as_slice())).unwrap_err(),
            Error::SizeExceeded { what: "hero catalog", .. },
        ));
    }
}
