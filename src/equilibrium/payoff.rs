use crate::error::Error;
use crate::history::composition::Composition;
use crate::history::record::MatchRecord;
use crate::Payoff;
use crate::MAX_COMPOSITIONS;
use crate::MAX_MATCHES;
use nalgebra::DMatrix;
use std::collections::BTreeMap;

/// net win/loss evidence between distinct observed compositions,
/// indexed in first-appearance order over the history. every decided
/// match adds +1 to the winner's entry against the loser and -1 to the
/// mirrored entry, so the matrix is antisymmetric by construction and
/// the induced game is exactly zero-sum.
#[derive(Debug, Clone)]
pub struct Payoffs {
    compositions: Vec<Composition>,
    matrix: DMatrix<Payoff>,
}

impl Payoffs {
    pub fn len(&self) -> usize {
        self.compositions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.compositions.is_empty()
    }
    /// the fixed enumeration order equilibrium weights align to.
    pub fn compositions(&self) -> &[Composition] {
        &self.compositions
    }
    pub fn payoff(&self, i: usize, j: usize) -> Payoff {
        self.matrix[(i, j)]
    }
}

impl TryFrom<&[MatchRecord]> for Payoffs {
    type Error = Error;
    fn try_from(history: &[MatchRecord]) -> Result<Self, Error> {
        if history.len() > MAX_MATCHES {
            return Err(Error::SizeExceeded {
                what: "match history",
                len: history.len(),
                max: MAX_MATCHES,
            });
        }
        let mut index = BTreeMap::new();
        let mut compositions = Vec::new();
        let mut pairings = Vec::new();
        for record in history.iter().filter(|r| r.decided()) {
            let won = Composition::from((record, record.winner));
            let lost = Composition::from((record, record.winner.opponent()));
            for side in [&won, &lost] {
                if !index.contains_key(side) {
                    index.insert(side.clone(), compositions.len());
                    compositions.push(side.clone());
                }
            }
            pairings.push((index[&won], index[&lost]));
        }
        if compositions.len() > MAX_COMPOSITIONS {
            return Err(Error::SizeExceeded {
                what: "composition set",
                len: compositions.len(),
                max: MAX_COMPOSITIONS,
            });
        }
        let mut matrix = DMatrix::zeros(compositions.len(), compositions.len());
        for (winner, loser) in pairings {
            matrix[(winner, loser)] += 1.;
            matrix[(loser, winner)] -= 1.;
        }
        log::debug!(
            "{:<32}{:<32}",
            "building payoff matrix",
            format!("{} compositions", compositions.len())
        );
        Ok(Self {
            compositions,
            matrix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::team::Team;
    use crate::HeroId;

    fn clash(team1: Vec<HeroId>, team2: Vec<HeroId>, winner: Team) -> MatchRecord {
        MatchRecord::from((team1, team2, winner))
    }

    #[test]
    fn compositions_enumerate_in_first_appearance_order() {
        let history = vec![
            clash(vec![1, 2], vec![3, 4], Team::Two),
            clash(vec![5, 6], vec![2, 1], Team::One),
        ];
        let payoffs = Payoffs::try_from(history.as_slice()).unwrap();
        // winner's side registers first within each record
        let order = payoffs
            .compositions()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>();
        assert_eq!(order, vec!["3,4", "1,2", "5,6"]);
    }

    #[test]
    fn matrix_is_antisymmetric() {
        let history = vec![
            clash(vec![1], vec![2], Team::One),
            clash(vec![1], vec![2], Team::One),
            clash(vec![2], vec![1], Team::One),
            clash(vec![3], vec![1], Team::Two),
        ];
        let payoffs = Payoffs::try_from(history.as_slice()).unwrap();
        for i in 0..payoffs.len() {
            for j in 0..payoffs.len() {
                assert_eq!(payoffs.payoff(i, j), -payoffs.payoff(j, i));
            }
        }
    }

    #[test]
    fn net_margins_accumulate() {
        let history = vec![
            clash(vec![1], vec![2], Team::One),
            clash(vec![1], vec![2], Team::One),
            clash(vec![2], vec![1], Team::One),
        ];
        let payoffs = Payoffs::try_from(history.as_slice()).unwrap();
        // composition "1" appears first as the first record's winner
        assert_eq!(payoffs.payoff(0, 1), 1.);
        assert_eq!(payoffs.payoff(1, 0), -1.);
    }

    #[test]
    fn mirror_matches_cancel_on_the_diagonal() {
        let history = vec![clash(vec![1, 2], vec![2, 1], Team::One)];
        let payoffs = Payoffs::try_from(history.as_slice()).unwrap();
        assert_eq!(payoffs.len(), 1);
        assert_eq!(payoffs.payoff(0, 0), 0.);
    }

    #[test]
    fn one_sided_records_are_skipped() {
        let history = vec![clash(vec![1, 2], vec![], Team::One)];
        let payoffs = Payoffs::try_from(history.as_slice()).unwrap();
        assert!(payoffs.is_empty());
    }
}
