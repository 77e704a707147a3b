use super::payoff::Payoffs;
use super::program::Constraint;
use super::program::Program;
use crate::error::Error;
use crate::history::composition::Composition;
use crate::Payoff;
use crate::Probability;
use serde::Serialize;

/// maximin mixed strategy over observed compositions: the distribution
/// maximizing the guaranteed expected payoff against any pure opposing
/// composition. weights align to the payoff matrix's fixed composition
/// order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equilibrium {
    compositions: Vec<Composition>,
    weights: Vec<Probability>,
    value: Payoff,
}

impl Equilibrium {
    pub fn compositions(&self) -> &[Composition] {
        &self.compositions
    }
    pub fn weights(&self) -> &[Probability] {
        &self.weights
    }
    /// guaranteed expected payoff of the mixture.
    pub fn value(&self) -> Payoff {
        self.value
    }
    pub fn weight(&self, composition: &Composition) -> Option<Probability> {
        self.compositions
            .iter()
            .position(|c| c == composition)
            .map(|i| self.weights[i])
    }
}

impl TryFrom<&Payoffs> for Equilibrium {
    type Error = Error;
    /// formulate the maximin linear program and hand it to the dense
    /// solver: maximize v subject to the mixture earning at least v
    /// against every pure composition, with the weights on the
    /// probability simplex and v free in sign.
    fn try_from(payoffs: &Payoffs) -> Result<Self, Error> {
        let n = payoffs.len();
        if n == 0 {
            return Err(Error::Infeasible("no compositions observed"));
        }
        log::debug!(
            "{:<32}{:<32}",
            "solving maximin program",
            format!("{} compositions", n)
        );
        let mut objective = vec![0.; n + 1];
        objective[0] = 1.;
        let mut free = vec![false; n + 1];
        free[0] = true;
        let mut constraints = Vec::with_capacity(n + 1);
        for j in 0..n {
            let mut coefficients = vec![0.; n + 1];
            coefficients[0] = -1.;
            for i in 0..n {
                coefficients[i + 1] = payoffs.payoff(i, j);
            }
            constraints.push(Constraint::ge(coefficients, 0.));
        }
        let mut mixture = vec![1.; n + 1];
        mixture[0] = 0.;
        constraints.push(Constraint::eq(mixture, 1.));
        let solution = Program {
            objective,
            constraints,
            free,
        }
        .maximize()?;
        let value = solution.variables[0];
        let mut weights = solution.variables[1..]
            .iter()
            .map(|&w| w.max(0.))
            .collect::<Vec<Probability>>();
        let total = weights.iter().sum::<Probability>();
        if total <= 0. {
            return Err(Error::Infeasible("degenerate equilibrium distribution"));
        }
        for w in weights.iter_mut() {
            *w /= total;
        }
        Ok(Self {
            compositions: payoffs.compositions().to_vec(),
            weights,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::record::MatchRecord;
    use crate::history::team::Team;
    use crate::HeroId;
    use crate::DISTRIBUTION_TOLERANCE;

    fn clash(team1: Vec<HeroId>, team2: Vec<HeroId>, winner: Team) -> MatchRecord {
        MatchRecord::from((team1, team2, winner))
    }

    fn solve(history: &[MatchRecord]) -> Result<Equilibrium, Error> {
        Equilibrium::try_from(&Payoffs::try_from(history)?)
    }

    #[test]
    fn dominant_composition_takes_all_the_weight() {
        let history = vec![clash(vec![1, 2], vec![3, 4], Team::One); 5];
        let equilibrium = solve(&history).unwrap();
        let winner = Composition::from(vec![1, 2]);
        let loser = Composition::from(vec![3, 4]);
        assert!((equilibrium.weight(&winner).unwrap() - 1.).abs() < DISTRIBUTION_TOLERANCE);
        assert!(equilibrium.weight(&loser).unwrap().abs() < DISTRIBUTION_TOLERANCE);
    }

    #[test]
    fn weights_form_a_distribution() {
        let history = vec![
            clash(vec![1], vec![2], Team::One),
            clash(vec![2], vec![3], Team::One),
            clash(vec![3], vec![1], Team::One),
            clash(vec![1], vec![2], Team::Two),
            clash(vec![2], vec![3], Team::One),
        ];
        let equilibrium = solve(&history).unwrap();
        assert!(equilibrium.weights().iter().all(|&w| w >= 0.));
        let total = equilibrium.weights().iter().sum::<f64>();
        assert!((total - 1.).abs() < DISTRIBUTION_TOLERANCE);
    }

    #[test]
    fn cyclic_dominance_mixes_uniformly() {
        // rock-paper-scissors over three compositions
        let history = vec![
            clash(vec![1], vec![2], Team::One),
            clash(vec![2], vec![3], Team::One),
            clash(vec![3], vec![1], Team::One),
        ];
        let equilibrium = solve(&history).unwrap();
        assert_eq!(equilibrium.weights().len(), 3);
        for &w in equilibrium.weights() {
            assert!((w - 1. / 3.).abs() < 1e-6);
        }
        assert!(equilibrium.value().abs() < 1e-6);
    }

    #[test]
    fn lone_composition_is_certain() {
        let history = vec![clash(vec![1, 2], vec![2, 1], Team::One)];
        let equilibrium = solve(&history).unwrap();
        assert_eq!(equilibrium.weights(), &[1.]);
        assert_eq!(equilibrium.value(), 0.);
    }

    #[test]
    fn empty_history_is_infeasible() {
        assert!(matches!(solve(&[]).unwrap_err(), Error::Infeasible(_)));
    }

    #[test]
    fn weights_align_to_composition_order() {
        let history = vec![clash(vec![9, 8], vec![1, 2], Team::One); 3];
        let equilibrium = solve(&history).unwrap();
        assert_eq!(
            equilibrium.compositions()[0],
            Composition::from(vec![8, 9]),
        );
        assert!((equilibrium.weights()[0] - 1.).abs() < DISTRIBUTION_TOLERANCE);
    }
}
