use super::program::Program;
use super::program::Relation;
use super::program::Solution;
use crate::error::Error;
use crate::SIMPLEX_PIVOT_LIMIT;
use crate::SIMPLEX_TOLERANCE;
use nalgebra::DMatrix;

/// residual infeasibility above which phase one declares the program
/// infeasible.
const FEASIBLE: f64 = 1e-7;

/// two-phase tableau simplex with Bland's rule. columns are laid out
/// as structural variables (free variables split into positive and
/// negative parts), then slack and surplus columns, then artificial
/// columns, then the right-hand side.
pub struct Simplex {
    rows: DMatrix<f64>,
    basis: Vec<usize>,
    splits: Vec<(usize, Option<usize>)>,
    objective: Vec<f64>,
    structurals: usize,
    artificials: usize,
}

impl From<&Program> for Simplex {
    fn from(program: &Program) -> Self {
        let n = program.objective.len();
        assert!(program.free.len() == n, "one freeness flag per variable");
        let mut splits = Vec::with_capacity(n);
        let mut structurals = 0;
        for &free in program.free.iter() {
            match free {
                true => {
                    splits.push((structurals, Some(structurals + 1)));
                    structurals += 2;
                }
                false => {
                    splits.push((structurals, None));
                    structurals += 1;
                }
            }
        }
        let expand = |coefficients: &[f64]| {
            let mut expanded = vec![0.; structurals];
            for (j, &c) in coefficients.iter().enumerate() {
                let (plus, minus) = splits[j];
                expanded[plus] = c;
                if let Some(minus) = minus {
                    expanded[minus] = -c;
                }
            }
            expanded
        };
        let objective = expand(&program.objective);
        let mut normalized = Vec::with_capacity(program.constraints.len());
        for constraint in program.constraints.iter() {
            assert!(
                constraint.coefficients.len() == n,
                "constraint width matches variable count"
            );
            let mut coefficients = expand(&constraint.coefficients);
            let mut constant = constraint.constant;
            let mut relation = constraint.relation;
            if constant < 0. {
                for c in coefficients.iter_mut() {
                    *c = -*c;
                }
                constant = -constant;
                relation = match relation {
                    Relation::Le => Relation::Ge,
                    Relation::Ge => Relation::Le,
                    Relation::Eq => Relation::Eq,
                };
            }
            normalized.push((coefficients, relation, constant));
        }
        let slacks = normalized
            .iter()
            .filter(|(_, r, _)| *r != Relation::Eq)
            .count();
        let artificials = normalized
            .iter()
            .filter(|(_, r, _)| *r != Relation::Le)
            .count();
        let width = structurals + slacks + artificials + 1;
        let mut rows = DMatrix::zeros(normalized.len(), width);
        let mut basis = vec![0; normalized.len()];
        let mut slack = structurals;
        let mut artificial = structurals + slacks;
        for (i, (coefficients, relation, constant)) in normalized.into_iter().enumerate() {
            for (j, c) in coefficients.into_iter().enumerate() {
                rows[(i, j)] = c;
            }
            rows[(i, width - 1)] = constant;
            match relation {
                Relation::Le => {
                    rows[(i, slack)] = 1.;
                    basis[i] = slack;
                    slack += 1;
                }
                Relation::Ge => {
                    rows[(i, slack)] = -1.;
                    slack += 1;
                    rows[(i, artificial)] = 1.;
                    basis[i] = artificial;
                    artificial += 1;
                }
                Relation::Eq => {
                    rows[(i, artificial)] = 1.;
                    basis[i] = artificial;
                    artificial += 1;
                }
            }
        }
        Self {
            rows,
            basis,
            splits,
            objective,
            structurals,
            artificials,
        }
    }
}

impl Simplex {
    pub fn solve(mut self) -> Result<Solution, Error> {
        if self.artificials > 0 {
            self.feasibilize()?;
        }
        self.optimize()?;
        Ok(self.solution())
    }

    /// index of the right-hand-side column.
    fn rhs(&self) -> usize {
        self.rows.ncols() - 1
    }

    /// phase one: pivot the artificial variables down to zero, then
    /// drop their columns. the reduced-cost row maximizes minus their
    /// sum, so feasibility means an optimum of zero.
    fn feasibilize(&mut self) -> Result<(), Error> {
        let width = self.rows.ncols();
        let start = self.rhs() - self.artificials;
        let mut reduced = vec![0.; width];
        for r in reduced[start..width - 1].iter_mut() {
            *r = 1.;
        }
        for i in 0..self.rows.nrows() {
            if self.basis[i] >= start {
                for (j, r) in reduced.iter_mut().enumerate() {
                    *r -= self.rows[(i, j)];
                }
            }
        }
        self.pivots(&mut reduced)?;
        if reduced[width - 1] < -FEASIBLE {
            return Err(Error::Infeasible("no point satisfies the constraints"));
        }
        // lingering artificials sit at zero; pivot them out where a
        // structural or slack column allows, drop redundant rows where
        // none does
        let mut redundant = Vec::new();
        for i in 0..self.rows.nrows() {
            if self.basis[i] >= start {
                match (0..start).find(|&j| self.rows[(i, j)].abs() > SIMPLEX_TOLERANCE) {
                    Some(j) => self.pivot(i, j, &mut reduced),
                    None => redundant.push(i),
                }
            }
        }
        for &i in redundant.iter().rev() {
            self.rows = std::mem::replace(&mut self.rows, DMatrix::zeros(0, 0)).remove_row(i);
            self.basis.remove(i);
        }
        for j in (start..start + self.artificials).rev() {
            self.rows = std::mem::replace(&mut self.rows, DMatrix::zeros(0, 0)).remove_column(j);
        }
        self.artificials = 0;
        Ok(())
    }

    /// phase two: optimize the program's own objective from the
    /// feasible basis.
    fn optimize(&mut self) -> Result<(), Error> {
        let width = self.rows.ncols();
        let mut reduced = vec![0.; width];
        for (j, &c) in self.objective.iter().enumerate() {
            reduced[j] = -c;
        }
        for i in 0..self.rows.nrows() {
            let factor = reduced[self.basis[i]];
            if factor != 0. {
                for j in 0..width {
                    let d = self.rows[(i, j)];
                    reduced[j] -= factor * d;
                }
            }
        }
        self.pivots(&mut reduced)
    }

    /// Bland's rule pivot loop: enter the lowest-index improving
    /// column, leave on the tightest ratio with lowest basis index on
    /// ties. Bland's rule rules out cycling; the pivot budget is a
    /// backstop against numerical drift.
    fn pivots(&mut self, reduced: &mut [f64]) -> Result<(), Error> {
        for _ in 0..SIMPLEX_PIVOT_LIMIT {
            let entering = (0..self.rhs()).find(|&j| reduced[j] < -SIMPLEX_TOLERANCE);
            let Some(entering) = entering else {
                return Ok(());
            };
            let mut leaving: Option<(usize, f64)> = None;
            for i in 0..self.rows.nrows() {
                let rate = self.rows[(i, entering)];
                if rate > SIMPLEX_TOLERANCE {
                    let ratio = self.rows[(i, self.rhs())] / rate;
                    leaving = match leaving {
                        None => Some((i, ratio)),
                        Some((_, best)) if ratio < best - SIMPLEX_TOLERANCE => Some((i, ratio)),
                        Some((r, best))
                            if ratio < best + SIMPLEX_TOLERANCE && self.basis[i] < self.basis[r] =>
                        {
                            Some((i, ratio))
                        }
                        keep => keep,
                    };
                }
            }
            let Some((row, _)) = leaving else {
                return Err(Error::Unbounded);
            };
            self.pivot(row, entering, reduced);
        }
        Err(Error::Infeasible("pivot budget exhausted"))
    }

    fn pivot(&mut self, row: usize, col: usize, reduced: &mut [f64]) {
        let width = self.rows.ncols();
        let divisor = self.rows[(row, col)];
        for j in 0..width {
            self.rows[(row, j)] /= divisor;
        }
        for i in 0..self.rows.nrows() {
            if i == row {
                continue;
            }
            let factor = self.rows[(i, col)];
            if factor != 0. {
                for j in 0..width {
                    let d = self.rows[(row, j)];
                    self.rows[(i, j)] -= factor * d;
                }
            }
        }
        let factor = reduced[col];
        if factor != 0. {
            for j in 0..width {
                reduced[j] -= factor * self.rows[(row, j)];
            }
        }
        self.basis[row] = col;
    }

    fn solution(&self) -> Solution {
        let mut expanded = vec![0.; self.structurals];
        for (i, &b) in self.basis.iter().enumerate() {
            if b < self.structurals {
                expanded[b] = self.rows[(i, self.rhs())];
            }
        }
        let variables = self
            .splits
            .iter()
            .map(|&(plus, minus)| expanded[plus] - minus.map(|m| expanded[m]).unwrap_or(0.))
            .collect::<Vec<f64>>();
        let objective = self
            .objective
            .iter()
            .zip(expanded.iter())
            .map(|(c, x)| c * x)
            .sum();
        Solution {
            variables,
            objective,
        }
    }
}
