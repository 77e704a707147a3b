use super::simplex::Simplex;
use crate::error::Error;

/// sense of one linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Le,
    Ge,
    Eq,
}

/// one dense linear constraint over the program's variable vector.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub coefficients: Vec<f64>,
    pub relation: Relation,
    pub constant: f64,
}

impl Constraint {
    pub fn le(coefficients: Vec<f64>, constant: f64) -> Self {
        Self {
            coefficients,
            relation: Relation::Le,
            constant,
        }
    }
    pub fn ge(coefficients: Vec<f64>, constant: f64) -> Self {
        Self {
            coefficients,
            relation: Relation::Ge,
            constant,
        }
    }
    pub fn eq(coefficients: Vec<f64>, constant: f64) -> Self {
        Self {
            coefficients,
            relation: Relation::Eq,
            constant,
        }
    }
}

/// dense linear program: maximize objective · x subject to the
/// constraints, each variable either free or nonnegative. this
/// interface is the seam between formulation and solver; the simplex
/// behind `maximize` is an interchangeable implementation detail.
#[derive(Debug, Clone)]
pub struct Program {
    pub objective: Vec<f64>,
    pub constraints: Vec<Constraint>,
    pub free: Vec<bool>,
}

/// feasible optimum of a program.
#[derive(Debug, Clone)]
pub struct Solution {
    pub variables: Vec<f64>,
    pub objective: f64,
}

impl Program {
    pub fn maximize(&self) -> Result<Solution, Error> {
        Simplex::from(self).solve()
    }
}
