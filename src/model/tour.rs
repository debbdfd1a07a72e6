//! Complete tours and their derived cost.

use super::types::TspProblem;

/// A complete tour: every city exactly once, plus its derived cost.
///
/// The cost is the sum of the consecutive edge costs including the
/// closing edge from the last city back to the first. If any included
/// edge is infinite, the cost is `f64::INFINITY`. A tour is immutable
/// once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    cities: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Builds a tour from a visiting order, computing its cost from
    /// the problem's cost function.
    pub fn from_order<P: TspProblem + ?Sized>(problem: &P, cities: Vec<usize>) -> Self {
        let cost = cities
            .iter()
            .enumerate()
            .map(|(i, &from)| problem.cost(from, cities[(i + 1) % cities.len()]))
            .sum();
        Self { cities, cost }
    }

    /// The visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Total tour cost, including the closing edge.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Whether every edge of the tour exists.
    pub fn is_finite(&self) -> bool {
        self.cost.is_finite()
    }
}
