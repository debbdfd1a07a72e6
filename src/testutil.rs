//! Shared test fixtures: reference instances and a brute-force
//! optimum for cross-checking the search.

use proptest::prelude::*;
use rand::Rng;

use crate::model::{MatrixProblem, TspProblem};
use crate::rng::create_rng;

/// The 4-city reference instance; optimal tour cost 80 (0-1-3-2-0 or
/// its reverse).
pub(crate) fn four_city_instance() -> MatrixProblem {
    MatrixProblem::new(vec![
        vec![f64::INFINITY, 10.0, 15.0, 20.0],
        vec![10.0, f64::INFINITY, 35.0, 25.0],
        vec![15.0, 35.0, f64::INFINITY, 30.0],
        vec![20.0, 25.0, 30.0, f64::INFINITY],
    ])
}

/// A seeded, fully connected, asymmetric instance with costs in
/// [1, 100).
pub(crate) fn random_instance(n: usize, seed: u64) -> MatrixProblem {
    let mut rng = create_rng(seed);
    let costs = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        f64::INFINITY
                    } else {
                        rng.random_range(1.0..100.0)
                    }
                })
                .collect()
        })
        .collect();
    MatrixProblem::new(costs)
}

/// Minimum complete tour cost by enumerating every permutation with
/// city 0 fixed first. Only sensible for small n.
pub(crate) fn brute_force_optimum<P: TspProblem>(problem: &P) -> f64 {
    let n = problem.num_cities();
    let mut order: Vec<usize> = (0..n).collect();
    let mut best = f64::INFINITY;
    permute(problem, &mut order, 1, &mut best);
    best
}

fn permute<P: TspProblem>(problem: &P, order: &mut [usize], k: usize, best: &mut f64) {
    let n = order.len();
    if k == n {
        let cost: f64 = (0..n)
            .map(|i| problem.cost(order[i], order[(i + 1) % n]))
            .sum();
        if cost < *best {
            *best = cost;
        }
        return;
    }
    for i in k..n {
        order.swap(k, i);
        permute(problem, order, k + 1, best);
        order.swap(k, i);
    }
}

/// Strategy producing small fully connected asymmetric instances.
pub(crate) fn instance_strategy() -> impl Strategy<Value = MatrixProblem> {
    (4usize..=6).prop_flat_map(|n| {
        proptest::collection::vec(1.0f64..100.0, n * n).prop_map(move |flat| {
            let costs = flat
                .chunks(n)
                .enumerate()
                .map(|(i, row)| {
                    let mut row = row.to_vec();
                    row[i] = f64::INFINITY;
                    row
                })
                .collect();
            MatrixProblem::new(costs)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brute_force_on_reference_instance() {
        let problem = four_city_instance();
        assert!((brute_force_optimum(&problem) - 80.0).abs() < 1e-12);
    }

    #[test]
    fn test_random_instance_is_seeded() {
        let a = random_instance(5, 7);
        let b = random_instance(5, 7);
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(a.cost(i, j).to_bits(), b.cost(i, j).to_bits());
            }
        }
    }
}
