//! Cross-checks against brute force and randomized bound checks.

use proptest::prelude::*;
use u_tsp::approx::approximate_cost;
use u_tsp::distance::{distances, DistanceMatrix, Point};
use u_tsp::exact::{exact_cost, exact_tour};
use u_tsp::mst::prim;

const EPS: f64 = 1e-9;

fn points_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0.0..100.0f64, 0.0..100.0f64), min..=max)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

/// Shortest cycle through every city, by trying every order of 1..n.
fn brute_force_tsp(dist: &DistanceMatrix) -> f64 {
    fn search(dist: &DistanceMatrix, last: usize, rest: &mut Vec<usize>, acc: f64, best: &mut f64) {
        if rest.is_empty() {
            *best = best.min(acc + dist.get(last, 0));
            return;
        }
        for i in 0..rest.len() {
            let next = rest.swap_remove(i);
            search(dist, next, rest, acc + dist.get(last, next), best);
            rest.push(next);
            let end = rest.len() - 1;
            rest.swap(i, end);
        }
    }

    let n = dist.size();
    if n <= 1 {
        return 0.0;
    }
    let mut rest: Vec<usize> = (1..n).collect();
    let mut best = f64::INFINITY;
    search(dist, 0, &mut rest, 0.0, &mut best);
    best
}

/// Lightest spanning tree, by trying every (n-1)-edge subset.
fn brute_force_mst(dist: &DistanceMatrix) -> f64 {
    fn find(parent: &[usize], x: usize) -> usize {
        let mut r = x;
        while parent[r] != r {
            r = parent[r];
        }
        r
    }

    fn choose(
        dist: &DistanceMatrix,
        edges: &[(usize, usize)],
        start: usize,
        picked: &mut Vec<(usize, usize)>,
        best: &mut f64,
    ) {
        let n = dist.size();
        if picked.len() == n - 1 {
            let mut parent: Vec<usize> = (0..n).collect();
            for &(a, b) in picked.iter() {
                let (ra, rb) = (find(&parent, a), find(&parent, b));
                if ra == rb {
                    return;
                }
                parent[ra] = rb;
            }
            let weight: f64 = picked.iter().map(|&(a, b)| dist.get(a, b)).sum();
            *best = best.min(weight);
            return;
        }
        for i in start..edges.len() {
            picked.push(edges[i]);
            choose(dist, edges, i + 1, picked, best);
            picked.pop();
        }
    }

    let n = dist.size();
    if n <= 1 {
        return 0.0;
    }
    let edges: Vec<(usize, usize)> = (0..n)
        .flat_map(|a| ((a + 1)..n).map(move |b| (a, b)))
        .collect();
    let mut best = f64::INFINITY;
    choose(dist, &edges, 0, &mut Vec::new(), &mut best);
    best
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn held_karp_matches_brute_force(points in points_strategy(2, 8)) {
        let dist = distances(&points);
        let exact = exact_cost(&dist).unwrap();
        let brute = brute_force_tsp(&dist);
        prop_assert!((exact - brute).abs() < EPS, "held-karp {} vs brute force {}", exact, brute);
    }

    #[test]
    fn exact_tour_is_optimal_and_valid(points in points_strategy(1, 9)) {
        let dist = distances(&points);
        let solution = exact_tour(&dist).unwrap();
        prop_assert!(solution.tour.is_valid_for(points.len()));
        prop_assert!((solution.tour.cost(&dist) - solution.cost).abs() < EPS);
    }

    #[test]
    fn approximation_within_factor_two(points in points_strategy(3, 9)) {
        let dist = distances(&points);
        let exact = exact_cost(&dist).unwrap();
        let approx = approximate_cost(&dist).unwrap();
        prop_assert!(approx.cost >= exact - EPS, "approx {} below optimum {}", approx.cost, exact);
        prop_assert!(approx.cost <= 2.0 * exact + EPS, "approx {} above 2x optimum {}", approx.cost, exact);
    }

    #[test]
    fn approximate_tour_is_closed_permutation(points in points_strategy(1, 80)) {
        let n = points.len();
        let dist = distances(&points);
        let solution = approximate_cost(&dist).unwrap();
        let cities = solution.tour.cities();
        prop_assert_eq!(cities.len(), n + 1);
        prop_assert_eq!(cities[0], 0);
        prop_assert_eq!(cities[n], 0);
        prop_assert!(solution.tour.is_valid_for(n));
        prop_assert!((solution.tour.cost(&dist) - solution.cost).abs() < EPS);
    }

    #[test]
    fn prim_is_minimum(points in points_strategy(2, 6)) {
        let dist = distances(&points);
        let tree = prim(&dist).unwrap();
        let brute = brute_force_mst(&dist);
        prop_assert_eq!(tree.edges().count(), points.len() - 1);
        prop_assert!((tree.weight(&dist) - brute).abs() < EPS, "prim {} vs brute force {}", tree.weight(&dist), brute);
    }

    #[test]
    fn mst_weight_bounds_optimum(points in points_strategy(2, 8)) {
        let dist = distances(&points);
        let tree = prim(&dist).unwrap();
        let exact = exact_cost(&dist).unwrap();
        prop_assert!(tree.weight(&dist) <= exact + EPS);
    }
}

#[test]
fn degenerate_single_city() {
    let dist = distances(&[Point::new(42.0, 17.0)]);
    assert_eq!(exact_cost(&dist).unwrap(), 0.0);
    let approx = approximate_cost(&dist).unwrap();
    assert_eq!(approx.cost, 0.0);
    assert_eq!(approx.tour.cities(), &[0, 0]);
}

#[test]
fn degenerate_two_cities() {
    let dist = distances(&[Point::new(1.0, 1.0), Point::new(4.0, 5.0)]);
    let expected = 2.0 * dist.get(0, 1);
    assert!((exact_cost(&dist).unwrap() - expected).abs() < EPS);
    let approx = approximate_cost(&dist).unwrap();
    assert!((approx.cost - expected).abs() < EPS);
    assert_eq!(approx.tour.cities(), &[0, 1, 0]);
}

#[test]
fn unit_square() {
    let dist = distances(&[
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 0.0),
    ]);
    assert!((exact_cost(&dist).unwrap() - 4.0).abs() < EPS);
    let approx = approximate_cost(&dist).unwrap();
    assert!(approx.cost >= 4.0 - EPS && approx.cost <= 8.0 + EPS);
    assert_eq!(approx.tour.len(), 5);
}

#[test]
fn collinear_out_and_back() {
    let dist = distances(&[
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(2.0, 0.0),
    ]);
    assert!((exact_cost(&dist).unwrap() - 4.0).abs() < EPS);
    assert!((approximate_cost(&dist).unwrap().cost - 4.0).abs() < EPS);
}
