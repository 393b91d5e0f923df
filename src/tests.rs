use super::*;
use crate::simplex::Greedy;
use crate::simplex::Problem;

/// distance implementation should be
/// 1. self-annihilating
/// 2. symmetric under a symmetric ground distance
/// 3. positive semidefinite
/// 4. a metric (triangle inequality) over unit-mass signatures
/// 5. mass conserving

const TOLERANCE: Energy = 1e-8;
const TRIALS: usize = 64;

fn solve(p: &Signature<Vec<f64>>, q: &Signature<Vec<f64>>) -> Solution {
    emd(p, q, &Euclidean, &Settings::default().flows()).unwrap()
}

/// cheapest integral plan by exhaustion; LP optima sit on integral
/// vertices when supplies and demands are integral
fn brute(table: &[[Energy; 3]; 3], s: [u32; 3], d: [u32; 3]) -> Energy {
    assert_eq!(s.iter().sum::<u32>(), d.iter().sum::<u32>());
    let mut best = Energy::INFINITY;
    for x00 in 0..=s[0].min(d[0]) {
        for x01 in 0..=(s[0] - x00).min(d[1]) {
            for x10 in 0..=s[1].min(d[0] - x00) {
                for x11 in 0..=(s[1] - x10).min(d[1] - x01) {
                    let x02 = s[0] - x00 - x01;
                    let x12 = s[1] - x10 - x11;
                    let Some(x20) = d[0].checked_sub(x00 + x10) else { continue };
                    let Some(x21) = d[1].checked_sub(x01 + x11) else { continue };
                    let Some(x22) = s[2].checked_sub(x20 + x21) else { continue };
                    if x02 + x12 + x22 != d[2] {
                        continue;
                    }
                    let x = [[x00, x01, x02], [x10, x11, x12], [x20, x21, x22]];
                    let cost = (0..3)
                        .flat_map(|i| (0..3).map(move |j| (i, j)))
                        .map(|(i, j)| x[i][j] as Energy * table[i][j])
                        .sum::<Energy>();
                    best = best.min(cost);
                }
            }
        }
    }
    best
}

fn indexed(s: [u32; 3]) -> Signature<usize> {
    s.iter().enumerate().map(|(i, &w)| (w as Mass, i)).collect()
}

#[test]
fn is_emd_zero() {
    for _ in 0..TRIALS {
        let p = Signature::<Vec<f64>>::random();
        let d = solve(&p, &p).distance();
        assert!(d.abs() <= TOLERANCE, "{}", d);
    }
}
#[test]
fn is_emd_symmetric() {
    for _ in 0..TRIALS {
        let p = Signature::<Vec<f64>>::random();
        let q = Signature::<Vec<f64>>::random();
        let d12 = solve(&p, &q).distance();
        let d21 = solve(&q, &p).distance();
        assert!((d12 - d21).abs() <= TOLERANCE, "{} != {}", d12, d21);
    }
}
#[test]
fn is_emd_positive() {
    for _ in 0..TRIALS {
        let p = Signature::<Vec<f64>>::random();
        let q = Signature::<Vec<f64>>::random();
        let d = solve(&p, &q).distance();
        assert!(d >= 0., "{}", d);
    }
}
#[test]
fn is_emd_triangle() {
    for _ in 0..TRIALS {
        let p = Signature::<Vec<f64>>::random();
        let q = Signature::<Vec<f64>>::random();
        let r = Signature::<Vec<f64>>::random();
        let d12 = solve(&p, &q).distance();
        let d23 = solve(&q, &r).distance();
        let d13 = solve(&p, &r).distance();
        assert!(d12 + d23 + TOLERANCE >= d13, "{} + {} < {}", d12, d23, d13);
        assert!(d12 + d13 + TOLERANCE >= d23, "{} + {} < {}", d12, d13, d23);
        assert!(d23 + d13 + TOLERANCE >= d12, "{} + {} < {}", d23, d13, d12);
    }
}
#[test]
fn is_emd_mass_conserving() {
    use rand::Rng;
    let ref mut rng = rand::rng();
    for _ in 0..TRIALS {
        let p = Signature::<Vec<f64>>::random()
            .features()
            .map(|x| (rng.random_range(0.1..3.), x.clone()))
            .collect::<Signature<_>>();
        let q = Signature::<Vec<f64>>::random()
            .features()
            .map(|x| (rng.random_range(0.1..3.), x.clone()))
            .collect::<Signature<_>>();
        let solution = solve(&p, &q);
        let flows = solution.flows().unwrap();
        let moved = flows.iter().map(|f| f.amount).sum::<Mass>();
        let expected = p.mass().min(q.mass());
        assert!((moved - expected).abs() <= TOLERANCE * expected, "{} != {}", moved, expected);
        assert!((solution.mass() - expected).abs() <= TOLERANCE * expected);
        assert!(flows.len() < p.len() + q.len());
        for i in 0..p.len() {
            let out = flows.iter().filter(|f| f.from == i).map(|f| f.amount).sum::<Mass>();
            assert!(out <= p.weight(i) * (1. + TOLERANCE), "row {} ships {}", i, out);
        }
        for j in 0..q.len() {
            let inn = flows.iter().filter(|f| f.to == j).map(|f| f.amount).sum::<Mass>();
            assert!(inn <= q.weight(j) * (1. + TOLERANCE), "col {} takes {}", j, inn);
        }
    }
}
#[test]
fn is_emd_below_greedy() {
    for _ in 0..TRIALS {
        let p = Signature::<Vec<f64>>::random();
        let q = Signature::<Vec<f64>>::random();
        let problem = Problem::new(&p, &q, &Euclidean).unwrap();
        let greedy = Greedy::from(problem).minimize().unwrap();
        let d = solve(&p, &q).distance();
        assert!(d <= greedy.distance() + TOLERANCE, "{} > {}", d, greedy.distance());
    }
}

#[test]
fn single_point_distance_is_ground_distance() {
    let p = Signature::from(vec![(1., vec![1., 2.])]);
    let q = Signature::from(vec![(1., vec![4., 6.])]);
    let solution = solve(&p, &q);
    assert_eq!(solution.distance(), 5.);
    assert_eq!(solution.iterations(), 0);
}
#[test]
fn half_the_mass_travels() {
    let p1 = vec![0., 0.];
    let p2 = vec![0., 2.];
    let p = Signature::from(vec![(0.5, p1.clone()), (0.5, p2.clone())]);
    let q = Signature::from(vec![(1.0, p1.clone())]);
    let d = solve(&p, &q).distance();
    assert!((d - 0.5 * Euclidean.distance(&p2, &p1)).abs() <= TOLERANCE, "{}", d);
}
#[test]
fn excess_mass_is_free() {
    let p = Signature::from(vec![(2., vec![0.5, 0.5])]);
    let q = Signature::from(vec![(1., vec![0.5, 0.5])]);
    let solution = solve(&p, &q);
    assert_eq!(solution.distance(), 0.);
    assert_eq!(solution.mass(), 1.);
    assert_eq!(solution.flows().unwrap(), &[Flow::from((0, 0, 1.))]);
}
#[test]
fn excess_mass_is_not_charged() {
    // the heavier side's far point is simply left behind
    let p = Signature::from(vec![(1., 0.), (1., 100.)]);
    let q = Signature::from(vec![(1., 1.)]);
    let solution = emd(&p, &q, &Euclidean, &Settings::default().flows()).unwrap();
    assert_eq!(solution.distance(), 1.);
    assert_eq!(solution.flows().unwrap(), &[Flow::from((0, 0, 1.))]);
}
#[test]
fn lopsided_masses_keep_real_flow() {
    for k in [1, 8, 15, 16, 17] {
        let light = Signature::from(vec![(1., 0.)]);
        let heavy = Signature::from(vec![(10f64.powi(k), 3.)]);
        for (p, q) in [(&light, &heavy), (&heavy, &light)] {
            let solution = emd(p, q, &Euclidean, &Settings::default()).unwrap();
            assert_eq!(solution.distance(), 3., "ratio 1e{}", k);
            assert_eq!(solution.mass(), 1., "ratio 1e{}", k);
        }
    }
}
#[test]
fn degenerate_start_reaches_optimum() {
    // every row nominates a tied minimum and supplies match demands
    // exactly, so the greedy start carries zero-flow cells
    let table = [[1., 1., 3.], [1., 1., 2.], [4., 2., 2.]];
    let metric = |i: &usize, j: &usize| table[*i][*j];
    let s = [2, 1, 1];
    let d = [1, 2, 1];
    let (p, q) = (indexed(s), indexed(d));
    let problem = Problem::new(&p, &q, &metric).unwrap();
    let greedy = Greedy::from(problem).minimize().unwrap();
    assert!(greedy.basis().cells().iter().any(|c| c.flow == 0.));
    let solution = emd(&p, &q, &metric, &Settings::default()).unwrap();
    let optimum = brute(&table, s, d) / 4.;
    assert!((solution.distance() - optimum).abs() <= TOLERANCE, "{} != {}", solution.distance(), optimum);
}
#[test]
fn random_small_problems_match_exhaustion() {
    use rand::Rng;
    let ref mut rng = rand::rng();
    for _ in 0..TRIALS {
        let table: [[Energy; 3]; 3] =
            std::array::from_fn(|_| std::array::from_fn(|_| rng.random_range(0..6) as Energy));
        let s: [u32; 3] = std::array::from_fn(|_| rng.random_range(0..4));
        let mut d = [0u32; 3];
        for _ in 0..s.iter().sum::<u32>() {
            d[rng.random_range(0..3)] += 1;
        }
        if s.iter().sum::<u32>() == 0 {
            continue;
        }
        let metric = |i: &usize, j: &usize| table[*i][*j];
        let (p, q) = (indexed(s), indexed(d));
        let solution = emd(&p, &q, &metric, &Settings::default()).unwrap();
        let total = s.iter().sum::<u32>() as Energy;
        let optimum = brute(&table, s, d) / total;
        assert!(
            (solution.distance() - optimum).abs() <= TOLERANCE,
            "{:?} {:?} {:?}: {} != {}",
            table,
            s,
            d,
            solution.distance(),
            optimum
        );
    }
}
#[test]
fn histograms_are_signatures() {
    use std::collections::BTreeMap;
    let p = BTreeMap::from([(0u8, 0.5), (1u8, 0.5)]);
    let q = BTreeMap::from([(1u8, 1.0)]);
    let metric = |x: &u8, y: &u8| (*x as Energy - *y as Energy).abs();
    assert_eq!(distance(&p, &q, &metric).unwrap(), 0.5);
}
