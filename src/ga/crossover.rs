//! Crossover strategies for bit-vector individuals.
//!
//! Crossover recombines the breeding pool in place, pairing adjacent
//! slots `(0, 1), (2, 3), ...`. With an odd pool the last individual has
//! no partner and is left unmodified.
//!
//! # Operators
//!
//! - [`Crossover::OnePoint`]: swap the prefix before one random cut
//! - [`Crossover::MultiPoint`]: swap alternating segments between `k` cuts
//! - [`Crossover::Uniform`]: per-gene exchange with a biased coin
//!
//! Segment exchange never invents gene values: for every position, the
//! pair's two genes after crossover are the pair's two genes before it.
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Spears & De Jong (1991), "An Analysis of Multi-Point Crossover"

use super::types::{Individual, Population};
use crate::error::GaError;
use rand::seq::index;
use rand::Rng;

/// Crossover strategy applied to adjacent pairs of the breeding pool.
///
/// # Examples
///
/// ```
/// use u_genalg::ga::Crossover;
///
/// let one = Crossover::OnePoint;
/// let multi = Crossover::MultiPoint(3);
/// let uniform = Crossover::Uniform(0.5);
/// assert!(multi.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Pick a cut uniformly in `[1, len - 1]` and swap the genes before it.
    OnePoint,

    /// Pick `k` distinct sorted cuts in `[1, len - 1]` and swap every other
    /// segment, starting with the first one.
    ///
    /// `k` is capped at `len - 1`. With `k = 1` this is one-point crossover.
    MultiPoint(usize),

    /// For every position, the first child keeps parent A's gene with the
    /// given probability (otherwise it takes B's); the second child gets
    /// the other gene.
    Uniform(f64),
}

impl Default for Crossover {
    fn default() -> Self {
        Crossover::OnePoint
    }
}

impl Crossover {
    /// Recombines adjacent pairs of `pool` in place.
    ///
    /// Each pair is recombined with probability `rate`; otherwise it is
    /// left unchanged.
    pub fn apply<R: Rng>(&self, pool: &mut Population, rate: f64, rng: &mut R) {
        for pair in pool.individuals_mut().chunks_exact_mut(2) {
            if rng.random_range(0.0..1.0) >= rate {
                continue;
            }
            let (left, right) = pair.split_at_mut(1);
            self.recombine(&mut left[0], &mut right[0], rng);
        }
    }

    /// Recombines one pair unconditionally.
    pub fn recombine<R: Rng>(&self, a: &mut Individual, b: &mut Individual, rng: &mut R) {
        let n = a.len();
        assert_eq!(n, b.len(), "parents must have equal length");

        match *self {
            Crossover::OnePoint => {
                if n < 2 {
                    return;
                }
                let point = rng.random_range(1..n);
                swap_prefix(a, b, point);
            }
            Crossover::MultiPoint(k) => {
                if n < 2 {
                    return;
                }
                let k = k.min(n - 1);
                let mut points: Vec<usize> = index::sample(rng, n - 1, k)
                    .into_iter()
                    .map(|p| p + 1)
                    .collect();
                points.sort_unstable();
                swap_segments(a, b, &points);
            }
            Crossover::Uniform(parent_ratio) => {
                let (ga, gb) = (a.genes_mut(), b.genes_mut());
                for (x, y) in ga.iter_mut().zip(gb.iter_mut()) {
                    if rng.random_range(0.0..1.0) >= parent_ratio {
                        std::mem::swap(x, y);
                    }
                }
            }
        }
    }

    /// Checks strategy parameters.
    pub fn validate(&self) -> Result<(), GaError> {
        match *self {
            Crossover::MultiPoint(0) => Err(GaError::InvalidCrossoverPoints(0)),
            Crossover::Uniform(r) if !(0.0..=1.0).contains(&r) => {
                Err(GaError::InvalidParentRatio(r))
            }
            _ => Ok(()),
        }
    }
}

/// Exchanges genes `[0, point)` between `a` and `b`.
///
/// # Panics
/// Panics if the lengths differ or `point > len`.
///
/// ```
/// use u_genalg::ga::{crossover::swap_prefix, Individual};
///
/// let mut a = Individual::from_bits(&[1, 1, 0, 0]);
/// let mut b = Individual::from_bits(&[0, 0, 1, 1]);
/// swap_prefix(&mut a, &mut b, 2);
/// assert_eq!(a.to_bits(), vec![0, 0, 0, 0]);
/// assert_eq!(b.to_bits(), vec![1, 1, 1, 1]);
/// ```
pub fn swap_prefix(a: &mut Individual, b: &mut Individual, point: usize) {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    a.genes_mut()[..point].swap_with_slice(&mut b.genes_mut()[..point]);
}

/// Exchanges the even-numbered segments delimited by `points`.
///
/// Segments are `[0, p1), [p1, p2), ..., [pk, len)`, numbered from zero;
/// segments 0, 2, 4, ... are swapped.
///
/// # Panics
/// Panics if the lengths differ, or `points` is unsorted or exceeds `len`.
pub fn swap_segments(a: &mut Individual, b: &mut Individual, points: &[usize]) {
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal length");
    assert!(
        points.windows(2).all(|w| w[0] <= w[1]),
        "crossover points must be sorted"
    );

    let mut start = 0;
    for (segment, &end) in points.iter().chain(std::iter::once(&n)).enumerate() {
        if segment % 2 == 0 {
            a.genes_mut()[start..end].swap_with_slice(&mut b.genes_mut()[start..end]);
        }
        start = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn ind(bits: &[u8]) -> Individual {
        Individual::from_bits(bits)
    }

    /// Per position, the pair's genes are a permutation of the parents'.
    fn conserved(p1: &Individual, p2: &Individual, c1: &Individual, c2: &Individual) -> bool {
        (0..p1.len()).all(|i| {
            let before = u8::from(p1[i]) + u8::from(p2[i]);
            let after = u8::from(c1[i]) + u8::from(c2[i]);
            before == after
        })
    }

    #[test]
    fn test_swap_prefix_scenario() {
        let mut a = ind(&[1, 1, 0, 0]);
        let mut b = ind(&[0, 0, 1, 1]);
        swap_prefix(&mut a, &mut b, 2);
        assert_eq!(a, ind(&[0, 0, 0, 0]));
        assert_eq!(b, ind(&[1, 1, 1, 1]));
    }

    /// Every draw lands halfway through its range: an integer range
    /// `lo..hi` yields `lo + (hi - lo) / 2`, a unit float yields 0.5.
    struct HalfwayRng;

    impl rand::RngCore for HalfwayRng {
        fn next_u32(&mut self) -> u32 {
            1 << 31
        }

        fn next_u64(&mut self) -> u64 {
            1 << 63
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0x80);
        }
    }

    #[test]
    fn test_one_point_forced_cut_at_two() {
        // Cut drawn from 1..4 lands on 2.
        let mut a = ind(&[1, 1, 0, 0]);
        let mut b = ind(&[0, 0, 1, 1]);
        Crossover::OnePoint.recombine(&mut a, &mut b, &mut HalfwayRng);
        assert_eq!(a, ind(&[0, 0, 0, 0]));
        assert_eq!(b, ind(&[1, 1, 1, 1]));

        // Through the pool: the 0.5 coin passes a rate of 1.0, the odd
        // third slot stays unpaired.
        let mut pool: Population = vec![
            ind(&[1, 1, 0, 0]),
            ind(&[0, 0, 1, 1]),
            ind(&[1, 0, 1, 0]),
        ]
        .into();
        Crossover::OnePoint.apply(&mut pool, 1.0, &mut HalfwayRng);
        assert_eq!(pool[0], ind(&[0, 0, 0, 0]));
        assert_eq!(pool[1], ind(&[1, 1, 1, 1]));
        assert_eq!(pool[2], ind(&[1, 0, 1, 0]));
    }

    #[test]
    fn test_swap_segments_alternates() {
        let mut a = ind(&[1, 1, 1, 1, 1, 1]);
        let mut b = ind(&[0, 0, 0, 0, 0, 0]);
        swap_segments(&mut a, &mut b, &[2, 4]);
        assert_eq!(a, ind(&[0, 0, 1, 1, 0, 0]));
        assert_eq!(b, ind(&[1, 1, 0, 0, 1, 1]));
    }

    #[test]
    fn test_swap_segments_single_point_matches_prefix() {
        let (p1, p2) = (ind(&[1, 0, 1, 1, 0]), ind(&[0, 1, 1, 0, 0]));
        for point in 1..5 {
            let (mut a1, mut b1) = (p1.clone(), p2.clone());
            let (mut a2, mut b2) = (p1.clone(), p2.clone());
            swap_prefix(&mut a1, &mut b1, point);
            swap_segments(&mut a2, &mut b2, &[point]);
            assert_eq!((a1, b1), (a2, b2));
        }
    }

    #[test]
    fn test_one_point_two_genes_is_deterministic() {
        // With two genes the only legal cut is 1.
        let mut rng = create_rng(42);
        let mut pool: Population = vec![ind(&[1, 0]), ind(&[0, 1])].into();
        Crossover::OnePoint.apply(&mut pool, 1.0, &mut rng);
        assert_eq!(pool[0], ind(&[0, 0]));
        assert_eq!(pool[1], ind(&[1, 1]));
    }

    #[test]
    fn test_one_point_conserves_genes() {
        let mut rng = create_rng(42);
        let p1 = ind(&[1, 1, 0, 1, 0, 0, 1, 0]);
        let p2 = ind(&[0, 1, 1, 0, 0, 1, 1, 1]);
        for _ in 0..200 {
            let (mut c1, mut c2) = (p1.clone(), p2.clone());
            Crossover::OnePoint.recombine(&mut c1, &mut c2, &mut rng);
            assert!(conserved(&p1, &p2, &c1, &c2));
            // Some prefix came from the other parent, the rest did not.
            let cut = (0..8).find(|&i| c1[i] == p1[i] && p1[i] != p2[i]);
            if let Some(cut) = cut {
                assert!((cut..8).all(|i| c1[i] == p1[i]));
            }
        }
    }

    #[test]
    fn test_multi_point_conserves_genes() {
        let mut rng = create_rng(7);
        let p1 = ind(&[1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
        let p2 = ind(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        for k in 1..12 {
            let (mut c1, mut c2) = (p1.clone(), p2.clone());
            Crossover::MultiPoint(k).recombine(&mut c1, &mut c2, &mut rng);
            assert!(conserved(&p1, &p2, &c1, &c2));
            // Complementary parents stay complementary.
            assert!((0..10).all(|i| c1[i] != c2[i]));
            // First segment is always swapped.
            assert!(!c1[0]);
        }
    }

    #[test]
    fn test_multi_point_max_cuts_alternates_every_gene() {
        let mut rng = create_rng(1);
        let mut a = ind(&[1, 1, 1, 1, 1]);
        let mut b = ind(&[0, 0, 0, 0, 0]);
        Crossover::MultiPoint(100).recombine(&mut a, &mut b, &mut rng);
        assert_eq!(a, ind(&[0, 1, 0, 1, 0]));
        assert_eq!(b, ind(&[1, 0, 1, 0, 1]));
    }

    #[test]
    fn test_uniform_conserves_genes() {
        let mut rng = create_rng(3);
        let p1 = ind(&[1, 0, 1, 1, 0, 0, 1, 0, 1, 1]);
        let p2 = ind(&[0, 0, 1, 0, 1, 0, 0, 1, 1, 0]);
        for _ in 0..100 {
            let (mut c1, mut c2) = (p1.clone(), p2.clone());
            Crossover::Uniform(0.5).recombine(&mut c1, &mut c2, &mut rng);
            assert!(conserved(&p1, &p2, &c1, &c2));
        }
    }

    #[test]
    fn test_uniform_ratio_extremes() {
        let mut rng = create_rng(3);
        let (p1, p2) = (ind(&[1, 1, 0, 1]), ind(&[0, 0, 1, 0]));

        let (mut a, mut b) = (p1.clone(), p2.clone());
        Crossover::Uniform(1.0).recombine(&mut a, &mut b, &mut rng);
        assert_eq!((&a, &b), (&p1, &p2));

        let (mut a, mut b) = (p1.clone(), p2.clone());
        Crossover::Uniform(0.0).recombine(&mut a, &mut b, &mut rng);
        assert_eq!((&a, &b), (&p2, &p1));
    }

    #[test]
    fn test_zero_rate_leaves_pool_unchanged() {
        let mut rng = create_rng(42);
        let original: Population = vec![
            ind(&[1, 1, 1]),
            ind(&[0, 0, 0]),
            ind(&[1, 0, 1]),
            ind(&[0, 1, 0]),
        ]
        .into();
        for strategy in [
            Crossover::OnePoint,
            Crossover::MultiPoint(2),
            Crossover::Uniform(0.5),
        ] {
            let mut pool = original.clone();
            strategy.apply(&mut pool, 0.0, &mut rng);
            assert_eq!(pool, original);
        }
    }

    #[test]
    fn test_odd_pool_last_unpaired() {
        let mut rng = create_rng(42);
        let original: Population =
            vec![ind(&[1, 1, 1, 1]), ind(&[0, 0, 0, 0]), ind(&[1, 0, 1, 0])].into();
        for strategy in [
            Crossover::OnePoint,
            Crossover::MultiPoint(2),
            Crossover::Uniform(0.0),
        ] {
            let mut pool = original.clone();
            strategy.apply(&mut pool, 1.0, &mut rng);
            assert_eq!(pool.len(), 3);
            assert_eq!(pool[2], original[2]);
            assert_ne!(pool[0], original[0]);
        }
    }

    #[test]
    fn test_single_gene_one_point_is_noop() {
        let mut rng = create_rng(42);
        let mut pool: Population = vec![ind(&[1]), ind(&[0])].into();
        Crossover::OnePoint.apply(&mut pool, 1.0, &mut rng);
        Crossover::MultiPoint(3).apply(&mut pool, 1.0, &mut rng);
        assert_eq!(pool[0], ind(&[1]));
        assert_eq!(pool[1], ind(&[0]));
    }

    #[test]
    fn test_validate() {
        assert!(Crossover::OnePoint.validate().is_ok());
        assert!(Crossover::MultiPoint(1).validate().is_ok());
        assert_eq!(
            Crossover::MultiPoint(0).validate(),
            Err(GaError::InvalidCrossoverPoints(0))
        );
        assert!(Crossover::Uniform(0.0).validate().is_ok());
        assert!(Crossover::Uniform(1.0).validate().is_ok());
        assert!(Crossover::Uniform(1.5).validate().is_err());
        assert!(Crossover::Uniform(f64::NAN).validate().is_err());
    }
}
