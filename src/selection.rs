//! Weighted random choice.
//!
//! Both walk policies reduce to the same primitive: pick one index from a
//! list of non-negative weights, with probability proportional to the
//! weight, falling back to a uniform draw when every weight is zero.

use rand::Rng;

/// Selects an index with probability proportional to its weight.
///
/// All weights must be non-negative and finite. When the total weight is
/// zero the draw is uniform over all indices rather than a division by
/// zero.
///
/// # Panics
/// Panics if `weights` is empty.
pub fn weighted_choice<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    assert!(!weights.is_empty(), "cannot choose from empty weights");

    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return rng.random_range(0..weights.len());
    }

    let mut roll = rng.random_range(0.0..total);
    for (index, &weight) in weights.iter().enumerate() {
        roll -= weight;
        if roll < 0.0 {
            return index;
        }
    }
    // Floating-point slack can leave a residual roll; the last positive
    // weight takes it.
    weights
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(weights.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_weight_never_chosen() {
        let mut rng = StdRng::seed_from_u64(1);
        let weights = [0.0, 3.0, 0.0, 1.0];
        for _ in 0..200 {
            let pick = weighted_choice(&weights, &mut rng);
            assert!(pick == 1 || pick == 3);
        }
    }

    #[test]
    fn test_all_zero_falls_back_to_uniform() {
        let mut rng = StdRng::seed_from_u64(2);
        let weights = [0.0, 0.0, 0.0];
        let mut seen = [false; 3];
        for _ in 0..300 {
            seen[weighted_choice(&weights, &mut rng)] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_single_weight() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(weighted_choice(&[0.0], &mut rng), 0);
        assert_eq!(weighted_choice(&[7.5], &mut rng), 0);
    }

    #[test]
    fn test_heavier_weight_dominates() {
        let mut rng = StdRng::seed_from_u64(4);
        let weights = [1.0, 99.0];
        let hits = (0..1000)
            .filter(|_| weighted_choice(&weights, &mut rng) == 1)
            .count();
        assert!(hits > 900, "heavy weight picked only {hits}/1000 times");
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let weights = [1.0, 2.0, 3.0];
        let picks_a: Vec<usize> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..50).map(|_| weighted_choice(&weights, &mut rng)).collect()
        };
        let picks_b: Vec<usize> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..50).map(|_| weighted_choice(&weights, &mut rng)).collect()
        };
        assert_eq!(picks_a, picks_b);
    }
}
