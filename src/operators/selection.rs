//! Selection operators
//!
//! Tournament selection picks parents; truncation selection picks the
//! survivors that form the next generation.

use rand::seq::index;
use rand::Rng;

use crate::operators::traits::{SelectionOperator, SurvivorSelection};

/// Tournament selection operator
///
/// Samples distinct competitors uniformly without replacement and returns
/// the fittest. On an exact fitness tie the competitor sampled first wins.
#[derive(Clone, Debug)]
pub struct TournamentSelection {
    /// Tournament size (number of individuals competing)
    pub tournament_size: usize,
}

impl TournamentSelection {
    /// Create a new tournament selection with the given size
    pub fn new(tournament_size: usize) -> Self {
        assert!(tournament_size >= 1, "Tournament size must be at least 1");
        Self { tournament_size }
    }

    /// Create binary tournament selection (size = 2)
    pub fn binary() -> Self {
        Self::new(2)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self::binary()
    }
}

impl SelectionOperator for TournamentSelection {
    fn select<R: Rng + ?Sized>(&self, fitness: &[f64], rng: &mut R) -> usize {
        assert!(!fitness.is_empty(), "Population cannot be empty");

        let tournament_size = self.tournament_size.min(fitness.len());
        let mut competitors = index::sample(rng, fitness.len(), tournament_size).into_iter();

        // sample() never yields fewer than tournament_size >= 1 indices
        let mut winner = competitors.next().unwrap_or(0);
        for challenger in competitors {
            if fitness[challenger] > fitness[winner] {
                winner = challenger;
            }
        }
        winner
    }
}

/// Truncation survivor selection
///
/// Ranks candidates by fitness descending and keeps the top `count`. The
/// sort is stable, so equal fitness keeps generation order.
#[derive(Clone, Debug, Default)]
pub struct TruncationSelection;

impl TruncationSelection {
    /// Create a new truncation selection
    pub fn new() -> Self {
        Self
    }
}

impl SurvivorSelection for TruncationSelection {
    fn survivors(&self, fitness: &[f64], count: usize) -> Vec<usize> {
        let mut ranked: Vec<usize> = (0..fitness.len()).collect();
        ranked.sort_by(|&a, &b| fitness[b].total_cmp(&fitness[a]));
        ranked.truncate(count);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_tournament_selection_selects_valid_index() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let fitness: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let selection = TournamentSelection::binary();

        for _ in 0..100 {
            let idx = selection.select(&fitness, &mut rng);
            assert!(idx < fitness.len());
        }
    }

    #[test]
    fn test_tournament_selection_binary() {
        let selection = TournamentSelection::binary();
        assert_eq!(selection.tournament_size, 2);
        assert_eq!(TournamentSelection::default().tournament_size, 2);
    }

    #[test]
    fn test_binary_tournament_never_picks_worst() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let fitness = vec![0.3, 0.1, 0.9, 0.5];
        let selection = TournamentSelection::binary();

        // The worst individual loses every pairing it is drawn into.
        for _ in 0..500 {
            assert_ne!(selection.select(&fitness, &mut rng), 1);
        }
    }

    #[test]
    fn test_full_tournament_always_picks_best() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let fitness = vec![0.0, 100.0, 0.0];
        let selection = TournamentSelection::new(3);

        for _ in 0..100 {
            assert_eq!(selection.select(&fitness, &mut rng), 1);
        }
    }

    #[test]
    fn test_tournament_on_single_parent() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let selection = TournamentSelection::binary();
        assert_eq!(selection.select(&[0.4], &mut rng), 0);
    }

    #[test]
    fn test_tournament_tie_is_deterministic() {
        let fitness = vec![1.0; 6];
        let selection = TournamentSelection::binary();

        let picks_a =
            selection.select_many(&fitness, 50, &mut ChaCha8Rng::seed_from_u64(99));
        let picks_b =
            selection.select_many(&fitness, 50, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_tournament_tie_goes_to_first_sampled() {
        let fitness = vec![1.0, 1.0];
        let selection = TournamentSelection::binary();

        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let first = index::sample(&mut rng, 2, 2).index(0);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            assert_eq!(selection.select(&fitness, &mut rng), first);
        }
    }

    #[test]
    fn test_tournament_prefers_fitter() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let fitness = vec![0.2, 0.8, 0.5];
        let selection = TournamentSelection::binary();

        let mut counts = [0usize; 3];
        for _ in 0..3000 {
            counts[selection.select(&fitness, &mut rng)] += 1;
        }

        assert!(counts[1] > counts[2]);
        assert!(counts[2] > counts[0]);
    }

    #[test]
    #[should_panic(expected = "Tournament size must be at least 1")]
    fn test_tournament_size_zero() {
        TournamentSelection::new(0);
    }

    #[test]
    fn test_truncation_ranks_descending() {
        let fitness = vec![0.1, 0.9, 0.5, 0.7];
        let survivors = TruncationSelection::new().survivors(&fitness, 3);
        assert_eq!(survivors, vec![1, 3, 2]);
    }

    #[test]
    fn test_truncation_ties_keep_generation_order() {
        let fitness = vec![0.0; 8];
        let survivors = TruncationSelection::new().survivors(&fitness, 3);
        assert_eq!(survivors, vec![0, 1, 2]);

        let fitness = vec![0.5, 1.0, 0.5, 1.0, 0.5];
        let survivors = TruncationSelection::new().survivors(&fitness, 4);
        assert_eq!(survivors, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_truncation_count_larger_than_pool() {
        let survivors = TruncationSelection::new().survivors(&[0.3, 0.2], 5);
        assert_eq!(survivors, vec![0, 1]);
    }
}
