use rand::Rng;
use rand::seq::SliceRandom;

use range_core::model::{HandColorCatalog, Question};

/// Selection result for a drill build.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionPlan {
    pub questions: Vec<Question>,
    /// Size of the catalog the questions were drawn from.
    pub catalog_size: usize,
}

impl QuestionPlan {
    /// Total number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Returns true when no questions were selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Draws a question set from a catalog without replacement.
pub struct QuestionPlanner<'a> {
    catalog: &'a HandColorCatalog,
    sample_size: usize,
}

impl<'a> QuestionPlanner<'a> {
    #[must_use]
    pub fn new(catalog: &'a HandColorCatalog, sample_size: usize) -> Self {
        Self {
            catalog,
            sample_size,
        }
    }

    /// Shuffle the catalog uniformly (Fisher-Yates) and keep the first
    /// `min(sample_size, catalog.len())` entries.
    pub fn build<R: Rng + ?Sized>(self, rng: &mut R) -> QuestionPlan {
        let mut entries = self.catalog.entries().to_vec();
        entries.shuffle(rng);
        entries.truncate(self.sample_size);

        QuestionPlan {
            questions: entries.into_iter().map(Question::from).collect(),
            catalog_size: self.catalog.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use range_core::model::{Color, HandColorEntry};
    use std::collections::{HashMap, HashSet};

    fn catalog(n: usize) -> HandColorCatalog {
        let hands = [
            "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22",
        ];
        HandColorCatalog::new(
            hands
                .iter()
                .take(n)
                .map(|h| HandColorEntry::new(*h, Color::Navy))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn takes_min_of_sample_size_and_catalog() {
        let mut rng = StdRng::seed_from_u64(1);
        let cat = catalog(10);
        assert_eq!(QuestionPlanner::new(&cat, 4).build(&mut rng).total(), 4);
        assert_eq!(QuestionPlanner::new(&cat, 100).build(&mut rng).total(), 10);
        assert_eq!(QuestionPlanner::new(&cat, 0).build(&mut rng).total(), 0);
    }

    #[test]
    fn never_repeats_a_hand() {
        let mut rng = StdRng::seed_from_u64(42);
        let cat = catalog(13);
        for _ in 0..50 {
            let plan = QuestionPlanner::new(&cat, 9).build(&mut rng);
            let unique: HashSet<_> = plan.questions.iter().map(|q| q.hand.clone()).collect();
            assert_eq!(unique.len(), plan.total());
        }
    }

    #[test]
    fn same_seed_gives_same_plan() {
        let cat = catalog(13);
        let a = QuestionPlanner::new(&cat, 5).build(&mut StdRng::seed_from_u64(9));
        let b = QuestionPlanner::new(&cat, 5).build(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn first_slot_is_roughly_uniform() {
        let cat = catalog(4);
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<String, usize> = HashMap::new();
        let rounds = 8_000;
        for _ in 0..rounds {
            let plan = QuestionPlanner::new(&cat, 1).build(&mut rng);
            *counts.entry(plan.questions[0].hand.clone()).or_default() += 1;
        }
        assert_eq!(counts.len(), 4);
        for (hand, count) in counts {
            // expected 2000 each
            assert!((1_700..=2_300).contains(&count), "{hand} drawn {count} times");
        }
    }
}
