use std::collections::HashSet;

use rand::Rng;
use rand::seq::IndexedRandom;

use trivia_core::model::{Question, QuestionId};

/// Drops already-served questions from the pool, keeping order otherwise.
pub(crate) fn unseen(pool: Vec<Question>, seen: &HashSet<QuestionId>) -> Vec<Question> {
    pool.into_iter()
        .filter(|question| !seen.contains(&question.id()))
        .collect()
}

/// Picks one question uniformly at random, `None` on an empty pool.
pub(crate) fn pick<'a, R: Rng + ?Sized>(pool: &'a [Question], rng: &mut R) -> Option<&'a Question> {
    pool.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use trivia_core::model::{CategoryId, QuestionDraft};

    fn build_questions(count: u64) -> Vec<Question> {
        (1..=count)
            .map(|n| {
                QuestionDraft {
                    question: format!("Question {n}"),
                    answer: format!("Answer {n}"),
                    category: CategoryId::new(1),
                    difficulty: 1,
                }
                .validate()
                .unwrap()
                .assign_id(QuestionId::new(n))
            })
            .collect()
    }

    #[test]
    fn unseen_drops_served_ids_and_keeps_order() {
        let pool = build_questions(4);
        let seen: HashSet<QuestionId> = [QuestionId::new(2), QuestionId::new(4)]
            .into_iter()
            .collect();

        let remaining = unseen(pool, &seen);
        let ids: Vec<QuestionId> = remaining.iter().map(|q| q.id()).collect();
        assert_eq!(ids, vec![QuestionId::new(1), QuestionId::new(3)]);
    }

    #[test]
    fn pick_returns_none_on_empty_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick(&[], &mut rng).is_none());
    }

    #[test]
    fn pick_reaches_every_candidate() {
        let pool = build_questions(3);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts: HashMap<QuestionId, u32> = HashMap::new();
        for _ in 0..300 {
            let question = pick(&pool, &mut rng).unwrap();
            *counts.entry(question.id()).or_default() += 1;
        }

        assert_eq!(counts.len(), 3);
        // With 300 uniform draws over 3 candidates each count should sit
        // near 100; a wide band keeps the test stable across rand versions.
        for count in counts.values() {
            assert!(*count > 50, "skewed draw distribution: {counts:?}");
        }
    }
}
