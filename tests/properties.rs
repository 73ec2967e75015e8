use hangman_entropy::core::{LetterSet, RevealedPattern, Word};
use hangman_entropy::solver::entropy::{ENTROPY_TOLERANCE, binary_guess_entropy, group_entropy};
use hangman_entropy::solver::{build_signature_groups, filter_candidates};
use proptest::prelude::*;
use rustc_hash::FxHashSet;

fn words_of_len_four() -> impl Strategy<Value = Vec<Word>> {
    proptest::collection::vec("[a-f]{4}", 1..40)
        .prop_map(|texts| texts.iter().map(|t| Word::new(t.as_str()).unwrap()).collect())
}

proptest! {
    #[test]
    fn group_entropy_is_non_negative(sizes in proptest::collection::vec(1usize..50, 1..10)) {
        let total: usize = sizes.iter().sum();
        let entropy = group_entropy(sizes.iter().copied(), total);

        prop_assert!(entropy >= 0.0);
        if sizes.len() == 1 {
            prop_assert_eq!(entropy, 0.0);
        } else {
            prop_assert!(entropy > ENTROPY_TOLERANCE);
        }
        prop_assert!(entropy <= (sizes.len() as f64).log2() + 1e-9);
    }

    #[test]
    fn binary_guess_entropy_decreases(n in 2usize..5000) {
        let here = binary_guess_entropy(n);
        let next = binary_guess_entropy(n + 1);
        prop_assert!(next < here);
        prop_assert!(next > 0.0);
    }

    #[test]
    fn signature_groups_partition_candidates(
        words in words_of_len_four(),
        letter in b'a'..=b'f',
    ) {
        let candidates: Vec<&Word> = words.iter().collect();
        let groups = build_signature_groups(letter, &[0, 1, 2, 3], &candidates);

        prop_assert!(groups.values().all(|g| !g.is_empty()));
        prop_assert_eq!(groups.values().map(Vec::len).sum::<usize>(), candidates.len());

        let mut regrouped: Vec<&str> = groups.values().flatten().map(|w| w.text()).collect();
        let mut original: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
        regrouped.sort_unstable();
        original.sort_unstable();
        prop_assert_eq!(regrouped, original);
    }

    #[test]
    fn filtering_is_idempotent(
        words in words_of_len_four(),
        secret in "[a-f]{4}",
        guessed in proptest::collection::vec(b'a'..=b'f', 0..4),
    ) {
        let secret = Word::new(secret.as_str()).unwrap();
        let guessed_letters: LetterSet = guessed.iter().copied().collect();

        let mut pattern = RevealedPattern::unknown(secret.len());
        for letter in guessed_letters.iter() {
            pattern.reveal(letter, &secret);
        }

        let none = FxHashSet::default();
        let once = filter_candidates(&words, &pattern, guessed_letters, &none);
        let twice = filter_candidates(once.iter().copied(), &pattern, guessed_letters, &none);
        prop_assert_eq!(once, twice);
    }
}
