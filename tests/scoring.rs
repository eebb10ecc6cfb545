//! Hand scoring integration tests.

use cribrs::{
    Card, Category, Descriptor, Score, ScoreError, ScoreEvent, Suit, his_heels, score_hand,
};
use rstest::rstest;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

const fn c(rank: u8) -> Card {
    card(Suit::Clubs, rank)
}
const fn h(rank: u8) -> Card {
    card(Suit::Hearts, rank)
}
const fn d(rank: u8) -> Card {
    card(Suit::Diamonds, rank)
}
const fn s(rank: u8) -> Card {
    card(Suit::Spades, rank)
}

fn categories(score: &Score) -> Vec<Category> {
    score.events.iter().map(|event| event.category).collect()
}

#[rstest]
#[case([c(5), h(6), d(7), s(8)], c(9), 9)] // run of five, 6+9 and 7+8
#[case([c(5), h(5), d(6), s(7)], c(4), 14)] // double run of four with a pair
#[case([c(3), h(4), d(4), s(5)], c(13), 10)] // double run of three
#[case([c(3), h(3), d(3), s(4)], c(5), 21)] // triple run
#[case([c(4), h(4), d(5), s(5)], c(6), 24)] // double double run
#[case([c(2), h(3), d(4), s(5)], c(5), 12)] // double run of four
#[case([c(5), h(5), d(5), s(11)], s(5), 29)] // best possible hand
#[case([c(2), h(4), d(6), s(8)], c(10), 0)] // nineteen hand
fn scores_known_hands(#[case] hand: [Card; 4], #[case] starter: Card, #[case] expected: u32) {
    let score = score_hand(&hand, starter, false).unwrap();
    assert_eq!(score.total, expected);
    assert_eq!(
        score.total,
        score.events.iter().map(|event| event.points).sum::<u32>()
    );
}

#[test]
fn run_and_fifteens_breakdown() {
    let score = score_hand(&[c(5), h(6), d(7), s(8)], c(9), false).unwrap();

    assert_eq!(
        score.events,
        vec![
            ScoreEvent {
                category: Category::Fifteens { count: 2 },
                descriptor: None,
                points: 4,
            },
            ScoreEvent {
                category: Category::Run(5),
                descriptor: Some(Descriptor::Span { low: 5, high: 9 }),
                points: 5,
            },
        ]
    );
}

#[test]
fn multiples_count_only_non_overlapping_matches() {
    let score = score_hand(&[c(5), h(5), d(6), s(7)], c(4), false).unwrap();

    let kinds: Vec<&ScoreEvent> = score
        .events
        .iter()
        .filter(|event| matches!(event.category, Category::OfAKind(_)))
        .collect();
    assert_eq!(kinds.len(), 1);
    assert_eq!(kinds[0].category, Category::OfAKind(2));
    assert_eq!(kinds[0].descriptor, Some(Descriptor::Rank(5)));
    assert_eq!(kinds[0].points, 2);
}

#[test]
fn three_of_a_kind_excludes_its_pairs() {
    let score = score_hand(&[c(9), h(9), d(9), s(2)], c(13), false).unwrap();

    assert_eq!(
        score.points_where(|category| matches!(category, Category::OfAKind(_))),
        6
    );
    assert!(!categories(&score).contains(&Category::OfAKind(2)));
}

#[test]
fn four_of_a_kind_excludes_triples_and_pairs() {
    let score = score_hand(&[c(8), h(8), d(8), s(8)], c(1), false).unwrap();

    let kinds: Vec<Category> = categories(&score)
        .into_iter()
        .filter(|category| matches!(category, Category::OfAKind(_)))
        .collect();
    assert_eq!(kinds, vec![Category::OfAKind(4)]);
}

#[test]
fn separate_pairs_both_score() {
    let score = score_hand(&[c(2), h(2), d(9), s(9)], c(13), false).unwrap();

    let pairs: Vec<Option<Descriptor>> = score
        .events
        .iter()
        .filter(|event| event.category == Category::OfAKind(2))
        .map(|event| event.descriptor)
        .collect();
    assert_eq!(
        pairs,
        vec![Some(Descriptor::Rank(2)), Some(Descriptor::Rank(9))]
    );
}

#[test]
fn double_run_scores_two_runs_of_three() {
    let score = score_hand(&[c(3), h(4), d(4), s(5)], c(13), false).unwrap();

    let runs: Vec<Category> = categories(&score)
        .into_iter()
        .filter(|category| matches!(category, Category::Run(_)))
        .collect();
    assert_eq!(runs, vec![Category::Run(3), Category::Run(3)]);
}

#[test]
fn long_run_excludes_embedded_runs() {
    let score = score_hand(&[c(1), h(2), d(3), s(4)], c(5), false).unwrap();

    assert_eq!(
        score.points_where(|category| matches!(category, Category::Run(_))),
        5
    );
}

#[test]
fn fifteens_count_nested_subsets() {
    // Each five with the ten, plus the three fives together.
    let score = score_hand(&[c(5), h(5), d(5), s(10)], c(2), false).unwrap();

    assert_eq!(score.events[0].category, Category::Fifteens { count: 4 });
    assert_eq!(score.events[0].points, 8);
}

#[test]
fn flush_depends_on_crib_context() {
    let hand = [h(2), h(4), h(6), h(8)];
    let starter = c(13);

    let in_hand = score_hand(&hand, starter, false).unwrap();
    let in_crib = score_hand(&hand, starter, true).unwrap();

    assert_eq!(in_hand.points_where(|category| *category == Category::Flush), 4);
    assert_eq!(in_crib.points_where(|category| *category == Category::Flush), 0);
    assert_eq!(in_hand.total, in_crib.total + 4);
}

#[test]
fn five_card_flush_counts_in_crib() {
    let hand = [h(2), h(4), h(6), h(8)];

    for is_crib in [false, true] {
        let score = score_hand(&hand, h(13), is_crib).unwrap();
        let flush: Vec<&ScoreEvent> = score
            .events
            .iter()
            .filter(|event| matches!(event.category, Category::Flush | Category::FlushRoyal))
            .collect();
        assert_eq!(flush.len(), 1);
        assert_eq!(flush[0].category, Category::FlushRoyal);
        assert_eq!(flush[0].descriptor, Some(Descriptor::Suit(Suit::Hearts)));
        assert_eq!(flush[0].points, 5);
    }
}

#[test]
fn nobs_requires_matching_jack_in_hand() {
    let score = score_hand(&[s(11), h(2), d(4), c(6)], s(9), false).unwrap();
    assert_eq!(score.events.last().map(|event| event.category), Some(Category::Nobs));
    assert_eq!(score.points_where(|category| *category == Category::Nobs), 1);

    let wrong_suit = score_hand(&[s(11), h(2), d(4), c(6)], h(9), false).unwrap();
    assert_eq!(wrong_suit.points_where(|category| *category == Category::Nobs), 0);
}

#[test]
fn jack_starter_never_gives_nobs() {
    let score = score_hand(&[d(11), h(2), d(4), c(6)], s(11), false).unwrap();
    assert_eq!(score.points_where(|category| *category == Category::Nobs), 0);

    let no_jack = score_hand(&[s(2), h(4), d(6), c(8)], s(11), false).unwrap();
    assert_eq!(no_jack.points_where(|category| *category == Category::Nobs), 0);
}

#[test]
fn his_heels_scores_jack_starter() {
    assert_eq!(his_heels(s(11)), 2);
    assert_eq!(his_heels(s(12)), 0);
}

#[test]
fn breakdown_follows_category_order() {
    let score = score_hand(&[h(9), h(10), h(11), h(12)], h(6), false).unwrap();

    assert_eq!(
        categories(&score),
        vec![
            Category::Fifteens { count: 1 },
            Category::FlushRoyal,
            Category::Run(4),
            Category::Nobs,
        ]
    );
    assert_eq!(score.total, 12);

    let with_pair = score_hand(&[h(4), c(4), h(5), d(11)], d(6), false).unwrap();
    assert_eq!(
        categories(&with_pair),
        vec![
            Category::Fifteens { count: 3 },
            Category::OfAKind(2),
            Category::Run(3),
            Category::Run(3),
            Category::Nobs,
        ]
    );
    assert_eq!(with_pair.total, 15);
}

#[test]
fn score_is_invariant_under_hand_order() {
    let hands = [
        ([c(3), h(4), d(4), s(5)], c(13)),
        ([h(2), h(4), h(6), h(8)], c(7)),
        ([s(11), h(5), d(5), c(5)], s(10)),
        ([c(1), h(2), d(3), s(3)], c(3)),
    ];

    for (hand, starter) in hands {
        let reference = score_hand(&hand, starter, false).unwrap();
        let mut expected = categories(&reference);
        expected.sort_by_key(|category| format!("{category}"));

        for a in 0..4 {
            for b in 0..4 {
                for x in 0..4 {
                    for y in 0..4 {
                        let order = [a, b, x, y];
                        if (0..4).any(|i| !order.contains(&i)) {
                            continue;
                        }
                        let permuted = order.map(|i| hand[i]);
                        let score = score_hand(&permuted, starter, false).unwrap();
                        let mut found = categories(&score);
                        found.sort_by_key(|category| format!("{category}"));

                        assert_eq!(score.total, reference.total);
                        assert_eq!(found, expected);
                    }
                }
            }
        }
    }
}

#[test]
fn scoring_does_not_mutate_inputs() {
    let hand = vec![c(5), h(6), d(7), s(8)];
    let before = hand.clone();
    let _ = score_hand(&hand, c(9), true).unwrap();
    assert_eq!(hand, before);
}

#[test]
fn rejects_wrong_hand_size() {
    assert_eq!(
        score_hand(&[c(5), h(6), d(7)], c(9), false).unwrap_err(),
        ScoreError::InvalidHandSize {
            expected: 4,
            found: 3
        }
    );
    assert_eq!(
        score_hand(&[c(5), h(6), d(7), s(8), s(9)], c(9), false).unwrap_err(),
        ScoreError::InvalidHandSize {
            expected: 4,
            found: 5
        }
    );
}

#[test]
fn rejects_duplicate_cards() {
    assert_eq!(
        score_hand(&[c(5), h(6), d(7), s(8)], c(5), false).unwrap_err(),
        ScoreError::DuplicateCard(c(5))
    );
    assert_eq!(
        score_hand(&[c(5), h(6), h(6), s(8)], c(9), false).unwrap_err(),
        ScoreError::DuplicateCard(h(6))
    );
}

#[test]
fn events_render_as_narration() {
    let score = score_hand(&[c(5), h(5), d(6), s(7)], c(4), false).unwrap();
    let lines: Vec<String> = score.events.iter().map(ToString::to_string).collect();

    assert_eq!(
        lines,
        vec![
            "2 fifteens for 4",
            "pair of fives for 2",
            "run of 4 from four to seven for 4",
            "run of 4 from four to seven for 4",
        ]
    );

    let nobs = score_hand(&[s(11), h(2), d(4), c(6)], s(9), false).unwrap();
    assert!(nobs.events.iter().any(|event| event.to_string() == "nobs for 1"));
}
