#[macro_use]
mod utils;

use showdown::round::{ArbiterError, Dealer, Roster, RoundArbiter, TiePolicy};
use showdown::{play_round, run_showdown, HandCategory, RoundReport, ShowdownError};
use utils::{classified, contenders, seat_cards};

#[test]
fn straight_flush_keeps_all_five_cards_in_order() {
    let hand = classified(&hand![S 14, S 13, S 12, S 11, S 10]);

    assert_eq!(hand.category, HandCategory::StraightFlush);
    assert_eq!(hand.matched, hand![S 14, S 13, S 12, S 11, S 10]);
}

#[test]
fn full_house_lists_triple_before_pair() {
    let hand = classified(&hand![H 9, D 9, C 9, S 4, H 4]);

    assert_eq!(hand.category, HandCategory::FullHouse);
    assert_eq!(hand.matched, hand![H 9, D 9, C 9, S 4, H 4]);
}

#[test]
fn ace_low_run_is_only_high_card() {
    let hand = classified(&hand![S 5, H 4, D 3, C 2, S 14]);
    assert_eq!(hand.category, HandCategory::HighCard);
}

#[test]
fn pair_tie_is_settled_by_suit_and_ignores_kickers() {
    let field = contenders(&[
        ("player 1", hand![S 11, S 11, H 2, D 3, C 4]),
        ("player 2", hand![H 11, H 11, S 9, D 8, C 7]),
    ]);

    assert!(field
        .iter()
        .all(|c| c.hand.category == HandCategory::OnePair));

    let verdict = RoundArbiter::default().winner(&field).unwrap();
    assert_eq!(verdict.winner.player, "player 1");
    assert!(verdict.unresolved.is_empty());
}

#[test]
fn identical_matched_cards_surface_an_unresolved_tie() {
    let field = contenders(&[
        ("player 1", hand![S 8, S 8, H 2, D 3, C 4]),
        ("player 2", hand![S 8, S 8, H 14, D 13, C 11]),
    ]);

    let verdict = RoundArbiter::new(TiePolicy::KeepIncumbent)
        .winner(&field)
        .unwrap();
    assert_eq!(verdict.winner.player, "player 1");
    assert_eq!(verdict.unresolved.len(), 1);
    assert_eq!(verdict.unresolved[0].player, "player 2");

    assert_eq!(
        RoundArbiter::new(TiePolicy::Fail).winner(&field),
        Err(ArbiterError::TieUnresolved {
            incumbent: 0,
            challenger: 1,
        })
    );
}

#[test]
fn empty_field_cannot_be_arbitrated() {
    let field = contenders(&[]);
    assert_eq!(
        RoundArbiter::default().winner(&field),
        Err(ArbiterError::EmptyInput)
    );
}

#[test]
fn four_of_a_kind_beats_any_flush() {
    let field = contenders(&[
        ("flush", hand![S 14, S 13, S 11, S 9, S 8]),
        ("quads", hand![S 2, H 2, D 2, C 2, H 3]),
    ]);

    let verdict = RoundArbiter::default().winner(&field).unwrap();
    assert_eq!(verdict.winner.player, "quads");
}

#[test]
fn fold_keeps_the_best_across_many_players() {
    let field = contenders(&[
        ("high", hand![S 14, H 12, D 9, C 7, S 3]),
        ("two pair", hand![S 6, H 6, D 4, C 4, S 2]),
        ("pair", hand![S 13, H 13, D 9, C 8, H 2]),
        ("straight", hand![C 9, D 8, H 7, S 6, C 5]),
        ("trips", hand![C 12, D 12, H 12, S 5, C 3]),
    ]);

    let verdict = RoundArbiter::default().winner(&field).unwrap();
    assert_eq!(verdict.winner.player, "straight");
    assert_eq!(verdict.seat, 3);
}

#[test]
fn showdown_over_a_seated_roster() {
    let mut roster = Roster::new(["Slim", "Luke"]).unwrap();
    seat_cards(&mut roster, "Slim", hand![S 12, H 12, D 5, C 5, S 3]);
    seat_cards(&mut roster, "Luke", hand![C 12, D 12, H 5, S 5, H 3]);

    let report = run_showdown(&roster, &RoundArbiter::default()).unwrap();

    // Same values throughout; Slim's queen of spades leads the matched cards.
    assert_eq!(report.winner, "Slim");
    assert_eq!(report.standings[0].category, HandCategory::TwoPair);
    assert_eq!(report.standings[1].category, HandCategory::TwoPair);
}

#[test]
fn oversized_hand_is_an_error() {
    let mut roster = Roster::new(["Slim", "Luke"]).unwrap();
    seat_cards(&mut roster, "Slim", hand![S 2, S 3, S 4, S 5, S 6, S 7]);
    seat_cards(&mut roster, "Luke", hand![H 2, H 3, H 4, H 5, H 6]);

    let result = run_showdown(&roster, &RoundArbiter::default());
    assert!(matches!(result, Err(ShowdownError::Hand(_))));
}

#[test]
fn seeded_rounds_are_reproducible() {
    let play = |seed: u64| -> Vec<RoundReport> {
        let mut roster = Roster::new(["Slim", "Luke", "Jo", "Ann"]).unwrap();
        let mut dealer = Dealer::with_seed(seed);
        let arbiter = RoundArbiter::default();
        (0..5)
            .map(|_| play_round(&mut roster, &mut dealer, &arbiter).unwrap())
            .collect()
    };

    assert_eq!(play(2024), play(2024));
}

#[test]
fn round_report_serializes_to_json() {
    let mut roster = Roster::new(["Slim", "Luke"]).unwrap();
    let mut dealer = Dealer::with_seed(8);
    let report = play_round(&mut roster, &mut dealer, &RoundArbiter::default()).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let back: RoundReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
