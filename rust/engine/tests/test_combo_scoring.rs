use sushigo_engine::cards::Card::*;
use sushigo_engine::scoring::{calc_score, pudding_count, score_breakdown};

#[test]
fn empty_sequence_scores_zero() {
    assert_eq!(calc_score(&[]), 0);
}

#[test]
fn dumplings() {
    assert_eq!(calc_score(&[Dumpling]), 1);
    assert_eq!(calc_score(&[Dumpling, Dumpling]), 3);
    assert_eq!(calc_score(&[Dumpling; 3]), 6);
    assert_eq!(calc_score(&[Dumpling; 4]), 10);
    assert_eq!(calc_score(&[Dumpling; 5]), 15);
    assert_eq!(calc_score(&[Dumpling; 6]), 15);
}

#[test]
fn sashimi_needs_complete_sets() {
    assert_eq!(calc_score(&[Sashimi, Sashimi]), 0);
    assert_eq!(calc_score(&[Sashimi; 3]), 10);
    assert_eq!(calc_score(&[Sashimi; 5]), 10);
    assert_eq!(calc_score(&[Sashimi; 6]), 20);
}

#[test]
fn tempura_pairs() {
    assert_eq!(calc_score(&[Tempura]), 0);
    assert_eq!(calc_score(&[Tempura, Tempura]), 5);
    assert_eq!(calc_score(&[Tempura; 4]), 10);
}

#[test]
fn plain_nigiri() {
    assert_eq!(calc_score(&[SquidNigiri, SalmonNigiri, EggNigiri]), 6);
    assert_eq!(calc_score(&[SquidNigiri]), 3);
    assert_eq!(calc_score(&[SalmonNigiri]), 2);
    assert_eq!(calc_score(&[EggNigiri]), 1);
}

#[test]
fn single_wasabi_with_nigiri() {
    assert_eq!(calc_score(&[Wasabi, SquidNigiri]), 9);
    assert_eq!(
        calc_score(&[Wasabi, SquidNigiri, SalmonNigiri, EggNigiri]),
        12
    );
    assert_eq!(
        calc_score(&[SquidNigiri, Wasabi, SalmonNigiri, EggNigiri]),
        10
    );
    assert_eq!(
        calc_score(&[SquidNigiri, SalmonNigiri, Wasabi, EggNigiri]),
        8
    );
}

#[test]
fn multiple_wasabi_with_nigiri() {
    assert_eq!(
        calc_score(&[Wasabi, SquidNigiri, Wasabi, SalmonNigiri, EggNigiri]),
        16
    );
    assert_eq!(
        calc_score(&[SquidNigiri, Wasabi, SalmonNigiri, Wasabi, EggNigiri]),
        12
    );
    assert_eq!(
        calc_score(&[SalmonNigiri, SquidNigiri, Wasabi, Wasabi, EggNigiri]),
        8
    );
}

#[test]
fn wasabi_without_nigiri() {
    assert_eq!(calc_score(&[Wasabi]), 0);
    assert_eq!(calc_score(&[SquidNigiri, Wasabi]), 3);
}

#[test]
fn stacked_wasabi_claim_nigiri_in_order() {
    // W W Sq Sa: first wasabi takes squid, second takes salmon.
    let b = score_breakdown(&[Wasabi, Wasabi, SquidNigiri, SalmonNigiri]);
    assert_eq!(b.nigiri, 5);
    assert_eq!(b.wasabi, 10);
    // Three wasabi, one nigiri: only one pairing.
    assert_eq!(calc_score(&[Wasabi, Wasabi, Wasabi, EggNigiri]), 3);
}

#[test]
fn unrelated_cards_are_ignored() {
    assert_eq!(calc_score(&[Pudding]), 0);
    assert_eq!(calc_score(&[MakiRoll, TwoMakiRoll, ThreeMakiRoll]), 0);
    assert_eq!(calc_score(&[Chopsticks, Chopsticks]), 0);
}

#[test]
fn terms_sum_independently() {
    let played = [
        Dumpling, Tempura, Sashimi, Wasabi, Dumpling, Sashimi, Tempura, Sashimi, SalmonNigiri,
        Pudding, MakiRoll,
    ];
    let b = score_breakdown(&played);
    assert_eq!(b.dumplings, 3);
    assert_eq!(b.sashimi, 10);
    assert_eq!(b.tempura, 5);
    assert_eq!(b.nigiri, 2);
    assert_eq!(b.wasabi, 4);
    assert_eq!(calc_score(&played), 24);
}

#[test]
fn pudding_counting() {
    assert_eq!(
        pudding_count(&[Pudding, Wasabi, MakiRoll, Tempura, Pudding]),
        2
    );
    assert_eq!(pudding_count(&[]), 0);
    assert_eq!(pudding_count(&[MakiRoll]), 0);
}
