use tally_mcts::Outcome;

#[test]
fn flip_swaps_wins_and_losses() {
    let outcome = Outcome::new(3, 2, 5);
    let flipped = outcome.flipped();

    assert_eq!(flipped.wins, 5);
    assert_eq!(flipped.draws, 2);
    assert_eq!(flipped.losses, 3);
}

#[test]
fn flip_is_involutive() {
    let outcome = Outcome::new(7, 1, 4);
    assert_eq!(outcome.flipped().flipped(), outcome);
}

#[test]
fn unit_constants_flip_into_each_other() {
    assert_eq!(Outcome::WIN.flipped(), Outcome::LOSS);
    assert_eq!(Outcome::LOSS.flipped(), Outcome::WIN);
    assert_eq!(Outcome::DRAW.flipped(), Outcome::DRAW);
    assert_eq!(Outcome::NONE.flipped(), Outcome::NONE);
}

#[test]
fn total_sums_all_components() {
    assert_eq!(Outcome::new(3, 2, 5).total(), 10);
    assert_eq!(Outcome::NONE.total(), 0);
}

#[test]
fn clamped_unit_caps_each_component() {
    assert_eq!(Outcome::new(3, 0, 5).clamped_unit(), Outcome::new(1, 0, 1));
    assert_eq!(Outcome::LOSS.clamped_unit(), Outcome::LOSS);
    assert_eq!(Outcome::NONE.clamped_unit(), Outcome::NONE);
}

#[test]
fn addition_is_element_wise() {
    let mut tally = Outcome::new(1, 0, 2);
    tally += Outcome::new(0, 3, 1);

    assert_eq!(tally, Outcome::new(1, 3, 3));
    assert_eq!(tally + Outcome::WIN, Outcome::new(2, 3, 3));
}

#[test]
fn display_shows_tallies_in_order() {
    assert_eq!(Outcome::new(4, 1, 2).to_string(), "4W/1D/2L");
}
