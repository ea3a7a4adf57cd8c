use tally_mcts::{Outcome, Position, RandomStrategy, Result, SearchError, SearchNode, Strategy};

/// Take-away game for testing: players alternately remove one or two
/// counters, and taking the last counter wins.
#[derive(Clone, Debug)]
struct TakeAway {
    remaining: u32,
}

impl Position for TakeAway {
    type Move = u32;

    fn legal_moves(&self) -> Vec<u32> {
        (1..=2).filter(|&take| take <= self.remaining).collect()
    }

    fn apply(&self, take: &u32) -> Result<Self> {
        if !self.legal_moves().contains(take) {
            return Err(SearchError::InvalidMove(format!("cannot take {take}")));
        }
        Ok(TakeAway {
            remaining: self.remaining - take,
        })
    }

    fn is_winning_move(&self, _take: &u32) -> bool {
        self.remaining == 0
    }
}

#[test]
fn one_rollout_through_a_winning_move() {
    // Only one move exists and it wins for the mover, so the child holds
    // exactly one loss and the parent tallies exactly one win.
    let mut node = SearchNode::new(TakeAway { remaining: 1 });
    let mut strategy = RandomStrategy::new(1);

    strategy.explore(&mut node).unwrap();

    assert_eq!(node.outcome(), Outcome::new(1, 0, 0));
    let (_, child) = node.expanded().next().unwrap();
    assert_eq!(child.outcome(), Outcome::new(0, 0, 1));
}

#[test]
fn every_rollout_adds_one_unit_at_the_root() {
    let mut node = SearchNode::new(TakeAway { remaining: 9 });
    let mut strategy = RandomStrategy::new(50);

    strategy.explore(&mut node).unwrap();

    assert_eq!(node.outcome().total(), 50);
}

#[test]
fn node_outcome_sums_the_flipped_outcomes_of_its_children() {
    // Both depth-one children of a nine-counter game are interior nodes,
    // so everything the root tallied arrived through them.
    let mut node = SearchNode::new(TakeAway { remaining: 9 });
    let mut strategy = RandomStrategy::new(80);

    strategy.explore(&mut node).unwrap();

    let summed = node
        .expanded()
        .map(|(_, child)| node.child_outcome(child))
        .fold(Outcome::NONE, |acc, outcome| acc + outcome);
    assert_eq!(node.outcome(), summed);
}

#[test]
fn terminal_tallies_stay_at_one_unit() {
    // The single child is terminal; repeated rollouts keep crediting the
    // parent but the terminal tally itself never grows.
    let mut node = SearchNode::new(TakeAway { remaining: 1 });
    let mut strategy = RandomStrategy::new(7);

    strategy.explore(&mut node).unwrap();

    assert_eq!(node.outcome(), Outcome::new(7, 0, 0));
    let (_, child) = node.expanded().next().unwrap();
    assert_eq!(child.outcome(), Outcome::LOSS);
}

#[test]
fn exploring_a_terminal_node_changes_nothing() {
    let mut node = SearchNode::new(TakeAway { remaining: 0 });
    let mut strategy = RandomStrategy::new(5);

    strategy.explore(&mut node).unwrap();

    assert!(node.is_terminal());
    assert_eq!(node.outcome(), Outcome::DRAW);
    assert_eq!(node.expanded().count(), 0);
}

#[test]
fn rollouts_only_expand_along_visited_paths() {
    // A budget of one grows at most one child per ply.
    let mut node = SearchNode::new(TakeAway { remaining: 9 });
    let mut strategy = RandomStrategy::new(1);

    strategy.explore(&mut node).unwrap();

    assert_eq!(node.expanded().count(), 1);
}
