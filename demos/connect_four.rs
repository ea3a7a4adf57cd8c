//! Interactive connect-four driver for the search engine
//!
//! Run without arguments to play as X against the engine:
//!
//! ```bash
//! cargo run --example connect_four
//! ```
//!
//! Or let the engine play itself, optionally over a series of games with a
//! running score tally:
//!
//! ```bash
//! cargo run --example connect_four -- selfplay
//! cargo run --example connect_four -- selfplay 20
//! ```

use std::io::{self, Write};

use tally_mcts::connect_four::{ConnectFour, Token};
use tally_mcts::{RandomStrategy, SearchNode, Strategy};

/// Rollouts per engine move when playing against a human
const PLAY_TRYOUTS: usize = 5000;

/// Rollouts per engine move in self-play
const SELFPLAY_TRYOUTS: usize = 1000;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let result = match args.get(1).map(String::as_str) {
        Some("selfplay") => {
            let games = args
                .get(2)
                .and_then(|arg| arg.parse::<usize>().ok())
                .unwrap_or(1);
            play_engine_series(games)
        }
        _ => play_interactive(),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Human plays X, the engine plays O
fn play_interactive() -> tally_mcts::Result<()> {
    let mut node = SearchNode::new(ConnectFour::new(Token::X));
    let mut strategy = RandomStrategy::new(PLAY_TRYOUTS);

    println!("{}", node.position());

    loop {
        // Human move
        let column = read_column(node.position());
        let freedom = match node.freedom_of(&column) {
            Some(freedom) => freedom,
            None => continue,
        };
        node = node.into_child(freedom)?;
        println!("{}", node.position());
        if node.position().check_win(column) {
            println!("Congratulations, X! You won!");
            return Ok(());
        }
        if node.is_terminal() {
            println!("The game is a draw!");
            return Ok(());
        }

        // Engine move
        println!("thinking...");
        strategy.explore(&mut node)?;
        print_choices(&node);
        let (_, next) = strategy.advance(node)?;
        node = next;
        println!("{}", node.position());
        if node.is_terminal() {
            // A terminal loss tally means the player to move (the human)
            // lost to the move just played.
            if node.outcome().losses > 0 {
                println!("Congratulations, O! You won!");
            } else {
                println!("The game is a draw!");
            }
            return Ok(());
        }
    }
}

/// Plays `games` engine-vs-engine games and prints a running score tally
fn play_engine_series(games: usize) -> tally_mcts::Result<()> {
    let verbose = games == 1;
    let mut x_wins = 0usize;
    let mut o_wins = 0usize;
    let mut draws = 0usize;

    for game in 1..=games {
        match play_engine_game(verbose)? {
            Some(Token::X) => x_wins += 1,
            Some(Token::O) => o_wins += 1,
            None => draws += 1,
        }
        println!("game {game}: X {x_wins} / O {o_wins} / draws {draws}");
    }
    Ok(())
}

/// One engine-vs-engine game; returns the winner, if any
fn play_engine_game(verbose: bool) -> tally_mcts::Result<Option<Token>> {
    let mut node = SearchNode::new(ConnectFour::new(Token::X));
    let mut strategy = RandomStrategy::new(SELFPLAY_TRYOUTS);

    loop {
        let mover = node.position().to_move();
        strategy.explore(&mut node)?;
        if verbose {
            print_choices(&node);
        }
        let (_, next) = strategy.advance(node)?;
        node = next;
        if verbose {
            println!("{}\n", node.position());
        }
        if node.is_terminal() {
            let winner = (node.outcome().losses > 0).then_some(mover);
            return Ok(winner);
        }
    }
}

/// Prints each explored column with its aggregated tally
fn print_choices(node: &SearchNode<ConnectFour>) {
    let columns = node.position().available_columns();
    println!("====");
    for (freedom, child) in node.expanded() {
        println!("  column {}: {}", columns[freedom], child.outcome());
    }
}

/// Prompts until the human enters an open column
fn read_column(board: &ConnectFour) -> usize {
    loop {
        print!("{}. Which column do you want to place in? ", board.to_move());
        io::stdout().flush().ok();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            continue;
        }
        match input.trim().parse::<usize>() {
            Ok(column) if board.available_columns().contains(&column) => return column,
            Ok(column) => println!("I'm sorry, but you can't place tokens in column {column}."),
            Err(_) => println!("Please enter a column number."),
        }
    }
}
