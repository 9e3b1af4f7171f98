// Headless smoke binary: run one AI search from the opening position and
// print the chosen board. Rendering and interactive play live outside this
// crate; this only exercises the engine end to end.
//
// RUST_LOG=checkers_engine=debug shows the search summary,
// RUST_LOG=checkers_engine=trace additionally streams every considered piece.

use checkers_engine::agent::ai::{Difficulty, MinimaxPlayer, TraceObserver};
use checkers_engine::agent::player::Player;
use checkers_engine::game_repr::{Board, Color};

fn main() {
    env_logger::init();

    let board = Board::new();
    let mut ai = MinimaxPlayer::with_difficulty(Color::White, Difficulty::Hard)
        .with_observer(Box::new(TraceObserver));

    println!("{} searching the opening position...", ai.name());
    match ai.choose_position(&board) {
        Some(next) => {
            println!("chosen position (evaluates to {:+.1}):", next.evaluate());
            print!("{}", next);
        }
        None => println!("no legal continuation for White"),
    }
}
