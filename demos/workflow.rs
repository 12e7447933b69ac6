//! Board Workflow
//!
//! Loads `demos/board.yaml`, prints the FSM listing and the issue board.
//!
//! Key concepts:
//! - Start and end states are inferred from the transitions
//! - The workflow order is depth-first, successors by name
//! - Issues in unknown states are reported, not rejected
//!
//! Run with: cargo run --example workflow

use statewalk::loader::Session;
use statewalk::render::text;

fn main() -> anyhow::Result<()> {
    println!("=== Board Workflow ===");

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/board.yaml");
    let mut session = Session::new();
    session.load(path)?;

    let fsm = session.fsm()?;
    print!("{}", text::fsm(fsm)?);

    let board = session.board()?;
    print!("{}", text::board(&board));

    for issue in board.unplaced() {
        println!("not on the board: {issue}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
