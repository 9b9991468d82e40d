//! Terminal front-end for two-player play.
//!
//! A thin caller over the rule engine: renders the board, reads long
//! algebraic moves from stdin, applies them through the validated
//! `make_move` entry point, and announces check, checkmate, and stalemate.

use std::io::{self, BufRead, Write};

use parlor_chess::engines::engine_random::choose_random_move;
use parlor_chess::game_state::game_state::GameState;
use parlor_chess::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};
use parlor_chess::utils::pgn::write_pgn;
use parlor_chess::utils::render_game_state::render_game_state;

const HELP: &str = "commands: <move> (e.g. e2e4), moves, random, undo, fen, pgn, help, quit";

fn main() {
    let initial = GameState::new_game();
    let mut game = initial.clone();

    println!("parlor_chess - local two-player game");
    println!("{HELP}");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}", render_game_state(&game));

        let legal = game.valid_moves();
        if game.checkmate {
            let winner = if game.white_to_move() { "Black" } else { "White" };
            println!("Checkmate. {winner} is victorious.");
        } else if game.stalemate {
            println!("Stalemate. The game is drawn.");
        } else if game.in_check() {
            println!("Check.");
        }

        let prompt = if game.white_to_move() { "white> " } else { "black> " };
        print!("{prompt}");
        if io::stdout().flush().is_err() {
            break;
        }

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let input = line.trim();

        match input {
            "" => {}
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "moves" => {
                let rendered: Vec<String> = legal
                    .iter()
                    .filter_map(|mv| move_to_long_algebraic(mv).ok())
                    .collect();
                println!("{} legal moves: {}", rendered.len(), rendered.join(" "));
            }
            "undo" => {
                if game.undo_move().is_none() {
                    println!("Nothing to undo.");
                }
            }
            "fen" => println!("{}", game.get_fen()),
            "pgn" => match write_pgn(&initial, &game.move_history, &result_text(&game)) {
                Ok(pgn) => print!("{pgn}"),
                Err(message) => println!("PGN export failed: {message}"),
            },
            "random" => match choose_random_move(&mut game) {
                Some(chess_move) => {
                    let lan = move_to_long_algebraic(&chess_move).unwrap_or_default();
                    match game.make_move(chess_move) {
                        Ok(()) => println!("random move: {lan}"),
                        Err(error) => println!("random move failed: {error:?}"),
                    }
                }
                None => println!("No legal moves available."),
            },
            text => match long_algebraic_to_move(text, &game) {
                Ok(chess_move) => {
                    if game.make_move(chess_move).is_err() {
                        println!("Illegal move: {text}");
                    }
                }
                Err(message) => println!("{message} ({HELP})"),
            },
        }
    }

    println!("{}", result_text(&game));
}

fn result_text(game: &GameState) -> String {
    if game.checkmate {
        if game.white_to_move() { "0-1" } else { "1-0" }.to_owned()
    } else if game.stalemate {
        "1/2-1/2".to_owned()
    } else {
        "*".to_owned()
    }
}
