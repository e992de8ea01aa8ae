//! Score Keeper entry point
//!
//! Plays back a session from stdin: each whitespace-separated integer is one
//! finished game. Scores are persisted to `files/` at EOF.

use std::io::Read;
use std::process::ExitCode;

use score_keeper::ScoreTracker;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Score Keeper starting...");

    let mut tracker = ScoreTracker::new();

    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        log::error!("Failed to read stdin: {err}");
        return ExitCode::FAILURE;
    }

    for token in input.split_whitespace() {
        match token.parse::<i64>() {
            Ok(score) => {
                tracker.set_score(score);
                tracker.record_score();
                tracker.reset();
            }
            Err(_) => log::warn!("Skipping non-numeric score {token:?}"),
        }
    }

    let saved = tracker.persist();
    println!(
        "Games: {}  High Score: {}",
        tracker.history().len(),
        tracker.high_score()
    );

    match saved {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Could not save scores: {err}");
            ExitCode::FAILURE
        }
    }
}
