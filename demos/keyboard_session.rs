//! Keyboard Session
//!
//! A line-oriented front end: each line read from stdin is either a keyboard
//! key name (`7`, `*`, `Enter`, `Backspace`, `Escape`) or a keypad token
//! (`sqrt`, `1/x`, `%`, `+/-`, `CE`, `clear-history`). The display is printed
//! after every input. An optional TOML config path may be passed as the first
//! argument. The final session state is printed as JSON on exit.
//!
//! Run with: cargo run --example keyboard_session [config.toml]

use calcflow::{CalculatorEngine, EngineConfig, InputEvent};
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let mut engine = CalculatorEngine::with_config(&config);

    println!("=== Keyboard Session (Ctrl-D to quit) ===");
    for line in io::stdin().lock().lines() {
        let line = line?;
        let key = line.trim();
        if key.is_empty() {
            continue;
        }

        let event = match InputEvent::from_key(key) {
            Some(event) => event,
            None => match key.parse::<InputEvent>() {
                Ok(event) => event,
                Err(err) => {
                    eprintln!("{err}");
                    continue;
                }
            },
        };

        let output = engine.apply(event);
        // Mark results and errors
        let marker = if output.phase.shows_result() { '=' } else { ' ' };
        println!("  {:>30}", output.previous_label);
        println!("{marker} {:>30}", output.current_operand);
    }

    println!("\nHistory:");
    for line in engine.history().lines() {
        println!("  {line}");
    }

    let snapshot = serde_json::to_string_pretty(&engine.into_state())?;
    println!("\nSession snapshot:\n{snapshot}");
    Ok(())
}
