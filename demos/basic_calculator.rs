//! Basic Calculator
//!
//! This example replays a few scripted button sequences and prints what the
//! display would show after each one.
//!
//! Key concepts:
//! - One `apply` call per button press
//! - Chained equals repeating the last operation
//! - Functions folding into a pending operation
//! - Error sentinels and recovery
//!
//! Run with: cargo run --example basic_calculator
//! Set RUST_LOG=calcflow=debug to see every transition.

use calcflow::{CalculatorEngine, InputEvent};
use tracing_subscriber::EnvFilter;

fn press(engine: &mut CalculatorEngine, script: &str) {
    for token in script.split_whitespace() {
        match token.parse::<InputEvent>() {
            Ok(event) => {
                engine.apply(event);
            }
            Err(_) => {
                for c in token.chars() {
                    engine.apply(InputEvent::Digit(c));
                }
            }
        }
    }

    let output = engine.output();
    println!("  keys:    {script}");
    println!("  label:   {}", output.previous_label);
    println!("  display: {} ({})\n", output.current_operand, output.phase);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Basic Calculator Example ===\n");

    let mut engine = CalculatorEngine::new();

    println!("Chained equals:");
    press(&mut engine, "5 + 3 =");
    press(&mut engine, "=");

    println!("Function folded into an expression:");
    press(&mut engine, "C 10 + 4 sqr");

    println!("Percent of the left operand:");
    press(&mut engine, "200 + 10 %");
    press(&mut engine, "=");

    println!("Errors and recovery:");
    press(&mut engine, "5 ÷ 0 =");
    press(&mut engine, "7");

    println!("History (newest first):");
    for line in engine.output().history {
        println!("  {line}");
    }

    println!("\n=== Example Complete ===");
}
