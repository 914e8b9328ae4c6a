//! Error Handling
//!
//! This example demonstrates the calculator's single failure path.
//!
//! Key concepts:
//! - Division by zero is a typed error, not a panic
//! - A failed division appends nothing to the history
//! - Divisors close to zero (but not zero) divide normally
//!
//! Run with: cargo run --example error_handling

use tally::{create_calculator, CalculatorError};

fn main() {
    println!("=== Error Handling Example ===\n");

    let mut calc = create_calculator();

    println!("Dividing 5 by 0:");
    match calc.divide(5.0, 0.0) {
        Ok(value) => println!("  unexpected success: {value}"),
        Err(CalculatorError::DivisionByZero) => println!("  error: Cannot divide by zero"),
    }
    println!("  history length after failure: {}", calc.get_history().len());

    println!("\nDividing 5 by 1e-12 (close to zero, still legal):");
    match calc.divide(5.0, 1e-12) {
        Ok(value) => println!("  result: {value}"),
        Err(err) => println!("  unexpected error: {err}"),
    }

    println!("\nRecorded history:");
    for entry in calc.get_history() {
        println!("  {entry}");
    }

    println!("\n=== Example Complete ===");
}
