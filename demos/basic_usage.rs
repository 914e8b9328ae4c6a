//! Basic Usage
//!
//! This example demonstrates the calculator end to end: three chained
//! operations followed by a dump of the recorded history.
//!
//! Run with: cargo run --example basic_usage

use tally::{create_calculator, CalculatorError};

fn main() -> Result<(), CalculatorError> {
    let mut calc = create_calculator();

    let result1 = calc.add(10.5, 5.2);
    let result2 = calc.multiply(result1, 2.0);
    let result3 = calc.divide(result2, 3.0)?;

    println!("Final result: {result3}");
    println!("History:");
    for entry in calc.get_history() {
        println!("  {entry}");
    }

    Ok(())
}
