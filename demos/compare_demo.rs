//! Example comparing two snippets without opening a window
//!
//! Run with: cargo run --example compare_demo

use code_compare::diff::{self, CompareOptions, PairingStrategy, StyleClass};
use code_compare::export;

const ORIGINAL: &str = "fn total(items: &[Item]) -> u32 {
    let mut sum = 0;
    for item in items {
        sum += item.price;
    }
    sum
}";

const MODIFIED: &str = "fn total(items: &[Item]) -> u64 {
    items.iter().map(|item| item.price as u64).sum()
}";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for strategy in [PairingStrategy::Adjacent, PairingStrategy::Grouped] {
        let options = CompareOptions {
            strategy,
            ..Default::default()
        };
        let result = diff::compare_with(ORIGINAL, MODIFIED, &options)?;

        println!("=== {} ===", strategy.label());
        for (left, right) in result.left_rows.iter().zip(&result.right_rows) {
            let marker = match (left.style, right.style) {
                (StyleClass::Equal, _) => ' ',
                (StyleClass::Modified, _) => '~',
                (StyleClass::Removed, _) => '-',
                _ => '+',
            };
            println!(
                "{} {:>3} {:<40} | {:>3} {}",
                marker,
                left.line_number.map(|n| n.to_string()).unwrap_or_default(),
                left.content,
                right.line_number.map(|n| n.to_string()).unwrap_or_default(),
                right.content
            );
        }
        println!("{}\n", export::summary(&result.stats));
    }

    Ok(())
}
