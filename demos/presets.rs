//! Parsing the same text under different language grammars.
//!
//! Run with: cargo run --example presets

use numform::{parse_with_options, NumberFormat, ParseFloatOptions};

fn main() {
    let inputs: &[&str] = &[".5", "1.5", "+1.0", "1_000.5", "3e", "NaN"];
    let grammars = [
        ("permissive", NumberFormat::permissive()),
        ("standard", NumberFormat::standard()),
        ("JSON", NumberFormat::JSON),
        ("TOML", NumberFormat::TOML),
        ("Rust literal", NumberFormat::RUST_LITERAL),
    ];

    for input in inputs {
        println!("{input:>10}:");
        for (name, format) in grammars {
            let options = ParseFloatOptions::builder()
                .format(format)
                .build()
                .expect("preset formats always build");
            match parse_with_options::<f64>(input.as_bytes(), &options) {
                Ok(value) => println!("    {name:<14} -> {value}"),
                Err(error) => println!("    {name:<14} -> {error}"),
            }
        }
    }
}
