//! Incremental scanning of mixed input with partial parses.
//!
//! Run with: cargo run --example partial_parsing

use numform::parse_partial;

fn main() {
    // Pull every number out of a byte stream, skipping whatever separates
    // them.
    let input = b"12,34.5,6e2;nonsense;-7.25";
    let mut rest: &[u8] = input;
    while !rest.is_empty() {
        match parse_partial::<f64>(rest) {
            Ok((value, consumed)) => {
                println!("parsed {value} from {consumed} bytes");
                rest = &rest[consumed..];
            }
            Err(error) => {
                println!("skipping byte ({error})");
                rest = &rest[1..];
            }
        }
    }
}
