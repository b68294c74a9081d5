//! Parse a nosj document from a string and walk the result.
//!
//! Run with: `cargo run --example inspect`

use nosj::{from_str, render, Value};

fn main() {
    let document = "<name:Alices,age:i30,motto:carpe%20diem,child:<toy:blocks>>";

    let map = match from_str(document) {
        Ok(map) => map,
        Err(err) => {
            eprintln!("ERROR -- {err}");
            std::process::exit(nosj::EXIT_INPUT_ERROR);
        }
    };

    // The fixed debug rendering, as the CLI prints it.
    print!("{}", render(&map));

    // Walking the tree directly.
    println!();
    for (key, value) in &map {
        match value {
            Value::Map(inner) => println!("{key}: nested map with {} entries", inner.len()),
            Value::Integer(n) => println!("{key}: integer {n}"),
            Value::Text(s) => println!("{key}: text {s:?}"),
        }
    }
}
