//! Thin binary over the parse engine.
//!
//! Owns all process decisions the library refuses to make: help and the
//! parsed record go to stdout with exit 0, diagnostics go to stdout with
//! exit 1. Diagnostics share the stdout channel with regular output; that
//! is the reference behavior, kept deliberately.

use flatargs::{parse, spec, Parsed};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match parse(&args) {
        Ok(Parsed::Help) => print!("{}", spec::USAGE),
        Ok(Parsed::Config(config)) => println!("{config:#?}"),
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    }
}
