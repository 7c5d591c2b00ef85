//! Render one block of a cell image to the terminal.
//!
//! Usage: cli_blocks <image> [block]

use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use block_interp::{run_block, BlockEnd, CellStore};
use cli_blocks::{load_image, AnsiRenderer};

fn main() {
    if let Err(err) = run() {
        eprintln!("cli_blocks: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("usage: cli_blocks <image> [block]");
            process::exit(2);
        }
    };
    let block: usize = match args.next() {
        Some(n) => n.parse()?,
        None => 0,
    };

    let cells = load_image(&path)?;
    let store = CellStore::new(&cells);

    let mut renderer = AnsiRenderer::new();
    let outcome = run_block(&store, block, &mut renderer)?;
    println!("{}", renderer.finish());
    eprintln!(
        "block {block}: {} tokens, {} definitions, {}",
        outcome.tokens,
        outcome.definitions,
        match outcome.end {
            BlockEnd::Sentinel => "terminated by sentinel",
            BlockEnd::WindowEnd => "full 256-cell window",
        }
    );
    Ok(())
}
