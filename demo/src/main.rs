//! gridpath: print the shortest path through an ASCII map.
//!
//! Usage: `gridpath <map-file>`. The map uses `#` for walls, `.` for floor,
//! and must contain one `S` (start) and one `T` (target). Set `RUST_LOG=debug`
//! to see the search log.

use std::{env, fs, process};

use gridpath_astar::{Grid, shortest_path};
use gridpath_core::PassMap;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(file) = env::args().nth(1) else {
        eprintln!("usage: gridpath <map-file>");
        process::exit(2);
    };

    let text = fs::read_to_string(&file)?;
    let (map, markers) = PassMap::parse(&text)?;
    let (start, target) = markers.require()?;
    let grid = Grid::try_from(&map)?;

    match shortest_path(&grid, start, target)? {
        Some(path) => {
            println!("{start} -> {target}: {} moves", path.len());
            print!("{}", map.render(&path, markers));
        }
        None => {
            println!("{start} -> {target}: no path");
            print!("{}", map.render(&[], markers));
        }
    }
    Ok(())
}
