//! Route across an elevation grid.
//!
//! Run: cargo run --bin ridgeway -- solve map.txt

use clap::Parser;
use ridgeway_lib::{Cli, init_logging, run};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    if let Err(e) = run(cli, &mut stdout.lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
