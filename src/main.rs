mod export;
mod models;
mod report;
mod run;
mod store;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None => run::as_tui(),
        Some("--version" | "-V" | "version") => {
            println!("expensetui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some("--help" | "-h" | "help") => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            print_usage();
            anyhow::bail!("unknown argument: {other}")
        }
    }
}

fn print_usage() {
    println!("Usage: expensetui");
    println!();
    println!("Launches the interactive terminal UI. Entries live in memory");
    println!("for the session; use :export to write them to a CSV file.");
    println!();
    println!("Options:");
    println!("  -h, --help     Print this help");
    println!("  -V, --version  Print version");
}
