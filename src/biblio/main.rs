use biblio::api::LibraryApi;
use biblio::error::Result;
use clap::Parser;

mod args;
mod menu;
mod print;

use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.plain {
        colored::control::set_override(false);
    }

    menu::run(LibraryApi::new())
}
