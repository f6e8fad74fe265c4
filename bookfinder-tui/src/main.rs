#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::cast_possible_truncation)]

use std::process;

mod app;
mod ui;

use clap::Parser;
use log::trace;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let Cli { verbosity, quiet } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    trace!("Starting the interactive search screen");
    app::run_interactive()
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 1 } else { verbosity + 1 };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "bookfinder")]
#[clap(about = "Search for books in the terminal with outbound Goodreads and BookFinder links")]
#[clap(version, author)]
struct Cli {
    /// How chatty the program is while the search screen is running
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is. Messages go to stderr and will garble the search
    /// screen unless redirected to a file.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Prevents the program from writing anything but errors to stderr.
    #[clap(short, long)]
    quiet: bool,
}
