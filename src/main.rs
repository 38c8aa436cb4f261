use std::io::IsTerminal;

use clap::Parser;
use hardest_maze::{app, app::renderer::render, cli::Args, logging};

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    // Keep the guard alive so buffered log lines reach the file before exit
    let _log_guard = logging::init(args.verbose, args.log_file.as_deref())?;

    let config = args.config();
    let maze = app::build(&config).map_err(std::io::Error::other)?;

    let options = args.render_options(std::io::stdout().is_terminal());
    print!("{}", render(&maze.grid, &options));

    let solution = maze.solution;
    println!(
        "{}: hardest path from {:?} to {:?} takes {} steps",
        config.generator, solution.start, solution.end, solution.length
    );
    if config.braid.is_some() {
        println!("Braiding opened {} extra passages", maze.braided);
    }
    println!("Dead ends: {}", maze.dead_end_count());
    Ok(())
}
