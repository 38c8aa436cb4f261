use std::{io, time::Instant};

use hardest_maze::{
    app::{self, MazeConfig},
    generators::Generator,
};

/// Side length of the mazes built while profiling.
const PROFILE_SIZE: usize = 64;

fn main() -> io::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(10)
        .max(1);

    println!(
        "{} iterations per generator on a {}x{} grid",
        num_iters, PROFILE_SIZE, PROFILE_SIZE
    );
    for generator in Generator::ALL {
        let mut total_length = 0;
        let mut total_dead_ends = 0;
        let start = Instant::now();

        for seed in 0..num_iters {
            let config = MazeConfig {
                size: PROFILE_SIZE,
                braid: None,
                generator,
                seed: Some(seed as u64),
            };
            let maze = app::build(&config).map_err(io::Error::other)?;
            if !maze.grid.is_connected() {
                return Err(io::Error::other(format!(
                    "{} produced a disconnected maze with seed {}",
                    generator, seed
                )));
            }
            total_length += maze.solution.length;
            total_dead_ends += maze.dead_end_count();
        }

        let elapsed = start.elapsed();
        println!(
            "{:<22} {:>12.2?} per maze, hardest path {:>5} steps, {:>5} dead ends on average",
            generator.to_string(),
            elapsed / num_iters,
            total_length / num_iters as usize,
            total_dead_ends / num_iters as usize,
        );
    }
    Ok(())
}
