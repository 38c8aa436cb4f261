//! Command-line options of the `hardest-maze` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    app::{MazeConfig, renderer::RenderOptions},
    generators::Generator,
};

/// Generate a grid maze and show the longest path through it.
#[derive(Debug, Parser)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Side length of the square grid, in cells
    #[arg(short, long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// Braid one in N dead ends (1 braids all of them)
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub braid: u32,

    /// Keep the maze perfect, without any braiding
    #[arg(long, default_value_t = false, conflicts_with = "braid")]
    pub no_braid: bool,

    /// Maze generation algorithm
    #[arg(value_enum, short, long, default_value_t = Generator::HuntAndKill)]
    pub generator: Generator,

    /// Seed for reproducible mazes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only mark the path instead of printing every distance
    #[arg(long, default_value_t = false)]
    pub hide_distances: bool,

    /// Never highlight the path with colors
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn config(&self) -> MazeConfig {
        MazeConfig {
            size: self.size as usize,
            braid: (!self.no_braid).then_some(self.braid),
            generator: self.generator,
            seed: self.seed,
        }
    }

    /// Colors are used only when the output is a terminal and `--no-color` is absent.
    pub fn render_options(&self, is_terminal: bool) -> RenderOptions {
        RenderOptions {
            show_distances: !self.hide_distances,
            color: is_terminal && !self.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_default_config() {
        let args = Args::try_parse_from(["hardest-maze"]).unwrap();
        assert_eq!(args.config(), MazeConfig::default());
        assert_eq!(args.render_options(true), RenderOptions {
            show_distances: true,
            color: true,
        });
    }

    #[test]
    fn test_parse_every_option() {
        let args = Args::try_parse_from([
            "hardest-maze",
            "--size",
            "8",
            "--generator",
            "recursive-backtracker",
            "--no-braid",
            "--seed",
            "42",
            "--hide-distances",
            "--no-color",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.config(), MazeConfig {
            size: 8,
            braid: None,
            generator: Generator::RecursiveBacktracker,
            seed: Some(42),
        });
        assert_eq!(args.render_options(true), RenderOptions {
            show_distances: false,
            color: false,
        });
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_generator_names() {
        for (name, generator) in [
            ("binary-tree", Generator::BinaryTree),
            ("sidewinder", Generator::Sidewinder),
            ("aldous-broder", Generator::AldousBroder),
            ("wilsons", Generator::Wilsons),
            ("hunt-and-kill", Generator::HuntAndKill),
            ("recursive-backtracker", Generator::RecursiveBacktracker),
        ] {
            let args = Args::try_parse_from(["hardest-maze", "-g", name]).unwrap();
            assert_eq!(args.generator, generator);
        }
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Args::try_parse_from(["hardest-maze", "--size", "0"]).is_err());
        assert!(Args::try_parse_from(["hardest-maze", "--braid", "0"]).is_err());
        assert!(Args::try_parse_from(["hardest-maze", "--braid", "2", "--no-braid"]).is_err());
        assert!(Args::try_parse_from(["hardest-maze", "-g", "kruskal"]).is_err());
    }
}
