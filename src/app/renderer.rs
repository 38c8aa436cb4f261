use std::fmt;

use crossterm::style::{Color, Stylize};
use unicode_width::UnicodeWidthStr;

use crate::maze::{Cell, Direction, Grid};

/// Narrowest cell interior, in character widths.
const MIN_CELL_WIDTH: usize = 3;

/// How cells are labelled when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print each cell's distance. Otherwise only path cells get a `*`.
    pub show_distances: bool,
    /// Highlight path cells in green with terminal escape codes.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_distances: true,
            color: false,
        }
    }
}

/// Draws the maze with `+`, `-` and `|` walls, leaving openings blank where cells are linked.
pub fn render(grid: &Grid, options: &RenderOptions) -> String {
    let width = cell_width(grid, options);
    let size = grid.size();
    let wall = "-".repeat(width);
    let opening = " ".repeat(width);

    let mut output = String::new();
    output.push('+');
    for _ in 0..size {
        output.push_str(&wall);
        output.push('+');
    }
    output.push('\n');

    for y in 0..size {
        let mut top = String::from("|");
        let mut bottom = String::from("+");
        for x in 0..size {
            let cell = grid.cell((x, y));
            top.push_str(&label(cell, width, options));
            top.push(if grid.is_linked_towards((x, y), Direction::East) {
                ' '
            } else {
                '|'
            });

            bottom.push_str(if grid.is_linked_towards((x, y), Direction::South) {
                &opening
            } else {
                &wall
            });
            bottom.push('+');
        }
        output.push_str(&top);
        output.push('\n');
        output.push_str(&bottom);
        output.push('\n');
    }
    output
}

/// Width needed for the widest distance label.
fn cell_width(grid: &Grid, options: &RenderOptions) -> usize {
    if !options.show_distances {
        return MIN_CELL_WIDTH;
    }
    grid.cells()
        .iter()
        .filter_map(Cell::distance)
        .max()
        .map(|d| d.to_string().width())
        .unwrap_or_default()
        .max(MIN_CELL_WIDTH)
}

fn label(cell: &Cell, width: usize, options: &RenderOptions) -> String {
    let text = match (options.show_distances, cell.distance()) {
        (true, Some(distance)) => format!("{:>width$}", distance),
        (true, None) => " ".repeat(width),
        (false, _) if cell.on_path() => format!("{:^width$}", "*"),
        (false, _) => " ".repeat(width),
    };

    #[cfg(debug_assertions)]
    {
        assert_eq!(
            text.width(),
            width,
            "Each cell label must occupy exactly {} character widths.",
            width
        );
    }

    if options.color && cell.on_path() {
        text.with(Color::Green).to_string()
    } else {
        text
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(self, &RenderOptions::default()))
    }
}
