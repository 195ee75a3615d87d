use std::fmt;

use itertools::Itertools;

use crate::cells::Direction;
use crate::grid::PathGrid;
use crate::nodes::{NodeRole, PathNode};

/// Render the contents of a grid cell as text, 2 glyphs wide.
fn render_cell_body(node: Option<&PathNode>, show_links: bool) -> String {
    match node {
        None => String::from(" -"),
        Some(node) if node.role == NodeRole::Start => String::from(" S"),
        Some(node) if node.role == NodeRole::Temporary => String::from(" ~"),
        Some(node) if show_links => format!(" {}", link_glyph(node.direction_to_next)),
        Some(node) => format!("{:>2}", node.path_id.0),
    }
}

fn link_glyph(direction: Direction) -> char {
    match direction {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
        Direction::None => '.',
    }
}

/// One line per grid row. Each cell shows the id of the path running through it, `S` for the
/// start and `-` for an empty cell.
///
/// The alternate form (`{:#}`) shows the direction each path heads in out of a cell instead of
/// its path id.
impl fmt::Display for PathGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let show_links = f.alternate();
        let output = self.iter_row()
            .map(|row| {
                row.into_iter()
                    .map(|coord| render_cell_body(self.node(coord), show_links))
                    .join("")
            })
            .join("\n");
        writeln!(f, "{}", output)
    }
}
