use std::{io::Write, sync::mpsc::Receiver};

use crossterm::{
    queue,
    style::{self, Attribute, Color, Stylize},
};

use crate::{
    error::GenerationError,
    generators::{GenerationEvent, GenerationResult},
    maze::{AdjacencyGraph, Coord, Maze, RoomMap},
};

/// Formats generation traces and results as text.
pub struct Printer<W: Write> {
    out: W,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    fn header(&mut self, text: &str) -> std::io::Result<()> {
        queue!(
            self.out,
            style::PrintStyledContent(
                format!("{}\n", text)
                    .with(Color::Yellow)
                    .attribute(Attribute::Bold)
            )
        )
    }

    /// Prints every event until the sending side hangs up.
    pub fn print_events(&mut self, events: Receiver<GenerationEvent>) -> std::io::Result<()> {
        for event in events {
            self.print_event(&event)?;
        }
        self.out.flush()
    }

    pub fn print_event(&mut self, event: &GenerationEvent) -> std::io::Result<()> {
        match event {
            GenerationEvent::Started { rooms } => {
                self.header("Initial maze draft:")?;
                self.print_room_map(rooms)?;
                writeln!(self.out)
            }
            GenerationEvent::Pass {
                pass,
                cell,
                available,
                selected,
                nodes,
                rooms,
                rooms_left,
            } => {
                writeln!(self.out, "Pass: {};", pass)?;
                writeln!(self.out, "Selected first node: ({}, {});", cell.0, cell.1)?;
                writeln!(self.out, "Available directions:")?;
                for direction in available {
                    writeln!(self.out, " -> {}", direction)?;
                }
                writeln!(self.out, "Selected direction: {}", selected)?;
                writeln!(self.out, "All nodes: {};", format_nodes(nodes))?;
                self.print_room_map(rooms)?;
                writeln!(self.out, "Total rooms: {}", rooms_left)?;
                writeln!(self.out)
            }
            GenerationEvent::Finished { .. } => {
                queue!(
                    self.out,
                    style::PrintStyledContent(
                        "DONE!\n\n".with(Color::Green).attribute(Attribute::Bold)
                    )
                )
            }
            GenerationEvent::Aborted { fail_streak, .. } => {
                queue!(
                    self.out,
                    style::PrintStyledContent(
                        format!(
                            "Too much fail streak ({}). Can't combine all rooms using legal directions.\n",
                            fail_streak
                        )
                        .with(Color::Red)
                        .attribute(Attribute::Bold)
                    )
                )
            }
        }
    }

    /// Prints room labels with one line per row `y`, labels tab-separated.
    pub fn print_room_map(&mut self, rooms: &RoomMap) -> std::io::Result<()> {
        let size = rooms.size();
        for y in 0..size {
            let row = (0..size)
                .map(|x| rooms.label((x, y)).to_string())
                .collect::<Vec<_>>()
                .join("\t");
            writeln!(self.out, "{}", row)?;
        }
        Ok(())
    }

    /// Prints the adjacency matrix followed by the adjacency lists.
    pub fn print_graph(&mut self, graph: &AdjacencyGraph) -> std::io::Result<()> {
        let total_nodes = graph.total_nodes();

        self.header("Final graph:")?;
        write!(self.out, "\t")?;
        for node in 0..total_nodes {
            write!(self.out, "[{}]\t", node)?;
        }
        writeln!(self.out)?;
        for node in 0..total_nodes {
            write!(self.out, "[{}]\t", node)?;
            for &linked in graph.row(node) {
                write!(self.out, "{}\t", linked as u8)?;
            }
            writeln!(self.out)?;
        }
        writeln!(self.out)?;

        self.header("All connections:")?;
        for node in 0..total_nodes {
            write!(self.out, "Node [{}] -> ", node)?;
            for other in graph.neighbors(node) {
                write!(self.out, "[{}]", other)?;
            }
            writeln!(self.out)?;
        }
        writeln!(self.out)
    }

    /// Prints the rendered maze and its statistics.
    pub fn print_summary(&mut self, result: &GenerationResult) -> std::io::Result<()> {
        write!(self.out, "{}", Maze::from_graph(&result.graph, result.size))?;
        writeln!(self.out)?;
        writeln!(self.out, "Size: {}x{}", result.size, result.size)?;
        writeln!(self.out, "Total nodes: {}", result.total_nodes)?;
        writeln!(self.out, "Total passes: {}", result.total_passes)?;
        writeln!(self.out, "Total failed passes: {}", result.total_failed_passes)?;
        self.header("Degree histogram:")?;
        let degrees = &result.degrees;
        for (degree, count) in [
            (1, degrees.deg1),
            (2, degrees.deg2),
            (3, degrees.deg3),
            (4, degrees.deg4),
        ] {
            writeln!(self.out, "  degree {}: {}", degree, count)?;
        }
        Ok(())
    }

    /// Reports a failed run, drawing whatever was connected before it stopped.
    pub fn print_failure(&mut self, error: &GenerationError, size: u8) -> std::io::Result<()> {
        queue!(
            self.out,
            style::PrintStyledContent(
                format!("ERROR: {}\n", error)
                    .with(Color::Red)
                    .attribute(Attribute::Bold)
            )
        )?;
        if let GenerationError::ExhaustedRetries { partial, .. } = error {
            write!(self.out, "{}", Maze::from_graph(partial, size))?;
        }
        Ok(())
    }
}

fn format_nodes(nodes: &[Coord]) -> String {
    let formatted = nodes
        .iter()
        .map(|(x, y)| format!("({}, {})", x, y))
        .collect::<Vec<_>>();
    match formatted.as_slice() {
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
        [] => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;

    fn printed(f: impl FnOnce(&mut Printer<Vec<u8>>) -> std::io::Result<()>) -> String {
        let mut printer = Printer::new(Vec::new());
        f(&mut printer).unwrap();
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn test_format_nodes() {
        assert_eq!(format_nodes(&[(0, 1), (1, 1)]), "(0, 1) and (1, 1)");
        assert_eq!(
            format_nodes(&[(1, 1), (1, 0), (2, 0)]),
            "(1, 1), (1, 0), and (2, 0)"
        );
    }

    #[test]
    fn test_room_map_rows_follow_y() {
        // Cell id is x * size + y, so row y = 0 reads 0, 2
        let text = printed(|p| p.print_room_map(&RoomMap::new(2)));
        assert_eq!(text, "0\t2\n1\t3\n");
    }

    #[test]
    fn test_started_event_prints_one_row_per_grid_row() {
        let event = GenerationEvent::Started {
            rooms: RoomMap::new(3),
        };
        let text = printed(|p| p.print_event(&event));
        assert_eq!(text.lines().filter(|line| line.contains('\t')).count(), 3);
        assert!(text.contains("0\t3\t6\n1\t4\t7\n2\t5\t8\n"));
    }

    #[test]
    fn test_pass_event_narration() {
        let mut rooms = RoomMap::new(3);
        rooms.merge(&[(1, 1), (2, 1), (2, 0)]);
        let event = GenerationEvent::Pass {
            pass: 3,
            cell: (1, 1),
            available: vec![Direction::Top, Direction::RightTop],
            selected: Direction::RightTop,
            nodes: vec![(1, 1), (2, 1), (2, 0)],
            rooms,
            rooms_left: 6,
        };
        let text = printed(|p| p.print_event(&event));
        assert!(text.contains("Pass: 3;"));
        assert!(text.contains("Selected first node: (1, 1);"));
        assert!(text.contains(" -> TOP\n -> RIGHT_TOP\n"));
        assert!(text.contains("Selected direction: RIGHT_TOP"));
        assert!(text.contains("All nodes: (1, 1), (2, 1), and (2, 0);"));
        assert!(text.contains("0\t3\t4\n"));
        assert!(text.contains("Total rooms: 6"));
    }

    #[test]
    fn test_graph_dump() {
        let mut graph = AdjacencyGraph::new(3);
        graph.connect(0, 1);
        graph.connect(1, 2);
        let text = printed(|p| p.print_graph(&graph));
        assert!(text.contains("\t[0]\t[1]\t[2]\t\n"));
        assert!(text.contains("[1]\t1\t0\t1\t\n"));
        assert!(text.contains("Node [1] -> [0][2]\n"));
        assert!(text.contains("Node [2] -> [1]\n"));
    }
}
