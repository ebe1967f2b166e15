use std::str::FromStr;

use crate::graph::{DirectedGraph, MutableGraph};
use crate::{Error, Result, Weight};

/// Parses a graph from text.
///
/// The first non-blank line is the header `V E source`; it is followed by
/// exactly `E` lines of `u v w`. Blank lines are ignored. Returns the graph and
/// the source vertex named in the header.
pub fn parse_graph<W>(input: &str) -> Result<(DirectedGraph<W>, usize)>
where
    W: Weight + FromStr,
{
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines.next().ok_or_else(|| Error::Parse {
        line: 1,
        message: "missing header `V E source`".to_string(),
    })?;
    let fields = split_fields(header_line, header, 3)?;
    let vertex_count: usize = parse_field(header_line, fields[0], "vertex count")?;
    let edge_count: usize = parse_field(header_line, fields[1], "edge count")?;
    let source: usize = parse_field(header_line, fields[2], "source")?;

    if source >= vertex_count {
        return Err(Error::InvalidVertex(source));
    }

    let mut graph = DirectedGraph::try_new(vertex_count)?;
    let mut seen = 0;
    for (line_no, line) in lines {
        if seen == edge_count {
            return Err(Error::Parse {
                line: line_no,
                message: format!("unexpected content after {} edges", edge_count),
            });
        }
        let fields = split_fields(line_no, line, 3)?;
        let from: usize = parse_field(line_no, fields[0], "edge source")?;
        let to: usize = parse_field(line_no, fields[1], "edge target")?;
        let weight: W = parse_field(line_no, fields[2], "edge weight")?;
        graph.add_edge(from, to, weight).map_err(|err| Error::Parse {
            line: line_no,
            message: err.to_string(),
        })?;
        seen += 1;
    }

    if seen < edge_count {
        return Err(Error::Parse {
            line: input.lines().count().max(1),
            message: format!("expected {} edges, found {}", edge_count, seen),
        });
    }

    log::debug!(
        "parsed graph with {} vertices and {} edges, source {}",
        vertex_count,
        edge_count,
        source
    );
    Ok((graph, source))
}

fn split_fields(line: usize, text: &str, expected: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != expected {
        return Err(Error::Parse {
            line,
            message: format!("expected {} fields, found {}", expected, fields.len()),
        });
    }
    Ok(fields)
}

fn parse_field<T: FromStr>(line: usize, field: &str, what: &str) -> Result<T> {
    field.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {}: `{}`", what, field),
    })
}
