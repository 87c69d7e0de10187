use crate::error::{FlowError, Result};
use crate::maximum_flow::graph::Graph;
use num_traits::{CheckedAdd, NumAssign};
use std::fmt::{Debug, Display};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

// `<from> <to> <weight>`, line order fixes vertex indices
const TOKENS_PER_LINE: usize = 3;

pub fn load_graph<Flow>(path: impl AsRef<Path>) -> Result<Graph<Flow>>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug + FromStr,
{
    let path = path.as_ref();
    let io_error = |source: io::Error| FlowError::Io { path: path.to_path_buf(), source };

    let file = File::open(path).map_err(io_error)?;
    let graph = read_graph(BufReader::new(file)).map_err(|err| match err {
        FlowError::Stream(source) => io_error(source),
        other => other,
    })?;
    info!(path = %path.display(), vertices = graph.num_vertices(), edges = graph.num_edges(), "loaded graph");
    Ok(graph)
}

// graph is left untouched on error
pub fn load_into<Flow>(graph: &mut Graph<Flow>, path: impl AsRef<Path>) -> Result<()>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug + FromStr,
{
    *graph = load_graph(path)?;
    Ok(())
}

pub fn read_graph<Flow, R>(reader: R) -> Result<Graph<Flow>>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug + FromStr,
    R: BufRead,
{
    let mut graph = Graph::new();
    for (i, line) in reader.lines().enumerate() {
        let line_num = i + 1;
        let line = line.map_err(|source| match source.kind() {
            io::ErrorKind::InvalidData => FlowError::InvalidEncoding { line: line_num },
            _ => FlowError::Stream(source),
        })?;
        debug!(line_num, line = line.as_str(), "loaded line");

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != TOKENS_PER_LINE {
            return Err(FlowError::TokenCount { line: line_num, found: tokens.len() });
        }

        let (from, to) = (tokens[0], tokens[1]);
        let weight = tokens[2].parse::<Flow>().map_err(|_| FlowError::InvalidWeight { line: line_num, token: tokens[2].to_string() })?;
        graph.add_vertex(from);
        graph.add_vertex(to);
        graph.add_edge(from, to, weight)?;
    }

    if graph.total_capacity().is_none() {
        return Err(FlowError::CapacityOverflow);
    }
    Ok(graph)
}

pub fn write_graph<Flow, W>(graph: &Graph<Flow>, mut writer: W) -> Result<()>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug + Display,
    W: Write,
{
    for edge in graph.edges() {
        writeln!(writer, "{} {} {}", graph.vertex_name(edge.from)?, graph.vertex_name(edge.to)?, edge.weight).map_err(FlowError::Stream)?;
    }
    writer.flush().map_err(FlowError::Stream)
}
