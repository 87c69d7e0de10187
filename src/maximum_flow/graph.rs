use crate::error::{FlowError, Result};
use crate::maximum_flow::edmonds_karp::EdmondsKarp;
use crate::maximum_flow::matrix::SquareMatrix;
use num_traits::{CheckedAdd, NumAssign};
use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use tracing::debug;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub weight: Flow,
}

// a capacity of zero and a missing edge are the same thing
#[derive(Clone, Debug)]
pub struct Graph<Flow> {
    names: Vec<String>,
    indices: HashMap<String, usize>,
    capacities: SquareMatrix<Flow>,
}

impl<Flow> Default for Graph<Flow> {
    fn default() -> Self {
        Self { names: Vec::new(), indices: HashMap::new(), capacities: SquareMatrix::default() }
    }
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.names.len()
    }

    // O(n^2)
    pub fn num_edges(&self) -> usize {
        self.capacities.rows().map(|row| row.iter().filter(|w| !w.is_zero()).count()).sum()
    }

    // return vertex index
    pub fn add_vertex(&mut self, name: &str) -> usize {
        if let Some(&index) = self.indices.get(name) {
            return index;
        }

        let index = self.names.len();
        self.names.push(name.to_string());
        self.indices.insert(name.to_string(), index);
        self.capacities.grow();
        index
    }

    // last write wins, the reverse edge is left alone
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Flow) -> Result<()> {
        if weight < Flow::zero() {
            return Err(FlowError::NegativeCapacity { from: from.to_string(), to: to.to_string() });
        }
        let u = self.index_of(from)?;
        let v = self.index_of(to)?;
        self.capacities[(u, v)] = weight;
        debug!(from, to, u, v, "set edge capacity");
        Ok(())
    }

    #[inline]
    pub fn vertex_index(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    pub(crate) fn index_of(&self, name: &str) -> Result<usize> {
        self.vertex_index(name).ok_or_else(|| FlowError::UnknownVertex(name.to_string()))
    }

    pub fn vertex_name(&self, index: usize) -> Result<&str> {
        self.names.get(index).map(String::as_str).ok_or(FlowError::UnknownIndex(index))
    }

    pub fn vertices(&self) -> &[String] {
        &self.names
    }

    #[inline]
    pub fn capacity(&self, from: usize, to: usize) -> Flow {
        self.capacities[(from, to)]
    }

    pub fn edge(&self, from: &str, to: &str) -> Result<Edge<Flow>> {
        self.edge_between(self.index_of(from)?, self.index_of(to)?)
    }

    pub fn edge_between(&self, from: usize, to: usize) -> Result<Edge<Flow>> {
        for index in [from, to] {
            if index >= self.num_vertices() {
                return Err(FlowError::UnknownIndex(index));
            }
        }
        Ok(Edge { from, to, weight: self.capacities[(from, to)] })
    }

    // row-major, nonzero capacities only
    pub fn edges(&self) -> Vec<Edge<Flow>> {
        let n = self.num_vertices();
        (0..n)
            .flat_map(|from| (0..n).map(move |to| (from, to)))
            .filter_map(|(from, to)| {
                let weight = self.capacities[(from, to)];
                (!weight.is_zero()).then_some(Edge { from, to, weight })
            })
            .collect()
    }

    // None if the sum of all capacities overflows Flow
    pub fn total_capacity(&self) -> Option<Flow> {
        self.capacities.rows().flatten().try_fold(Flow::zero(), |sum, w| sum.checked_add(w))
    }

    pub fn maximum_flow(&self, source: &str, sink: &str) -> Result<Flow> {
        EdmondsKarp::default().solve(self, source, sink)
    }
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Ord + Copy + Display,
{
    // one `name c0 c1 ... ` line per vertex
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<Flow> Display for Graph<Flow>
where
    Flow: NumAssign + Ord + Copy + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, row) in self.names.iter().zip(self.capacities.rows()) {
            write!(f, "{} ", name)?;
            for weight in row {
                write!(f, "{} ", weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
