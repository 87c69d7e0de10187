use crate::error::{FlowError, Result};
use crate::maximum_flow::graph::{Edge, Graph};
use crate::maximum_flow::matrix::SquareMatrix;
use num_traits::{CheckedAdd, NumAssign};
use std::collections::VecDeque;
use std::fmt::Debug;
use tracing::{debug, trace};

// every solve starts from a zero flow matrix, flow() and minimum_cut() read the last one
pub struct EdmondsKarp<Flow> {
    flow: SquareMatrix<Flow>,
    source: Option<usize>,
    prev: Vec<usize>,
    que: VecDeque<usize>,
    num_augmentations: usize,
}

impl<Flow> Default for EdmondsKarp<Flow> {
    fn default() -> Self {
        Self { flow: SquareMatrix::default(), source: None, prev: Vec::new(), que: VecDeque::new(), num_augmentations: 0 }
    }
}

impl<Flow> EdmondsKarp<Flow>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug,
{
    pub fn solve(&mut self, graph: &Graph<Flow>, source: &str, sink: &str) -> Result<Flow> {
        let s = graph.index_of(source)?;
        let t = graph.index_of(sink)?;

        self.flow.reset(graph.num_vertices());
        self.source = Some(s);
        self.num_augmentations = 0;

        // every residual capacity and partial flow sum is bounded by the total
        if graph.total_capacity().is_none() {
            return Err(FlowError::CapacityOverflow);
        }

        if s == t {
            debug!(source, "source equals sink");
            return Ok(Flow::zero());
        }

        while let Some(path) = self.augmenting_path(graph, s, t) {
            let bottleneck = self.bottleneck(&path);
            for edge in path.iter() {
                self.flow[(edge.from, edge.to)] += bottleneck;
                self.flow[(edge.to, edge.from)] -= bottleneck;
            }
            self.num_augmentations += 1;
            trace!(length = path.len(), ?bottleneck, "augmented");
        }

        let maximum_flow = self.flow.row(s).iter().fold(Flow::zero(), |sum, &f| sum + f);
        debug!(source, sink, augmentations = self.num_augmentations, ?maximum_flow, "solved");
        Ok(maximum_flow)
    }

    #[inline]
    pub fn flow(&self, from: usize, to: usize) -> Flow {
        self.flow[(from, to)]
    }

    #[inline]
    pub fn num_augmentations(&self) -> usize {
        self.num_augmentations
    }

    // vertices reachable from the last source in the residual network, in bfs order
    // empty before any solve or once graph no longer matches the solved size
    pub fn minimum_cut(&mut self, graph: &Graph<Flow>) -> Vec<usize> {
        let n = self.flow.size();
        let mut cut = Vec::new();
        let source = match self.source {
            Some(source) if graph.num_vertices() == n => source,
            _ => return cut,
        };

        let mut visited = vec![false; n];
        visited[source] = true;
        self.que.clear();
        self.que.push_back(source);
        while let Some(u) = self.que.pop_front() {
            cut.push(u);
            for v in 0..n {
                if !visited[v] && self.residual_capacity(graph, u, v) > Flow::zero() {
                    visited[v] = true;
                    self.que.push_back(v);
                }
            }
        }
        cut
    }

    #[inline]
    fn residual_capacity(&self, graph: &Graph<Flow>, u: usize, v: usize) -> Flow {
        graph.capacity(u, v) - self.flow[(u, v)]
    }

    // shortest path in the residual network, ties broken by vertex index
    fn augmenting_path(&mut self, graph: &Graph<Flow>, source: usize, sink: usize) -> Option<Vec<Edge<Flow>>> {
        let n = graph.num_vertices();
        self.prev.clear();
        self.prev.resize(n, usize::MAX);
        self.prev[source] = source;
        self.que.clear();
        self.que.push_back(source);

        'bfs: while let Some(u) = self.que.pop_front() {
            for v in 0..n {
                if self.prev[v] != usize::MAX || self.residual_capacity(graph, u, v) <= Flow::zero() {
                    continue;
                }
                self.prev[v] = u;
                if v == sink {
                    break 'bfs;
                }
                self.que.push_back(v);
            }
        }

        if self.prev[sink] == usize::MAX {
            return None;
        }

        let mut path = Vec::new();
        let mut v = sink;
        while v != source {
            let u = self.prev[v];
            path.push(Edge { from: u, to: v, weight: graph.capacity(u, v) });
            v = u;
        }
        path.reverse();
        Some(path)
    }

    fn bottleneck(&self, path: &[Edge<Flow>]) -> Flow {
        path.iter()
            .map(|edge| edge.weight - self.flow[(edge.from, edge.to)])
            .min()
            .unwrap_or_else(Flow::zero)
    }
}
