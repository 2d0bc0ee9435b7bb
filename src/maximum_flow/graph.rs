use crate::error::{check_adjacency, NetworkError};
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::fmt::Debug;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
}

#[derive(Default)]
pub struct Graph<Flow> {
    num_nodes: usize,
    num_edges: usize,
    pub(crate) edges: Vec<Edge<Flow>>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    /// Builds a graph from an adjacency list and a parallel array of link capacities.
    ///
    /// `capacities[u][k]` is the data rate of the link `u -> adjacency[u][k]`.
    pub fn from_adjacency_list(adjacency: &[Vec<usize>], capacities: &[Vec<Flow>]) -> Result<Self, NetworkError> {
        check_adjacency(adjacency)?;
        if capacities.len() != adjacency.len() {
            return Err(NetworkError::ShapeMismatch { device: capacities.len().min(adjacency.len()), links: adjacency.len(), values: capacities.len() });
        }

        let mut graph = Self { num_nodes: 0, num_edges: 0, edges: Vec::with_capacity(adjacency.iter().map(Vec::len).sum()) };
        graph.add_nodes(adjacency.len());
        for (u, (neighbors, speeds)) in adjacency.iter().zip(capacities).enumerate() {
            if neighbors.len() != speeds.len() {
                return Err(NetworkError::ShapeMismatch { device: u, links: neighbors.len(), values: speeds.len() });
            }
            for (&v, &upper) in neighbors.iter().zip(speeds) {
                graph.add_directed_edge(u, v, upper);
            }
        }
        Ok(graph)
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn add_node(&mut self) -> usize {
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        self.num_nodes += num_nodes;
        ((self.num_nodes - num_nodes)..self.num_nodes).collect()
    }

    // return edge index
    pub fn add_directed_edge(&mut self, from: usize, to: usize, upper: Flow) -> Option<usize> {
        if from >= self.num_nodes || to >= self.num_nodes {
            return None;
        }

        self.edges.push(Edge { from, to, flow: Flow::zero(), upper });

        self.num_edges += 1;
        Some(self.num_edges - 1)
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        self.edges.get(edge_id).cloned()
    }

    pub fn edges(&self) -> std::slice::Iter<Edge<Flow>> {
        self.edges.iter()
    }

    // net outflow of source
    pub fn maximum_flow(&self, source: usize) -> Flow {
        self.edges.iter().fold(Flow::zero(), |mut flow, edge| {
            if edge.from == source && edge.to != source {
                flow += edge.flow;
            } else if edge.to == source && edge.from != source {
                flow -= edge.flow;
            }
            flow
        })
    }

    /// Returns the devices reachable from `source` in the residual network,
    /// i.e. the source side of a minimum cut once a maximum flow is set.
    pub fn minimum_cut(&self, source: usize) -> Vec<usize> {
        if source >= self.num_nodes {
            return Vec::new();
        }

        let mut residual_neighbors = vec![Vec::new(); self.num_nodes];
        for edge in self.edges.iter() {
            if edge.flow < edge.upper {
                residual_neighbors[edge.from].push(edge.to);
            }
            if edge.flow > Flow::zero() {
                residual_neighbors[edge.to].push(edge.from);
            }
        }

        let mut cut = Vec::new();
        let mut visited = vec![false; self.num_nodes];
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            cut.push(u);
            for &v in residual_neighbors[u].iter() {
                if !visited[v] {
                    visited[v] = true;
                    que.push_back(v);
                }
            }
        }

        cut
    }
}
