use crate::error::NetworkError;
use crate::maximum_flow::graph::Graph;
use num_traits::NumAssign;

/// Dense residual network over `num_nodes` devices.
///
/// Holds the capacity matrix, the symmetric neighbor matrix and the
/// antisymmetric flow matrix. Capacities and neighbors are fixed by `build`;
/// only the flow matrix changes afterwards.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct ResidualNetwork<Flow> {
    pub num_nodes: usize,
    upper: Vec<Flow>,
    flow: Vec<Flow>,
    neighbor: Vec<bool>,

    // neighbors of u, ascending: adjacent[start[u]..start[u + 1]]
    start: Vec<usize>,
    adjacent: Vec<usize>,
    pair_to_edge_index: Vec<usize>,
}

impl<Flow> ResidualNetwork<Flow>
where
    Flow: NumAssign + Ord + Copy + Default,
{
    pub fn from_adjacency_list(adjacency: &[Vec<usize>], capacities: &[Vec<Flow>]) -> Result<Self, NetworkError> {
        let graph = Graph::from_adjacency_list(adjacency, capacities)?;
        let mut network = Self::default();
        network.build(&graph);
        Ok(network)
    }

    pub fn build(&mut self, graph: &Graph<Flow>) {
        let n = graph.num_nodes();
        self.num_nodes = n;

        // initialize
        self.upper.clear();
        self.upper.resize(n * n, Flow::zero());
        self.flow.clear();
        self.flow.resize(n * n, Flow::zero());
        self.neighbor.clear();
        self.neighbor.resize(n * n, false);
        self.pair_to_edge_index.clear();
        self.pair_to_edge_index.resize(n * n, usize::MAX);

        for (edge_index, e) in graph.edges.iter().enumerate() {
            // self-loops never carry flow between two devices
            if e.from == e.to {
                continue;
            }
            let (uv, vu) = (self.index(e.from, e.to), self.index(e.to, e.from));
            self.upper[uv] = e.upper;
            self.pair_to_edge_index[uv] = edge_index;
            self.neighbor[uv] = true;
            self.neighbor[vu] = true;
        }

        self.start.clear();
        self.start.push(0);
        self.adjacent.clear();
        for u in 0..n {
            self.adjacent.extend((0..n).filter(|&v| self.neighbor[u * n + v]));
            self.start.push(self.adjacent.len());
        }
    }

    pub fn set_flow(&self, graph: &mut Graph<Flow>) {
        graph.edges.iter_mut().for_each(|e| e.flow = Flow::zero());
        for (pair, &edge_index) in self.pair_to_edge_index.iter().enumerate() {
            if edge_index != usize::MAX && self.flow[pair] > Flow::zero() {
                graph.edges[edge_index].flow = self.flow[pair];
            }
        }
    }

    #[inline]
    fn index(&self, u: usize, v: usize) -> usize {
        u * self.num_nodes + v
    }

    #[inline]
    pub fn capacity(&self, u: usize, v: usize) -> Flow {
        self.upper[self.index(u, v)]
    }

    #[inline]
    pub fn flow(&self, u: usize, v: usize) -> Flow {
        self.flow[self.index(u, v)]
    }

    #[inline]
    pub fn is_neighbor(&self, u: usize, v: usize) -> bool {
        self.neighbor[self.index(u, v)]
    }

    #[inline]
    pub fn residual_capacity(&self, u: usize, v: usize) -> Flow {
        let i = self.index(u, v);
        self.upper[i] - self.flow[i]
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adjacent[self.start[u]..self.start[u + 1]]
    }

    #[inline]
    pub fn push_flow(&mut self, u: usize, v: usize, flow: Flow) {
        let (uv, vu) = (self.index(u, v), self.index(v, u));
        self.flow[uv] += flow;
        self.flow[vu] -= flow;
    }
}
