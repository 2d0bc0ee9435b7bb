use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::residual_network::ResidualNetwork;
use crate::maximum_flow::status::Status;
use log::{debug, trace};
use num_traits::{Bounded, NumAssign};
use std::fmt::Debug;
use std::ops::Neg;

/// Push-relabel maximum flow with the relabel-to-front selection rule.
///
/// All working state (residual network, excesses, heights, current edges and
/// the work list) is owned by the solver and rebuilt on every `solve`.
/// O(n^3)
#[derive(Default)]
pub struct RelabelToFront<Flow> {
    network: ResidualNetwork<Flow>,
    excesses: Vec<Flow>,
    heights: Vec<usize>,
    current_edge: Vec<usize>,
    work_list: Vec<usize>,
    value: Flow,
}

impl<Flow> RelabelToFront<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Bounded + Ord + Copy + Default + Debug,
{
    pub fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Status {
        if source >= graph.num_nodes() || sink >= graph.num_nodes() || source == sink {
            return Status::BadInput;
        }
        debug!("relabel-to-front: {} nodes, {} edges, {source} -> {sink}", graph.num_nodes(), graph.num_edges());
        self.network.build(graph);

        self.pre_process(source, sink);

        let mut cursor = 0;
        while cursor < self.work_list.len() {
            let u = self.work_list[cursor];
            let old_height = self.heights[u];
            self.discharge(u);

            if self.heights[u] > old_height {
                // move u to the front and rescan
                self.work_list[..=cursor].rotate_right(1);
                trace!("move {u} to front (height {})", self.heights[u]);
                cursor = 0;
            } else {
                cursor += 1;
            }
        }
        debug_assert!(self.work_list.iter().all(|&u| self.excesses[u] == Flow::zero()));

        self.value = self.excesses[sink];
        self.network.set_flow(graph);
        debug!("relabel-to-front: maximum flow {:?}", self.value);

        Status::Optimal
    }

    /// Flow delivered to the sink by the last successful `solve`.
    #[inline]
    pub fn maximum_flow(&self) -> Flow {
        self.value
    }

    #[inline]
    pub fn network(&self) -> &ResidualNetwork<Flow> {
        &self.network
    }

    #[inline]
    pub fn excess(&self, u: usize) -> Flow {
        self.excesses[u]
    }

    #[inline]
    pub fn height(&self, u: usize) -> usize {
        self.heights[u]
    }

    fn pre_process(&mut self, source: usize, sink: usize) {
        let n = self.network.num_nodes;
        self.excesses.clear();
        self.excesses.resize(n, Flow::zero());
        self.heights.clear();
        self.heights.resize(n, 0);
        self.current_edge.clear();
        self.current_edge.resize(n, 0);
        self.value = Flow::zero();

        // saturate every link leaving the source
        self.excesses[source] = Flow::max_value();
        let mut pushed = Flow::zero();
        for i in 0..self.network.neighbors(source).len() {
            let v = self.network.neighbors(source)[i];
            if self.network.residual_capacity(source, v) > Flow::zero() {
                pushed += self.push(source, v);
            }
        }
        self.excesses[source] = -pushed;
        self.heights[source] = n;

        self.work_list.clear();
        self.work_list.extend((0..n).filter(|&u| u != source && u != sink));
    }

    fn discharge(&mut self, u: usize) {
        while self.excesses[u] > Flow::zero() {
            if self.current_edge[u] >= self.network.neighbors(u).len() {
                self.relabel(u);
                self.current_edge[u] = 0;
                continue;
            }

            let v = self.network.neighbors(u)[self.current_edge[u]];
            if self.is_admissible_edge(u, v) {
                self.push(u, v);
            } else {
                self.current_edge[u] += 1;
            }
        }
    }

    // push from u to v, return the amount pushed
    fn push(&mut self, u: usize, v: usize) -> Flow {
        let delta = self.excesses[u].min(self.network.residual_capacity(u, v));
        self.network.push_flow(u, v, delta);
        self.excesses[u] -= delta;
        self.excesses[v] += delta;
        delta
    }

    fn relabel(&mut self, u: usize) {
        let height = self.heights[u];
        let new_height = self
            .network
            .neighbors(u)
            .iter()
            .filter(|&&v| self.network.residual_capacity(u, v) > Flow::zero() && self.heights[v] >= height)
            .map(|&v| self.heights[v] + 1)
            .min()
            .expect("node with excess has no residual neighbor");

        debug_assert!(new_height > height);
        trace!("relabel {u}: {height} -> {new_height}");
        self.heights[u] = new_height;
    }

    #[inline]
    fn is_admissible_edge(&self, u: usize, v: usize) -> bool {
        self.network.residual_capacity(u, v) > Flow::zero() && self.heights[u] == self.heights[v] + 1
    }
}
