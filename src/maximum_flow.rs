pub mod graph;
pub mod relabel_to_front;
pub mod residual_network;
pub mod status;

use crate::error::{check_node, NetworkError};
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::relabel_to_front::RelabelToFront;
use crate::maximum_flow::status::Status;
use num_traits::{Bounded, NumAssign};
use std::fmt::Debug;
use std::ops::Neg;

/// Maximum sustainable data rate from `source` to `sink`.
///
/// `speeds[u][k]` is the capacity of the link `u -> adjacency[u][k]`.
/// Returns `-1` when `source == sink`.
pub fn max_download_speed<Flow>(adjacency: &[Vec<usize>], speeds: &[Vec<Flow>], source: usize, sink: usize) -> Result<Flow, NetworkError>
where
    Flow: NumAssign + Neg<Output = Flow> + Bounded + Ord + Copy + Default + Debug,
{
    if source == sink {
        return Ok(-Flow::one());
    }
    check_node(source, adjacency.len())?;
    check_node(sink, adjacency.len())?;

    let mut graph = Graph::from_adjacency_list(adjacency, speeds)?;
    let mut solver = RelabelToFront::default();
    match solver.solve(source, sink, &mut graph) {
        Status::Optimal => Ok(solver.maximum_flow()),
        status => unreachable!("validated input reported {status:?}"),
    }
}
