//! Breadth-first analyses over a device adjacency list.
//!
//! Every function here takes the same representation as the maximum flow
//! query: `adjacency[u]` lists the devices `u` links to.

pub mod connectivity;
pub mod path_count;
pub mod subnet;

use crate::error::{check_adjacency, check_node, NetworkError};
use std::collections::VecDeque;

/// Minimum number of hops from `source` to every device, `None` if unreachable.
pub fn hop_distances(adjacency: &[Vec<usize>], source: usize) -> Result<Vec<Option<usize>>, NetworkError> {
    check_adjacency(adjacency)?;
    check_node(source, adjacency.len())?;

    let mut distances = vec![usize::MAX; adjacency.len()];
    let mut que = VecDeque::from([source]);
    distances[source] = 0;

    while let Some(u) = que.pop_front() {
        for &v in adjacency[u].iter() {
            if distances[v] == usize::MAX {
                distances[v] = distances[u] + 1;
                que.push_back(v);
            }
        }
    }

    Ok(distances.into_iter().map(|d| (d != usize::MAX).then_some(d)).collect())
}
