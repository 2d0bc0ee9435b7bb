use crate::error::{check_adjacency, check_node, NetworkError};
use std::collections::VecDeque;

/// Number of distinct shortest-hop paths from `source` to `sink`.
///
/// Parallel links count as distinct paths. `source == sink` has exactly one
/// (empty) path; an unreachable sink has none.
pub fn num_paths(adjacency: &[Vec<usize>], source: usize, sink: usize) -> Result<usize, NetworkError> {
    check_adjacency(adjacency)?;
    check_node(source, adjacency.len())?;
    check_node(sink, adjacency.len())?;

    let n = adjacency.len();
    let mut distances = vec![usize::MAX; n];
    let mut paths = vec![0_usize; n];
    let mut que = VecDeque::from([source]);
    distances[source] = 0;
    paths[source] = 1;

    while let Some(u) = que.pop_front() {
        // every predecessor of the sink on the previous layer is done
        if u == sink {
            break;
        }
        for &v in adjacency[u].iter() {
            if distances[v] == usize::MAX {
                distances[v] = distances[u] + 1;
                que.push_back(v);
            }
            if distances[v] == distances[u] + 1 {
                paths[v] = paths[v].saturating_add(paths[u]);
            }
        }
    }

    Ok(paths[sink])
}
