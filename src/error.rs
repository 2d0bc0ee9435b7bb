use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum NetworkError {
    #[error("device {node} is out of range for a network of {num_nodes} devices")]
    InvalidNode { node: usize, num_nodes: usize },
    #[error("{values} values supplied for {links} links (first mismatch at device {device})")]
    ShapeMismatch { device: usize, links: usize, values: usize },
}

// every index in the adjacency list must name a device
pub(crate) fn check_adjacency(adjacency: &[Vec<usize>]) -> Result<(), NetworkError> {
    let num_nodes = adjacency.len();
    adjacency.iter().flatten().try_for_each(|&node| check_node(node, num_nodes))
}

#[inline]
pub(crate) fn check_node(node: usize, num_nodes: usize) -> Result<(), NetworkError> {
    if node >= num_nodes {
        return Err(NetworkError::InvalidNode { node, num_nodes });
    }
    Ok(())
}
