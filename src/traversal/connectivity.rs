use crate::traversal::hop_distances;
use log::debug;

/// Whether every device is reachable from device 0.
pub fn all_devices_connected(adjacency: &[Vec<usize>]) -> bool {
    adjacency.is_empty() || all_devices_reachable(adjacency, 0)
}

/// Whether every device is reachable from `root` along directed links.
/// A malformed adjacency list is never connected.
pub fn all_devices_reachable(adjacency: &[Vec<usize>], root: usize) -> bool {
    match hop_distances(adjacency, root) {
        Ok(distances) => distances.iter().all(Option::is_some),
        Err(err) => {
            debug!("connectivity check rejected the network: {err}");
            false
        }
    }
}
