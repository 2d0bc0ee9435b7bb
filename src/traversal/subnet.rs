use crate::error::NetworkError;
use crate::traversal::hop_distances;
use std::collections::HashMap;
use std::hash::Hash;

/// For each subnet query, the minimum number of hops from `source` to a
/// device whose address starts with the query.
///
/// `addresses[u]` holds the components of device `u`'s address. An empty
/// query matches every device. Queries with no reachable match yield `None`.
pub fn closest_in_subnet<A>(adjacency: &[Vec<usize>], addresses: &[Vec<A>], source: usize, queries: &[Vec<A>]) -> Result<Vec<Option<usize>>, NetworkError>
where
    A: Eq + Hash,
{
    if addresses.len() != adjacency.len() {
        return Err(NetworkError::ShapeMismatch { device: addresses.len().min(adjacency.len()), links: adjacency.len(), values: addresses.len() });
    }
    let distances = hop_distances(adjacency, source)?;

    // prefix -> indices of the queries asking for it
    let mut pending: HashMap<&[A], Vec<usize>> = HashMap::new();
    for (query_id, query) in queries.iter().enumerate() {
        pending.entry(query.as_slice()).or_default().push(query_id);
    }

    let mut order: Vec<(usize, usize)> = distances.iter().enumerate().filter_map(|(u, d)| d.map(|d| (d, u))).collect();
    order.sort_unstable();

    let mut closest = vec![None; queries.len()];
    for (distance, u) in order {
        if pending.is_empty() {
            break;
        }
        let address = addresses[u].as_slice();
        for len in 0..=address.len() {
            if let Some(query_ids) = pending.remove(&address[..len]) {
                query_ids.into_iter().for_each(|query_id| closest[query_id] = Some(distance));
            }
        }
    }

    Ok(closest)
}
