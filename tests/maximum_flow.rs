use network_analysis::maximum_flow::graph::Graph;
use network_analysis::maximum_flow::max_download_speed;
use network_analysis::maximum_flow::relabel_to_front::RelabelToFront;
use network_analysis::maximum_flow::status::Status;
use network_analysis::NetworkError;
use rstest::rstest;

type Network = (Vec<Vec<usize>>, Vec<Vec<i32>>);

fn chain() -> Network {
    (vec![vec![1], vec![2], vec![3], vec![]], vec![vec![5], vec![5], vec![5], vec![]])
}

fn parallel_paths() -> Network {
    (vec![vec![1, 2], vec![3], vec![3], vec![]], vec![vec![3, 4], vec![3], vec![4], vec![]])
}

fn disconnected() -> Network {
    (vec![vec![1], vec![], vec![3], vec![]], vec![vec![8], vec![], vec![8], vec![]])
}

fn textbook() -> Network {
    (
        vec![vec![1, 2], vec![3], vec![1, 4], vec![2, 5], vec![3, 5], vec![]],
        vec![vec![16, 13], vec![12], vec![4, 14], vec![9, 20], vec![7, 4], vec![]],
    )
}

fn bottleneck() -> Network {
    // two wide fans joined by a single narrow link 3 -> 4
    (
        vec![vec![1, 2], vec![3], vec![3], vec![4], vec![5, 6], vec![7], vec![7], vec![]],
        vec![vec![10, 10], vec![10], vec![10], vec![4], vec![10, 10], vec![10], vec![10], vec![]],
    )
}

fn reverse_only() -> Network {
    (vec![vec![], vec![0]], vec![vec![], vec![9]])
}

fn bidirectional() -> Network {
    (vec![vec![1, 2], vec![2, 0], vec![1, 3], vec![]], vec![vec![4, 2], vec![5, 1], vec![3, 6], vec![]])
}

#[rstest]
#[case::chain(chain(), 0, 3, 5)]
#[case::parallel_paths(parallel_paths(), 0, 3, 7)]
#[case::disconnected(disconnected(), 0, 3, 0)]
#[case::textbook(textbook(), 0, 5, 23)]
#[case::bottleneck(bottleneck(), 0, 7, 4)]
#[case::reverse_only(reverse_only(), 0, 1, 0)]
#[case::reverse_direction(reverse_only(), 1, 0, 9)]
#[case::bidirectional(bidirectional(), 0, 3, 6)]
#[case::inner_pair(textbook(), 1, 4, 9)]
fn max_download_speed_matches_hand_computed_value(#[case] network: Network, #[case] source: usize, #[case] sink: usize, #[case] expected: i32) {
    let (adjacency, speeds) = network;
    assert_eq!(max_download_speed(&adjacency, &speeds, source, sink), Ok(expected));
}

#[rstest]
#[case(chain())]
#[case(parallel_paths())]
#[case(disconnected())]
#[case(textbook())]
fn same_source_and_sink_has_no_flow(#[case] network: Network) {
    let (adjacency, speeds) = network;
    for u in 0..adjacency.len() {
        assert_eq!(max_download_speed(&adjacency, &speeds, u, u), Ok(-1));
    }
}

#[rstest]
#[case::chain(chain(), 0, 3)]
#[case::parallel_paths(parallel_paths(), 0, 3)]
#[case::textbook(textbook(), 0, 5)]
#[case::bottleneck(bottleneck(), 0, 7)]
#[case::bidirectional(bidirectional(), 0, 3)]
#[case::inner_pair(textbook(), 2, 3)]
fn flow_is_conserved_and_respects_capacities(#[case] network: Network, #[case] source: usize, #[case] sink: usize) {
    let (adjacency, speeds) = network;
    let mut graph = Graph::from_adjacency_list(&adjacency, &speeds).unwrap();
    let mut solver = RelabelToFront::default();
    assert_eq!(solver.solve(source, sink, &mut graph), Status::Optimal);

    let residual = solver.network();
    let n = adjacency.len();
    for u in 0..n {
        for v in 0..n {
            assert_eq!(residual.flow(u, v), -residual.flow(v, u));
            assert!(residual.flow(u, v) <= residual.capacity(u, v));
            assert!(residual.flow(u, v) >= -residual.capacity(v, u));
        }
        if u != source && u != sink {
            assert_eq!((0..n).map(|v| residual.flow(u, v)).sum::<i32>(), 0);
            assert_eq!(solver.excess(u), 0);
        }
    }
    assert_eq!(solver.excess(sink), solver.maximum_flow());
    assert_eq!(solver.excess(source), -solver.maximum_flow());
}

#[rstest]
#[case::chain(chain(), 0, 3)]
#[case::parallel_paths(parallel_paths(), 0, 3)]
#[case::disconnected(disconnected(), 0, 3)]
#[case::textbook(textbook(), 0, 5)]
#[case::bottleneck(bottleneck(), 0, 7)]
#[case::bidirectional(bidirectional(), 0, 3)]
fn maximum_flow_equals_minimum_cut(#[case] network: Network, #[case] source: usize, #[case] sink: usize) {
    let (adjacency, speeds) = network;
    let mut graph = Graph::from_adjacency_list(&adjacency, &speeds).unwrap();
    let mut solver = RelabelToFront::default();
    assert_eq!(solver.solve(source, sink, &mut graph), Status::Optimal);

    let mut in_cut = vec![false; graph.num_nodes()];
    graph.minimum_cut(source).into_iter().for_each(|u| in_cut[u] = true);
    assert!(in_cut[source]);
    assert!(!in_cut[sink]);

    let cut_capacity: i32 = graph.edges().filter(|e| in_cut[e.from] && !in_cut[e.to]).map(|e| e.upper).sum();
    assert_eq!(cut_capacity, solver.maximum_flow());
    assert_eq!(graph.maximum_flow(source), solver.maximum_flow());
    assert!(graph.edges().all(|e| e.flow >= 0 && e.flow <= e.upper));
}

#[test]
fn flow_is_written_back_to_edges() {
    let (adjacency, speeds) = parallel_paths();
    let mut graph = Graph::from_adjacency_list(&adjacency, &speeds).unwrap();
    let mut solver = RelabelToFront::default();
    solver.solve(0, 3, &mut graph);

    let flows: Vec<i32> = (0..graph.num_edges()).map(|edge_id| graph.get_edge(edge_id).unwrap().flow).collect();
    assert_eq!(flows, vec![3, 4, 3, 4]);
}

#[test]
fn graph_built_by_hand_matches_adjacency_list() {
    let mut graph = Graph::default();
    let nodes = graph.add_nodes(4);
    assert_eq!(nodes, vec![0, 1, 2, 3]);
    graph.add_directed_edge(0, 1, 5).unwrap();
    graph.add_directed_edge(1, 2, 5).unwrap();
    graph.add_directed_edge(2, 3, 5).unwrap();
    assert_eq!(graph.add_directed_edge(3, 4, 5), None);

    let mut solver = RelabelToFront::default();
    assert_eq!(solver.solve(0, 3, &mut graph), Status::Optimal);
    assert_eq!(solver.maximum_flow(), 5);
}

#[test]
fn out_of_range_device_is_rejected() {
    let adjacency = vec![vec![1], vec![7]];
    let speeds = vec![vec![1], vec![1]];
    assert_eq!(max_download_speed(&adjacency, &speeds, 0, 1), Err(NetworkError::InvalidNode { node: 7, num_nodes: 2 }));

    let (adjacency, speeds) = chain();
    assert_eq!(max_download_speed(&adjacency, &speeds, 0, 4), Err(NetworkError::InvalidNode { node: 4, num_nodes: 4 }));
}

#[test]
fn misaligned_speeds_are_rejected() {
    let adjacency = vec![vec![1, 2], vec![], vec![]];
    let speeds = vec![vec![1], vec![], vec![]];
    assert_eq!(max_download_speed(&adjacency, &speeds, 0, 2), Err(NetworkError::ShapeMismatch { device: 0, links: 2, values: 1 }));
}

#[test]
fn wide_integer_flow() {
    let adjacency = vec![vec![1, 2], vec![3], vec![3], vec![]];
    let speeds: Vec<Vec<i64>> = vec![vec![3_000_000_000, 1], vec![3_000_000_000], vec![1], vec![]];
    assert_eq!(max_download_speed(&adjacency, &speeds, 0, 3), Ok(3_000_000_001));
}
