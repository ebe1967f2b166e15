use shortest_paths::algorithm::bellman_ford::{find_negative_cycle, BellmanFord};
use shortest_paths::algorithm::path::path_weight;
use shortest_paths::algorithm::traits::Distance;
use shortest_paths::graph::{DirectedGraph, Edge, Graph};
use shortest_paths::Error;

#[test]
fn test_negative_weights_without_cycle() {
    let graph =
        DirectedGraph::from_edges(4, [(0, 1, 5), (0, 2, 2), (2, 1, -4), (1, 3, 1), (2, 3, 3)])
            .unwrap();
    let result = BellmanFord::new().run(&graph, 0).unwrap();

    assert!(!result.cycles.has_negative_cycle);
    assert_eq!(
        result.paths.distances,
        vec![
            Distance::Finite(0),
            Distance::Finite(-2),
            Distance::Finite(2),
            Distance::Finite(-1)
        ]
    );
    assert_eq!(result.paths.path_to(3).unwrap(), vec![0, 2, 1, 3]);
}

#[test]
fn test_propagation_reaches_downstream_vertices() {
    // 1 <-> 2 is a negative cycle; 3 and 4 hang off it, 5 is unreachable
    let graph = DirectedGraph::from_edges(
        6,
        [(0, 1, 1), (1, 2, -2), (2, 1, 1), (2, 3, 10), (3, 4, 10), (5, 4, 1)],
    )
    .unwrap();
    let result = BellmanFord::new().run(&graph, 0).unwrap();

    assert!(result.cycles.has_negative_cycle);
    assert_eq!(
        result.cycles.in_negative_cycle,
        vec![false, true, true, true, true, false]
    );
    assert_eq!(result.cycles.affected_vertices(), vec![1, 2, 3, 4]);
    assert_eq!(result.paths.distances[0], Distance::Finite(0));
    assert_eq!(result.paths.distances[4], Distance::NegInfinity);
    assert_eq!(result.paths.distances[5], Distance::Infinity);
    assert!(result.paths.path_to(4).is_err());
    assert_eq!(result.paths.path_to(0).unwrap(), vec![0]);
}

#[test]
fn test_negative_self_loop() {
    let graph = DirectedGraph::from_edges(3, [(0, 1, 3), (1, 1, -1), (1, 2, 0)]).unwrap();
    let result = BellmanFord::new().run(&graph, 0).unwrap();

    assert!(result.cycles.has_negative_cycle);
    assert_eq!(result.cycles.in_negative_cycle, vec![false, true, true]);
}

#[test]
fn test_large_integer_weights_within_range() {
    let big = i64::MAX / 4;
    let graph = DirectedGraph::from_edges(4, [(0, 1, big), (1, 2, big), (2, 3, -big), (0, 3, big)])
        .unwrap();
    let result = BellmanFord::new().run(&graph, 0).unwrap();

    assert_eq!(result.paths.distances[2], Distance::Finite(2 * big));
    assert_eq!(result.paths.distances[3], Distance::Finite(big));
}

#[test]
fn test_unreachable_negative_cycle_is_not_reported() {
    let graph =
        DirectedGraph::from_edges(5, [(0, 1, 2), (1, 2, 2), (3, 4, -5), (4, 3, 1)]).unwrap();
    let result = BellmanFord::new().run(&graph, 0).unwrap();

    assert!(!result.cycles.has_negative_cycle);
    assert_eq!(result.paths.distances[3], Distance::Infinity);

    let mut cycle = find_negative_cycle(&graph).unwrap().unwrap();
    cycle.sort_unstable();
    assert_eq!(cycle, vec![3, 4]);
}

#[test]
fn test_early_exit_stops_at_fixpoint() {
    let graph = DirectedGraph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1)]).unwrap();

    let eager = BellmanFord::new().run(&graph, 0).unwrap();
    assert_eq!(eager.passes, 2);

    let full = BellmanFord::new().with_early_exit(false).run(&graph, 0).unwrap();
    assert_eq!(full.passes, 3);
    assert_eq!(eager.paths, full.paths);
}

#[test]
fn test_run_on_bare_edge_list() {
    let edges = vec![Edge::new(0, 1, 2.5), Edge::new(1, 2, -1.0)];
    let result = BellmanFord::new().run_on_edges(&edges, 3, 0).unwrap();
    assert_eq!(result.paths.distances[2], Distance::Finite(1.5));

    let bad = vec![Edge::new(0, 3, 1.0)];
    assert_eq!(
        BellmanFord::new().run_on_edges(&bad, 3, 0),
        Err(Error::InvalidEdge(0, 3))
    );
    assert_eq!(
        BellmanFord::new().run_on_edges::<f64>(&[], 0, 0),
        Err(Error::InvalidVertex(0))
    );
}

#[test]
fn test_find_negative_cycle_returns_closed_walk() {
    let graph = DirectedGraph::from_edges(
        5,
        [(0, 1, 1), (1, 2, -3), (2, 0, 1), (2, 3, 4), (3, 4, 1)],
    )
    .unwrap();
    let cycle = find_negative_cycle(&graph).unwrap().unwrap();

    assert_eq!(cycle.len(), 3);
    let mut closed = cycle.clone();
    closed.push(cycle[0]);
    for pair in closed.windows(2) {
        assert!(graph.has_edge(pair[0], pair[1]), "missing edge {:?}", pair);
    }
    assert_eq!(path_weight(&graph, &closed), Some(-1));
}

#[test]
fn test_find_negative_cycle_on_acyclic_graph() {
    let graph = DirectedGraph::from_edges(3, [(0, 1, -4), (1, 2, -4), (0, 2, 1)]).unwrap();
    assert_eq!(find_negative_cycle(&graph).unwrap(), None);
}
