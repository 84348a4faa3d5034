use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use tricount::{
    build_from_edge_source, build_random_dense, build_random_dense_seeded, count_triangles,
    load_edge_list_file, precompute_all, DenseGraph, Strategy, TriangleCounter, TriangleError,
};

fn count_all(graph: &DenseGraph, threads: usize) -> Vec<u64> {
    let table = precompute_all(graph);
    Strategy::ALL
        .iter()
        .map(|&s| count_triangles(graph, s, threads, Some(&table)).unwrap())
        .collect()
}

#[test]
fn test_kite_scenario() {
    // vertices {0,1,2,3}, edges {(0,1),(1,2),(2,0),(2,3)} -> only {0,1,2}
    let graph = build_from_edge_source(4, vec![(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
    for threads in [1, 2, 3, 16] {
        assert_eq!(count_all(&graph, threads), vec![1; 4], "threads {}", threads);
    }
}

#[test]
fn test_strategy_and_parallel_equivalence() {
    let mut rng = StdRng::seed_from_u64(2024);
    for density in [0.05, 0.25, 0.5, 0.95] {
        let graph = build_random_dense(80, density, &mut rng).unwrap();
        let expected = count_triangles(&graph, Strategy::NodeTriple, 1, None).unwrap();

        for threads in [1, 2, 5] {
            for count in count_all(&graph, threads) {
                assert_eq!(count, expected, "density {} threads {}", density, threads);
            }
        }
    }
}

#[test]
fn test_zero_edges_and_complete_graph() {
    let empty = build_random_dense_seeded(40, 0.0, 5).unwrap();
    assert_eq!(empty.edge_count(), 0);
    assert_eq!(count_all(&empty, 1), vec![0; 4]);
    assert_eq!(count_all(&empty, 4), vec![0; 4]);

    let n = 30u64;
    let complete = build_random_dense_seeded(n as usize, 1.0, 5).unwrap();
    let expected = n * (n - 1) * (n - 2) / 6;
    assert_eq!(count_all(&complete, 1), vec![expected; 4]);
    assert_eq!(count_all(&complete, 3), vec![expected; 4]);
}

#[test]
fn test_single_triangle_any_size() {
    for n in [3usize, 4, 50] {
        let graph = build_from_edge_source(n, vec![(0, 1), (1, 2), (0, 2)]).unwrap();
        assert_eq!(count_all(&graph, 1), vec![1; 4]);
        assert_eq!(count_all(&graph, 2), vec![1; 4]);
    }
}

#[test]
fn test_intersection_table_symmetry() {
    let graph = build_random_dense_seeded(45, 0.4, 77).unwrap();
    let table = precompute_all(&graph);
    assert!(table.is_symmetric());
    for i in 0..45 {
        assert_eq!(table.get(i, i), 0);
        for j in 0..i {
            assert_eq!(table.get(i, j), table.get(j, i));
        }
    }
}

#[test]
fn test_load_edge_list_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# Undirected graph: kite").unwrap();
    writeln!(file, "0 1").unwrap();
    writeln!(file, "1 2 2 0").unwrap();
    writeln!(file, "2 3").unwrap();

    let graph = load_edge_list_file(4, file.path()).unwrap();
    assert_eq!(graph.edge_count(), 4);

    let mut counter = TriangleCounter::new(&graph);
    assert_eq!(counter.count(Strategy::CacheAssistedEdgeIntersection, 2).unwrap(), 1);
    assert_eq!(counter.count(Strategy::NodeTriple, 1).unwrap(), 1);
}

#[test]
fn test_load_errors_are_distinct() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "0 1\n1 9").unwrap();
    let err = load_edge_list_file(4, file.path()).unwrap_err();
    assert!(matches!(err, TriangleError::MalformedInput(_)));

    let err = load_edge_list_file(4, "/nonexistent/tricount/edges.txt").unwrap_err();
    assert!(matches!(err, TriangleError::Io(_)));

    let graph = build_from_edge_source(3, vec![(0, 1)]).unwrap();
    let err = count_triangles(&graph, Strategy::EdgeIntersection, 0, None).unwrap_err();
    assert!(matches!(err, TriangleError::InvalidArgument(_)));

    let err = count_triangles(&graph, Strategy::CacheAssistedEdgeIntersection, 1, None).unwrap_err();
    assert!(matches!(err, TriangleError::Precondition(_)));
}
