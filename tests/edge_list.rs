use gdv::{
    error::Error,
    executor::GDV_LEN,
    front_end::read_edge_list,
    graph::Graph,
    graphlet::{Graphlet, Orbit},
    graphlet_degree_vectors,
    task::Task,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_edge_list(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_triangle() {
    let file = write_edge_list("3 3\n1 2\n2 3\n3 1\n");
    let gdvs = graphlet_degree_vectors(file.path()).unwrap();
    assert_eq!(gdvs.len(), 3);
    for gdv in &gdvs {
        assert_eq!(gdv.len(), GDV_LEN);
        assert_eq!(gdv[0], 2);
        assert_eq!(gdv[1 + Orbit::TRIANGLE.id()], 1);
        assert_eq!(gdv.iter().sum::<u64>(), 3);
    }
}

#[test]
fn test_loops_and_duplicates() {
    let file = write_edge_list("4 6\n1 2\n2 1\n1 1\n1 3\n1 4\n3 1\n");
    let gdvs = graphlet_degree_vectors(file.path()).unwrap();
    assert_eq!(gdvs[0][0], 3);
    assert_eq!(gdvs[0][1 + Orbit::CLAW_CENTER.id()], 1);
    for gdv in &gdvs[1..] {
        assert_eq!(gdv[0], 1);
        assert_eq!(gdv[1 + Orbit::CLAW_LEAF.id()], 1);
    }
}

#[test]
fn test_isolated_vertices() {
    let file = write_edge_list("5 1\n2 4\n");
    let gdvs = graphlet_degree_vectors(file.path()).unwrap();
    assert_eq!(gdvs.len(), 5);
    assert_eq!(gdvs.iter().map(|gdv| gdv[0]).collect::<Vec<_>>(), vec![0, 1, 0, 1, 0]);
    assert!(gdvs.iter().all(|gdv| gdv[1..].iter().all(|&x| x == 0)));
}

#[test]
fn test_task() {
    let file = write_edge_list("6 7\n1 2 2 3 3 4 4 5 5 1 1 3 2 6\n");
    let graph = Graph::from_edge_list(&read_edge_list(file.path()).unwrap()).unwrap();
    assert_eq!(graph.info().to_string(), "6 7");
    let census = Task::new(&graph).threads(2).run().unwrap();
    assert_eq!(census.graphlet_count(Graphlet::HOUSE), 1);
    assert_eq!(census.graphlet_count(Graphlet::TRIANGLE), 1);
    let text = census.to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[5].starts_with("6 1 "));
    assert_eq!(lines[0].split_whitespace().count(), 1 + GDV_LEN);
}

fn error_of(text: &str) -> Error {
    let file = write_edge_list(text);
    graphlet_degree_vectors(file.path()).unwrap_err()
}

#[test]
fn test_input_errors() {
    assert!(matches!(
        error_of("3 1\n1 4\n"),
        Error::IdOutOfRange {
            edge: 0,
            id: 4,
            num_vertices: 3
        }
    ));
    assert!(matches!(
        error_of("3 1\n0 1\n"),
        Error::IdOutOfRange { id: 0, .. }
    ));
    assert!(matches!(
        error_of("3 2\n1 2\n-2 1\n"),
        Error::NegativeId { edge: 1, id: -2 }
    ));
    assert!(matches!(
        error_of("3 2\n1 2\n"),
        Error::MissingEdges {
            expected: 2,
            found: 1
        }
    ));
    assert!(matches!(error_of("-3 1\n"), Error::NegativeHeader(..)));
    assert!(matches!(error_of("3 1\n1 x\n"), Error::Parse(_)));
    assert!(matches!(
        error_of("1099511627776 0\n"),
        Error::GraphTooLarge {
            num_vertices: 1099511627776
        }
    ));
    assert!(matches!(
        error_of("9000000000000000000 0\n"),
        Error::GraphTooLarge { .. }
    ));
    assert!(matches!(
        graphlet_degree_vectors("/nonexistent/graph.txt"),
        Err(Error::Io(_))
    ));
}
