use super::*;
use tempfile::tempdir;

const TRIANGLE_JSON: &str = r#"{
    "vertices": [[0, 0], [3, 0], [3, 4]],
    "edges": [
        { "first": 0, "second": 1 },
        { "first": 1, "second": 2 },
        { "first": 0, "second": 2, "weight": 1.5 }
    ]
}"#;

#[test]
fn test_parse_json_into_graph() {
    let graph = GraphDocument::parse_json(TRIANGLE_JSON)
        .unwrap()
        .into_graph()
        .unwrap();
    assert_eq!(graph.vertices().len(), 3);
    let weights: Vec<f64> = graph.edges().iter().map(|e| e.weight()).collect();
    assert_eq!(weights, vec![3.0, 4.0, 1.5]);
}

#[test]
fn test_parse_toml() {
    let content = r#"
vertices = [[0, 0], [3, 0], [3, 4]]

[[edges]]
first = 0
second = 2
weight = 9.0
"#;
    let document = GraphDocument::parse_toml(content).unwrap();
    assert_eq!(document.vertices[2], Vertex::new(3, 4));
    assert_eq!(
        document.edges,
        vec![EdgeRecord {
            first: 0,
            second: 2,
            weight: Some(9.0)
        }]
    );
}

#[test]
fn test_edges_are_optional() {
    let document = GraphDocument::parse_json(r#"{"vertices": [[1, 2]]}"#).unwrap();
    assert!(document.edges.is_empty());
}

#[test]
fn test_out_of_range_index_is_data_error() {
    let document = GraphDocument::parse_json(
        r#"{"vertices": [[0, 0]], "edges": [{"first": 0, "second": 4}]}"#,
    )
    .unwrap();
    let err = document.into_graph().unwrap_err();
    assert!(matches!(err, GraphError::InvalidDocument { .. }));
    assert_eq!(err.exit_code(), crate::error::ExitCode::Data);
}

#[test]
fn test_negative_weight_is_data_error() {
    let document = GraphDocument::parse_json(
        r#"{"vertices": [[0, 0], [1, 1]], "edges": [{"first": 0, "second": 1, "weight": -2}]}"#,
    )
    .unwrap();
    assert!(matches!(
        document.into_graph(),
        Err(GraphError::InvalidDocument { .. })
    ));
}

#[test]
fn test_malformed_json() {
    let err = GraphDocument::parse_json("{\"vertices\": [[0]]}").unwrap_err();
    assert!(matches!(err, GraphError::Json(_)));
}

#[test]
fn test_from_graph_omits_euclidean_weights() {
    let mut graph = GraphDocument::parse_json(TRIANGLE_JSON)
        .unwrap()
        .into_graph()
        .unwrap();
    graph.add_edge(Vertex::new(3, 4), Vertex::new(0, 0));

    let document = GraphDocument::from_graph(&graph).unwrap();
    assert_eq!(document.edges.len(), 4);
    assert_eq!(document.edges[0].weight, None);
    assert_eq!(document.edges[2].weight, Some(1.5));
    assert_eq!(document.edges[3].first, 2);
    assert_eq!(document.edges[3].second, 0);

    let json = document.to_json_string().unwrap();
    assert!(json.contains("\"weight\": 1.5"));
    assert_eq!(GraphDocument::parse_json(&json).unwrap(), document);
}

#[test]
fn test_load_picks_parser_by_extension() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("graph.json");
    fs::write(&json_path, TRIANGLE_JSON).unwrap();
    assert_eq!(GraphDocument::load(&json_path).unwrap().edges.len(), 3);

    let toml_path = dir.path().join("graph.TOML");
    fs::write(&toml_path, "vertices = [[5, 5], [6, 6]]\n").unwrap();
    let document = GraphDocument::load(&toml_path).unwrap();
    assert_eq!(document.vertices, vec![Vertex::new(5, 5), Vertex::new(6, 6)]);
}

#[test]
fn test_load_missing_file() {
    let err = GraphDocument::load(Path::new("/nonexistent/graph.json")).unwrap_err();
    assert!(matches!(err, GraphError::Io(_)));
}
