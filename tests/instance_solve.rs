//! End-to-end solves through the JSON instance boundary.

use u_aco::aco::AcoConfig;
use u_aco::instance::ProblemInstance;
use u_aco::models::Node;
use u_aco::AcoError;

const NEIGHBORHOOD: &str = r#"{
    "nodes": [
        { "label": "school", "lat": 37.5665, "lon": 126.9780 },
        { "label": "Kim",    "lat": 37.5700, "lon": 126.9820 },
        { "label": "Lee",    "lat": 37.5610, "lon": 126.9750 },
        { "label": "Park",   "lat": 37.5690, "lon": 126.9700 },
        { "label": "Choi",   "lat": 37.5630, "lon": 126.9850 },
        { "label": "Jung",   "lat": 37.5720, "lon": 126.9760 }
    ],
    "config": { "agents": 6, "iterations": 40, "seed": 2024 }
}"#;

#[test]
fn test_solves_json_instance() {
    let instance = ProblemInstance::from_json(NEIGHBORHOOD).expect("valid instance");
    let result = instance.solve().expect("solvable");

    let seq = result.tour().as_slice();
    assert_eq!(seq.len(), 7);
    assert_eq!(seq[0], 0);
    assert_eq!(seq[6], 0);
    let mut open = seq[..6].to_vec();
    open.sort_unstable();
    assert_eq!(open, vec![0, 1, 2, 3, 4, 5]);

    let cost = instance.cost_matrix().expect("valid");
    assert!((result.tour().length(&cost) - result.length()).abs() < 1e-9);
    assert_eq!(result.iterations(), 40);

    let path = result.tour().waypoints(&instance.nodes);
    assert_eq!(path.first(), Some(&(37.5665, 126.9780)));
    assert_eq!(path.first(), path.last());
}

#[test]
fn test_same_instance_same_answer() {
    let a = ProblemInstance::from_json(NEIGHBORHOOD)
        .expect("valid instance")
        .solve()
        .expect("solvable");
    let b = ProblemInstance::from_json(NEIGHBORHOOD)
        .expect("valid instance")
        .solve()
        .expect("solvable");
    assert_eq!(a, b);
}

#[test]
fn test_stale_road_matrix_falls_back_to_haversine() {
    let base = ProblemInstance::from_json(NEIGHBORHOOD).expect("valid instance");
    let stale = base
        .clone()
        .with_matrix(vec![vec![Some(1.0); 4]; 4]);
    assert_eq!(
        stale.cost_matrix().expect("falls back"),
        base.cost_matrix().expect("valid")
    );
    assert_eq!(
        stale.solve().expect("solvable"),
        base.solve().expect("solvable")
    );
}

#[test]
fn test_road_matrix_with_gaps_still_solves() {
    let nodes = vec![
        Node::new("school", 0.0, 0.0),
        Node::new("A", 0.0, 0.01),
        Node::new("B", 0.01, 0.0),
    ];
    let matrix = vec![
        vec![Some(0.0), Some(1.2), None],
        vec![Some(1.1), Some(0.0), Some(f64::NAN)],
        vec![Some(1.0), Some(1.6), Some(0.0)],
    ];
    let result = ProblemInstance::new(nodes)
        .with_matrix(matrix)
        .with_config(AcoConfig::default().with_iterations(10))
        .solve()
        .expect("solvable");
    assert!(result.length().is_finite());
}

#[test]
fn test_parameter_errors_surface_before_solving() {
    let instance = ProblemInstance::from_json(NEIGHBORHOOD)
        .expect("valid instance")
        .with_config(AcoConfig::default().with_evaporation(1.5));
    assert!(matches!(
        instance.solve(),
        Err(AcoError::InvalidParameter {
            name: "evaporation",
            ..
        })
    ));
}
