//! Integration tests for MINAA
//!
//! These tests drive the whole pipeline through the public API with small
//! in-test aligners standing in for the external assignment solver.

use minaa::*;
use ndarray::{array, Array2};

/// Row by row, picks the cheapest column not taken yet (first on ties).
struct GreedyAligner;

impl Aligner for GreedyAligner {
    fn align(&self, costs: &CostMatrix) -> anyhow::Result<AlignmentMatrix> {
        let (rows, cols) = costs.dim();
        let mut scores = Array2::zeros((rows, cols));
        let mut taken = vec![false; cols];
        for i in 0..rows {
            let best = (0..cols)
                .filter(|&j| !taken[j])
                .min_by(|&a, &b| costs[[i, a]].total_cmp(&costs[[i, b]]));
            if let Some(j) = best {
                taken[j] = true;
                scores[[i, j]] = 1.0;
            }
        }
        Ok(AlignmentMatrix::new(scores))
    }

    fn name(&self) -> &str {
        "greedy"
    }
}

/// Returns a matrix of the wrong shape.
struct BrokenAligner;

impl Aligner for BrokenAligner {
    fn align(&self, _costs: &CostMatrix) -> anyhow::Result<AlignmentMatrix> {
        Ok(AlignmentMatrix::new(Array2::zeros((1, 1))))
    }

    fn name(&self) -> &str {
        "broken"
    }
}

fn signature(degree: u32, triangles: u32) -> Signature {
    let mut counts = [0u32; ORBIT_COUNT];
    counts[0] = degree;
    counts[3] = triangles;
    Signature::new(counts)
}

fn labels(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}

/// Path 0 - 1 - 2.
fn path3(prefix: &str) -> GraphInput {
    let adjacency = AdjacencyMatrix::new(array![[0, 1, 0], [1, 0, 1], [0, 1, 0]]).unwrap();
    let signatures = vec![signature(1, 0), signature(2, 0), signature(1, 0)];
    GraphInput::new(adjacency, signatures, labels(prefix, 3)).unwrap()
}

#[test]
fn test_identical_paths_end_to_end() {
    let g = path3("g");
    let h = path3("h");

    let run = run(&g, &h, None, &AlignParams::default(), &GreedyAligner).unwrap();

    assert_eq!(run.costs.dim(), (3, 3));
    for i in 0..3 {
        assert_eq!(run.costs[[i, i]], 0.0);
    }
    assert_eq!(run.combined, run.costs);

    let pairs: Vec<(usize, usize)> = run.pairs.iter().map(|p| (p.g, p.h)).collect();
    assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 2)]);

    assert_eq!(run.bridged.dim(), (6, 6));
    assert_eq!(run.bridged[[0, 3]], 1);
    assert_eq!(run.bridged[[4, 1]], 1);
    assert_eq!(run.bridged[[0, 4]], 0);

    insta::assert_snapshot!(run.merged.to_string(), @r"
    g0h0: 0 3 0
    g1h1: 3 0 3
    g2h2: 0 3 0
    ");
}

#[test]
fn test_biological_costs_are_blended() {
    let g = path3("g");
    let h = path3("h");
    let bio = CostMatrix::from_elem((3, 3), 0.5);

    let params = AlignParams {
        beta: 0.5,
        ..AlignParams::default()
    };
    let run = run(&g, &h, Some(&bio), &params, &GreedyAligner).unwrap();
    for (c, t) in run.combined.iter().zip(run.costs.iter()) {
        assert!((c - (0.5 * t + 0.25)).abs() < 1e-9);
    }
}

#[test]
fn test_out_of_range_beta_keeps_topology() {
    let g = path3("g");
    let h = path3("h");
    let bio = CostMatrix::from_elem((3, 3), 0.9);

    let params = AlignParams {
        beta: 1.5,
        ..AlignParams::default()
    };
    let run = run(&g, &h, Some(&bio), &params, &GreedyAligner).unwrap();
    assert_eq!(run.combined, run.costs);
}

#[test]
fn test_invalid_alpha_is_rejected() {
    let g = path3("g");
    let params = AlignParams {
        alpha: 2.0,
        ..AlignParams::default()
    };
    let err = run(&g, &g, None, &params, &GreedyAligner).unwrap_err();
    assert!(err.to_string().contains("invalid alignment parameters"));
}

#[test]
fn test_malformed_alignment_is_rejected() {
    let g = path3("g");
    let h = path3("h");
    let err = run(&g, &h, None, &AlignParams::default(), &BrokenAligner).unwrap_err();
    assert!(err.to_string().contains("malformed alignment"));
}

#[test]
fn test_graph_input_checks_counts() {
    let adjacency = AdjacencyMatrix::new(Array2::zeros((2, 2))).unwrap();
    let two = vec![signature(0, 0), signature(0, 0)];

    assert!(GraphInput::new(adjacency.clone(), two.clone(), labels("g", 3)).is_err());
    assert!(GraphInput::new(adjacency.clone(), vec![signature(0, 0)], labels("g", 2)).is_err());
    assert!(GraphInput::new(adjacency, two, labels("g", 2)).is_ok());
}

#[test]
fn test_run_serializes() {
    let g = path3("g");
    let h = path3("h");
    let run = run(&g, &h, None, &AlignParams::default(), &GreedyAligner).unwrap();

    let json = serde_json::to_value(&run).unwrap();
    assert_eq!(json["merged"]["labels"][1], "g1h1");
    assert_eq!(json["pairs"].as_array().unwrap().len(), 3);
}
