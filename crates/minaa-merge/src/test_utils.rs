//! Test fixtures for small graphs and alignments

use minaa_core::{AdjacencyMatrix, AlignmentMatrix};
use ndarray::Array2;

/// Undirected graph on `n` nodes with the given edges.
pub fn graph(n: usize, edges: &[(usize, usize)]) -> AdjacencyMatrix {
    let mut matrix = Array2::<u32>::zeros((n, n));
    for &(a, b) in edges {
        matrix[[a, b]] = 1;
        matrix[[b, a]] = 1;
    }
    AdjacencyMatrix::new(matrix).unwrap()
}

/// Path 0 - 1 - ... - (n-1).
pub fn path(n: usize) -> AdjacencyMatrix {
    let edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    graph(n, &edges)
}

/// Alignment with score 1 on each listed (g, h) pair.
pub fn alignment(g: usize, h: usize, pairs: &[(usize, usize)]) -> AlignmentMatrix {
    let mut scores = Array2::<f64>::zeros((g, h));
    for &(a, b) in pairs {
        scores[[a, b]] = 1.0;
    }
    AlignmentMatrix::new(scores)
}

pub fn identity(n: usize) -> AlignmentMatrix {
    let pairs: Vec<_> = (0..n).map(|i| (i, i)).collect();
    alignment(n, n, &pairs)
}

/// Labels `{prefix}0`, `{prefix}1`, ...
pub fn labels(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_fixture() {
        let p = path(3);
        assert!(p.has_edge(0, 1));
        assert!(p.has_edge(2, 1));
        assert!(!p.has_edge(0, 2));
    }
}
