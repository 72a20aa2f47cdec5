/// Square, symmetric pairwise distance matrix, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// An `n`×`n` matrix of zeros.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Convert a row-major similarity matrix into distances (`1 - s`).
    ///
    /// Returns `None` when `similarities` is not `size * size` long.
    pub fn from_similarities(size: usize, similarities: &[f64]) -> Option<Self> {
        if similarities.len() != size * size {
            return None;
        }
        Some(Self {
            size,
            values: similarities.iter().map(|s| 1.0 - s).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Set both `(i, j)` and `(j, i)`.
    pub fn set_symmetric(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.size + j] = value;
        self.values[j * self.size + i] = value;
    }

    /// A matrix is degenerate if it has fewer than two points or holds a
    /// non-finite or negative entry.
    pub fn is_degenerate(&self) -> bool {
        self.size < 2 || self.values.iter().any(|v| !v.is_finite() || *v < 0.0)
    }
}
