//! The fixed topology of springs over the ring.

use super::Spring;

/// The springs of a ring of `n` points.
///
/// Point `i` anchors two `Spring`s: one to its successor `(i + 1) % n` and one to its predecessor `(i + n - 1) % n`. Its neighbors anchor two more that
/// reach back to it, so four `Spring`s touch every point. Every `Spring` has the same stiffness and
/// the rest length of a side of the regular `n`-gon inscribed in a circle of the nominal radius. That rest length is used even when the points start out
/// perturbed, so that the ring is pulled toward regular spacing.
#[derive(Debug, Clone)]
pub struct SpringNetwork {
    /// All `Spring`s, in the order `[0 -> 1, 0 -> n-1, 1 -> 2, 1 -> 0, ...]`.
    springs: Vec<Spring>,
    /// For each point, the indices into `springs` of the four `Spring`s that touch it: the two it anchors, then the two anchored by its successor and
    /// its predecessor that reach back to it.
    adjacency: Vec<[usize; 4]>,
}

impl SpringNetwork {
    /// Builds the ring of `Spring`s.
    ///
    /// # Arguments
    ///
    /// - `n`: The number of points. Callers must ensure `n >= 3`.
    /// - `k`: The spring constant of every `Spring`.
    /// - `radius`: The nominal radius of the ring.
    #[must_use]
    pub fn ring(n: usize, k: f64, radius: f64) -> Self {
        let l0 = Self::chord_length(n, radius);

        let springs = (0..n)
            .flat_map(|i| [Spring::new(i, (i + 1) % n, k, l0), Spring::new(i, (i + n - 1) % n, k, l0)])
            .collect();
        let adjacency = (0..n)
            .map(|i| {
                let (next, prev) = ((i + 1) % n, (i + n - 1) % n);
                [2 * i, 2 * i + 1, 2 * next + 1, 2 * prev]
            })
            .collect();

        Self { springs, adjacency }
    }

    /// The side length of the regular `n`-gon inscribed in a circle of the given radius, i.e. `2 r sin(π / n)`.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn chord_length(n: usize, radius: f64) -> f64 {
        2.0 * radius * (core::f64::consts::PI / n as f64).sin()
    }

    /// Returns all `Spring`s.
    #[must_use]
    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    /// Returns the number of points the network connects.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the four `Spring`s that touch the point at index `i`.
    ///
    /// # Panics
    ///
    /// If `i` is out of range.
    pub fn springs_of(&self, i: usize) -> impl Iterator<Item = &Spring> + '_ {
        self.adjacency[i].iter().map(move |&s| &self.springs[s])
    }
}
