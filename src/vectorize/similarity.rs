// Sparse term vectors and cosine similarity.
//
// Profile vectors are mostly zeros (a profile uses a tiny slice of the
// vocabulary), so vectors store only their non-zero dimensions, sorted by
// dimension index. Cosine similarity is computed with a merge over the two
// sorted entry lists.

use std::cmp::Ordering;

/// A sparse vector: (dimension, weight) pairs sorted by dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    entries: Vec<(usize, f64)>,
}

impl TermVector {
    /// Build from (dimension, weight) pairs in any order.
    /// Zero weights are dropped; repeated dimensions are summed.
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|&(dim, _)| dim);

        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (dim, weight) in entries {
            match merged.last_mut() {
                Some(last) if last.0 == dim => last.1 += weight,
                _ => merged.push((dim, weight)),
            }
        }
        merged.retain(|&(_, w)| w != 0.0);

        Self { entries: merged }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Weight of one dimension (0.0 when absent).
    pub fn get(&self, dim: usize) -> f64 {
        self.entries
            .binary_search_by_key(&dim, |&(d, _)| d)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &TermVector) -> f64 {
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;

        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }

        sum
    }
}

/// Cosine similarity between two vectors.
///
/// Returns 0.0 when either vector has (near) zero magnitude, so an empty
/// profile never produces NaN.
pub fn cosine(a: &TermVector, b: &TermVector) -> f64 {
    let denom = a.norm() * b.norm();
    if denom < f64::EPSILON {
        return 0.0;
    }
    a.dot(b) / denom
}
