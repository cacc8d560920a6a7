use std::sync::Arc;

use coursematch_common::{CourseMatchError, Result};
use ndarray::{Array2, ArrayView1, ArrayView2};
use tracing::{debug, info};

use crate::similarity::l2_normalize;
use crate::types::Item;

/// Immutable matrix of unit-length catalog embeddings.
///
/// Row `i` is the normalized embedding of `items[i]`. There is no way to
/// insert or remove rows once the store is built.
#[derive(Debug, Clone)]
pub struct VectorStore {
    items: Arc<[Item]>,
    vectors: Array2<f32>,
}

impl VectorStore {
    /// Embed every catalog item with `embed` and build the store.
    ///
    /// Each item is embedded from `"{title}. {description}"`.
    pub fn build<F>(catalog: Vec<Item>, mut embed: F) -> Result<Self>
    where
        F: FnMut(&str) -> Result<Vec<f32>>,
    {
        if catalog.is_empty() {
            return Err(CourseMatchError::CatalogEmpty);
        }

        let raw = catalog
            .iter()
            .map(|item| embed(&item.embedding_text()))
            .collect::<Result<Vec<_>>>()?;

        Self::from_raw(catalog, raw)
    }

    /// Build the store from already computed raw embeddings, index-aligned
    /// with `catalog`.
    pub fn from_raw(catalog: Vec<Item>, raw: Vec<Vec<f32>>) -> Result<Self> {
        if catalog.is_empty() {
            return Err(CourseMatchError::CatalogEmpty);
        }
        if raw.len() != catalog.len() {
            return Err(CourseMatchError::internal(format!(
                "{} embeddings for {} catalog items",
                raw.len(),
                catalog.len()
            )));
        }

        for (position, item) in catalog.iter().enumerate() {
            if item.id != position {
                return Err(CourseMatchError::invalid_input(format!(
                    "catalog item '{}' has id {} at position {}",
                    item.title, item.id, position
                )));
            }
        }

        let dimension = raw[0].len();
        if dimension == 0 {
            return Err(CourseMatchError::embedding(
                "embedder returned an empty vector",
            ));
        }

        let n = catalog.len();
        let mut flat = Vec::with_capacity(n * dimension);

        for (item, mut vector) in catalog.iter().zip(raw) {
            if vector.len() != dimension {
                return Err(CourseMatchError::dimension_mismatch(dimension, vector.len()));
            }
            l2_normalize(&mut vector).map_err(|e| {
                CourseMatchError::embedding(format!("item {} ('{}'): {}", item.id, item.title, e))
            })?;
            flat.extend_from_slice(&vector);
        }

        let vectors = Array2::from_shape_vec((n, dimension), flat)
            .map_err(|e| CourseMatchError::internal(format!("Failed to shape matrix: {}", e)))?;

        debug!("Normalized {} catalog embeddings", n);
        info!("Vector store built - {} items, dimension {}", n, dimension);

        Ok(Self {
            items: catalog.into(),
            vectors,
        })
    }

    /// Number of stored items (N)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a built store
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Embedding dimensionality (D)
    pub fn dimension(&self) -> usize {
        self.vectors.ncols()
    }

    /// Normalized embedding of item `index`
    pub fn vector_at(&self, index: usize) -> Result<ArrayView1<'_, f32>> {
        self.check_index(index)?;
        Ok(self.vectors.row(index))
    }

    /// Catalog item at `index`
    pub fn item_at(&self, index: usize) -> Result<&Item> {
        self.items
            .get(index)
            .ok_or_else(|| CourseMatchError::index_out_of_range(index, self.len()))
    }

    /// The full N x D matrix
    pub(crate) fn vectors(&self) -> ArrayView2<'_, f32> {
        self.vectors.view()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(CourseMatchError::index_out_of_range(index, self.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item::new(i, format!("Program {}", i), format!("Topic {}", i)))
            .collect()
    }

    fn norm(row: ArrayView1<'_, f32>) -> f64 {
        row.iter().map(|&x| f64::from(x) * f64::from(x)).sum::<f64>().sqrt()
    }

    #[test]
    fn test_build_normalizes_every_row() {
        let raw = vec![vec![3.0, 4.0, 0.0], vec![0.0, 0.0, 10.0], vec![1.0, 1.0, 1.0]];
        let store = VectorStore::from_raw(catalog(3), raw).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.dimension(), 3);
        for i in 0..store.len() {
            assert!((norm(store.vector_at(i).unwrap()) - 1.0).abs() < 1e-6);
        }
        assert!((store.vector_at(0).unwrap()[1] - 0.8).abs() < 1e-7);
    }

    #[test]
    fn test_build_uses_title_and_description() {
        let mut seen = Vec::new();
        let store = VectorStore::build(catalog(2), |text| {
            seen.push(text.to_string());
            Ok(vec![1.0, 2.0])
        })
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(seen, vec!["Program 0. Topic 0", "Program 1. Topic 1"]);
    }

    #[test]
    fn test_build_empty_catalog() {
        let err = VectorStore::build(Vec::new(), |_| Ok(vec![1.0])).unwrap_err();
        assert!(matches!(err, CourseMatchError::CatalogEmpty));
    }

    #[test]
    fn test_build_zero_vector_is_embedding_error() {
        let raw = vec![vec![1.0, 0.0], vec![0.0, 0.0]];
        let err = VectorStore::from_raw(catalog(2), raw).unwrap_err();
        assert!(matches!(err, CourseMatchError::Embedding(_)));
    }

    #[test]
    fn test_build_dimension_drift() {
        let raw = vec![vec![1.0, 0.0], vec![1.0, 0.0, 0.0]];
        let err = VectorStore::from_raw(catalog(2), raw).unwrap_err();
        assert!(matches!(
            err,
            CourseMatchError::DimensionMismatch { expected: 2, actual: 3 }
        ));
    }

    #[test]
    fn test_build_empty_embedding() {
        let err = VectorStore::build(catalog(1), |_| Ok(Vec::new())).unwrap_err();
        assert!(matches!(err, CourseMatchError::Embedding(_)));
    }

    #[test]
    fn test_build_propagates_embedder_failure() {
        let err = VectorStore::build(catalog(3), |text| {
            if text.starts_with("Program 1") {
                Err(CourseMatchError::embedding("model unavailable"))
            } else {
                Ok(vec![1.0])
            }
        })
        .unwrap_err();
        assert!(matches!(err, CourseMatchError::Embedding(_)));
    }

    #[test]
    fn test_build_rejects_non_positional_ids() {
        let items = vec![Item::new(0, "A", "x"), Item::new(5, "B", "y")];
        let err = VectorStore::from_raw(items, vec![vec![1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, CourseMatchError::InvalidInput(_)));
    }

    #[test]
    fn test_accessors_out_of_range() {
        let store = VectorStore::from_raw(catalog(2), vec![vec![1.0], vec![2.0]]).unwrap();

        assert_eq!(store.item_at(1).unwrap().title, "Program 1");
        assert!(matches!(
            store.item_at(2),
            Err(CourseMatchError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(matches!(
            store.vector_at(7),
            Err(CourseMatchError::IndexOutOfRange { index: 7, len: 2 })
        ));
    }
}
