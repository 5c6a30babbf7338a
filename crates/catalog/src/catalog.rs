use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::product::Product;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, immutable product catalog.
///
/// Cloning is cheap (shared slice); order is the load order and doubles as the
/// final tie-break when ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Parse a JSON array of product records. Any malformed record fails the
    /// whole load.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Load the catalog, degrading to an empty one on any failure.
    ///
    /// An empty catalog turns every subsequent analysis into an `error` record
    /// instead of taking the process down.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), products = catalog.len(), "catalog loaded");
                catalog
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "catalog load failed; continuing with empty catalog");
                Self::empty()
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PRODUCTS: &str = r#"[
        {"name":"A","description":"epoxy","price_per_liter":10,"specs":{"viscosity":120,"salt_spray_hours":600}},
        {"name":"B","description":"primer","price_per_liter":8,"specs":{"viscosity":90,"salt_spray_hours":700}}
    ]"#;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rfpmatch-catalog-{}-{name}", std::process::id()))
    }

    #[test]
    fn from_json_preserves_order() {
        let catalog = Catalog::from_json_str(TWO_PRODUCTS).unwrap();
        let names: Vec<_> = catalog.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn from_json_rejects_missing_spec_field() {
        let err = Catalog::from_json_str(
            r#"[{"name":"A","description":"d","price_per_liter":1,"specs":{"viscosity":1}}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let path = temp_path("ok.json");
        std::fs::write(&path, TWO_PRODUCTS).unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Catalog::load(temp_path("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn load_or_empty_degrades_on_corrupt_file() {
        let path = temp_path("corrupt.json");
        std::fs::write(&path, "{ not json").unwrap();
        let catalog = Catalog::load_or_empty(&path);
        assert!(catalog.is_empty());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn load_or_empty_degrades_on_missing_file() {
        assert!(Catalog::load_or_empty(temp_path("nope.json")).is_empty());
    }

    #[test]
    fn bundled_sample_catalog_is_valid() {
        let catalog = Catalog::from_json_str(include_str!("../../../products.json")).unwrap();
        assert!(!catalog.is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: arbitrary input never panics the loader; it either parses
            /// or reports a parse error.
            #[test]
            fn from_json_never_panics(input in ".{0,200}") {
                match Catalog::from_json_str(&input) {
                    Ok(_) | Err(CatalogError::Parse(_)) => {}
                    Err(other) => prop_assert!(false, "unexpected error: {other}"),
                }
            }

            /// Property: a single invalid price poisons the whole load.
            #[test]
            fn negative_price_rejects_catalog(price in -10_000i32..0) {
                let json = format!(
                    r#"[{{"name":"A","description":"","price_per_liter":{price},"specs":{{"viscosity":1,"salt_spray_hours":1}}}}]"#
                );
                prop_assert!(Catalog::from_json_str(&json).is_err());
            }
        }
    }
}
