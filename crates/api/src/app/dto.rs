use serde::Serialize;

use rfpmatch_catalog::Product;

/// `GET /catalog` response body.
#[derive(Debug, Serialize)]
pub struct CatalogListing<'a> {
    pub count: usize,
    pub items: &'a [Product],
}

impl<'a> CatalogListing<'a> {
    pub fn new(items: &'a [Product]) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}
