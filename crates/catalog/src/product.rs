use serde::{Deserialize, Serialize};

use rfpmatch_core::{DomainError, DomainResult, ValueObject};

/// Measured technical properties of a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    /// Viscosity (cP).
    pub viscosity: f64,
    /// Salt spray resistance (hours).
    pub salt_spray_hours: f64,
}

impl ValueObject for ProductSpec {}

impl ProductSpec {
    pub fn new(viscosity: f64, salt_spray_hours: f64) -> DomainResult<Self> {
        let spec = Self {
            viscosity,
            salt_spray_hours,
        };
        spec.validate()?;
        Ok(spec)
    }

    fn validate(&self) -> DomainResult<()> {
        ensure_measure("specs.viscosity", self.viscosity)?;
        ensure_measure("specs.salt_spray_hours", self.salt_spray_hours)
    }
}

/// Catalog record: a product that can be recommended.
///
/// Fields are private so every instance went through [`Product::new`] (or the
/// equivalent deserialization path) and carries a real price and real specs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    name: String,
    description: String,
    price_per_liter: f64,
    specs: ProductSpec,
}

/// Wire shape of a catalog entry, validated into a [`Product`].
#[derive(Debug, Deserialize)]
struct ProductRecord {
    name: String,
    description: String,
    price_per_liter: f64,
    specs: ProductSpec,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(r: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(r.name, r.description, r.price_per_liter, r.specs)
    }
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price_per_liter: f64,
        specs: ProductSpec,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        ensure_measure("price_per_liter", price_per_liter)?;
        specs.validate()?;

        Ok(Self {
            name,
            description: description.into(),
            price_per_liter,
            specs,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price_per_liter(&self) -> f64 {
        self.price_per_liter
    }

    pub fn specs(&self) -> &ProductSpec {
        &self.specs
    }
}

fn ensure_measure(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::validation(format!(
            "{field} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}
