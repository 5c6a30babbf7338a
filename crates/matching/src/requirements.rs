use serde::{Serialize, Serializer};

use rfpmatch_catalog::ProductSpec;
use rfpmatch_core::ValueObject;

/// A numeric requirement field the engine knows how to extract and score.
///
/// `ALL` fixes the evaluation order, which is also the order of reason entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequirementField {
    Viscosity,
    SaltSprayHours,
}

impl RequirementField {
    pub const ALL: [RequirementField; 2] = [Self::Viscosity, Self::SaltSprayHours];

    /// Stable key (config sections, logs).
    pub fn key(self) -> &'static str {
        match self {
            Self::Viscosity => "viscosity",
            Self::SaltSprayHours => "salt_spray_hours",
        }
    }

    /// Human label used in reason messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Viscosity => "Viscosity",
            Self::SaltSprayHours => "Salt Spray",
        }
    }

    pub fn spec_value(self, spec: &ProductSpec) -> f64 {
        match self {
            Self::Viscosity => spec.viscosity,
            Self::SaltSprayHours => spec.salt_spray_hours,
        }
    }
}

/// Requirements extracted from one document.
///
/// `None` means the document states no requirement for the field. On the wire
/// and in logs an absent field is rendered as `0`, and a stated `0` is read as
/// absent, since "at least zero" constrains nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequirementSet {
    viscosity: Option<u64>,
    salt_spray_hours: Option<u64>,
}

impl ValueObject for RequirementSet {}

impl RequirementSet {
    pub fn new(viscosity: Option<u64>, salt_spray_hours: Option<u64>) -> Self {
        Self {
            viscosity: viscosity.filter(|v| *v > 0),
            salt_spray_hours: salt_spray_hours.filter(|v| *v > 0),
        }
    }

    /// Build from the sentinel encoding (`0` = absent).
    pub fn from_sentinel(viscosity: u64, salt_spray_hours: u64) -> Self {
        Self::new(Some(viscosity), Some(salt_spray_hours))
    }

    pub fn get(&self, field: RequirementField) -> Option<u64> {
        match field {
            RequirementField::Viscosity => self.viscosity,
            RequirementField::SaltSprayHours => self.salt_spray_hours,
        }
    }

    pub(crate) fn set(&mut self, field: RequirementField, value: u64) {
        let value = Some(value).filter(|v| *v > 0);
        match field {
            RequirementField::Viscosity => self.viscosity = value,
            RequirementField::SaltSprayHours => self.salt_spray_hours = value,
        }
    }

    pub fn viscosity(&self) -> Option<u64> {
        self.viscosity
    }

    pub fn salt_spray_hours(&self) -> Option<u64> {
        self.salt_spray_hours
    }

    pub fn is_empty(&self) -> bool {
        RequirementField::ALL.iter().all(|f| self.get(*f).is_none())
    }

    /// Stated fields in evaluation order.
    pub fn stated(&self) -> impl Iterator<Item = (RequirementField, u64)> + '_ {
        RequirementField::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|v| (f, v)))
    }
}

impl Serialize for RequirementSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("RequirementSet", 2)?;
        s.serialize_field("viscosity", &self.viscosity.unwrap_or(0))?;
        s.serialize_field("salt_spray_hours", &self.salt_spray_hours.unwrap_or(0))?;
        s.end()
    }
}
