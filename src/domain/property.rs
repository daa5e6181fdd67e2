use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Normalized record for one rental property, projected from the embedded
/// listing payload. Amenities use set semantics: deduplicated, and ordered
/// only for deterministic output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub amenities: BTreeSet<String>,
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) - {} bedrooms, {} bathrooms",
            self.name, self.property_type, self.bedrooms, self.bathrooms
        )?;
        if !self.amenities.is_empty() {
            let listed = self
                .amenities
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, " | Amenities: {listed}")?;
        }
        Ok(())
    }
}
