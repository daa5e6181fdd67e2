mod fields;
mod payload;

use tracing::debug;

use crate::config::types::ExtractConfig;
use crate::domain::property::Property;
use crate::error::Result;

/// Key path from the payload root down to the listing object.
const LISTING_PATH: [&str; 5] = [
    "bootstrapData",
    "reduxData",
    "marketplacePdp",
    "listingInfo",
    "listing",
];

/// Stateless extractor for listing pages. Every call is independent: the
/// page is parsed, the marked payload decoded, and a normalized [`Property`]
/// projected out, or a precise error returned. Never a partial record.
#[derive(Debug, Clone)]
pub struct ListingExtractor {
    config: ExtractConfig,
}

impl ListingExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    pub fn extract(&self, html: &str) -> Result<Property> {
        let raw = payload::find_payload(html, &self.config.marker_value)?;
        let document = payload::parse_payload(
            &raw,
            self.config.payload_prefix_len,
            self.config.payload_suffix_len,
        )?;
        let listing = payload::navigate(&document, &LISTING_PATH)?;

        let name = fields::name(listing)?;
        let property_type = fields::property_type(listing, &self.config.property_type_label)?;
        let bedrooms = fields::bedrooms(listing)?;
        let bathrooms = fields::bathrooms(listing)?;
        let amenities = fields::amenities(listing)?;

        debug!(
            name = %name,
            property_type = %property_type,
            bedrooms,
            bathrooms,
            amenity_count = amenities.len(),
            "extracted property record"
        );

        Ok(Property {
            name,
            property_type,
            bedrooms,
            bathrooms,
            amenities,
        })
    }
}

impl Default for ListingExtractor {
    fn default() -> Self {
        Self::new(ExtractConfig::default())
    }
}

/// Extract with the production page constants.
pub fn extract_property(html: &str) -> Result<Property> {
    ListingExtractor::default().extract(html)
}
