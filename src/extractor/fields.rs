use std::collections::BTreeSet;

use tracing::trace;

use crate::error::{ExtractionError, Result};

fn str_field<'a>(listing: &'a serde_json::Value, key: &'static str) -> Result<&'a str> {
    listing
        .get(key)
        .ok_or_else(|| ExtractionError::malformed(format!("missing field: {key}")))?
        .as_str()
        .ok_or_else(|| ExtractionError::malformed(format!("field is not a string: {key}")))
}

fn array_field<'a>(
    listing: &'a serde_json::Value,
    key: &'static str,
) -> Result<&'a Vec<serde_json::Value>> {
    listing
        .get(key)
        .ok_or_else(|| ExtractionError::malformed(format!("missing field: {key}")))?
        .as_array()
        .ok_or_else(|| ExtractionError::malformed(format!("field is not an array: {key}")))
}

/// The listing title. Must be non-empty.
pub(crate) fn name(listing: &serde_json::Value) -> Result<String> {
    let name = str_field(listing, "name")?;
    if name.is_empty() {
        return Err(ExtractionError::field_parse("name", "empty listing name"));
    }
    Ok(name.to_string())
}

/// Scan the `space_interface` label/value pairs for the configured property
/// type label. No match is an explicit failure, never an unset value.
pub(crate) fn property_type(listing: &serde_json::Value, label: &str) -> Result<String> {
    let entries = array_field(listing, "space_interface")?;
    for (idx, entry) in entries.iter().enumerate() {
        let entry_label = entry.get("label").and_then(|v| v.as_str()).ok_or_else(|| {
            ExtractionError::malformed(format!("missing field: space_interface[{idx}].label"))
        })?;
        if entry_label == label {
            let value = entry.get("value").and_then(|v| v.as_str()).ok_or_else(|| {
                ExtractionError::malformed(format!("missing field: space_interface[{idx}].value"))
            })?;
            if value.is_empty() {
                return Err(ExtractionError::field_parse(
                    "type",
                    "empty property type value",
                ));
            }
            trace!(value, "matched property type entry");
            return Ok(value.to_string());
        }
    }
    Err(ExtractionError::PropertyTypeNotFound {
        label: label.to_string(),
    })
}

/// Collect the names of amenities flagged present. Set semantics: order does
/// not matter and duplicates collapse.
pub(crate) fn amenities(listing: &serde_json::Value) -> Result<BTreeSet<String>> {
    let entries = array_field(listing, "listing_amenities")?;
    let mut present = BTreeSet::new();
    for (idx, entry) in entries.iter().enumerate() {
        let amenity_name = entry.get("name").and_then(|v| v.as_str()).ok_or_else(|| {
            ExtractionError::malformed(format!("missing field: listing_amenities[{idx}].name"))
        })?;
        let is_present = entry
            .get("is_present")
            .and_then(serde_json::Value::as_bool)
            .ok_or_else(|| {
                ExtractionError::malformed(format!(
                    "missing field: listing_amenities[{idx}].is_present"
                ))
            })?;
        if is_present {
            present.insert(amenity_name.to_string());
        }
    }
    Ok(present)
}

/// Bedroom count arrives as a JSON number or a numeric string.
pub(crate) fn bedrooms(listing: &serde_json::Value) -> Result<u32> {
    let value = listing
        .get("bedrooms")
        .ok_or_else(|| ExtractionError::malformed("missing field: bedrooms"))?;
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                ExtractionError::field_parse("bedrooms", format!("not a non-negative integer: {n}"))
            }),
        serde_json::Value::String(s) => s.trim().parse::<u32>().map_err(|_| {
            ExtractionError::field_parse("bedrooms", format!("not an integer: {s:?}"))
        }),
        other => Err(ExtractionError::field_parse(
            "bedrooms",
            format!("unexpected value: {other}"),
        )),
    }
}

/// The bathroom count is the leading space-delimited token of the free-text
/// `bathroom_label` ("1 bathroom", "1.5 baths"). Fractional counts truncate.
pub(crate) fn bathrooms(listing: &serde_json::Value) -> Result<u32> {
    let label = str_field(listing, "bathroom_label")?;
    let token = label.split(' ').next().unwrap_or_default();
    let count: f64 = token.parse().map_err(|_| {
        ExtractionError::field_parse("bathrooms", format!("unparsable bathroom label: {label:?}"))
    })?;
    if !count.is_finite() || count < 0.0 {
        return Err(ExtractionError::field_parse(
            "bathrooms",
            format!("unparsable bathroom label: {label:?}"),
        ));
    }
    Ok(count as u32)
}
