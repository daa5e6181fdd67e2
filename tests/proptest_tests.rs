use std::collections::BTreeSet;

use proptest::prelude::*;

use pdp_extract::error::ExtractionError;
use pdp_extract::extractor::extract_property;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_amenity() -> impl Strategy<Value = (String, bool)> {
    ("[A-Za-z][A-Za-z ]{0,14}", any::<bool>())
}

fn arb_listing_page(
    name: String,
    bedrooms_json: String,
    bathroom_label: String,
    amenities: &[(String, bool)],
) -> String {
    let amenities_json = amenities
        .iter()
        .map(|(n, present)| format!(r#"{{"name":{},"is_present":{present}}}"#, json_str(n)))
        .collect::<Vec<_>>()
        .join(",");
    let listing = format!(
        r#"{{"name":{},"space_interface":[{{"label":"Property type:","value":"Apartment"}}],"listing_amenities":[{amenities_json}],"bedrooms":{bedrooms_json},"bathroom_label":{}}}"#,
        json_str(&name),
        json_str(&bathroom_label),
    );
    let payload = format!(
        r#"{{"bootstrapData":{{"reduxData":{{"marketplacePdp":{{"listingInfo":{{"listing":{listing}}}}}}}}}}}"#
    );
    format!(
        r#"<html><body><script type="application/json" data-hypernova-key="p3show_marketplacebundlejs"><!--{payload}--></script></body></html>"#
    )
}

fn json_str(s: &str) -> String {
    serde_json::to_string(s).unwrap()
}

// ---------------------------------------------------------------------------
// Amenity set properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_amenities_exactly_present_names(
        amenities in prop::collection::vec(arb_amenity(), 0..20),
    ) {
        let html = arb_listing_page(
            "Prop Test".into(),
            "1".into(),
            "1 bathroom".into(),
            &amenities,
        );
        let property = extract_property(&html).unwrap();

        let expected: BTreeSet<String> = amenities
            .iter()
            .filter(|(_, present)| *present)
            .map(|(name, _)| name.clone())
            .collect();
        prop_assert_eq!(property.amenities, expected);
    }
}

// ---------------------------------------------------------------------------
// Numeric coercion properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_bedrooms_string_and_number_agree(n in 0..100_u32) {
        let as_number = arb_listing_page(
            "Prop Test".into(),
            n.to_string(),
            "1 bathroom".into(),
            &[],
        );
        let as_string = arb_listing_page(
            "Prop Test".into(),
            format!("\"{n}\""),
            "1 bathroom".into(),
            &[],
        );
        let from_number = extract_property(&as_number).unwrap();
        let from_string = extract_property(&as_string).unwrap();
        prop_assert_eq!(from_number.bedrooms, n);
        prop_assert_eq!(from_string.bedrooms, n);
    }

    #[test]
    fn prop_bathrooms_leading_integer_token(
        n in 0..500_u32,
        word in "[a-z]{1,10}",
    ) {
        let html = arb_listing_page(
            "Prop Test".into(),
            "1".into(),
            format!("{n} {word}"),
            &[],
        );
        let property = extract_property(&html).unwrap();
        prop_assert_eq!(property.bathrooms, n);
    }

    #[test]
    fn prop_bathrooms_fractional_truncates(
        whole in 0..50_u32,
        frac in 1..10_u32,
    ) {
        let html = arb_listing_page(
            "Prop Test".into(),
            "1".into(),
            format!("{whole}.{frac} baths"),
            &[],
        );
        let property = extract_property(&html).unwrap();
        prop_assert_eq!(property.bathrooms, whole);
    }

    #[test]
    fn prop_alpha_bathroom_label_fails(word in "[a-z]{1,12}") {
        let html = arb_listing_page(
            "Prop Test".into(),
            "1".into(),
            format!("{word} bathroom"),
            &[],
        );
        let err = extract_property(&html).unwrap_err();
        prop_assert!(matches!(err, ExtractionError::FieldParse { .. }));
    }
}

// ---------------------------------------------------------------------------
// Payload location properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_unmarked_pages_fail_not_found(
        keys in prop::collection::vec("p3show_[a-z]{3,10}bundlejs", 0..5),
    ) {
        // Any number of decoy bootstrap blocks, none with the marketplace key.
        let blocks = keys
            .iter()
            .filter(|k| *k != "p3show_marketplacebundlejs")
            .map(|k| format!(
                r#"<script type="application/json" data-hypernova-key="{k}"><!--{{"x":1}}--></script>"#
            ))
            .collect::<Vec<_>>()
            .join("\n");
        let html = format!("<html><body>{blocks}</body></html>");
        let err = extract_property(&html).unwrap_err();
        prop_assert!(matches!(err, ExtractionError::PayloadNotFound { .. }));
    }

    #[test]
    fn prop_extraction_deterministic(
        name in "[A-Za-z][A-Za-z0-9 ]{0,24}",
        bedrooms in 0..20_u32,
        amenities in prop::collection::vec(arb_amenity(), 0..10),
    ) {
        let html = arb_listing_page(
            name,
            bedrooms.to_string(),
            "2 bathrooms".into(),
            &amenities,
        );
        let first = extract_property(&html).unwrap();
        let second = extract_property(&html).unwrap();
        prop_assert_eq!(first, second);
    }
}
