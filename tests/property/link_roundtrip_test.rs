//! Property-based tests for the serialization codec.
//!
//! These tests verify that serializing any valid link or category
//! collection and deserializing it back reproduces an equal collection,
//! field for field.

use linkshelf::storage::codec;
use linkshelf::types::link::{Link, LinkIcon};
use proptest::prelude::*;

/// Strategy for generating valid URL strings.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

/// Strategy for generating non-empty display titles.
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,30}"
}

/// Strategy for generating category labels, including ones with mixed case.
fn arb_category() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,15}"
}

/// Strategy covering all three icon variants.
fn arb_icon() -> impl Strategy<Value = LinkIcon> {
    prop_oneof![
        "[A-Z]{1,3}".prop_map(LinkIcon::Initials),
        "[a-z0-9-]{1,16}".prop_map(LinkIcon::Gallery),
        arb_url().prop_map(LinkIcon::Url),
    ]
}

fn arb_link() -> impl Strategy<Value = Link> {
    (
        "[a-f0-9-]{8,36}",
        arb_title(),
        arb_url(),
        arb_category(),
        any::<bool>(),
        any::<i64>(),
        arb_icon(),
    )
        .prop_map(
            |(id, title, url, category, is_featured, created_at, icon)| Link {
                id,
                title,
                url,
                category,
                is_featured,
                created_at,
                icon,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Serialize-then-deserialize of any valid link collection reproduces
    // an equal collection.
    #[test]
    fn link_collection_round_trips(links in prop::collection::vec(arb_link(), 0..8)) {
        let encoded = codec::encode_links(&links).expect("encoding should succeed");
        let decoded = codec::decode_links(&encoded).expect("decoding should succeed");
        prop_assert_eq!(decoded, links);
    }

    // Same for category name collections.
    #[test]
    fn category_collection_round_trips(
        categories in prop::collection::vec(arb_category(), 0..10)
    ) {
        let encoded =
            codec::encode_categories(&categories).expect("encoding should succeed");
        let decoded = codec::decode_categories(&encoded).expect("decoding should succeed");
        prop_assert_eq!(decoded, categories);
    }
}
