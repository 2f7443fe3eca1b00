use super::*;

mod availability_tests {
    use super::*;

    #[test]
    fn test_yes_scores_above_no_and_unknown() {
        assert!(Availability::Yes.score() > Availability::No.score());
        assert!(Availability::Yes.score() > Availability::Unknown.score());
    }

    #[test]
    fn test_no_and_unknown_score_equal() {
        assert_eq!(Availability::No.score(), Availability::Unknown.score());
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Availability::default(), Availability::Unknown);
    }
}

mod serde_tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "name": "Raspberry Pi 4 Model B 4GB",
            "price": "₹4,999",
            "availability": "Yes",
            "source": "Amazon",
            "image_url": "https://example.com/pi4.jpg",
            "link": "https://example.com/pi4"
        }"#;

        let listing: Listing = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(listing.name, "Raspberry Pi 4 Model B 4GB");
        assert_eq!(listing.price, "₹4,999");
        assert_eq!(listing.availability, Availability::Yes);
        assert_eq!(listing.source.as_deref(), Some("Amazon"));
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"name": "Pi 5 board", "price": "$60"}"#;

        let listing: Listing = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(listing.availability, Availability::Unknown);
        assert!(listing.source.is_none());
        assert!(listing.image_url.is_none());
        assert!(listing.link.is_none());
    }

    #[test]
    fn test_serialize_omits_absent_optionals() {
        let listing = Listing::new("Pi 5 board", "$60");
        let json = serde_json::to_string(&listing).expect("Should serialize");
        assert!(!json.contains("source"));
        assert!(!json.contains("image_url"));
        assert!(!json.contains("link"));
        assert!(json.contains("\"availability\":\"Unknown\""));
    }

    #[test]
    fn test_roundtrip_preserves_fields() {
        let mut listing = Listing::new("Arduino Uno R3", "$27.60");
        listing.availability = Availability::No;
        listing.link = Some("https://example.com/uno".to_string());

        let json = serde_json::to_string(&listing).expect("Should serialize");
        let back: Listing = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(back, listing);
    }
}

mod listing_tests {
    use super::*;

    #[test]
    fn test_embedding_text_concatenates_name_and_price() {
        let listing = Listing::new("Raspberry Pi 4", "₹4,999");
        assert_eq!(listing.embedding_text(), "Raspberry Pi 4 ₹4,999");
    }

    #[test]
    fn test_embedding_text_with_empty_price() {
        let listing = Listing::new("Raspberry Pi 4", "");
        assert_eq!(listing.embedding_text(), "Raspberry Pi 4 ");
    }
}
