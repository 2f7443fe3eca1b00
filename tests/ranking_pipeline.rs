//! End-to-end ranking pipeline tests against the stub encoder.

use std::sync::Arc;

use shelfrank::{EncoderConfig, Listing, Ranker, RankerConfig, TextEncoder, canonical_key};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn stub_ranker() -> Ranker {
    init_tracing();
    let encoder = TextEncoder::load(EncoderConfig::stub()).expect("Should load stub encoder");
    Ranker::new(Arc::new(encoder))
}

fn scraped_batch() -> Vec<Listing> {
    serde_json::from_str(
        r#"[
        {
            "name": "Raspberry Pi 4 Model B 4GB",
            "price": "₹4,999",
            "availability": "Yes",
            "source": "Amazon",
            "link": "https://example.com/pi4-modelb"
        },
        {
            "name": "Raspberry Pi 4 Silicone Case with Fan",
            "price": "₹399",
            "availability": "Yes",
            "source": "Robu"
        },
        {
            "name": "Raspberry Pi 4 B computer (Official)",
            "price": "₹5,299",
            "availability": "No",
            "source": "Robocraze"
        },
        {
            "name": "Raspberry Pi 4 Starter Kit",
            "price": "₹7,999",
            "availability": "Unknown",
            "source": "Amazon"
        },
        {
            "name": "Arduino Uno R3",
            "price": "$27.60",
            "source": "Amazon"
        },
        {
            "name": "HDMI Cable 1.5m",
            "price": "Price not found",
            "availability": "Yes",
            "source": "Robu"
        }
    ]"#,
    )
    .expect("Should deserialize scraper output")
}

#[test]
fn ranks_scraped_batch_end_to_end() {
    let ranker = stub_ranker();
    let input = scraped_batch();
    let input_len = input.len();

    let ranked = ranker.rank(input.clone(), "raspberry pi 4").expect("Should rank");

    assert!(!ranked.is_empty());
    assert!(ranked.len() <= input_len);
    for item in &ranked {
        assert!(input.contains(item), "ranked output must be a subset of the input");
    }
}

#[test]
fn no_two_survivors_share_a_canonical_key() {
    let ranker = stub_ranker();
    let stoplist = RankerConfig::default().stoplist;

    let ranked = ranker
        .rank(scraped_batch(), "raspberry pi 4")
        .expect("Should rank");

    let mut keys: Vec<String> = ranked
        .iter()
        .map(|l| canonical_key(&l.name, &stoplist))
        .collect();
    let before = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), before);
}

#[test]
fn board_outranks_cheaper_accessory() {
    let ranker = stub_ranker();

    let ranked = ranker
        .rank(scraped_batch(), "raspberry pi 4")
        .expect("Should rank");

    let board_pos = ranked
        .iter()
        .position(|l| l.name == "Raspberry Pi 4 Model B 4GB")
        .expect("board listing should survive dedup");
    let case_pos = ranked
        .iter()
        .position(|l| l.name.contains("Silicone Case"))
        .expect("case listing should survive dedup");

    assert!(
        board_pos < case_pos,
        "board must rank above the cheaper accessory"
    );
}

#[test]
fn repeated_runs_are_identical() {
    let ranker = stub_ranker();

    let first = ranker
        .rank(scraped_batch(), "raspberry pi 4")
        .expect("Should rank");
    let second = ranker
        .rank(scraped_batch(), "raspberry pi 4")
        .expect("Should rank");

    assert_eq!(first, second);
}

#[test]
fn empty_batch_produces_empty_result() {
    let ranker = stub_ranker();
    let ranked = ranker.rank(Vec::new(), "raspberry pi 4").expect("Should rank");
    assert!(ranked.is_empty());
}

#[test]
fn output_serializes_without_transient_scores() {
    let ranker = stub_ranker();

    let ranked = ranker
        .rank(scraped_batch(), "raspberry pi 4")
        .expect("Should rank");

    let json = serde_json::to_string(&ranked).expect("Should serialize");
    assert!(!json.contains("semantic_score"));
    assert!(!json.contains("price_score"));
    assert!(!json.contains("availability_score"));
    assert!(!json.contains("final_score"));
}

#[test]
fn concurrent_passes_share_one_encoder() {
    init_tracing();
    let encoder = Arc::new(TextEncoder::load(EncoderConfig::stub()).expect("Should load"));

    let handles: Vec<_> = ["raspberry pi 4", "arduino uno", "hdmi cable"]
        .into_iter()
        .map(|query| {
            let encoder = Arc::clone(&encoder);
            std::thread::spawn(move || {
                let ranker = Ranker::new(encoder);
                ranker.rank(scraped_batch(), query).expect("Should rank")
            })
        })
        .collect();

    for handle in handles {
        let ranked = handle.join().expect("pass should not panic");
        assert!(!ranked.is_empty());
    }
}
