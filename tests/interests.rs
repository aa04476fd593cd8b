use content_rank::interests::{ratios_or_empty, InterestsCalculator, TagHistogram};

#[test]
fn single_tag_maps_to_one() {
    let calculator = InterestsCalculator::from_json(r#"{"tags":{"rust":1}}"#).unwrap();
    let ratios = calculator.ratios();

    assert_eq!(ratios.len(), 1);
    assert!((ratios["rust"] - 1.0).abs() < 1e-9);
}

#[test]
fn ratios_scale_against_the_maximum_count() {
    let calculator = InterestsCalculator::from_json(r#"{"tags":{"a":2,"b":1}}"#).unwrap();
    let ratios = calculator.ratios();

    assert!((ratios["a"] - 1.0).abs() < 1e-9);
    assert!((ratios["b"] - 0.5).abs() < 1e-9);
}

#[test]
fn tied_maxima_all_map_to_one() {
    let calculator = InterestsCalculator::from_json(r#"{"tags":{"a":3,"b":3,"c":1}}"#).unwrap();
    let ratios = calculator.ratios();

    assert!((ratios["a"] - 1.0).abs() < 1e-9);
    assert!((ratios["b"] - 1.0).abs() < 1e-9);
}

#[test]
fn empty_histogram_yields_empty_ratios() {
    let calculator = InterestsCalculator::from_json(r#"{"tags":{}}"#).unwrap();
    assert!(calculator.ratios().is_empty());
}

#[test]
fn observed_community_fixture() {
    let payload = r#"{"tags":{"mysql":144,"python":506,"php":1034,"c++":333}}"#;
    let calculator = InterestsCalculator::from_json(payload).unwrap();
    let ratios = calculator.ratios();

    assert!((ratios["php"] - 1.0).abs() < 1e-9);
    assert!((ratios["python"] - 0.48936170212766).abs() < 1e-9);
    assert!((ratios["mysql"] - 0.13926499032882).abs() < 1e-9);
    assert!((ratios["c++"] - 333.0 / 1034.0).abs() < 1e-9);
}

#[test]
fn malformed_payload_is_a_decode_error() {
    assert!(InterestsCalculator::from_json("{not json").is_err());
    assert!(InterestsCalculator::from_json(r#"{"tags":"nope"}"#).is_err());
}

#[test]
fn malformed_payload_degrades_to_empty_ratios() {
    let (ratio, decode_error) = ratios_or_empty("{not json");

    assert!(ratio.is_empty());
    assert!(decode_error.is_some());
}

#[test]
fn valid_payload_passes_through_without_decode_error() {
    let (ratio, decode_error) = ratios_or_empty(r#"{"tags":{"a":2,"b":1}}"#);

    assert!(decode_error.is_none());
    assert!((ratio["a"] - 1.0).abs() < 1e-9);
    assert!((ratio["b"] - 0.5).abs() < 1e-9);
}

#[test]
fn increment_creates_and_accumulates() {
    let mut histogram = TagHistogram::new();
    assert!(histogram.is_empty());

    histogram.increment("rust");
    histogram.increment("rust");
    histogram.increment("sql");

    assert_eq!(histogram.count("rust"), 2);
    assert_eq!(histogram.count("sql"), 1);
    assert_eq!(histogram.count("missing"), 0);
    assert_eq!(histogram.len(), 2);
}

#[test]
fn histogram_round_trips_through_json() {
    let mut histogram = TagHistogram::new();
    histogram.increment("rust");
    histogram.increment("rust");
    histogram.increment("sql");

    let json = histogram.to_json();
    let decoded = TagHistogram::from_json(&json).unwrap();

    assert_eq!(decoded, histogram);
    assert_eq!(decoded.count("rust"), 2);
}

#[test]
fn ratio_json_uses_the_ratio_envelope() {
    let calculator = InterestsCalculator::from_json(r#"{"tags":{"a":2,"b":1}}"#).unwrap();
    let json = calculator.to_json();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!((value["ratio"]["a"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert!((value["ratio"]["b"].as_f64().unwrap() - 0.5).abs() < 1e-9);
}
