mod integration;

use integration::fixtures::TWENTY_SENTENCES;
use integration::TestFixture;
use serde_json::Value;
use std::fs;

/// Test that --stats-out flag creates valid JSON file with correct structure
#[test]
fn test_stats_output_json_structure() {
    let fixture = TestFixture::new();
    let input = fixture.create_document("rust.txt", TWENTY_SENTENCES);
    let stats_file = fixture.root_path.join("run_stats.json");

    let output = fixture.run_cli([
        input.as_os_str(),
        std::ffi::OsStr::new("--stats-out"),
        stats_file.as_os_str(),
    ]);
    assert!(
        output.status.success(),
        "docsynth command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json_content = fs::read_to_string(&stats_file).expect("Failed to read stats file");
    let stats: Value = serde_json::from_str(&json_content).expect("Failed to parse JSON");

    assert!(stats.is_object(), "Stats should be a JSON object");
    let obj = stats.as_object().unwrap();
    for key in [
        "input",
        "output",
        "total_sentences",
        "target_sentences",
        "iterations",
        "converged",
        "elapsed_ms",
        "selected",
        "sentences",
    ] {
        assert!(obj.contains_key(key), "Missing {key} field");
    }

    assert_eq!(obj["total_sentences"].as_u64().unwrap(), 20);
    assert_eq!(obj["target_sentences"].as_u64().unwrap(), 6);
    assert!(obj["iterations"].as_u64().unwrap() >= 1);
    assert!(obj["output"].as_str().unwrap().ends_with("rust_summary.txt"));

    let selected = obj["selected"].as_array().expect("selected should be an array");
    assert_eq!(selected.len(), 6);
    let indices: Vec<u64> = selected.iter().map(|s| s["index"].as_u64().unwrap()).collect();
    assert!(indices.windows(2).all(|w| w[0] < w[1]), "{indices:?}");
    for entry in selected {
        assert!(entry["score"].as_f64().unwrap() > 0.0);
        assert!(!entry["text"].as_str().unwrap().is_empty());
    }

    let sentences = obj["sentences"].as_array().expect("sentences should be an array");
    assert_eq!(sentences.len(), 20);
    let first = sentences[0].as_object().unwrap();
    for key in ["token_count", "word_count", "has_named_entities", "root_verb", "is_section_header"] {
        assert!(first.contains_key(key), "Missing metadata field {key}");
    }
    assert_eq!(sentences[5]["is_section_header"], Value::Bool(true));
}

#[test]
fn test_no_stats_without_flag() {
    let fixture = TestFixture::new();
    let input = fixture.create_document("rust.txt", TWENTY_SENTENCES);

    let output = fixture.run_cli([input.as_os_str()]);
    assert!(output.status.success());
    assert!(!fixture.root_path.join("run_stats.json").exists());
}
