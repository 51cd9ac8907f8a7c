use std::fs;
use std::path::Path;

use benchlink_core::{DecodeOptions, Device, Reading, bytes_from_hex};

fn case_dir(dir: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(dir)
}

fn load_expected_reading(dir: &str) -> Reading {
    let expected_path = case_dir(dir).join("expected_reading.json");
    let expected_json = fs::read_to_string(&expected_path).expect("read expected_reading.json");
    serde_json::from_str(&expected_json).expect("parse expected reading")
}

fn run_golden(dir: &str) {
    let input = fs::read_to_string(case_dir(dir).join("input.hex")).expect("read input.hex");
    let frame = bytes_from_hex(&input).expect("input.hex is valid hex");
    let expected = load_expected_reading(dir);

    let actual = expected
        .device()
        .decode(&frame, &DecodeOptions::default())
        .expect("decode frame");

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
}

#[test]
fn golden_dm40_query() {
    run_golden("tests/golden/dm40_query");
}

#[test]
fn golden_dm40_kilo() {
    run_golden("tests/golden/dm40_kilo");
}

#[test]
fn golden_el15_query() {
    run_golden("tests/golden/el15_query");
}

#[test]
fn golden_el15_fan_tag() {
    let input = fs::read_to_string(case_dir("tests/golden/el15_query").join("input.hex"))
        .expect("read input.hex");
    let frame = bytes_from_hex(&input).expect("valid hex");
    let reading = benchlink_core::decode_load_frame(&frame).expect("decode frame");
    assert_eq!(reading.fan_state, 0x4);
    assert_eq!(reading.fan_state_tag(), "0x4");
}

#[test]
fn golden_inputs_carry_valid_checksums() {
    for dir in [
        "tests/golden/dm40_query",
        "tests/golden/dm40_kilo",
        "tests/golden/el15_query",
    ] {
        let input = fs::read_to_string(case_dir(dir).join("input.hex")).expect("read input.hex");
        let frame = bytes_from_hex(&input).expect("valid hex");
        assert!(benchlink_core::verify_frame(&frame), "{dir}");
    }
}

#[test]
fn wrong_decoder_on_short_frame_is_rejected() {
    let input = fs::read_to_string(case_dir("tests/golden/dm40_query").join("input.hex"))
        .expect("read input.hex");
    let frame = bytes_from_hex(&input).expect("valid hex");
    assert!(Device::Load.decode(&frame, &DecodeOptions::default()).is_err());
}
