use bouquet_core::{run, BouquetError, ProcessorConfig, RunStats};
use pretty_assertions::assert_eq;

fn run_input(input: &str) -> (Result<RunStats, BouquetError>, String) {
    let mut out = Vec::new();
    let result = run(input.as_bytes(), &mut out, &ProcessorConfig::default());
    (result, String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn single_bouquet_completes_after_last_required_flower() {
    let (result, out) = run_input("AS3a2b10\n\naS\naS\naS\nbS\nbS\n");
    result.expect("run succeeds");
    assert_eq!(out, "AS3a2b\n");
}

#[test]
fn unknown_size_and_kind_is_silently_dropped() {
    let (result, out) = run_input("AS3a2b10\n\nzQ\n");
    let stats = result.expect("run succeeds");
    assert_eq!(out, "");
    assert_eq!(stats.discarded, 1);
}

#[test]
fn record_past_storage_ceiling_is_fatal() {
    let mut input = String::from("AS1a300\n\n");
    // the 257th record would complete AS if it were processed
    for _ in 0..256 {
        input.push_str("xS\n");
    }
    input.push_str("aS\n");

    let (result, out) = run_input(&input);
    let err = result.expect_err("storage overflow");
    assert!(err.is_storage_exhausted());
    assert_eq!(err.to_string(), "No more available space in storage");
    assert_eq!(out, "");
}

#[test]
fn exactly_full_storage_is_not_an_error() {
    let mut input = String::from("AS1a300\n\n");
    for _ in 0..255 {
        input.push_str("xS\n");
    }
    input.push_str("aS\n");

    let (result, out) = run_input(&input);
    assert_eq!(result.expect("run succeeds").arrivals, 256);
    assert_eq!(out, "AS1a255x\n");
}

#[test]
fn bouquets_complete_in_arrival_order_across_sizes() {
    let input = "\
AS1a1b5
AL2a3
BS1b2

aL
bS
aS
aL
bS
";
    let (result, out) = run_input(input);
    result.expect("run succeeds");
    assert_eq!(out, "AS1a1b\nAL2a\n");
}

#[test]
fn decorative_flowers_fill_shared_space_via_fallback() {
    // AS has 2 spare slots; BS has none. Decorative flowers land in AS only.
    let input = "BS1a1\nAS1a3\n\ncS\ncS\ncS\naS\naS\naS\n";
    let (result, out) = run_input(input);
    let stats = result.expect("run succeeds");

    assert_eq!(stats.placed_by_fallback, 2);
    assert_eq!(stats.discarded, 1);
    // the second 'aS' finds BS satisfied and is dropped while advancing
    assert_eq!(stats.stale_advances, 1);
    assert_eq!(out, "BS1a\nAS1a2c\n");
}

#[test]
fn specs_without_recipe_pairs_are_rejected() {
    let (result, out) = run_input("AS0\nAS3\n\naS\nbS\n");
    let stats = result.expect("run succeeds");

    assert_eq!(stats.malformed_specs, 2);
    assert_eq!(stats.discarded, 2);
    assert_eq!(out, "");
}

#[test]
fn malformed_arrivals_are_skipped_and_counted() {
    let (result, out) = run_input("AS1a1\n\nbogus\n\naS\n");
    let stats = result.expect("run succeeds");

    assert_eq!(stats.malformed_arrivals, 2);
    assert_eq!(stats.arrivals, 3);
    assert_eq!(out, "AS1a\n");
}

#[test]
fn undecodable_arrival_is_skipped_and_counted_toward_storage() {
    let mut out = Vec::new();
    let input: &[u8] = b"AS1a1b5\n\naS\n\xffS\nbS\n";
    let stats =
        run(input, &mut out, &ProcessorConfig::default()).expect("undecodable line is not fatal");

    assert_eq!(String::from_utf8(out).expect("utf8 output"), "AS1a1b\n");
    assert_eq!(stats.malformed_arrivals, 1);
    assert_eq!(stats.arrivals, 3);
}

#[test]
fn surrounding_whitespace_tolerated_on_spec_lines() {
    let (result, out) = run_input("AS3a2b10 \n\naS\naS\naS\nbS\nbS\n");
    assert_eq!(result.expect("run succeeds").malformed_specs, 0);
    assert_eq!(out, "AS3a2b\n");
}
