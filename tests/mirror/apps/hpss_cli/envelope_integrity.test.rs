// [tests/mirror/apps/hpss_cli/envelope_integrity.test.rs]
//! Certifies that the response envelope serializes cleanly and omits
//! the generated sets when the caller did not ask for them.

use hpss_cli_lib::ResponseEnvelope;
use hpss_core::{generate, InMemoryUniverse};

#[test]
fn feasible_envelope_omits_sets_unless_requested() {
    let universe = InMemoryUniverse::sequential(100_000);
    let verdict = hpss_core::feasibility(5, 10, 0.10, 100_000).unwrap();
    let sets = generate(5, 10, 0.10, &universe).unwrap();

    let without_sets = ResponseEnvelope::generated(
        "request-1".into(),
        0,
        10,
        5,
        verdict.clone(),
        sets.clone(),
        false,
    );
    let json = serde_json::to_value(&without_sets).unwrap();
    assert!(json.get("sets").is_none());
    assert!(json.get("max_jaccard_sampled").is_some());

    let with_sets = ResponseEnvelope::generated("request-2".into(), 0, 10, 5, verdict, sets, true);
    let json = serde_json::to_value(&with_sets).unwrap();
    assert!(json.get("sets").is_some());
}

#[test]
fn infeasible_envelope_has_no_sets_or_stats() {
    let verdict = hpss_core::feasibility(1_000, 100, 0.01, 100_000).unwrap();
    assert!(!verdict.feasible);
    let envelope = ResponseEnvelope::infeasible("request-3".into(), 0, 100, 1_000, verdict);
    let json = serde_json::to_value(&envelope).unwrap();
    assert!(json.get("sets").is_none());
    assert!(json.get("max_jaccard_sampled").is_none());
}
