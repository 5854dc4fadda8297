//! Property tests for the solver
//!
//! Denominations are drawn from small positive values and requests are
//! capped so each case stays fast.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use stamp_dispenser::{DenominationSet, StampDispenser};
use std::collections::HashMap;

const MAX_REQUEST: i64 = 600;

fn denominations(raw: &[u8]) -> Vec<i64> {
    raw.iter().map(|&value| i64::from(value % 60) + 1).collect()
}

fn request(raw: u16) -> i64 {
    i64::from(raw) % (MAX_REQUEST + 1)
}

/// Top-down memoized recursion used as an independent reference
fn reference_min(values: &[u64], total: u64, memo: &mut HashMap<u64, u64>) -> u64 {
    if total == 0 {
        return 0;
    }
    if let Some(&known) = memo.get(&total) {
        return known;
    }
    let best = values
        .iter()
        .filter(|&&value| value <= total)
        .map(|&value| reference_min(values, total - value, memo) + 1)
        .min()
        .expect("unit value always applies");
    memo.insert(total, best);
    best
}

#[quickcheck]
fn prop_result_within_bounds(raw: Vec<u8>, raw_request: u16) -> TestResult {
    if raw.is_empty() {
        return TestResult::discard();
    }
    let dispenser = StampDispenser::from_values(&denominations(&raw)).unwrap();
    let request = request(raw_request);
    let count = dispenser.min_units_for(request).unwrap();

    let request = request as u64;
    let largest = dispenser.denominations().largest();
    let lower = request.div_ceil(largest);
    TestResult::from_bool(count >= lower && count <= request)
}

#[quickcheck]
fn prop_matches_reference(raw: Vec<u8>, raw_request: u16) -> TestResult {
    if raw.is_empty() {
        return TestResult::discard();
    }
    let set = DenominationSet::new(&denominations(&raw)).unwrap();
    let request = request(raw_request);
    let expected = reference_min(set.values(), request as u64, &mut HashMap::new());
    TestResult::from_bool(stamp_dispenser::min_units_for(&set, request).unwrap() == expected)
}

#[quickcheck]
fn prop_repeated_calls_agree(raw: Vec<u8>, raw_request: u16) -> TestResult {
    if raw.is_empty() {
        return TestResult::discard();
    }
    let dispenser = StampDispenser::from_values(&denominations(&raw)).unwrap();
    let request = request(raw_request);
    let first = dispenser.min_units_for(request).unwrap();
    TestResult::from_bool((0..3).all(|_| dispenser.min_units_for(request).unwrap() == first))
}

#[quickcheck]
fn prop_superset_never_worse(raw: Vec<u8>, extra: u8, raw_request: u16) -> TestResult {
    if raw.is_empty() {
        return TestResult::discard();
    }
    let base = denominations(&raw);
    let mut wider = base.clone();
    wider.extend(denominations(&[extra]));

    let request = request(raw_request);
    let narrow_count = StampDispenser::from_values(&base).unwrap().min_units_for(request).unwrap();
    let wide_count = StampDispenser::from_values(&wider).unwrap().min_units_for(request).unwrap();
    TestResult::from_bool(wide_count <= narrow_count)
}

#[quickcheck]
fn prop_normalization_is_invisible(raw: Vec<u8>, raw_request: u16) -> TestResult {
    if raw.is_empty() {
        return TestResult::discard();
    }
    let values = denominations(&raw);

    let mut reversed = values.clone();
    reversed.reverse();

    let mut doubled = values.clone();
    doubled.extend(values.iter().copied());

    let mut with_unit = values.clone();
    with_unit.push(1);

    let canonical = DenominationSet::new(&values).unwrap();
    let all_equal = [reversed, doubled, with_unit]
        .iter()
        .all(|variant| DenominationSet::new(variant).unwrap() == canonical);

    let request = request(raw_request);
    let count = stamp_dispenser::min_units_for(&canonical, request).unwrap();
    let reversed_count = StampDispenser::from_values(&values.iter().rev().copied().collect::<Vec<_>>())
        .unwrap()
        .min_units_for(request)
        .unwrap();

    TestResult::from_bool(all_equal && count == reversed_count)
}

#[quickcheck]
fn prop_batch_matches_sequential(raw: Vec<u8>, raw_requests: Vec<u16>, workers: u8) -> TestResult {
    if raw.is_empty() {
        return TestResult::discard();
    }
    let dispenser = StampDispenser::from_values(&denominations(&raw))
        .unwrap()
        .with_worker_threads(usize::from(workers % 8));
    let requests: Vec<i64> = raw_requests.into_iter().map(request).collect();

    let sequential: Vec<u64> = requests
        .iter()
        .map(|&request| dispenser.min_units_for(request).unwrap())
        .collect();
    TestResult::from_bool(dispenser.min_units_for_each(&requests).unwrap() == sequential)
}

#[quickcheck]
fn prop_non_positive_values_rejected(raw: Vec<u8>, bad: i8) -> bool {
    let mut values = denominations(&raw);
    values.push(-i64::from(bad.unsigned_abs()));
    DenominationSet::new(&values).is_err()
}
