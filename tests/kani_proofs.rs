#![cfg(kani)]
//! Kani proof harnesses for the condition and selection model.
//!
//! The model mirrors the semantics of condition evaluation and override
//! selection without strings, JSON values, or heap allocation:
//! - A condition is at most `MAX_GROUPS` groups of at most `MAX_TERMS`
//!   comparisons `value op threshold`, `op` encoded as 0..5.
//! - A group holds when every comparison holds; a condition holds when any
//!   group holds.
//! - Selection returns the index of the first rule whose condition holds.
//!
//! Run with: `cargo kani --tests --harness <harness_name>`

const MAX_GROUPS: usize = 3;
const MAX_TERMS: usize = 3;
const MAX_RULES: usize = 4;

/// Compare with one of 6 operators, encoded as `< > <= >= = !=`.
fn compare_op(value: i32, op: u8, threshold: i32) -> bool {
    match op {
        0 => value < threshold,
        1 => value > threshold,
        2 => value <= threshold,
        3 => value >= threshold,
        4 => value == threshold,
        _ => value != threshold,
    }
}

#[derive(Clone, Copy)]
struct ModelCondition {
    n_groups: usize,
    group_len: [usize; MAX_GROUPS],
    ops: [[u8; MAX_TERMS]; MAX_GROUPS],
    thresholds: [[i32; MAX_TERMS]; MAX_GROUPS],
}

fn any_condition() -> ModelCondition {
    let n_groups: usize = kani::any();
    kani::assume(n_groups >= 1 && n_groups <= MAX_GROUPS);
    let group_len: [usize; MAX_GROUPS] = kani::any();
    let ops: [[u8; MAX_TERMS]; MAX_GROUPS] = kani::any();
    let thresholds: [[i32; MAX_TERMS]; MAX_GROUPS] = kani::any();

    let mut g: usize = 0;
    while g < n_groups {
        kani::assume(group_len[g] >= 1 && group_len[g] <= MAX_TERMS);
        let mut t: usize = 0;
        while t < group_len[g] {
            kani::assume(ops[g][t] < 6);
            kani::assume(thresholds[g][t] >= 0);
            t += 1;
        }
        g += 1;
    }

    ModelCondition {
        n_groups,
        group_len,
        ops,
        thresholds,
    }
}

fn group_holds(c: &ModelCondition, g: usize, value: i32) -> bool {
    let mut t: usize = 0;
    while t < c.group_len[g] {
        if !compare_op(value, c.ops[g][t], c.thresholds[g][t]) {
            return false;
        }
        t += 1;
    }
    true
}

fn model_evaluate(c: &ModelCondition, value: i32) -> bool {
    let mut g: usize = 0;
    while g < c.n_groups {
        if group_holds(c, g, value) {
            return true;
        }
        g += 1;
    }
    false
}

fn model_select(rules: &[ModelCondition; MAX_RULES], n_rules: usize, value: i32) -> Option<usize> {
    let mut i: usize = 0;
    while i < n_rules {
        if model_evaluate(&rules[i], value) {
            return Some(i);
        }
        i += 1;
    }
    None
}

// ---------------------------------------------------------------------------
// Proof 1: Operator complements
//
// `<` and `>=`, `>` and `<=`, `=` and `!=` are exact complements.
// ---------------------------------------------------------------------------

#[kani::proof]
fn operator_complements() {
    let value: i32 = kani::any();
    let threshold: i32 = kani::any();
    assert!(compare_op(value, 0, threshold) != compare_op(value, 3, threshold));
    assert!(compare_op(value, 1, threshold) != compare_op(value, 2, threshold));
    assert!(compare_op(value, 4, threshold) != compare_op(value, 5, threshold));
}

// ---------------------------------------------------------------------------
// Proof 2: Panic freedom
//
// Evaluating any bounded condition never panics.
// ---------------------------------------------------------------------------

#[kani::proof]
#[kani::unwind(5)]
fn panic_freedom() {
    let condition = any_condition();
    let value: i32 = kani::any();
    let _ = model_evaluate(&condition, value);
}

// ---------------------------------------------------------------------------
// Proof 3: Group semantics
//
// If the condition holds, some group has every comparison true; if it does
// not, every group has at least one false comparison.
// ---------------------------------------------------------------------------

#[kani::proof]
#[kani::unwind(5)]
fn group_semantics() {
    let condition = any_condition();
    let value: i32 = kani::any();
    let g: usize = kani::any();
    kani::assume(g < condition.n_groups);

    if !model_evaluate(&condition, value) {
        assert!(!group_holds(&condition, g, value));
    }
    if group_holds(&condition, g, value) {
        assert!(model_evaluate(&condition, value));
    }
}

// ---------------------------------------------------------------------------
// Proof 4: First match wins
//
// The selected rule holds and no earlier rule does.
// ---------------------------------------------------------------------------

#[kani::proof]
#[kani::unwind(5)]
fn first_match_wins() {
    let n_rules: usize = kani::any();
    kani::assume(n_rules >= 1 && n_rules <= MAX_RULES);
    let rules = [any_condition(), any_condition(), any_condition(), any_condition()];
    let value: i32 = kani::any();

    match model_select(&rules, n_rules, value) {
        Some(winner) => {
            assert!(winner < n_rules);
            assert!(model_evaluate(&rules[winner], value));
            let earlier: usize = kani::any();
            kani::assume(earlier < winner);
            assert!(!model_evaluate(&rules[earlier], value));
        }
        None => {
            let any_rule: usize = kani::any();
            kani::assume(any_rule < n_rules);
            assert!(!model_evaluate(&rules[any_rule], value));
        }
    }
}
