//! Integration test: every element the vector constructs is dropped
//! exactly once, across every operation that creates, moves or destroys
//! elements.

use tessera::Vector;
use tessera_test_utils::probe::{self, ProbeStats};
use tessera_test_utils::Probe;

fn probes(values: &[i64]) -> Vector<Probe> {
    values.iter().map(|&v| Probe::new(v)).collect()
}

fn values(v: &Vector<Probe>) -> Vec<i64> {
    v.iter().map(Probe::value).collect()
}

#[test]
fn push_and_drop_balance() {
    probe::reset();
    {
        let mut v = Vector::new();
        for i in 0..100 {
            v.push(Probe::new(i));
        }
        assert_eq!(probe::stats().live(), 100);
    }
    let s = probe::stats();
    assert_eq!(s.created, 100);
    assert_eq!(s.drops, 100);
}

#[test]
fn growth_relocates_without_cloning_or_dropping() {
    probe::reset();
    let mut v = Vector::new();
    for i in 0..33 {
        v.push(Probe::new(i));
    }
    v.reserve(1000);
    let s = probe::stats();
    assert_eq!(s.clones, 0);
    assert_eq!(s.drops, 0);
    drop(v);
    assert_eq!(probe::stats().live(), 0);
}

#[test]
fn with_len_default_constructs_each_slot() {
    probe::reset();
    let v = Vector::<Probe>::with_len(7);
    assert_eq!(probe::stats().defaults, 7);
    assert_eq!(values(&v), vec![0; 7]);
    drop(v);
    assert_eq!(probe::stats().live(), 0);
}

#[test]
fn resize_up_constructs_only_the_new_slots() {
    let mut v = probes(&[1, 2]);
    probe::reset();
    v.resize(5);
    assert_eq!(
        probe::stats(),
        ProbeStats {
            defaults: 3,
            ..ProbeStats::default()
        }
    );
    assert_eq!(values(&v), [1, 2, 0, 0, 0]);
}

#[test]
fn resize_down_destroys_exactly_the_surplus() {
    let mut v = probes(&[1, 2, 3, 4, 5, 6]);
    probe::reset();
    v.resize(2);
    assert_eq!(probe::stats().drops, 4);
    assert_eq!(probe::stats().defaults, 0);
    assert_eq!(values(&v), [1, 2]);
}

#[test]
fn pop_back_and_erase_drop_one_each() {
    let mut v = probes(&[1, 2, 3, 4]);
    probe::reset();
    v.pop_back();
    assert_eq!(probe::stats().drops, 1);
    v.erase(0);
    assert_eq!(probe::stats().drops, 2);
    assert_eq!(values(&v), [2, 3]);
}

#[test]
fn insert_moves_without_cloning() {
    let mut v = probes(&[1, 2, 3]);
    probe::reset();
    v.insert(1, Probe::new(42));
    let s = probe::stats();
    assert_eq!(s.created, 1);
    assert_eq!(s.clones, 0);
    assert_eq!(s.drops, 0);
    assert_eq!(values(&v), [1, 42, 2, 3]);
}

#[test]
fn clone_copies_each_element_once() {
    let v = probes(&[1, 2, 3]);
    probe::reset();
    let copy = v.clone();
    assert_eq!(probe::stats().clones, 3);
    assert_eq!(copy, v);
}

#[test]
fn clone_from_reuse_assigns_overlap_and_clones_tail() {
    let src = probes(&[1, 2, 3, 4]);
    let mut dst = probes(&[9, 9]);
    dst.reserve(4);
    probe::reset();
    dst.clone_from(&src);
    let s = probe::stats();
    assert_eq!(s.assigns, 2);
    assert_eq!(s.clones, 2);
    assert_eq!(s.drops, 0);
    assert_eq!(dst.capacity(), 4);
    assert_eq!(values(&dst), [1, 2, 3, 4]);
}

#[test]
fn clone_from_reuse_assigns_overlap_and_drops_surplus() {
    let src = probes(&[1, 2]);
    let mut dst = probes(&[7, 8, 9, 10, 11]);
    probe::reset();
    dst.clone_from(&src);
    let s = probe::stats();
    assert_eq!(s.assigns, 2);
    assert_eq!(s.clones, 0);
    assert_eq!(s.drops, 3);
    assert_eq!(values(&dst), [1, 2]);
}

#[test]
fn clone_from_reallocating_clones_everything_and_drops_old() {
    let src = probes(&[1, 2, 3]);
    let mut dst = probes(&[5]);
    probe::reset();
    dst.clone_from(&src);
    let s = probe::stats();
    assert_eq!(s.assigns, 0);
    assert_eq!(s.clones, 3);
    assert_eq!(s.drops, 1);
}

#[test]
fn take_and_swap_touch_no_elements() {
    let mut a = probes(&[1, 2, 3]);
    let mut b = probes(&[4]);
    probe::reset();
    a.swap(&mut b);
    let c = a.take();
    assert_eq!(probe::stats(), ProbeStats::default());
    assert!(a.is_empty());
    assert_eq!(values(&c), [4]);
    assert_eq!(values(&b), [1, 2, 3]);
}

#[test]
fn assign_drops_previous_contents_immediately() {
    let mut a = probes(&[1, 2, 3]);
    probe::reset();
    a.assign(probes(&[9]));
    assert_eq!(probe::stats().drops, 3);
    assert_eq!(values(&a), [9]);
}

#[test]
fn into_iter_partial_consumption_drops_the_rest() {
    probe::reset();
    let v = probes(&[1, 2, 3, 4, 5]);
    let firsts: Vec<Probe> = v.into_iter().take(2).collect();
    assert_eq!(probe::stats().live(), 2);
    drop(firsts);
    assert_eq!(probe::stats().live(), 0);
}

#[test]
fn shrink_to_fit_and_clear_balance() {
    probe::reset();
    let mut v = probes(&[1, 2, 3]);
    v.reserve(50);
    v.shrink_to_fit();
    assert_eq!(probe::stats().drops, 0);
    v.clear();
    assert_eq!(probe::stats().live(), 0);
    assert_eq!(v.capacity(), 3);
}
