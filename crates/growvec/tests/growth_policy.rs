//! Growth and capacity contract: doubling policy, reserve stability,
//! content-sized construction and copies.

use growvec::GrowVec;

#[test]
fn full_buffer_grows_to_twice_its_size() {
    // Capacity-2 buffer holding [10, 20]: pushing 30 grows to exactly 4.
    let mut vec = GrowVec::with_capacity(2);
    vec.push(10u64);
    vec.push(20);
    vec.push(30);
    assert_eq!(vec.len(), 3);
    assert_eq!(vec.capacity(), 4);
    assert_eq!(vec.as_slice(), &[10, 20, 30]);
}

#[test]
fn capacity_sequence_is_doubling() {
    let mut vec = GrowVec::new();
    let mut caps = Vec::new();
    for i in 0..64u64 {
        vec.push(i);
        assert!(vec.len() <= vec.capacity());
        caps.push(vec.capacity());
    }
    assert_eq!(caps[0], 1);
    for window in caps.windows(2) {
        assert!(window[1] == window[0] || window[1] == window[0] * 2);
    }
    assert_eq!(vec.capacity(), 64);
}

#[test]
fn reallocation_count_is_logarithmic() {
    // The old buffer is released only after the new one is live, so every
    // growth is observable as an address change.
    let mut vec = GrowVec::new();
    let mut reallocs = 0;
    let mut addr = vec.as_slice().as_ptr();
    for i in 0..1024u64 {
        vec.push(i);
        let now = vec.as_slice().as_ptr();
        if now != addr {
            reallocs += 1;
            addr = now;
        }
    }
    // Capacities 1, 2, 4, ..., 1024: eleven allocations for 1024 pushes.
    assert_eq!(reallocs, 11);
}

#[test]
fn insert_growth_follows_the_same_policy() {
    let mut vec = GrowVec::with_capacity(2);
    vec.push(1u64);
    vec.push(3);
    vec.insert(1, 2);
    assert_eq!(vec.capacity(), 4);
    assert_eq!(vec.as_slice(), &[1, 2, 3]);
}

#[test]
fn reserve_at_or_below_capacity_keeps_addresses_stable() {
    let mut vec = GrowVec::with_capacity(16);
    for i in 0..10u64 {
        vec.push(i);
    }
    let addr = vec.as_slice().as_ptr();
    vec.reserve(16);
    vec.reserve(3);
    assert_eq!(vec.capacity(), 16);
    assert_eq!(vec.as_slice().as_ptr(), addr);
}

#[test]
fn reserve_transfers_every_element_in_order() {
    let mut vec: GrowVec<u64> = (0..50).collect();
    vec.reserve(1000);
    assert_eq!(vec.capacity(), 1000);
    let expected: Vec<u64> = (0..50).collect();
    assert_eq!(vec.as_slice(), expected.as_slice());
}

#[test]
fn with_len_and_clone_size_capacity_to_content() {
    let vec = GrowVec::<u64>::with_len(7);
    assert_eq!(vec.capacity(), 7);

    let mut padded = GrowVec::with_capacity(64);
    padded.push(1u64);
    padded.push(2);
    let clone = padded.clone();
    assert_eq!(clone.capacity(), 2);
}

#[test]
fn moved_from_sequence_is_reusable_and_empty() {
    let mut vec = GrowVec::new();
    vec.push(1u64);
    vec.push(2);
    let moved = std::mem::take(&mut vec);
    assert_eq!(moved.as_slice(), &[1, 2]);
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 0);
    vec.push(9);
    assert_eq!(vec.as_slice(), &[9]);
}
