#![cfg(feature = "zeroize")]

use zeroize::Zeroize;

use simple_vec::{simple_vec, SimpleVec};

#[test]
fn zeroize_clears_and_wipes_buffer() {
    let mut v = simple_vec![0xAAu32, 0xBB, 0xCC];
    v.pop_back();
    v.zeroize();
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 3);
    for slot in v.spare_capacity_mut() {
        assert_eq!(unsafe { slot.assume_init() }, 0);
    }
}

#[test]
fn zeroize_drops_elements() {
    let mut v = simple_vec![String::from("secret"), String::from("value")];
    v.zeroize();
    assert!(v.is_empty());
    v.push_back(String::from("reuse"));
    assert_eq!(v, ["reuse"]);
}

#[test]
fn zeroize_empty() {
    let mut v = SimpleVec::<u64>::new();
    v.zeroize();
    assert_eq!(v.capacity(), 0);
}
