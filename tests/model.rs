//! Randomized operation sequences checked against `Vec` as a model.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

use simple_vec::SimpleVec;

fn check_invariants(v: &SimpleVec<u32>, model: &[u32]) {
    assert!(v.len() <= v.capacity());
    assert_eq!(v.len(), model.len());
    assert_eq!(v.is_empty(), model.is_empty());
    assert_eq!(v.as_slice(), model);
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(42)]
#[case(1234)]
fn random_operations_match_vec(#[case] seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut v = SimpleVec::<u32>::new();
    let mut model = Vec::<u32>::new();

    for _ in 0..2000 {
        match rng.gen_range(0..9) {
            0 | 1 => {
                let value = rng.gen();
                let old_cap = v.capacity();
                let full = v.len() == old_cap;
                v.push_back(value);
                model.push(value);
                if full {
                    assert_eq!(v.capacity(), (old_cap * 2).max(1));
                }
            }
            2 => {
                let index = rng.gen_range(0..=model.len() + 1);
                let value = rng.gen();
                match v.insert(index, value) {
                    Ok(inserted) => {
                        assert_eq!(*inserted, value);
                        model.insert(index, value);
                    }
                    Err(err) => {
                        assert!(index > model.len());
                        assert_eq!(err.into_value(), value);
                    }
                }
            }
            3 => {
                let index = rng.gen_range(0..=model.len());
                let pos = v.erase(index);
                if index < model.len() {
                    model.remove(index);
                    assert_eq!(pos, index);
                } else {
                    assert_eq!(pos, model.len());
                }
            }
            4 => {
                if !model.is_empty() {
                    v.pop_back();
                    model.pop();
                }
            }
            5 => {
                let new_len = rng.gen_range(0..model.len() + 8);
                v.resize(new_len);
                model.resize(new_len, 0);
            }
            6 => {
                let capacity = rng.gen_range(0..model.len() * 2 + 4);
                let old_cap = v.capacity();
                v.reserve(capacity);
                assert_eq!(v.capacity(), old_cap.max(capacity));
            }
            7 => {
                let index = rng.gen_range(0..model.len() + 2);
                match v.at(index) {
                    Ok(item) => assert_eq!(Some(item), model.get(index)),
                    Err(err) => {
                        assert!(index >= model.len());
                        assert_eq!(err.length(), model.len());
                    }
                }
            }
            _ => {
                let copy = v.clone();
                assert_eq!(copy, v);
                if rng.gen_bool(0.1) {
                    v.clear();
                    model.clear();
                }
            }
        }
        check_invariants(&v, &model);
    }

    let drained: Vec<u32> = v.into_iter().collect();
    assert_eq!(drained, model);
}
