//! A growable, contiguous vector with explicit growth rules and both
//! checked and unchecked element access.
//!
//! ```
//! use simple_vec::{reserve, simple_vec, SimpleVec};
//!
//! let mut v = SimpleVec::<u32>::from(reserve(4));
//! v.push_back(1);
//! v.push_back(3);
//! v.insert(1, 2).unwrap();
//! assert_eq!(v, [1, 2, 3]);
//! assert!(v.at(3).is_err());
//! assert_eq!(v.erase(0), 0);
//! assert_eq!(v, simple_vec![2, 3]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod capacity;

pub(crate) mod error;

pub mod storage;

pub mod vec;

pub use self::{
    error::{InsertionError, OutOfRange, StorageError},
    storage::RawStorage,
    vec::{reserve, IntoIter, ReserveProxy, SimpleVec},
};
