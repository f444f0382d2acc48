//! A fixed partition of integers in disjoint components that answers connectivity queries.
//!
//! The main struct of this crate is [`Partition<T>`] which holds a list of [`Component<T>`]s.
//! Every element is expected to be in at most one component.
//! You can check if two elements share a component with the `same_component` method
//! and look up the component of an element with the `find_component_of` method.
//!
//! Unlike a [disjoint-sets/union-find] structure there is no `union` method.
//! The components are known upfront and never change, queries are answered with
//! a plain linear scan over the components.
//! This is enough when the groups are given and only membership has to be checked,
//! for example the connected components of a graph that was already labeled.
//!
//! ```
//! # #[macro_use]
//! # extern crate connectivity;
//! #
//! # fn main() {
//! let partition = partition![[2, 3, 6, 7], [1, 4], [5, 8, 9]];
//!
//! assert!(partition.same_component(&2, &3));
//! assert!(!partition.same_component(&2, &9));
//! assert_eq!(partition.find_component_of(&1).map(|c| c.as_slice()), Some(&[1, 4][..]));
//! assert!(partition.find_component_of(&0).is_none());
//! # }
//! ```
//!
//! A partition of `n` singletons is made with [`Partition::with_len`]:
//!
//! ```
//! use connectivity::Partition;
//!
//! let partition = Partition::with_len(10).unwrap();
//!
//! assert_eq!(partition.len(), 10);
//! assert!(!partition.same_component(&0, &1));
//! assert!(Partition::with_len(-1).is_err());
//! ```
//!
//! The `rayon` feature adds parallel batch queries and parallel iterators.
//! The `proptest` feature adds `Arbitrary` implementations.
//! Both are enabled by default.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`Partition<T>`]: connectivity/partition/struct.Partition.html
//! [`Component<T>`]: connectivity/component/struct.Component.html
//! [`Partition::with_len`]: connectivity/partition/struct.Partition.html#method.with_len

extern crate bit_vec;
#[cfg(feature = "rayon")]
extern crate rayon;

/// We count the amount of expressions given to this macro.
#[doc(hidden)]
#[macro_export]
macro_rules! connectivity_count_expr {
    () => { 0usize };
    ($_single: expr) => { 1usize };
    // Even amount of expressions.
    ($($first: expr, $_second: expr),*) => {
        ($crate::connectivity_count_expr![$($first),*] << 1usize)
    };
    // Odd amount of expressions.
    ($_single: expr, $($first: expr, $_second: expr),*) => {
        ($crate::connectivity_count_expr![$($first),*] << 1usize) | 1
    };
}

/// A convenient macro to create a `BitVec` similar to `vec!`.
macro_rules! bit_vec {
    ($element: expr; $len: expr) => {
        bit_vec::BitVec::from_elem($len, $element)
    };
}

pub mod connectivity;
pub mod error;

pub use connectivity::{
    component::{contains_both, Component},
    partition::Partition,
};
pub use error::{Error, Result};

/// The element type used when a partition is built from a size.
pub type Element = i64;
