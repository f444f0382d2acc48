//! A single group of elements inside a partition.
//!
//! See [`Component<T>`] for more information.
//!
//! [`Component<T>`]: struct.Component.html

use {
    std::{
        ops,
        fmt,
        iter::FromIterator,
    },
    crate::Element,
};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Returns `true` if both `first` and `second` occur in `elements`.
///
/// The slice is scanned once and a flag is kept for each value.
/// When `first == second` a single occurrence sets both flags.
/// This is a naive `O(n)` scan without any hashing or sorting.
///
/// # Examples
///
/// ```
/// use connectivity::contains_both;
///
/// assert!(contains_both(&[2, 3, 6, 7], &2, &3));
/// assert!(contains_both(&[2, 3, 6, 7], &6, &6));
/// assert!(!contains_both(&[1, 2, 3, 4, 5, 7], &2, &9));
/// assert!(!contains_both(&[], &0, &0));
/// ```
pub fn contains_both<T>(elements: &[T], first: &T, second: &T) -> bool where T: PartialEq {
    let mut first_seen = false;
    let mut second_seen = false;

    for element in elements {
        if element == first {
            first_seen = true;
        }
        if element == second {
            second_seen = true;
        }
    }

    first_seen && second_seen
}

/// An ordered group of elements.
///
/// The elements keep the order in which they were given.
/// A `Component` does not check that its elements are unique, this is left to the caller.
/// After construction the elements can only be read, a `Component` dereferences to a slice.
///
/// # Examples
///
/// ```
/// # #[macro_use]
/// # extern crate connectivity;
/// #
/// # fn main() {
/// let component = component![2, 3, 6, 7];
///
/// assert!(component.contains_both(&2, &7));
/// assert!(!component.contains_both(&2, &9));
/// assert_eq!(component[1], 3);
/// assert_eq!(component.len(), 4);
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Component<T = Element> {
    data: Vec<T>,
}

/// Creates a [`Component`] containing the arguments in the given order.
///
/// ```
/// # #[macro_use]
/// # extern crate connectivity;
/// #
/// # fn main() {
/// let component = component![1, 4];
///
/// assert_eq!(component.as_slice(), &[1, 4]);
/// # }
/// ```
///
/// [`Component`]: connectivity/component/struct.Component.html
#[macro_export]
macro_rules! component {
    ($($elem: expr),*) => {
        $crate::Component::from(vec![$($elem),*])
    };
    ($($elem: expr,)*) => {
        $crate::component![$($elem),*]
    };
}

impl<T> Component<T> {
    /// Constructs a new, empty `Component<T>`.
    ///
    /// An empty component never answers `true` to a query.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
        }
    }

    /// Returns `true` if both `first` and `second` are elements of this component.
    ///
    /// This is one pass over the elements.
    /// Asking for the same value twice is the same as asking whether it is present.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate connectivity;
    /// #
    /// # fn main() {
    /// let component = component![1, 4, 5];
    ///
    /// assert!(component.contains_both(&1, &4));
    /// assert!(component.contains_both(&4, &1));
    /// assert!(component.contains_both(&5, &5));
    /// assert!(!component.contains_both(&1, &2));
    /// # }
    /// ```
    #[inline]
    pub fn contains_both(&self, first: &T, second: &T) -> bool where T: PartialEq {
        contains_both(&self.data, first, second)
    }

    /// Extracts a slice containing the entire component.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Converts the component back into the elements it was made of.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Default for Component<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Component<T> where T: fmt::Debug {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_set().entries(self.data.iter()).finish()
    }
}

impl<T> ops::Deref for Component<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> AsRef<[T]> for Component<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> From<Vec<T>> for Component<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            data,
        }
    }
}

impl<'a, T> From<&'a [T]> for Component<T> where T: Clone {
    fn from(slice: &'a [T]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }
}

impl<T> FromIterator<T> for Component<T> {
    fn from_iter<I>(iter: I) -> Self where I: IntoIterator<Item = T> {
        Self {
            data: Vec::from_iter(iter),
        }
    }
}

impl<T> IntoIterator for Component<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> std::vec::IntoIter<T> {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Component<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Component<T> where
    T: Arbitrary + 'static,
    T::Strategy: 'static,
{
    type Parameters = (proptest::collection::SizeRange, T::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        Vec::<T>::arbitrary_with(params).prop_map(Self::from).boxed()
    }
}
