//! A fixed collection of disjoint components.
//!
//! See [`Partition<T>`] for more information.
//!
//! [`Partition<T>`]: struct.Partition.html

use {
    std::{
        ops,
        fmt,
        convert::TryFrom,
        iter::FromIterator,
    },
    crate::{
        connectivity::component::Component,
        error::{self, Error},
        Element,
    },
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A collection of components where every element is in at most one component.
///
/// A `Partition` is built once, either from components given by the caller or with
/// [`with_len`] which puts every element of `0 .. n` in its own component.
/// After that it only answers queries.
///
/// The partition does not check that the components are disjoint.
/// If an element occurs in multiple components the queries look at the first
/// component that answers them.
///
/// This implementation has no `union` and no representative for each set.
/// Every query is a linear scan over the components in the order they were added.
///
/// # Examples
///
/// ```
/// # #[macro_use]
/// # extern crate connectivity;
/// #
/// # fn main() {
/// let partition = partition![[2, 3, 6, 7], [1, 4], [5, 8, 9]];
///
/// assert!(partition.same_component(&2, &3));
/// assert!(partition.same_component(&1, &4));
/// assert!(!partition.same_component(&2, &9));
///
/// assert_eq!(partition.find_component_of(&5).unwrap().as_slice(), &[5, 8, 9]);
/// assert!(partition.find_component_of(&0).is_none());
/// # }
/// ```
///
/// [`with_len`]: #method.with_len
#[derive(Clone, PartialEq, Eq)]
pub struct Partition<T = Element> {
    /// The components in the order they were added.
    components: Vec<Component<T>>,
    /// The flat list `0 .. n` when made by `with_len`, otherwise empty.
    /// This is not used to answer queries.
    elements: Vec<T>,
}

/// Creates a [`Partition`] from groups of elements.
///
/// Each group is written between brackets and becomes one component, in the given order.
///
/// ```
/// # #[macro_use]
/// # extern crate connectivity;
/// #
/// # fn main() {
/// let partition = partition![
///     [2, 3, 6, 7],
///     [1, 4],
///     [5, 8, 9],
/// ];
///
/// assert_eq!(partition.len(), 3);
/// assert_eq!(partition[1].as_slice(), &[1, 4]);
/// assert!(partition.same_component(&6, &7));
/// # }
/// ```
///
/// [`Partition`]: connectivity/partition/struct.Partition.html
#[macro_export]
macro_rules! partition {
    ($([$($elem: expr),* $(,)?]),*) => {
        {
            let len = $crate::connectivity_count_expr![$([$($elem),*]),*];
            let mut partition = $crate::Partition::with_capacity(len);

            $(
                partition.push($crate::component![$($elem),*]);
            )*

            partition
        }
    };
    ($([$($elem: expr),* $(,)?],)*) => {
        $crate::partition![$([$($elem),*]),*]
    };
}

impl<T> Partition<T> {
    /// Constructs a new, empty `Partition<T>`.
    ///
    /// Components can be added with `push` before the partition is queried.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate connectivity;
    /// #
    /// # fn main() {
    /// use connectivity::Partition;
    ///
    /// let mut partition = Partition::new();
    /// partition.push(component![1, 4]);
    ///
    /// assert!(partition.same_component(&4, &1));
    /// # }
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Constructs a new, empty `Partition<T>` with room for `capacity` components.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            components: Vec::with_capacity(capacity),
            elements: Vec::new(),
        }
    }

    /// Appends a whole component to the back of the partition.
    ///
    /// The caller is responsible for keeping the components disjoint.
    #[inline]
    pub fn push(&mut self, component: Component<T>) {
        self.components.push(component);
    }

    /// Returns the amount of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if there are no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the total amount of elements in all components.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate connectivity;
    /// #
    /// # fn main() {
    /// let partition = partition![[2, 3, 6, 7], [1, 4], [5, 8, 9]];
    ///
    /// assert_eq!(partition.amount_of_elements(), 9);
    /// # }
    /// ```
    pub fn amount_of_elements(&self) -> usize {
        self.components.iter().map(|component| component.len()).sum()
    }

    /// Returns the components as a slice.
    #[inline]
    pub fn components(&self) -> &[Component<T>] {
        &self.components
    }

    /// Returns an iterator over the components in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<Component<T>> {
        self.components.iter()
    }

    /// Returns the flat list of elements this partition was made with.
    ///
    /// This is `0 .. n` for a partition made by [`with_len`] and empty otherwise.
    /// It is independent of the components and only meant for checking the construction.
    ///
    /// [`with_len`]: #method.with_len
    #[inline]
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Returns the size this partition was made with by [`with_len`].
    ///
    /// This is `0` for partitions made from components.
    ///
    /// [`with_len`]: #method.with_len
    #[inline]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if `first` and `second` are in the same component.
    ///
    /// The components are checked in order with [`Component::contains_both`] and the
    /// first one containing both ends the search.
    /// This method will be executed in `O(n)` time where `n` is the amount of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate connectivity;
    /// #
    /// # fn main() {
    /// let partition = partition![[2, 3, 6, 7], [1, 4], [5, 8, 9]];
    ///
    /// assert!(partition.same_component(&2, &3));
    /// assert!(partition.same_component(&1, &4));
    /// assert!(partition.same_component(&9, &9));
    /// assert!(!partition.same_component(&2, &9));
    /// assert!(!partition.same_component(&0, &0));
    /// # }
    /// ```
    ///
    /// [`Component::contains_both`]: ../component/struct.Component.html#method.contains_both
    pub fn same_component(&self, first: &T, second: &T) -> bool where T: PartialEq {
        self.components.iter().any(|component| component.contains_both(first, second))
    }

    /// Returns `true` if `first` and `second` are not in the same component.
    ///
    /// This is also the case when one of them is in no component at all.
    #[inline]
    pub fn other_components(&self, first: &T, second: &T) -> bool where T: PartialEq {
        !self.same_component(first, second)
    }

    /// Returns the first component that contains `element`.
    ///
    /// Returns `None` if no component contains it.
    /// An empty component is never returned because it can not contain `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate connectivity;
    /// #
    /// # fn main() {
    /// let partition = partition![[2, 3, 6, 7], [1, 4], [5, 8, 9]];
    ///
    /// assert_eq!(partition.find_component_of(&1).unwrap().as_slice(), &[1, 4]);
    /// assert_eq!(partition.find_component_of(&2).unwrap().as_slice(), &[2, 3, 6, 7]);
    /// assert!(partition.find_component_of(&0).is_none());
    /// # }
    /// ```
    pub fn find_component_of(&self, element: &T) -> Option<&Component<T>> where T: PartialEq {
        self.components.iter().find(|component| component.iter().any(|e| e == element))
    }

    /// Returns the index of the first component that contains `element`.
    pub fn position_of(&self, element: &T) -> Option<usize> where T: PartialEq {
        self.components.iter().position(|component| component.iter().any(|e| e == element))
    }

    /// Returns `true` if any component contains `element`.
    #[inline]
    pub fn contains(&self, element: &T) -> bool where T: PartialEq {
        self.find_component_of(element).is_some()
    }

    /// Answers a batch of [`same_component`] queries in parallel.
    ///
    /// The answers are in the same order as `pairs`.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate connectivity;
    /// #
    /// # fn main() {
    /// let partition = partition![[2, 3, 6, 7], [1, 4], [5, 8, 9]];
    ///
    /// let answers = partition.par_same_component(&[(2, 3), (1, 4), (2, 9)]);
    ///
    /// assert_eq!(answers, vec![true, true, false]);
    /// # }
    /// ```
    ///
    /// [`same_component`]: #method.same_component
    #[cfg(feature = "rayon")]
    pub fn par_same_component(&self, pairs: &[(T, T)]) -> Vec<bool> where T: PartialEq + Sync {
        pairs
            .par_iter()
            .map(|(first, second)| self.same_component(first, second))
            .collect()
    }
}

impl Partition<Element> {
    /// Constructs a `Partition` of `len` singleton components.
    ///
    /// The component at index `i` contains only the element `i`.
    /// The flat list `0 .. len` is available through `elements`.
    /// A `len` of `0` gives an empty partition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeSize`] if `len` is negative and [`Error::SizeOverflow`]
    /// if that many elements can not be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use connectivity::{Error, Partition};
    ///
    /// let partition = Partition::with_len(4).unwrap();
    ///
    /// assert_eq!(partition.len(), 4);
    /// assert_eq!(partition.elements(), &[0, 1, 2, 3]);
    /// assert_eq!(partition[2].as_slice(), &[2]);
    ///
    /// assert_eq!(Partition::with_len(-3), Err(Error::NegativeSize(-3)));
    /// assert!(Partition::with_len(0).unwrap().is_empty());
    /// ```
    ///
    /// [`Error::NegativeSize`]: ../../error/enum.Error.html#variant.NegativeSize
    /// [`Error::SizeOverflow`]: ../../error/enum.Error.html#variant.SizeOverflow
    pub fn with_len(len: i64) -> error::Result<Self> {
        if len < 0 {
            tracing::warn!(size = len, "rejected partition with a negative size");
            return Err(Error::NegativeSize(len))
        }

        let capacity = usize::try_from(len).map_err(|_| Error::SizeOverflow(len))?;

        let mut elements: Vec<Element> = Vec::new();
        let mut components: Vec<Component> = Vec::new();

        if elements.try_reserve_exact(capacity).is_err()
            || components.try_reserve_exact(capacity).is_err()
        {
            tracing::warn!(size = len, "rejected partition that can not be allocated");
            return Err(Error::SizeOverflow(len))
        }

        for element in 0 .. len {
            elements.push(element);
            components.push(Component::from(vec![element]));
        }

        tracing::debug!(size = capacity, "built partition of singletons");

        Ok(Self {
            components,
            elements,
        })
    }

    /// Returns `true` if the components contain every element of `0 .. len` exactly once.
    ///
    /// This is a check for the caller, the queries never perform it.
    /// It returns `false` if an element is repeated or out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate connectivity;
    /// #
    /// # fn main() {
    /// use connectivity::Partition;
    ///
    /// assert!(Partition::with_len(6).unwrap().is_partition_of(6));
    /// assert!(partition![[0, 3], [2, 1]].is_partition_of(4));
    ///
    /// assert!(!partition![[0, 3], [3, 1]].is_partition_of(4));
    /// assert!(!partition![[0, 1], [4]].is_partition_of(4));
    /// # }
    /// ```
    pub fn is_partition_of(&self, len: usize) -> bool {
        let mut done = bit_vec![false; len];
        let mut count = 0;

        for component in &self.components {
            for &element in component {
                let index = match usize::try_from(element) {
                    Ok(index) if index < len => index,
                    _ => return false,
                };

                // We have seen this element before.
                if done.get(index) != Some(false) {
                    return false
                }

                done.set(index, true);
                count += 1;
            }
        }

        count == len
    }
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Partition<T> where T: fmt::Debug {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_list().entries(self.components.iter()).finish()
    }
}

impl<T> ops::Index<usize> for Partition<T> {
    type Output = Component<T>;

    #[inline]
    fn index(&self, index: usize) -> &Component<T> {
        &self.components[index]
    }
}

impl<T> From<Vec<Component<T>>> for Partition<T> {
    fn from(components: Vec<Component<T>>) -> Self {
        Self {
            components,
            elements: Vec::new(),
        }
    }
}

impl<T> From<Vec<Vec<T>>> for Partition<T> {
    fn from(groups: Vec<Vec<T>>) -> Self {
        groups.into_iter().map(Component::from).collect()
    }
}

impl<T> FromIterator<Component<T>> for Partition<T> {
    fn from_iter<I>(iter: I) -> Self where I: IntoIterator<Item = Component<T>> {
        Self {
            components: Vec::from_iter(iter),
            elements: Vec::new(),
        }
    }
}

#[cfg(feature = "rayon")]
impl<T> FromParallelIterator<Component<T>> for Partition<T> where T: Send {
    fn from_par_iter<I>(par_iter: I) -> Self where I: IntoParallelIterator<Item = Component<T>> {
        Self {
            components: Vec::from_par_iter(par_iter),
            elements: Vec::new(),
        }
    }
}

impl<T> IntoIterator for Partition<T> {
    type Item = Component<T>;
    type IntoIter = std::vec::IntoIter<Component<T>>;

    fn into_iter(self) -> std::vec::IntoIter<Component<T>> {
        self.components.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Partition<T> {
    type Item = &'a Component<T>;
    type IntoIter = std::slice::Iter<'a, Component<T>>;

    fn into_iter(self) -> std::slice::Iter<'a, Component<T>> {
        self.components.iter()
    }
}

#[cfg(feature = "rayon")]
impl<'a, T> IntoParallelIterator for &'a Partition<T> where T: Sync {
    type Item = &'a Component<T>;
    type Iter = rayon::slice::Iter<'a, Component<T>>;

    fn into_par_iter(self) -> Self::Iter {
        self.components.par_iter()
    }
}

impl<T> Extend<Component<T>> for Partition<T> {
    fn extend<I>(&mut self, iter: I) where I: IntoIterator<Item = Component<T>> {
        self.components.extend(iter);
    }
}

#[cfg(feature = "rayon")]
impl<T> ParallelExtend<Component<T>> for Partition<T> where T: Send {
    fn par_extend<I>(&mut self, par_iter: I) where I: IntoParallelIterator<Item = Component<T>> {
        self.components.par_extend(par_iter);
    }
}

/// Generates disjoint partitions.
///
/// Each generated element gets a set number and elements with the same
/// set number end up in the same component.
/// Repeated elements are dropped so the components stay disjoint.
#[cfg(feature = "proptest")]
impl Arbitrary for Partition<Element> {
    type Parameters = proptest::collection::SizeRange;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(size_range: Self::Parameters) -> Self::Strategy {
        use std::collections::{hash_map, HashMap, HashSet};

        proptest::collection::vec(any::<(Element, usize)>(), size_range).prop_map(|vec| {
            let mut seen = HashSet::with_capacity(vec.len());
            // We map a `set_number` to the index of its group.
            let mut map = HashMap::<u32, usize>::with_capacity(vec.len());
            let mut groups: Vec<Vec<Element>> = Vec::new();

            for (element, set_number) in vec {
                if !seen.insert(element) {
                    continue
                }

                // Few distinct set numbers give larger components.
                let set_number = set_number.trailing_zeros();

                match map.entry(set_number) {
                    hash_map::Entry::Occupied(occupied) => {
                        groups[*occupied.get()].push(element);
                    },
                    hash_map::Entry::Vacant(vacant) => {
                        vacant.insert(groups.len());
                        groups.push(vec![element]);
                    },
                }
            }

            Self::from(groups)
        }).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Partition {
        partition![[2, 3, 6, 7], [1, 4], [5, 8, 9]]
    }

    #[test]
    fn same_component_queries() {
        let partition = example();

        assert!(partition.same_component(&2, &3));
        assert!(partition.same_component(&1, &4));
        assert!(!partition.same_component(&2, &9));
        assert!(partition.other_components(&2, &9));
    }

    #[test]
    fn find_component_of_queries() {
        let partition = example();

        assert_eq!(partition.find_component_of(&1), Some(&component![1, 4]));
        assert_eq!(partition.find_component_of(&2), Some(&component![2, 3, 6, 7]));
        assert_eq!(partition.find_component_of(&5), Some(&component![5, 8, 9]));
        assert_eq!(partition.find_component_of(&0), None);

        assert_eq!(partition.position_of(&8), Some(2));
        assert!(!partition.contains(&10));
    }

    #[test]
    fn empty_component_is_not_found() {
        let partition: Partition = partition![[], [1, 4]];

        assert_eq!(partition.find_component_of(&0), None);
        assert_eq!(partition.position_of(&4), Some(1));
    }

    #[test]
    fn first_component_wins_on_overlap() {
        let partition: Partition = partition![[1, 2], [2, 3]];

        assert_eq!(partition.position_of(&2), Some(0));
        assert!(partition.same_component(&2, &3));
        assert!(!partition.same_component(&1, &3));
    }

    #[test]
    fn negative_elements_can_be_queried() {
        let partition: Partition = partition![[-1, -5], [0]];

        assert!(partition.same_component(&-5, &-1));
        assert_eq!(partition.find_component_of(&-5), Some(&component![-1, -5]));
    }

    #[test]
    fn with_len_makes_singletons() {
        let partition = Partition::with_len(10).unwrap();

        assert_eq!(partition.len(), 10);
        assert_eq!(partition.size(), 10);
        assert_eq!(partition.elements(), &(0 .. 10).collect::<Vec<Element>>()[..]);

        for (i, component) in partition.iter().enumerate() {
            assert_eq!(component.as_slice(), &[i as Element]);
        }

        assert!(partition.is_partition_of(10));
        assert!(!partition.same_component(&0, &1));
        assert!(partition.same_component(&9, &9));
    }

    #[test]
    fn with_len_zero_is_empty() {
        let partition = Partition::with_len(0).unwrap();

        assert!(partition.is_empty());
        assert!(partition.elements().is_empty());
        assert!(partition.is_partition_of(0));
        assert_eq!(partition.find_component_of(&0), None);
    }

    #[test]
    fn with_len_rejects_negative() {
        assert_eq!(Partition::with_len(-1), Err(Error::NegativeSize(-1)));
        assert_eq!(
            Partition::with_len(-1).unwrap_err().to_string(),
            "partition size must be non-negative, got -1",
        );
    }

    #[test]
    fn with_len_rejects_sizes_that_can_not_be_allocated() {
        assert_eq!(Partition::with_len(i64::MAX), Err(Error::SizeOverflow(i64::MAX)));

        // One more than the largest amount of `i64`s a `Vec` can hold.
        let len = (isize::MAX as i64) / 8 + 1;
        assert_eq!(Partition::with_len(len), Err(Error::SizeOverflow(len)));
    }

    #[test]
    fn is_partition_of_rejects_gaps() {
        let partition: Partition = partition![[0, 2]];

        assert!(!partition.is_partition_of(3));
        assert!(!partition.is_partition_of(2));
    }

    #[test]
    fn built_from_groups() {
        let partition = Partition::from(vec![vec![2, 3, 6, 7], vec![1, 4], vec![5, 8, 9]]);

        assert_eq!(partition, example());
        assert_eq!(partition.amount_of_elements(), 9);
        assert_eq!(format!("{:?}", partition), "[{2, 3, 6, 7}, {1, 4}, {5, 8, 9}]");
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_collect_keeps_order() {
        let partition: Partition = (0 .. 100i64)
            .into_par_iter()
            .map(|i| component![2 * i, 2 * i + 1])
            .collect();

        assert_eq!(partition.len(), 100);
        assert!(partition.same_component(&10, &11));
        assert!(!partition.same_component(&11, &12));
        assert!(partition.is_partition_of(200));
    }

    #[cfg(feature = "proptest")]
    mod properties {
        use super::*;

        /// Every element together with the index of its component.
        fn labeled(partition: &Partition) -> Vec<(Element, usize)> {
            partition
                .iter()
                .enumerate()
                .flat_map(|(index, component)| component.iter().map(move |&e| (e, index)))
                .collect()
        }

        proptest! {
            #[test]
            fn same_component_iff_labels_match(
                partition in any::<Partition>().prop_filter("non-empty", |p| !p.is_empty()),
                first in any::<prop::sample::Index>(),
                second in any::<prop::sample::Index>()
            ) {
                let labeled = labeled(&partition);
                let (a, label_a) = labeled[first.index(labeled.len())];
                let (b, label_b) = labeled[second.index(labeled.len())];

                prop_assert_eq!(partition.same_component(&a, &b), label_a == label_b);
                prop_assert_eq!(partition.same_component(&b, &a), label_a == label_b);
            }

            #[test]
            fn find_component_of_is_the_labeled_component(
                partition in any::<Partition>(),
                element in any::<Element>()
            ) {
                let expected = labeled(&partition)
                    .into_iter()
                    .find(|&(e, _)| e == element)
                    .map(|(_, index)| &partition[index]);

                let found = partition.find_component_of(&element);

                prop_assert_eq!(found, expected);
                if let Some(component) = found {
                    prop_assert!(!component.is_empty());
                    prop_assert!(component.contains(&element));
                }
            }

            #[test]
            fn with_len_is_singletons(len in 0 .. 200i64) {
                let partition = Partition::with_len(len).unwrap();

                prop_assert_eq!(partition.len() as i64, len);
                prop_assert_eq!(partition.elements(), &(0 .. len).collect::<Vec<_>>()[..]);
                prop_assert!(partition.iter().enumerate().all(|(i, c)| c.as_slice() == &[i as Element][..]));
                prop_assert!(partition.is_partition_of(len as usize));
            }

            #[test]
            fn with_len_rejects_every_negative(len in i64::MIN .. 0) {
                prop_assert_eq!(Partition::with_len(len), Err(Error::NegativeSize(len)));
            }

            #[cfg(feature = "rayon")]
            #[test]
            fn parallel_queries_agree(
                partition in any::<Partition>(),
                pairs in proptest::collection::vec(any::<(Element, Element)>(), 0 .. 32)
            ) {
                let expected: Vec<bool> = pairs
                    .iter()
                    .map(|(a, b)| partition.same_component(a, b))
                    .collect();

                prop_assert_eq!(partition.par_same_component(&pairs), expected);
            }
        }
    }
}
