use core::borrow::Borrow;
use core::ops::Index;

use super::LlrbSet;
use crate::Rank;

impl<T: Ord> LlrbSet<T> {
    /// Returns the element at position `rank` in sorted order.
    ///
    /// This is an order-statistic extension and is not part of the standard
    /// `BTreeSet` API.
    ///
    /// The rank is zero-based. Returns `None` if `rank` is out of bounds.
    ///
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let set = LlrbSet::from(["a", "c", "b"]);
    ///
    /// assert_eq!(set.get_by_rank(1), Some(&"b"));
    /// assert!(set.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.map.get_by_rank(rank).map(|(k, ())| k)
    }

    /// Returns the number of elements in the set that are strictly less than
    /// `value`.
    ///
    /// This is an order-statistic extension and is not part of the standard
    /// `BTreeSet` API.
    ///
    /// The function is total: `value` does not need to be present. For a
    /// present element the result is its zero-based position in sorted order,
    /// and for an absent one it is the position the element would occupy after
    /// insertion, which makes `rank` and [`get_by_rank`](Self::get_by_rank)
    /// inverses of each other over the elements in the set.
    ///
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let set = LlrbSet::from([10, 20]);
    ///
    /// assert_eq!(set.rank(&10), 0);
    /// assert_eq!(set.rank(&15), 1);
    /// assert_eq!(set.rank(&25), 2);
    /// ```
    #[must_use]
    pub fn rank<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.rank(value)
    }

    /// Returns the largest element less than or equal to `value`, or `None` if
    /// every element in the set is greater than `value`.
    ///
    /// This is an order-statistic extension and is not part of the standard
    /// `BTreeSet` API; with `BTreeSet` the same query is spelled
    /// `range(..=value).next_back()`.
    ///
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let set = LlrbSet::from([10, 20]);
    ///
    /// assert_eq!(set.floor(&15), Some(&10));
    /// assert_eq!(set.floor(&20), Some(&20));
    /// assert_eq!(set.floor(&5), None);
    /// ```
    #[must_use]
    pub fn floor<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.floor(value).map(|(k, ())| k)
    }

    /// Returns the smallest element greater than or equal to `value`, or `None`
    /// if every element in the set is less than `value`.
    ///
    /// This is an order-statistic extension and is not part of the standard
    /// `BTreeSet` API; with `BTreeSet` the same query is spelled
    /// `range(value..).next()`.
    ///
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let set = LlrbSet::from([10, 20]);
    ///
    /// assert_eq!(set.ceiling(&15), Some(&20));
    /// assert_eq!(set.ceiling(&10), Some(&10));
    /// assert_eq!(set.ceiling(&25), None);
    /// ```
    #[must_use]
    pub fn ceiling<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.ceiling(value).map(|(k, ())| k)
    }
}
/// Indexes into the set by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use llrb_tree::LlrbSet;
/// use llrb_tree::Rank;
///
/// let set = LlrbSet::from(["b", "a"]);
///
/// assert_eq!(set[Rank(0)], "a");
/// ```
impl<T: Ord> Index<Rank> for LlrbSet<T> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).expect("index out of bounds")
    }
}
