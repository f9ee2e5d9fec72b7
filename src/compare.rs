use core::cmp::Ordering;

/// Three-way comparison used to order the keys of a [`WBTreeMap`](crate::WBTreeMap).
///
/// `compare` returns [`Ordering::Less`] if `self` sorts before `other`, [`Ordering::Equal`] if the
/// two are the same key, and [`Ordering::Greater`] if `self` sorts after `other`. The tree never
/// orders keys any other way, so two keys are "the same" exactly when `compare` returns `Equal`.
///
/// Every [`Ord`] type gets this for free. A key that needs a custom order implements [`Ord`].
///
/// It is a logic error for `compare` to not be a consistent strict total order. The tree stays
/// memory safe, but lookups and iteration order become unspecified.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use wbtree::Comparable;
///
/// assert_eq!(3.compare(&5), Ordering::Less);
/// assert_eq!("b".compare("a"), Ordering::Greater);
/// ```
pub trait Comparable {
    /// Compares `self` against `other`.
    fn compare(&self, other: &Self) -> Ordering;
}

impl<T: Ord + ?Sized> Comparable for T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}
