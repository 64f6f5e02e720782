use super::handle::Handle;

#[cfg(test)]
type RawSize = u16;
#[cfg(not(test))]
type RawSize = u32;

/// Cardinality of a subtree, stored on every node for order statistics.
///
/// Bounded by [`Handle::MAX`]: a subtree can never contain more nodes than
/// the arena can address, so the same width as a raw handle suffices.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Size(RawSize);

impl Size {
    pub(crate) const MAX: usize = Handle::MAX;
    pub(crate) const ONE: Self = Self::from_usize(1);

    #[inline]
    pub(crate) const fn from_usize(size: usize) -> Self {
        assert!(size <= Self::MAX, "`Size::from_usize()` - `size` > `Size::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        Self(size as RawSize)
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0 as usize
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // `Size` must stay as narrow as a raw handle.
    assert_eq_size!(Size, RawSize);

    #[test]
    #[should_panic(expected = "`Size::from_usize()` - `size` > `Size::MAX`!")]
    fn invalid_size() {
        let _ = Size::from_usize(Size::MAX + 1);
    }

    proptest! {
        #[test]
        fn size_round_trip(size in 0..=Size::MAX) {
            assert_eq!(Size::from_usize(size).to_usize(), size);
        }
    }
}
