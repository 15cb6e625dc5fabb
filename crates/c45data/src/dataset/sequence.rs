//! Ordered, indexable collection capability.

use std::slice;

/// An ordered, indexable, iterable collection of `Item`.
///
/// Implemented by [`Schema`](super::Schema) (items are feature declarations),
/// [`Example`](super::Example) (items are values) and
/// [`ExampleSet`](super::ExampleSet) (items are examples). Implementors only
/// expose their backing slice; everything else is provided.
pub trait Sequence {
    type Item;

    /// The items in order.
    fn as_slice(&self) -> &[Self::Item];

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&Self::Item> {
        self.as_slice().get(index)
    }

    #[inline]
    fn iter(&self) -> slice::Iter<'_, Self::Item> {
        self.as_slice().iter()
    }

    #[inline]
    fn first(&self) -> Option<&Self::Item> {
        self.as_slice().first()
    }

    #[inline]
    fn last(&self) -> Option<&Self::Item> {
        self.as_slice().last()
    }
}

/// Implements `Index` (positions and ranges) and `IntoIterator for &T` for a
/// [`Sequence`] implementor.
macro_rules! sequence_impls {
    ($ty:ty, $item:ty) => {
        impl<I: ::std::slice::SliceIndex<[$item]>> ::std::ops::Index<I> for $ty {
            type Output = I::Output;

            #[inline]
            fn index(&self, index: I) -> &Self::Output {
                &$crate::dataset::Sequence::as_slice(self)[index]
            }
        }

        impl<'a> IntoIterator for &'a $ty {
            type Item = &'a $item;
            type IntoIter = ::std::slice::Iter<'a, $item>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                $crate::dataset::Sequence::iter(self)
            }
        }
    };
}

pub(crate) use sequence_impls;
