//! Cover art fallback shared by albums and artists.
//!
//! An album shows the picture of its first track that has one, an artist shows the cover of its first album that
//! has one. Both are the same scan over an already sorted collection.

use std::sync::Arc;

use crate::track::Picture;

/// Anything that may carry a cover picture.
pub trait Cover {
    /// The cover of this item, or `None` if it has no usable picture.
    fn cover(&self) -> Option<&Arc<Picture>>;
}

/// The cover of the first item (in iteration order) that has one.
#[must_use]
pub fn first_cover<'a, T, I>(items: I) -> Option<Arc<Picture>>
where
    T: Cover + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().find_map(T::cover).cloned()
}
