use std::borrow::Cow;

use crate::traits::SQLParam;

/// A bound parameter value.
///
/// Placeholders are not stored: they are numbered `$1..$n` from left to
/// right when the fragment is rendered, so composing fragments never has to
/// renumber anything.
#[derive(Debug, Clone)]
pub struct Param<'a, V: SQLParam> {
    pub value: Cow<'a, V>,
}

impl<'a, V: SQLParam> Param<'a, V> {
    #[inline]
    pub fn new(value: impl Into<Cow<'a, V>>) -> Self {
        Self {
            value: value.into(),
        }
    }

    #[inline]
    pub const fn borrowed(value: &'a V) -> Self {
        Self {
            value: Cow::Borrowed(value),
        }
    }
}
