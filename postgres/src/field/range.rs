use pgext_types::{Range, RangeElement};

use super::{Field, ValueFor};
use crate::expr::Expression;

impl<E: RangeElement> Field<Range<E>> {
    /// `@>` with a single element.
    pub fn contains<'a>(&self, value: impl ValueFor<'a, E>) -> Expression<'a> {
        self.operator("@>", value.into_value())
    }

    /// `@>` with another range.
    pub fn contains_range<'a>(&self, other: impl ValueFor<'a, Range<E>>) -> Expression<'a> {
        self.operator("@>", other.into_value())
    }

    pub fn contained_by<'a>(&self, other: impl ValueFor<'a, Range<E>>) -> Expression<'a> {
        self.operator("<@", other.into_value())
    }

    pub fn overlaps<'a>(&self, other: impl ValueFor<'a, Range<E>>) -> Expression<'a> {
        self.operator("&&", other.into_value())
    }

    /// `<<`
    pub fn strictly_left_of<'a>(&self, other: impl ValueFor<'a, Range<E>>) -> Expression<'a> {
        self.operator("<<", other.into_value())
    }

    /// `>>`
    pub fn strictly_right_of<'a>(&self, other: impl ValueFor<'a, Range<E>>) -> Expression<'a> {
        self.operator(">>", other.into_value())
    }

    /// `-|-`
    pub fn adjacent<'a>(&self, other: impl ValueFor<'a, Range<E>>) -> Expression<'a> {
        self.operator("-|-", other.into_value())
    }
}
