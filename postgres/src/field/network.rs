use pgext_types::{Cidr, Inet};

use super::{Field, Network};
use crate::expr::{self, Expression};
use crate::values::PostgresValue;

macro_rules! network_ops {
    ($($ty:ty),*) => {
        $(
            impl Field<$ty> {
                /// `>>`: the column's network strictly contains `other`.
                pub fn contains<'a, N>(&self, other: N) -> Expression<'a>
                where
                    N: Network + Into<PostgresValue<'a>>,
                {
                    expr::inet_contains(self, Into::<PostgresValue<'a>>::into(other))
                }

                /// `>>=`
                pub fn contains_or_equals<'a, N>(&self, other: N) -> Expression<'a>
                where
                    N: Network + Into<PostgresValue<'a>>,
                {
                    expr::inet_contains_or_equals(self, Into::<PostgresValue<'a>>::into(other))
                }

                /// `<<`: the column's address is strictly inside `other`.
                pub fn contained_by<'a, N>(&self, other: N) -> Expression<'a>
                where
                    N: Network + Into<PostgresValue<'a>>,
                {
                    expr::inet_contained(self, Into::<PostgresValue<'a>>::into(other))
                }

                /// `<<=`
                pub fn contained_by_or_equals<'a, N>(&self, other: N) -> Expression<'a>
                where
                    N: Network + Into<PostgresValue<'a>>,
                {
                    expr::inet_contained_or_equals(self, Into::<PostgresValue<'a>>::into(other))
                }
            }
        )*
    };
}

network_ops!(Inet, Cidr);
