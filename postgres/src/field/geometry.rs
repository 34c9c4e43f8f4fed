use pgext_core::SQL;
use pgext_core::expr as sql;
use pgext_types::{Circle, Path, Point, Polygon, Rect};

use super::{Field, Geometric};
use crate::expr::{self, Expression};
use crate::values::PostgresValue;

macro_rules! geometric_ops {
    ($($ty:ty),*) => {
        $(
            impl Field<$ty> {
                /// `"t"."c" <-> $1`, the distance to `other`.
                pub fn distance_to<'a, G>(&self, other: G) -> SQL<'a, PostgresValue<'a>>
                where
                    G: Geometric + Into<PostgresValue<'a>>,
                {
                    expr::distance(self, Into::<PostgresValue<'a>>::into(other))
                }

                /// `("t"."c" <-> $1) < $2`
                pub fn within_distance<'a, G>(&self, other: G, radius: f64) -> Expression<'a>
                where
                    G: Geometric + Into<PostgresValue<'a>>,
                {
                    sql::lt(
                        self.distance_to(other).parens(),
                        PostgresValue::DoublePrecision(radius),
                    )
                }

                /// `@>`: the column's shape contains `other`.
                pub fn contains<'a, G>(&self, other: G) -> Expression<'a>
                where
                    G: Geometric + Into<PostgresValue<'a>>,
                {
                    expr::geo_contains(self, Into::<PostgresValue<'a>>::into(other))
                }

                /// `<@`: the column's shape lies inside `other`.
                pub fn contained_by<'a, G>(&self, other: G) -> Expression<'a>
                where
                    G: Geometric + Into<PostgresValue<'a>>,
                {
                    expr::geo_contained(self, Into::<PostgresValue<'a>>::into(other))
                }

                /// `&&`
                pub fn overlaps<'a, G>(&self, other: G) -> Expression<'a>
                where
                    G: Geometric + Into<PostgresValue<'a>>,
                {
                    expr::geo_overlaps(self, Into::<PostgresValue<'a>>::into(other))
                }
            }
        )*
    };
}

geometric_ops!(Point, Rect, Path, Polygon, Circle);
