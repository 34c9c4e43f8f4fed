//! PostgreSQL extended-type codecs
//!
//! Native Rust types for PostgreSQL's composite column types, with
//! conversion to and from the textual wire literal:
//!
//! - [`Range`] - `int4range`, `numrange`, `tstzrange`, ...
//! - [`Array`] - one-dimensional `{a,b,c}` arrays of any element kind
//! - [`Point`], [`Rect`], [`Path`], [`Polygon`], [`Circle`] - geometric types
//! - [`Inet`], [`Cidr`], [`MacAddr`] - network addresses
//! - [`BitString`] - `bit` / `varbit`
//! - [`Json`] - `json` / `jsonb`
//! - [`Money`] - `money`
//! - [`TsVector`], [`TsQuery`] - full text search
//! - [`Xml`] - `xml`
//! - [`HexBytes`] - `bytea` in hex format
//! - [`Uuid`] - `uuid`, through the `uuid` crate
//!
//! Element types plug in through [`FromLiteral`] and [`ToLiteral`].
//!
//! # Features
//!
//! - `tracing` - Emit a warning event when lossy array decoding skips an element
//! - `geo-types` - Conversions between the geometric types and `geo-types`
//! - `bit-vec` - Conversions between [`BitString`] and `bit_vec::BitVec`
//! - `serde` - `Serialize` / `Deserialize` for the codec types

mod array;
mod bits;
mod bytes;
mod error;
pub mod geometry;
mod json;
pub mod literal;
mod money;
mod network;
mod range;
mod scalar;
mod text_search;
mod xml;

pub use array::{Array, DecodeMode};
pub use bits::BitString;
pub use bytes::HexBytes;
pub use error::{CodecError, ParseError, Result};
pub use geometry::{Circle, Path, Point, Polygon, Rect};
pub use json::Json;
pub use money::Money;
pub use network::{Cidr, Inet, MacAddr};
pub use range::{DateRange, Int4Range, Int8Range, NumRange, Range, RangeElement, TsRange, TstzRange};
pub use scalar::{FromLiteral, PgType, ToLiteral, parse_bound};
pub use text_search::{TsQuery, TsVector};
pub use uuid::Uuid;
pub use xml::Xml;

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing as __tracing;

/// Emit a warn-level event for an array element dropped by lossy decoding.
#[cfg(feature = "tracing")]
#[doc(hidden)]
#[macro_export]
macro_rules! pgext_trace_skip {
    ($kind:expr, $token:expr, $error:expr) => {
        $crate::__tracing::warn!(
            kind = $kind,
            token = %$token,
            error = %$error,
            "pgext.array.skip"
        );
    };
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! pgext_trace_skip {
    ($kind:expr, $token:expr, $error:expr) => {};
}

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{
        Array, BitString, Cidr, Circle, DecodeMode, FromLiteral, HexBytes, Inet, Json, MacAddr,
        Money, ParseError, Path, PgType, Point, Polygon, Range, RangeElement, Rect, ToLiteral,
        TsQuery, TsVector, Uuid, Xml,
    };
}
