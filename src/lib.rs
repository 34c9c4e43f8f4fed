//! # pgext
//!
//! Typed PostgreSQL extended-type codecs and a composable predicate builder.
//!
//! ## Quick Start
//!
//! ```rust
//! use pgext::prelude::*;
//!
//! const DURING: Field<Int4Range> = Field::new("bookings", "during");
//! const TAGS: Field<Array<String>> = Field::new("bookings", "tags");
//! const META: Field<Json> = Field::new("bookings", "meta");
//!
//! let cond = and([
//!     DURING.overlaps(Int4Range::closed_open(1, 5)),
//!     TAGS.has("vip") | META.key_eq("flags.priority", true),
//! ]);
//!
//! let (sql, params) = cond.into_parts();
//! assert_eq!(
//!     sql,
//!     r#"("bookings"."during" && $1 AND ($2 = ANY("bookings"."tags") OR CAST(json_extract_path_text("bookings"."meta"::json, $3, $4) AS boolean) = $5))"#
//! );
//! assert_eq!(params.len(), 5);
//!
//! // Scanning a value back
//! let range: Int4Range = "[1,5)".parse().unwrap();
//! assert!(range.contains(&4));
//! ```
//!
//! ## Crates
//!
//! | Module         | Crate            | Contents                                          |
//! |----------------|------------------|---------------------------------------------------|
//! | [`types`]      | `pgext-types`    | Range, array, geometric, network, bit, JSON codecs |
//! | [`core`]       | `pgext-core`     | SQL fragments and dialect-neutral predicates      |
//! | [`postgres`]   | `pgext-postgres` | Bound values, typed fields, PostgreSQL operators  |
//!
//! ## Features
//!
//! - `tracing` - Structured events from decoding and expression rendering
//! - `geo-types` - Conversions between the geometric types and `geo-types`
//! - `bit-vec` - Conversions between `BitString` and `bit_vec::BitVec`
//! - `serde` - `Serialize` / `Deserialize` for the codec types

// =============================================================================
// Root-level exports
// =============================================================================

/// Error types
pub mod error {
    pub use pgext_types::{CodecError, ParseError};
}

/// Result type for codec operations
pub use pgext_types::Result;

/// Value codecs for PostgreSQL's extended column types.
pub use pgext_types as types;

// =============================================================================
// Core module - shared functionality
// =============================================================================

/// SQL fragments and dialect-neutral expressions.
///
/// ```rust
/// use pgext::core::expr::{and, eq};
/// use pgext::postgres::{Field, PostgresValue};
///
/// let id: Field<i64> = Field::new("users", "id");
/// let expr = and([eq(id, PostgresValue::from(1i64)), id.is_not_null()]);
/// assert_eq!(expr.sql(), r#"("users"."id" = $1 AND "users"."id" IS NOT NULL)"#);
/// ```
pub mod core {
    /// Core SQL types for building queries
    pub use pgext_core::{Param, SQL, SQLChunk, Token};

    /// Conversion traits for SQL generation
    pub use pgext_core::{SQLParam, ToSQL};

    /// Comparison, logical, set, null and pattern builders.
    pub use pgext_core::expr;
}

// =============================================================================
// PostgreSQL module
// =============================================================================

/// PostgreSQL bound values, typed fields and operators.
pub mod postgres {
    pub use pgext_postgres::{
        CodecConfig, CustomCodec, Expression, Field, FieldOptions, Geometric, KeyValue, Network,
        Ordered, PostgresValue, Textual, ValueFor, decode_text,
    };

    // Sub-modules for advanced use
    pub use pgext_postgres::{expr, values};
}

/// Prelude module for commonly used types
pub mod prelude {
    pub use pgext_core::expr::{and, not, or};
    pub use pgext_core::{SQL, ToSQL};
    pub use pgext_postgres::prelude::*;
    pub use pgext_types::prelude::*;
    pub use pgext_types::{DateRange, Int4Range, Int8Range, NumRange, TsRange, TstzRange};
}
