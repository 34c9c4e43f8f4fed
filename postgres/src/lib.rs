//! PostgreSQL binding for the pgext codecs and expression builder
//!
//! - [`values::PostgresValue`] - the bound-parameter type
//! - [`values::decode_text`] / [`CodecConfig`] - row scanning by type name
//! - [`Field`] - typed column references and their operator sets
//! - [`expr`] - PostgreSQL-only operators (`ILIKE`, `~`, `@>`, `&&`, `?|`, ...)
//!
//! # Features
//!
//! - `tracing` - Emit a debug event when decoding falls back to a custom codec

pub mod expr;
mod field;
pub mod values;

pub use expr::Expression;
pub use field::{Field, FieldOptions, Geometric, Network, Ordered, Textual, ValueFor};
pub use values::{CodecConfig, CustomCodec, KeyValue, PostgresValue, decode_text};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::expr::Expression;
    pub use crate::values::{CodecConfig, KeyValue, PostgresValue};
    pub use crate::{Field, FieldOptions};
}
