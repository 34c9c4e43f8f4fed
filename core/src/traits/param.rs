/// A marker trait for types that can be used as SQL parameters.
///
/// This trait is used as a bound on the parameter type in SQL fragments.
/// Dialect crates implement it for their bound-value enum.
pub trait SQLParam: Clone + core::fmt::Debug {}
