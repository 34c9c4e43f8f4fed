/// Generation-time settings attached to a [`Field`](super::Field).
///
/// Every builder is `const` so generated code can declare fields in
/// `const` and `static` items.
///
/// ```
/// use pgext_postgres::FieldOptions;
///
/// const OPTIONS: FieldOptions = FieldOptions::new()
///     .with_column_type("citext")
///     .with_json_tag("displayName")
///     .nullable();
///
/// assert_eq!(OPTIONS.column_type, Some("citext"));
/// assert!(OPTIONS.nullable);
/// assert_eq!(OPTIONS.codec, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FieldOptions {
    /// PostgreSQL type name overriding the one derived from the Rust type.
    pub column_type: Option<&'static str>,
    /// Key used when the row is serialized, if not the column name.
    pub json_tag: Option<&'static str>,
    pub nullable: bool,
    /// Name of a custom codec registered in a
    /// [`CodecConfig`](crate::values::CodecConfig).
    pub codec: Option<&'static str>,
}

impl FieldOptions {
    pub const fn new() -> Self {
        Self {
            column_type: None,
            json_tag: None,
            nullable: false,
            codec: None,
        }
    }

    pub const fn with_column_type(mut self, column_type: &'static str) -> Self {
        self.column_type = Some(column_type);
        self
    }

    pub const fn with_json_tag(mut self, json_tag: &'static str) -> Self {
        self.json_tag = Some(json_tag);
        self
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub const fn with_codec(mut self, codec: &'static str) -> Self {
        self.codec = Some(codec);
        self
    }
}
