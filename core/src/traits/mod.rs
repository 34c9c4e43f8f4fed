mod param;
mod to_sql;

pub use param::SQLParam;
pub use to_sql::ToSQL;
