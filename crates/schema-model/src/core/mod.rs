pub mod column;
pub mod sql_type;
pub mod table;
