mod versioned_schema;

pub use versioned_schema::{
    open_schema, Column, SqlType, Table, VersionedSchema, BASE_DB_VERSION,
    DEFAULT_TIMESTAMP,
};
