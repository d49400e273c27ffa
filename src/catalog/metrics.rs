//! Catalog operation metrics.
//!
//! Owned by the catalog so the service can record outcomes without knowing
//! about the HTTP layer. The server registers these in its registry.

use lazy_static::lazy_static;
use prometheus::{CounterVec, Gauge, Opts, Registry};

const PREFIX: &str = "playlist";

lazy_static! {
    pub static ref CATALOG_OPERATIONS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_catalog_operations_total"), "Catalog operations by outcome"),
        &["operation", "outcome"]
    ).expect("Failed to create catalog_operations_total metric");

    pub static ref CATALOG_SONGS_TOTAL: Gauge = Gauge::new(
        format!("{PREFIX}_catalog_songs_total"),
        "Total songs in catalog"
    ).expect("Failed to create catalog_songs_total metric");
}

/// Register the catalog metrics with `registry`. Registering twice is a no-op.
pub fn register(registry: &Registry) {
    let _ = registry.register(Box::new(CATALOG_OPERATIONS_TOTAL.clone()));
    let _ = registry.register(Box::new(CATALOG_SONGS_TOTAL.clone()));
}

/// Set the catalog size gauge
pub fn set_catalog_songs(count: u64) {
    CATALOG_SONGS_TOTAL.set(count as f64);
}

/// Record the outcome of a catalog operation
pub fn record_catalog_operation(operation: &str, outcome: &str) {
    CATALOG_OPERATIONS_TOTAL
        .with_label_values(&[operation, outcome])
        .inc();
}
