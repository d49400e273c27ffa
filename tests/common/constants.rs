//! Shared constants for end-to-end tests
//!
//! This module contains all constants used across the test suite.
//! When the seeded catalog changes, update only this file.

// ============================================================================
// Seeded Catalog
// ============================================================================

/// Artist of the two POP songs
pub const ARTIST_1_NAME: &str = "The Test Band";

/// Artist of the JAZZ and CLASSICAL songs
pub const ARTIST_2_NAME: &str = "Jazz Ensemble";

/// POP song by The Test Band, inserted first
pub const SONG_1_TITLE: &str = "Opening Track";

/// POP song by The Test Band
pub const SONG_2_TITLE: &str = "Middle Track";

/// JAZZ song by Jazz Ensemble
pub const SONG_3_TITLE: &str = "Smooth Jazz";

/// JAZZ song by Jazz Ensemble
pub const SONG_4_TITLE: &str = "Upbeat Jazz";

/// CLASSICAL song by Jazz Ensemble, inserted last
pub const SONG_5_TITLE: &str = "Night Sonata";

/// Number of songs in the seeded catalog
pub const SEEDED_SONGS_COUNT: u64 = 5;

/// An id no test ever creates
pub const MISSING_SONG_ID: i64 = 999999;

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
