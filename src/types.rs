//! Common types used throughout rowstream
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// One decoded record: the ordered field values of a single delimited line.
///
/// Records carry whatever number of fields the input line had; no arity is
/// imposed or validated across records.
pub type Record = Vec<String>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Decode Summary
// ============================================================================

/// Counters describing one completed decode run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeSummary {
    /// Number of records emitted
    pub records: u64,
    /// Total number of fields emitted across all records
    pub fields: u64,
    /// Wall-clock time spent decoding, in milliseconds
    pub elapsed_ms: u64,
}

impl DecodeSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one emitted record
    pub fn add_record(&mut self, field_count: usize) {
        self.records += 1;
        self.fields += field_count as u64;
    }
}
