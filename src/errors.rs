// ABOUTME: Unified error handling for the FORC3 intelligence core
// ABOUTME: Validation-only error taxonomy; the core performs no I/O and owns no transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FORC3 Fitness

//! # Error Handling
//!
//! Every calculator in this crate is a total function over clamped numeric
//! inputs, so the error surface is deliberately small: structurally
//! malformed input (an empty set sequence, an empty plate inventory) and
//! non-finite scalars with no meaningful clamp are rejected. Out-of-range
//! finite scalars clamp to the nearest valid boundary and the computation
//! proceeds.
//!
//! Errors propagate synchronously to the calling API layer, which is
//! responsible for translating them into user-facing responses. The core
//! never retries and never swallows an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used by the intelligence core
///
/// The numeric ranges mirror the platform-wide validation block (3000-3999)
/// so API collaborators can map codes without translation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input was structurally invalid (e.g., empty sequence where data required)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A value fell outside its permitted range and no meaningful clamp
    /// exists for it (e.g., a NaN weight)
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
}

/// Error type for all intelligence calculations
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct IntelligenceError {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable description of what was wrong with the input
    pub message: String,
}

impl IntelligenceError {
    /// Create an invalid-input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidInput,
            message: message.into(),
        }
    }

    /// Create a value-out-of-range error
    #[must_use]
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValueOutOfRange,
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type IntelligenceResult<T> = Result<T, IntelligenceError>;
