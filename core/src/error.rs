// Copyright (c) 2024 The Botho Foundation

use thiserror::Error;

/// Validation failures that abort a draw attempt.
///
/// These are fatal to the draw that raised them: no partial pool or plan is
/// ever produced. A failed draw requires a fresh request from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The participant list is empty, or every multiplier is zero.
    #[error("participant list is empty or carries no weight")]
    EmptyInput,

    /// The viewport must be at least one pixel wide.
    #[error("viewport width must be positive, got {0}px")]
    InvalidViewport(i32),
}
