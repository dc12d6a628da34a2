//! This module holds typed parameters for various endpoint inputs.
//!
//! Query strings are validated and converted into typed values here, before any
//! of them reaches the `domain` layer.

pub(crate) mod topics;
