//! Common test utilities for pestviz.

pub mod assertions;
