//! Test utilities and mock implementations for prompt testing
//!
//! Provides a scripted runner so prompt operations can be exercised without
//! a `gum` binary or a terminal.

pub mod mocks;

pub use mocks::MockRunner;
