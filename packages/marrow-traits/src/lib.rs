//! Shared traits and types for the Marrow skeleton-placeholder crates.

mod geometry;
pub use geometry::IntRect;

pub mod shell;
pub use shell::{DummyShellProvider, ShellProvider};

mod viewport;
pub use viewport::{ColorScheme, Viewport};
