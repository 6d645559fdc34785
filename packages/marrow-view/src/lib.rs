//! The core skeleton-placeholder state for Marrow.
//!
//! This crate implements a headless [`SkeletonOverlay`]: a host-shaped
//! [`ViewTree`] whose bounds are written by the embedder's layout pass, a
//! [`BoneRegistry`] of placeholder descriptors bound to those views, and the
//! plumbing (layout-change listeners, one-shot layout hooks) that captures
//! bone geometry once layout has run. Painting lives in the separate
//! [marrow-paint](https://docs.rs/marrow-paint) crate, which turns an overlay
//! into drawing commands for any scene implementation.
//!
//! The overlay is designed to be embedded in and "driven" by external code:
//! the embedder creates views, assigns their bounds as its own layout system
//! computes them, and calls [`SkeletonOverlay::poll`] before painting.

mod bone;
mod config;
mod debug;
mod overlay;
mod registry;
mod traversal;
/// The view tree and its layout-change listeners.
mod tree;
/// The views themselves.
pub mod view;

pub use bone::Bone;
pub use config::OverlayConfig;
pub use overlay::SkeletonOverlay;
pub use registry::BoneRegistry;
pub use traversal::{AncestorTraverser, TreeTraverser};
pub use tree::{LayoutListenerId, ListenerOutcome, ViewTree};
pub use view::{View, ViewFlags};
