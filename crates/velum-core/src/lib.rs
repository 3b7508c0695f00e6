//! Velum Core Types and Definitions
//!
//! This crate provides the foundational drawing vocabulary for the Velum
//! layout engine. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Visual element definitions placed on canvases ([`draw`] module)
//!
//! Nothing in this crate knows about slides, themes, or documents; it only
//! describes individual visual elements and how they render to layered SVG.

pub mod color;
pub mod draw;
pub mod geometry;
