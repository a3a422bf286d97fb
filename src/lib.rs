//! 2D vector arithmetic primitive.
//!
//! This crate provides [`Vec2`], a plane vector over two `f64` coordinates,
//! together with the closed operation set geometry, physics, and graphics
//! code builds on: algebra, dot/perp products, the projection family,
//! refraction, rotation, interpolation, and tolerance-based equality.
//!
//! Every operation comes in a pure value-returning form; the hot-path
//! subset additionally has an in-place `_mut` form that mutates the
//! receiver and returns it for chaining. Both forms are numerically
//! identical.
//!
//! ## Failure policy
//!
//! There is no error type. Lenient construction degrades to the origin,
//! zero denominators propagate as IEEE-754 NaN/Infinity, and refraction
//! signals total internal reflection with `None`. See the individual
//! operations for details.

pub mod vec2;

pub use vec2::{Vec2, EPS};
