//! Overlay glyph builders.
//!
//! - `mobility`: mobility and towed-array line art under the frame
//! - `hqtfd`: echelon, affiliation modifier, task force, HQ staff,
//!   feint/dummy and leadership
//! - `engagement`: engagement bar
//! - `oci`: operational condition bar and slash
//! - `dom`: direction-of-movement arrow

pub mod dom;
pub mod engagement;
pub mod hqtfd;
pub mod mobility;
pub mod oci;
