//! Domain logic for the Tunecast backend.
//!
//! Pure types and seams with no HTTP or I/O concerns: the error
//! taxonomy, season resolution, the user store abstraction, and the
//! recommendation selector abstraction.

pub mod error;
pub mod recommend;
pub mod season;
pub mod user;
