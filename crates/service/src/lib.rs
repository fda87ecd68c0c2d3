//! Mock appointment service client.
//!
//! The "backend" of the scheduling dashboard: an in-memory stub returning
//! canned data after artificial latency. Treated everywhere else as an
//! opaque async boundary with a fixed contract — views and the session
//! store call into [`api`] and never reach past it.

pub mod api;
pub mod data;
pub mod provider;
