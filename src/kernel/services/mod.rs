//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the app (kernel-facing).
//! - `adapters`: filesystem-specific implementations (IO).

pub mod adapters;
pub mod ports;
