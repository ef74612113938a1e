//! rterm Hardware Abstraction Layer (HAL)
//!
//! Thin, platform-agnostic wrappers over the host facilities the
//! interpreter and server need but should not talk to directly:
//! process listing and termination, and host resource statistics.

pub mod error;
pub mod process;
pub mod stats;

pub use error::{HalError, HalResult, ProcessFailure};
pub use process::{list_processes, terminate, ProcessInfo};
pub use stats::{StatsProbe, SystemStats};
