//! Host resource statistics.
//!
//! The probe keeps one `sysinfo::System` alive between samples so CPU
//! usage is computed from a real interval. Each metric degrades to zero on
//! its own; a sample never fails as a whole.

use parking_lot::Mutex;
use serde::Serialize;
use sysinfo::{CpuExt, NetworkExt, NetworksExt, System, SystemExt};

/// One reading of host CPU, memory and network counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct SystemStats {
    /// Global CPU usage in percent, one decimal.
    pub cpu: f32,
    /// Used memory in percent of total, one decimal.
    pub mem: f32,
    /// Cumulative bytes sent over all interfaces.
    pub net_up: u64,
    /// Cumulative bytes received over all interfaces.
    pub net_down: u64,
}

pub struct StatsProbe {
    system: Mutex<System>,
}

impl StatsProbe {
    pub fn new() -> Self {
        Self {
            system: Mutex::new(System::new()),
        }
    }

    /// Take a sample. Blocks for the minimum CPU update interval.
    pub fn sample(&self) -> SystemStats {
        if !System::IS_SUPPORTED {
            tracing::warn!("system statistics unsupported on this platform, reporting zeros");
            return SystemStats::default();
        }

        let mut sys = self.system.lock();

        sys.refresh_cpu();
        std::thread::sleep(System::MINIMUM_CPU_UPDATE_INTERVAL);
        sys.refresh_cpu();
        let cpu = round1(sys.global_cpu_info().cpu_usage());

        sys.refresh_memory();
        let mem = round1(percent(sys.used_memory(), sys.total_memory()));

        sys.refresh_networks_list();
        let (net_up, net_down) = sys
            .networks()
            .iter()
            .fold((0u64, 0u64), |(up, down), (_, data)| {
                (
                    up.saturating_add(data.total_transmitted()),
                    down.saturating_add(data.total_received()),
                )
            });

        SystemStats {
            cpu,
            mem,
            net_up,
            net_down,
        }
    }
}

impl Default for StatsProbe {
    fn default() -> Self {
        Self::new()
    }
}

fn percent(part: u64, total: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 * 100.0 / total as f64) as f32
}

/// Round to one decimal; non-finite readings collapse to zero.
fn round1(value: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 10.0).round() / 10.0
}
