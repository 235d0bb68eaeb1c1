//! Instantaneous CPU, memory and root-disk utilisation.

use std::fmt;
use std::io;
use std::path::Path;

use sysinfo::{Disks, System, MINIMUM_CPU_UPDATE_INTERVAL};

use crate::error::Result;

/// One sample of host utilisation, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemMetrics {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
}

impl SystemMetrics {
    /// Sample the host now.
    ///
    /// CPU usage needs two refreshes, so this waits for sysinfo's minimum
    /// update interval between them.
    pub async fn sample() -> Result<Self> {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        tokio::time::sleep(MINIMUM_CPU_UPDATE_INTERVAL).await;
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let disks = Disks::new_with_refreshed_list();
        let root = disks
            .list()
            .iter()
            .find(|d| d.mount_point() == Path::new("/"))
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no filesystem mounted at /"))?;

        Ok(Self {
            cpu_percent: f64::from(sys.global_cpu_usage()),
            memory_percent: used_percent(sys.total_memory(), sys.available_memory())?,
            disk_percent: used_percent(root.total_space(), root.available_space())?,
        })
    }
}

impl fmt::Display for SystemMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "System Metrics:\nCPU: {:.1}%\nMemory: {:.1}%\nDisk: {:.1}%",
            self.cpu_percent, self.memory_percent, self.disk_percent
        )
    }
}

fn used_percent(total: u64, available: u64) -> Result<f64> {
    if total == 0 {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "reported total size is zero").into());
    }
    let used = total.saturating_sub(available);
    Ok(used as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_three_labelled_lines() {
        let metrics = SystemMetrics {
            cpu_percent: 12.345,
            memory_percent: 50.0,
            disk_percent: 99.96,
        };
        assert_eq!(
            metrics.to_string(),
            "System Metrics:\nCPU: 12.3%\nMemory: 50.0%\nDisk: 100.0%"
        );
    }

    #[test]
    fn used_percent_handles_edges() {
        assert_eq!(used_percent(200, 50).unwrap(), 75.0);
        assert_eq!(used_percent(100, 150).unwrap(), 0.0);
        assert!(used_percent(0, 0).is_err());
    }
}
