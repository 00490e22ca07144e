use std::time::Duration;

use crate::format::{bytes_to_gib, percent};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemSnapshot {
    pub os_name: String,
    pub hostname: String,
    pub uptime: Duration,
    pub cpu_model: String,
}

/// Byte quantities are whole GiB.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySnapshot {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub cached: u64,
    pub buffers: u64,
    pub main_percent: f64,
    pub swap_percent: f64,
}

impl MemorySnapshot {
    /// Share of `total` in use, computed from the GiB figures shown on screen.
    pub fn used_percent(&self) -> f64 {
        percent(self.used as f64, self.total as f64)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuSnapshot {
    pub usage_percent: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadSnapshot {
    pub load1: f64,
    pub load5: f64,
    pub load15: f64,
}

/// Usage of one mounted filesystem, in bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionUsage {
    pub device: String,
    pub mount_point: String,
    pub total_bytes: u64,
    pub available_bytes: u64,
}

impl PartitionUsage {
    pub fn used_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.available_bytes)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootDisk {
    pub device: String,
    pub mount_point: String,
    pub free_gib: u64,
    pub total_gib: u64,
    pub used_gib: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskSnapshot {
    pub total_gib: u64,
    pub used_gib: u64,
    pub percent: f64,
    pub root: RootDisk,
}

impl DiskSnapshot {
    /// Sums every partition (bind mounts included) and picks out the one
    /// mounted at `/`.
    pub fn from_partitions(partitions: &[PartitionUsage]) -> Self {
        let mut snapshot = DiskSnapshot::default();

        for part in partitions {
            snapshot.total_gib += bytes_to_gib(part.total_bytes);
            snapshot.used_gib += bytes_to_gib(part.used_bytes());

            if part.mount_point == "/" {
                snapshot.root = RootDisk {
                    device: part.device.clone(),
                    mount_point: part.mount_point.clone(),
                    free_gib: bytes_to_gib(part.available_bytes),
                    total_gib: bytes_to_gib(part.total_bytes),
                    used_gib: bytes_to_gib(part.used_bytes()),
                    percent: percent(part.used_bytes() as f64, part.total_bytes as f64),
                };
            }
        }

        snapshot.percent = percent(snapshot.used_gib as f64, snapshot.total_gib as f64);
        snapshot
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetSnapshot {
    pub total_bytes_recv: u64,
    pub total_bytes_sent: u64,
    pub recent_bytes_recv_per_sec: u64,
    pub recent_bytes_sent_per_sec: u64,
}

pub const RECENT_CONTAINER_LIMIT: usize = 3;

/// One row of the daemon's container list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerEntry {
    pub name: String,
    pub state: String,
}

impl ContainerEntry {
    pub fn is_running(&self) -> bool {
        self.state == "running"
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.state)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockerSnapshot {
    pub running_count: usize,
    pub stopped_count: usize,
    pub total_images: usize,
    pub recent_containers: Vec<String>,
}

impl DockerSnapshot {
    /// `containers` is expected newest first, as the daemon lists them.
    pub fn from_entries(containers: &[ContainerEntry], total_images: usize) -> Self {
        let running_count = containers.iter().filter(|c| c.is_running()).count();
        DockerSnapshot {
            running_count,
            stopped_count: containers.len() - running_count,
            total_images,
            recent_containers: containers
                .iter()
                .take(RECENT_CONTAINER_LIMIT)
                .map(ContainerEntry::label)
                .collect(),
        }
    }
}
