use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};
use tracing::trace;

use super::net_rate::NetRateTracker;
use super::snapshot::{
    CpuSnapshot, DiskSnapshot, DockerSnapshot, LoadSnapshot, MemorySnapshot, NetSnapshot,
    PartitionUsage, SystemSnapshot,
};
use super::{ProviderError, Reading, Telemetry, docker, platform};
use crate::format::{bytes_to_gib, percent};

/// sysinfo-backed providers. Holds the handles that must live across ticks:
/// CPU usage is the delta between two refreshes, and network rates need the
/// previous counters.
pub struct Collector {
    sys: System,
    disks: Disks,
    networks: Networks,
    net_rate: NetRateTracker,
    interface: Option<String>,
    docker_timeout: Duration,
}

impl Collector {
    pub fn new(interface: Option<String>, docker_timeout: Duration) -> Self {
        let sys = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );
        Collector {
            sys,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            net_rate: NetRateTracker::new(),
            interface,
            docker_timeout,
        }
    }
}

impl Telemetry for Collector {
    fn system(&mut self) -> Reading<SystemSnapshot> {
        let os_name = [System::name(), System::os_version()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let hostname = System::host_name().ok_or(ProviderError::NoData { what: "hostname" })?;
        let cpu_model = self
            .sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_default();

        Ok(SystemSnapshot {
            os_name,
            hostname,
            uptime: Duration::from_secs(System::uptime()),
            cpu_model,
        })
    }

    fn cpu(&mut self) -> Reading<CpuSnapshot> {
        self.sys.refresh_cpu_usage();
        if self.sys.cpus().is_empty() {
            return Err(ProviderError::NoData { what: "cpu" });
        }
        Ok(CpuSnapshot {
            usage_percent: f64::from(self.sys.global_cpu_usage()),
        })
    }

    fn load(&mut self) -> Reading<LoadSnapshot> {
        let load = System::load_average();
        Ok(LoadSnapshot {
            load1: load.one,
            load5: load.five,
            load15: load.fifteen,
        })
    }

    fn memory(&mut self) -> Reading<MemorySnapshot> {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        if total == 0 {
            return Err(ProviderError::NoData { what: "memory" });
        }
        let used = self.sys.used_memory();
        let extras = platform::memory_extras().unwrap_or_default();

        Ok(MemorySnapshot {
            total: bytes_to_gib(total),
            used: bytes_to_gib(used),
            free: bytes_to_gib(self.sys.free_memory()),
            cached: bytes_to_gib(extras.cached_bytes),
            buffers: bytes_to_gib(extras.buffers_bytes),
            main_percent: percent(used as f64, total as f64),
            swap_percent: percent(self.sys.used_swap() as f64, self.sys.total_swap() as f64),
        })
    }

    fn disk(&mut self) -> Reading<DiskSnapshot> {
        self.disks.refresh(true);
        let partitions: Vec<PartitionUsage> = self
            .disks
            .list()
            .iter()
            .map(|disk| PartitionUsage {
                device: disk.name().to_string_lossy().to_string(),
                mount_point: disk.mount_point().to_string_lossy().to_string(),
                total_bytes: disk.total_space(),
                available_bytes: disk.available_space(),
            })
            .collect();
        if partitions.is_empty() {
            return Err(ProviderError::NoData { what: "disk" });
        }
        Ok(DiskSnapshot::from_partitions(&partitions))
    }

    fn network(&mut self) -> Reading<NetSnapshot> {
        self.networks.refresh(true);
        let counters = self.networks.list().iter().map(|(name, data)| InterfaceCounters {
            name: name.as_str(),
            received: data.total_received(),
            transmitted: data.total_transmitted(),
        });
        let (recv, sent) = select_counters(counters, self.interface.as_deref())?;
        let rates = self.net_rate.sample(recv, sent);
        trace!(
            recv_per_sec = rates.recent_recv_per_sec,
            sent_per_sec = rates.recent_sent_per_sec,
            "network rates"
        );

        Ok(NetSnapshot {
            total_bytes_recv: rates.cumulative_recv,
            total_bytes_sent: rates.cumulative_sent,
            recent_bytes_recv_per_sec: rates.recent_recv_per_sec,
            recent_bytes_sent_per_sec: rates.recent_sent_per_sec,
        })
    }

    fn docker(&self) -> BoxFuture<'static, Reading<DockerSnapshot>> {
        docker::sample(self.docker_timeout).boxed()
    }
}

struct InterfaceCounters<'a> {
    name: &'a str,
    received: u64,
    transmitted: u64,
}

/// Either the one configured interface, or the sum over every interface
/// except loopback.
fn select_counters<'a>(
    counters: impl IntoIterator<Item = InterfaceCounters<'a>>,
    interface: Option<&str>,
) -> Result<(u64, u64), ProviderError> {
    match interface {
        Some(wanted) => counters
            .into_iter()
            .find(|c| c.name == wanted)
            .map(|c| (c.received, c.transmitted))
            .ok_or_else(|| ProviderError::UnknownInterface(wanted.to_string())),
        None => Ok(counters
            .into_iter()
            .filter(|c| !platform::is_loopback_interface(c.name))
            .fold((0u64, 0u64), |(recv, sent), c| {
                (
                    recv.saturating_add(c.received),
                    sent.saturating_add(c.transmitted),
                )
            })),
    }
}
