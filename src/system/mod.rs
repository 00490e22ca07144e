pub mod collector;
pub mod docker;
pub mod net_rate;
pub mod platform;
pub mod snapshot;

use std::time::Duration;

use futures::future::BoxFuture;
use thiserror::Error;
use tracing::{debug, warn};

use snapshot::{
    CpuSnapshot, DiskSnapshot, DockerSnapshot, LoadSnapshot, MemorySnapshot, NetSnapshot,
    SystemSnapshot,
};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no {what} data reported by the operating system")]
    NoData { what: &'static str },

    #[error("network interface `{0}` not found")]
    UnknownInterface(String),

    #[error("docker daemon request failed: {0}")]
    Docker(#[from] bollard::errors::Error),

    #[error("{what} did not answer within {after:?}")]
    Timeout { what: &'static str, after: Duration },
}

/// Outcome of one provider call.
pub type Reading<T> = Result<T, ProviderError>;

/// The telemetry providers the dashboard samples on every tick.
pub trait Telemetry: Send {
    fn system(&mut self) -> Reading<SystemSnapshot>;
    fn cpu(&mut self) -> Reading<CpuSnapshot>;
    fn load(&mut self) -> Reading<LoadSnapshot>;
    fn memory(&mut self) -> Reading<MemorySnapshot>;
    fn disk(&mut self) -> Reading<DiskSnapshot>;
    fn network(&mut self) -> Reading<NetSnapshot>;
    /// Talks to an external daemon, so it is the one asynchronous provider.
    fn docker(&self) -> BoxFuture<'static, Reading<DockerSnapshot>>;
}

/// Everything one frame needs. A `None` docker reading means the daemon is
/// unavailable, which the dashboard shows as a message rather than an error.
#[derive(Debug)]
pub struct Readings {
    pub system: Reading<SystemSnapshot>,
    pub cpu: Reading<CpuSnapshot>,
    pub load: Reading<LoadSnapshot>,
    pub memory: Reading<MemorySnapshot>,
    pub disk: Reading<DiskSnapshot>,
    pub network: Reading<NetSnapshot>,
    pub docker: Option<DockerSnapshot>,
}

impl Readings {
    pub async fn sample<T: Telemetry>(telemetry: &mut T) -> Self {
        let system = telemetry.system();
        let cpu = telemetry.cpu();
        let load = telemetry.load();
        let memory = telemetry.memory();
        let disk = telemetry.disk();
        let network = telemetry.network();
        let docker = match telemetry.docker().await {
            Ok(docker) => Some(docker),
            Err(err) => {
                debug!(error = %err, "docker unavailable");
                None
            }
        };

        let readings = Readings {
            system,
            cpu,
            load,
            memory,
            disk,
            network,
            docker,
        };
        readings.log_failures();
        readings
    }

    fn log_failures(&self) {
        let failures = [
            ("system", self.system.as_ref().err()),
            ("cpu", self.cpu.as_ref().err()),
            ("load", self.load.as_ref().err()),
            ("memory", self.memory.as_ref().err()),
            ("disk", self.disk.as_ref().err()),
            ("network", self.network.as_ref().err()),
        ];
        for (provider, err) in failures {
            if let Some(err) = err {
                warn!(provider, error = %err, "provider failed, showing zeros");
            }
        }
    }
}

/// The snapshot to draw: the reading itself, or zeros when the provider failed.
pub fn or_zeroed<T: Clone + Default>(reading: &Reading<T>) -> T {
    reading.as_ref().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use futures::FutureExt;

    use super::*;

    struct FailingTelemetry;

    impl Telemetry for FailingTelemetry {
        fn system(&mut self) -> Reading<SystemSnapshot> {
            Err(ProviderError::NoData { what: "host" })
        }
        fn cpu(&mut self) -> Reading<CpuSnapshot> {
            Ok(CpuSnapshot { usage_percent: 42.0 })
        }
        fn load(&mut self) -> Reading<LoadSnapshot> {
            Err(ProviderError::NoData { what: "load" })
        }
        fn memory(&mut self) -> Reading<MemorySnapshot> {
            Err(ProviderError::NoData { what: "memory" })
        }
        fn disk(&mut self) -> Reading<DiskSnapshot> {
            Err(ProviderError::NoData { what: "disk" })
        }
        fn network(&mut self) -> Reading<NetSnapshot> {
            Err(ProviderError::UnknownInterface("eth9".to_string()))
        }
        fn docker(&self) -> BoxFuture<'static, Reading<DockerSnapshot>> {
            futures::future::ready(Err(ProviderError::Timeout {
                what: "docker",
                after: Duration::from_millis(5),
            }))
            .boxed()
        }
    }

    #[tokio::test]
    async fn failures_stay_inside_the_readings() {
        let readings = Readings::sample(&mut FailingTelemetry).await;
        assert!(readings.system.is_err());
        assert!(readings.docker.is_none());
        assert_eq!(or_zeroed(&readings.cpu).usage_percent, 42.0);
        assert_eq!(or_zeroed(&readings.memory), MemorySnapshot::default());
        assert_eq!(or_zeroed(&readings.network), NetSnapshot::default());
    }

    #[test]
    fn error_messages_name_the_provider() {
        let err = ProviderError::UnknownInterface("wlan7".to_string());
        assert_eq!(err.to_string(), "network interface `wlan7` not found");
        let err = ProviderError::NoData { what: "disk" };
        assert_eq!(err.to_string(), "no disk data reported by the operating system");
    }
}
