use std::sync::{Mutex, PoisonError};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetRates {
    pub recent_recv_per_sec: u64,
    pub recent_sent_per_sec: u64,
    pub cumulative_recv: u64,
    pub cumulative_sent: u64,
}

#[derive(Debug, Default)]
struct TrackerState {
    last_bytes_recv: u64,
    last_bytes_sent: u64,
    last_sample_time: Option<Instant>,
}

/// Turns cumulative interface counters into per-second rates between
/// consecutive samples. Safe to share between callers.
#[derive(Debug, Default)]
pub struct NetRateTracker {
    state: Mutex<TrackerState>,
}

impl NetRateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&self, current_recv: u64, current_sent: u64) -> NetRates {
        self.sample_at(current_recv, current_sent, Instant::now())
    }

    pub fn sample_at(&self, current_recv: u64, current_sent: u64, now: Instant) -> NetRates {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        let (recent_recv_per_sec, recent_sent_per_sec) = match state.last_sample_time {
            Some(last) => {
                let elapsed = now.saturating_duration_since(last).as_secs_f64();
                (
                    per_second(current_recv, state.last_bytes_recv, elapsed),
                    per_second(current_sent, state.last_bytes_sent, elapsed),
                )
            }
            None => (0, 0),
        };

        state.last_bytes_recv = current_recv;
        state.last_bytes_sent = current_sent;
        state.last_sample_time = Some(now);

        NetRates {
            recent_recv_per_sec,
            recent_sent_per_sec,
            cumulative_recv: current_recv,
            cumulative_sent: current_sent,
        }
    }
}

// Counter resets and wraps come out as 0.
fn per_second(current: u64, last: u64, elapsed_secs: f64) -> u64 {
    if elapsed_secs <= 0.0 {
        return 0;
    }
    (current.saturating_sub(last) as f64 / elapsed_secs).floor() as u64
}
