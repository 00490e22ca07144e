/// Page cache and buffer usage, in bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryExtras {
    pub cached_bytes: u64,
    pub buffers_bytes: u64,
}

pub trait PlatformExtensions {
    fn memory_extras() -> Option<MemoryExtras>;
    fn is_loopback_interface(name: &str) -> bool;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
mod windows;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "macos")]
use macos as platform_impl;
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
use windows as platform_impl;

pub fn memory_extras() -> Option<MemoryExtras> {
    platform_impl::Platform::memory_extras()
}

pub fn is_loopback_interface(name: &str) -> bool {
    platform_impl::Platform::is_loopback_interface(name)
}
