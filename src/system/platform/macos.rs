use super::{MemoryExtras, PlatformExtensions};

pub struct Platform;

impl PlatformExtensions for Platform {
    fn memory_extras() -> Option<MemoryExtras> {
        // The unified buffer cache is not reported separately.
        None
    }

    fn is_loopback_interface(name: &str) -> bool {
        name == "lo0"
    }
}
