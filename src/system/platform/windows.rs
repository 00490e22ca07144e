use super::{MemoryExtras, PlatformExtensions};

pub struct Platform;

impl PlatformExtensions for Platform {
    fn memory_extras() -> Option<MemoryExtras> {
        None
    }

    fn is_loopback_interface(name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        name == "lo" || name == "lo0" || name.contains("loopback")
    }
}
