use super::{MemoryExtras, PlatformExtensions};

pub struct Platform;

impl PlatformExtensions for Platform {
    fn memory_extras() -> Option<MemoryExtras> {
        let contents = std::fs::read_to_string("/proc/meminfo").ok()?;
        parse_meminfo(&contents)
    }

    fn is_loopback_interface(name: &str) -> bool {
        name == "lo"
    }
}

// Lines look like "Cached:          123456 kB".
fn parse_meminfo(contents: &str) -> Option<MemoryExtras> {
    let mut cached = None;
    let mut buffers = None;
    for line in contents.lines() {
        if let Some(val) = line.strip_prefix("Cached:") {
            cached = parse_kib(val);
        } else if let Some(val) = line.strip_prefix("Buffers:") {
            buffers = parse_kib(val);
        }
    }
    Some(MemoryExtras {
        cached_bytes: cached?,
        buffers_bytes: buffers?,
    })
}

fn parse_kib(value: &str) -> Option<u64> {
    let kib: u64 = value.trim().trim_end_matches("kB").trim().parse().ok()?;
    Some(kib * 1024)
}
