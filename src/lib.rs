pub mod config;
pub mod event;
pub mod format;
pub mod layout;
#[cfg(feature = "file-log")]
pub mod logging;
pub mod refresh;
pub mod screen;
pub mod shutdown;
pub mod system;
pub mod ui;
