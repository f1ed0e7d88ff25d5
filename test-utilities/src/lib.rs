pub mod fake_rootfs;
pub mod fixtures;

#[cfg(feature = "test_log")]
mod logging;
