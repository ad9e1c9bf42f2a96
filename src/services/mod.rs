#[cfg(test)]
pub mod testing;
pub mod version_control;

pub use version_control::VersionControlService;
