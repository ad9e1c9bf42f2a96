use std::path::PathBuf;
use std::sync::Arc;

use crate::config::RunOptions;
use crate::services::VersionControlService;

#[derive(Clone)]
pub struct AppContext {
    pub options: RunOptions,
    pub base_dir: PathBuf,
    pub version_control: Arc<dyn VersionControlService>,
}

impl AppContext {
    pub fn new(
        options: RunOptions,
        base_dir: PathBuf,
        version_control: Arc<dyn VersionControlService>,
    ) -> Self {
        Self {
            options,
            base_dir,
            version_control,
        }
    }
}
