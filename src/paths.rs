use anyhow::Context as _;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_path: PathBuf,
    log_dir: PathBuf,
}

impl AppPaths {
    pub fn new() -> anyhow::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "sticker-studio")
            .context("resolve project directories")?;

        let config_dir = project_dirs.config_dir().to_path_buf();
        let log_dir = project_dirs.data_local_dir().join("logs");

        fs::create_dir_all(&config_dir).context("create config dir")?;

        Ok(Self {
            config_path: config_dir.join("config.yaml"),
            log_dir,
        })
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone()
    }
}
