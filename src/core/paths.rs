use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "launcher.json";
pub const LOGS_DIR_NAME: &str = "logs";

/// Filesystem anchors for one launcher run. Everything hangs off `workdir`,
/// the directory containing the executable, so delegated programs always run
/// relative to the installation regardless of where the user invoked us from.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub workdir: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn resolve() -> Self {
        Self::from_workdir(resolve_workdir(std::env::current_exe().ok()))
    }

    pub fn from_workdir(workdir: impl AsRef<Path>) -> Self {
        let workdir = workdir.as_ref().to_path_buf();
        let config_path = workdir.join(CONFIG_FILE_NAME);
        let logs_dir = workdir.join(LOGS_DIR_NAME);
        Self {
            workdir,
            config_path,
            logs_dir,
        }
    }
}

/// Directory containing the executable, falling back to the caller's cwd
/// when the executable path cannot be determined.
pub fn resolve_workdir(exe: Option<PathBuf>) -> PathBuf {
    exe.and_then(|p| p.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
