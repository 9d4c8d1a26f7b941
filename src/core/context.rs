use crate::config::Config;
use crate::core::paths::AppPaths;
use crate::errors::Result;
use crate::logging::Logger;
use crate::menu::DispatchOutcome;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub logger: Logger,
    pub paths: AppPaths,
    /// Filled in by the menu flow; read by `main` to pick the exit status.
    pub outcome: DispatchOutcome,
}

impl AppContext {
    pub fn new_with_paths(paths: AppPaths) -> Result<Self> {
        let config = Config::load_from(&paths.config_path)?;

        let logger = Logger::new();
        logger.set_log_dir(&paths.logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Ok(Self {
            config,
            logger,
            paths,
            outcome: DispatchOutcome::default(),
        })
    }
}
