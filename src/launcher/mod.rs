
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Config;
use crate::errors::{Error, Result};
use crate::menu::MenuSelection;

/// Everything needed to invoke one delegated program: resolved interpreter,
/// argument vector (script name first), working directory, and the virtual
/// environment the child should believe it is running in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub workdir: PathBuf,
    pub venv_root: Option<PathBuf>,
}

impl LaunchPlan {
    /// Directory holding the venv's executables, when a venv is in play.
    pub fn venv_bin(&self) -> Option<PathBuf> {
        self.venv_root.as_ref().map(|root| root.join(VENV_BIN_DIR))
    }
}

#[cfg(windows)]
const VENV_BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
const VENV_BIN_DIR: &str = "bin";

#[cfg(windows)]
const VENV_PYTHON: &str = "python.exe";
#[cfg(not(windows))]
const VENV_PYTHON: &str = "python";

#[cfg(windows)]
const FALLBACK_PYTHON: &str = "python";
#[cfg(not(windows))]
const FALLBACK_PYTHON: &str = "python3";

/// Maps a menu selection to the delegated program it stands for. Script
/// names and the interpreter come from config; resolution happens up front
/// so the dispatch itself is a plain blocking wait.
#[derive(Debug, Clone)]
pub struct Launcher {
    workdir: PathBuf,
    venv_dir: String,
    python_override: Option<PathBuf>,
    quick_test_script: String,
    monitor_script: String,
    view_data_script: String,
}

impl Launcher {
    pub fn from_config(config: &Config, workdir: impl AsRef<Path>) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
            venv_dir: config.venv_dir().to_string(),
            python_override: config.python().map(Path::to_path_buf),
            quick_test_script: config.quick_test_script().to_string(),
            monitor_script: config.monitor_script().to_string(),
            view_data_script: config.view_data_script().to_string(),
        }
    }

    /// The plan for a selection, or `None` for Quit (nothing to launch).
    pub fn plan(&self, selection: MenuSelection) -> Option<LaunchPlan> {
        let (script, extra): (&str, &[&str]) = match selection {
            MenuSelection::QuickTest => (&self.quick_test_script, &[]),
            MenuSelection::FullTest => (&self.monitor_script, &["--test"]),
            MenuSelection::ViewData => (&self.view_data_script, &[]),
            MenuSelection::ScheduledRun => (&self.monitor_script, &[]),
            MenuSelection::Quit => return None,
        };

        let mut args = Vec::with_capacity(1 + extra.len());
        args.push(script.to_string());
        args.extend(extra.iter().map(|a| a.to_string()));

        let venv_root = self.existing_venv_root();
        Some(LaunchPlan {
            program: self.interpreter(venv_root.as_deref()),
            args,
            workdir: self.workdir.clone(),
            venv_root,
        })
    }

    fn existing_venv_root(&self) -> Option<PathBuf> {
        let root = self.workdir.join(&self.venv_dir);
        root.join(VENV_BIN_DIR)
            .join(VENV_PYTHON)
            .exists()
            .then_some(root)
    }

    fn interpreter(&self, venv_root: Option<&Path>) -> PathBuf {
        if let Some(python) = &self.python_override {
            return python.clone();
        }
        match venv_root {
            Some(root) => root.join(VENV_BIN_DIR).join(VENV_PYTHON),
            None => PathBuf::from(FALLBACK_PYTHON),
        }
    }
}

/// Seam between the menu flow and the operating system. The flow only needs
/// to know that a plan ran to completion; exit statuses of delegated programs
/// are deliberately not captured or forwarded.
pub trait ProgramRunner {
    fn run(&self, plan: &LaunchPlan) -> Result<()>;
}

/// Runs the plan as a child process and blocks until it returns.
#[derive(Debug, Default, Clone)]
pub struct BlockingRunner;

impl BlockingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble the `Command` for a plan. Split out so tests can inspect the
    /// invocation without spawning anything.
    pub fn command(plan: &LaunchPlan) -> Command {
        let mut cmd = Command::new(&plan.program);
        cmd.args(&plan.args).current_dir(&plan.workdir);

        // Mirror `source venv/bin/activate` for the child.
        if let (Some(root), Some(bin)) = (&plan.venv_root, plan.venv_bin()) {
            cmd.env("VIRTUAL_ENV", root);
            let path = match std::env::var_os("PATH") {
                Some(existing) => {
                    let parts = std::iter::once(bin).chain(std::env::split_paths(&existing));
                    std::env::join_paths(parts).unwrap_or(existing)
                }
                None => bin.into_os_string(),
            };
            cmd.env("PATH", path);
        }
        cmd
    }
}

impl ProgramRunner for BlockingRunner {
    fn run(&self, plan: &LaunchPlan) -> Result<()> {
        let mut cmd = Self::command(plan);
        // Fire-and-forget: the child's exit status is not inspected.
        let _status = cmd.status().map_err(|e| {
            Error::launch(format!("Failed to start {}: {}", plan.program.display(), e))
        })?;
        Ok(())
    }
}
