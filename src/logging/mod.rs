
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;

#[derive(Debug, Copy, Clone)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub enum LogTarget {
    ConsoleOnly,
    ConsoleAndFile,
    FileOnly,
}

impl Default for LogTarget {
    fn default() -> Self {
        LogTarget::ConsoleAndFile
    }
}

/// Session log file, created lazily on the first file-targeted message so a
/// run that never logs to file leaves no `logs/` directory behind.
struct SessionFile {
    file: Option<Mutex<File>>,
    path: Option<PathBuf>,
    attempted: bool,
    dir: PathBuf,
}

impl Default for SessionFile {
    fn default() -> Self {
        Self {
            file: None,
            path: None,
            attempted: false,
            dir: PathBuf::from("logs"),
        }
    }
}

impl SessionFile {
    fn open(&mut self) {
        self.attempted = true;
        let result = fs::create_dir_all(&self.dir).and_then(|_| {
            let stamp = Local::now().format("%Y%m%d-%H%M%S");
            let path = self.dir.join(format!("launcher-{stamp}.log"));
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            Ok((file, path))
        });
        match result {
            Ok((file, path)) => {
                self.file = Some(Mutex::new(file));
                self.path = Some(path);
            }
            Err(err) => {
                eprintln!("WARN: File logging unavailable; continuing without a log file. ({err})");
            }
        }
    }

    fn write_line(&mut self, line: &str) {
        if !self.attempted {
            self.open();
        }
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{line}");
            }
        }
    }
}

/// Console + session-file logger shared across the launcher. Info goes to
/// stdout, warn/error to stderr; file lines carry a timestamp and level.
#[derive(Clone)]
pub struct Logger {
    session: Arc<Mutex<SessionFile>>,
    file_enabled: Arc<AtomicBool>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(SessionFile::default())),
            file_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if matches!(target, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile) {
            match level {
                LogLevel::Info => println!("{message}"),
                LogLevel::Warn | LogLevel::Error => eprintln!("{message}"),
            }
        }

        if matches!(target, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
            && self.file_enabled.load(Ordering::SeqCst)
        {
            if let Ok(mut session) = self.session.lock() {
                let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
                let line = format!("[{timestamp}] {:<5} {message}", level);
                session.write_line(&line);
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    /// Only takes effect before the first file-targeted message.
    pub fn set_log_dir(&self, dir: impl AsRef<Path>) {
        if let Ok(mut session) = self.session.lock() {
            if !session.attempted {
                session.dir = dir.as_ref().to_path_buf();
            }
        }
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.session.lock().ok().and_then(|s| s.path.clone())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_path", &self.log_path())
            .finish()
    }
}
