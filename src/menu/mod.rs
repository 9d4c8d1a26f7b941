
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::errors::{Error, Result};

/// One entry of the fixed launcher menu. Parsed by exact match against the
/// digit the user types; never retained past a single dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
pub enum MenuSelection {
    #[strum(serialize = "1")]
    QuickTest,
    #[strum(serialize = "2")]
    FullTest,
    #[strum(serialize = "3")]
    ViewData,
    #[strum(serialize = "4")]
    ScheduledRun,
    #[strum(serialize = "0")]
    Quit,
}

impl MenuSelection {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| Error::invalid(s.trim()))
    }

    /// Localized label shown next to the digit in the menu.
    pub fn label(&self) -> &'static str {
        match self {
            MenuSelection::QuickTest => "快速测试 (无需邮件配置)",
            MenuSelection::FullTest => "完整测试 (发送测试邮件)",
            MenuSelection::ViewData => "查看已保存的数据",
            MenuSelection::ScheduledRun => "启动定时监控 (按 Ctrl+C 停止)",
            MenuSelection::Quit => "退出",
        }
    }

    /// The recognized input tokens, in menu order.
    pub fn valid_tokens() -> String {
        Self::iter()
            .map(|s| s.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// What a finished dispatch run means for the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchOutcome {
    /// A delegated program was launched and returned (status not forwarded).
    Completed,
    /// Explicit quit, or EOF before any selection was made.
    #[default]
    Quit,
    /// Unrecognized menu input.
    Rejected,
}

impl DispatchOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchOutcome::Completed | DispatchOutcome::Quit => 0,
            DispatchOutcome::Rejected => 1,
        }
    }
}
