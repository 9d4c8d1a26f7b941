use strum::IntoEnumIterator;

use crate::core::context::AppContext;
use crate::errors::Result;
use crate::launcher::{BlockingRunner, Launcher, ProgramRunner};
use crate::logging::{LogTarget, Logger};
use crate::menu::{DispatchOutcome, MenuSelection};
use crate::prompter::models::{Flow, FlowCtrl, MenuState};
use crate::ui::chrome::UiChrome;

const PROMPT: &str = "请输入选项 (0-4): ";
const PAUSE_PROMPT: &str = "按回车键退出...";
const EXIT_MESSAGE: &str = "再见!";
const INVALID_MESSAGE: &str = "无效选项";
const SCHEDULED_RUN_HINT: &str = "定时监控运行中，按 Ctrl+C 停止";

/// The whole visible behavior of the launcher: print the menu, take one
/// selection, hand control to the delegated program, then hold for a final
/// keypress. Runs once; never loops back to the menu.
pub struct MenuFlow<'a, R: ProgramRunner = BlockingRunner> {
    ctx: &'a mut AppContext,
    launcher: Launcher,
    runner: R,
    state: MenuState,
    logger: Logger,
}

impl<'a> MenuFlow<'a, BlockingRunner> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        Self::with_runner(ctx, BlockingRunner::new())
    }
}

impl<'a, R: ProgramRunner> MenuFlow<'a, R> {
    pub fn with_runner(ctx: &'a mut AppContext, runner: R) -> Self {
        let launcher = Launcher::from_config(&ctx.config, &ctx.paths.workdir);
        let logger = ctx.logger.clone();
        Self {
            ctx,
            launcher,
            runner,
            state: MenuState::AwaitSelection,
            logger,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    fn print_menu(&self) {
        let chrome = UiChrome::new();
        chrome.print_banner();
        println!();
        for selection in MenuSelection::iter() {
            println!("  {}. {}", selection, selection.label());
        }
        println!();
        chrome.print_prompt(PROMPT);
    }

    fn dispatch(&mut self, selection: MenuSelection) -> FlowCtrl {
        // Quit and invalid input terminate immediately; everything else
        // blocks on the delegated program and then waits for a keypress.
        match self.launcher.plan(selection) {
            None => {
                self.logger.info(EXIT_MESSAGE, LogTarget::ConsoleOnly);
                self.ctx.outcome = DispatchOutcome::Quit;
                FlowCtrl::Finish
            }
            Some(plan) => {
                println!();
                println!("正在启动: {}", selection.label());
                if selection == MenuSelection::ScheduledRun {
                    println!("{SCHEDULED_RUN_HINT}");
                }
                println!();
                self.logger.info(
                    format!("Dispatching: {} {}", plan.program.display(), plan.args.join(" ")),
                    LogTarget::FileOnly,
                );

                if let Err(err) = self.runner.run(&plan) {
                    // Surfaced in passing, like a shell printing
                    // command-not-found; the wrapper still pauses and
                    // exits cleanly.
                    self.logger.error(format!("{err}"), LogTarget::ConsoleOnly);
                }

                self.ctx.outcome = DispatchOutcome::Completed;
                self.state = MenuState::AwaitKeypress;
                FlowCtrl::Continue
            }
        }
    }
}

impl<'a, R: ProgramRunner> Flow for MenuFlow<'a, R> {
    fn render(&mut self) -> Result<()> {
        match self.state {
            MenuState::AwaitSelection => self.print_menu(),
            MenuState::AwaitKeypress => {
                println!();
                UiChrome::new().print_prompt(PAUSE_PROMPT);
            }
        }
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        match self.state {
            MenuState::AwaitKeypress => Ok(FlowCtrl::Finish),
            MenuState::AwaitSelection => match MenuSelection::try_from(input) {
                Ok(selection) => Ok(self.dispatch(selection)),
                Err(_) => {
                    self.logger.error(
                        format!(
                            "{INVALID_MESSAGE}: '{input}' (有效选项: {})",
                            MenuSelection::valid_tokens()
                        ),
                        LogTarget::ConsoleOnly,
                    );
                    self.ctx.outcome = DispatchOutcome::Rejected;
                    Ok(FlowCtrl::Abort)
                }
            },
        }
    }
}
