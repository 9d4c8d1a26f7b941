use crate::errors::Result;

pub enum FlowCtrl {
    Continue,
    Finish,
    Abort,
}

pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;
}

/// The two stops of the one-shot dispatch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Menu is on screen; waiting for the selection line.
    AwaitSelection,
    /// A delegated program has returned; waiting for the closing keypress.
    AwaitKeypress,
}
