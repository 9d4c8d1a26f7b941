use crate::errors::Result;
use crate::prompter::models::{Flow, FlowCtrl};
use crate::prompter::prompter::Prompter;
use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

struct ScriptFlow {
    renders: Rc<RefCell<u32>>,
    inputs: Rc<RefCell<Vec<String>>>,
    script: Vec<FlowCtrl>,
}

impl ScriptFlow {
    fn new(
        renders: Rc<RefCell<u32>>,
        inputs: Rc<RefCell<Vec<String>>>,
        script: Vec<FlowCtrl>,
    ) -> Self {
        Self {
            renders,
            inputs,
            script,
        }
    }
}

impl Flow for ScriptFlow {
    fn render(&mut self) -> Result<()> {
        *self.renders.borrow_mut() += 1;
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        self.inputs.borrow_mut().push(input.to_string());
        Ok(self.script.remove(0))
    }
}

#[test]
fn prompter_finishes_on_flow_finish() {
    let p = Prompter::new();
    let renders = Rc::new(RefCell::new(0));
    let inputs = Rc::new(RefCell::new(Vec::new()));
    let flow = ScriptFlow::new(renders.clone(), inputs.clone(), vec![FlowCtrl::Finish]);
    let reader = Cursor::new(b"line\n");

    p.run_with_reader(flow, reader).unwrap();

    assert_eq!(*renders.borrow(), 1);
    assert_eq!(inputs.borrow().len(), 1);
}

#[test]
fn prompter_handles_continue_then_finish() {
    let p = Prompter::new();
    let renders = Rc::new(RefCell::new(0));
    let inputs = Rc::new(RefCell::new(Vec::new()));
    let flow = ScriptFlow::new(
        renders.clone(),
        inputs.clone(),
        vec![FlowCtrl::Continue, FlowCtrl::Finish],
    );
    let reader = Cursor::new(b"first\nsecond\n");

    p.run_with_reader(flow, reader).unwrap();

    assert_eq!(*renders.borrow(), 2);
    assert_eq!(inputs.borrow().len(), 2);
}

#[test]
fn prompter_aborts_on_flow_abort() {
    let p = Prompter::new();
    let renders = Rc::new(RefCell::new(0));
    let inputs = Rc::new(RefCell::new(Vec::new()));
    let flow = ScriptFlow::new(renders.clone(), inputs.clone(), vec![FlowCtrl::Abort]);
    let reader = Cursor::new(b"bad\nnever read\n");

    p.run_with_reader(flow, reader).unwrap();

    assert_eq!(*renders.borrow(), 1);
    assert_eq!(inputs.borrow().len(), 1);
}

#[test]
fn prompter_exits_on_eof() {
    let p = Prompter::new();
    let renders = Rc::new(RefCell::new(0));
    let inputs = Rc::new(RefCell::new(Vec::new()));
    let flow = ScriptFlow::new(renders.clone(), inputs.clone(), vec![FlowCtrl::Finish]);
    let reader = Cursor::new(b"");

    p.run_with_reader(flow, reader).unwrap();

    assert_eq!(*renders.borrow(), 1);
    assert_eq!(inputs.borrow().len(), 0);
}

#[test]
fn prompter_passes_every_line_through_trimmed() {
    // No global escape words: the flow sees "exit" like any other input.
    let p = Prompter::new();
    let renders = Rc::new(RefCell::new(0));
    let inputs = Rc::new(RefCell::new(Vec::new()));
    let flow = ScriptFlow::new(
        renders.clone(),
        inputs.clone(),
        vec![FlowCtrl::Continue, FlowCtrl::Finish],
    );
    let reader = Cursor::new(b"  exit \n0\n");

    p.run_with_reader(flow, reader).unwrap();

    assert_eq!(*inputs.borrow(), vec!["exit".to_string(), "0".to_string()]);
}
