//! Recording fakes for the collaborator traits.

use crate::{
    CoreResult, FolderPicker, KeyValueStore, LaunchCommand, Launcher, MenuDescriptor, MenuSink,
    MemoryStore,
};

use std::{cell::RefCell, collections::VecDeque, io, path::PathBuf, rc::Rc};

/// Memory store whose contents the test can still reach after handing it off.
#[derive(Clone, Default)]
pub(crate) struct SharedStore(pub(crate) Rc<RefCell<MemoryStore>>);

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        self.0.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: String) -> CoreResult<()> {
        self.0.borrow_mut().set(key, value)
    }
}

/// Records every launched command; optionally fails every launch.
#[derive(Clone, Default)]
pub(crate) struct RecordingLauncher {
    pub(crate) launched: Rc<RefCell<Vec<LaunchCommand>>>,
    pub(crate) fail: bool,
}

impl Launcher for RecordingLauncher {
    fn launch(&self, command: &LaunchCommand) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such program"));
        }
        self.launched.borrow_mut().push(command.clone());
        Ok(())
    }
}

/// Answers folder prompts from a queue; an exhausted queue cancels.
#[derive(Clone, Default)]
pub(crate) struct ScriptedPicker {
    pub(crate) answers: Rc<RefCell<VecDeque<Option<PathBuf>>>>,
}

impl ScriptedPicker {
    pub(crate) fn answer(&self, answer: Option<&str>) {
        self.answers
            .borrow_mut()
            .push_back(answer.map(PathBuf::from));
    }
}

impl FolderPicker for ScriptedPicker {
    fn pick_folder(&mut self) -> Option<PathBuf> {
        self.answers.borrow_mut().pop_front().flatten()
    }
}

/// Keeps every attached menu.
#[derive(Clone, Default)]
pub(crate) struct RecordingMenu {
    pub(crate) attached: Rc<RefCell<Vec<MenuDescriptor>>>,
}

impl RecordingMenu {
    pub(crate) fn count(&self) -> usize {
        self.attached.borrow().len()
    }

    pub(crate) fn last(&self) -> Option<MenuDescriptor> {
        self.attached.borrow().last().cloned()
    }
}

impl MenuSink for RecordingMenu {
    fn attach(&mut self, menu: MenuDescriptor) -> CoreResult<()> {
        self.attached.borrow_mut().push(menu);
        Ok(())
    }
}
