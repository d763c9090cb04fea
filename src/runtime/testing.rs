//! 测试用的内存运行时，模拟容器的三种状态并记录每一次调用

use super::ContainerRuntime;
use crate::container::ContainerState;
use crate::errors::{DemoError, Result};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Exists,
    IsRunning,
    CreateAndStart { image: String },
    Start,
    Stop,
    Remove,
    Build { image: String, dockerfile: PathBuf, context: PathBuf },
}

impl Call {
    fn is_mutation(&self) -> bool {
        !matches!(self, Call::Exists | Call::IsRunning)
    }
}

pub struct ScriptedRuntime {
    name: String,
    state: Cell<ContainerState>,
    calls: RefCell<Vec<Call>>,
    image_built: Cell<bool>,
    fail_on: Option<(fn(&Call) -> bool, i32)>,
}

impl ScriptedRuntime {
    pub fn new(name: &str, state: ContainerState) -> Self {
        Self {
            name: name.to_string(),
            state: Cell::new(state),
            calls: RefCell::new(Vec::new()),
            image_built: Cell::new(true),
            fail_on: None,
        }
    }

    /// 本地没有镜像，`create_and_start` 会像 docker 一样以 125 失败
    pub fn without_image(self) -> Self {
        self.image_built.set(false);
        self
    }

    /// 匹配的调用以给定退出码失败
    pub fn failing(mut self, matches: fn(&Call) -> bool, code: i32) -> Self {
        self.fail_on = Some((matches, code));
        self
    }

    pub fn state(&self) -> ContainerState {
        self.state.get()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    fn record(&self, call: Call) -> Result<()> {
        let failure = match self.fail_on {
            Some((matches, code)) if matches(&call) => Some(DemoError::CommandFailed {
                command: format!("docker {:?}", call),
                code: Some(code),
            }),
            _ => None,
        };
        self.calls.borrow_mut().push(call);
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn expect_name(&self, name: &str) -> Result<()> {
        if name != self.name {
            return Err(DemoError::CommandFailed {
                command: format!("docker ... {}", name),
                code: Some(1),
            });
        }
        Ok(())
    }
}

impl ContainerRuntime for ScriptedRuntime {
    fn exists(&self, name: &str) -> Result<bool> {
        self.record(Call::Exists)?;
        Ok(name == self.name && self.state.get() != ContainerState::Absent)
    }

    fn is_running(&self, name: &str) -> Result<bool> {
        self.record(Call::IsRunning)?;
        Ok(name == self.name && self.state.get() == ContainerState::Running)
    }

    fn create_and_start(&self, name: &str, image: &str) -> Result<()> {
        self.record(Call::CreateAndStart { image: image.to_string() })?;
        if !self.image_built.get() {
            return Err(DemoError::CommandFailed {
                command: format!("docker run --detach --name {} {}", name, image),
                code: Some(125),
            });
        }
        // 名称冲突时 docker run 同样会失败
        if self.state.get() != ContainerState::Absent {
            return Err(DemoError::CommandFailed {
                command: format!("docker run --detach --name {} {}", name, image),
                code: Some(125),
            });
        }
        self.state.set(ContainerState::Running);
        Ok(())
    }

    fn start(&self, name: &str) -> Result<()> {
        self.record(Call::Start)?;
        self.expect_name(name)?;
        match self.state.get() {
            ContainerState::Absent => Err(DemoError::CommandFailed {
                command: format!("docker start {}", name),
                code: Some(1),
            }),
            _ => {
                self.state.set(ContainerState::Running);
                Ok(())
            }
        }
    }

    fn stop(&self, name: &str) -> Result<()> {
        self.record(Call::Stop)?;
        self.expect_name(name)?;
        match self.state.get() {
            ContainerState::Absent => Err(DemoError::CommandFailed {
                command: format!("docker stop {}", name),
                code: Some(1),
            }),
            _ => {
                self.state.set(ContainerState::Stopped);
                Ok(())
            }
        }
    }

    fn remove(&self, name: &str) -> Result<()> {
        self.record(Call::Remove)?;
        self.expect_name(name)?;
        match self.state.get() {
            ContainerState::Stopped => {
                self.state.set(ContainerState::Absent);
                Ok(())
            }
            // 运行中或不存在的容器不能直接 rm
            _ => Err(DemoError::CommandFailed {
                command: format!("docker rm {}", name),
                code: Some(1),
            }),
        }
    }

    fn build_image(&self, image: &str, dockerfile: &Path, context: &Path) -> Result<()> {
        self.record(Call::Build {
            image: image.to_string(),
            dockerfile: dockerfile.to_path_buf(),
            context: context.to_path_buf(),
        })?;
        self.image_built.set(true);
        Ok(())
    }
}
