pub mod state;

use crate::errors::Result;
use crate::runtime::{ContainerRuntime, HarnessConfig};
use log::{debug, info};
pub use state::ContainerState;

/// `demobox start` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// 容器不存在，已从镜像创建并启动
    Created,
    /// 容器已停止，已重新启动
    Started,
    AlreadyRunning,
}

/// 停止后是否删除容器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopMode {
    Keep,
    Remove,
}

impl StopMode {
    /// 只有 `--remove` 和 `-r` 表示删除，其它任何值都只停止
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("--remove") | Some("-r") => StopMode::Remove,
            _ => StopMode::Keep,
        }
    }
}

/// `demobox stop` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopOutcome {
    /// 执行前观察到的状态
    pub previous: ContainerState,
    pub removed: bool,
}

impl StopOutcome {
    pub fn stopped(&self) -> bool {
        self.previous.is_running()
    }
}

/// 通过运行时按名称操作的演示容器
///
/// 每个操作都重新查询运行时，不信任之前观察到的状态。
pub struct Container<'a, R: ContainerRuntime> {
    runtime: &'a R,
    pub name: &'a str,
    pub image: &'a str,
}

impl<'a, R: ContainerRuntime> Container<'a, R> {
    pub fn new(runtime: &'a R, config: &'a HarnessConfig) -> Self {
        Self {
            runtime,
            name: &config.container_name,
            image: &config.image,
        }
    }

    pub fn state(&self) -> Result<ContainerState> {
        let exists = self.runtime.exists(self.name)?;
        // 不存在时无需再查询运行状态
        let running = exists && self.runtime.is_running(self.name)?;
        let state = ContainerState::from_observation(exists, running);
        debug!("容器 {} 当前状态: {}", self.name, state);
        Ok(state)
    }

    /// 确保容器在运行，必要时从镜像创建
    pub fn ensure_running(&self) -> Result<StartOutcome> {
        match self.state()? {
            ContainerState::Absent => {
                info!("容器 {} 不存在，从镜像 {} 创建", self.name, self.image);
                self.runtime.create_and_start(self.name, self.image)?;
                Ok(StartOutcome::Created)
            }
            ContainerState::Stopped => {
                info!("容器 {} 已停止，重新启动", self.name);
                self.runtime.start(self.name)?;
                Ok(StartOutcome::Started)
            }
            ContainerState::Running => Ok(StartOutcome::AlreadyRunning),
        }
    }

    /// 确保容器不在运行；`StopMode::Remove` 时随后删除容器
    pub fn ensure_stopped(&self, mode: StopMode) -> Result<StopOutcome> {
        let previous = self.state()?;
        if !previous.exists() {
            return Ok(StopOutcome {
                previous,
                removed: false,
            });
        }

        if previous.is_running() {
            info!("停止容器 {}", self.name);
            self.runtime.stop(self.name)?;
        }

        // 删除总是在停止之后
        let removed = mode == StopMode::Remove;
        if removed {
            info!("删除容器 {}", self.name);
            self.runtime.remove(self.name)?;
        }

        Ok(StopOutcome { previous, removed })
    }
}
