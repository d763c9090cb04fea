use crate::container::{Container, ContainerState, StopMode, StopOutcome};
use crate::errors::Result;
use crate::runtime::{ContainerRuntime, HarnessConfig};
use log::info;

pub struct StopCommand<'a, R: ContainerRuntime> {
    pub runtime: &'a R,
    pub config: &'a HarnessConfig,
    pub mode: StopMode,
}

impl<'a, R: ContainerRuntime> StopCommand<'a, R> {
    pub fn new(runtime: &'a R, config: &'a HarnessConfig, mode: StopMode) -> Self {
        Self {
            runtime,
            config,
            mode,
        }
    }

    pub fn run(&self) -> Result<StopOutcome> {
        Container::new(self.runtime, self.config).ensure_stopped(self.mode)
    }
}

/// 根据停止结果生成输出给操作者的状态信息
pub fn status_lines(name: &str, outcome: &StopOutcome) -> Vec<String> {
    let mut lines = Vec::new();
    match outcome.previous {
        ContainerState::Absent => {
            lines.push(format!("容器 {} 不存在，无需停止", name));
            return lines;
        }
        ContainerState::Running => lines.push(format!("容器 {} 已停止", name)),
        ContainerState::Stopped => lines.push(format!("容器 {} 已经处于停止状态", name)),
    }

    if outcome.removed {
        lines.push(format!("容器 {} 已删除", name));
    } else {
        lines.push("容器已保留，可稍后重新启动".to_string());
        lines.push("  删除容器: demobox stop --remove".to_string());
        lines.push("  重新启动: demobox start".to_string());
    }
    lines
}

impl<R: ContainerRuntime> super::Command for StopCommand<'_, R> {
    fn execute(&self) -> Result<()> {
        info!("停止容器: {} ({:?})", self.config.container_name, self.mode);

        let outcome = self.run()?;
        for line in status_lines(&self.config.container_name, &outcome) {
            println!("{}", line);
        }
        Ok(())
    }
}
