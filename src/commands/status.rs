use crate::container::{Container, ContainerState};
use crate::errors::Result;
use crate::runtime::{ContainerRuntime, HarnessConfig};
use log::debug;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatusReport {
    pub container: String,
    pub image: String,
    pub state: ContainerState,
}

pub struct StatusCommand<'a, R: ContainerRuntime> {
    pub runtime: &'a R,
    pub config: &'a HarnessConfig,
    pub json: bool,
}

impl<'a, R: ContainerRuntime> StatusCommand<'a, R> {
    pub fn new(runtime: &'a R, config: &'a HarnessConfig, json: bool) -> Self {
        Self {
            runtime,
            config,
            json,
        }
    }

    pub fn report(&self) -> Result<StatusReport> {
        let state = Container::new(self.runtime, self.config).state()?;
        Ok(StatusReport {
            container: self.config.container_name.clone(),
            image: self.config.image.clone(),
            state,
        })
    }
}

impl<R: ContainerRuntime> super::Command for StatusCommand<'_, R> {
    fn execute(&self) -> Result<()> {
        debug!("获取容器状态: {}", self.config.container_name);

        let report = self.report()?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("容器状态信息:");
        println!("  名称: {}", report.container);
        println!("  镜像: {}", report.image);
        println!("  状态: {}", report.state);
        Ok(())
    }
}
