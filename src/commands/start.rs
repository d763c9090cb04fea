use crate::container::{Container, StartOutcome};
use crate::errors::Result;
use crate::runtime::{ContainerRuntime, HarnessConfig};
use log::info;

pub struct StartCommand<'a, R: ContainerRuntime> {
    pub runtime: &'a R,
    pub config: &'a HarnessConfig,
}

impl<'a, R: ContainerRuntime> StartCommand<'a, R> {
    pub fn new(runtime: &'a R, config: &'a HarnessConfig) -> Self {
        Self { runtime, config }
    }

    pub fn run(&self) -> Result<StartOutcome> {
        Container::new(self.runtime, self.config).ensure_running()
    }
}

impl<R: ContainerRuntime> super::Command for StartCommand<'_, R> {
    fn execute(&self) -> Result<()> {
        info!("启动容器: {}", self.config.container_name);

        let name = &self.config.container_name;
        match self.run()? {
            StartOutcome::Created => {
                println!("容器 {} 已从镜像 {} 创建并启动", name, self.config.image)
            }
            StartOutcome::Started => println!("容器 {} 已启动", name),
            StartOutcome::AlreadyRunning => println!("容器 {} 已在运行", name),
        }
        Ok(())
    }
}
