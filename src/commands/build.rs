use crate::errors::Result;
use crate::runtime::{ContainerRuntime, HarnessConfig};
use log::info;

pub struct BuildCommand<'a, R: ContainerRuntime> {
    pub runtime: &'a R,
    pub config: &'a HarnessConfig,
}

impl<'a, R: ContainerRuntime> BuildCommand<'a, R> {
    pub fn new(runtime: &'a R, config: &'a HarnessConfig) -> Self {
        Self { runtime, config }
    }

    fn check_inputs(&self) -> Result<()> {
        let context = self.config.context_dir();
        if !context.is_dir() {
            crate::bail!("构建上下文目录不存在: {}", context.display());
        }

        let dockerfile = self.config.dockerfile_path();
        if !dockerfile.is_file() {
            crate::bail!("Dockerfile 不存在: {}", dockerfile.display());
        }
        Ok(())
    }
}

impl<R: ContainerRuntime> super::Command for BuildCommand<'_, R> {
    fn execute(&self) -> Result<()> {
        self.check_inputs()?;

        let dockerfile = self.config.dockerfile_path();
        let context = self.config.context_dir();
        info!(
            "构建镜像: image={}, dockerfile={}, context={}",
            self.config.image,
            dockerfile.display(),
            context.display()
        );

        println!("正在构建镜像 {} ...", self.config.image);
        self.runtime.build_image(&self.config.image, &dockerfile, context)?;
        println!("镜像 {} 构建完成", self.config.image);
        println!("启动容器: demobox start");
        Ok(())
    }
}
