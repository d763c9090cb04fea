use crate::errors::Result;
use log::debug;
use std::path::Path;

pub mod config;
pub mod docker;
#[cfg(test)]
pub mod testing;

pub use config::HarnessConfig;
pub use docker::DockerCli;

/// 容器运行时提供的全部能力
///
/// 每次查询都直接询问运行时，实现方不得缓存容器状态。
/// 名称匹配必须是精确匹配，不能是前缀或子串匹配。
pub trait ContainerRuntime {
    /// 容器是否存在（包括已停止的容器）
    fn exists(&self, name: &str) -> Result<bool>;

    /// 容器是否在运行
    fn is_running(&self, name: &str) -> Result<bool>;

    /// 以后台模式从镜像创建并启动容器
    fn create_and_start(&self, name: &str, image: &str) -> Result<()>;

    fn start(&self, name: &str) -> Result<()>;

    fn stop(&self, name: &str) -> Result<()>;

    fn remove(&self, name: &str) -> Result<()>;

    /// 从构建上下文和 Dockerfile 构建并打标签
    fn build_image(&self, image: &str, dockerfile: &Path, context: &Path) -> Result<()>;
}

// 运行时初始化
pub fn init(config: &HarnessConfig) -> Result<DockerCli> {
    debug!("初始化 docker 运行时: {}", config.docker_binary);

    let runtime = DockerCli::new(config.docker_binary.clone());
    let version = runtime.ensure_available()?;

    debug!("docker 守护进程可用，版本 {}", version);
    Ok(runtime)
}
