use crate::errors::{DemoError, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONTAINER_NAME: &str = "foobar-container";
pub const DEFAULT_IMAGE: &str = "foobar-eval:latest";
pub const DEFAULT_DOCKERFILE: &str = "docker/Dockerfile";
pub const DEFAULT_DOCKER_BINARY: &str = "docker";

/// 演示目录，位于 crate 根目录下，作为镜像构建上下文
pub fn default_demo_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demo")
}

/// 演示容器的全部固定配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub container_name: String,
    pub image: String,
    /// 相对于 `demo_dir`
    pub dockerfile: PathBuf,
    pub demo_dir: PathBuf,
    pub docker_binary: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            dockerfile: PathBuf::from(DEFAULT_DOCKERFILE),
            demo_dir: default_demo_dir(),
            docker_binary: DEFAULT_DOCKER_BINARY.to_string(),
        }
    }
}

impl HarnessConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .chain_err(|| format!("无法读取配置文件 {}", path.display()))?;
        let config: HarnessConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        // 容器名称
        if self.container_name.is_empty() {
            return Err(DemoError::InvalidConfig("容器名称不能为空".to_string()));
        }
        // docker 要求 [a-zA-Z0-9][a-zA-Z0-9_.-]*，首字符为 '-' 时会被当作选项
        let mut chars = self.container_name.chars();
        let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphanumeric());
        if !first_ok || !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')) {
            return Err(DemoError::InvalidConfig(format!(
                "无效的容器名称: {}",
                self.container_name
            )));
        }

        // 镜像引用，必须是 name:tag 形式
        match self.image.rsplit_once(':') {
            Some((name, tag)) if !name.is_empty() && !tag.is_empty() && !tag.contains('/') => {}
            _ => {
                return Err(DemoError::InvalidConfig(format!(
                    "无效的镜像引用 (应为 name:tag): {}",
                    self.image
                )));
            }
        }

        if self.dockerfile.as_os_str().is_empty() || self.dockerfile.is_absolute() {
            return Err(DemoError::InvalidConfig(format!(
                "Dockerfile 路径必须是相对于演示目录的相对路径: {}",
                self.dockerfile.display()
            )));
        }

        if self.docker_binary.is_empty() {
            return Err(DemoError::InvalidConfig("docker 可执行文件不能为空".to_string()));
        }

        Ok(())
    }

    pub fn context_dir(&self) -> &Path {
        &self.demo_dir
    }

    pub fn dockerfile_path(&self) -> PathBuf {
        self.demo_dir.join(&self.dockerfile)
    }
}
