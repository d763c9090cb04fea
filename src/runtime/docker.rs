use super::ContainerRuntime;
use crate::errors::{DemoError, Result, ResultExt};
use log::{debug, warn};
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// 通过 docker 命令行访问容器运行时
#[derive(Debug, Clone)]
pub struct DockerCli {
    binary: String,
}

impl DockerCli {
    pub fn new(binary: String) -> Self {
        Self { binary }
    }

    /// 确认 docker 守护进程可访问，返回服务端版本
    pub fn ensure_available(&self) -> Result<String> {
        let output = Command::new(&self.binary)
            .args(["version", "--format", "{{.Server.Version}}"])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                DemoError::RuntimeUnavailable(format!(
                    "无法执行 `{}`，请确认已安装并在 PATH 中: {}",
                    self.binary, e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DemoError::RuntimeUnavailable(format!(
                "docker 守护进程未运行 ({}): {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn describe(&self, args: &[&str]) -> String {
        let mut parts = vec![self.binary.as_str()];
        parts.extend_from_slice(args);
        parts.join(" ")
    }

    /// 执行查询命令并捕获输出
    fn capture(&self, args: &[&str]) -> Result<Output> {
        let command = self.describe(args);
        debug!("执行: {}", command);

        let output = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .chain_err(|| format!("无法执行 `{}`", command))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("`{}` 失败: {}", command, stderr.trim());
            return Err(DemoError::CommandFailed {
                command,
                code: output.status.code(),
            });
        }
        Ok(output)
    }

    /// 执行会改变运行时状态的命令，输出直接交给终端
    fn passthrough(&self, args: &[&str]) -> Result<()> {
        let command = self.describe(args);
        debug!("执行: {}", command);

        let status = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .status()
            .chain_err(|| format!("无法执行 `{}`", command))?;

        if !status.success() {
            return Err(DemoError::CommandFailed {
                command,
                code: status.code(),
            });
        }
        Ok(())
    }

    fn listed(&self, name: &str, all: bool) -> Result<bool> {
        let mut args = vec!["ps"];
        if all {
            args.push("--all");
        }
        args.extend_from_slice(&["--format", "{{.Names}}"]);

        let output = self.capture(&args)?;
        Ok(names_contain(&String::from_utf8_lossy(&output.stdout), name))
    }
}

/// 在 `docker ps --format {{.Names}}` 的输出中精确查找容器名称
///
/// 每行一个容器，带旧式链接的容器会以逗号分隔多个名称。
pub fn names_contain(listing: &str, name: &str) -> bool {
    listing
        .lines()
        .flat_map(|line| line.split(','))
        .any(|candidate| candidate.trim() == name)
}

impl ContainerRuntime for DockerCli {
    fn exists(&self, name: &str) -> Result<bool> {
        self.listed(name, true)
    }

    fn is_running(&self, name: &str) -> Result<bool> {
        self.listed(name, false)
    }

    fn create_and_start(&self, name: &str, image: &str) -> Result<()> {
        self.passthrough(&["run", "--detach", "--name", name, image])
    }

    fn start(&self, name: &str) -> Result<()> {
        self.passthrough(&["start", name])
    }

    fn stop(&self, name: &str) -> Result<()> {
        self.passthrough(&["stop", name])
    }

    fn remove(&self, name: &str) -> Result<()> {
        self.passthrough(&["rm", name])
    }

    fn build_image(&self, image: &str, dockerfile: &Path, context: &Path) -> Result<()> {
        let dockerfile = dockerfile.to_string_lossy();
        let context = context.to_string_lossy();
        self.passthrough(&["build", "--tag", image, "--file", &*dockerfile, &*context])
    }
}
