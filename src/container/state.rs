use serde::Serialize;
use std::fmt;

/// 从运行时观察到的容器状态，只观察不保存
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerState {
    Absent,
    Stopped,
    Running,
}

impl ContainerState {
    /// 由两次查询的结果推导状态
    pub fn from_observation(exists: bool, running: bool) -> Self {
        match (exists, running) {
            (false, _) => ContainerState::Absent,
            (true, false) => ContainerState::Stopped,
            (true, true) => ContainerState::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, ContainerState::Running)
    }

    pub fn exists(&self) -> bool {
        !matches!(self, ContainerState::Absent)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerState::Absent => "absent",
            ContainerState::Stopped => "stopped",
            ContainerState::Running => "running",
        }
    }
}

impl fmt::Display for ContainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
