pub mod commands;
pub mod container;
pub mod errors;
pub mod logger;
pub mod runtime;

// 重新导出主要的类型和函数
pub use container::{Container, ContainerState, StartOutcome, StopMode, StopOutcome};
pub use errors::{DemoError, Result};
pub use runtime::{ContainerRuntime, DockerCli, HarnessConfig};
