use crate::errors::Result;

pub mod build;
pub mod start;
pub mod status;
pub mod stop;

/// 命令执行的通用trait
pub trait Command {
    /// 执行命令
    fn execute(&self) -> Result<()>;
}
