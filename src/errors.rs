use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Generic error: {0}")]
    Generic(String),

    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("`{command}` 执行失败 ({})", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("docker 不可用: {0}")]
    RuntimeUnavailable(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit {}", code),
        None => "被信号终止".to_string(),
    }
}

impl DemoError {
    /// 进程退出码：docker 命令失败时透传其退出码，其余错误统一为 1
    pub fn exit_code(&self) -> i32 {
        match self {
            DemoError::CommandFailed { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[macro_export]
macro_rules! bail {
    ($msg:expr) => {
        return Err($crate::errors::DemoError::Generic($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::errors::DemoError::Generic(format!($fmt, $($arg)*)))
    };
}

pub trait ResultExt<T> {
    fn chain_err<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<DemoError>,
{
    fn chain_err<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let base_error = e.into();
            let context = f();
            DemoError::Generic(format!("{}: {}", context, base_error))
        })
    }
}
