use log::LevelFilter;

use std::io::Write;

/// 初始化日志系统
///
/// 默认级别为 info，`verbose` 时为 debug；设置了 `RUST_LOG` 时以其为准。
pub fn init(verbose: bool) -> Result<(), log::SetLoggerError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format(|buf, record| writeln!(buf, "{} - {}", record.level(), record.args()))
        .target(env_logger::Target::Stderr)
        .try_init()
}
