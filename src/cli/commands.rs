//! # Commands Module / 命令模块
//!
//! One handler per subcommand. The file utilities report every failure on
//! the console and return normally, so their exit status is always success.
//!
//! 每个子命令对应一个处理函数。文件工具会在控制台上报告所有失败并正常返回，
//! 因此它们的退出状态始终为成功。

pub mod cases;
pub mod copy;
pub mod verify;
