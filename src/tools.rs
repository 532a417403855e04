//! # Tools Module / 工具模块
//!
//! The two file utilities shipped next to the test case runtime:
//! an XML-configured file copier and a checksum verifier.
//! Both report per item and never stop at the first bad entry.
//!
//! 与测试用例运行时一同提供的两个文件工具：
//! XML 配置驱动的文件复制器和校验和验证器。
//! 两者都逐项报告，不会在第一个错误条目处停止。

pub mod checksum;
pub mod copier;
