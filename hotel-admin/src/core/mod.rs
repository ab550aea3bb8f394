//! 核心模块 - 配置与存储集合
//!
//! # 模块结构
//!
//! - [`Config`] - 管理端配置
//! - [`AdminStores`] - 所有参考数据存储与房间目录

pub mod config;
pub mod stores;

pub use config::Config;
pub use stores::AdminStores;
