//! Hotel Admin - 酒店房间管理后台
//!
//! # 架构概述
//!
//! - **存储** (`db`): 嵌入式 redb，每个集合以 JSON 数组整体持久化
//! - **参考数据** (`db::repository`): 通用 [`ReferenceStore`] 与房间目录
//! - **服务** (`services`): 引用检查、默认数据
//! - **页面** (`page`): 房间列表派生视图、表单流程和级联更新
//!
//! # 模块结构
//!
//! ```text
//! hotel-admin/src/
//! ├── core/          # 配置、存储集合
//! ├── db/            # redb 存储与仓储
//! ├── services/      # 引用检查、默认数据
//! ├── page/          # 页面控制器
//! └── utils/         # 日志、校验
//! ```

pub mod core;
pub mod db;
pub mod page;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{AdminStores, Config};
pub use db::Storage;
pub use db::repository::{
    ReferenceStore, RemoveOutcome, RoomCatalog, RoomFilter, RoomSortField, UsageReport,
};
pub use page::{RoomPageController, RoomSummary, StatusAction};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env，创建工作目录，初始化日志
pub fn setup_environment(config: &Config) -> AppResult<()> {
    std::fs::create_dir_all(&config.work_dir).map_err(|e| {
        AppError::config(format!("Cannot create work dir {}: {e}", config.work_dir))
    })?;
    if let Some(dir) = config.log_dir.as_deref() {
        std::fs::create_dir_all(dir)
            .map_err(|e| AppError::config(format!("Cannot create log dir {dir}: {e}")))?;
    }
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(())
}
