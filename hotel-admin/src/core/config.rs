use std::path::PathBuf;

/// 管理端配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 |
/// | DATABASE_FILE | hotel-admin.redb | 数据库文件名 (相对 WORK_DIR) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，设置后按天滚动写文件 |
/// | PAGE_SIZE | 8 | 房间列表每页条数 |
/// | SEED_DEFAULTS | true | 空库时写入默认参考数据 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/srv/hotel PAGE_SIZE=12 cargo run -p hotel-admin
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存放数据库和日志
    pub work_dir: String,
    pub database_file: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 房间列表分页大小
    pub page_size: u32,
    pub seed_defaults: bool,
}

pub const DEFAULT_PAGE_SIZE: u32 = 8;

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            database_file: std::env::var("DATABASE_FILE")
                .unwrap_or_else(|_| "hotel-admin.redb".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            page_size: std::env::var("PAGE_SIZE")
                .ok()
                .and_then(|p| p.parse().ok())
                .filter(|p| *p > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
            seed_defaults: std::env::var("SEED_DEFAULTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// 使用自定义工作目录覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.log_dir = None;
        config
    }

    /// 数据库文件完整路径
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.database_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides("/tmp/hotel");
        assert_eq!(config.work_dir, "/tmp/hotel");
        assert!(config.log_dir.is_none());
        assert!(config.db_path().starts_with("/tmp/hotel"));
        assert!(config.page_size > 0);
    }
}
