use hotel_admin::services::seed_defaults;
use hotel_admin::{AdminStores, Config, Storage, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. 加载 .env 和配置
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. 工作目录与日志
    setup_environment(&config)?;
    tracing::info!(work_dir = %config.work_dir, "Hotel admin starting...");

    // 3. 打开数据库并加载所有集合
    let storage = Storage::open(config.db_path())?;
    let mut stores = AdminStores::open(storage)?;

    // 4. 空库写入默认参考数据
    if config.seed_defaults {
        let report = seed_defaults(&mut stores);
        for error in &report.errors {
            tracing::warn!(%error, "Default record skipped");
        }
    }

    tracing::info!(
        summary = %stores.inventory(),
        page_size = config.page_size,
        "Hotel admin ready"
    );
    Ok(())
}
