// ==========================================
// 设备维保绩效指标系统 - 命令行入口
// ==========================================
// 用法:
//   maintenance-indicators <client_id> [start_date] [end_date] [types]
// 示例:
//   maintenance-indicators 405 2026-08-01 2026-08-30 1,3
// 输出: 族指标报表（JSON,旧系统报表契约字段名）
// ==========================================

use maintenance_indicators::api::IndicatorQuery;
use maintenance_indicators::app::{get_default_db_path, AppState};
use maintenance_indicators::logging;

fn main() {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", maintenance_indicators::APP_NAME);
    tracing::info!("系统版本: {}", maintenance_indicators::VERSION);
    tracing::info!("==================================================");

    if let Err(e) = run() {
        tracing::error!("运行失败: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let client_id: i64 = args
        .get(1)
        .ok_or("用法: maintenance-indicators <client_id> [start_date] [end_date] [types]")?
        .parse()
        .map_err(|_| "client_id 必须是整数")?;

    // 数据库路径可用环境变量覆写
    let db_path = std::env::var("MAINTENANCE_DB_PATH").unwrap_or_else(|_| get_default_db_path());
    tracing::info!("使用数据库: {}", db_path);

    let state = AppState::new(db_path)?;

    let query = IndicatorQuery::parse(
        args.get(2).map(String::as_str),
        args.get(3).map(String::as_str),
        args.get(4).map(String::as_str),
    )?;

    let rows = state.indicator_api.family_indicators(client_id, &query)?;
    tracing::info!("报表行数: {}", rows.len());

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
