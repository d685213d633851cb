// ==========================================
// 设备维保绩效指标系统 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为
// - 统一 busy_timeout，减少并发写入时的偶发 busy 错误
// - 提供建库脚本（内嵌 schema,首次启动/测试环境共用）
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要“每个连接”单独开启
/// - busy_timeout 需要“每个连接”单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 初始化数据库 schema（幂等,CREATE TABLE IF NOT EXISTS）
///
/// 表:
/// - equipment_family: 设备族目录
/// - equipment: 设备目录（family_id 可空）
/// - work_shift_schedule: 计划工作区间（时刻列为 TEXT "HH:MM:SS",可空）
/// - maintenance_order: 维保工单（类型代码来源）
/// - stoppage_event: 停机事件（时间戳列为 TEXT "YYYY-MM-DD HH:MM:SS",可空）
/// - config_kv: 全局配置键值
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS equipment_family (
            id          INTEGER PRIMARY KEY,
            client_id   INTEGER NOT NULL,
            name        TEXT
        );

        CREATE TABLE IF NOT EXISTS equipment (
            id          INTEGER PRIMARY KEY,
            client_id   INTEGER NOT NULL,
            family_id   INTEGER REFERENCES equipment_family(id),
            tag         TEXT
        );

        CREATE TABLE IF NOT EXISTS work_shift_schedule (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            equipment_id    INTEGER NOT NULL REFERENCES equipment(id),
            planned_date    TEXT NOT NULL,
            start_time      TEXT,
            end_time        TEXT
        );

        CREATE TABLE IF NOT EXISTS maintenance_order (
            id                  INTEGER PRIMARY KEY,
            client_id           INTEGER NOT NULL,
            maintenance_type    INTEGER,
            description         TEXT
        );

        CREATE TABLE IF NOT EXISTS stoppage_event (
            id                      INTEGER PRIMARY KEY AUTOINCREMENT,
            equipment_id            INTEGER NOT NULL REFERENCES equipment(id),
            maintenance_order_id    INTEGER REFERENCES maintenance_order(id),
            onset_at                TEXT,
            resumed_at              TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_schedule_equipment_date
            ON work_shift_schedule(equipment_id, planned_date);
        CREATE INDEX IF NOT EXISTS idx_stoppage_equipment_resumed
            ON stoppage_event(equipment_id, resumed_at);

        CREATE TABLE IF NOT EXISTS config_kv (
            scope_id    TEXT NOT NULL DEFAULT 'global',
            key         TEXT NOT NULL,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (scope_id, key)
        );
        "#,
    )
}
