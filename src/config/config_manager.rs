// ==========================================
// 设备维保绩效指标系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写
// 存储: config_kv 表 (key-value, scope_id='global')
// ==========================================

use crate::db::open_sqlite_connection;
use rusqlite::{params, Connection};
use std::error::Error;
use std::sync::{Arc, Mutex};

// ==========================================
// 配置键全集
// ==========================================
pub mod config_keys {
    /// 指标查询默认窗口天数（未传日期时: 今天往前 N 天,含今天）
    pub const DEFAULT_WINDOW_DAYS: &str = "indicator/default_window_days";

    /// 空白族名称的占位显示名
    pub const UNNAMED_FAMILY_LABEL: &str = "indicator/unnamed_family_label";
}

/// 默认窗口天数
pub const DEFAULT_WINDOW_DAYS_FALLBACK: i64 = 30;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：为保证连接行为一致，会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    ///
    /// # 参数
    /// - key: 配置键
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// 写入 global scope 的配置值（存在则覆写）
    pub fn set_global_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        conn.execute(
            r#"
            INSERT INTO config_kv (scope_id, key, value, updated_at)
            VALUES ('global', ?1, ?2, datetime('now'))
            ON CONFLICT(scope_id, key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value],
        )?;

        Ok(())
    }

    /// 读取默认窗口天数
    ///
    /// 配置缺失或非法时回退编译期默认值（30）,非法值记 warn
    pub fn get_default_window_days(&self) -> Result<i64, Box<dyn Error>> {
        match self.get_config_value(config_keys::DEFAULT_WINDOW_DAYS)? {
            None => Ok(DEFAULT_WINDOW_DAYS_FALLBACK),
            Some(raw) => match raw.parse::<i64>() {
                Ok(days) if days > 0 => Ok(days),
                _ => {
                    tracing::warn!(
                        key = config_keys::DEFAULT_WINDOW_DAYS,
                        value = %raw,
                        "配置值非法,回退默认窗口天数"
                    );
                    Ok(DEFAULT_WINDOW_DAYS_FALLBACK)
                }
            },
        }
    }

    /// 读取空白族名占位符
    ///
    /// 配置缺失时回退旧系统字面量
    pub fn get_unnamed_family_label(&self) -> Result<String, Box<dyn Error>> {
        Ok(self
            .get_config_value(config_keys::UNNAMED_FAMILY_LABEL)?
            .unwrap_or_else(|| crate::engine::indicator::UNNAMED_FAMILY_LABEL.to_string()))
    }
}
