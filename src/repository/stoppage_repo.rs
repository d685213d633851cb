// ==========================================
// 设备维保绩效指标系统 - 停机仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 查询口径:
// - 日期窗口按恢复时刻 resumed_at 过滤（闭区间,按日）
// - 维保类型过滤通过 maintenance_order 联表,未传则不加该子句
// ==========================================

use crate::domain::stoppage::{MaintenanceOrder, StoppageEvent};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::ToSql;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

// ==========================================
// StoppageRepository - 停机仓储
// ==========================================

/// 停机仓储
/// 职责: 管理 stoppage_event / maintenance_order 表的查询与写入
pub struct StoppageRepository {
    conn: Arc<Mutex<Connection>>,
}

impl StoppageRepository {
    /// 创建新的停机仓储实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: String) -> RepositoryResult<Self> {
        let conn = Connection::open(&db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 按设备集合、日期范围和可选维保类型查询停机事件
    ///
    /// 口径: date(resumed_at) ∈ [start_date, end_date]（闭区间）
    ///
    /// # 参数
    /// - equipment_ids: 设备标识集合（空集合直接返回空列表）
    /// - start_date: 起始日期
    /// - end_date: 结束日期
    /// - maintenance_types: 维保类型代码集合（None = 不过滤）
    ///
    /// # 返回
    /// - Ok(Vec<StoppageEvent>): 停机事件列表（maintenance_type 已联出）
    /// - Err: 数据库错误
    pub fn find_by_equipment_and_date_range(
        &self,
        equipment_ids: &[i64],
        start_date: NaiveDate,
        end_date: NaiveDate,
        maintenance_types: Option<&[i64]>,
    ) -> RepositoryResult<Vec<StoppageEvent>> {
        if equipment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.get_conn()?;
        let start_str = start_date.format("%Y-%m-%d").to_string();
        let end_str = end_date.format("%Y-%m-%d").to_string();

        let equipment_placeholders = vec!["?"; equipment_ids.len()].join(", ");

        // 类型过滤子句按是否传入条件拼接,占位符仍参数化
        let type_clause = match maintenance_types {
            Some(types) if !types.is_empty() => {
                let type_placeholders = vec!["?"; types.len()].join(", ");
                format!("AND o.maintenance_type IN ({type_placeholders})")
            }
            _ => String::new(),
        };

        let sql = format!(
            r#"
            SELECT
                s.id, s.equipment_id, s.maintenance_order_id,
                s.onset_at, s.resumed_at, o.maintenance_type
            FROM stoppage_event s
            LEFT JOIN maintenance_order o ON o.id = s.maintenance_order_id
            WHERE s.equipment_id IN ({equipment_placeholders})
              AND date(s.resumed_at) BETWEEN ? AND ?
              {type_clause}
            ORDER BY s.id
            "#
        );

        let mut stmt = conn.prepare(&sql)?;

        let mut sql_params: Vec<&dyn ToSql> =
            equipment_ids.iter().map(|id| id as &dyn ToSql).collect();
        sql_params.push(&start_str);
        sql_params.push(&end_str);
        if let Some(types) = maintenance_types {
            if !types.is_empty() {
                sql_params.extend(types.iter().map(|t| t as &dyn ToSql));
            }
        }

        let stoppages = stmt
            .query_map(sql_params.as_slice(), |row| {
                Ok(StoppageEvent {
                    id: row.get(0)?,
                    equipment_id: row.get(1)?,
                    maintenance_order_id: row.get(2)?,
                    onset_at: parse_datetime(row.get::<_, Option<String>>(3)?),
                    resumed_at: parse_datetime(row.get::<_, Option<String>>(4)?),
                    maintenance_type: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(stoppages)
    }

    /// 插入一条停机事件
    pub fn insert(&self, stoppage: &StoppageEvent) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO stoppage_event (equipment_id, maintenance_order_id, onset_at, resumed_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                stoppage.equipment_id,
                stoppage.maintenance_order_id,
                stoppage.onset_at.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string()),
                stoppage.resumed_at.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string()),
            ],
        )?;

        Ok(())
    }

    /// 插入一张维保工单
    pub fn insert_order(&self, order: &MaintenanceOrder) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO maintenance_order (id, client_id, maintenance_type, description)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                order.id,
                order.client_id,
                order.maintenance_type,
                order.description
            ],
        )?;

        Ok(())
    }
}

/// 解析时间戳列（TEXT "YYYY-MM-DD HH:MM:SS",解析失败按缺失处理）
fn parse_datetime(raw: Option<String>) -> Option<NaiveDateTime> {
    raw.and_then(|s| NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S").ok())
}
