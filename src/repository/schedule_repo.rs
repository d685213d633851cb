// ==========================================
// 设备维保绩效指标系统 - 排班仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::schedule::ScheduledOperation;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::types::ToSql;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

// ==========================================
// ScheduleRepository - 排班仓储
// ==========================================

/// 排班仓储
/// 职责: 管理 work_shift_schedule 表的查询与写入
pub struct ScheduleRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ScheduleRepository {
    /// 创建新的排班仓储实例
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

    /// 按设备集合和日期范围查询排班记录
    ///
    /// 口径: planned_date ∈ [start_date, end_date]（闭区间）
    ///
    /// # 参数
    /// - equipment_ids: 设备标识集合（空集合直接返回空列表）
    /// - start_date: 起始日期
    /// - end_date: 结束日期
    ///
    /// # 返回
    /// - Ok(Vec<ScheduledOperation>): 排班记录列表
    /// - Err: 数据库错误
    pub fn find_by_equipment_and_date_range(
        &self,
        equipment_ids: &[i64],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> RepositoryResult<Vec<ScheduledOperation>> {
        if equipment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.get_conn()?;
        let start_str = start_date.format("%Y-%m-%d").to_string();
        let end_str = end_date.format("%Y-%m-%d").to_string();

        // IN 占位符按设备数展开,仍为参数化查询
        let placeholders = vec!["?"; equipment_ids.len()].join(", ");
        let sql = format!(
            r#"
            SELECT id, equipment_id, planned_date, start_time, end_time
            FROM work_shift_schedule
            WHERE equipment_id IN ({placeholders})
              AND planned_date BETWEEN ? AND ?
            ORDER BY id
            "#
        );

        let mut stmt = conn.prepare(&sql)?;

        let mut sql_params: Vec<&dyn ToSql> =
            equipment_ids.iter().map(|id| id as &dyn ToSql).collect();
        sql_params.push(&start_str);
        sql_params.push(&end_str);

        let schedules = stmt
            .query_map(sql_params.as_slice(), |row| {
                Ok(ScheduledOperation {
                    id: row.get(0)?,
                    equipment_id: row.get(1)?,
                    planned_date: parse_date(&row.get::<_, String>(2)?),
                    start_time: parse_time(row.get::<_, Option<String>>(3)?),
                    end_time: parse_time(row.get::<_, Option<String>>(4)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(schedules)
    }

    /// 插入一条排班记录
    pub fn insert(&self, schedule: &ScheduledOperation) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO work_shift_schedule (equipment_id, planned_date, start_time, end_time)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                schedule.equipment_id,
                schedule.planned_date.format("%Y-%m-%d").to_string(),
                schedule.start_time.map(|t| t.format("%H:%M:%S").to_string()),
                schedule.end_time.map(|t| t.format("%H:%M:%S").to_string()),
            ],
        )?;

        Ok(())
    }
}

/// 解析日期列（TEXT "YYYY-MM-DD"）
fn parse_date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap())
}

/// 解析时刻列（TEXT "HH:MM:SS",解析失败按缺失处理）
fn parse_time(raw: Option<String>) -> Option<NaiveTime> {
    raw.and_then(|s| NaiveTime::parse_from_str(&s, "%H:%M:%S").ok())
}
