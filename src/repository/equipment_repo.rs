// ==========================================
// 设备维保绩效指标系统 - 设备仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::equipment::Equipment;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

// ==========================================
// EquipmentRepository - 设备仓储
// ==========================================

/// 设备仓储
/// 职责: 管理 equipment 表的查询与写入
pub struct EquipmentRepository {
    conn: Arc<Mutex<Connection>>,
}

impl EquipmentRepository {
    /// 创建新的设备仓储实例
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

    /// 查询某客户的全部设备
    ///
    /// # 参数
    /// - client_id: 客户标识
    ///
    /// # 返回
    /// - Ok(Vec<Equipment>): 设备列表（含 family_id 为空的设备）
    /// - Err: 数据库错误
    pub fn find_by_client(&self, client_id: i64) -> RepositoryResult<Vec<Equipment>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT id, client_id, family_id, tag
            FROM equipment
            WHERE client_id = ?1
            ORDER BY id
            "#,
        )?;

        let equipment = stmt
            .query_map(params![client_id], |row| {
                Ok(Equipment {
                    id: row.get(0)?,
                    client_id: row.get(1)?,
                    family_id: row.get(2)?,
                    tag: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(equipment)
    }

    /// 插入一台设备
    pub fn insert(&self, equipment: &Equipment) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO equipment (id, client_id, family_id, tag)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                equipment.id,
                equipment.client_id,
                equipment.family_id,
                equipment.tag
            ],
        )?;

        Ok(())
    }
}
