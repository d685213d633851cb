// ==========================================
// 设备维保绩效指标系统 - 设备族仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::family::Family;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

// ==========================================
// FamilyRepository - 设备族仓储
// ==========================================

/// 设备族仓储
/// 职责: 管理 equipment_family 表的查询与写入
pub struct FamilyRepository {
    conn: Arc<Mutex<Connection>>,
}

impl FamilyRepository {
    /// 创建新的设备族仓储实例
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

    /// 查询某客户的全部设备族（目录序 = 主键序,稳定）
    ///
    /// # 参数
    /// - client_id: 客户标识
    ///
    /// # 返回
    /// - Ok(Vec<Family>): 设备族列表（可能为空）
    /// - Err: 数据库错误
    pub fn find_by_client(&self, client_id: i64) -> RepositoryResult<Vec<Family>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT id, client_id, name
            FROM equipment_family
            WHERE client_id = ?1
            ORDER BY id
            "#,
        )?;

        let families = stmt
            .query_map(params![client_id], |row| {
                Ok(Family {
                    id: row.get(0)?,
                    client_id: row.get(1)?,
                    name: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(families)
    }

    /// 插入一个设备族
    pub fn insert(&self, family: &Family) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO equipment_family (id, client_id, name)
            VALUES (?1, ?2, ?3)
            "#,
            params![family.id, family.client_id, family.name],
        )?;

        Ok(())
    }
}
