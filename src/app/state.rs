// ==========================================
// 设备维保绩效指标系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::api::{CatalogApi, IndicatorApi};
use crate::config::config_manager::ConfigManager;
use crate::engine::importer::RecordImporter;
use crate::repository::{
    equipment_repo::EquipmentRepository, family_repo::FamilyRepository,
    schedule_repo::ScheduleRepository, stoppage_repo::StoppageRepository,
};

/// 应用状态
///
/// 所有仓储和API共享同一个 SQLite 连接（Mutex 串行化访问）
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 指标报表API
    pub indicator_api: Arc<IndicatorApi>,

    /// 目录查询API
    pub catalog_api: Arc<CatalogApi>,

    /// 记录导入引擎
    pub importer: Arc<RecordImporter>,

    /// 配置管理器
    pub config: Arc<ConfigManager>,

    /// 仓储层（测试数据准备与脚本用）
    pub family_repo: Arc<FamilyRepository>,
    pub equipment_repo: Arc<EquipmentRepository>,
    pub schedule_repo: Arc<ScheduleRepository>,
    pub stoppage_repo: Arc<StoppageRepository>,
}

impl AppState {
    /// 创建应用状态
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    ///
    /// # 流程
    /// 1. 打开连接并应用统一 PRAGMA
    /// 2. 初始化 schema（幂等）
    /// 3. 装配仓储、配置、引擎和 API
    pub fn new(db_path: String) -> Result<Self, Box<dyn std::error::Error>> {
        let conn = crate::db::open_sqlite_connection(&db_path)?;
        crate::db::init_schema(&conn)?;
        let conn = Arc::new(Mutex::new(conn));

        // ==========================================
        // 仓储层
        // ==========================================
        let family_repo = Arc::new(FamilyRepository::from_connection(conn.clone()));
        let equipment_repo = Arc::new(EquipmentRepository::from_connection(conn.clone()));
        let schedule_repo = Arc::new(ScheduleRepository::from_connection(conn.clone()));
        let stoppage_repo = Arc::new(StoppageRepository::from_connection(conn.clone()));

        // ==========================================
        // 配置层
        // ==========================================
        let config = Arc::new(ConfigManager::from_connection(conn.clone())?);

        // ==========================================
        // API 层 + 导入引擎
        // ==========================================
        let indicator_api = Arc::new(IndicatorApi::new(
            family_repo.clone(),
            equipment_repo.clone(),
            schedule_repo.clone(),
            stoppage_repo.clone(),
            config.clone(),
        ));
        let catalog_api = Arc::new(CatalogApi::new(
            family_repo.clone(),
            equipment_repo.clone(),
            schedule_repo.clone(),
            stoppage_repo.clone(),
        ));
        let importer = Arc::new(RecordImporter::new(
            schedule_repo.clone(),
            stoppage_repo.clone(),
        ));

        Ok(Self {
            db_path,
            indicator_api,
            catalog_api,
            importer,
            config,
            family_repo,
            equipment_repo,
            schedule_repo,
            stoppage_repo,
        })
    }
}

/// 获取默认数据库路径（用户数据目录下）
pub fn get_default_db_path() -> String {
    let base = dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    base.join("maintenance-indicators")
        .join("maintenance.db")
        .to_string_lossy()
        .to_string()
}
