// ==========================================
// 设备维保绩效指标系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 按设备族计算维保可靠性指标
//           （DF 可用率 / MTBF / MTTR）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA/schema 统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    Equipment, Family, FamilyAccumulator, FamilyIndicatorRow, ImportResult, MaintenanceOrder,
    ScheduledOperation, SkippedRecords, StoppageEvent,
};

// 引擎
pub use engine::{
    FamilyAggregationEngine, IndicatorCalculator, IndicatorReportAssembler, RecordImporter,
    ShiftIntervalResolver,
};

// API
pub use api::{CatalogApi, IndicatorApi, IndicatorQuery};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "设备维保绩效指标系统";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
