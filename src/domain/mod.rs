// ==========================================
// 设备维保绩效指标系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与值类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod equipment;
pub mod family;
pub mod import;
pub mod indicator;
pub mod schedule;
pub mod stoppage;

// 重导出核心类型
pub use equipment::Equipment;
pub use family::Family;
pub use import::{ImportResult, RawScheduleRecord, RawStoppageRecord};
pub use indicator::{FamilyAccumulator, FamilyIndicatorRow, SkippedRecords};
pub use schedule::ScheduledOperation;
pub use stoppage::{MaintenanceOrder, StoppageEvent};
