// ==========================================
// 设备维保绩效指标系统 - 引擎层
// ==========================================
// 职责: 实现指标业务规则,不拼 SQL
// 红线: 引擎无状态,纯函数,不做 I/O
// ==========================================
// 数据流:
//   仓储取数 → FamilyAggregationEngine（按族归集时长）
//            → IndicatorCalculator（DF/MTBF/MTTR）
//            → IndicatorReportAssembler（按族目录逐行输出）
// ==========================================

pub mod aggregation;
pub mod importer;
pub mod indicator;
pub mod shift_interval;

// 重导出核心引擎
pub use aggregation::{AggregationOutcome, FamilyAggregationEngine};
pub use importer::RecordImporter;
pub use indicator::{IndicatorCalculator, IndicatorReportAssembler};
pub use shift_interval::ShiftIntervalResolver;
