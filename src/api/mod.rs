// ==========================================
// 设备维保绩效指标系统 - API 层
// ==========================================
// 职责: 边界校验 + 编排仓储取数与引擎计算
// ==========================================

pub mod catalog_api;
pub mod error;
pub mod indicator_api;

// 重导出核心类型
pub use catalog_api::CatalogApi;
pub use error::{ApiError, ApiResult};
pub use indicator_api::{IndicatorApi, IndicatorQuery};
