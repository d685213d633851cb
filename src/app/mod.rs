// ==========================================
// 设备维保绩效指标系统 - 应用层
// ==========================================
// 职责: 应用级装配与共享状态
// ==========================================

pub mod state;

pub use state::{get_default_db_path, AppState};
