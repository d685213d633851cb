// ==========================================
// 设备维保绩效指标系统 - 导入领域模型
// ==========================================
// 职责: CSV 导入的原始行与导入结果
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RawScheduleRecord - 排班 CSV 原始行
// ==========================================
// 列: equipment_id, planned_date, start_time, end_time
// 时刻列允许为空（保留为 None,聚合时按缺失跳过）
#[derive(Debug, Clone, Deserialize)]
pub struct RawScheduleRecord {
    pub equipment_id: i64,
    pub planned_date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

// ==========================================
// RawStoppageRecord - 停机 CSV 原始行
// ==========================================
// 列: equipment_id, onset_at, resumed_at, maintenance_order_id
#[derive(Debug, Clone, Deserialize)]
pub struct RawStoppageRecord {
    pub equipment_id: i64,
    pub onset_at: Option<String>,
    pub resumed_at: Option<String>,
    pub maintenance_order_id: Option<i64>,
}

// ==========================================
// ImportResult - 导入结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResult {
    pub batch_id: String,     // 批次号（uuid v4）
    pub total_rows: usize,    // 文件总行数（不含表头）
    pub imported: usize,      // 成功入库行数
    pub skipped: usize,       // 解析失败跳过行数
    pub errors: Vec<String>,  // 行级错误明细（行号 + 原因）
}
