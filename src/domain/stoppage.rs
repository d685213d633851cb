// ==========================================
// 设备维保绩效指标系统 - 停机领域模型
// ==========================================
// 对齐: schema stoppage_event / maintenance_order 表
// ==========================================
// 命名口径: 旧系统字段 data_hora_stop/data_hora_start 语义倒置
// （"stop" 在时间上更早）。本系统统一改名:
//   onset_at   = 故障发生时刻（更早）
//   resumed_at = 恢复运行时刻（更晚）
// 停机时长 = resumed_at - onset_at
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// StoppageEvent - 停机事件
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoppageEvent {
    // ===== 主键 =====
    pub id: i64,

    // ===== 关联 =====
    pub equipment_id: i64,                  // 关联 equipment（FK）
    pub maintenance_order_id: Option<i64>,  // 关联 maintenance_order（FK,可空）

    // ===== 停机区间 =====
    pub onset_at: Option<NaiveDateTime>,   // 故障发生时刻（可空,空则整条跳过）
    pub resumed_at: Option<NaiveDateTime>, // 恢复运行时刻（可空,空则整条跳过）

    // ===== 工单信息（查询时从 maintenance_order 联出）=====
    pub maintenance_type: Option<i64>, // 维保类型代码
}

// ==========================================
// MaintenanceOrder - 维保工单
// ==========================================
// 用途: 停机事件的类型来源,指标查询按类型过滤
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceOrder {
    pub id: i64,
    pub client_id: i64,
    pub maintenance_type: Option<i64>, // 维保类型代码（正整数）
    pub description: Option<String>,
}
