// ==========================================
// 设备维保绩效指标系统 - 排班领域模型
// ==========================================
// 对齐: schema work_shift_schedule 表
// 口径: 一条记录 = 一台设备在一个日期上的一个计划工作区间
// ==========================================

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// ==========================================
// ScheduledOperation - 计划工作区间
// ==========================================
// 红线: start_time/end_time 只有时分秒,不带日期。
//       跨午夜班次由 ShiftIntervalResolver 统一回卷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledOperation {
    // ===== 主键 =====
    pub id: i64,

    // ===== 关联 =====
    pub equipment_id: i64, // 关联 equipment（FK）

    // ===== 计划信息 =====
    pub planned_date: NaiveDate,        // 计划日期
    pub start_time: Option<NaiveTime>,  // 班次开始时刻（可空,空则整条跳过）
    pub end_time: Option<NaiveTime>,    // 班次结束时刻（可空,空则整条跳过）
}
