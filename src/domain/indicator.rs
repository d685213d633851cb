// ==========================================
// 设备维保绩效指标系统 - 指标领域模型
// ==========================================
// 职责: 聚合中间量与报表输出行
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// FamilyAccumulator - 族累加器
// ==========================================
// 生命周期: 每次聚合调用新建,聚合结束即丢弃,不跨请求保留
// 红线: 累加全程保留完整精度,只在输出边界做两位小数舍入
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FamilyAccumulator {
    pub scheduled_hours: f64, // 计划工作小时合计（P）
    pub stoppage_hours: f64,  // 停机小时合计（C,时间戳倒置时可为负,按原样保留）
    pub stoppage_count: u32,  // 停机次数（N,原始值,除法时才垫底为 1）
}

impl FamilyAccumulator {
    /// 计入一条排班时长
    pub fn add_scheduled(&mut self, hours: f64) {
        self.scheduled_hours += hours;
    }

    /// 计入一条停机时长并加一次停机计数
    pub fn add_stoppage(&mut self, hours: f64) {
        self.stoppage_hours += hours;
        self.stoppage_count += 1;
    }
}

// ==========================================
// SkippedRecords - 跳过记录诊断计数
// ==========================================
// 口径: 缺失关联/缺失时刻属于源数据不完整,跳过该条继续聚合,
//       不是系统错误。计数仅用于可观测性
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkippedRecords {
    pub schedules_without_family: u32, // 排班: 设备无族
    pub schedules_without_times: u32,  // 排班: 缺起止时刻
    pub stoppages_without_family: u32, // 停机: 设备无族
    pub stoppages_without_times: u32,  // 停机: 缺起止时间戳
}

impl SkippedRecords {
    /// 跳过总数
    pub fn total(&self) -> u32 {
        self.schedules_without_family
            + self.schedules_without_times
            + self.stoppages_without_family
            + self.stoppages_without_times
    }
}

// ==========================================
// FamilyIndicatorRow - 指标报表输出行
// ==========================================
// 序列化字段名对齐 sofman 旧系统报表契约
// （前端 performance-indicator 表格直接消费）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FamilyIndicatorRow {
    /// 族显示名称（空名称用占位符）
    #[serde(rename = "Familia")]
    pub family: String,

    /// 可用率（百分比,两位小数。C > P 时为负,不截断）
    #[serde(rename = "DF")]
    pub df: f64,

    /// 平均故障间隔（小时,两位小数）
    #[serde(rename = "MTBF")]
    pub mtbf: f64,

    /// 平均修复时间（小时,两位小数）
    #[serde(rename = "MTTR")]
    pub mttr: f64,

    /// 停机次数（原始计数,不舍入）
    #[serde(rename = "Paradas")]
    pub stoppage_count: u32,

    /// 计划工作小时合计（两位小数）
    #[serde(rename = "tempo_prev")]
    pub scheduled_hours: f64,

    /// 停机小时合计（两位小数）
    #[serde(rename = "tempo_corretiva")]
    pub stoppage_hours: f64,
}
