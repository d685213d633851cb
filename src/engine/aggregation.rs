// ==========================================
// 设备维保绩效指标系统 - 族归集引擎
// ==========================================
// 职责: 把排班与停机记录的时长归集进各设备族的累加器
// 输入: 设备→族查找表 + 排班记录 + 停机记录
//       （停机记录已在仓储边界按日期窗口/维保类型过滤）
// 输出: 族标识 → FamilyAccumulator + 跳过记录诊断计数
// ==========================================
// 口径:
// - 设备无族或记录缺起止时刻: 整条跳过,只计入诊断计数
// - 排班时长经 ShiftIntervalResolver 回卷,永不为负
// - 停机时长 = resumed_at - onset_at（含日期的完整相减）,
//   时间戳倒置时可 为负,按原样归集,不拒绝不截断
// - 逐条加法满足交换律,输入顺序不影响最终合计
// ==========================================

use crate::domain::equipment::Equipment;
use crate::domain::indicator::{FamilyAccumulator, SkippedRecords};
use crate::domain::schedule::ScheduledOperation;
use crate::domain::stoppage::StoppageEvent;
use crate::engine::shift_interval::ShiftIntervalResolver;
use std::collections::HashMap;


// ==========================================
// AggregationOutcome - 归集结果
// ==========================================
#[derive(Debug, Default)]
pub struct AggregationOutcome {
    /// 族标识 → 累加器（只含有数据的族,无数据族由报表装配补零行）
    pub accumulators: HashMap<i64, FamilyAccumulator>,
    /// 跳过记录诊断计数
    pub skipped: SkippedRecords,
}

// ==========================================
// FamilyAggregationEngine - 族归集引擎
// ==========================================
// 红线: 无状态引擎,每次调用新建累加器,不跨请求保留
pub struct FamilyAggregationEngine {
    resolver: ShiftIntervalResolver,
}

impl FamilyAggregationEngine {
    /// 创建新的族归集引擎
    pub fn new() -> Self {
        Self {
            resolver: ShiftIntervalResolver::new(),
        }
    }

    /// 从设备目录构建设备→族查找表
    ///
    /// 只收录有族的设备;无族设备不进表,其记录随后按“无族”跳过
    ///
    /// # 参数
    /// - `equipment`: 设备目录
    ///
    /// # 返回
    /// 设备标识 → 族标识
    pub fn build_family_lookup(equipment: &[Equipment]) -> HashMap<i64, i64> {
        equipment
            .iter()
            .filter_map(|e| e.family_id.map(|family_id| (e.id, family_id)))
            .collect()
    }

    /// 归集排班与停机记录
    ///
    /// # 参数
    /// - `family_lookup`: 设备→族查找表
    /// - `schedules`: 排班记录列表
    /// - `stoppages`: 停机记录列表
    ///
    /// # 返回
    /// 归集结果（族累加器 + 诊断计数）
    pub fn aggregate(
        &self,
        family_lookup: &HashMap<i64, i64>,
        schedules: &[ScheduledOperation],
        stoppages: &[StoppageEvent],
    ) -> AggregationOutcome {
        let mut outcome = AggregationOutcome::default();

        // 1. 排班: 班次时长 → 族计划小时
        for schedule in schedules {
            let family_id = match family_lookup.get(&schedule.equipment_id) {
                Some(id) => *id,
                None => {
                    outcome.skipped.schedules_without_family += 1;
                    continue;
                }
            };

            let (start, end) = match (schedule.start_time, schedule.end_time) {
                (Some(start), Some(end)) => (start, end),
                _ => {
                    outcome.skipped.schedules_without_times += 1;
                    continue;
                }
            };

            let hours = self.resolver.resolve(start, end);
            outcome
                .accumulators
                .entry(family_id)
                .or_default()
                .add_scheduled(hours);
        }

        // 2. 停机: 完整时间戳相减 → 族停机小时 + 停机计数
        for stoppage in stoppages {
            let family_id = match family_lookup.get(&stoppage.equipment_id) {
                Some(id) => *id,
                None => {
                    outcome.skipped.stoppages_without_family += 1;
                    continue;
                }
            };

            let (onset, resumed) = match (stoppage.onset_at, stoppage.resumed_at) {
                (Some(onset), Some(resumed)) => (onset, resumed),
                _ => {
                    outcome.skipped.stoppages_without_times += 1;
                    continue;
                }
            };

            let hours = (resumed - onset).num_seconds() as f64 / 3600.0;
            outcome
                .accumulators
                .entry(family_id)
                .or_default()
                .add_stoppage(hours);
        }

        outcome
    }
}

impl Default for FamilyAggregationEngine {
    fn default() -> Self {
        Self::new()
    }
}
