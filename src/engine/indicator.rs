// ==========================================
// 设备维保绩效指标系统 - 指标计算与报表装配引擎
// ==========================================
// 职责: 由族累加器导出 DF/MTBF/MTTR,并按族目录装配输出行
// ==========================================
// 口径（纯算术,无 I/O,无重试）:
//   P = 计划小时, C = 停机小时, N = 停机次数
//   D = N (N>0) 否则 1        —— 垫底除数,输出仍保留原始 N
//   DF = (P-C)/P × 100 (P>0) 否则 0 —— C>P 时为负,按设计保留
//   MTBF = (P-C)/D
//   MTTR = C/D
//   全部结果在输出边界舍入到两位小数
// ==========================================

use crate::domain::family::Family;
use crate::domain::indicator::{FamilyAccumulator, FamilyIndicatorRow};
use std::collections::HashMap;

#[cfg(test)]
mod tests;

/// 空白族名称的占位显示名（旧系统契约字面量）
pub const UNNAMED_FAMILY_LABEL: &str = "SEM FAMÍLIA";

/// 输出边界的两位小数舍入
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ==========================================
// IndicatorCalculator - 指标计算引擎
// ==========================================
// 红线: 无状态引擎,所有方法都是纯函数
pub struct IndicatorCalculator;

impl IndicatorCalculator {
    /// 创建新的指标计算引擎
    pub fn new() -> Self {
        Self
    }

    /// 由单个族累加器计算一行指标
    ///
    /// # 参数
    /// - `family_name`: 族显示名称（已处理占位符）
    /// - `acc`: 族累加器（无数据族传全零累加器）
    ///
    /// # 返回
    /// 指标输出行（数值已两位小数舍入,停机次数保留原始值）
    pub fn calculate(&self, family_name: &str, acc: &FamilyAccumulator) -> FamilyIndicatorRow {
        let scheduled = acc.scheduled_hours;
        let stoppage = acc.stoppage_hours;
        // 除数垫底为 1,避免除零;输出中的次数保留原始值
        let divisor = if acc.stoppage_count > 0 {
            acc.stoppage_count as f64
        } else {
            1.0
        };

        let df = if scheduled > 0.0 {
            (scheduled - stoppage) / scheduled * 100.0
        } else {
            0.0
        };
        let mtbf = (scheduled - stoppage) / divisor;
        let mttr = stoppage / divisor;

        FamilyIndicatorRow {
            family: family_name.to_string(),
            df: round2(df),
            mtbf: round2(mtbf),
            mttr: round2(mttr),
            stoppage_count: acc.stoppage_count,
            scheduled_hours: round2(scheduled),
            stoppage_hours: round2(stoppage),
        }
    }
}

impl Default for IndicatorCalculator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// IndicatorReportAssembler - 报表装配引擎
// ==========================================
// 红线: 按族目录顺序输出,每个族恰好一行,
//       无数据族补全零行,绝不省略
pub struct IndicatorReportAssembler {
    calculator: IndicatorCalculator,
    unnamed_label: String,
}

impl IndicatorReportAssembler {
    /// 创建新的报表装配引擎（默认占位名）
    pub fn new() -> Self {
        Self::with_unnamed_label(UNNAMED_FAMILY_LABEL.to_string())
    }

    /// 创建新的报表装配引擎,指定空白族名占位符
    ///
    /// # 参数
    /// - `unnamed_label`: 族名称为空时的显示名
    pub fn with_unnamed_label(unnamed_label: String) -> Self {
        Self {
            calculator: IndicatorCalculator::new(),
            unnamed_label,
        }
    }

    /// 装配指标报表
    ///
    /// # 参数
    /// - `families`: 族目录（目录序,不重排）
    /// - `accumulators`: 族标识 → 累加器（缺失按全零处理）
    ///
    /// # 返回
    /// 每个目录族一行的指标报表
    pub fn assemble(
        &self,
        families: &[Family],
        accumulators: &HashMap<i64, FamilyAccumulator>,
    ) -> Vec<FamilyIndicatorRow> {
        let zero = FamilyAccumulator::default();

        families
            .iter()
            .map(|family| {
                let acc = accumulators.get(&family.id).unwrap_or(&zero);
                let name = family.display_name().unwrap_or(&self.unnamed_label);
                self.calculator.calculate(name, acc)
            })
            .collect()
    }
}

impl Default for IndicatorReportAssembler {
    fn default() -> Self {
        Self::new()
    }
}
