// ==========================================
// 设备维保绩效指标系统 - 班次区间解析引擎
// ==========================================
// 职责: 把 (开始时刻, 结束时刻) 解析为小时数
// 输入: 两个时分秒时刻,不带日期
// 输出: 非负小时数
// ==========================================
// 口径: 原始差值为负说明班次跨午夜,加 24 小时回卷。
//       0 小时班次与恰好回卷 24 小时的班次从输入上不可区分,
//       统一按“负差值 = 跨午夜”处理,永不输出负值
// ==========================================

use chrono::NaiveTime;

// ==========================================
// ShiftIntervalResolver - 班次区间解析引擎
// ==========================================
// 红线: 无状态引擎,所有方法都是纯函数
pub struct ShiftIntervalResolver;

impl ShiftIntervalResolver {
    /// 创建新的班次区间解析引擎
    pub fn new() -> Self {
        Self
    }

    /// 解析班次时长（小时）
    ///
    /// # 参数
    /// - `start`: 班次开始时刻
    /// - `end`: 班次结束时刻
    ///
    /// # 返回
    /// 班次时长（小时,非负;跨午夜班次已回卷 +24h）
    pub fn resolve(&self, start: NaiveTime, end: NaiveTime) -> f64 {
        let mut hours = (end - start).num_seconds() as f64 / 3600.0;
        if hours < 0.0 {
            hours += 24.0;
        }
        hours
    }
}

impl Default for ShiftIntervalResolver {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
