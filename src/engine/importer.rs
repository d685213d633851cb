// ==========================================
// 设备维保绩效指标系统 - 记录导入引擎
// ==========================================
// 职责: CSV 解析 + 字段校验 + 批量入库 + 批次管理
// 红线: 不含UI逻辑,所有数据库操作通过 Repository
// ==========================================
// 行级容错: 单行解析失败记录行号与原因后跳过,
//           不中断整个批次
// ==========================================

use crate::domain::import::{ImportResult, RawScheduleRecord, RawStoppageRecord};
use crate::domain::schedule::ScheduledOperation;
use crate::domain::stoppage::StoppageEvent;
use crate::repository::schedule_repo::ScheduleRepository;
use crate::repository::stoppage_repo::StoppageRepository;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

// ==========================================
// RecordImporter - 记录导入引擎
// ==========================================
/// 记录导入引擎
///
/// # 职责
/// 1. 解析排班/停机 CSV 文件
/// 2. 字段格式校验（日期/时刻/时间戳）
/// 3. 通过 Repository 批量入库
/// 4. 生成批次号并汇总行级错误
pub struct RecordImporter {
    schedule_repo: Arc<ScheduleRepository>,
    stoppage_repo: Arc<StoppageRepository>,
}

impl RecordImporter {
    /// 创建新的记录导入引擎
    ///
    /// # 参数
    /// - schedule_repo: 排班仓储
    /// - stoppage_repo: 停机仓储
    pub fn new(
        schedule_repo: Arc<ScheduleRepository>,
        stoppage_repo: Arc<StoppageRepository>,
    ) -> Self {
        Self {
            schedule_repo,
            stoppage_repo,
        }
    }

    /// 从CSV文件导入排班记录
    ///
    /// 列: equipment_id, planned_date, start_time, end_time
    ///
    /// # 参数
    /// - file_path: CSV文件路径
    ///
    /// # 返回
    /// - ImportResult: 批次号 + 行数统计 + 行级错误明细
    pub fn import_schedules_from_csv(
        &self,
        file_path: &str,
    ) -> Result<ImportResult, Box<dyn Error>> {
        let batch_id = Uuid::new_v4().to_string();
        tracing::info!(batch_id = %batch_id, file = file_path, "开始导入排班记录");

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(file_path)?;

        let mut result = ImportResult {
            batch_id,
            total_rows: 0,
            imported: 0,
            skipped: 0,
            errors: Vec::new(),
        };

        for (idx, record) in reader.deserialize::<RawScheduleRecord>().enumerate() {
            let line_no = idx + 2; // 表头占第 1 行
            result.total_rows += 1;

            let raw = match record {
                Ok(raw) => raw,
                Err(e) => {
                    result.skipped += 1;
                    result.errors.push(format!("第{}行: CSV解析失败: {}", line_no, e));
                    continue;
                }
            };

            let schedule = match Self::map_schedule(&raw) {
                Ok(s) => s,
                Err(reason) => {
                    result.skipped += 1;
                    result.errors.push(format!("第{}行: {}", line_no, reason));
                    continue;
                }
            };

            match self.schedule_repo.insert(&schedule) {
                Ok(()) => result.imported += 1,
                Err(e) => {
                    result.skipped += 1;
                    result.errors.push(format!("第{}行: 入库失败: {}", line_no, e));
                }
            }
        }

        tracing::info!(
            batch_id = %result.batch_id,
            imported = result.imported,
            skipped = result.skipped,
            "排班记录导入完成"
        );
        Ok(result)
    }

    /// 从CSV文件导入停机事件
    ///
    /// 列: equipment_id, onset_at, resumed_at, maintenance_order_id
    ///
    /// # 参数
    /// - file_path: CSV文件路径
    ///
    /// # 返回
    /// - ImportResult: 批次号 + 行数统计 + 行级错误明细
    pub fn import_stoppages_from_csv(
        &self,
        file_path: &str,
    ) -> Result<ImportResult, Box<dyn Error>> {
        let batch_id = Uuid::new_v4().to_string();
        tracing::info!(batch_id = %batch_id, file = file_path, "开始导入停机事件");

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(file_path)?;

        let mut result = ImportResult {
            batch_id,
            total_rows: 0,
            imported: 0,
            skipped: 0,
            errors: Vec::new(),
        };

        for (idx, record) in reader.deserialize::<RawStoppageRecord>().enumerate() {
            let line_no = idx + 2;
            result.total_rows += 1;

            let raw = match record {
                Ok(raw) => raw,
                Err(e) => {
                    result.skipped += 1;
                    result.errors.push(format!("第{}行: CSV解析失败: {}", line_no, e));
                    continue;
                }
            };

            let stoppage = match Self::map_stoppage(&raw) {
                Ok(s) => s,
                Err(reason) => {
                    result.skipped += 1;
                    result.errors.push(format!("第{}行: {}", line_no, reason));
                    continue;
                }
            };

            match self.stoppage_repo.insert(&stoppage) {
                Ok(()) => result.imported += 1,
                Err(e) => {
                    result.skipped += 1;
                    result.errors.push(format!("第{}行: 入库失败: {}", line_no, e));
                }
            }
        }

        tracing::info!(
            batch_id = %result.batch_id,
            imported = result.imported,
            skipped = result.skipped,
            "停机事件导入完成"
        );
        Ok(result)
    }

    // ==========================================
    // 字段映射
    // ==========================================

    /// 原始排班行 → 领域实体（空时刻保留为 None,聚合时按缺失跳过）
    fn map_schedule(raw: &RawScheduleRecord) -> Result<ScheduledOperation, String> {
        let planned_date = NaiveDate::parse_from_str(&raw.planned_date, "%Y-%m-%d")
            .map_err(|_| format!("planned_date 格式错误: {}", raw.planned_date))?;

        Ok(ScheduledOperation {
            id: 0, // 入库时由 AUTOINCREMENT 分配
            equipment_id: raw.equipment_id,
            planned_date,
            start_time: parse_optional_time(raw.start_time.as_deref(), "start_time")?,
            end_time: parse_optional_time(raw.end_time.as_deref(), "end_time")?,
        })
    }

    /// 原始停机行 → 领域实体（空时间戳保留为 None）
    fn map_stoppage(raw: &RawStoppageRecord) -> Result<StoppageEvent, String> {
        Ok(StoppageEvent {
            id: 0,
            equipment_id: raw.equipment_id,
            maintenance_order_id: raw.maintenance_order_id,
            onset_at: parse_optional_datetime(raw.onset_at.as_deref(), "onset_at")?,
            resumed_at: parse_optional_datetime(raw.resumed_at.as_deref(), "resumed_at")?,
            maintenance_type: None, // 查询时从工单联出,不由导入填充
        })
    }
}

/// 解析可空时刻字段（空字符串视为缺失）
fn parse_optional_time(raw: Option<&str>, field: &str) -> Result<Option<NaiveTime>, String> {
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => NaiveTime::parse_from_str(s, "%H:%M:%S")
            .map(Some)
            .map_err(|_| format!("{} 格式错误: {}", field, s)),
    }
}

/// 解析可空时间戳字段（空字符串视为缺失）
fn parse_optional_datetime(
    raw: Option<&str>,
    field: &str,
) -> Result<Option<NaiveDateTime>, String> {
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .map(Some)
            .map_err(|_| format!("{} 格式错误: {}", field, s)),
    }
}
