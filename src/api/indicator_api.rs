// ==========================================
// 设备维保绩效指标系统 - 指标报表 API
// ==========================================
// 职责: 边界校验（日期/类型过滤）、默认窗口解析、
//       编排仓储取数 → 族归集 → 指标计算 → 报表装配
// 红线: 核心聚合不做 I/O;全部取数在引擎执行前完成
// ==========================================

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};

use crate::api::error::{ApiError, ApiResult};
use crate::config::config_manager::ConfigManager;
use crate::domain::indicator::FamilyIndicatorRow;
use crate::engine::aggregation::FamilyAggregationEngine;
use crate::engine::indicator::IndicatorReportAssembler;
use crate::repository::equipment_repo::EquipmentRepository;
use crate::repository::family_repo::FamilyRepository;
use crate::repository::schedule_repo::ScheduleRepository;
use crate::repository::stoppage_repo::StoppageRepository;

// ==========================================
// IndicatorQuery - 指标查询参数
// ==========================================

/// 指标查询参数（已通过边界校验）
#[derive(Debug, Clone, Default)]
pub struct IndicatorQuery {
    /// 起始日期（None = 按默认窗口解析）
    pub start_date: Option<NaiveDate>,
    /// 结束日期（None = 今天）
    pub end_date: Option<NaiveDate>,
    /// 维保类型过滤（None = 不过滤）
    pub maintenance_types: Option<Vec<i64>>,
}

impl IndicatorQuery {
    /// 从原始查询串解析并校验参数
    ///
    /// 校验规则:
    /// - 日期必须是合法的 "YYYY-MM-DD"
    /// - 类型过滤必须是逗号分隔的正整数
    /// 任何一项不合法都在核心执行前拒绝
    ///
    /// # 参数
    /// - start_date: 起始日期串（可空）
    /// - end_date: 结束日期串（可空）
    /// - maintenance_types: 类型过滤串,如 "1,3,7"（可空）
    ///
    /// # 返回
    /// - Ok(IndicatorQuery): 校验通过的参数
    /// - Err(ApiError::InvalidInput): 校验失败
    pub fn parse(
        start_date: Option<&str>,
        end_date: Option<&str>,
        maintenance_types: Option<&str>,
    ) -> ApiResult<Self> {
        let start_date = start_date.map(parse_query_date).transpose()?;
        let end_date = end_date.map(parse_query_date).transpose()?;
        let maintenance_types = maintenance_types
            .map(parse_maintenance_types)
            .transpose()?;

        Ok(Self {
            start_date,
            end_date,
            maintenance_types,
        })
    }
}

/// 解析查询日期串
fn parse_query_date(raw: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ApiError::InvalidInput(format!("日期格式非法: {}", raw)))
}

/// 解析维保类型过滤串（逗号分隔的正整数）
fn parse_maintenance_types(raw: &str) -> ApiResult<Vec<i64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput(
            "维保类型过滤不能为空串".to_string(),
        ));
    }

    trimmed
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .ok()
                .filter(|code| *code > 0)
                .ok_or_else(|| {
                    ApiError::InvalidInput(format!(
                        "维保类型必须是逗号分隔的正整数: {}",
                        raw
                    ))
                })
        })
        .collect()
}

// ==========================================
// IndicatorApi - 指标报表 API
// ==========================================

/// 指标报表API
///
/// 职责：
/// 1. 解析默认日期窗口（配置驱动,默认最近30天含今天）
/// 2. 空目录短路（族目录/设备目录为空 → 空报表,不是错误）
/// 3. 编排四路取数与三个引擎的单次同步批计算
pub struct IndicatorApi {
    family_repo: Arc<FamilyRepository>,
    equipment_repo: Arc<EquipmentRepository>,
    schedule_repo: Arc<ScheduleRepository>,
    stoppage_repo: Arc<StoppageRepository>,
    config: Arc<ConfigManager>,
    aggregation: FamilyAggregationEngine,
}

impl IndicatorApi {
    /// 创建新的IndicatorApi实例
    ///
    /// # 参数
    /// - family_repo: 设备族仓储
    /// - equipment_repo: 设备仓储
    /// - schedule_repo: 排班仓储
    /// - stoppage_repo: 停机仓储
    /// - config: 配置管理器
    pub fn new(
        family_repo: Arc<FamilyRepository>,
        equipment_repo: Arc<EquipmentRepository>,
        schedule_repo: Arc<ScheduleRepository>,
        stoppage_repo: Arc<StoppageRepository>,
        config: Arc<ConfigManager>,
    ) -> Self {
        Self {
            family_repo,
            equipment_repo,
            schedule_repo,
            stoppage_repo,
            config,
            aggregation: FamilyAggregationEngine::new(),
        }
    }

    /// 计算某客户的族指标报表
    ///
    /// 输出: 族目录中每个族恰好一行（目录序,无数据族补零行）,
    ///       字段含 DF/MTBF/MTTR/停机次数/计划小时/停机小时
    ///
    /// # 参数
    /// - client_id: 客户标识
    /// - query: 已校验的查询参数
    ///
    /// # 返回
    /// - Ok(Vec<FamilyIndicatorRow>): 指标报表（可能为空）
    /// - Err(ApiError): 取数失败
    pub fn family_indicators(
        &self,
        client_id: i64,
        query: &IndicatorQuery,
    ) -> ApiResult<Vec<FamilyIndicatorRow>> {
        let (start_date, end_date) = self.resolve_window(query)?;
        tracing::debug!(
            client_id,
            %start_date,
            %end_date,
            types = ?query.maintenance_types,
            "开始计算族指标报表"
        );

        // 1. 族目录（空 → 空报表短路）
        let families = self.family_repo.find_by_client(client_id)?;
        if families.is_empty() {
            return Ok(Vec::new());
        }

        // 2. 设备目录（空 → 空报表短路）
        let equipment = self.equipment_repo.find_by_client(client_id)?;
        if equipment.is_empty() {
            return Ok(Vec::new());
        }
        let equipment_ids: Vec<i64> = equipment.iter().map(|e| e.id).collect();

        // 3. 窗口内排班与停机记录
        let schedules = self.schedule_repo.find_by_equipment_and_date_range(
            &equipment_ids,
            start_date,
            end_date,
        )?;
        let stoppages = self.stoppage_repo.find_by_equipment_and_date_range(
            &equipment_ids,
            start_date,
            end_date,
            query.maintenance_types.as_deref(),
        )?;

        // 4. 族归集（无族/缺时刻记录在此跳过并计数）
        let family_lookup = FamilyAggregationEngine::build_family_lookup(&equipment);
        let outcome = self
            .aggregation
            .aggregate(&family_lookup, &schedules, &stoppages);

        if outcome.skipped.total() > 0 {
            tracing::debug!(
                schedules_without_family = outcome.skipped.schedules_without_family,
                schedules_without_times = outcome.skipped.schedules_without_times,
                stoppages_without_family = outcome.skipped.stoppages_without_family,
                stoppages_without_times = outcome.skipped.stoppages_without_times,
                "聚合跳过了不完整的源记录"
            );
        }

        // 5. 指标计算 + 报表装配
        let unnamed_label = self
            .config
            .get_unnamed_family_label()
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?;
        let assembler = IndicatorReportAssembler::with_unnamed_label(unnamed_label);
        let rows = assembler.assemble(&families, &outcome.accumulators);

        tracing::debug!(
            families = families.len(),
            schedules = schedules.len(),
            stoppages = stoppages.len(),
            rows = rows.len(),
            "族指标报表计算完成"
        );
        Ok(rows)
    }

    /// 解析日期窗口
    ///
    /// 默认: 结束 = 今天,起始 = 今天 - 配置窗口天数（含两端）
    fn resolve_window(&self, query: &IndicatorQuery) -> ApiResult<(NaiveDate, NaiveDate)> {
        let today = Local::now().date_naive();
        let end_date = query.end_date.unwrap_or(today);
        let start_date = match query.start_date {
            Some(date) => date,
            None => {
                let window_days = self
                    .config
                    .get_default_window_days()
                    .map_err(|e| ApiError::DatabaseError(e.to_string()))?;
                today - Duration::days(window_days)
            }
        };

        Ok((start_date, end_date))
    }
}

// ==========================================
// 单元测试（边界校验,不触数据库）
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_合法参数解析() {
        let query =
            IndicatorQuery::parse(Some("2026-08-01"), Some("2026-08-30"), Some("1,3,7")).unwrap();

        assert_eq!(
            query.start_date,
            NaiveDate::from_ymd_opt(2026, 8, 1)
        );
        assert_eq!(query.end_date, NaiveDate::from_ymd_opt(2026, 8, 30));
        assert_eq!(query.maintenance_types, Some(vec![1, 3, 7]));
    }

    #[test]
    fn test_全空参数合法() {
        let query = IndicatorQuery::parse(None, None, None).unwrap();

        assert!(query.start_date.is_none());
        assert!(query.end_date.is_none());
        assert!(query.maintenance_types.is_none());
    }

    #[test]
    fn test_非法日期被拒绝() {
        assert!(IndicatorQuery::parse(Some("2026-13-40"), None, None).is_err());
        assert!(IndicatorQuery::parse(Some("não-data"), None, None).is_err());
    }

    #[test]
    fn test_非法类型过滤被拒绝() {
        assert!(IndicatorQuery::parse(None, None, Some("1,x,3")).is_err());
        assert!(IndicatorQuery::parse(None, None, Some("0")).is_err());
        assert!(IndicatorQuery::parse(None, None, Some("-2")).is_err());
        assert!(IndicatorQuery::parse(None, None, Some("")).is_err());
    }
}
