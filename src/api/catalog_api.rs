// ==========================================
// 设备维保绩效指标系统 - 目录查询 API
// ==========================================
// 职责: 族/设备/排班/停机的只读列表查询,
//       供前端目录页和数据核对使用
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;

use crate::api::error::ApiResult;
use crate::domain::equipment::Equipment;
use crate::domain::family::Family;
use crate::domain::schedule::ScheduledOperation;
use crate::domain::stoppage::StoppageEvent;
use crate::repository::equipment_repo::EquipmentRepository;
use crate::repository::family_repo::FamilyRepository;
use crate::repository::schedule_repo::ScheduleRepository;
use crate::repository::stoppage_repo::StoppageRepository;

// ==========================================
// CatalogApi - 目录查询 API
// ==========================================

/// 目录查询API
///
/// 读穿透到仓储层,不含业务规则
pub struct CatalogApi {
    family_repo: Arc<FamilyRepository>,
    equipment_repo: Arc<EquipmentRepository>,
    schedule_repo: Arc<ScheduleRepository>,
    stoppage_repo: Arc<StoppageRepository>,
}

impl CatalogApi {
    /// 创建新的CatalogApi实例
    pub fn new(
        family_repo: Arc<FamilyRepository>,
        equipment_repo: Arc<EquipmentRepository>,
        schedule_repo: Arc<ScheduleRepository>,
        stoppage_repo: Arc<StoppageRepository>,
    ) -> Self {
        Self {
            family_repo,
            equipment_repo,
            schedule_repo,
            stoppage_repo,
        }
    }

    /// 列出某客户的设备族目录
    pub fn list_families(&self, client_id: i64) -> ApiResult<Vec<Family>> {
        Ok(self.family_repo.find_by_client(client_id)?)
    }

    /// 列出某客户的设备目录
    pub fn list_equipment(&self, client_id: i64) -> ApiResult<Vec<Equipment>> {
        Ok(self.equipment_repo.find_by_client(client_id)?)
    }

    /// 列出某客户在日期窗口内的排班记录
    pub fn list_scheduled_operations(
        &self,
        client_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ApiResult<Vec<ScheduledOperation>> {
        let equipment = self.equipment_repo.find_by_client(client_id)?;
        let equipment_ids: Vec<i64> = equipment.iter().map(|e| e.id).collect();

        Ok(self
            .schedule_repo
            .find_by_equipment_and_date_range(&equipment_ids, start_date, end_date)?)
    }

    /// 列出某客户在日期窗口内的停机事件
    pub fn list_stoppages(
        &self,
        client_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        maintenance_types: Option<&[i64]>,
    ) -> ApiResult<Vec<StoppageEvent>> {
        let equipment = self.equipment_repo.find_by_client(client_id)?;
        let equipment_ids: Vec<i64> = equipment.iter().map(|e| e.id).collect();

        Ok(self.stoppage_repo.find_by_equipment_and_date_range(
            &equipment_ids,
            start_date,
            end_date,
            maintenance_types,
        )?)
    }
}
