// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的临时数据库、应用装配
//       和测试数据写入
// ==========================================

use std::error::Error;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tempfile::NamedTempFile;

use maintenance_indicators::app::AppState;
use maintenance_indicators::domain::{
    Equipment, Family, MaintenanceOrder, ScheduledOperation, StoppageEvent,
};

/// 默认测试客户
pub const TEST_CLIENT_ID: i64 = 405;

// ==========================================
// TestEnv - 集成测试环境
// ==========================================

/// 集成测试环境
///
/// 使用临时数据库文件装配完整 AppState,
/// schema 由 AppState::new 幂等初始化
pub struct TestEnv {
    pub state: AppState,

    // 临时文件（确保生命周期）
    _temp_file: NamedTempFile,
}

impl TestEnv {
    /// 创建新的集成测试环境
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let temp_file = NamedTempFile::new()?;
        let db_path = temp_file
            .path()
            .to_str()
            .ok_or("临时文件路径非法")?
            .to_string();

        let state = AppState::new(db_path)?;

        Ok(Self {
            state,
            _temp_file: temp_file,
        })
    }

    // ==========================================
    // 测试数据写入
    // ==========================================

    /// 写入一个设备族
    pub fn add_family(&self, id: i64, name: Option<&str>) {
        self.state
            .family_repo
            .insert(&Family {
                id,
                client_id: TEST_CLIENT_ID,
                name: name.map(|s| s.to_string()),
            })
            .expect("写入设备族失败");
    }

    /// 写入一台设备
    pub fn add_equipment(&self, id: i64, family_id: Option<i64>) {
        self.state
            .equipment_repo
            .insert(&Equipment {
                id,
                client_id: TEST_CLIENT_ID,
                family_id,
                tag: None,
            })
            .expect("写入设备失败");
    }

    /// 写入一张维保工单
    pub fn add_order(&self, id: i64, maintenance_type: Option<i64>) {
        self.state
            .stoppage_repo
            .insert_order(&MaintenanceOrder {
                id,
                client_id: TEST_CLIENT_ID,
                maintenance_type,
                description: None,
            })
            .expect("写入工单失败");
    }

    /// 写入一条排班记录
    pub fn add_schedule(&self, equipment_id: i64, date: &str, start: Option<&str>, end: Option<&str>) {
        self.state
            .schedule_repo
            .insert(&ScheduledOperation {
                id: 0,
                equipment_id,
                planned_date: parse_date(date),
                start_time: start.map(parse_time),
                end_time: end.map(parse_time),
            })
            .expect("写入排班失败");
    }

    /// 写入一条停机事件
    pub fn add_stoppage(
        &self,
        equipment_id: i64,
        order_id: Option<i64>,
        onset: Option<&str>,
        resumed: Option<&str>,
    ) {
        self.state
            .stoppage_repo
            .insert(&StoppageEvent {
                id: 0,
                equipment_id,
                maintenance_order_id: order_id,
                onset_at: onset.map(parse_datetime),
                resumed_at: resumed.map(parse_datetime),
                maintenance_type: None,
            })
            .expect("写入停机事件失败");
    }
}

/// 解析测试日期（"YYYY-MM-DD"）
pub fn parse_date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("测试日期格式错误")
}

/// 解析测试时刻（"HH:MM:SS"）
pub fn parse_time(raw: &str) -> NaiveTime {
    NaiveTime::parse_from_str(raw, "%H:%M:%S").expect("测试时刻格式错误")
}

/// 解析测试时间戳（"YYYY-MM-DD HH:MM:SS"）
pub fn parse_datetime(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").expect("测试时间戳格式错误")
}
