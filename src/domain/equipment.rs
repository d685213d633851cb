// ==========================================
// 设备维保绩效指标系统 - 设备领域模型
// ==========================================
// 对齐: schema equipment 表
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Equipment - 设备
// ==========================================
// 红线: family_id 可空。无族设备的排班/停机记录
//       不计入任何累加器,也不落入默认桶
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    // ===== 主键 =====
    pub id: i64, // 设备唯一标识

    // ===== 归属 =====
    pub client_id: i64,         // 所属客户
    pub family_id: Option<i64>, // 所属设备族（可空）

    // ===== 基础信息 =====
    pub tag: Option<String>, // 设备位号/铭牌号
}
