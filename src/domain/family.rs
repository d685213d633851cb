// ==========================================
// 设备维保绩效指标系统 - 设备族领域模型
// ==========================================
// 对齐: schema equipment_family 表
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Family - 设备族
// ==========================================
// 用途: 指标报表的聚合维度,每个族输出一行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Family {
    // ===== 主键 =====
    pub id: i64, // 设备族唯一标识

    // ===== 归属 =====
    pub client_id: i64, // 所属客户

    // ===== 基础信息 =====
    pub name: Option<String>, // 族名称（旧系统允许为空,报表用占位符替代）
}

impl Family {
    /// 取显示名称,空白名称返回 None
    pub fn display_name(&self) -> Option<&str> {
        match self.name.as_deref() {
            Some(n) if !n.trim().is_empty() => Some(n),
            _ => None,
        }
    }
}
