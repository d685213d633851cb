// ==========================================
// IndicatorApi 集成测试
// ==========================================
// 测试范围:
// 1. 端到端指标计算（标准/零停机/零排班场景）
// 2. 维保类型过滤
// 3. 空目录短路与全零补行
// 4. 默认窗口与报表契约字段名
// ==========================================

mod test_helpers;

use chrono::Local;
use maintenance_indicators::api::IndicatorQuery;
use test_helpers::{TestEnv, TEST_CLIENT_ID};

/// 固定窗口 2026-08-01 ~ 2026-08-31 的查询
fn august_query(types: Option<&str>) -> IndicatorQuery {
    IndicatorQuery::parse(Some("2026-08-01"), Some("2026-08-31"), types)
        .expect("查询参数应当合法")
}

// ==========================================
// 端到端场景
// ==========================================

#[test]
fn test_端到端_标准场景() {
    let env = TestEnv::new().expect("无法创建测试环境");

    // 族 F1、设备 E1、当日 9 小时排班、1.5 小时停机（类型 1）
    env.add_family(1, Some("F1-name"));
    env.add_equipment(10, Some(1));
    env.add_order(100, Some(1));
    env.add_schedule(10, "2026-08-10", Some("08:00:00"), Some("17:00:00"));
    env.add_stoppage(
        10,
        Some(100),
        Some("2026-08-10 10:00:00"),
        Some("2026-08-10 11:30:00"),
    );

    let rows = env
        .state
        .indicator_api
        .family_indicators(TEST_CLIENT_ID, &august_query(Some("1")))
        .expect("查询失败");

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.family, "F1-name");
    assert_eq!(row.scheduled_hours, 9.0);
    assert_eq!(row.stoppage_hours, 1.5);
    assert_eq!(row.stoppage_count, 1);
    assert_eq!(row.df, 83.33); // (9-1.5)/9×100
    assert_eq!(row.mtbf, 7.5);
    assert_eq!(row.mttr, 1.5);
}

#[test]
fn test_端到端_零停机() {
    let env = TestEnv::new().expect("无法创建测试环境");

    env.add_family(1, Some("F1-name"));
    env.add_equipment(10, Some(1));
    env.add_schedule(10, "2026-08-10", Some("08:00:00"), Some("17:00:00"));

    let rows = env
        .state
        .indicator_api
        .family_indicators(TEST_CLIENT_ID, &august_query(None))
        .expect("查询失败");

    let row = &rows[0];
    assert_eq!(row.df, 100.0);
    assert_eq!(row.mtbf, 9.0); // 除数垫底为 1
    assert_eq!(row.mttr, 0.0);
    assert_eq!(row.stoppage_count, 0);
}

#[test]
fn test_端到端_零排班带停机() {
    let env = TestEnv::new().expect("无法创建测试环境");

    env.add_family(1, Some("F1-name"));
    env.add_equipment(10, Some(1));
    env.add_stoppage(
        10,
        None,
        Some("2026-08-10 08:00:00"),
        Some("2026-08-10 10:00:00"), // 2 小时
    );

    let rows = env
        .state
        .indicator_api
        .family_indicators(TEST_CLIENT_ID, &august_query(None))
        .expect("查询失败");

    let row = &rows[0];
    assert_eq!(row.df, 0.0); // P=0 时 DF 固定为 0
    assert_eq!(row.mtbf, -2.0); // (0-2)/1,负值按设计保留
    assert_eq!(row.mttr, 2.0);
    assert_eq!(row.stoppage_count, 1);
}

// ==========================================
// 维保类型过滤
// ==========================================

#[test]
fn test_类型过滤_排除不匹配的停机() {
    let env = TestEnv::new().expect("无法创建测试环境");

    env.add_family(1, Some("F1-name"));
    env.add_equipment(10, Some(1));
    env.add_order(100, Some(1)); // 纠正性维保
    env.add_order(200, Some(2)); // 预防性维保
    env.add_schedule(10, "2026-08-10", Some("08:00:00"), Some("17:00:00"));
    env.add_stoppage(
        10,
        Some(100),
        Some("2026-08-10 10:00:00"),
        Some("2026-08-10 11:30:00"),
    );
    env.add_stoppage(
        10,
        Some(200),
        Some("2026-08-11 10:00:00"),
        Some("2026-08-11 14:00:00"),
    );

    // 只看类型 1: 仅 1.5 小时停机计入
    let rows = env
        .state
        .indicator_api
        .family_indicators(TEST_CLIENT_ID, &august_query(Some("1")))
        .expect("查询失败");
    assert_eq!(rows[0].stoppage_hours, 1.5);
    assert_eq!(rows[0].stoppage_count, 1);

    // 不过滤: 两条都计入
    let rows = env
        .state
        .indicator_api
        .family_indicators(TEST_CLIENT_ID, &august_query(None))
        .expect("查询失败");
    assert_eq!(rows[0].stoppage_hours, 5.5);
    assert_eq!(rows[0].stoppage_count, 2);
}

// ==========================================
// 目录行为
// ==========================================

#[test]
fn test_空族目录_返回空报表() {
    let env = TestEnv::new().expect("无法创建测试环境");

    let rows = env
        .state
        .indicator_api
        .family_indicators(TEST_CLIENT_ID, &august_query(None))
        .expect("查询失败");

    assert!(rows.is_empty());
}

#[test]
fn test_有族无设备_返回空报表() {
    let env = TestEnv::new().expect("无法创建测试环境");
    env.add_family(1, Some("F1-name"));

    let rows = env
        .state
        .indicator_api
        .family_indicators(TEST_CLIENT_ID, &august_query(None))
        .expect("查询失败");

    assert!(rows.is_empty());
}

#[test]
fn test_无数据族补全零行_目录序输出() {
    let env = TestEnv::new().expect("无法创建测试环境");

    env.add_family(1, Some("COMPRESSORES"));
    env.add_family(2, Some("BOMBAS"));
    env.add_family(3, Some("MOTORES"));
    env.add_equipment(10, Some(2));
    env.add_schedule(10, "2026-08-10", Some("08:00:00"), Some("16:00:00"));

    let rows = env
        .state
        .indicator_api
        .family_indicators(TEST_CLIENT_ID, &august_query(None))
        .expect("查询失败");

    // 目录中每个族恰好一行,顺序稳定
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].family, "COMPRESSORES");
    assert_eq!(rows[1].family, "BOMBAS");
    assert_eq!(rows[2].family, "MOTORES");

    // 无数据族全零,有数据族归集正确
    assert_eq!(rows[0].scheduled_hours, 0.0);
    assert_eq!(rows[0].df, 0.0);
    assert_eq!(rows[1].scheduled_hours, 8.0);
    assert_eq!(rows[2].scheduled_hours, 0.0);
}

#[test]
fn test_无族设备的记录不计入任何族() {
    let env = TestEnv::new().expect("无法创建测试环境");

    env.add_family(1, Some("F1-name"));
    env.add_equipment(10, Some(1));
    env.add_equipment(99, None); // 无族设备
    env.add_schedule(10, "2026-08-10", Some("08:00:00"), Some("17:00:00"));
    env.add_schedule(99, "2026-08-10", Some("00:00:00"), Some("12:00:00"));
    env.add_stoppage(
        99,
        None,
        Some("2026-08-10 08:00:00"),
        Some("2026-08-10 09:00:00"),
    );

    let rows = env
        .state
        .indicator_api
        .family_indicators(TEST_CLIENT_ID, &august_query(None))
        .expect("查询失败");

    // 无族设备的 12 小时排班和 1 小时停机不出现在任何行
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].scheduled_hours, 9.0);
    assert_eq!(rows[0].stoppage_hours, 0.0);
    assert_eq!(rows[0].stoppage_count, 0);
}

#[test]
fn test_空白族名用占位符() {
    let env = TestEnv::new().expect("无法创建测试环境");
    env.add_family(1, None);
    env.add_equipment(10, Some(1));

    let rows = env
        .state
        .indicator_api
        .family_indicators(TEST_CLIENT_ID, &august_query(None))
        .expect("查询失败");

    assert_eq!(rows[0].family, "SEM FAMÍLIA");
}

#[test]
fn test_占位符可配置() {
    let env = TestEnv::new().expect("无法创建测试环境");
    env.state
        .config
        .set_global_config_value("indicator/unnamed_family_label", "未分族")
        .expect("写配置失败");

    env.add_family(1, None);
    env.add_equipment(10, Some(1));

    let rows = env
        .state
        .indicator_api
        .family_indicators(TEST_CLIENT_ID, &august_query(None))
        .expect("查询失败");

    assert_eq!(rows[0].family, "未分族");
}

// ==========================================
// 窗口与契约
// ==========================================

#[test]
fn test_默认窗口_今天的记录计入() {
    let env = TestEnv::new().expect("无法创建测试环境");

    env.add_family(1, Some("F1-name"));
    env.add_equipment(10, Some(1));

    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    env.add_schedule(10, &today, Some("08:00:00"), Some("12:00:00"));

    // 不传日期: 默认最近30天含今天
    let rows = env
        .state
        .indicator_api
        .family_indicators(TEST_CLIENT_ID, &IndicatorQuery::default())
        .expect("查询失败");

    assert_eq!(rows[0].scheduled_hours, 4.0);
}

#[test]
fn test_窗口外记录不计入() {
    let env = TestEnv::new().expect("无法创建测试环境");

    env.add_family(1, Some("F1-name"));
    env.add_equipment(10, Some(1));
    env.add_schedule(10, "2026-07-31", Some("08:00:00"), Some("17:00:00"));
    env.add_stoppage(
        10,
        None,
        Some("2026-09-01 08:00:00"),
        Some("2026-09-01 10:00:00"),
    );

    let rows = env
        .state
        .indicator_api
        .family_indicators(TEST_CLIENT_ID, &august_query(None))
        .expect("查询失败");

    assert_eq!(rows[0].scheduled_hours, 0.0);
    assert_eq!(rows[0].stoppage_hours, 0.0);
}

#[test]
fn test_报表契约字段名() {
    let env = TestEnv::new().expect("无法创建测试环境");

    env.add_family(1, Some("F1-name"));
    env.add_equipment(10, Some(1));
    env.add_schedule(10, "2026-08-10", Some("08:00:00"), Some("17:00:00"));

    let rows = env
        .state
        .indicator_api
        .family_indicators(TEST_CLIENT_ID, &august_query(None))
        .expect("查询失败");

    let json = serde_json::to_value(&rows[0]).expect("序列化失败");
    let obj = json.as_object().expect("应为对象");

    // 旧系统报表契约: 字段名固定
    for key in [
        "Familia",
        "DF",
        "MTBF",
        "MTTR",
        "Paradas",
        "tempo_prev",
        "tempo_corretiva",
    ] {
        assert!(obj.contains_key(key), "缺少契约字段 {}", key);
    }
}
