use super::{IndicatorCalculator, IndicatorReportAssembler, UNNAMED_FAMILY_LABEL};
use crate::domain::family::Family;
use crate::domain::indicator::FamilyAccumulator;
use std::collections::HashMap;

// ==========================================
// 测试辅助函数
// ==========================================

fn family(id: i64, name: Option<&str>) -> Family {
    Family {
        id,
        client_id: 405,
        name: name.map(|s| s.to_string()),
    }
}

fn acc(scheduled: f64, stoppage: f64, count: u32) -> FamilyAccumulator {
    FamilyAccumulator {
        scheduled_hours: scheduled,
        stoppage_hours: stoppage,
        stoppage_count: count,
    }
}

// ==========================================
// 指标计算测试
// ==========================================

#[test]
fn test_标准场景_9小时计划_1点5小时停机() {
    let calculator = IndicatorCalculator::new();
    let row = calculator.calculate("F1", &acc(9.0, 1.5, 1));

    assert_eq!(row.df, 83.33); // (9-1.5)/9×100
    assert_eq!(row.mtbf, 7.5);
    assert_eq!(row.mttr, 1.5);
    assert_eq!(row.stoppage_count, 1);
    assert_eq!(row.scheduled_hours, 9.0);
    assert_eq!(row.stoppage_hours, 1.5);
}

#[test]
fn test_零停机_除数垫底为1() {
    let calculator = IndicatorCalculator::new();
    let row = calculator.calculate("F1", &acc(9.0, 0.0, 0));

    assert_eq!(row.df, 100.0);
    assert_eq!(row.mtbf, 9.0); // MTBF = P/1
    assert_eq!(row.mttr, 0.0);
    assert_eq!(row.stoppage_count, 0); // 输出保留原始计数
}

#[test]
fn test_零计划小时_DF为0_MTBF可为负() {
    let calculator = IndicatorCalculator::new();
    let row = calculator.calculate("F1", &acc(0.0, 2.0, 1));

    assert_eq!(row.df, 0.0);
    assert_eq!(row.mtbf, -2.0); // (0-2)/1,按设计不截断
    assert_eq!(row.mttr, 2.0);
}

#[test]
fn test_停机超计划_DF为负百分比() {
    // C > P 发出“停机超排班”信号,不做负值保护
    let calculator = IndicatorCalculator::new();
    let row = calculator.calculate("F1", &acc(10.0, 15.0, 3));

    assert_eq!(row.df, -50.0);
    assert_eq!(row.mtbf, -1.67); // (10-15)/3 = -1.666…
    assert_eq!(row.mttr, 5.0);
}

#[test]
fn test_舍入只发生在输出边界() {
    let calculator = IndicatorCalculator::new();
    // 1/3 小时 × 3 次停机: 中间量全精度,输出两位
    let row = calculator.calculate("F1", &acc(8.0, 1.0, 3));

    assert_eq!(row.mtbf, 2.33); // 7/3
    assert_eq!(row.mttr, 0.33); // 1/3
    assert_eq!(row.df, 87.5);
}

// ==========================================
// 报表装配测试
// ==========================================

#[test]
fn test_每个目录族恰好一行_无数据族补零() {
    let assembler = IndicatorReportAssembler::new();
    let families = vec![family(1, Some("COMPRESSORES")), family(2, Some("BOMBAS"))];
    let mut accumulators = HashMap::new();
    accumulators.insert(1, acc(9.0, 1.5, 1));
    // 族2整个窗口无任何记录

    let rows = assembler.assemble(&families, &accumulators);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].family, "COMPRESSORES");
    assert_eq!(rows[1].family, "BOMBAS");
    assert_eq!(rows[1].df, 0.0);
    assert_eq!(rows[1].mtbf, 0.0);
    assert_eq!(rows[1].mttr, 0.0);
    assert_eq!(rows[1].stoppage_count, 0);
    assert_eq!(rows[1].scheduled_hours, 0.0);
}

#[test]
fn test_保持目录顺序_不重排() {
    let assembler = IndicatorReportAssembler::new();
    let families = vec![
        family(7, Some("MOTORES")),
        family(2, Some("BOMBAS")),
        family(5, Some("REDUTORES")),
    ];

    let rows = assembler.assemble(&families, &HashMap::new());

    let names: Vec<&str> = rows.iter().map(|r| r.family.as_str()).collect();
    assert_eq!(names, vec!["MOTORES", "BOMBAS", "REDUTORES"]);
}

#[test]
fn test_空白族名用占位符() {
    let assembler = IndicatorReportAssembler::new();
    let families = vec![family(1, None), family(2, Some("  "))];

    let rows = assembler.assemble(&families, &HashMap::new());

    assert_eq!(rows[0].family, UNNAMED_FAMILY_LABEL);
    assert_eq!(rows[1].family, UNNAMED_FAMILY_LABEL);
}

#[test]
fn test_自定义占位符() {
    let assembler = IndicatorReportAssembler::with_unnamed_label("未分族".to_string());
    let families = vec![family(1, None)];

    let rows = assembler.assemble(&families, &HashMap::new());

    assert_eq!(rows[0].family, "未分族");
}
