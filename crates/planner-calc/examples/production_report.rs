//! 生產建議報告示例

use planner_calc::{JointAllocationCalculator, ProductionReport, ReportCalculator};
use planner_store::sample_catalog;

fn print_report(title: &str, report: &ProductionReport) {
    println!("=== {} ({}) ===", title, report.generated_at);
    for suggestion in &report.suggestions {
        println!(
            "  - {} {}：可生產 {} 件，總價值 {}",
            suggestion.product_code,
            suggestion.product_name,
            suggestion.max_quantity,
            suggestion.total_value
        );
        for requirement in &suggestion.material_requirements {
            println!(
                "      {} {}：用量 {} {}，剩餘 {} {}",
                requirement.material_code,
                requirement.material_name,
                requirement.total_required,
                requirement.unit,
                requirement.remaining_stock,
                requirement.unit
            );
        }
    }
    for warning in &report.warnings {
        println!("  ⚠ {}", warning);
    }
    println!(
        "  合計：{} 種產品，{} 件，總價值 {}\n",
        report.total_product_types, report.total_units, report.total_production_value
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let catalog = sample_catalog()?;
    let snapshot = catalog.snapshot();

    // 預設模式：各產品獨立對完整庫存快照計算上限
    let report = ReportCalculator::calculate(&snapshot)?;
    print_report("生產建議報告（獨立最大值）", &report);

    // 替代模式：依價值順序自共享庫存池扣減
    let joint = JointAllocationCalculator::calculate(&snapshot)?;
    print_report("生產建議報告（共享庫存分配）", &joint);

    Ok(())
}
