//! 共享庫存分配模式

use std::collections::HashMap;
use std::time::Instant;

use chrono::Utc;
use planner_core::{BomStore, Result};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{ProductionReport, QuantityCalculator, ReportCalculator, Suggestion, SuggestionBuilder};

/// 共享庫存分配計算器
///
/// 與 [`ReportCalculator`] 的獨立最大值不同：依價值由高至低逐一評估
/// 產品，每保留一項建議即自共享庫存池扣減其總用量，再評估下一項
/// 產品。高價值產品優先取得稀缺原料，合計數反映可同時達成的產量。
/// 此模式為明確的替代入口，預設報告仍採獨立最大值。
pub struct JointAllocationCalculator;

impl JointAllocationCalculator {
    /// 依價值順序執行共享庫存分配並產生報告
    pub fn calculate(store: &dyn BomStore) -> Result<ProductionReport> {
        let start_time = Instant::now();

        let products = store.products_by_value_desc();
        tracing::info!("開始共享庫存分配計算：產品 {} 筆", products.len());

        // 共享庫存池（原料ID → 剩餘庫存）
        let mut pool: HashMap<u64, Decimal> = HashMap::new();

        let mut suggestions: Vec<Suggestion> = Vec::new();
        let mut total_value = Decimal::ZERO;
        let mut total_units: u64 = 0;

        for product in &products {
            let mut lines = store.bom_lines(product.id);

            // 以庫存池的剩餘量取代各明細的庫存快照
            for line in &mut lines {
                let remaining = *pool
                    .entry(line.material.id)
                    .or_insert(line.material.stock_quantity);
                line.material.stock_quantity = remaining;
            }

            let result = QuantityCalculator::calculate(&lines)?;
            let suggestion = SuggestionBuilder::build(product, result);

            if suggestion.can_produce && suggestion.max_quantity > 0 {
                // 自庫存池扣減本建議的總用量
                for (line, requirement) in lines.iter().zip(&suggestion.material_requirements) {
                    if let Some(remaining) = pool.get_mut(&line.material.id) {
                        *remaining -= requirement.total_required;
                    }
                }

                tracing::debug!(
                    "分配產品 {}：{} 件，扣減 {} 項原料",
                    suggestion.product_code,
                    suggestion.max_quantity,
                    suggestion.material_requirements.len()
                );

                total_value += suggestion.total_value;
                total_units += u64::from(suggestion.max_quantity);
                suggestions.push(suggestion);
            }
        }

        let warnings = ReportCalculator::generate_warnings(&suggestions);

        tracing::info!(
            "共享庫存分配完成：產品 {} 種，總數量 {}，總價值 {}",
            suggestions.len(),
            total_units,
            total_value
        );

        Ok(ProductionReport {
            report_id: Uuid::new_v4(),
            total_product_types: suggestions.len(),
            suggestions,
            total_production_value: total_value,
            total_units,
            generated_at: Utc::now().to_rfc3339(),
            warnings,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        })
    }
}
