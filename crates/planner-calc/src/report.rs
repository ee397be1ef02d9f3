//! 生產建議報告彙總

use std::time::Instant;

use chrono::Utc;
use planner_core::{BomStore, Result};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    ProductionReport, QuantityCalculator, Suggestion, SuggestionBuilder,
    NO_PRODUCIBLE_PRODUCTS_WARNING,
};

/// 報告彙總計算器
///
/// 每項產品的上限是針對完整、未扣減的庫存快照獨立計算的
/// （獨立最大值，非共享分配）。多項產品競爭同一稀缺原料時，
/// 合計數可能高於實際可同時達成的產量；共享分配見
/// [`crate::JointAllocationCalculator`]。
pub struct ReportCalculator;

impl ReportCalculator {
    /// 主計算入口：由目錄快照產生生產建議報告
    pub fn calculate(store: &dyn BomStore) -> Result<ProductionReport> {
        let start_time = Instant::now();

        let products = store.products_by_value_desc();
        tracing::info!("開始生產建議計算：產品 {} 筆", products.len());

        let mut suggestions: Vec<Suggestion> = Vec::new();
        let mut total_value = Decimal::ZERO;
        let mut total_units: u64 = 0;

        for product in &products {
            tracing::debug!("計算產品建議: {} ({})", product.name, product.code);

            let lines = store.bom_lines(product.id);
            let result = QuantityCalculator::calculate(&lines)?;
            let suggestion = SuggestionBuilder::build(product, result);

            // 僅保留可生產至少一單位的建議
            if suggestion.can_produce && suggestion.max_quantity > 0 {
                total_value += suggestion.total_value;
                total_units += u64::from(suggestion.max_quantity);
                suggestions.push(suggestion);
            }
        }

        let warnings = Self::generate_warnings(&suggestions);

        tracing::info!(
            "生產建議計算完成：產品 {} 種，總數量 {}，總價值 {}",
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

    /// 根據保留的建議清單產生警告
    pub(crate) fn generate_warnings(suggestions: &[Suggestion]) -> Vec<String> {
        let mut warnings = Vec::new();

        if suggestions.is_empty() {
            warnings.push(NO_PRODUCIBLE_PRODUCTS_WARNING.to_string());
        }

        // 清單在前面已過濾掉不可生產的建議，此分支不會觸發；
        // 行為刻意與既有輸出保持一致，由測試釘住
        let cannot_produce_count = suggestions.iter().filter(|s| !s.can_produce).count();
        if cannot_produce_count > 0 {
            warnings.push(format!(
                "{} product(s) cannot be produced due to insufficient stock",
                cannot_produce_count
            ));
        }

        warnings
    }
}
