//! 生產建議建構

use planner_core::Product;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{QuantityResult, Suggestion};

/// 建議建構器：將數量計算結果與產品資訊組合為建議（純轉換）
pub struct SuggestionBuilder;

impl SuggestionBuilder {
    /// 建構單一產品的生產建議
    pub fn build(product: &Product, result: QuantityResult) -> Suggestion {
        let total_value = (product.unit_value * Decimal::from(result.max_quantity))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        Suggestion {
            product_id: product.id,
            product_code: product.code.clone(),
            product_name: product.name.clone(),
            unit_value: product.unit_value,
            max_quantity: result.max_quantity,
            total_value,
            can_produce: result.max_quantity > 0,
            missing_materials: result.missing_materials,
            material_requirements: result.requirements,
        }
    }
}
