//! # Production Suggestion Engine
//!
//! 生產建議計算引擎：由產品、BOM 與庫存快照計算各產品的最大可生產
//! 數量，並彙總為依價值排序的生產建議報告。

pub mod allocation;
pub mod quantity;
pub mod report;
pub mod suggestion;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export 主要類型
pub use allocation::JointAllocationCalculator;
pub use quantity::{QuantityCalculator, QuantityResult};
pub use report::ReportCalculator;
pub use suggestion::SuggestionBuilder;

/// 產品未配置任何 BOM 明細時的診斷訊息
pub const NO_MATERIALS_CONFIGURED: &str = "No materials configured for this product";

/// 原料庫存為零時的診斷後綴
pub const OUT_OF_STOCK_SUFFIX: &str = "(out of stock)";

/// 原料庫存不足一單位時的診斷後綴
pub const INSUFFICIENT_STOCK_SUFFIX: &str = "(insufficient stock)";

/// 無任何產品可生產時的報告警告
pub const NO_PRODUCIBLE_PRODUCTS_WARNING: &str = "No products can be produced with current stock";

/// 單一原料的需求明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRequirement {
    /// 原料編號
    pub material_code: String,

    /// 原料名稱
    pub material_name: String,

    /// 計量單位
    pub unit: String,

    /// 每單位成品所需用量
    pub required_per_unit: Decimal,

    /// 現有庫存
    pub available_stock: Decimal,

    /// 生產最大數量所需總用量（3位小數，四捨五入）
    pub total_required: Decimal,

    /// 生產後剩餘庫存（3位小數，四捨五入）
    pub remaining_stock: Decimal,

    /// 庫存是否足夠
    pub sufficient: bool,
}

/// 單一產品的生產建議
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// 產品ID
    pub product_id: u64,

    /// 產品編號
    pub product_code: String,

    /// 產品名稱
    pub product_name: String,

    /// 單位價值
    pub unit_value: Decimal,

    /// 最大可生產數量
    pub max_quantity: u32,

    /// 總價值 = 單位價值 × 最大數量（2位小數，四捨五入）
    pub total_value: Decimal,

    /// 是否可生產至少一單位
    pub can_produce: bool,

    /// 缺料診斷（依 BOM 明細順序）
    pub missing_materials: Vec<String>,

    /// 各原料需求明細
    pub material_requirements: Vec<MaterialRequirement>,
}

/// 生產建議報告
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionReport {
    /// 報告ID
    pub report_id: Uuid,

    /// 保留的建議（僅含可生產至少一單位者，依價值由高至低）
    pub suggestions: Vec<Suggestion>,

    /// 總生產價值（保留建議的總價值合計）
    pub total_production_value: Decimal,

    /// 可生產的產品種類數
    pub total_product_types: usize,

    /// 可生產的總單位數
    pub total_units: u64,

    /// 報告產生時間（ISO-8601）
    pub generated_at: String,

    /// 警告訊息
    pub warnings: Vec<String>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}
