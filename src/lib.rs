//! # Production Planner
//!
//! 生產建議規劃系統：追蹤成品、其原料 BOM 與現有庫存，計算各產品
//! 的最大可生產數量，並彙總為依價值排序的生產建議報告。

// Re-export 主要類型
pub use planner_calc::{
    JointAllocationCalculator, MaterialRequirement, ProductionReport, QuantityCalculator,
    QuantityResult, ReportCalculator, Suggestion, SuggestionBuilder,
};
pub use planner_core::{
    BomLine, BomStore, CatalogSnapshot, PlannerError, Product, ProductBom, RawMaterial, Result,
};
pub use planner_store::{sample_catalog, InMemoryCatalog};
