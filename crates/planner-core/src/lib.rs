//! # Planner Core
//!
//! 核心資料模型與類型定義

pub mod bom;
pub mod catalog;
pub mod material;
pub mod product;

// Re-export 主要類型
pub use bom::{BomLine, ProductBom};
pub use catalog::{BomStore, CatalogSnapshot};
pub use material::RawMaterial;
pub use product::Product;

/// 生產規劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("產品單位價值必須為正數: {code} (value: {value})")]
    InvalidUnitValue {
        code: String,
        value: rust_decimal::Decimal,
    },

    #[error("BOM 單位用量必須為正數: {material_code} (quantity: {quantity})")]
    InvalidRequiredQuantity {
        material_code: String,
        quantity: rust_decimal::Decimal,
    },

    #[error("原料庫存不可為負數: {material_code} (stock: {stock})")]
    NegativeStock {
        material_code: String,
        stock: rust_decimal::Decimal,
    },

    #[error("編號已存在: {0}")]
    DuplicateCode(String),

    #[error("BOM 關聯已存在: product={product_id}, material={material_id}")]
    DuplicateBomLine { product_id: u64, material_id: u64 },

    #[error("找不到 BOM 關聯: product={product_id}, material={material_id}")]
    BomLineNotFound { product_id: u64, material_id: u64 },

    #[error("找不到產品: {0}")]
    ProductNotFound(u64),

    #[error("找不到原料: {0}")]
    MaterialNotFound(u64),

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
