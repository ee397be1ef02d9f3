//! 原料模型

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PlannerError, Result};

/// 原料（物料）
///
/// 庫存數量為 3 位小數，引擎在計算時讀取其快照，永不回寫。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterial {
    /// 原料ID（由儲存層指派）
    pub id: u64,

    /// 原料編號（唯一）
    pub code: String,

    /// 原料名稱
    pub name: String,

    /// 計量單位（自由文字，如 "kg"、"unit"）
    pub unit: String,

    /// 現有庫存（3位小數，不可為負）
    pub stock_quantity: Decimal,

    /// 最低庫存（補貨警戒線）
    pub minimum_stock: Decimal,

    /// 單位成本
    pub unit_cost: Decimal,

    /// 建立時間
    pub created_at: DateTime<Utc>,

    /// 更新時間
    pub updated_at: DateTime<Utc>,
}

impl RawMaterial {
    /// 創建新的原料
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        stock_quantity: Decimal,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            code: code.into(),
            name: name.into(),
            unit: unit.into(),
            stock_quantity,
            minimum_stock: Decimal::ZERO,
            unit_cost: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// 建構器模式：設置原料ID
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// 建構器模式：設置最低庫存
    pub fn with_minimum_stock(mut self, minimum_stock: Decimal) -> Self {
        self.minimum_stock = minimum_stock;
        self
    }

    /// 建構器模式：設置單位成本
    pub fn with_unit_cost(mut self, unit_cost: Decimal) -> Self {
        self.unit_cost = unit_cost;
        self
    }

    /// 更新修改時間
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// 檢查庫存是否為零
    pub fn is_out_of_stock(&self) -> bool {
        self.stock_quantity.is_zero()
    }

    /// 檢查庫存是否低於最低庫存
    pub fn is_below_minimum_stock(&self) -> bool {
        self.stock_quantity < self.minimum_stock
    }

    /// 驗證原料欄位
    pub fn validate(&self) -> Result<()> {
        if self.stock_quantity < Decimal::ZERO {
            return Err(PlannerError::NegativeStock {
                material_code: self.code.clone(),
                stock: self.stock_quantity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_material() {
        let material = RawMaterial::new("MP001", "Stainless Steel", "kg", Decimal::from(500))
            .with_id(1)
            .with_minimum_stock(Decimal::from(100))
            .with_unit_cost(Decimal::new(25_50, 2));

        assert_eq!(material.id, 1);
        assert_eq!(material.code, "MP001");
        assert_eq!(material.unit, "kg");
        assert_eq!(material.stock_quantity, Decimal::from(500));
        assert!(!material.is_out_of_stock());
        assert!(!material.is_below_minimum_stock());
        assert!(material.validate().is_ok());
    }

    #[test]
    fn test_out_of_stock() {
        let material = RawMaterial::new("MP006", "Black Automotive Paint", "L", Decimal::ZERO);

        assert!(material.is_out_of_stock());
        assert!(material.validate().is_ok());
    }

    #[test]
    fn test_below_minimum_stock() {
        let material = RawMaterial::new("MP007", "Tempered Glass", "m²", Decimal::from(5))
            .with_minimum_stock(Decimal::from(10));

        assert!(material.is_below_minimum_stock());
    }

    #[test]
    fn test_validate_rejects_negative_stock() {
        let material = RawMaterial::new("MP-X", "Broken", "kg", Decimal::from(-1));

        assert!(matches!(
            material.validate(),
            Err(PlannerError::NegativeStock { .. })
        ));
    }
}
