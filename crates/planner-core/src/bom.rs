//! 物料清單（BOM）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PlannerError, Product, RawMaterial, Result};

/// BOM 明細：一項產品對一項原料的單位用量
///
/// 每組 (產品, 原料) 至多一筆明細；原料欄位為計算時點的內嵌快照。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomLine {
    /// 產品ID
    pub product_id: u64,

    /// 原料快照
    pub material: RawMaterial,

    /// 每單位成品所需用量（3位小數，必須為正）
    pub required_quantity: Decimal,
}

impl BomLine {
    /// 創建新的 BOM 明細
    pub fn new(product_id: u64, material: RawMaterial, required_quantity: Decimal) -> Self {
        Self {
            product_id,
            material,
            required_quantity,
        }
    }

    /// 驗證明細內容
    ///
    /// 非正數的單位用量與負庫存屬上游契約違反，計算前即拒絕。
    pub fn validate(&self) -> Result<()> {
        if self.required_quantity <= Decimal::ZERO {
            return Err(PlannerError::InvalidRequiredQuantity {
                material_code: self.material.code.clone(),
                quantity: self.required_quantity,
            });
        }
        self.material.validate()
    }
}

/// 產品連同其 BOM 明細（快照傳輸單位）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBom {
    /// 產品
    pub product: Product,

    /// BOM 明細（依登錄順序）
    pub lines: Vec<BomLine>,
}

impl ProductBom {
    /// 創建新的產品 BOM
    pub fn new(product: Product) -> Self {
        Self {
            product,
            lines: Vec::new(),
        }
    }

    /// 建構器模式：設置明細
    pub fn with_lines(mut self, lines: Vec<BomLine>) -> Self {
        self.lines = lines;
        self
    }

    /// 添加明細
    pub fn add_line(&mut self, line: BomLine) {
        self.lines.push(line);
    }

    /// 檢查是否已配置 BOM
    pub fn is_configured(&self) -> bool {
        !self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wood() -> RawMaterial {
        RawMaterial::new("MP-W", "Wood", "kg", Decimal::from(100)).with_id(1)
    }

    #[test]
    fn test_create_bom_line() {
        let line = BomLine::new(1, wood(), Decimal::new(25, 1));

        assert_eq!(line.product_id, 1);
        assert_eq!(line.required_quantity, Decimal::new(25, 1));
        assert!(line.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_quantity() {
        let zero = BomLine::new(1, wood(), Decimal::ZERO);
        assert!(matches!(
            zero.validate(),
            Err(PlannerError::InvalidRequiredQuantity { .. })
        ));

        let negative = BomLine::new(1, wood(), Decimal::from(-2));
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_stock() {
        let material = RawMaterial::new("MP-N", "Negative", "kg", Decimal::from(-5));
        let line = BomLine::new(1, material, Decimal::ONE);

        assert!(matches!(
            line.validate(),
            Err(PlannerError::NegativeStock { .. })
        ));
    }

    #[test]
    fn test_product_bom_configuration() {
        let product = Product::new("PROD-C", "Wooden Chair", Decimal::from(150)).with_id(1);
        let mut bom = ProductBom::new(product);

        assert!(!bom.is_configured());

        bom.add_line(BomLine::new(1, wood(), Decimal::new(25, 1)));
        assert!(bom.is_configured());
        assert_eq!(bom.lines.len(), 1);
    }
}
