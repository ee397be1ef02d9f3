//! 最大可生產數量計算

use planner_core::{BomLine, PlannerError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    MaterialRequirement, INSUFFICIENT_STOCK_SUFFIX, NO_MATERIALS_CONFIGURED, OUT_OF_STOCK_SUFFIX,
};

/// 數量計算結果
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityResult {
    /// 最大可生產數量
    pub max_quantity: u32,

    /// 缺料診斷（依 BOM 明細順序）
    pub missing_materials: Vec<String>,

    /// 各原料需求明細
    pub requirements: Vec<MaterialRequirement>,
}

/// 數量計算器
///
/// 邏輯：
/// - 對每項原料計算 floor(現有庫存 / 單位用量)
/// - 最大可生產數量 = 所有原料中的最小值
/// - 任一原料庫存為零時數量為 0（仍繼續掃描其餘明細以收集診斷）
pub struct QuantityCalculator;

impl QuantityCalculator {
    /// 計算單一產品的最大可生產數量與原料明細
    pub fn calculate(lines: &[BomLine]) -> Result<QuantityResult> {
        // 未配置 BOM 的產品視為不可生產
        if lines.is_empty() {
            return Ok(QuantityResult {
                max_quantity: 0,
                missing_materials: vec![NO_MATERIALS_CONFIGURED.to_string()],
                requirements: Vec::new(),
            });
        }

        let mut max_quantity: Option<u32> = None;
        let mut missing_materials = Vec::new();

        for line in lines {
            line.validate()?;

            let available = line.material.stock_quantity;

            if available.is_zero() {
                missing_materials.push(format!(
                    "{} {}",
                    line.material.name, OUT_OF_STOCK_SUFFIX
                ));
                max_quantity = Some(0);
                continue;
            }

            let possible_units = Self::possible_units(available, line.required_quantity)?;

            max_quantity = Some(match max_quantity {
                Some(current) => current.min(possible_units),
                None => possible_units,
            });

            if possible_units == 0 {
                missing_materials.push(format!(
                    "{} {}",
                    line.material.name, INSUFFICIENT_STOCK_SUFFIX
                ));
            }
        }

        let max_quantity = max_quantity.unwrap_or(0);

        let requirements = lines
            .iter()
            .map(|line| Self::requirement(line, max_quantity))
            .collect();

        Ok(QuantityResult {
            max_quantity,
            missing_materials,
            requirements,
        })
    }

    /// 此原料可支撐的成品數量：精確十進位除法，向零截斷
    ///
    /// 絕不向上進位，避免建議超出庫存可支撐的數量。
    fn possible_units(available: Decimal, required_per_unit: Decimal) -> Result<u32> {
        (available / required_per_unit)
            .floor()
            .to_u32()
            .ok_or_else(|| {
                PlannerError::CalculationError(format!(
                    "可生產數量超出範圍: {} / {}",
                    available, required_per_unit
                ))
            })
    }

    /// 計算單筆明細在指定生產數量下的用量與剩餘
    fn requirement(line: &BomLine, quantity: u32) -> MaterialRequirement {
        let total_required = (line.required_quantity * Decimal::from(quantity))
            .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero);
        let remaining_stock = (line.material.stock_quantity - total_required)
            .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero);

        MaterialRequirement {
            material_code: line.material.code.clone(),
            material_name: line.material.name.clone(),
            unit: line.material.unit.clone(),
            required_per_unit: line.required_quantity,
            available_stock: line.material.stock_quantity,
            total_required,
            remaining_stock,
            sufficient: line.material.stock_quantity >= total_required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::RawMaterial;
    use proptest::prelude::*;
    use rstest::rstest;

    fn line(name: &str, unit: &str, stock: &str, required: &str) -> BomLine {
        let material = RawMaterial::new(
            format!("MP-{}", name),
            name,
            unit,
            stock.parse().unwrap(),
        );
        BomLine::new(1, material, required.parse().unwrap())
    }

    #[rstest]
    #[case("100", "2.5", 40)]
    #[case("200", "8", 25)]
    #[case("5", "0.3", 16)]
    #[case("199.9", "2", 99)]
    #[case("0.999", "1", 0)]
    #[case("1", "0.001", 1000)]
    fn test_floor_division(#[case] stock: &str, #[case] required: &str, #[case] expected: u32) {
        let result = QuantityCalculator::calculate(&[line("Mat", "kg", stock, required)]).unwrap();
        assert_eq!(result.max_quantity, expected);
    }

    #[test]
    fn test_limiting_material_is_minimum() {
        // 木椅：木材 100kg / 2.5kg，螺絲 200 / 8，清漆 5L / 0.3L
        let lines = vec![
            line("Wood", "kg", "100", "2.5"),
            line("Screw", "unit", "200", "8"),
            line("Varnish", "L", "5", "0.3"),
        ];

        let result = QuantityCalculator::calculate(&lines).unwrap();

        assert_eq!(result.max_quantity, 16);
        assert!(result.missing_materials.is_empty());

        // 限制原料為清漆：總用量 4.800，剩餘 0.200
        let varnish = &result.requirements[2];
        assert_eq!(varnish.total_required, "4.8".parse::<Decimal>().unwrap());
        assert_eq!(varnish.remaining_stock, "0.2".parse::<Decimal>().unwrap());
        assert!(varnish.sufficient);

        // 木材：用量 40，剩餘 60
        let wood = &result.requirements[0];
        assert_eq!(wood.total_required, Decimal::from(40));
        assert_eq!(wood.remaining_stock, Decimal::from(60));
    }

    #[test]
    fn test_empty_bom_is_not_producible() {
        let result = QuantityCalculator::calculate(&[]).unwrap();

        assert_eq!(result.max_quantity, 0);
        assert_eq!(
            result.missing_materials,
            vec![NO_MATERIALS_CONFIGURED.to_string()]
        );
        assert!(result.requirements.is_empty());
    }

    #[test]
    fn test_out_of_stock_forces_zero_and_keeps_scanning() {
        let lines = vec![
            line("Wood", "kg", "100", "2.5"),
            line("Varnish", "L", "0", "0.3"),
            line("Screw", "unit", "1", "8"),
        ];

        let result = QuantityCalculator::calculate(&lines).unwrap();

        assert_eq!(result.max_quantity, 0);
        // 診斷依明細順序：缺清漆在前，螺絲不足在後
        assert_eq!(
            result.missing_materials,
            vec![
                "Varnish (out of stock)".to_string(),
                "Screw (insufficient stock)".to_string(),
            ]
        );
    }

    #[test]
    fn test_insufficient_stock_reason() {
        let result =
            QuantityCalculator::calculate(&[line("Glass", "m²", "0.5", "2")]).unwrap();

        assert_eq!(result.max_quantity, 0);
        assert_eq!(
            result.missing_materials,
            vec!["Glass (insufficient stock)".to_string()]
        );
    }

    #[test]
    fn test_zero_quantity_detail_consumes_nothing() {
        let result = QuantityCalculator::calculate(&[line("Steel", "kg", "3", "7")]).unwrap();

        assert_eq!(result.max_quantity, 0);
        let detail = &result.requirements[0];
        assert_eq!(detail.total_required, Decimal::ZERO);
        assert_eq!(detail.remaining_stock, Decimal::from(3));
        assert!(detail.sufficient);
    }

    #[test]
    fn test_rejects_non_positive_required_quantity() {
        let result = QuantityCalculator::calculate(&[line("Wood", "kg", "100", "0")]);

        assert!(matches!(
            result,
            Err(PlannerError::InvalidRequiredQuantity { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_stock() {
        let result = QuantityCalculator::calculate(&[line("Wood", "kg", "-1", "2")]);

        assert!(matches!(result, Err(PlannerError::NegativeStock { .. })));
    }

    proptest! {
        // 安全不變量：最大數量為所有明細 floor(庫存/用量) 的最小值，
        // 且任何明細的剩餘庫存皆不為負
        #[test]
        fn prop_max_quantity_never_overconsumes(
            specs in proptest::collection::vec((0u64..10_000_000, 1u64..1_000_000), 1..8)
        ) {
            let lines: Vec<BomLine> = specs
                .iter()
                .enumerate()
                .map(|(i, (stock_milli, required_milli))| {
                    let material = RawMaterial::new(
                        format!("MP{:03}", i),
                        format!("Material {}", i),
                        "kg",
                        Decimal::new(*stock_milli as i64, 3),
                    )
                    .with_id(i as u64 + 1);
                    BomLine::new(1, material, Decimal::new(*required_milli as i64, 3))
                })
                .collect();

            let result = QuantityCalculator::calculate(&lines).unwrap();

            let expected = specs
                .iter()
                .map(|(stock_milli, required_milli)| {
                    if *stock_milli == 0 {
                        0
                    } else {
                        (stock_milli / required_milli) as u32
                    }
                })
                .min()
                .unwrap_or(0);
            prop_assert_eq!(result.max_quantity, expected);

            for requirement in &result.requirements {
                prop_assert!(requirement.remaining_stock >= Decimal::ZERO);
                prop_assert!(requirement.sufficient);
            }
        }
    }
}
