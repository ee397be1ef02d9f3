//! 示範種子資料
//!
//! 汽車零組件目錄：8 項原料、5 項產品、14 筆 BOM 關聯。

use planner_core::{Product, RawMaterial, Result};
use rust_decimal::Decimal;

use crate::InMemoryCatalog;

/// 建立示範目錄
pub fn sample_catalog() -> Result<InMemoryCatalog> {
    let mut catalog = InMemoryCatalog::new();

    tracing::info!("載入示範種子資料");

    // 原料
    let steel = catalog.add_material(
        RawMaterial::new("MP001", "Stainless Steel", "kg", Decimal::from(500))
            .with_minimum_stock(Decimal::from(100))
            .with_unit_cost(Decimal::new(25_50, 2)),
    )?;
    let aluminium = catalog.add_material(
        RawMaterial::new("MP002", "Aluminium 6061", "kg", Decimal::from(300))
            .with_minimum_stock(Decimal::from(50))
            .with_unit_cost(Decimal::new(18_75, 2)),
    )?;
    let rubber = catalog.add_material(
        RawMaterial::new("MP003", "EPDM Rubber", "kg", Decimal::from(150))
            .with_minimum_stock(Decimal::from(30))
            .with_unit_cost(Decimal::new(12_30, 2)),
    )?;
    let plastic = catalog.add_material(
        RawMaterial::new("MP004", "ABS Plastic", "kg", Decimal::from(200))
            .with_minimum_stock(Decimal::from(40))
            .with_unit_cost(Decimal::new(8_90, 2)),
    )?;
    let screw = catalog.add_material(
        RawMaterial::new("MP005", "M8 Screw", "unit", Decimal::from(5000))
            .with_minimum_stock(Decimal::from(1000))
            .with_unit_cost(Decimal::new(25, 2)),
    )?;
    let paint = catalog.add_material(
        RawMaterial::new("MP006", "Black Automotive Paint", "L", Decimal::from(80))
            .with_minimum_stock(Decimal::from(20))
            .with_unit_cost(Decimal::new(45_00, 2)),
    )?;
    let glass = catalog.add_material(
        RawMaterial::new("MP007", "Tempered Glass", "m²", Decimal::from(50))
            .with_minimum_stock(Decimal::from(10))
            .with_unit_cost(Decimal::new(85_00, 2)),
    )?;
    let foam = catalog.add_material(
        RawMaterial::new("MP008", "Polyurethane Foam", "kg", Decimal::from(100))
            .with_minimum_stock(Decimal::from(25))
            .with_unit_cost(Decimal::new(15_60, 2)),
    )?;

    // 產品
    let mirror = catalog.add_product(
        Product::new("PROD001", "Right Exterior Mirror", Decimal::new(285_00, 2))
            .with_description("Electric exterior mirror with defroster"),
    )?;
    let bumper = catalog.add_product(Product::new(
        "PROD002",
        "Front Bumper",
        Decimal::new(450_00, 2),
    ))?;
    let hood = catalog.add_product(Product::new(
        "PROD003",
        "Engine Hood",
        Decimal::new(680_00, 2),
    ))?;
    let seat = catalog.add_product(Product::new(
        "PROD004",
        "Driver Seat",
        Decimal::new(1250_00, 2),
    ))?;
    let panel = catalog.add_product(Product::new(
        "PROD005",
        "Instrument Panel",
        Decimal::new(890_00, 2),
    ))?;

    // BOM 關聯
    catalog.add_bom_line(mirror, plastic, Decimal::new(8, 1))?;
    catalog.add_bom_line(mirror, glass, Decimal::new(15, 2))?;
    catalog.add_bom_line(mirror, screw, Decimal::from(3))?;

    catalog.add_bom_line(bumper, plastic, Decimal::new(45, 1))?;
    catalog.add_bom_line(bumper, paint, Decimal::new(3, 1))?;
    catalog.add_bom_line(bumper, screw, Decimal::from(8))?;

    catalog.add_bom_line(hood, steel, Decimal::from(12))?;
    catalog.add_bom_line(hood, paint, Decimal::new(5, 1))?;
    catalog.add_bom_line(hood, rubber, Decimal::new(2, 1))?;

    catalog.add_bom_line(seat, foam, Decimal::new(35, 1))?;
    catalog.add_bom_line(seat, aluminium, Decimal::new(22, 1))?;
    catalog.add_bom_line(seat, screw, Decimal::from(12))?;

    catalog.add_bom_line(panel, plastic, Decimal::new(18, 1))?;
    catalog.add_bom_line(panel, glass, Decimal::new(25, 2))?;

    tracing::info!(
        "種子資料載入完成：原料 {} 項，產品 {} 項，BOM {} 筆",
        catalog.material_count(),
        catalog.product_count(),
        catalog.bom_line_count()
    );

    Ok(catalog)
}
