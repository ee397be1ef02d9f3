//! 記憶體內目錄儲存
//!
//! 產品、原料與 BOM 關聯的建立/修改/刪除都在這一層完成；
//! 引擎只透過 `BomStore` 契約或 `snapshot()` 讀取。

use std::collections::BTreeMap;

use planner_core::{
    BomLine, BomStore, CatalogSnapshot, PlannerError, Product, ProductBom, RawMaterial, Result,
};
use rust_decimal::Decimal;

/// BOM 關聯記錄（每組 (產品, 原料) 至多一筆）
#[derive(Debug, Clone)]
struct BomLink {
    product_id: u64,
    material_id: u64,
    required_quantity: Decimal,
}

/// 記憶體內目錄
#[derive(Debug)]
pub struct InMemoryCatalog {
    products: BTreeMap<u64, Product>,
    materials: BTreeMap<u64, RawMaterial>,
    links: Vec<BomLink>,
    next_product_id: u64,
    next_material_id: u64,
}

impl InMemoryCatalog {
    /// 創建空的目錄
    pub fn new() -> Self {
        Self {
            products: BTreeMap::new(),
            materials: BTreeMap::new(),
            links: Vec::new(),
            next_product_id: 1,
            next_material_id: 1,
        }
    }

    /// 新增產品，回傳指派的ID
    pub fn add_product(&mut self, product: Product) -> Result<u64> {
        product.validate()?;
        self.ensure_product_code_free(&product.code, None)?;

        let id = self.next_product_id;
        self.next_product_id += 1;

        tracing::debug!("新增產品: {} ({})", product.name, product.code);
        self.products.insert(id, product.with_id(id));
        Ok(id)
    }

    /// 更新產品欄位
    pub fn update_product(
        &mut self,
        id: u64,
        code: &str,
        name: &str,
        unit_value: Decimal,
    ) -> Result<()> {
        if !self.products.contains_key(&id) {
            return Err(PlannerError::ProductNotFound(id));
        }
        self.ensure_product_code_free(code, Some(id))?;
        if unit_value <= Decimal::ZERO {
            return Err(PlannerError::InvalidUnitValue {
                code: code.to_string(),
                value: unit_value,
            });
        }

        if let Some(product) = self.products.get_mut(&id) {
            product.code = code.to_string();
            product.name = name.to_string();
            product.unit_value = unit_value;
            product.touch();
        }
        Ok(())
    }

    /// 刪除產品（連同其 BOM 關聯）
    pub fn remove_product(&mut self, id: u64) -> Result<()> {
        if self.products.remove(&id).is_none() {
            return Err(PlannerError::ProductNotFound(id));
        }
        self.links.retain(|link| link.product_id != id);
        tracing::debug!("刪除產品: {}", id);
        Ok(())
    }

    /// 新增原料，回傳指派的ID
    pub fn add_material(&mut self, material: RawMaterial) -> Result<u64> {
        material.validate()?;
        self.ensure_material_code_free(&material.code, None)?;

        let id = self.next_material_id;
        self.next_material_id += 1;

        tracing::debug!("新增原料: {} ({})", material.name, material.code);
        self.materials.insert(id, material.with_id(id));
        Ok(id)
    }

    /// 更新原料基本欄位
    pub fn update_material(&mut self, id: u64, code: &str, name: &str, unit: &str) -> Result<()> {
        if !self.materials.contains_key(&id) {
            return Err(PlannerError::MaterialNotFound(id));
        }
        self.ensure_material_code_free(code, Some(id))?;

        if let Some(material) = self.materials.get_mut(&id) {
            material.code = code.to_string();
            material.name = name.to_string();
            material.unit = unit.to_string();
            material.touch();
        }
        Ok(())
    }

    /// 設置原料庫存
    pub fn set_stock(&mut self, id: u64, stock_quantity: Decimal) -> Result<()> {
        let material = self
            .materials
            .get_mut(&id)
            .ok_or(PlannerError::MaterialNotFound(id))?;

        if stock_quantity < Decimal::ZERO {
            return Err(PlannerError::NegativeStock {
                material_code: material.code.clone(),
                stock: stock_quantity,
            });
        }

        material.stock_quantity = stock_quantity;
        material.touch();
        Ok(())
    }

    /// 刪除原料（連同引用它的 BOM 關聯）
    pub fn remove_material(&mut self, id: u64) -> Result<()> {
        if self.materials.remove(&id).is_none() {
            return Err(PlannerError::MaterialNotFound(id));
        }
        self.links.retain(|link| link.material_id != id);
        tracing::debug!("刪除原料: {}", id);
        Ok(())
    }

    /// 新增 BOM 關聯
    pub fn add_bom_line(
        &mut self,
        product_id: u64,
        material_id: u64,
        required_quantity: Decimal,
    ) -> Result<()> {
        if !self.products.contains_key(&product_id) {
            return Err(PlannerError::ProductNotFound(product_id));
        }
        let material = self
            .materials
            .get(&material_id)
            .ok_or(PlannerError::MaterialNotFound(material_id))?;

        if required_quantity <= Decimal::ZERO {
            return Err(PlannerError::InvalidRequiredQuantity {
                material_code: material.code.clone(),
                quantity: required_quantity,
            });
        }
        if self.find_link(product_id, material_id).is_some() {
            return Err(PlannerError::DuplicateBomLine {
                product_id,
                material_id,
            });
        }

        self.links.push(BomLink {
            product_id,
            material_id,
            required_quantity,
        });
        Ok(())
    }

    /// 更新 BOM 關聯的單位用量
    pub fn update_bom_line(
        &mut self,
        product_id: u64,
        material_id: u64,
        required_quantity: Decimal,
    ) -> Result<()> {
        if required_quantity <= Decimal::ZERO {
            let material_code = self
                .materials
                .get(&material_id)
                .map(|m| m.code.clone())
                .unwrap_or_else(|| material_id.to_string());
            return Err(PlannerError::InvalidRequiredQuantity {
                material_code,
                quantity: required_quantity,
            });
        }

        let link = self
            .links
            .iter_mut()
            .find(|link| link.product_id == product_id && link.material_id == material_id)
            .ok_or(PlannerError::BomLineNotFound {
                product_id,
                material_id,
            })?;
        link.required_quantity = required_quantity;
        Ok(())
    }

    /// 刪除 BOM 關聯
    pub fn remove_bom_line(&mut self, product_id: u64, material_id: u64) -> Result<()> {
        let before = self.links.len();
        self.links
            .retain(|link| !(link.product_id == product_id && link.material_id == material_id));

        if self.links.len() == before {
            return Err(PlannerError::BomLineNotFound {
                product_id,
                material_id,
            });
        }
        Ok(())
    }

    /// 產品數量
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// 原料數量
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// BOM 關聯數量
    pub fn bom_line_count(&self) -> usize {
        self.links.len()
    }

    /// 低於最低庫存的原料（補貨清單）
    pub fn materials_below_minimum(&self) -> Vec<RawMaterial> {
        self.materials
            .values()
            .filter(|material| material.is_below_minimum_stock())
            .cloned()
            .collect()
    }

    /// 取得時點快照（深拷貝，之後的儲存變動不影響已取得的快照）
    pub fn snapshot(&self) -> CatalogSnapshot {
        let entries = self
            .products
            .values()
            .map(|product| {
                ProductBom::new(product.clone()).with_lines(self.lines_for(product.id))
            })
            .collect();
        CatalogSnapshot::new(entries)
    }

    fn lines_for(&self, product_id: u64) -> Vec<BomLine> {
        self.links
            .iter()
            .filter(|link| link.product_id == product_id)
            .filter_map(|link| {
                self.materials.get(&link.material_id).map(|material| {
                    BomLine::new(product_id, material.clone(), link.required_quantity)
                })
            })
            .collect()
    }

    fn find_link(&self, product_id: u64, material_id: u64) -> Option<&BomLink> {
        self.links
            .iter()
            .find(|link| link.product_id == product_id && link.material_id == material_id)
    }

    fn ensure_product_code_free(&self, code: &str, except_id: Option<u64>) -> Result<()> {
        let taken = self
            .products
            .iter()
            .any(|(id, product)| product.code == code && Some(*id) != except_id);
        if taken {
            return Err(PlannerError::DuplicateCode(code.to_string()));
        }
        Ok(())
    }

    fn ensure_material_code_free(&self, code: &str, except_id: Option<u64>) -> Result<()> {
        let taken = self
            .materials
            .iter()
            .any(|(id, material)| material.code == code && Some(*id) != except_id);
        if taken {
            return Err(PlannerError::DuplicateCode(code.to_string()));
        }
        Ok(())
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl BomStore for InMemoryCatalog {
    fn products_by_value_desc(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.values().cloned().collect();
        products.sort_by(|a, b| {
            b.unit_value
                .cmp(&a.unit_value)
                .then_with(|| a.code.cmp(&b.code))
        });
        products
    }

    fn bom_lines(&self, product_id: u64) -> Vec<BomLine> {
        self.lines_for(product_id)
    }
}
