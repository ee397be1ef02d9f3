//! 目錄快照與儲存層讀取契約

use serde::{Deserialize, Serialize};

use crate::{BomLine, Product, ProductBom};

/// 物料清單儲存的唯讀契約
///
/// 引擎只透過此契約讀取資料，永不寫入。呼叫端負責在一致的
/// 時點取得快照（引擎對計算期間的庫存變動沒有補償機制）。
pub trait BomStore {
    /// 依單位價值由高至低列出所有產品
    ///
    /// 同價值產品以產品編號遞增排序，保證輸出順序可重現。
    fn products_by_value_desc(&self) -> Vec<Product>;

    /// 列出產品的 BOM 明細（內嵌原料快照），依登錄順序
    fn bom_lines(&self, product_id: u64) -> Vec<BomLine>;
}

/// 目錄快照：單次報告計算所使用的時點資料
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    /// 產品與其 BOM
    pub entries: Vec<ProductBom>,
}

impl CatalogSnapshot {
    /// 創建新的目錄快照
    pub fn new(entries: Vec<ProductBom>) -> Self {
        Self { entries }
    }

    /// 產品數量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否為空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BomStore for CatalogSnapshot {
    fn products_by_value_desc(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .entries
            .iter()
            .map(|entry| entry.product.clone())
            .collect();
        products.sort_by(|a, b| {
            b.unit_value
                .cmp(&a.unit_value)
                .then_with(|| a.code.cmp(&b.code))
        });
        products
    }

    fn bom_lines(&self, product_id: u64) -> Vec<BomLine> {
        self.entries
            .iter()
            .find(|entry| entry.product.id == product_id)
            .map(|entry| entry.lines.clone())
            .unwrap_or_default()
    }
}
