//! 產品模型

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PlannerError, Result};

/// 成品（產品）
///
/// 單位價值為 2 位小數的金額，在單次報告計算期間視為不可變快照。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 產品ID（由儲存層指派）
    pub id: u64,

    /// 產品編號（唯一）
    pub code: String,

    /// 產品名稱
    pub name: String,

    /// 產品描述
    pub description: Option<String>,

    /// 單位價值（金額，2位小數）
    pub unit_value: Decimal,

    /// 建立時間
    pub created_at: DateTime<Utc>,

    /// 更新時間
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// 創建新的產品
    pub fn new(code: impl Into<String>, name: impl Into<String>, unit_value: Decimal) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            code: code.into(),
            name: name.into(),
            description: None,
            unit_value,
            created_at: now,
            updated_at: now,
        }
    }

    /// 建構器模式：設置產品ID
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// 建構器模式：設置產品描述
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 更新修改時間
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// 驗證產品欄位
    pub fn validate(&self) -> Result<()> {
        if self.unit_value <= Decimal::ZERO {
            return Err(PlannerError::InvalidUnitValue {
                code: self.code.clone(),
                value: self.unit_value,
            });
        }
        Ok(())
    }
}
