//! Output record kinds and their rendering onto the fixed 16-column schema.

use crate::ids::{GroupId, OptionId, ValueId};

/// Default presentation attributes for option, value, and product rows.
/// Group rows never carry them.
pub const STYLE_ON_PAGE: &str = "Button";
pub const STYLE_ON_CARD: &str = "Button";
pub const SWATCH_STYLE: &str = "1 Color";
pub const SWATCH_COLOR_1: &str = "#000";
pub const SWATCH_COLOR_2: &str = "#141414";

// Cell positions within OUTPUT_COLUMNS.
const IDX_GROUP_ID: usize = 0;
const IDX_GROUP_NAME: usize = 1;
const IDX_PRODUCT_ID: usize = 2;
const IDX_COMBINATION_ID: usize = 3;
const IDX_OPTION_ID: usize = 4;
const IDX_OPTION_NAME: usize = 5;
const IDX_STYLE_ON_PAGE: usize = 6;
const IDX_STYLE_ON_CARD: usize = 7;
const IDX_VALUE_ID: usize = 8;
const IDX_VALUE_NAME: usize = 9;
const IDX_SWATCH_STYLE: usize = 10;
const IDX_SWATCH_COLOR_1: usize = 11;
const IDX_SWATCH_COLOR_2: usize = 12;
const IDX_SKU: usize = 14;
const IDX_INTERNAL_ID: usize = 15;

/// One group header row; only id and name are populated.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GroupRow {
    pub group_id: GroupId,
    pub group_name: String,
}

/// One option dimension within a group.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OptionRow {
    pub group_id: GroupId,
    pub option_id: OptionId,
    pub option_name: String,
}

/// One distinct value of an option.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValueRow {
    pub group_id: GroupId,
    pub option_id: OptionId,
    pub value_id: ValueId,
    pub value_name: String,
}

/// One product combination row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProductRow {
    pub group_id: GroupId,
    pub product_id: String,
    pub combination_id: String,
    pub sku: String,
    pub internal_id: String,
}

/// Any row of the normalized output, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OutputRow {
    Group(GroupRow),
    Option(OptionRow),
    Value(ValueRow),
    Product(ProductRow),
}

impl OutputRow {
    /// The group this row belongs to.
    pub fn group_id(&self) -> &GroupId {
        match self {
            Self::Group(row) => &row.group_id,
            Self::Option(row) => &row.group_id,
            Self::Value(row) => &row.group_id,
            Self::Product(row) => &row.group_id,
        }
    }

    /// Render onto the flat schema; unused cells stay empty.
    pub fn to_record(&self) -> [String; 16] {
        let mut record: [String; 16] = std::array::from_fn(|_| String::new());
        record[IDX_GROUP_ID] = self.group_id().as_str().to_string();
        match self {
            Self::Group(row) => {
                record[IDX_GROUP_NAME] = row.group_name.clone();
            }
            Self::Option(row) => {
                record[IDX_OPTION_ID] = row.option_id.as_str().to_string();
                record[IDX_OPTION_NAME] = row.option_name.clone();
                apply_default_style(&mut record);
            }
            Self::Value(row) => {
                record[IDX_OPTION_ID] = row.option_id.as_str().to_string();
                record[IDX_VALUE_ID] = row.value_id.as_str().to_string();
                record[IDX_VALUE_NAME] = row.value_name.clone();
                apply_default_style(&mut record);
            }
            Self::Product(row) => {
                record[IDX_PRODUCT_ID] = row.product_id.clone();
                record[IDX_COMBINATION_ID] = row.combination_id.clone();
                record[IDX_SKU] = row.sku.clone();
                record[IDX_INTERNAL_ID] = row.internal_id.clone();
                apply_default_style(&mut record);
            }
        }
        record
    }
}

fn apply_default_style(record: &mut [String; 16]) {
    record[IDX_STYLE_ON_PAGE] = STYLE_ON_PAGE.to_string();
    record[IDX_STYLE_ON_CARD] = STYLE_ON_CARD.to_string();
    record[IDX_SWATCH_STYLE] = SWATCH_STYLE.to_string();
    record[IDX_SWATCH_COLOR_1] = SWATCH_COLOR_1.to_string();
    record[IDX_SWATCH_COLOR_2] = SWATCH_COLOR_2.to_string();
}
