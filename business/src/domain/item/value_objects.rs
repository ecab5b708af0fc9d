use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Closed set of item categories.
///
/// Variants are declared in display order; `Ord` follows that order so a
/// `BTreeMap<Category, _>` iterates the same way the whitelist is listed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Category {
    #[strum(serialize = "時計")]
    #[serde(rename = "時計")]
    Watch,
    #[strum(serialize = "バッグ")]
    #[serde(rename = "バッグ")]
    Bag,
    #[strum(serialize = "ジュエリー")]
    #[serde(rename = "ジュエリー")]
    Jewelry,
    #[strum(serialize = "靴")]
    #[serde(rename = "靴")]
    Shoes,
    #[strum(serialize = "その他")]
    #[serde(rename = "その他")]
    Other,
}

impl Category {
    /// Labels of every category, in declared order.
    pub fn labels() -> Vec<&'static str> {
        Category::iter().map(Category::label).collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Watch => "時計",
            Category::Bag => "バッグ",
            Category::Jewelry => "ジュエリー",
            Category::Shoes => "靴",
            Category::Other => "その他",
        }
    }

    pub fn is_valid(label: &str) -> bool {
        label.parse::<Category>().is_ok()
    }
}
