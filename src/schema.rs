// 📐 Schema Normalizer - Raw header variants → canonical column names
// "ProdName " and " CATEGORY " become product_name and category

use crate::table::Table;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const PRODUCT_NAME: &str = "product_name";
pub const CATEGORY: &str = "category";
pub const PRICE: &str = "price";
pub const QTY: &str = "qty";
pub const DATE: &str = "date";
pub const SALES: &str = "sales";

/// Canonical name → accepted variants (already snake_cased)
const SYNONYMS: &[(&str, &[&str])] = &[
    (
        PRODUCT_NAME,
        &["prodname", "product", "product_name", "productname", "item", "item_name"],
    ),
    (CATEGORY, &["category", "cat", "product_category"]),
    (PRICE, &["price", "unit_price", "unitprice"]),
    (QTY, &["qty", "quantity", "units"]),
    (
        DATE,
        &["date", "date_sold", "sale_date", "sold_date", "order_date"],
    ),
    (
        SALES,
        &["sales", "amount", "total", "revenue", "sales_amount"],
    ),
];

/// One header rename performed by the normalizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRename {
    pub from: String,
    pub to: String,
}

pub struct SchemaNormalizer {
    synonyms: Vec<(String, Vec<String>)>,
}

impl SchemaNormalizer {
    /// Normalizer with the fixed sales synonym map
    pub fn new() -> Self {
        SchemaNormalizer {
            synonyms: SYNONYMS
                .iter()
                .map(|(canonical, variants)| {
                    (
                        canonical.to_string(),
                        variants.iter().map(|v| v.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Strip BOM, trim, lowercase, whitespace runs → "_"
    pub fn snake_case(raw: &str) -> String {
        raw.trim_start_matches('\u{feff}')
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Canonical name for a raw header; unknown headers keep their snake_case form
    pub fn canonical_name(&self, raw: &str) -> String {
        let snake = Self::snake_case(raw);
        self.synonyms
            .iter()
            .find(|(_, variants)| variants.iter().any(|v| *v == snake))
            .map(|(canonical, _)| canonical.clone())
            .unwrap_or(snake)
    }

    /// Rename every header in place. Later headers colliding with an earlier
    /// name get a numeric suffix so names stay unique.
    pub fn normalize(&self, table: &mut Table) -> Vec<ColumnRename> {
        let mut renames = Vec::new();
        let mut taken: Vec<String> = Vec::new();

        for index in 0..table.headers().len() {
            let raw = table.headers()[index].clone();
            let base = self.canonical_name(&raw);

            let mut name = base.clone();
            let mut suffix = 2;
            while taken.contains(&name) {
                name = format!("{}_{}", base, suffix);
                suffix += 1;
            }
            taken.push(name.clone());

            if name != raw {
                table.rename_column(index, name.clone());
                renames.push(ColumnRename { from: raw, to: name });
            }
        }

        info!(renamed = renames.len(), headers = ?table.headers(), "normalized headers");
        renames
    }
}

impl Default for SchemaNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(SchemaNormalizer::snake_case(" CATEGORY "), "category");
        assert_eq!(SchemaNormalizer::snake_case("Date  Sold"), "date_sold");
        assert_eq!(SchemaNormalizer::snake_case("\u{feff}ProdName"), "prodname");
    }

    #[test]
    fn test_original_headers_map_to_canonical() {
        let mut table = Table::from_rows(
            &["ProdName ", " CATEGORY ", "Price", "Qty", "Date Sold"],
            &[],
        );
        let renames = SchemaNormalizer::new().normalize(&mut table);

        assert_eq!(table.headers(), &["product_name", "category", "price", "qty", "date"]);
        assert_eq!(renames.len(), 5);
        assert_eq!(renames[0].from, "ProdName ");
    }

    #[test]
    fn test_unknown_columns_pass_through() {
        let mut table = Table::from_rows(&["Product", "Store Region", "Revenue"], &[]);
        let renames = SchemaNormalizer::new().normalize(&mut table);

        assert_eq!(table.headers(), &["product_name", "store_region", "sales"]);
        assert_eq!(renames.len(), 3);
    }

    #[test]
    fn test_colliding_headers_get_suffix() {
        let mut table = Table::from_rows(&["Qty", "quantity", "QTY"], &[]);
        SchemaNormalizer::new().normalize(&mut table);

        assert_eq!(table.headers(), &["qty", "qty_2", "qty_3"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let normalizer = SchemaNormalizer::new();
        let mut table = Table::from_rows(&["Item Name", "Qty", "quantity"], &[]);
        normalizer.normalize(&mut table);
        let first = table.headers().to_vec();

        let renames = normalizer.normalize(&mut table);
        assert!(renames.is_empty());
        assert_eq!(table.headers(), first.as_slice());
    }
}
