use serde::Deserialize;

use barstock_stock_items::StockItemInput;

/// Body of `POST /api/stock_items` and `PUT /api/stock_items/:id`.
///
/// Fields stay optional here so that a missing field reaches the
/// service's validation (400) instead of failing JSON extraction.
#[derive(Debug, Deserialize)]
pub struct StockItemBody {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl StockItemBody {
    pub fn into_input(self) -> StockItemInput {
        StockItemInput {
            name: self.name,
            description: self.description,
        }
    }
}
