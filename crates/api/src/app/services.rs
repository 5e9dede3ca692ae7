use std::sync::Arc;

use barstock_infra::{StockItemService, Storage};

/// Services shared by the route handlers.
pub struct AppServices {
    stock_items: StockItemService,
}

impl AppServices {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            stock_items: StockItemService::new(storage),
        }
    }

    pub fn stock_items(&self) -> &StockItemService {
        &self.stock_items
    }
}
