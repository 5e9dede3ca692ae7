//! `barstock-stock-items` — the stock item domain entity.

pub mod item;

pub use item::{NewStockItem, StockItem, StockItemInput};
