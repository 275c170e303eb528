//! Auction command implementation

use tracing::info;

use econ_models::auction::{clear, AuctionBook};

use crate::Result;

/// Run the auction command
pub fn run(path: &str, compact: bool) -> Result<()> {
    let book: AuctionBook = super::read_input(path)?;
    info!(
        sellers = book.sellers.len(),
        buyers = book.buyers.len(),
        "Clearing double auction"
    );
    let result = clear(&book);
    info!(
        price = result.clearing_price,
        quantity = result.clearing_quantity,
        "Auction cleared"
    );
    super::emit(&result, compact)
}
