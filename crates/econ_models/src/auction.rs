//! Double-auction clearing.
//!
//! Sellers are sorted by ascending ask and buyers by descending bid. Two
//! cursors walk the books, filling `min(remaining ask, remaining bid)` units
//! while the bid covers the ask. The clearing price is the midpoint of the
//! last matched (marginal) ask and bid, rounded to 2 dp, and every
//! participant settles at that single price.

use econ_core::math::rounding::round_money;
use tracing::debug;

/// One side's offer: an ask for sellers, a bid for buyers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Order {
    /// Participant identifier.
    #[cfg_attr(feature = "serde", serde(alias = "participantId"))]
    pub id: String,
    /// Limit price per unit.
    pub price: f64,
    /// Units offered.
    pub quantity: f64,
}

impl Order {
    /// Create an order.
    pub fn new(id: impl Into<String>, price: f64, quantity: f64) -> Self {
        Self {
            id: id.into(),
            price,
            quantity,
        }
    }

    /// Price and quantity clamped to be non-negative; NaN becomes 0.
    fn clamped(&self) -> Self {
        Self {
            id: self.id.clone(),
            price: self.price.max(0.0),
            quantity: self.quantity.max(0.0),
        }
    }
}

/// Both sides of the market.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AuctionBook {
    /// Asks.
    pub sellers: Vec<Order>,
    /// Bids.
    pub buyers: Vec<Order>,
}

impl AuctionBook {
    /// Create a book from both order lists.
    pub fn new(sellers: Vec<Order>, buyers: Vec<Order>) -> Self {
        Self { sellers, buyers }
    }

    /// Clear the book. See [`clear`].
    pub fn clear(&self) -> ClearingResult {
        clear(self)
    }
}

/// A single fill between one seller and one buyer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Match {
    /// Seller identifier.
    pub seller_id: String,
    /// Buyer identifier.
    pub buyer_id: String,
    /// Units exchanged.
    pub quantity: f64,
}

/// A participant's aggregate settlement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Fill {
    /// Participant identifier.
    pub id: String,
    /// Total units matched across all counterparties.
    pub quantity: f64,
    /// Settlement price (the clearing price).
    pub price: f64,
    /// `quantity × price`, rounded: revenue for a seller, cost for a buyer.
    pub amount: f64,
}

/// One step of a supply or demand curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CurvePoint {
    /// Order price.
    pub price: f64,
    /// Cumulative quantity up to and including this order.
    pub cum_quantity: f64,
}

/// Outcome of clearing an [`AuctionBook`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ClearingResult {
    /// Midpoint of the marginal ask and bid; 0 when nothing trades.
    pub clearing_price: f64,
    /// Total units matched.
    pub clearing_quantity: f64,
    /// `clearing_quantity × clearing_price`, rounded.
    pub total_transaction: f64,
    /// Individual fills in matching order.
    pub matches: Vec<Match>,
    /// Per-seller settlements, in book order.
    pub seller_fills: Vec<Fill>,
    /// Per-buyer settlements, in book order.
    pub buyer_fills: Vec<Fill>,
    /// Cumulative supply by ascending ask.
    pub supply_curve: Vec<CurvePoint>,
    /// Cumulative demand by descending bid.
    pub demand_curve: Vec<CurvePoint>,
}

impl ClearingResult {
    /// Whether any units traded.
    pub fn is_cleared(&self) -> bool {
        self.clearing_quantity > 0.0
    }
}

/// Clear a double auction.
///
/// Ties in price keep book order. Zero-quantity orders are skipped by the
/// matching walk but still appear on the curves.
///
/// # Examples
///
/// ```
/// use econ_models::auction::{clear, AuctionBook, Order};
///
/// let book = AuctionBook::new(
///     vec![Order::new("S1", 10.0, 100.0), Order::new("S2", 20.0, 100.0)],
///     vec![Order::new("B1", 30.0, 150.0), Order::new("B2", 15.0, 100.0)],
/// );
/// let result = clear(&book);
/// assert_eq!(result.clearing_quantity, 150.0);
/// assert_eq!(result.clearing_price, 25.0);
/// ```
pub fn clear(book: &AuctionBook) -> ClearingResult {
    let mut sellers: Vec<Order> = book.sellers.iter().map(Order::clamped).collect();
    let mut buyers: Vec<Order> = book.buyers.iter().map(Order::clamped).collect();
    sellers.sort_by(|a, b| a.price.total_cmp(&b.price));
    buyers.sort_by(|a, b| b.price.total_cmp(&a.price));

    let supply_curve = cumulative_curve(&sellers);
    let demand_curve = cumulative_curve(&buyers);

    let mut matches = Vec::new();
    let mut matched_quantity = 0.0;
    let mut marginal_ask = 0.0;
    let mut marginal_bid = 0.0;

    let (mut i, mut j) = (0, 0);
    while i < sellers.len() && j < buyers.len() {
        let ask = sellers[i].price;
        let bid = buyers[j].price;
        if bid < ask {
            break;
        }

        let quantity = sellers[i].quantity.min(buyers[j].quantity);
        if quantity > 0.0 {
            matches.push(Match {
                seller_id: sellers[i].id.clone(),
                buyer_id: buyers[j].id.clone(),
                quantity,
            });
            matched_quantity += quantity;
            marginal_ask = ask;
            marginal_bid = bid;
            sellers[i].quantity -= quantity;
            buyers[j].quantity -= quantity;
        }

        if sellers[i].quantity <= 0.0 {
            i += 1;
        }
        if buyers[j].quantity <= 0.0 {
            j += 1;
        }
    }

    let clearing_price = if matched_quantity > 0.0 {
        round_money((marginal_ask + marginal_bid) / 2.0)
    } else {
        debug!(
            sellers = book.sellers.len(),
            buyers = book.buyers.len(),
            "auction: no price overlap, nothing traded"
        );
        0.0
    };

    let seller_fills = settle(&book.sellers, &matches, clearing_price, |m| &m.seller_id);
    let buyer_fills = settle(&book.buyers, &matches, clearing_price, |m| &m.buyer_id);

    ClearingResult {
        clearing_price,
        clearing_quantity: matched_quantity,
        total_transaction: round_money(matched_quantity * clearing_price),
        matches,
        seller_fills,
        buyer_fills,
        supply_curve,
        demand_curve,
    }
}

fn cumulative_curve(sorted: &[Order]) -> Vec<CurvePoint> {
    sorted
        .iter()
        .scan(0.0, |cumulative, order| {
            *cumulative += order.quantity;
            Some(CurvePoint {
                price: order.price,
                cum_quantity: *cumulative,
            })
        })
        .collect()
}

/// Aggregate fills per participant id, first appearance in `orders` first.
fn settle<F>(orders: &[Order], matches: &[Match], price: f64, side: F) -> Vec<Fill>
where
    F: Fn(&Match) -> &String,
{
    let mut fills: Vec<Fill> = Vec::new();
    for order in orders {
        if fills.iter().any(|fill| fill.id == order.id) {
            continue;
        }
        let quantity: f64 = matches
            .iter()
            .filter(|m| side(m) == &order.id)
            .map(|m| m.quantity)
            .sum();
        if quantity > 0.0 {
            fills.push(Fill {
                id: order.id.clone(),
                quantity,
                price,
                amount: round_money(quantity * price),
            });
        }
    }
    fills
}
