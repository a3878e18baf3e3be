use crate::error::AppError;
use crate::soap::xml::section_texts;
use serde::{Deserialize, Serialize};

/// One campus card transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Transaction date, as the service formats it
    pub date: String,
    /// Purchased product description
    pub product: String,
    /// Charged amount, as the service formats it
    pub amount: String,
    /// Piece count
    pub piece: String,
}

/// Campus card transaction history, grouped the way the service groups it
///
/// All three collections are always present; an account with no history
/// in a category has an empty vector there.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardHistory {
    /// Meal purchases
    pub meals: Vec<TransactionRecord>,
    /// Transport purchases
    pub transports: Vec<TransactionRecord>,
    /// Print quota purchases
    pub prints: Vec<TransactionRecord>,
}

impl CardHistory {
    /// Parses the `getCredits` response
    ///
    /// Each section carries its records as four parallel tag groups
    /// (`date`, `product`, `amount`, `piece`). The `date` group fixes the
    /// record count and order; the other groups pair with it by index and
    /// must match its length, otherwise the response is malformed.
    pub fn from_xml(xml: &str) -> Result<Self, AppError> {
        Ok(Self {
            meals: section_records(xml, "meal")?,
            transports: section_records(xml, "transport")?,
            prints: section_records(xml, "print")?,
        })
    }
}

fn section_records(xml: &str, section: &str) -> Result<Vec<TransactionRecord>, AppError> {
    let dates = section_texts(xml, section, "date")?;
    let products = section_texts(xml, section, "product")?;
    let amounts = section_texts(xml, section, "amount")?;
    let pieces = section_texts(xml, section, "piece")?;

    for (tag, group) in [("product", &products), ("amount", &amounts), ("piece", &pieces)] {
        if group.len() != dates.len() {
            return Err(AppError::MalformedResponse(format!(
                "section {section}: {} {tag} entries for {} date entries",
                group.len(),
                dates.len()
            )));
        }
    }

    let records = dates
        .into_iter()
        .zip(products)
        .zip(amounts)
        .zip(pieces)
        .map(|(((date, product), amount), piece)| TransactionRecord {
            date,
            product,
            amount,
            piece,
        })
        .collect();

    Ok(records)
}
