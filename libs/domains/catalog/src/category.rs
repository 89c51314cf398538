//! Display-category classification.
//!
//! A product's category is inferred from its name with a fixed keyword
//! policy. The same rule backs both the category filter and the facet
//! grouping, so the two can never disagree.

/// Keyword that marks a product name as a bar.
pub const BAR_KEYWORD: &str = "bar";
/// Keyword that marks a product name as a coin.
pub const COIN_KEYWORD: &str = "coin";

/// Display category of a catalog product.
///
/// The derived `Ord` fixes the order categories appear in facet output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    GoldBars,
    GoldCoins,
    SpecialEdition,
}

impl Category {
    /// Classify a product name. Bars take precedence over coins; anything
    /// matching neither keyword is a special edition.
    pub fn classify(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains(BAR_KEYWORD) {
            Category::GoldBars
        } else if name.contains(COIN_KEYWORD) {
            Category::GoldCoins
        } else {
            Category::SpecialEdition
        }
    }

    /// Human-readable label used in facet output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::GoldBars => "Gold Bars",
            Category::GoldCoins => "Gold Coins",
            Category::SpecialEdition => "Special Edition",
        }
    }
}
