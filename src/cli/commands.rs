//! CLI subcommand definitions
//!
//! One subcommand per query; `report` runs the fixed set.

use clap::Subcommand;

use crate::consts::{HOME_CATEGORY, HOME_MAX_PRICE, TECH_CATEGORY, TECH_MIN_PRICE};

/// Main CLI commands
#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Commands {
    /// Print the loaded reviews followed by the standard reports (default)
    Report,
    /// List every loaded review
    List,
    /// Reviews priced within an inclusive range
    Price {
        /// Lower bound (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        min: f64,
        /// Upper bound (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        max: f64,
    },
    /// Number of reviews per product
    Count,
    /// Reviews whose title contains a keyword (case-insensitive)
    Search {
        /// Keyword to look for
        keyword: String,
    },
    /// Upper-cased titles in a category above a price
    Titles {
        /// Category to match (case-insensitive)
        #[arg(long, default_value = TECH_CATEGORY)]
        category: String,
        /// Price threshold (exclusive)
        #[arg(long, default_value_t = TECH_MIN_PRICE, allow_negative_numbers = true)]
        over: f64,
    },
    /// Product ids in a category below a price, cheapest first
    Products {
        /// Category to match (case-insensitive)
        #[arg(long, default_value = HOME_CATEGORY)]
        category: String,
        /// Price threshold (exclusive)
        #[arg(long, default_value_t = HOME_MAX_PRICE, allow_negative_numbers = true)]
        under: f64,
    },
}

impl Commands {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Commands::Report => "report",
            Commands::List => "list",
            Commands::Price { .. } => "price",
            Commands::Count => "count",
            Commands::Search { .. } => "search",
            Commands::Titles { .. } => "titles",
            Commands::Products { .. } => "products",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names() {
        assert_eq!(Commands::Report.name(), "report");
        assert_eq!(
            Commands::Price {
                min: 1.0,
                max: 2.0
            }
            .name(),
            "price"
        );
        assert_eq!(
            Commands::Search {
                keyword: "x".into()
            }
            .name(),
            "search"
        );
    }
}
