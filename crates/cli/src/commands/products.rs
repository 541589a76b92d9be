//! Product commands.
//!
//! # Usage
//!
//! ```bash
//! cbridge products list [--category ID] [--keyword TEXT] [--page N]
//! cbridge products get CODE...
//! cbridge products url CODE
//! ```

use clap::Subcommand;
use commerce_bridge_connector::Connector;
use commerce_bridge_core::{CategoryId, ProductCode};

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum ProductAction {
    /// Search products, optionally within a category
    List {
        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        keyword: Option<String>,

        /// Page number, starting at 1
        #[arg(long)]
        page: Option<usize>,
    },
    /// Look up products by code
    Get {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Public URL of a product
    Url { code: String },
}

/// Run a product command.
pub async fn run(
    connector: &Connector,
    action: ProductAction,
    lang: Option<&str>,
) -> Result<(), CommandError> {
    match action {
        ProductAction::List {
            category,
            keyword,
            page,
        } => {
            let category = category.map(CategoryId::new);
            let result = connector
                .products(category.as_ref(), keyword.as_deref(), lang, page)
                .await?;
            print_json(&result)
        }
        ProductAction::Get { codes } => {
            let codes: Vec<ProductCode> = codes.into_iter().map(ProductCode::new).collect();
            print_json(&connector.products_by_ids(&codes).await?)
        }
        ProductAction::Url { code } => {
            print_json(&connector.product_url(&ProductCode::new(code)).await?)
        }
    }
}
