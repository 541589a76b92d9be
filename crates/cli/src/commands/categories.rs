//! Category commands.
//!
//! # Usage
//!
//! ```bash
//! cbridge categories list [--parent ID] [--keyword TEXT] [--page N]
//! cbridge categories tree [--parent ID]
//! cbridge categories get ID...
//! cbridge categories url ID
//! cbridge categories resolve URL
//! ```

use clap::Subcommand;
use commerce_bridge_connector::Connector;
use commerce_bridge_core::CategoryId;

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum CategoryAction {
    /// List categories, 20 per page
    List {
        /// Only list categories below this one
        #[arg(short, long)]
        parent: Option<String>,

        /// Case-insensitive label filter
        #[arg(short, long)]
        keyword: Option<String>,

        /// Page number, starting at 1
        #[arg(long)]
        page: Option<usize>,
    },
    /// Show categories as a nested tree
    Tree {
        /// Only show the tree below this category
        #[arg(short, long)]
        parent: Option<String>,
    },
    /// Look up categories by identifier
    Get {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Public URL of a category
    Url { id: String },
    /// Category identifier behind a public URL
    Resolve { url: String },
}

/// Run a category command.
pub async fn run(
    connector: &Connector,
    action: CategoryAction,
    lang: Option<&str>,
) -> Result<(), CommandError> {
    match action {
        CategoryAction::List {
            parent,
            keyword,
            page,
        } => {
            let parent = parent.map(CategoryId::new);
            let result = connector
                .categories(parent.as_ref(), keyword.as_deref(), lang, page)
                .await?;
            print_json(&result)
        }
        CategoryAction::Tree { parent } => {
            let parent = parent.map(CategoryId::new);
            let result = connector.category_tree(parent.as_ref(), lang).await?;
            print_json(&result)
        }
        CategoryAction::Get { ids } => {
            let ids: Vec<CategoryId> = ids.into_iter().map(CategoryId::new).collect();
            print_json(&connector.categories_by_ids(&ids, lang).await?)
        }
        CategoryAction::Url { id } => {
            print_json(&connector.category_url(&CategoryId::new(id), lang).await?)
        }
        CategoryAction::Resolve { url } => {
            print_json(&connector.category_id_for_url(&url, lang).await?)
        }
    }
}
