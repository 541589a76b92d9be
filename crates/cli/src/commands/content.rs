//! Content page commands.
//!
//! # Usage
//!
//! ```bash
//! cbridge content list [--query TEXT] [--page N]
//! cbridge content get UUID...
//! cbridge content create -n NAME -l LABEL [-t TEMPLATE] [--title TITLE] [--hidden]
//! cbridge content update UUID -n NAME -l LABEL [-t TEMPLATE] [--title TITLE] [--hidden]
//! cbridge content delete UUID
//! cbridge content url UUID
//! ```

use clap::{Args, Subcommand};
use commerce_bridge_connector::Connector;
use commerce_bridge_core::{ContentPageId, ContentPageInput};

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum ContentAction {
    /// Search content pages by name
    List {
        #[arg(short, long)]
        query: Option<String>,

        /// Page number, starting at 1
        #[arg(long)]
        page: Option<usize>,
    },
    /// Look up content pages by uuid
    Get {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Create a content page
    Create(PageArgs),
    /// Replace a content page
    Update {
        id: String,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Delete a content page
    Delete { id: String },
    /// Public URL of a content page
    Url { id: String },
}

/// Fields of a content page write.
#[derive(Args)]
pub struct PageArgs {
    /// Page name
    #[arg(short, long)]
    name: String,

    /// Page label, used as its URL
    #[arg(short, long)]
    label: String,

    /// Template name (`content-page`, `content-page-sidebar`, `landing-page`, `faq-page`)
    #[arg(short, long, default_value = "content-page")]
    template: String,

    /// Page title in the request language (default: the name)
    #[arg(long)]
    title: Option<String>,

    /// Store the page unapproved and deleted
    #[arg(long)]
    hidden: bool,
}

impl From<PageArgs> for ContentPageInput {
    fn from(args: PageArgs) -> Self {
        Self {
            name: args.name,
            label: args.label,
            template: args.template,
            visible: !args.hidden,
            title: args.title,
        }
    }
}

/// Run a content page command.
pub async fn run(
    connector: &Connector,
    action: ContentAction,
    lang: Option<&str>,
) -> Result<(), CommandError> {
    match action {
        ContentAction::List { query, page } => {
            print_json(&connector.content_pages(query.as_deref(), lang, page).await?)
        }
        ContentAction::Get { ids } => {
            let ids: Vec<ContentPageId> = ids.into_iter().map(ContentPageId::new).collect();
            print_json(&connector.content_pages_by_ids(&ids, lang).await?)
        }
        ContentAction::Create(args) => {
            let input = ContentPageInput::from(args);
            print_json(&connector.create_content_page(&input, lang).await?)
        }
        ContentAction::Update { id, page } => {
            let input = ContentPageInput::from(page);
            let id = ContentPageId::new(id);
            print_json(&connector.update_content_page(&id, &input, lang).await?)
        }
        ContentAction::Delete { id } => {
            let id = ContentPageId::new(id);
            connector.delete_content_page(&id).await?;
            print_json(&serde_json::json!({ "deleted": id }))
        }
        ContentAction::Url { id } => {
            print_json(&connector.content_url(&ContentPageId::new(id), lang).await?)
        }
    }
}
