//! MCP tool handlers implementation

use std::sync::Arc;

use cloudleaf_core::{
    display::{CreateResult, OperationStatus, ReturnResult, SummaryPanel, SweepResult},
    params as core, SharedLibrary, SummaryAssistant,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types.
///
/// `#[serde(transparent)]` passes JSON straight through to the core type,
/// so the core parameters only need the optional `schema` feature.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type Credentials = McpParams<core::Credentials>;
pub type AddBook = McpParams<core::AddBook>;
pub type Wish = McpParams<core::Wish>;
pub type RateTransaction = McpParams<core::RateTransaction>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(markdown: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(markdown)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    library: SharedLibrary,
    summaries: Arc<SummaryAssistant>,
}

impl McpHandlers {
    pub fn new(library: SharedLibrary, summaries: Arc<SummaryAssistant>) -> Self {
        Self { library, summaries }
    }

    pub async fn login(&self, Parameters(params): Parameters<Credentials>) -> McpResult {
        debug!("login: {params:?}");

        let user = self
            .library
            .lock()
            .await
            .login(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to log in", &e))?;
        text(format!("Welcome back, {}!\n\n{user}", user.name))
    }

    pub async fn sign_up(&self, Parameters(params): Parameters<Credentials>) -> McpResult {
        debug!("sign_up: {params:?}");

        let user = self
            .library
            .lock()
            .await
            .sign_up(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to sign up", &e))?;
        text(CreateResult::new(user).to_string())
    }

    pub async fn logout(&self) -> McpResult {
        let status = match self.library.lock().await.logout() {
            Some(user) => OperationStatus::success(format!("Goodbye, {}.", user.name)),
            None => OperationStatus::failure("Nobody is logged in."),
        };
        text(status.to_string())
    }

    pub async fn whoami(&self) -> McpResult {
        let library = self.library.lock().await;
        match library.current_user() {
            Some(user) => text(user.to_string()),
            None => text("Not logged in."),
        }
    }

    pub async fn dashboard(&self) -> McpResult {
        let dashboard = self
            .library
            .lock()
            .await
            .dashboard()
            .map_err(|e| to_mcp_error("Failed to show dashboard", &e))?;
        text(dashboard.to_string())
    }

    pub async fn marketplace(&self) -> McpResult {
        let marketplace = self
            .library
            .lock()
            .await
            .marketplace()
            .map_err(|e| to_mcp_error("Failed to show marketplace", &e))?;
        text(marketplace.to_string())
    }

    pub async fn show_book(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_book: {params:?}");

        let card = self
            .library
            .lock()
            .await
            .book_card(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to show book", &e))?;
        text(card.to_string())
    }

    pub async fn add_book(&self, Parameters(params): Parameters<AddBook>) -> McpResult {
        debug!("add_book: {params:?}");

        let book = self
            .library
            .lock()
            .await
            .add_book(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to add book", &e))?;
        text(CreateResult::new(book).to_string())
    }

    pub async fn borrow_book(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("borrow_book: {params:?}");

        let receipt = self
            .library
            .lock()
            .await
            .borrow_book(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to borrow book", &e))?;
        text(receipt.to_string())
    }

    pub async fn return_book(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("return_book: {params:?}");

        let transaction = self
            .library
            .lock()
            .await
            .return_book(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to return book", &e))?;
        self.summaries.forget(params.as_ref().id);
        text(ReturnResult(transaction).to_string())
    }

    pub async fn wishlist(&self) -> McpResult {
        text(self.library.lock().await.wishlist().to_string())
    }

    pub async fn add_wish(&self, Parameters(params): Parameters<Wish>) -> McpResult {
        debug!("add_wish: {params:?}");

        let wish = params.as_ref();
        let added = self
            .library
            .lock()
            .await
            .add_wish(wish)
            .map_err(|e| to_mcp_error("Failed to add wishlist entry", &e))?;
        let status = if added {
            OperationStatus::success(format!("Added \"{}\" to the wishlist.", wish.text.trim()))
        } else {
            OperationStatus::failure(format!("\"{}\" is already on the wishlist.", wish.text.trim()))
        };
        text(status.to_string())
    }

    pub async fn remove_wish(&self, Parameters(params): Parameters<Wish>) -> McpResult {
        debug!("remove_wish: {params:?}");

        let wish = params.as_ref();
        let removed = self
            .library
            .lock()
            .await
            .remove_wish(wish)
            .map_err(|e| to_mcp_error("Failed to remove wishlist entry", &e))?;
        let status = if removed {
            OperationStatus::success(format!("Removed \"{}\" from the wishlist.", wish.text.trim()))
        } else {
            OperationStatus::failure(format!("\"{}\" is not on the wishlist.", wish.text.trim()))
        };
        text(status.to_string())
    }

    pub async fn wishlist_matches(&self) -> McpResult {
        let matches = self
            .library
            .lock()
            .await
            .wishlist_match_list()
            .map_err(|e| to_mcp_error("Failed to match wishlist", &e))?;
        text(matches.to_string())
    }

    pub async fn history(&self) -> McpResult {
        let history = self
            .library
            .lock()
            .await
            .history()
            .map_err(|e| to_mcp_error("Failed to show history", &e))?;
        text(history.to_string())
    }

    pub async fn rate_transaction(
        &self,
        Parameters(params): Parameters<RateTransaction>,
    ) -> McpResult {
        debug!("rate_transaction: {params:?}");

        let rating = self
            .library
            .lock()
            .await
            .rate_transaction(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to rate transaction", &e))?;
        text(rating.to_string())
    }

    /// Expands the summary of a book, generating it on first use.
    ///
    /// The library lock is released before the text generator is called.
    pub async fn book_summary(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("book_summary: {params:?}");

        let book = self
            .library
            .lock()
            .await
            .get_book(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to find book", &e))?
            .clone();
        let view = self.summaries.expand(&book).await;
        text(
            SummaryPanel {
                book: &book,
                view: &view,
            }
            .to_string(),
        )
    }

    pub async fn expire_loans(&self) -> McpResult {
        let expired = self
            .library
            .lock()
            .await
            .expire_overdue_loans()
            .map_err(|e| to_mcp_error("Failed to expire loans", &e))?;
        text(SweepResult(expired).to_string())
    }
}
