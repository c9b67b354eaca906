//! MCP server implementation for CloudLeaf
//!
//! Exposes the lending circle as Model Context Protocol tools so an AI
//! assistant can log in, browse, borrow and return books on a member's
//! behalf. Tool output is the same markdown the shell prints.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use cloudleaf_core::{SharedLibrary, SummaryAssistant};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{AddBook, Credentials, Id, McpResult, RateTransaction, Wish};

/// MCP server for CloudLeaf
#[derive(Clone)]
pub struct CloudLeafMcpServer {
    library: SharedLibrary,
    summaries: Arc<SummaryAssistant>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CloudLeafMcpServer {
    pub fn new(library: SharedLibrary, summaries: Arc<SummaryAssistant>) -> Self {
        Self {
            library,
            summaries,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.library.clone(), self.summaries.clone())
    }

    #[tool(
        name = "login",
        description = "Log in as an existing member. The name is matched ignoring case. Sample members Alice, Bob, Charlie and Diana use the password 'password123'. Most other tools need a logged-in member."
    )]
    async fn login(&self, params: Parameters<Credentials>) -> McpResult {
        self.handlers().login(params).await
    }

    #[tool(
        name = "sign_up",
        description = "Create a new member with a unique name and a password, and log in as that member. New members start with the default trust score and no ratings."
    )]
    async fn sign_up(&self, params: Parameters<Credentials>) -> McpResult {
        self.handlers().sign_up(params).await
    }

    #[tool(
        name = "logout",
        description = "End the current session. Books, loans and the wishlist are kept."
    )]
    async fn logout(&self) -> McpResult {
        self.handlers().logout().await
    }

    #[tool(name = "whoami", description = "Show the logged-in member, if any.")]
    async fn whoami(&self) -> McpResult {
        self.handlers().whoami().await
    }

    #[tool(
        name = "dashboard",
        description = "Show the logged-in member's dashboard: wishlist matches in the marketplace, the books they own with loan countdowns, the books they are borrowing, and the wishlist."
    )]
    async fn dashboard(&self) -> McpResult {
        self.handlers().dashboard().await
    }

    #[tool(
        name = "marketplace",
        description = "List every available book owned by someone other than the logged-in member. These are the books that can be borrowed."
    )]
    async fn marketplace(&self) -> McpResult {
        self.handlers().marketplace().await
    }

    #[tool(
        name = "show_book",
        description = "Show one book by ID with its owner, status and, for the owner or borrower of a book on loan, the days left until it is due back."
    )]
    async fn show_book(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_book(params).await
    }

    #[tool(
        name = "add_book",
        description = "List a new book owned by the logged-in member. Title, author and genre are all required. The book starts out available."
    )]
    async fn add_book(&self, params: Parameters<AddBook>) -> McpResult {
        self.handlers().add_book(params).await
    }

    #[tool(
        name = "borrow_book",
        description = "Borrow an available book owned by another member. The request is approved at once and the loan lasts 14 days; expired loans are returned automatically."
    )]
    async fn borrow_book(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().borrow_book(params).await
    }

    #[tool(
        name = "return_book",
        description = "Return a book the logged-in member is borrowing. The loan is recorded in the lending history and can then be rated by both sides."
    )]
    async fn return_book(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().return_book(params).await
    }

    #[tool(
        name = "wishlist",
        description = "Show the shared wishlist of titles to look out for."
    )]
    async fn wishlist(&self) -> McpResult {
        self.handlers().wishlist().await
    }

    #[tool(
        name = "add_wish",
        description = "Add a title, or part of one, to the wishlist. Entries are matched against marketplace titles ignoring case. Requires a logged-in member."
    )]
    async fn add_wish(&self, params: Parameters<Wish>) -> McpResult {
        self.handlers().add_wish(params).await
    }

    #[tool(
        name = "remove_wish",
        description = "Remove an entry from the wishlist, ignoring case. Requires a logged-in member."
    )]
    async fn remove_wish(&self, params: Parameters<Wish>) -> McpResult {
        self.handlers().remove_wish(params).await
    }

    #[tool(
        name = "wishlist_matches",
        description = "List every marketplace book whose title contains a wishlist entry."
    )]
    async fn wishlist_matches(&self) -> McpResult {
        self.handlers().wishlist_matches().await
    }

    #[tool(
        name = "history",
        description = "List the completed loans the logged-in member took part in, as lender or borrower, with their transaction IDs and rating state."
    )]
    async fn history(&self) -> McpResult {
        self.handlers().history().await
    }

    #[tool(
        name = "rate_transaction",
        description = "Rate the other side of a completed loan with a score from 1 to 5. The lender rates the borrower and the borrower rates the lender, once each."
    )]
    async fn rate_transaction(&self, params: Parameters<RateTransaction>) -> McpResult {
        self.handlers().rate_transaction(params).await
    }

    #[tool(
        name = "book_summary",
        description = "Get a short summary of a book from the text-generation service. Summaries are cached per book; if generation fails a generic message is returned and the next call retries."
    )]
    async fn book_summary(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().book_summary(params).await
    }

    #[tool(
        name = "expire_loans",
        description = "Return every loan whose due date has passed right now, instead of waiting for the periodic sweep."
    )]
    async fn expire_loans(&self) -> McpResult {
        self.handlers().expire_loans().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CloudLeafMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "cloudleaf".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"CloudLeaf is a peer-to-peer book lending circle. Members list the books they own and borrow books owned by others.

## Core Concepts
- **Books**: owned by one member, either Available or On Loan
- **Loans**: last 14 days, are approved at once and are returned automatically when they expire
- **Transactions**: completed loans, each side can rate the other once
- **Wishlist**: shared titles to look out for, matched against the marketplace

## Typical Session
1. `login` (or `sign_up`), then `dashboard` for an overview
2. `marketplace` to browse, `show_book` and `book_summary` for details
3. `borrow_book`, later `return_book`
4. `history` and `rate_transaction` once a loan is complete

Only one member is logged in at a time; `logout` ends the session."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CloudLeafMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting CloudLeaf MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
