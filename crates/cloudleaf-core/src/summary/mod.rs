//! Book summaries from an external text-generation service.
//!
//! The [`SummaryAssistant`] keeps one [`SummaryCard`] per book card. The
//! first time a card is expanded it sends a fixed prompt built from the
//! book's title and author to a [`TextGenerator`] and caches the answer for
//! as long as the card lives. A failure is logged and shown as a generic
//! message; expanding the card again retries.
//!
//! While a request is in flight the card refuses to toggle and no second
//! request is started. The card lock is never held across the request, so
//! other cards and the rest of the library stay responsive. If a card is
//! forgotten while its request is running, the late answer is dropped.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use async_trait::async_trait;
use log::{debug, error};

use crate::{error::SummaryError, models::Book};

pub mod gemini;

pub use gemini::GeminiClient;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Message shown when a summary cannot be produced.
pub const SUMMARY_FAILED_MESSAGE: &str = "Could not generate summary.";

/// What is sent to the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
}

/// An external service turning a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, SummaryError>;
}

/// Settings for the text-generation client.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub model: String,
    pub api_base_url: String,
    pub api_key: Option<String>,
    pub request_timeout: Duration,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base_url: gemini::DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Builds the summary prompt for a book.
///
/// # Examples
///
/// ```rust
/// use cloudleaf_core::{models::Book, summary::summary_prompt};
///
/// let book = Book::new(1, "Moby Dick", "Herman Melville", "Adventure", 2);
/// assert_eq!(
///     summary_prompt(&book),
///     "Provide a concise, one-paragraph summary for the public domain book \"Moby Dick\" by Herman Melville."
/// );
/// ```
pub fn summary_prompt(book: &Book) -> String {
    format!(
        "Provide a concise, one-paragraph summary for the public domain book \"{}\" by {}.",
        book.title, book.author
    )
}

/// What a book card shows in its summary area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryView {
    /// Collapsed
    Hidden,
    /// A request is running; the toggle is disabled
    Loading,
    /// The cached summary
    Ready(String),
    /// The generic failure message
    Failed(String),
    /// The card was forgotten before the answer arrived
    Discarded,
}

/// Summary state of a single book card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryCard {
    pub summary: Option<String>,
    pub expanded: bool,
    pub error: Option<String>,
    in_flight: Option<u64>,
}

impl SummaryCard {
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn view(&self) -> SummaryView {
        if !self.expanded {
            SummaryView::Hidden
        } else if self.is_loading() {
            SummaryView::Loading
        } else if let Some(summary) = &self.summary {
            SummaryView::Ready(summary.clone())
        } else if let Some(error) = &self.error {
            SummaryView::Failed(error.clone())
        } else {
            SummaryView::Hidden
        }
    }
}

#[derive(Default)]
struct Cards {
    by_book: HashMap<u64, SummaryCard>,
    requests_started: u64,
}

/// Per-card cache in front of a [`TextGenerator`].
pub struct SummaryAssistant {
    generator: Arc<dyn TextGenerator>,
    model: String,
    cards: Mutex<Cards>,
}

impl SummaryAssistant {
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
            cards: Mutex::new(Cards::default()),
        }
    }

    /// Expands a collapsed card or collapses an expanded one.
    ///
    /// Does nothing while the card's request is in flight.
    pub async fn toggle(&self, book: &Book) -> SummaryView {
        {
            let mut cards = self.lock();
            let card = cards.by_book.entry(book.id).or_default();
            if card.is_loading() {
                return SummaryView::Loading;
            }
            if card.expanded {
                card.expanded = false;
                return SummaryView::Hidden;
            }
        }
        self.expand(book).await
    }

    /// Shows the card's summary, generating it if none is cached.
    pub async fn expand(&self, book: &Book) -> SummaryView {
        let request_id = {
            let mut cards = self.lock();
            cards.requests_started += 1;
            let request_id = cards.requests_started;
            let card = cards.by_book.entry(book.id).or_default();
            if card.is_loading() {
                return SummaryView::Loading;
            }
            card.expanded = true;
            if card.summary.is_some() {
                return card.view();
            }
            card.error = None;
            card.in_flight = Some(request_id);
            request_id
        };

        let request = GenerationRequest {
            model: self.model.clone(),
            prompt: summary_prompt(book),
        };
        debug!("Requesting summary for book {} ({})", book.id, request.model);
        let outcome = self.generator.generate(&request).await;

        let mut cards = self.lock();
        let Some(card) = cards
            .by_book
            .get_mut(&book.id)
            .filter(|card| card.in_flight == Some(request_id))
        else {
            debug!("Dropping summary for forgotten card of book {}", book.id);
            return SummaryView::Discarded;
        };
        card.in_flight = None;
        match outcome {
            Ok(text) => card.summary = Some(text),
            Err(e) => {
                error!("Error generating summary for book {}: {e}", book.id);
                card.error = Some(SUMMARY_FAILED_MESSAGE.to_string());
            }
        }
        card.view()
    }

    /// Current state of a book's card, if it has one.
    pub fn card(&self, book_id: u64) -> Option<SummaryCard> {
        self.lock().by_book.get(&book_id).cloned()
    }

    /// Drops a card and its cached summary.
    pub fn forget(&self, book_id: u64) {
        self.lock().by_book.remove(&book_id);
    }

    fn lock(&self) -> MutexGuard<'_, Cards> {
        self.cards.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests;
