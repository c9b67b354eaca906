use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Notify;

use super::*;

/// Answers from a fixed script and counts calls.
struct ScriptedGenerator {
    answers: Mutex<Vec<Result<String, SummaryError>>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    fn new(answers: Vec<Result<String, SummaryError>>) -> Arc<Self> {
        Arc::new(Self {
            answers: Mutex::new(answers.into_iter().rev().collect()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, SummaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(request.prompt.clone());
        self.answers
            .lock()
            .unwrap()
            .pop()
            .unwrap_or(Err(SummaryError::EmptyResponse))
    }
}

/// Blocks until released, so tests can observe the loading state.
struct GatedGenerator {
    gate: Notify,
}

#[async_trait]
impl TextGenerator for GatedGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, SummaryError> {
        self.gate.notified().await;
        Ok("late summary".to_string())
    }
}

fn moby_dick() -> Book {
    Book::new(1, "Moby Dick", "Herman Melville", "Adventure", 2)
}

#[tokio::test]
async fn test_first_expand_fetches_and_caches() {
    let generator = ScriptedGenerator::new(vec![Ok("A whale hunt.".to_string())]);
    let assistant = SummaryAssistant::new(generator.clone(), DEFAULT_MODEL);
    let book = moby_dick();

    assert_eq!(
        assistant.toggle(&book).await,
        SummaryView::Ready("A whale hunt.".to_string())
    );
    assert_eq!(assistant.toggle(&book).await, SummaryView::Hidden);
    assert_eq!(
        assistant.toggle(&book).await,
        SummaryView::Ready("A whale hunt.".to_string())
    );

    assert_eq!(generator.calls(), 1);
    assert_eq!(
        generator.prompts.lock().unwrap().as_slice(),
        [summary_prompt(&book)]
    );
}

#[tokio::test]
async fn test_failure_shows_generic_message_and_retries() {
    let generator = ScriptedGenerator::new(vec![
        Err(SummaryError::HttpStatus(500)),
        Ok("Second time lucky.".to_string()),
    ]);
    let assistant = SummaryAssistant::new(generator.clone(), DEFAULT_MODEL);
    let book = moby_dick();

    assert_eq!(
        assistant.expand(&book).await,
        SummaryView::Failed(SUMMARY_FAILED_MESSAGE.to_string())
    );
    let card = assistant.card(book.id).unwrap();
    assert!(card.expanded);
    assert!(card.summary.is_none());

    assert_eq!(
        assistant.expand(&book).await,
        SummaryView::Ready("Second time lucky.".to_string())
    );
    assert_eq!(generator.calls(), 2);
}

#[tokio::test]
async fn test_cards_are_independent() {
    let generator = ScriptedGenerator::new(vec![Ok("one".to_string()), Ok("two".to_string())]);
    let assistant = SummaryAssistant::new(generator.clone(), DEFAULT_MODEL);
    let first = moby_dick();
    let second = Book::new(2, "Pride and Prejudice", "Jane Austen", "Romance", 3);

    assistant.expand(&first).await;
    assistant.expand(&second).await;

    assert_eq!(assistant.card(1).unwrap().summary.as_deref(), Some("one"));
    assert_eq!(assistant.card(2).unwrap().summary.as_deref(), Some("two"));
}

#[tokio::test]
async fn test_forget_drops_cache() {
    let generator = ScriptedGenerator::new(vec![Ok("one".to_string()), Ok("again".to_string())]);
    let assistant = SummaryAssistant::new(generator.clone(), DEFAULT_MODEL);
    let book = moby_dick();

    assistant.expand(&book).await;
    assistant.forget(book.id);
    assert!(assistant.card(book.id).is_none());

    assert_eq!(
        assistant.expand(&book).await,
        SummaryView::Ready("again".to_string())
    );
    assert_eq!(generator.calls(), 2);
}

#[tokio::test]
async fn test_toggle_is_disabled_while_loading() {
    let generator = Arc::new(GatedGenerator {
        gate: Notify::new(),
    });
    let assistant = Arc::new(SummaryAssistant::new(generator.clone(), DEFAULT_MODEL));
    let book = moby_dick();

    let pending = {
        let assistant = Arc::clone(&assistant);
        let book = book.clone();
        tokio::spawn(async move { assistant.expand(&book).await })
    };
    while !assistant.card(book.id).is_some_and(|c| c.is_loading()) {
        tokio::task::yield_now().await;
    }

    assert_eq!(assistant.toggle(&book).await, SummaryView::Loading);
    assert_eq!(assistant.card(book.id).unwrap().view(), SummaryView::Loading);

    generator.gate.notify_one();
    assert_eq!(
        pending.await.unwrap(),
        SummaryView::Ready("late summary".to_string())
    );
}

#[tokio::test]
async fn test_answer_for_forgotten_card_is_discarded() {
    let generator = Arc::new(GatedGenerator {
        gate: Notify::new(),
    });
    let assistant = Arc::new(SummaryAssistant::new(generator.clone(), DEFAULT_MODEL));
    let book = moby_dick();

    let pending = {
        let assistant = Arc::clone(&assistant);
        let book = book.clone();
        tokio::spawn(async move { assistant.expand(&book).await })
    };
    while !assistant.card(book.id).is_some_and(|c| c.is_loading()) {
        tokio::task::yield_now().await;
    }

    assistant.forget(book.id);
    generator.gate.notify_one();

    assert_eq!(pending.await.unwrap(), SummaryView::Discarded);
    assert!(assistant.card(book.id).is_none());
}
