//! Interactive shell over the shared library.
//!
//! Reads one command per line, runs it against the library and renders the
//! markdown result. Every command locks the library for its whole run,
//! except `summary`, which releases the lock before calling the text
//! generator. Errors are printed inline and the shell
//! keeps going; only `quit` or end of input stops it.

use std::{io::IsTerminal, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use cloudleaf_core::{
    display::{CreateResult, OperationStatus, ReturnResult, SummaryPanel, SweepResult},
    LendingError, SharedLibrary, SummaryAssistant,
};
use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    cli::{tokenize, ShellCommand, ShellLine, WishCommand},
    renderer::TerminalRenderer,
};

const GREETING: &str = "# CloudLeaf\n\nType `help` for the list of commands, `quit` to leave.\n";

enum Reply {
    Show(String),
    Quit,
}

pub struct Shell {
    library: SharedLibrary,
    summaries: Arc<SummaryAssistant>,
    renderer: TerminalRenderer,
}

impl Shell {
    pub fn new(
        library: SharedLibrary,
        summaries: Arc<SummaryAssistant>,
        renderer: TerminalRenderer,
    ) -> Self {
        Self {
            library,
            summaries,
            renderer,
        }
    }

    /// Runs until `quit` or end of input.
    pub async fn run<R>(&self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let interactive = std::io::stdin().is_terminal();
        self.renderer.render(GREETING)?;

        let mut lines = input.lines();
        loop {
            if interactive {
                self.renderer.prompt("cloudleaf> ")?;
            }
            let Some(line) = lines.next_line().await.context("Failed to read input")? else {
                break;
            };
            match self.handle_line(&line).await {
                Some(Reply::Show(markdown)) => self.renderer.render(&markdown)?,
                Some(Reply::Quit) => break,
                None => {}
            }
        }
        Ok(())
    }

    async fn handle_line(&self, line: &str) -> Option<Reply> {
        let words = match tokenize(line) {
            Ok(words) if words.is_empty() => return None,
            Ok(words) => words,
            Err(e) => return Some(Reply::Show(OperationStatus::failure(e).to_string())),
        };
        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            // Covers `help` and `--help` as well as real mistakes.
            Err(e) => return Some(Reply::Show(e.to_string())),
        };
        debug!("shell command: {command:?}");

        Some(match self.execute(command).await {
            Ok(reply) => reply,
            Err(e) => Reply::Show(OperationStatus::failure(e.to_string()).to_string()),
        })
    }

    async fn execute(&self, command: ShellCommand) -> Result<Reply, LendingError> {
        let mut library = self.library.lock().await;
        let markdown = match command {
            ShellCommand::Login(args) => {
                let user = library.login(&args.into())?;
                format!("Welcome back, {}!\n\n{user}", user.name)
            }
            ShellCommand::Signup(args) => CreateResult::new(library.sign_up(&args.into())?).to_string(),
            ShellCommand::Logout => match library.logout() {
                Some(user) => OperationStatus::success(format!("Goodbye, {}.", user.name)),
                None => OperationStatus::failure("Nobody is logged in."),
            }
            .to_string(),
            ShellCommand::Whoami => match library.current_user() {
                Some(user) => user.to_string(),
                None => "Not logged in. Use `login <name> <password>` or `signup <name> <password>`.\n"
                    .to_string(),
            },
            ShellCommand::Dashboard => library.dashboard()?.to_string(),
            ShellCommand::Marketplace => library.marketplace()?.to_string(),
            ShellCommand::Show(args) => library.book_card(&args.into())?.to_string(),
            ShellCommand::AddBook(args) => CreateResult::new(library.add_book(&args.into())?).to_string(),
            ShellCommand::Borrow(args) => library.borrow_book(&args.into())?.to_string(),
            ShellCommand::Return(args) => {
                let book_id = args.id;
                let transaction = library.return_book(&args.into())?;
                drop(library);
                self.summaries.forget(book_id);
                return Ok(Reply::Show(ReturnResult(transaction).to_string()));
            }
            ShellCommand::Wish { action } => match action {
                WishCommand::Add(args) => {
                    let wish = args.into();
                    if library.add_wish(&wish)? {
                        OperationStatus::success(format!("Added \"{}\" to the wishlist.", wish.text.trim()))
                    } else {
                        OperationStatus::failure(format!("\"{}\" is already on the wishlist.", wish.text.trim()))
                    }
                    .to_string()
                }
                WishCommand::Remove(args) => {
                    let wish = args.into();
                    if library.remove_wish(&wish)? {
                        OperationStatus::success(format!("Removed \"{}\" from the wishlist.", wish.text.trim()))
                    } else {
                        OperationStatus::failure(format!("\"{}\" is not on the wishlist.", wish.text.trim()))
                    }
                    .to_string()
                }
                WishCommand::List => library.wishlist().to_string(),
            },
            ShellCommand::Matches => library.wishlist_match_list()?.to_string(),
            ShellCommand::History => library.history()?.to_string(),
            ShellCommand::Rate(args) => library.rate_transaction(&args.into())?.to_string(),
            ShellCommand::Sweep => SweepResult(library.expire_overdue_loans()?).to_string(),
            ShellCommand::Quit => return Ok(Reply::Quit),
            ShellCommand::Summary(args) => {
                drop(library);
                return self.summary(args.id).await;
            }
        };
        Ok(Reply::Show(markdown))
    }

    async fn summary(&self, book_id: u64) -> Result<Reply, LendingError> {
        let book = self.library.lock().await.book(book_id)?.clone();
        let view = self.summaries.toggle(&book).await;
        Ok(Reply::Show(
            SummaryPanel {
                book: &book,
                view: &view,
            }
            .to_string(),
        ))
    }
}
