//! Shell command definitions using clap
//!
//! Each line typed into the shell is split into words by [`tokenize`] and
//! parsed with clap's derive API, so the shell gets the same help output,
//! aliases and argument errors as a regular command line.
//!
//! Argument structs stay in this layer and convert into the core parameter
//! types:
//!
//! ```text
//! Shell line → tokenize → ShellLine (clap) → Core Params → Library
//! ```

use clap::{Args, Parser, Subcommand};
use cloudleaf_core::params::{AddBook, Credentials, Id, RateTransaction, Wish};

/// One line of shell input.
#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    name = "cloudleaf",
    disable_version_flag = true,
    help_template = "Commands:\n{subcommands}"
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands understood by the interactive shell
#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Log in as an existing member
    Login(CredentialsArgs),
    /// Create an account and log in
    #[command(alias = "sign-up")]
    Signup(CredentialsArgs),
    /// Log out; books, loans and the wishlist stay as they are
    Logout,
    /// Show the logged-in member
    Whoami,
    /// Matches, your books, your loans and the wishlist
    #[command(alias = "home")]
    Dashboard,
    /// Available books owned by other members
    #[command(alias = "market")]
    Marketplace,
    /// Show one book
    Show(BookIdArgs),
    /// List a new book you own
    #[command(alias = "add")]
    AddBook(AddBookArgs),
    /// Borrow a book for 14 days
    Borrow(BookIdArgs),
    /// Return a book you are borrowing
    Return(BookIdArgs),
    /// Edit or show the wishlist
    Wish {
        #[command(subcommand)]
        action: WishCommand,
    },
    /// All marketplace books matching the wishlist
    Matches,
    /// Your completed loans
    History,
    /// Rate the other side of a completed loan
    Rate(RateArgs),
    /// Show or hide the summary of a book
    Summary(BookIdArgs),
    /// Return all expired loans now
    Sweep,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Wishlist subcommands
#[derive(Subcommand, Debug)]
pub enum WishCommand {
    /// Add a title or part of one
    Add(WishArgs),
    /// Remove an entry (ignoring case)
    #[command(alias = "rm")]
    Remove(WishArgs),
    /// Show the wishlist
    #[command(alias = "ls")]
    List,
}

#[derive(Args)]
pub struct CredentialsArgs {
    /// Member name (case-insensitive)
    pub name: String,
    /// Password
    pub password: String,
}

impl std::fmt::Debug for CredentialsArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsArgs")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl From<CredentialsArgs> for Credentials {
    fn from(val: CredentialsArgs) -> Self {
        Credentials {
            name: val.name,
            password: val.password,
        }
    }
}

#[derive(Args, Debug)]
pub struct BookIdArgs {
    /// ID of the book
    pub id: u64,
}

impl From<BookIdArgs> for Id {
    fn from(val: BookIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Args, Debug)]
pub struct AddBookArgs {
    /// Title of the book (quote titles with spaces)
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Genre, free text
    pub genre: String,
}

impl From<AddBookArgs> for AddBook {
    fn from(val: AddBookArgs) -> Self {
        AddBook {
            title: val.title,
            author: val.author,
            genre: val.genre,
        }
    }
}

#[derive(Args, Debug)]
pub struct WishArgs {
    /// Wishlist text; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl From<WishArgs> for Wish {
    fn from(val: WishArgs) -> Self {
        Wish {
            text: val.text.join(" "),
        }
    }
}

#[derive(Args, Debug)]
pub struct RateArgs {
    /// ID of the transaction
    pub transaction_id: u64,
    /// Score from 1 to 5
    pub score: u8,
}

impl From<RateArgs> for RateTransaction {
    fn from(val: RateArgs) -> Self {
        RateTransaction {
            transaction_id: val.transaction_id,
            score: val.score,
        }
    }
}

/// Splits a shell line into words.
///
/// Whitespace separates words except inside single or double quotes; a
/// backslash escapes the next character outside single quotes.
pub fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"') | None, '\\') => {
                let escaped = chars
                    .next()
                    .ok_or_else(|| "Trailing backslash".to_string())?;
                current.push(escaped);
                in_word = true;
            }
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("Unterminated {q} quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
