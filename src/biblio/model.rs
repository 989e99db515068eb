use std::fmt;

/// Outcome of a guarded availability transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The state changed.
    Applied,
    /// The book was already in the requested state; nothing changed.
    AlreadyInState,
}

/// A book in the catalog.
///
/// `title`, `author` and `id` are fixed at creation; only `available` ever
/// changes, and only through [`Book::loan`] and [`Book::give_back`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub id: String,
    pub available: bool,
}

impl Book {
    /// New books start available.
    pub fn new(title: String, author: String, id: String) -> Self {
        Self {
            title,
            author,
            id,
            available: true,
        }
    }

    /// Marks the book as loaned out, unless it already is.
    pub fn loan(&mut self) -> Transition {
        if self.available {
            self.available = false;
            Transition::Applied
        } else {
            Transition::AlreadyInState
        }
    }

    /// Marks the book as back on the shelf, unless it never left.
    pub fn give_back(&mut self) -> Transition {
        if self.available {
            Transition::AlreadyInState
        } else {
            self.available = true;
            Transition::Applied
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.available { "Yes" } else { "No" };
        write!(
            f,
            "- {} ({}) - ID: {} - Available: {}",
            self.title, self.author, self.id, state
        )
    }
}
