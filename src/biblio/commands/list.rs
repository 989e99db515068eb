use crate::catalog::Catalog;
use crate::commands::CmdResult;

/// Every book, in the order it was added.
pub fn run(catalog: &Catalog) -> CmdResult {
    CmdResult::default().with_listed_books(catalog.books().to_vec())
}
