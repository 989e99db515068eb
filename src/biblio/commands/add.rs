use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::Book;

/// Adds a new book to the end of the catalog.
///
/// The id must not be in use yet; a duplicate leaves the catalog untouched
/// and comes back as an error message.
pub fn run(catalog: &mut Catalog, title: String, author: String, id: String) -> CmdResult {
    let mut result = CmdResult::default();

    if catalog.find(&id).is_some() {
        result.add_message(CmdMessage::error(format!(
            "A book with ID {} already exists.",
            id
        )));
        return result;
    }

    let book = Book::new(title, author, id);
    result.affected_books.push(book.clone());
    result.add_message(CmdMessage::success("Book added successfully."));
    catalog.push(book);

    result
}
