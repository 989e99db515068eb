use crate::catalog::Catalog;
use crate::commands::CmdResult;

use super::helpers::not_found_message;

/// Looks a single book up by id.
pub fn run(catalog: &Catalog, id: &str) -> CmdResult {
    let mut result = CmdResult::default();
    match catalog.find(id) {
        Some(book) => result.listed_books.push(book.clone()),
        None => result.add_message(not_found_message(id)),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};

    #[test]
    fn finds_by_id() {
        let mut catalog = Catalog::new();
        add::run(
            &mut catalog,
            "Dune".into(),
            "Frank Herbert".into(),
            "111".into(),
        );

        let result = run(&catalog, "111");
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].title, "Dune");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn miss_reports_not_found() {
        let catalog = Catalog::new();
        let result = run(&catalog, "999");

        assert!(result.listed_books.is_empty());
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(result.messages[0].content.contains("999"));
    }
}
