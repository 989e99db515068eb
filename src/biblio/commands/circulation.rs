//! Loan and return: the two availability transitions, looked up by id.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::Transition;

use super::helpers::not_found_message;

pub fn loan(catalog: &mut Catalog, id: &str) -> CmdResult {
    circulate(catalog, id, Direction::Out)
}

pub fn give_back(catalog: &mut Catalog, id: &str) -> CmdResult {
    circulate(catalog, id, Direction::In)
}

#[derive(Clone, Copy)]
enum Direction {
    Out,
    In,
}

fn circulate(catalog: &mut Catalog, id: &str, direction: Direction) -> CmdResult {
    let mut result = CmdResult::default();

    let book = match catalog.find_mut(id) {
        Some(book) => book,
        None => {
            result.add_message(not_found_message(id));
            return result;
        }
    };

    let transition = match direction {
        Direction::Out => book.loan(),
        Direction::In => book.give_back(),
    };

    match transition {
        Transition::Applied => {
            let verb = match direction {
                Direction::Out => "loaned",
                Direction::In => "returned",
            };
            result.add_message(CmdMessage::success(format!("Book {} successfully.", verb)));
            result.affected_books.push(book.clone());
        }
        Transition::AlreadyInState => {
            let state = match direction {
                Direction::Out => "loaned out",
                Direction::In => "available",
            };
            result.add_message(CmdMessage::warning(format!(
                "The book '{}' is already {}.",
                book.title, state
            )));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};

    fn catalog_with_dune() -> Catalog {
        let mut catalog = Catalog::new();
        add::run(
            &mut catalog,
            "Dune".into(),
            "Frank Herbert".into(),
            "111".into(),
        );
        catalog
    }

    #[test]
    fn loan_marks_the_book_unavailable() {
        let mut catalog = catalog_with_dune();
        let result = loan(&mut catalog, "111");

        assert!(!catalog.find("111").unwrap().available);
        assert!(matches!(result.messages[0].level, MessageLevel::Success));
    }

    #[test]
    fn second_loan_warns_and_keeps_state() {
        let mut catalog = catalog_with_dune();
        loan(&mut catalog, "111");
        let result = loan(&mut catalog, "111");

        assert!(!catalog.find("111").unwrap().available);
        assert!(result.affected_books.is_empty());
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert!(result.messages[0].content.contains("already loaned out"));
    }

    #[test]
    fn give_back_restores_availability() {
        let mut catalog = catalog_with_dune();
        loan(&mut catalog, "111");
        let result = give_back(&mut catalog, "111");

        assert!(catalog.find("111").unwrap().available);
        assert!(matches!(result.messages[0].level, MessageLevel::Success));
    }

    #[test]
    fn give_back_on_shelved_book_warns() {
        let mut catalog = catalog_with_dune();
        let result = give_back(&mut catalog, "111");

        assert!(catalog.find("111").unwrap().available);
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert!(result.messages[0].content.contains("already available"));
    }

    #[test]
    fn unknown_id_reports_not_found_and_mutates_nothing() {
        let mut catalog = catalog_with_dune();
        let result = loan(&mut catalog, "999");

        assert!(catalog.find("111").unwrap().available);
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(result.messages[0].content.contains("999"));
    }
}
