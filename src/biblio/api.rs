//! # API Facade
//!
//! `LibraryApi` is the single entry point for catalog operations, whatever
//! the UI. It owns the catalog for the lifetime of the process and does
//! nothing but dispatch: logic lives in `commands/*.rs`, and nothing from
//! here inward touches stdout or stderr.

use crate::catalog::Catalog;
use crate::commands::{self, CmdResult};

#[derive(Debug, Default)]
pub struct LibraryApi {
    catalog: Catalog,
}

impl LibraryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_book(&mut self, title: String, author: String, id: String) -> CmdResult {
        commands::add::run(&mut self.catalog, title, author, id)
    }

    pub fn loan_book(&mut self, id: &str) -> CmdResult {
        commands::circulation::loan(&mut self.catalog, id)
    }

    pub fn return_book(&mut self, id: &str) -> CmdResult {
        commands::circulation::give_back(&mut self.catalog, id)
    }

    pub fn list_books(&self) -> CmdResult {
        commands::list::run(&self.catalog)
    }

    pub fn find_book(&self, id: &str) -> CmdResult {
        commands::find::run(&self.catalog, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_share_one_catalog() {
        let mut api = LibraryApi::new();
        api.add_book("Dune".into(), "Frank Herbert".into(), "111".into());
        api.loan_book("111");

        let result = api.find_book("111");
        assert!(!result.listed_books[0].available);
        assert_eq!(api.list_books().listed_books.len(), 1);
    }
}
