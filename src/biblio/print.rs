use biblio::commands::{CmdMessage, MessageLevel};
use biblio::model::Book;
use colored::Colorize;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// The full catalog listing; an empty catalog gets its own line.
pub fn print_catalog(books: &[Book]) {
    if books.is_empty() {
        println!("The catalog is empty.");
        return;
    }
    print_books(books);
}

pub fn print_books(books: &[Book]) {
    for book in books {
        println!("{}", book);
    }
}
