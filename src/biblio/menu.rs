//! The interactive menu loop.
//!
//! One state, looped: show the menu, read a choice, dispatch, repeat.
//! Choice 6 is the only intentional way out; a closed stdin ends the
//! session quietly. Everything the handlers print comes out of the
//! structured results the API returns.

use std::io::{self, BufRead, Write};

use biblio::api::LibraryApi;
use biblio::error::Result;
use colored::Colorize;

use crate::print::{print_books, print_catalog, print_messages};

const MENU: &str = "\
1. Add book
2. Loan book
3. Return book
4. List books
5. Find book
6. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Add,
    Loan,
    Return,
    List,
    Find,
    Exit,
}

impl Choice {
    fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Choice::Add),
            2 => Some(Choice::Loan),
            3 => Some(Choice::Return),
            4 => Some(Choice::List),
            5 => Some(Choice::Find),
            6 => Some(Choice::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

pub fn run(mut api: LibraryApi) -> Result<()> {
    println!("{}", "Welcome to the Library Management System".bold());

    loop {
        println!("\n{}", MENU);
        let line = match prompt("Choose an option: ")? {
            Some(line) => line,
            None => return Ok(()),
        };

        let flow = match line.trim().parse::<i64>() {
            Err(_) => {
                println!("{}", "Error: enter a valid number.".red());
                Flow::Continue
            }
            Ok(n) => match Choice::from_number(n) {
                Some(choice) => dispatch(&mut api, choice)?,
                None => {
                    println!(
                        "{}",
                        "Invalid option. Please choose an option from 1 to 6.".red()
                    );
                    Flow::Continue
                }
            },
        };

        if let Flow::Quit = flow {
            return Ok(());
        }
    }
}

fn dispatch(api: &mut LibraryApi, choice: Choice) -> Result<Flow> {
    match choice {
        Choice::Add => handle_add(api),
        Choice::Loan => handle_loan(api),
        Choice::Return => handle_return(api),
        Choice::List => handle_list(api),
        Choice::Find => handle_find(api),
        Choice::Exit => {
            println!("Thank you for using the Library Management System. Goodbye!");
            Ok(Flow::Quit)
        }
    }
}

fn handle_add(api: &mut LibraryApi) -> Result<Flow> {
    let Some(title) = prompt("Title: ")? else {
        return Ok(Flow::Quit);
    };
    let Some(author) = prompt("Author: ")? else {
        return Ok(Flow::Quit);
    };
    let Some(id) = prompt("ID: ")? else {
        return Ok(Flow::Quit);
    };

    let result = api.add_book(title, author, id);
    print_messages(&result.messages);
    Ok(Flow::Continue)
}

fn handle_loan(api: &mut LibraryApi) -> Result<Flow> {
    let Some(id) = prompt("Enter the ID: ")? else {
        return Ok(Flow::Quit);
    };

    let result = api.loan_book(&id);
    print_messages(&result.messages);
    Ok(Flow::Continue)
}

fn handle_return(api: &mut LibraryApi) -> Result<Flow> {
    let Some(id) = prompt("Enter the ID: ")? else {
        return Ok(Flow::Quit);
    };

    let result = api.return_book(&id);
    print_messages(&result.messages);
    Ok(Flow::Continue)
}

fn handle_list(api: &mut LibraryApi) -> Result<Flow> {
    let result = api.list_books();
    print_catalog(&result.listed_books);
    Ok(Flow::Continue)
}

fn handle_find(api: &mut LibraryApi) -> Result<Flow> {
    let Some(id) = prompt("Enter the ID to find: ")? else {
        return Ok(Flow::Quit);
    };

    let result = api.find_book(&id);
    print_books(&result.listed_books);
    print_messages(&result.messages);
    Ok(Flow::Continue)
}

/// Prints a prompt on the current line and reads one line of input.
/// `None` means stdin was closed.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
