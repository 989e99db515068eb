use crate::commands::CmdMessage;

/// Shared lookup-miss message for loan, return and find.
pub fn not_found_message(id: &str) -> CmdMessage {
    CmdMessage::error(format!(
        "The book with ID {} does not exist in the catalog.",
        id
    ))
}
