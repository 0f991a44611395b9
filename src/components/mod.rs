//! UI Components
//!
//! Leptos components for the ticket board.

mod option_select;
mod board_controls;
mod ticket_card;
mod board_column;
mod board;

pub use option_select::OptionSelect;
pub use board_controls::BoardControls;
pub use ticket_card::TicketCard;
pub use board_column::BoardColumn;
pub use board::Board;
