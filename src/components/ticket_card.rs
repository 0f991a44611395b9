//! Ticket Card Component

use leptos::prelude::*;
use board_engine::Ticket;

/// Single ticket card inside a column
#[component]
pub fn TicketCard(ticket: Ticket, assignee: String) -> impl IntoView {
    view! {
        <li>
            <div class="card" data-ticket-id=ticket.id>
                <strong>{ticket.title}</strong>
                <p>"Status: " {ticket.status}</p>
                <p>"User: " {assignee}</p>
                <p class="priority">"Priority: " {ticket.priority}</p>
            </div>
        </li>
    }
}
