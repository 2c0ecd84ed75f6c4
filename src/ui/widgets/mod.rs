//! HTML widgets that make up the rendered tree.

mod athlete_card;
mod event_list;
mod medal_badge;
mod state_message;

pub use athlete_card::AthleteCard;
pub use event_list::EventList;
pub use medal_badge::MedalBadge;
pub use state_message::render_state;
