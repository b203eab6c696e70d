//! State objects the host UI renders from

pub mod prompt_state;
pub mod selection_state;
pub mod table_state;

pub use prompt_state::PromptState;
pub use selection_state::SelectionState;
pub use table_state::{FetchTicket, TableLoadState, TableState};
