//! Front-end state: the topic form, loading progress and the view state machine.

pub mod form;
pub mod progress;
pub mod state;

pub use form::{FormError, TopicForm, POST_COUNT_CHOICES};
pub use progress::{AgentStep, StepProgress};
pub use state::AppState;
