//! Interactive chess board logic, independent of any rendering surface.
//!
//! A [`GameSession`] consumes input [`Event`]s and answers with [`Effect`]s.
//! [`project`] turns the session into a render-ready [`ViewState`], and a
//! [`SessionHost`] ties both to a [`Feedback`] dispatcher.

pub mod event;
pub mod feedback;
pub mod host;
pub mod session;
pub mod view;

pub use event::Event;
pub use feedback::{Cue, Feedback, FeedbackError, Recorder, Silent};
pub use host::SessionHost;
pub use session::{Effect, GameSession, Interaction, MoveRecord, MoveSquares, SessionError};
pub use view::{project, GameStatus, ViewState};
