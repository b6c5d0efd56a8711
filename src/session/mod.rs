//! Quiz session core: sampling, the state machine and the interfaces it drives.

mod machine;
mod presenter;
mod sampler;
mod timers;

pub use machine::{QuizSession, RESULT_DISPLAY_DELAY, TIME_LIMIT_SECS};
pub use presenter::{Presenter, Screen, Tier};
pub use sampler::{QUESTIONS_PER_SESSION, sample};
pub use timers::{TICK, TimerEvent, Timers, TokioTimers};
