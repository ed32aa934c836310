//! Meal decision engine.
//!
//! Everything in this crate is synchronous and side-effect free apart from
//! the [`RandomSource`] used for the final pick. Callers hand over read-only
//! [`Snapshot`]s of their saved recipes, restaurants and pantry, and get a
//! [`FlowResult`] back.

mod answers;
mod catalog;
mod engine;
mod error;
mod flow;
mod mode;
pub mod pool;
pub mod predicate;
mod question;
mod random;
mod result;
pub mod score;

pub use answers::*;
pub use catalog::*;
pub use engine::*;
pub use error::*;
pub use flow::*;
pub use mode::*;
pub use question::*;
pub use random::*;
pub use result::*;
