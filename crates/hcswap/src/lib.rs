//! Interactive session for hc-swap
//!
//! The binary parses flags and wires these pieces together; everything that
//! decides what happens next in a session lives here so it can be driven by
//! a scripted chooser in tests.

pub mod chooser;
pub mod engine;
pub mod output;

pub use chooser::{Chooser, InquireChooser, PromptError, ScriptedChooser};
pub use engine::{EngineError, Flow, Session, SessionOptions, Step};
