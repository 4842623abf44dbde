//! Transition rules.
//!
//! A `TransitionRule` maps a cell's state and live-neighbour count to its
//! next state. The engine owns neighbour counting and grid bookkeeping and
//! never interprets the rule itself.

pub mod transition;

pub use transition::{ConwayRule, TransitionRule};
