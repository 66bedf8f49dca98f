//! Types describing participants and the identity sources they come from.

pub mod participant;
pub mod source;
