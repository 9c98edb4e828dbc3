#![no_std]
//! # Voting Contract
//!
//! Single-choice ballot run by one administrator. Voters are registered,
//! proposals collected, ballots cast and the winner tallied, each step in
//! its own phase of a strictly linear workflow.

mod contract;
mod errors;
mod events;
mod storage;
mod types;
pub mod workflow;

pub use contract::{VotingContract, VotingContractClient};
pub use errors::VotingError;
pub use types::{Leader, Proposal, Voter, WorkflowStatus, GENESIS_DESCRIPTION};
pub use workflow::Transition;
