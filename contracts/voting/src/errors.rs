//! Error codes returned by the voting contract
//!
//! Codes are stable and grouped by category:
//! - 1-19: access control, registry and proposal errors
//! - 20-29: out-of-phase calls (the `InvalidPhase` category)

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    // ===== Access / registry errors (1-19) =====
    /// Caller is not the administrator
    NotAuthorized = 1,

    /// Caller is not a registered voter
    NotARegisteredVoter = 2,

    /// Address already present in the voter registry
    AlreadyRegistered = 3,

    /// Voter already cast a ballot
    AlreadyVoted = 4,

    /// Proposal description is empty
    EmptyProposal = 5,

    /// Proposal id is outside the proposal list
    ProposalNotFound = 6,

    // ===== Invalid phase errors (20-29) =====
    VotersRegistrationNotOpen = 20,

    ProposalsRegistrationCannotStart = 21,

    ProposalsNotAllowed = 22,

    ProposalsRegistrationNotStarted = 23,

    ProposalsRegistrationNotEnded = 24,

    VotingSessionNotStarted = 25,

    VotingSessionNotEnded = 26,
}

impl VotingError {
    /// True for every error raised because the workflow is in the wrong phase.
    pub fn is_invalid_phase(&self) -> bool {
        (*self as u32) >= 20 && (*self as u32) < 30
    }

    /// Fixed human readable text for each error code.
    pub fn message(&self) -> &'static str {
        match self {
            VotingError::NotAuthorized => "Ownable: caller is not the owner",
            VotingError::NotARegisteredVoter => "You're not a voter",
            VotingError::AlreadyRegistered => "Already registered",
            VotingError::AlreadyVoted => "You have already voted",
            VotingError::EmptyProposal => "Proposal description cannot be empty",
            VotingError::ProposalNotFound => "Proposal not found",
            VotingError::VotersRegistrationNotOpen => "Voters registration is not open yet",
            VotingError::ProposalsRegistrationCannotStart => {
                "Registering proposals cant be started now"
            }
            VotingError::ProposalsNotAllowed => "Proposals are not allowed yet",
            VotingError::ProposalsRegistrationNotStarted => {
                "Registering proposals havent started yet"
            }
            VotingError::ProposalsRegistrationNotEnded => {
                "Registering proposals phase is not finished"
            }
            VotingError::VotingSessionNotStarted => "Voting session havent started yet",
            VotingError::VotingSessionNotEnded => "Current status is not voting session ended",
        }
    }
}
