//! Phase transition table for the ballot lifecycle.
//!
//! Nothing here touches storage. The contract reads the current status,
//! asks this module whether a call is allowed, and only then writes.

use crate::errors::VotingError;
use crate::types::{Leader, WorkflowStatus};

/// Every status in lifecycle order.
pub const PHASES: [WorkflowStatus; 6] = [
    WorkflowStatus::RegisteringVoters,
    WorkflowStatus::ProposalsRegistrationStarted,
    WorkflowStatus::ProposalsRegistrationEnded,
    WorkflowStatus::VotingSessionStarted,
    WorkflowStatus::VotingSessionEnded,
    WorkflowStatus::VotesTallied,
];

impl WorkflowStatus {
    /// The unique successor, `None` once votes are tallied.
    pub fn next(self) -> Option<WorkflowStatus> {
        PHASES.get(self as usize + 1).copied()
    }
}

/// Administrator driven phase changes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Transition {
    StartProposalsRegistering = 0,
    EndProposalsRegistering = 1,
    StartVotingSession = 2,
    EndVotingSession = 3,
    TallyVotes = 4,
}

pub struct TransitionRule {
    pub from: WorkflowStatus,
    pub to: WorkflowStatus,
    pub out_of_phase: VotingError,
}

/// Indexed by `Transition as usize`.
static TRANSITIONS: [TransitionRule; 5] = [
    TransitionRule {
        from: WorkflowStatus::RegisteringVoters,
        to: WorkflowStatus::ProposalsRegistrationStarted,
        out_of_phase: VotingError::ProposalsRegistrationCannotStart,
    },
    TransitionRule {
        from: WorkflowStatus::ProposalsRegistrationStarted,
        to: WorkflowStatus::ProposalsRegistrationEnded,
        out_of_phase: VotingError::ProposalsRegistrationNotStarted,
    },
    TransitionRule {
        from: WorkflowStatus::ProposalsRegistrationEnded,
        to: WorkflowStatus::VotingSessionStarted,
        out_of_phase: VotingError::ProposalsRegistrationNotEnded,
    },
    TransitionRule {
        from: WorkflowStatus::VotingSessionStarted,
        to: WorkflowStatus::VotingSessionEnded,
        out_of_phase: VotingError::VotingSessionNotStarted,
    },
    TransitionRule {
        from: WorkflowStatus::VotingSessionEnded,
        to: WorkflowStatus::VotesTallied,
        out_of_phase: VotingError::VotingSessionNotEnded,
    },
];

impl Transition {
    pub fn rule(self) -> &'static TransitionRule {
        &TRANSITIONS[self as usize]
    }

    /// Target status if `current` is the status this transition leaves from.
    pub fn apply(self, current: WorkflowStatus) -> Result<WorkflowStatus, VotingError> {
        let rule = self.rule();
        require_phase(current, rule.from, rule.out_of_phase)?;
        Ok(rule.to)
    }
}

/// Gate for calls that are valid in exactly one status.
pub fn require_phase(
    current: WorkflowStatus,
    required: WorkflowStatus,
    out_of_phase: VotingError,
) -> Result<(), VotingError> {
    if current != required {
        return Err(out_of_phase);
    }
    Ok(())
}

impl Leader {
    /// Fold one increased count into the running leader.
    ///
    /// Counts only ever grow, so the leader stays the lowest id holding the
    /// highest count, the same answer a scan over every proposal gives.
    pub fn record(self, proposal_id: u32, vote_count: u32) -> Leader {
        let ahead = vote_count > self.vote_count
            || (vote_count == self.vote_count && proposal_id < self.proposal_id);
        if ahead {
            Leader {
                proposal_id,
                vote_count,
            }
        } else {
            self
        }
    }
}
