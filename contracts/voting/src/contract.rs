use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

use crate::{
    errors::VotingError,
    events, storage,
    types::{Leader, Proposal, Voter, WorkflowStatus},
    workflow::{self, Transition},
};

#[contract]
pub struct VotingContract;

// ── Guards ───────────────────────────────────────────────────────────────────

fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
    caller.require_auth();
    if storage::get_admin(env).as_ref() != Some(caller) {
        log!(env, "rejected: caller is not the administrator", caller.clone());
        return Err(VotingError::NotAuthorized);
    }
    Ok(())
}

fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
    caller.require_auth();
    match storage::get_voter(env, caller) {
        Some(voter) if voter.is_registered => Ok(voter),
        _ => {
            log!(env, "rejected: caller is not a registered voter", caller.clone());
            Err(VotingError::NotARegisteredVoter)
        }
    }
}

/// Check `transition` against the stored status without writing anything.
fn check_transition(
    env: &Env,
    transition: Transition,
) -> Result<(WorkflowStatus, WorkflowStatus), VotingError> {
    let previous = storage::get_status(env);
    let next = transition.apply(previous).map_err(|err| {
        log!(env, "rejected: out of phase transition", previous);
        err
    })?;
    Ok((previous, next))
}

fn commit_transition(env: &Env, previous: WorkflowStatus, next: WorkflowStatus) {
    storage::set_status(env, next);
    events::workflow_status_change(env, previous, next);
    log!(env, "workflow status changed", previous, next);
}

/// Shared path for every administrator driven phase change.
fn advance(env: &Env, caller: &Address, transition: Transition) -> Result<(), VotingError> {
    require_admin(env, caller)?;
    let (previous, next) = check_transition(env, transition)?;
    commit_transition(env, previous, next);
    Ok(())
}

#[contractimpl]
impl VotingContract {
    // ── Construction ─────────────────────────────────────────────────────────

    /// Runs once at deployment: binds the administrator and opens voter
    /// registration.
    pub fn __constructor(env: Env, admin: Address) {
        storage::set_admin(&env, &admin);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);
        storage::set_winning_proposal_id(&env, 0);
        storage::set_leader(&env, &Leader::default());
        storage::bump_instance(&env);

        events::initialized(&env, &admin);
    }

    // ── Voter registration ───────────────────────────────────────────────────

    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        storage::bump_instance(&env);
        require_admin(&env, &caller)?;
        workflow::require_phase(
            storage::get_status(&env),
            WorkflowStatus::RegisteringVoters,
            VotingError::VotersRegistrationNotOpen,
        )?;
        if storage::is_registered(&env, &voter) {
            return Err(VotingError::AlreadyRegistered);
        }

        storage::save_voter(&env, &Voter::registered(voter.clone()));
        events::voter_registered(&env, &voter);
        log!(&env, "voter registered", voter);
        Ok(())
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Opens proposal registration and seeds the genesis proposal at
    /// index 0, so voter proposals are numbered from 1.
    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        storage::bump_instance(&env);
        advance(&env, &caller, Transition::StartProposalsRegistering)?;
        storage::push_proposal(&env, &Proposal::genesis(&env));
        Ok(())
    }

    /// Register a proposal and return its id.
    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, VotingError> {
        storage::bump_instance(&env);
        require_voter(&env, &caller)?;
        workflow::require_phase(
            storage::get_status(&env),
            WorkflowStatus::ProposalsRegistrationStarted,
            VotingError::ProposalsNotAllowed,
        )?;
        if description.len() == 0 {
            return Err(VotingError::EmptyProposal);
        }

        let proposal_id = storage::push_proposal(&env, &Proposal::new(description));
        events::proposal_registered(&env, proposal_id);
        log!(&env, "proposal registered", proposal_id, caller);
        Ok(proposal_id)
    }

    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        storage::bump_instance(&env);
        advance(&env, &caller, Transition::EndProposalsRegistering)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        storage::bump_instance(&env);
        advance(&env, &caller, Transition::StartVotingSession)
    }

    /// Cast the caller's single ballot for `proposal_id`.
    pub fn set_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        storage::bump_instance(&env);
        let mut voter = require_voter(&env, &caller)?;
        workflow::require_phase(
            storage::get_status(&env),
            WorkflowStatus::VotingSessionStarted,
            VotingError::VotingSessionNotStarted,
        )?;
        if voter.has_voted {
            return Err(VotingError::AlreadyVoted);
        }
        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)?;

        proposal.vote_count += 1;
        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;
        storage::save_proposal(&env, proposal_id, &proposal);
        storage::save_voter(&env, &voter);
        let leader = storage::get_leader(&env).record(proposal_id, proposal.vote_count);
        storage::set_leader(&env, &leader);

        events::voted(&env, &caller, proposal_id);
        log!(&env, "vote recorded", caller, proposal_id);
        Ok(())
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        storage::bump_instance(&env);
        advance(&env, &caller, Transition::EndVotingSession)
    }

    // ── Tally ────────────────────────────────────────────────────────────────

    /// Fix the winner: the proposal with the most votes, the earliest
    /// registered one on equal counts, genesis included. The leader is
    /// kept up to date by `set_vote`, so this does not walk the proposals.
    pub fn tally_votes(env: Env, caller: Address) -> Result<u32, VotingError> {
        storage::bump_instance(&env);
        require_admin(&env, &caller)?;
        let (previous, next) = check_transition(&env, Transition::TallyVotes)?;

        let winner = storage::get_leader(&env).proposal_id;
        storage::set_winning_proposal_id(&env, winner);
        log!(&env, "votes tallied", winner);

        commit_transition(&env, previous, next);
        Ok(winner)
    }

    // ── Query Functions ──────────────────────────────────────────────────────

    /// Voter record for `address`, or an unregistered placeholder.
    pub fn get_voter(env: Env, caller: Address, address: Address) -> Result<Voter, VotingError> {
        storage::bump_instance(&env);
        require_voter(&env, &caller)?;
        Ok(storage::get_voter(&env, &address).unwrap_or_else(|| Voter::unregistered(address)))
    }

    pub fn get_one_proposal(
        env: Env,
        caller: Address,
        proposal_id: u32,
    ) -> Result<Proposal, VotingError> {
        storage::bump_instance(&env);
        require_voter(&env, &caller)?;
        storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)
    }

    pub fn workflow_status(env: Env) -> WorkflowStatus {
        storage::bump_instance(&env);
        storage::get_status(&env)
    }

    /// Zero until votes are tallied.
    pub fn winning_proposal_id(env: Env) -> u32 {
        storage::bump_instance(&env);
        storage::get_winning_proposal_id(&env)
    }

    pub fn proposal_count(env: Env) -> u32 {
        storage::bump_instance(&env);
        storage::get_proposal_count(&env)
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        storage::bump_instance(&env);
        storage::get_admin(&env)
    }
}
