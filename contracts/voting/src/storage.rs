use soroban_sdk::{Address, Env};

use crate::types::{DataKey, Leader, Proposal, Voter, WorkflowStatus};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// At ~5s per ledger a day is 17,280 ledgers. The instance is re-extended on
// every call; voter and proposal records on every read or write, up to the
// network's maximum entry lifetime of 180 days.
pub const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_LEDGERS: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_BUMP_LEDGERS - DAY_IN_LEDGERS;
const RECORD_BUMP_LEDGERS: u32 = 180 * DAY_IN_LEDGERS;
const RECORD_TTL_THRESHOLD: u32 = RECORD_BUMP_LEDGERS - DAY_IN_LEDGERS;

/// Keep the contract instance alive. Called at the top of every entry point.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_BUMP_LEDGERS);
}

fn bump_record(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_TTL_THRESHOLD, RECORD_BUMP_LEDGERS);
}

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

// ── Workflow status ──────────────────────────────────────────────────────────

pub fn get_status(env: &Env) -> WorkflowStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
}

// ── Winner ───────────────────────────────────────────────────────────────────

pub fn get_winning_proposal_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::WinningProposalId)
        .unwrap_or(0u32)
}

pub fn set_winning_proposal_id(env: &Env, proposal_id: u32) {
    env.storage()
        .instance()
        .set(&DataKey::WinningProposalId, &proposal_id);
}

/// Running best proposal, maintained as ballots are cast.
pub fn get_leader(env: &Env) -> Leader {
    env.storage()
        .instance()
        .get(&DataKey::Leader)
        .unwrap_or_default()
}

pub fn set_leader(env: &Env, leader: &Leader) {
    env.storage().instance().set(&DataKey::Leader, leader);
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn get_voter(env: &Env, address: &Address) -> Option<Voter> {
    let key = DataKey::Voter(address.clone());
    let voter = env.storage().persistent().get(&key);
    if voter.is_some() {
        bump_record(env, &key);
    }
    voter
}

pub fn is_registered(env: &Env, address: &Address) -> bool {
    get_voter(env, address)
        .map(|voter| voter.is_registered)
        .unwrap_or(false)
}

pub fn save_voter(env: &Env, voter: &Voter) {
    let key = DataKey::Voter(voter.address.clone());
    env.storage().persistent().set(&key, voter);
    bump_record(env, &key);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u32)
}

/// Proposals are stored densely from index 0, so a missing key is an
/// out-of-range id.
pub fn get_proposal(env: &Env, proposal_id: u32) -> Option<Proposal> {
    let key = DataKey::Proposal(proposal_id);
    let proposal = env.storage().persistent().get(&key);
    if proposal.is_some() {
        bump_record(env, &key);
    }
    proposal
}

/// Appends to the proposal list and returns the new entry's index.
pub fn push_proposal(env: &Env, proposal: &Proposal) -> u32 {
    let proposal_id = get_proposal_count(env);
    save_proposal(env, proposal_id, proposal);
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &(proposal_id + 1));
    proposal_id
}

pub fn save_proposal(env: &Env, proposal_id: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal_id);
    env.storage().persistent().set(&key, proposal);
    bump_record(env, &key);
}
