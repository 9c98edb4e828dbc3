use soroban_sdk::{Address, Env, Symbol};

use crate::types::WorkflowStatus;

pub fn initialized(env: &Env, admin: &Address) {
    env.events()
        .publish((Symbol::new(env, "Initialized"),), admin.clone());
}

pub fn voter_registered(env: &Env, voter: &Address) {
    env.events()
        .publish((Symbol::new(env, "VoterRegistered"),), voter.clone());
}

pub fn proposal_registered(env: &Env, proposal_id: u32) {
    env.events()
        .publish((Symbol::new(env, "ProposalRegistered"),), proposal_id);
}

pub fn voted(env: &Env, voter: &Address, proposal_id: u32) {
    env.events()
        .publish((Symbol::new(env, "Voted"),), (voter.clone(), proposal_id));
}

pub fn workflow_status_change(env: &Env, previous: WorkflowStatus, new: WorkflowStatus) {
    env.events().publish(
        (Symbol::new(env, "WorkflowStatusChange"),),
        (previous, new),
    );
}
