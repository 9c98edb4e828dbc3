use soroban_sdk::{contracttype, Address, Env, String};

/// Lifecycle of a ballot. Phases are strictly ordered and only ever
/// advance one step at a time.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

/// Registry record for a single identity
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub address: Address,
    pub is_registered: bool,
    pub has_voted: bool,
    /// Only meaningful once `has_voted` is set
    pub voted_proposal_id: u32,
}

impl Voter {
    pub fn registered(address: Address) -> Self {
        Voter {
            address,
            is_registered: true,
            has_voted: false,
            voted_proposal_id: 0,
        }
    }

    /// Placeholder returned for identities the administrator never registered.
    pub fn unregistered(address: Address) -> Self {
        Voter {
            address,
            is_registered: false,
            has_voted: false,
            voted_proposal_id: 0,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

impl Proposal {
    pub fn new(description: String) -> Self {
        Proposal {
            description,
            vote_count: 0,
        }
    }

    /// Placeholder stored at index 0 when proposal registration opens.
    pub fn genesis(env: &Env) -> Self {
        Proposal::new(String::from_str(env, GENESIS_DESCRIPTION))
    }
}

/// Proposal currently ahead in the count. Defaults to genesis with no votes.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Leader {
    pub proposal_id: u32,
    pub vote_count: u32,
}

pub const GENESIS_DESCRIPTION: &str = "GENESIS";

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Status,
    ProposalCount,
    WinningProposalId,
    Leader,
    Voter(Address),
    Proposal(u32),
}
