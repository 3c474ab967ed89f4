multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status: derived lifecycle view
// ============================================================

/// Never stored. Computed from the proposal flags and the block time
/// passed in by the caller, so the Active → Passed/Rejected transition
/// happens lazily without any background action.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Voting window is open.
    Active,
    /// Window closed with for > against. Waiting for execution.
    Passed,
    /// Window closed with for <= against.
    Rejected,
    /// Funds sent. Terminal state.
    Executed,
    /// Removed by the admin. Terminal state.
    Deleted,
}

// ============================================================
// Proposal: stored record, append-only by id
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub recipient: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub start_time: u64,
    /// Always start_time + voting duration, strictly greater than start_time
    pub end_time: u64,
    pub for_votes: BigUint<M>,
    pub against_votes: BigUint<M>,
    pub executed: bool,
    pub deleted: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    /// Executed or deleted. Neither flag is ever cleared.
    pub fn is_finalized(&self) -> bool {
        self.executed || self.deleted
    }

    pub fn is_voting_open(&self, now: u64) -> bool {
        now < self.end_time
    }

    /// Strict majority; a tie rejects.
    pub fn has_majority(&self) -> bool {
        self.for_votes > self.against_votes
    }

    pub fn status_at(&self, now: u64) -> ProposalStatus {
        if self.executed {
            return ProposalStatus::Executed;
        }
        if self.deleted {
            return ProposalStatus::Deleted;
        }
        if self.is_voting_open(now) {
            ProposalStatus::Active
        } else if self.has_majority() {
            ProposalStatus::Passed
        } else {
            ProposalStatus::Rejected
        }
    }
}

// ============================================================
// Deposit Position: an account's claim on the pooled deposits
// ============================================================

/// Shares of the deposit pool. A full drain of the pool opens a new epoch,
/// and positions minted in an older epoch are worth nothing.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct DepositPosition<M: ManagedTypeApi> {
    pub shares: BigUint<M>,
    pub epoch: u64,
}
