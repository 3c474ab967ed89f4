multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_FINALIZED, ERR_ALREADY_VOTED, ERR_INVALID_AMOUNT, ERR_INVALID_DURATION,
    ERR_INVALID_RECIPIENT, ERR_NOT_FOUND, ERR_PROPOSAL_UNAVAILABLE, ERR_SELF_VOTE,
    ERR_VOTING_CLOSED,
};
use crate::types::{Proposal, ProposalStatus};

/// Append-only, id-indexed proposal records with their tallies and
/// one-way lifecycle flags. Ids start at 1 and are never reused.
#[multiversx_sc::module]
pub trait ProposalStoreModule: crate::events::EventsModule {
    fn create_proposal_record(
        &self,
        proposer: &ManagedAddress,
        description: ManagedBuffer,
        recipient: ManagedAddress,
        amount: BigUint,
        voting_duration: u64,
        now: u64,
    ) -> u64 {
        require!(amount > 0u64, ERR_INVALID_AMOUNT);
        require!(!recipient.is_zero(), ERR_INVALID_RECIPIENT);
        require!(voting_duration > 0, ERR_INVALID_DURATION);
        let end_time = match now.checked_add(voting_duration) {
            Some(end_time) => end_time,
            None => sc_panic!(ERR_INVALID_DURATION),
        };

        let proposal_id = self.proposal_count().get() + 1;

        let proposal = Proposal {
            id: proposal_id,
            proposer: proposer.clone(),
            description,
            recipient,
            amount,
            start_time: now,
            end_time,
            for_votes: BigUint::zero(),
            against_votes: BigUint::zero(),
            executed: false,
            deleted: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);
        self.proposals_by_proposer(proposer).push(&proposal_id);

        self.proposal_created_event(
            proposal_id,
            proposer,
            &proposal.recipient,
            &proposal.amount,
            proposal.start_time,
            proposal.end_time,
            &proposal.description,
        );

        proposal_id
    }

    fn load_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(self.proposal_exists(proposal_id), ERR_NOT_FOUND);
        self.proposals(proposal_id).get()
    }

    fn proposal_exists(&self, proposal_id: u64) -> bool {
        proposal_id > 0
            && proposal_id <= self.proposal_count().get()
            && !self.proposals(proposal_id).is_empty()
    }

    /// Adds a weight captured by the caller. The tally is never revisited,
    /// so later deposit changes by the voter do not affect it.
    fn record_vote(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
        support: bool,
        weight: &BigUint,
        now: u64,
    ) {
        let mut proposal = self.load_proposal(proposal_id);
        require!(proposal.proposer != *voter, ERR_SELF_VOTE);
        require!(!proposal.is_finalized(), ERR_PROPOSAL_UNAVAILABLE);
        require!(proposal.is_voting_open(now), ERR_VOTING_CLOSED);
        require!(
            !self.has_voted(proposal_id, voter).get(),
            ERR_ALREADY_VOTED
        );

        if support {
            proposal.for_votes += weight;
        } else {
            proposal.against_votes += weight;
        }

        self.has_voted(proposal_id, voter).set(true);
        self.proposals(proposal_id).set(&proposal);

        self.vote_event(proposal_id, voter, support, weight);
    }

    fn mark_executed(&self, proposal_id: u64) {
        let mut proposal = self.load_proposal(proposal_id);
        require!(!proposal.is_finalized(), ERR_ALREADY_FINALIZED);

        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);
    }

    fn mark_deleted(&self, proposal_id: u64) {
        let mut proposal = self.load_proposal(proposal_id);
        require!(!proposal.is_finalized(), ERR_ALREADY_FINALIZED);

        proposal.deleted = true;
        self.proposals(proposal_id).set(&proposal);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.load_proposal(proposal_id)
    }

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, proposal_id: u64) -> ProposalStatus {
        let now = self.blockchain().get_block_timestamp();
        self.load_proposal(proposal_id).status_at(now)
    }

    /// Up to `count` proposals starting at id `from` (0 reads as 1).
    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let first = from.max(1);
        let last = first
            .saturating_add(count)
            .saturating_sub(1)
            .min(self.proposal_count().get());

        let mut page = MultiValueEncoded::new();
        for id in first..=last {
            page.push(self.proposals(id).get());
        }
        page
    }

    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let now = self.blockchain().get_block_timestamp();

        for id in 1..=self.proposal_count().get() {
            if self.proposals(id).is_empty() {
                continue;
            }
            let proposal = self.proposals(id).get();
            if proposal.status_at(now) == ProposalStatus::Active {
                result.push(proposal);
            }
        }
        result
    }

    #[view(getProposalsByProposer)]
    fn get_proposals_by_proposer(&self, proposer: &ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for id in self.proposals_by_proposer(proposer).iter() {
            result.push(id);
        }
        result
    }

    #[view(hasVoted)]
    fn has_account_voted(&self, proposal_id: u64, account: &ManagedAddress) -> bool {
        self.has_voted(proposal_id, account).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(proposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("proposalsByProposer")]
    fn proposals_by_proposer(&self, proposer: &ManagedAddress) -> VecMapper<u64>;
}
