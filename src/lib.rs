#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod deposit_ledger;
pub mod errors;
pub mod events;
pub mod proposal_store;
pub mod token_ledger;
pub mod types;

use config::DEFAULT_VOTING_DURATION;
use errors::{
    ERR_ALREADY_FINALIZED, ERR_INSUFFICIENT_BALANCE, ERR_INVALID_AMOUNT, ERR_INVALID_TOKEN_ID,
    ERR_PROPOSAL_REJECTED, ERR_UNAUTHORIZED, ERR_VOTING_NOT_ENDED,
};

// ============================================================
// Contract
// ============================================================

/// Shared token pool. Members deposit the treasury token; funds leave only
/// through proposals that won a deposit-weighted vote.
///
/// Every endpoint is a single transaction: any failed check reverts all
/// storage writes and token transfers made during the call.
#[multiversx_sc::contract]
pub trait DaoTreasury:
    config::ConfigModule
    + deposit_ledger::DepositLedgerModule
    + events::EventsModule
    + proposal_store::ProposalStoreModule
    + token_ledger::TokenLedgerModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, token_id: TokenIdentifier, minimum_deposit_for_proposal: BigUint) {
        require!(token_id.is_valid_esdt_identifier(), ERR_INVALID_TOKEN_ID);
        require!(minimum_deposit_for_proposal > 0u64, ERR_INVALID_AMOUNT);

        self.token_id().set(&token_id);
        self.minimum_deposit_for_proposal()
            .set(&minimum_deposit_for_proposal);
        self.admin().set(self.blockchain().get_caller());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // Caller attaches the treasury token; the ledger is credited.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("*")]
    fn deposit(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        let amount = self.receive_payment();

        let new_balance = self.credit_deposit(&caller, &amount);

        self.deposit_event(&caller, &amount, &new_balance);
        new_balance
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Refused while the caller has an open proposal; past
    // proposers keep the minimum deposit locked.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) -> BigUint {
        let caller = self.blockchain().get_caller();

        let remaining = self.debit_deposit(&caller, &amount);
        self.send_tokens(&caller, &amount);

        self.withdraw_event(&caller, &amount, &remaining);
        remaining
    }

    // ========================================================
    // ENDPOINT: createProposal
    // Only accounts holding the minimum deposit may propose.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        description: ManagedBuffer,
        recipient: ManagedAddress,
        amount: BigUint,
        voting_duration: OptionalValue<u64>,
    ) -> u64 {
        let caller = self.blockchain().get_caller();

        let required = self.minimum_deposit_for_proposal().get();
        let actual = self.deposit_of(&caller);
        require!(
            actual >= required,
            "Insufficient deposits: required {}, actual {}",
            required,
            actual
        );

        let voting_duration = voting_duration
            .into_option()
            .unwrap_or(DEFAULT_VOTING_DURATION);
        let now = self.blockchain().get_block_timestamp();

        self.create_proposal_record(&caller, description, recipient, amount, voting_duration, now)
    }

    // ========================================================
    // ENDPOINT: vote
    // Weight is the caller's deposit right now. It is written
    // into the tally once and never recomputed.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        let weight = self.deposit_of(&caller);

        self.record_vote(proposal_id, &caller, support, &weight, now);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Anyone may trigger a passed proposal once voting ended.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        let now = self.blockchain().get_block_timestamp();
        let proposal = self.load_proposal(proposal_id);

        require!(!proposal.is_finalized(), ERR_ALREADY_FINALIZED);
        require!(!proposal.is_voting_open(now), ERR_VOTING_NOT_ENDED);
        require!(proposal.has_majority(), ERR_PROPOSAL_REJECTED);

        let treasury_balance = self.treasury_balance();
        require!(
            treasury_balance >= proposal.amount,
            ERR_INSUFFICIENT_BALANCE
        );

        let charged = self.charge_disbursement(&proposal.amount, &treasury_balance);
        self.mark_executed(proposal_id);
        self.send_tokens(&proposal.recipient, &proposal.amount);

        if charged > 0u64 {
            self.disbursement_charged_event(proposal_id, &charged);
        }
        self.proposal_executed_event(proposal_id, &proposal.recipient, &proposal.amount);
    }

    // ========================================================
    // ENDPOINT: deleteProposal
    // Admin-only. Lifts the proposer's withdrawal lock.
    // ========================================================

    #[endpoint(deleteProposal)]
    fn delete_proposal(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), ERR_UNAUTHORIZED);

        self.mark_deleted(proposal_id);

        self.proposal_deleted_event(proposal_id, &caller);
    }
}
