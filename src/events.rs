multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] amount: &BigUint,
        new_balance: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] amount: &BigUint,
        new_balance: &BigUint,
    );

    /// Carries every proposal field so indexers never need a follow-up query.
    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] start_time: u64,
        #[indexed] end_time: u64,
        description: &ManagedBuffer,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("proposalDeleted")]
    fn proposal_deleted_event(&self, #[indexed] proposal_id: u64, #[indexed] admin: &ManagedAddress);

    #[event("disbursementCharged")]
    fn disbursement_charged_event(&self, #[indexed] proposal_id: u64, charged: &BigUint);

    #[event("adminChanged")]
    fn admin_changed_event(&self, #[indexed] admin: &ManagedAddress);
}
