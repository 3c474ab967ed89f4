multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_ADMIN, ERR_NOT_OWNER};

/// Voting window used when a proposal is created without one: 7 days in seconds
pub const DEFAULT_VOTING_DURATION: u64 = 604_800;

#[multiversx_sc::module]
pub trait ConfigModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: setAdmin
    // Owner rotates the account allowed to delete proposals.
    // ========================================================

    #[endpoint(setAdmin)]
    fn set_admin(&self, new_admin: ManagedAddress) {
        require!(
            self.blockchain().get_caller() == self.blockchain().get_owner_address(),
            ERR_NOT_OWNER
        );
        require!(!new_admin.is_zero(), ERR_INVALID_ADMIN);

        self.admin().set(&new_admin);
        self.admin_changed_event(&new_admin);
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue4<TokenIdentifier, BigUint, u64, ManagedAddress> {
        (
            self.token_id().get(),
            self.minimum_deposit_for_proposal().get(),
            DEFAULT_VOTING_DURATION,
            self.admin().get(),
        )
            .into()
    }

    #[view(getTokenId)]
    #[storage_mapper("tokenId")]
    fn token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getMinimumDepositForProposal)]
    #[storage_mapper("minimumDepositForProposal")]
    fn minimum_deposit_for_proposal(&self) -> SingleValueMapper<BigUint>;

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;
}
