multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_BALANCE, ERR_TRANSFER_FAILED, ERR_WRONG_TOKEN};

/// The only place that touches the underlying fungible token. The rest of
/// the contract sees three operations: the treasury balance, pulling a
/// deposit that the caller attached to the call, and pushing funds out.
#[multiversx_sc::module]
pub trait TokenLedgerModule: crate::config::ConfigModule + crate::events::EventsModule {
    /// Balance the treasury contract holds of the configured token.
    #[view(getTreasuryBalance)]
    fn treasury_balance(&self) -> BigUint {
        let token_id = self.token_id().get();
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token_id), 0)
    }

    /// Takes the single ESDT payment attached to the current call. The
    /// attached payment is the caller's authorization; the contract never
    /// pulls funds the caller did not send.
    fn receive_payment(&self) -> BigUint {
        let payments = self.call_value().all_esdt_transfers();
        require!(payments.len() == 1, ERR_TRANSFER_FAILED);

        let payment = payments.get(0);
        require!(
            payment.token_identifier == self.token_id().get(),
            ERR_WRONG_TOKEN
        );
        require!(payment.token_nonce == 0, ERR_WRONG_TOKEN);

        payment.amount.clone()
    }

    fn send_tokens(&self, to: &ManagedAddress, amount: &BigUint) {
        require!(self.treasury_balance() >= *amount, ERR_INSUFFICIENT_BALANCE);

        let token_id = self.token_id().get();
        self.send().direct_esdt(to, &token_id, 0, amount);
    }
}
