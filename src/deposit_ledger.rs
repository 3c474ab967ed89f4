multiversx_sc::imports!();

use crate::errors::{
    ERR_ACTIVE_PROPOSAL_LOCK, ERR_BELOW_MINIMUM_DEPOSIT, ERR_INSUFFICIENT_DEPOSIT,
    ERR_INVALID_AMOUNT,
};
use crate::types::DepositPosition;

/// Per-account record of tokens placed into the treasury. Source of voting
/// weight, of proposal eligibility, and of the withdrawal right.
///
/// Accounts hold shares of one pool. The pool value is `totalDeposits`;
/// an account's deposit is `shares * totalDeposits / totalDepositShares`,
/// rounded down. Charging a disbursement only lowers the pool value, so it
/// costs the same whatever the number of depositors.
#[multiversx_sc::module]
pub trait DepositLedgerModule:
    crate::config::ConfigModule
    + crate::events::EventsModule
    + crate::proposal_store::ProposalStoreModule
    + crate::token_ledger::TokenLedgerModule
{
    fn credit_deposit(&self, account: &ManagedAddress, amount: &BigUint) -> BigUint {
        require!(*amount > 0u64, ERR_INVALID_AMOUNT);

        let total = self.total_deposits().get();
        let total_shares = self.total_deposit_shares().get();
        let minted = if total_shares == 0u64 || total == 0u64 {
            amount.clone()
        } else {
            // shares = amount * total_shares / pool_value
            &(amount * &total_shares) / &total
        };
        require!(minted > 0u64, ERR_INVALID_AMOUNT);

        let shares = self.live_shares(account) + &minted;
        self.store_shares(account, &shares);
        self.total_deposit_shares().update(|s| *s += &minted);
        self.total_deposits().update(|t| *t += amount);

        self.deposit_of(account)
    }

    /// Validates every withdrawal gate, in order, then debits the ledger.
    /// Moving the tokens out is left to the caller.
    fn debit_deposit(&self, account: &ManagedAddress, amount: &BigUint) -> BigUint {
        require!(*amount > 0u64, ERR_INVALID_AMOUNT);
        require!(
            !self.has_active_proposals(account),
            ERR_ACTIVE_PROPOSAL_LOCK
        );

        let deposited = self.deposit_of(account);
        require!(*amount <= deposited, ERR_INSUFFICIENT_DEPOSIT);

        let shares = self.live_shares(account);
        let burned = if *amount == deposited {
            shares.clone()
        } else {
            &(amount * &self.total_deposit_shares().get()) / &self.total_deposits().get()
        };
        require!(burned > 0u64, ERR_INVALID_AMOUNT);

        self.store_shares(account, &(&shares - &burned));
        self.total_deposit_shares().update(|s| *s -= &burned);
        self.total_deposits().update(|t| *t -= amount);
        self.settle_pool();

        let remaining = self.deposit_of(account);
        if self.has_ever_proposed(account) {
            require!(
                remaining >= self.minimum_deposit_for_proposal().get(),
                ERR_BELOW_MINIMUM_DEPOSIT
            );
        }

        remaining
    }

    /// Covers a disbursement of `amount` out of the pooled balance, keeping
    /// the sum of deposits at or below what the treasury still holds.
    /// Unallocated balance is spent first; the rest lowers the pool value,
    /// which every depositor shares in proportion to their shares.
    /// `treasury_balance` is the balance before the payout.
    /// Returns the total charged to depositors.
    fn charge_disbursement(&self, amount: &BigUint, treasury_balance: &BigUint) -> BigUint {
        let total = self.total_deposits().get();
        let unallocated = if *treasury_balance > total {
            treasury_balance - &total
        } else {
            BigUint::zero()
        };
        if *amount <= unallocated {
            return BigUint::zero();
        }

        let mut charged = amount - &unallocated;
        if charged > total {
            charged = total.clone();
        }

        self.total_deposits().set(&(&total - &charged));
        self.settle_pool();
        charged
    }

    /// An empty pool voids every outstanding share.
    fn settle_pool(&self) {
        if self.total_deposits().get() == 0u64 {
            self.total_deposit_shares().clear();
            self.pool_epoch().update(|epoch| *epoch += 1);
        }
    }

    fn live_shares(&self, account: &ManagedAddress) -> BigUint {
        let mapper = self.deposit_positions(account);
        if mapper.is_empty() {
            return BigUint::zero();
        }

        let position = mapper.get();
        if position.epoch != self.pool_epoch().get() {
            return BigUint::zero();
        }
        position.shares
    }

    fn store_shares(&self, account: &ManagedAddress, shares: &BigUint) {
        if *shares == 0u64 {
            self.deposit_positions(account).clear();
            return;
        }

        self.deposit_positions(account).set(DepositPosition {
            shares: shares.clone(),
            epoch: self.pool_epoch().get(),
        });
    }

    fn deposit_of(&self, account: &ManagedAddress) -> BigUint {
        let shares = self.live_shares(account);
        if shares == 0u64 {
            return BigUint::zero();
        }

        (&shares * &self.total_deposits().get()) / self.total_deposit_shares().get()
    }

    /// Conservative reading of "active": any proposal by the account that
    /// is neither executed nor deleted, even past its voting window.
    #[view(hasActiveProposals)]
    fn has_active_proposals(&self, account: &ManagedAddress) -> bool {
        for proposal_id in self.proposals_by_proposer(account).iter() {
            if !self.proposals(proposal_id).get().is_finalized() {
                return true;
            }
        }
        false
    }

    fn has_ever_proposed(&self, account: &ManagedAddress) -> bool {
        !self.proposals_by_proposer(account).is_empty()
    }

    #[view(getWithdrawableAmount)]
    fn withdrawable_amount(&self, account: &ManagedAddress) -> BigUint {
        if self.has_active_proposals(account) {
            return BigUint::zero();
        }

        let deposited = self.deposit_of(account);
        if !self.has_ever_proposed(account) {
            return deposited;
        }

        let floor = self.minimum_deposit_for_proposal().get();
        if deposited > floor {
            deposited - floor
        } else {
            BigUint::zero()
        }
    }

    #[view(getUserDeposits)]
    fn get_user_deposits(&self, account: &ManagedAddress) -> BigUint {
        self.deposit_of(account)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("depositPositions")]
    fn deposit_positions(
        &self,
        account: &ManagedAddress,
    ) -> SingleValueMapper<DepositPosition<Self::Api>>;

    #[view(getTotalDeposits)]
    #[storage_mapper("totalDeposits")]
    fn total_deposits(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalDepositShares)]
    #[storage_mapper("totalDepositShares")]
    fn total_deposit_shares(&self) -> SingleValueMapper<BigUint>;

    #[view(getPoolEpoch)]
    #[storage_mapper("poolEpoch")]
    fn pool_epoch(&self) -> SingleValueMapper<u64>;
}
