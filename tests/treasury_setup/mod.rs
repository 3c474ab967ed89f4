// Shared whitebox harness: one treasury instance, a funded set of accounts
// and a mock block clock.

#![allow(dead_code)]

use multiversx_sc::{codec::multi_types::OptionalValue, types::Address};
use multiversx_sc_scenario::{
    managed_address, managed_biguint, managed_buffer, managed_token_id, rust_biguint,
    whitebox_legacy::*, DebugApi,
};

use dao_treasury::deposit_ledger::DepositLedgerModule;
use dao_treasury::token_ledger::TokenLedgerModule;
use dao_treasury::DaoTreasury;

pub const WASM_PATH: &str = "output/dao-treasury.wasm";
pub const TOKEN_ID: &[u8] = b"DTK-123456";
pub const OTHER_TOKEN_ID: &[u8] = b"OTH-654321";
pub const MIN_DEPOSIT: u64 = 5_000;
pub const STARTING_BALANCE: u64 = 10_000;
pub const FIVE_MINUTES: u64 = 300;

pub struct TreasurySetup<Builder>
where
    Builder: 'static + Copy + Fn() -> dao_treasury::ContractObj<DebugApi>,
{
    pub b_mock: BlockchainStateWrapper,
    pub owner: Address,
    pub alice: Address,
    pub bob: Address,
    pub carol: Address,
    pub recipient: Address,
    pub sc: ContractObjWrapper<dao_treasury::ContractObj<DebugApi>, Builder>,
}

impl<Builder> TreasurySetup<Builder>
where
    Builder: 'static + Copy + Fn() -> dao_treasury::ContractObj<DebugApi>,
{
    pub fn new(builder: Builder, min_deposit: u64) -> Self {
        let rust_zero = rust_biguint!(0);
        let mut b_mock = BlockchainStateWrapper::new();

        let owner = b_mock.create_user_account(&rust_zero);
        let alice = b_mock.create_user_account(&rust_zero);
        let bob = b_mock.create_user_account(&rust_zero);
        let carol = b_mock.create_user_account(&rust_zero);
        let recipient = b_mock.create_user_account(&rust_zero);

        for account in [&alice, &bob, &carol] {
            b_mock.set_esdt_balance(account, TOKEN_ID, &rust_biguint!(STARTING_BALANCE));
        }

        let sc = b_mock.create_sc_account(&rust_zero, Some(&owner), builder, WASM_PATH);
        b_mock
            .execute_tx(&owner, &sc, &rust_zero, |sc| {
                sc.init(managed_token_id!(TOKEN_ID), managed_biguint!(min_deposit));
            })
            .assert_ok();

        TreasurySetup {
            b_mock,
            owner,
            alice,
            bob,
            carol,
            recipient,
            sc,
        }
    }

    pub fn set_time(&mut self, timestamp: u64) {
        self.b_mock.set_block_timestamp(timestamp);
    }

    pub fn deposit(&mut self, caller: &Address, amount: u64) -> TxResult {
        self.b_mock.execute_esdt_transfer(
            caller,
            &self.sc,
            TOKEN_ID,
            0,
            &rust_biguint!(amount),
            |sc| {
                sc.deposit();
            },
        )
    }

    pub fn withdraw(&mut self, caller: &Address, amount: u64) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0), |sc| {
                sc.withdraw(managed_biguint!(amount));
            })
    }

    pub fn create_proposal(
        &mut self,
        caller: &Address,
        amount: u64,
        voting_duration: Option<u64>,
    ) -> TxResult {
        let recipient = self.recipient.clone();
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0), |sc| {
                let duration = match voting_duration {
                    Some(duration) => OptionalValue::Some(duration),
                    None => OptionalValue::None,
                };
                sc.create_proposal(
                    managed_buffer!(b"fund the community grant"),
                    managed_address!(&recipient),
                    managed_biguint!(amount),
                    duration,
                );
            })
    }

    pub fn vote(&mut self, caller: &Address, proposal_id: u64, support: bool) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0), |sc| {
                sc.vote(proposal_id, support);
            })
    }

    pub fn execute_proposal(&mut self, caller: &Address, proposal_id: u64) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0), |sc| {
                sc.execute_proposal(proposal_id);
            })
    }

    pub fn delete_proposal(&mut self, caller: &Address, proposal_id: u64) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0), |sc| {
                sc.delete_proposal(proposal_id);
            })
    }

    pub fn check_deposit(&mut self, account: &Address, expected: u64) {
        let account = account.clone();
        self.b_mock
            .execute_query(&self.sc, |sc| {
                assert_eq!(
                    sc.get_user_deposits(&managed_address!(&account)),
                    managed_biguint!(expected)
                );
            })
            .assert_ok();
    }

    /// Treasury token balance and ledger total, checked together.
    pub fn check_treasury(&mut self, expected_balance: u64, expected_total_deposits: u64) {
        self.b_mock.check_esdt_balance(
            self.sc.address_ref(),
            TOKEN_ID,
            &rust_biguint!(expected_balance),
        );
        self.b_mock
            .execute_query(&self.sc, |sc| {
                assert_eq!(sc.treasury_balance(), managed_biguint!(expected_balance));
                assert_eq!(
                    sc.total_deposits().get(),
                    managed_biguint!(expected_total_deposits)
                );
            })
            .assert_ok();
    }

    pub fn check_token_balance(&self, account: &Address, expected: u64) {
        self.b_mock
            .check_esdt_balance(account, TOKEN_ID, &rust_biguint!(expected));
    }
}
