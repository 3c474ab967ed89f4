use multiversx_sc::types::{BigUint, ManagedAddress, ManagedBuffer};
use multiversx_sc_scenario::api::StaticApi;

use dao_treasury::types::{Proposal, ProposalStatus};

const START: u64 = 1_000;
const END: u64 = 1_300;

fn proposal(for_votes: u64, against_votes: u64) -> Proposal<StaticApi> {
    Proposal {
        id: 1,
        proposer: ManagedAddress::new_from_bytes(&[1u8; 32]),
        description: ManagedBuffer::from("grant"),
        recipient: ManagedAddress::new_from_bytes(&[2u8; 32]),
        amount: BigUint::from(500u64),
        start_time: START,
        end_time: END,
        for_votes: BigUint::from(for_votes),
        against_votes: BigUint::from(against_votes),
        executed: false,
        deleted: false,
    }
}

#[test]
fn active_until_end_time() {
    let p = proposal(10, 0);

    assert_eq!(p.status_at(START), ProposalStatus::Active);
    assert_eq!(p.status_at(END - 1), ProposalStatus::Active);
    assert!(p.is_voting_open(END - 1));
    assert!(!p.is_voting_open(END));
}

#[test]
fn outcome_is_strict_majority_once_window_closes() {
    assert_eq!(proposal(3_000, 0).status_at(END), ProposalStatus::Passed);
    assert_eq!(proposal(1_000, 999).status_at(END + 1), ProposalStatus::Passed);
    assert_eq!(proposal(1_000, 1_000).status_at(END), ProposalStatus::Rejected);
    assert_eq!(proposal(0, 1).status_at(END), ProposalStatus::Rejected);
    assert_eq!(proposal(0, 0).status_at(END), ProposalStatus::Rejected);
}

#[test]
fn terminal_flags_win_over_time() {
    let mut executed = proposal(3_000, 0);
    executed.executed = true;
    assert!(executed.is_finalized());
    assert_eq!(executed.status_at(START), ProposalStatus::Executed);
    assert_eq!(executed.status_at(END), ProposalStatus::Executed);

    let mut deleted = proposal(3_000, 0);
    deleted.deleted = true;
    assert!(deleted.is_finalized());
    assert_eq!(deleted.status_at(START), ProposalStatus::Deleted);
    assert_eq!(deleted.status_at(END), ProposalStatus::Deleted);

    assert!(!proposal(0, 0).is_finalized());
}
