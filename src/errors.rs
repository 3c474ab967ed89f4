// Error messages surfaced to callers. Each one names a single failure kind
// so front-ends can match on it and render an actionable message.

pub const ERR_INVALID_AMOUNT: &str = "Invalid amount";
pub const ERR_TRANSFER_FAILED: &str = "Token transfer failed";
pub const ERR_WRONG_TOKEN: &str = "Wrong token";
pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient treasury balance";

pub const ERR_ACTIVE_PROPOSAL_LOCK: &str = "Cannot withdraw while having active proposals";
pub const ERR_BELOW_MINIMUM_DEPOSIT: &str = "Withdrawal would violate minimum deposit requirement";
pub const ERR_INSUFFICIENT_DEPOSIT: &str = "Insufficient deposit balance";

pub const ERR_SELF_VOTE: &str = "Proposer cannot vote on own proposal";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_VOTING_CLOSED: &str = "Voting period has ended";
pub const ERR_VOTING_NOT_ENDED: &str = "Voting period has not ended";
pub const ERR_PROPOSAL_REJECTED: &str = "Proposal did not pass";
pub const ERR_ALREADY_FINALIZED: &str = "Proposal already finalized";
pub const ERR_PROPOSAL_UNAVAILABLE: &str = "Proposal is no longer available";
pub const ERR_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_UNAUTHORIZED: &str = "Only the admin can delete proposals";

pub const ERR_INVALID_RECIPIENT: &str = "Invalid recipient";
pub const ERR_INVALID_DURATION: &str = "Invalid voting duration";
pub const ERR_INVALID_TOKEN_ID: &str = "Invalid token identifier";
pub const ERR_INVALID_ADMIN: &str = "Invalid admin address";
pub const ERR_NOT_OWNER: &str = "Only the owner can change the admin";
