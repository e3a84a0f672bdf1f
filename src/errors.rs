// Rejection reasons. Every failed endpoint reverts the whole call and surfaces one of these.

// ── Construction ──
pub static ERR_SUMMONER_ZERO: &[u8] = b"summoner cannot be 0";
pub static ERR_PERIOD_DURATION_ZERO: &[u8] = b"_periodDuration cannot be 0";
pub static ERR_VOTING_PERIOD_ZERO: &[u8] = b"_votingPeriodLength cannot be 0";
pub static ERR_VOTING_PERIOD_LIMIT: &[u8] = b"_votingPeriodLength exceeds limit";
pub static ERR_GRACE_PERIOD_LIMIT: &[u8] = b"_gracePeriodLength exceeds limit";
pub static ERR_DILUTION_BOUND_ZERO: &[u8] = b"_dilutionBound cannot be 0";
pub static ERR_DILUTION_BOUND_LIMIT: &[u8] = b"_dilutionBound exceeds limit";
pub static ERR_NO_APPROVED_TOKEN: &[u8] = b"need at least one approved token";
pub static ERR_TOO_MANY_TOKENS: &[u8] = b"too many tokens";
pub static ERR_DEPOSIT_BELOW_REWARD: &[u8] =
    b"_proposalDeposit cannot be smaller than _processingReward";
pub static ERR_APPROVED_TOKEN_INVALID: &[u8] = b"_approvedToken cannot be 0";
pub static ERR_DUPLICATE_APPROVED_TOKEN: &[u8] = b"duplicate approved token";

// ── Roles ──
pub static ERR_NOT_A_MEMBER: &[u8] = b"not a member";
pub static ERR_NOT_A_SHAREHOLDER: &[u8] = b"not a shareholder";
pub static ERR_NOT_A_DELEGATE: &[u8] = b"not a delegate";

// ── Submission ──
pub static ERR_TOO_MANY_SHARES: &[u8] = b"too many shares requested";
pub static ERR_TRIBUTE_NOT_WHITELISTED: &[u8] = b"tributeToken is not whitelisted";
pub static ERR_PAYMENT_NOT_WHITELISTED: &[u8] = b"payment is not whitelisted";
pub static ERR_APPLICANT_ZERO: &[u8] = b"applicant cannot be 0";
pub static ERR_APPLICANT_RESERVED: &[u8] = b"applicant address cannot be reserved";
pub static ERR_APPLICANT_JAILED: &[u8] = b"proposal applicant must not be jailed";
pub static ERR_GUILD_BANK_FULL: &[u8] = b"cannot submit more tribute proposals for new tokens - guildbank is full";
pub static ERR_MISSING_TOKEN: &[u8] = b"must provide token address";
pub static ERR_ALREADY_WHITELISTED: &[u8] = b"cannot already have whitelisted the token";
pub static ERR_WHITELIST_FULL_SUBMIT: &[u8] = b"cannot submit more whitelist proposals";
pub static ERR_KICK_NO_STAKE: &[u8] = b"member must have at least one share or one loot";
pub static ERR_KICK_ALREADY_JAILED: &[u8] = b"member must not already be jailed";

// ── Payments ──
pub static ERR_INSUFFICIENT_TRIBUTE: &[u8] = b"insufficient tribute tokens";
pub static ERR_INSUFFICIENT_DEPOSIT: &[u8] = b"insufficient deposit tokens";
pub static ERR_UNEXPECTED_PAYMENT: &[u8] = b"no payment expected";

// ── Sponsorship / cancellation ──
pub static ERR_NOT_PROPOSED: &[u8] = b"proposal must have been proposed";
pub static ERR_ALREADY_SPONSORED: &[u8] = b"proposal has already been sponsored";
pub static ERR_ALREADY_CANCELLED: &[u8] = b"proposal has already been cancelled";
pub static ERR_ALREADY_PROPOSED_TO_WHITELIST: &[u8] = b"already proposed to whitelist";
pub static ERR_WHITELIST_FULL_SPONSOR: &[u8] = b"cannot sponsor more whitelist proposals";
pub static ERR_ALREADY_PROPOSED_TO_KICK: &[u8] = b"already proposed to kick";
pub static ERR_GUILD_BANK_FULL_SPONSOR: &[u8] = b"cannot sponsor more tribute proposals for new tokens - guildbank is full";
pub static ERR_SOLELY_PROPOSER_CAN_CANCEL: &[u8] = b"solely the proposer can cancel";

// ── Voting ──
pub static ERR_PROPOSAL_DOES_NOT_EXIST: &[u8] = b"proposal does not exist";
pub static ERR_VOTE_OUT_OF_RANGE: &[u8] = b"must be less than 3";
pub static ERR_VOTING_NOT_STARTED: &[u8] = b"voting period has not started";
pub static ERR_VOTING_EXPIRED: &[u8] = b"voting period has expired";
pub static ERR_ALREADY_VOTED: &[u8] = b"member has already voted";
pub static ERR_VOTE_YES_OR_NO: &[u8] = b"vote must be either Yes or No";

// ── Processing ──
pub static ERR_NOT_READY: &[u8] = b"proposal is not ready to be processed";
pub static ERR_ALREADY_PROCESSED: &[u8] = b"proposal has already been processed";
pub static ERR_PREVIOUS_NOT_PROCESSED: &[u8] = b"previous proposal must be processed";
pub static ERR_MUST_BE_STANDARD: &[u8] = b"must be a standard proposal";
pub static ERR_MUST_BE_WHITELIST: &[u8] = b"must be a whitelist proposal";
pub static ERR_MUST_BE_GUILD_KICK: &[u8] = b"must be a guild kick proposal";

// ── Ragequit / ragekick ──
pub static ERR_INSUFFICIENT_SHARES: &[u8] = b"insufficient shares";
pub static ERR_INSUFFICIENT_LOOT: &[u8] = b"insufficient loot";
pub static ERR_PENDING_YES_VOTE: &[u8] =
    b"cannot ragequit until highest index proposal member voted YES on is processed";
pub static ERR_MUST_BE_IN_JAIL: &[u8] = b"member must be in jail";
pub static ERR_MUST_HAVE_LOOT: &[u8] = b"member must have some loot";

// ── Guild bank ──
pub static ERR_INSUFFICIENT_BALANCE: &[u8] = b"insufficient balance";
pub static ERR_NO_TOKENS_TO_COLLECT: &[u8] = b"no tokens to collect";
pub static ERR_COLLECT_NOT_WHITELISTED: &[u8] = b"token to collect must be whitelisted";
pub static ERR_COLLECT_GUILD_BANK_FULL: &[u8] =
    b"token to collect must have non-zero guild bank balance";

// ── Delegate keys / lookups ──
pub static ERR_DELEGATE_KEY_ZERO: &[u8] = b"newDelegateKey cannot be 0";
pub static ERR_OVERWRITE_MEMBER: &[u8] = b"cannot overwrite existing members";
pub static ERR_OVERWRITE_DELEGATE: &[u8] = b"cannot overwrite existing delegate keys";
pub static ERR_MEMBER_DOES_NOT_EXIST: &[u8] = b"member does not exist";
