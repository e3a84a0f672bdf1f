multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Member: one record per principal address
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Member<M: ManagedTypeApi> {
    /// Key allowed to vote and sponsor on behalf of the member. Defaults to the member address.
    pub delegate_key: ManagedAddress<M>,
    /// Voting and economic weight.
    pub shares: BigUint<M>,
    /// Economic weight only; combined with shares on ragequit.
    pub loot: BigUint<M>,
    /// Always true once a member has been created, even after everything is burned.
    pub exists: bool,
    /// Highest queue index the member voted Yes on.
    pub highest_index_yes_vote: Option<u64>,
    /// Id of the guild-kick proposal that jailed this member, 0 if free.
    pub jailed: u64,
}

impl<M: ManagedTypeApi> Member<M> {
    pub fn new(address: ManagedAddress<M>, shares: BigUint<M>, loot: BigUint<M>) -> Self {
        Member {
            delegate_key: address,
            shares,
            loot,
            exists: true,
            highest_index_yes_vote: None,
            jailed: 0,
        }
    }

    pub fn is_jailed(&self) -> bool {
        self.jailed != 0
    }

    pub fn has_stake(&self) -> bool {
        self.shares > 0u64 || self.loot > 0u64
    }
}

// ============================================================
// Proposal kind and status: lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalKind {
    /// Shares/loot for tribute, optionally paying out of the guild bank.
    Standard,
    /// Adds `tribute_token` to the token whitelist.
    Whitelist,
    /// Jails `applicant` and converts their shares to loot.
    GuildKick,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Submitted, waiting for a sponsor.
    Submitted,
    /// Sponsored and queued. Voting and grace windows are derived from the starting period.
    Sponsored,
    /// Withdrawn by the proposer before sponsorship. Terminal state.
    Cancelled,
    /// Processed exactly once. Terminal state.
    Processed { passed: bool },
}

// ============================================================
// Proposal: the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    /// Member candidate for standard proposals, kick target for guild kicks, absent for whitelist.
    pub applicant: Option<ManagedAddress<M>>,
    pub proposer: ManagedAddress<M>,
    pub sponsor: Option<ManagedAddress<M>>,
    pub shares_requested: BigUint<M>,
    pub loot_requested: BigUint<M>,
    pub tribute_offered: BigUint<M>,
    /// Tribute token, or the token to whitelist for whitelist proposals.
    pub tribute_token: Option<TokenIdentifier<M>>,
    pub payment_requested: BigUint<M>,
    pub payment_token: Option<TokenIdentifier<M>>,
    pub starting_period: u64,
    pub yes_votes: BigUint<M>,
    pub no_votes: BigUint<M>,
    pub details: ManagedBuffer<M>,
    pub max_total_shares_and_loot_at_yes_vote: BigUint<M>,
    pub kind: ProposalKind,
    pub status: ProposalStatus,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_sponsored(&self) -> bool {
        matches!(
            self.status,
            ProposalStatus::Sponsored | ProposalStatus::Processed { .. }
        )
    }

    pub fn is_processed(&self) -> bool {
        matches!(self.status, ProposalStatus::Processed { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == ProposalStatus::Cancelled
    }

    pub fn did_pass(&self) -> bool {
        self.status == ProposalStatus::Processed { passed: true }
    }

    /// `[sponsored, processed, didPass, cancelled, whitelist, guildKick]`
    pub fn flags(&self) -> [bool; 6] {
        [
            self.is_sponsored(),
            self.is_processed(),
            self.did_pass(),
            self.is_cancelled(),
            self.kind == ProposalKind::Whitelist,
            self.kind == ProposalKind::GuildKick,
        ]
    }
}

// ============================================================
// Vote
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Vote {
    Null,
    Yes,
    No,
}

impl Vote {
    /// Decodes the raw vote argument. `None` for values of 3 and above.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Vote::Null),
            1 => Some(Vote::Yes),
            2 => Some(Vote::No),
            _ => None,
        }
    }
}
