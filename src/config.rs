multiversx_sc::imports!();

// ============================================================
// Hard-coded limits
// Small enough to keep period and share arithmetic far from
// overflow, large enough not to constrain real guilds.
// ============================================================

pub const MAX_VOTING_PERIOD_LENGTH: u64 = 1_000_000_000_000_000_000;
pub const MAX_GRACE_PERIOD_LENGTH: u64 = 1_000_000_000_000_000_000;
pub const MAX_DILUTION_BOUND: u64 = 1_000_000_000_000_000_000;
pub const MAX_NUMBER_OF_SHARES_AND_LOOT: u64 = 1_000_000_000_000_000_000;
pub const MAX_TOKEN_WHITELIST_COUNT: usize = 400;
pub const MAX_TOKEN_GUILDBANK_COUNT: u32 = 200;

/// Shares minted to the summoner at deployment.
pub const SUMMONER_SHARES: u64 = 1;

// ============================================================
// Reserved ledger accounts
// ============================================================

const fn reserved_address(tag: u16) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[30] = (tag >> 8) as u8;
    bytes[31] = tag as u8;
    bytes
}

/// The guild treasury.
pub const GUILD: [u8; 32] = reserved_address(0xdead);
/// Tribute and deposits held until the proposal resolves.
pub const ESCROW: [u8; 32] = reserved_address(0xbeef);
/// Mirror of every ledger credit and debit, per token.
pub const TOTAL: [u8; 32] = reserved_address(0xbabe);

#[multiversx_sc::module]
pub trait ConfigModule {
    fn guild_address(&self) -> ManagedAddress {
        ManagedAddress::new_from_bytes(&GUILD)
    }

    fn escrow_address(&self) -> ManagedAddress {
        ManagedAddress::new_from_bytes(&ESCROW)
    }

    fn total_address(&self) -> ManagedAddress {
        ManagedAddress::new_from_bytes(&TOTAL)
    }

    fn is_reserved_address(&self, address: &ManagedAddress) -> bool {
        let bytes = address.to_byte_array();
        bytes == GUILD || bytes == ESCROW || bytes == TOTAL
    }

    // ========================================================
    // Period clock
    // ========================================================

    #[view(getCurrentPeriod)]
    fn current_period(&self) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        let summoned_at = self.summoning_time().get();
        now.saturating_sub(summoned_at) / self.period_duration().get()
    }

    #[view(hasVotingPeriodExpired)]
    fn has_voting_period_expired(&self, starting_period: u64) -> bool {
        self.current_period() >= starting_period + self.voting_period_length().get()
    }

    // ========================================================
    // STORAGE: immutable after init
    // ========================================================

    #[view(getSummoningTime)]
    #[storage_mapper("summoningTime")]
    fn summoning_time(&self) -> SingleValueMapper<u64>;

    #[view(getPeriodDuration)]
    #[storage_mapper("periodDuration")]
    fn period_duration(&self) -> SingleValueMapper<u64>;

    #[view(getVotingPeriodLength)]
    #[storage_mapper("votingPeriodLength")]
    fn voting_period_length(&self) -> SingleValueMapper<u64>;

    #[view(getGracePeriodLength)]
    #[storage_mapper("gracePeriodLength")]
    fn grace_period_length(&self) -> SingleValueMapper<u64>;

    #[view(getProposalDeposit)]
    #[storage_mapper("proposalDeposit")]
    fn proposal_deposit(&self) -> SingleValueMapper<BigUint>;

    #[view(getDilutionBound)]
    #[storage_mapper("dilutionBound")]
    fn dilution_bound(&self) -> SingleValueMapper<u64>;

    #[view(getProcessingReward)]
    #[storage_mapper("processingReward")]
    fn processing_reward(&self) -> SingleValueMapper<BigUint>;

    /// First approved token. Deposits and processing rewards are paid in it.
    #[view(getDepositToken)]
    #[storage_mapper("depositToken")]
    fn deposit_token(&self) -> SingleValueMapper<TokenIdentifier>;
}
