#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod errors;
pub mod events;
pub mod guild_bank;
pub mod members;
pub mod processing;
pub mod proposals;
pub mod ragequit;
pub mod types;
pub mod voting;

use config::{
    MAX_DILUTION_BOUND, MAX_GRACE_PERIOD_LENGTH, MAX_TOKEN_WHITELIST_COUNT,
    MAX_VOTING_PERIOD_LENGTH, SUMMONER_SHARES,
};
use errors::*;

// ============================================================
// Contract
// A member-owned guild: proposals mint shares and loot for
// tribute, whitelist tokens or kick members; members can
// ragequit for a proportional cut of the guild bank.
// ============================================================

#[multiversx_sc::contract]
pub trait GuildDao:
    config::ConfigModule
    + events::EventsModule
    + members::MembersModule
    + guild_bank::GuildBankModule
    + proposals::ProposalsModule
    + voting::VotingModule
    + processing::ProcessingModule
    + ragequit::RagequitModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[allow(clippy::too_many_arguments)]
    #[init]
    fn init(
        &self,
        summoner: ManagedAddress,
        period_duration: u64,
        voting_period_length: u64,
        grace_period_length: u64,
        proposal_deposit: BigUint,
        dilution_bound: u64,
        processing_reward: BigUint,
        approved_tokens: MultiValueEncoded<TokenIdentifier>,
    ) {
        require!(!summoner.is_zero(), ERR_SUMMONER_ZERO);
        require!(period_duration > 0, ERR_PERIOD_DURATION_ZERO);
        require!(voting_period_length > 0, ERR_VOTING_PERIOD_ZERO);
        require!(
            voting_period_length <= MAX_VOTING_PERIOD_LENGTH,
            ERR_VOTING_PERIOD_LIMIT
        );
        require!(
            grace_period_length <= MAX_GRACE_PERIOD_LENGTH,
            ERR_GRACE_PERIOD_LIMIT
        );
        require!(dilution_bound > 0, ERR_DILUTION_BOUND_ZERO);
        require!(dilution_bound <= MAX_DILUTION_BOUND, ERR_DILUTION_BOUND_LIMIT);

        let tokens = approved_tokens.to_vec();
        require!(!tokens.is_empty(), ERR_NO_APPROVED_TOKEN);
        require!(tokens.len() <= MAX_TOKEN_WHITELIST_COUNT, ERR_TOO_MANY_TOKENS);
        require!(
            proposal_deposit >= processing_reward,
            ERR_DEPOSIT_BELOW_REWARD
        );

        for token in tokens.iter() {
            require!(token.is_valid_esdt_identifier(), ERR_APPROVED_TOKEN_INVALID);
            require!(
                self.approved_tokens().insert(token.clone_value()),
                ERR_DUPLICATE_APPROVED_TOKEN
            );
        }
        self.deposit_token().set(tokens.get(0).clone_value());

        let summoning_time = self.blockchain().get_block_timestamp();
        self.summoning_time().set(summoning_time);
        self.period_duration().set(period_duration);
        self.voting_period_length().set(voting_period_length);
        self.grace_period_length().set(grace_period_length);
        self.proposal_deposit().set(&proposal_deposit);
        self.dilution_bound().set(dilution_bound);
        self.processing_reward().set(&processing_reward);
        self.proposal_count().set(0u64);
        self.total_guild_bank_tokens().set(0u32);
        self.total_shares().set(BigUint::zero());
        self.total_loot().set(BigUint::zero());

        self.grant_shares_and_loot(&summoner, &BigUint::from(SUMMONER_SHARES), &BigUint::zero());

        self.summon_complete_event(&summoner, summoning_time, &tokens);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
