multiversx_sc::imports!();

use crate::errors::*;

#[multiversx_sc::module]
pub trait RagequitModule:
    crate::config::ConfigModule
    + crate::members::MembersModule
    + crate::guild_bank::GuildBankModule
    + crate::proposals::ProposalsModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: ragequit
    // Burns shares/loot for a proportional cut of every
    // approved token in the guild bank.
    // ========================================================

    #[endpoint(ragequit)]
    fn ragequit(&self, shares_to_burn: BigUint, loot_to_burn: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);
        self.ragequit_member(&caller, &shares_to_burn, &loot_to_burn);
    }

    // ========================================================
    // ENDPOINT: ragekick
    // Anyone can force a jailed member out with all their loot.
    // ========================================================

    #[endpoint(ragekick)]
    fn ragekick(&self, member_to_kick: ManagedAddress) {
        let member = match self.try_get_member(&member_to_kick) {
            Some(member) if member.is_jailed() => member,
            _ => sc_panic!(ERR_MUST_BE_IN_JAIL),
        };
        require!(member.loot > 0u64, ERR_MUST_HAVE_LOOT);
        require!(
            self.yes_votes_resolved(member.highest_index_yes_vote),
            ERR_PENDING_YES_VOTE
        );

        self.ragequit_member(&member_to_kick, &BigUint::zero(), &member.loot);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn ragequit_member(&self, address: &ManagedAddress, shares_to_burn: &BigUint, loot_to_burn: &BigUint) {
        let initial_total_shares_and_loot = self.total_shares_and_loot();
        let member = self.members(address).get();

        require!(member.shares >= *shares_to_burn, ERR_INSUFFICIENT_SHARES);
        require!(member.loot >= *loot_to_burn, ERR_INSUFFICIENT_LOOT);
        require!(
            self.yes_votes_resolved(member.highest_index_yes_vote),
            ERR_PENDING_YES_VOTE
        );

        let shares_and_loot_to_burn = shares_to_burn + loot_to_burn;
        self.burn_shares_and_loot(address, shares_to_burn, loot_to_burn);

        let guild = self.guild_address();
        for token in self.approved_tokens().iter() {
            let guild_balance = self.user_token_balance(&guild, &token).get();
            let amount_to_ragequit = self.fair_share(
                &guild_balance,
                &shares_and_loot_to_burn,
                &initial_total_shares_and_loot,
            );
            if amount_to_ragequit > 0u64 {
                self.user_token_balance(&guild, &token)
                    .update(|balance| *balance -= &amount_to_ragequit);
                self.user_token_balance(address, &token)
                    .update(|balance| *balance += &amount_to_ragequit);
                if guild_balance == amount_to_ragequit {
                    self.total_guild_bank_tokens().update(|count| *count -= 1);
                }
            }
        }

        self.ragequit_event(address, shares_to_burn, loot_to_burn);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// True once the proposal at `highest_index_yes_vote` is processed.
    #[view(canRagequit)]
    fn can_ragequit(&self, highest_index_yes_vote: u64) -> bool {
        self.require_queued_proposal(highest_index_yes_vote)
            .is_processed()
    }

    fn yes_votes_resolved(&self, highest_index_yes_vote: Option<u64>) -> bool {
        highest_index_yes_vote.map_or(true, |index| self.can_ragequit(index))
    }
}
