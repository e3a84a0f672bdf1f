multiversx_sc::imports!();

use crate::config::{MAX_NUMBER_OF_SHARES_AND_LOOT, MAX_TOKEN_WHITELIST_COUNT};
use crate::errors::*;
use crate::types::{Proposal, ProposalKind, ProposalStatus};

#[multiversx_sc::module]
pub trait ProcessingModule:
    crate::config::ConfigModule
    + crate::members::MembersModule
    + crate::guild_bank::GuildBankModule
    + crate::proposals::ProposalsModule
    + crate::voting::VotingModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: processProposal
    // Standard proposals: mint shares/loot for tribute and pay
    // out of the guild bank. Anyone can process.
    // ========================================================

    #[endpoint(processProposal)]
    fn process_proposal(&self, proposal_index: u64) {
        let mut proposal = self.validate_proposal_for_processing(proposal_index);
        require!(proposal.kind == ProposalKind::Standard, ERR_MUST_BE_STANDARD);

        let applicant = self.kick_target(&proposal);
        let tribute_token = self.whitelist_target(&proposal);
        let payment_token = match &proposal.payment_token {
            Some(token) => token.clone(),
            None => sc_panic!(ERR_PAYMENT_NOT_WHITELISTED),
        };
        let guild = self.guild_address();

        let mut did_pass = self.did_pass(&proposal);

        // guild would exceed the share and loot ceiling
        let minted = &proposal.shares_requested + &proposal.loot_requested;
        if self.total_shares_and_loot() + minted > MAX_NUMBER_OF_SHARES_AND_LOOT {
            did_pass = false;
        }

        // the guild bank cannot cover the payment
        if proposal.payment_requested > self.user_token_balance(&guild, &payment_token).get() {
            did_pass = false;
        }

        // tribute would open a new guild-bank slot past the cap
        if !self.guild_bank_has_room_for(&tribute_token, &proposal.tribute_offered) {
            did_pass = false;
        }

        proposal.status = ProposalStatus::Processed { passed: did_pass };
        self.proposals(proposal.id).set(&proposal);

        if did_pass {
            self.grant_shares_and_loot(
                &applicant,
                &proposal.shares_requested,
                &proposal.loot_requested,
            );

            if proposal.tribute_offered > 0u64
                && self.user_token_balance(&guild, &tribute_token).get() == 0u64
            {
                self.total_guild_bank_tokens().update(|count| *count += 1);
            }
            self.internal_transfer(
                &self.escrow_address(),
                &guild,
                &tribute_token,
                &proposal.tribute_offered,
            );

            self.internal_transfer(
                &guild,
                &applicant,
                &payment_token,
                &proposal.payment_requested,
            );
            if proposal.payment_requested > 0u64
                && self.user_token_balance(&guild, &payment_token).get() == 0u64
            {
                self.total_guild_bank_tokens().update(|count| *count -= 1);
            }
        } else {
            self.refund_tribute(&proposal);
        }

        self.return_deposit(&proposal);
        self.process_proposal_event(proposal_index, proposal.id, did_pass);
    }

    // ========================================================
    // ENDPOINT: processWhitelistProposal
    // ========================================================

    #[endpoint(processWhitelistProposal)]
    fn process_whitelist_proposal(&self, proposal_index: u64) {
        let mut proposal = self.validate_proposal_for_processing(proposal_index);
        require!(proposal.kind == ProposalKind::Whitelist, ERR_MUST_BE_WHITELIST);

        let token = self.whitelist_target(&proposal);
        let mut did_pass = self.did_pass(&proposal);
        if self.approved_tokens().len() >= MAX_TOKEN_WHITELIST_COUNT {
            did_pass = false;
        }

        proposal.status = ProposalStatus::Processed { passed: did_pass };
        self.proposals(proposal.id).set(&proposal);

        if did_pass {
            self.approved_tokens().insert(token.clone());
        }
        self.proposed_to_whitelist(&token).clear();

        self.return_deposit(&proposal);
        self.process_whitelist_proposal_event(proposal_index, proposal.id, did_pass);
    }

    // ========================================================
    // ENDPOINT: processGuildKickProposal
    // ========================================================

    #[endpoint(processGuildKickProposal)]
    fn process_guild_kick_proposal(&self, proposal_index: u64) {
        let mut proposal = self.validate_proposal_for_processing(proposal_index);
        require!(proposal.kind == ProposalKind::GuildKick, ERR_MUST_BE_GUILD_KICK);

        let target = self.kick_target(&proposal);
        let did_pass = self.did_pass(&proposal);

        proposal.status = ProposalStatus::Processed { passed: did_pass };
        self.proposals(proposal.id).set(&proposal);

        if did_pass {
            self.jail_member(&target, proposal.id);
        }
        self.proposed_to_kick(&target).clear();

        self.return_deposit(&proposal);
        self.process_guild_kick_proposal_event(proposal_index, proposal.id, did_pass);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Queue position exists, voting and grace are over, not yet processed,
    /// and every earlier queued proposal is already processed.
    fn validate_proposal_for_processing(&self, proposal_index: u64) -> Proposal<Self::Api> {
        let proposal = self.require_queued_proposal(proposal_index);

        let ready_at = proposal.starting_period
            + self.voting_period_length().get()
            + self.grace_period_length().get();
        require!(self.current_period() >= ready_at, ERR_NOT_READY);
        require!(!proposal.is_processed(), ERR_ALREADY_PROCESSED);
        require!(
            proposal_index == 0 || self.require_queued_proposal(proposal_index - 1).is_processed(),
            ERR_PREVIOUS_NOT_PROCESSED
        );

        proposal
    }

    /// Processing reward to the caller, the rest of the deposit back to the sponsor.
    fn return_deposit(&self, proposal: &Proposal<Self::Api>) {
        let sponsor = match &proposal.sponsor {
            Some(sponsor) => sponsor.clone(),
            None => sc_panic!(ERR_NOT_PROPOSED),
        };
        let caller = self.blockchain().get_caller();
        let deposit_token = self.deposit_token().get();
        let reward = self.processing_reward().get();
        let refund = self.proposal_deposit().get() - &reward;
        let escrow = self.escrow_address();

        self.internal_transfer(&escrow, &caller, &deposit_token, &reward);
        self.internal_transfer(&escrow, &sponsor, &deposit_token, &refund);
    }
}
