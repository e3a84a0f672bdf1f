multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{Proposal, Vote};

#[multiversx_sc::module]
pub trait VotingModule:
    crate::config::ConfigModule
    + crate::members::MembersModule
    + crate::guild_bank::GuildBankModule
    + crate::proposals::ProposalsModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: submitVote
    // 1 = Yes, 2 = No, weighted by the member's current shares.
    // ========================================================

    #[endpoint(submitVote)]
    fn submit_vote(&self, proposal_index: u64, uint_vote: u8) {
        let caller = self.blockchain().get_caller();
        let member_address = self.require_delegate(&caller);
        let mut member = self.members(&member_address).get();

        let mut proposal = self.require_queued_proposal(proposal_index);
        let vote = match Vote::from_u8(uint_vote) {
            Some(vote) => vote,
            None => sc_panic!(ERR_VOTE_OUT_OF_RANGE),
        };

        require!(
            self.current_period() >= proposal.starting_period,
            ERR_VOTING_NOT_STARTED
        );
        require!(
            !self.has_voting_period_expired(proposal.starting_period),
            ERR_VOTING_EXPIRED
        );
        require!(
            self.stored_vote(proposal.id, &member_address) == Vote::Null,
            ERR_ALREADY_VOTED
        );
        require!(vote == Vote::Yes || vote == Vote::No, ERR_VOTE_YES_OR_NO);

        self.votes_by_member(proposal.id, &member_address).set(vote);

        if vote == Vote::Yes {
            proposal.yes_votes += &member.shares;

            // set highest index (latest) yes vote - must be processed for member to ragequit
            let raises_highest = member
                .highest_index_yes_vote
                .map_or(true, |highest| proposal_index > highest);
            if raises_highest {
                member.highest_index_yes_vote = Some(proposal_index);
                self.members(&member_address).set(&member);
            }

            // set maximum of total shares encountered at a yes vote - used to bound dilution for yes voters
            let total = self.total_shares_and_loot();
            if total > proposal.max_total_shares_and_loot_at_yes_vote {
                proposal.max_total_shares_and_loot_at_yes_vote = total;
            }
        } else {
            proposal.no_votes += &member.shares;
        }

        self.proposals(proposal.id).set(&proposal);
        self.submit_vote_event(proposal.id, proposal_index, &caller, &member_address, uint_vote);
    }

    // ========================================================
    // INTERNAL: pass rule
    // ========================================================

    /// Majority of share-weighted votes, unless the guild's size drifted
    /// outside the dilution bound since the largest Yes vote, or the
    /// applicant got jailed in the meantime.
    fn did_pass(&self, proposal: &Proposal<Self::Api>) -> bool {
        if proposal.yes_votes <= proposal.no_votes {
            return false;
        }

        let total = self.total_shares_and_loot();
        let bound = BigUint::from(self.dilution_bound().get());
        let max_at_yes = &proposal.max_total_shares_and_loot_at_yes_vote;

        // too many new shares minted since the Yes votes
        if total > max_at_yes * &bound {
            return false;
        }
        // too many members ragequit since the Yes votes
        if &total * &bound < *max_at_yes {
            return false;
        }

        match &proposal.applicant {
            Some(applicant) => !self.is_jailed(applicant),
            None => true,
        }
    }

    fn stored_vote(&self, proposal_id: u64, member_address: &ManagedAddress) -> Vote {
        let mapper = self.votes_by_member(proposal_id, member_address);
        if mapper.is_empty() {
            Vote::Null
        } else {
            mapper.get()
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMemberProposalVote)]
    fn get_member_proposal_vote(&self, member_address: ManagedAddress, proposal_index: u64) -> Vote {
        require!(self.member_exists(&member_address), ERR_MEMBER_DOES_NOT_EXIST);
        let proposal = self.require_queued_proposal(proposal_index);
        self.stored_vote(proposal.id, &member_address)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("votesByMember")]
    fn votes_by_member(
        &self,
        proposal_id: u64,
        member_address: &ManagedAddress,
    ) -> SingleValueMapper<Vote>;
}
