multiversx_sc::imports!();

use crate::config::{MAX_NUMBER_OF_SHARES_AND_LOOT, MAX_TOKEN_WHITELIST_COUNT};
use crate::errors::*;
use crate::types::{Proposal, ProposalKind, ProposalStatus};

#[multiversx_sc::module]
pub trait ProposalsModule:
    crate::config::ConfigModule
    + crate::members::MembersModule
    + crate::guild_bank::GuildBankModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: submitProposal
    // Anyone can submit. Tribute travels with the call and is
    // held in ESCROW until the proposal resolves.
    // ========================================================

    #[payable("*")]
    #[endpoint(submitProposal)]
    fn submit_proposal(
        &self,
        applicant: ManagedAddress,
        shares_requested: BigUint,
        loot_requested: BigUint,
        tribute_offered: BigUint,
        tribute_token: TokenIdentifier,
        payment_requested: BigUint,
        payment_token: TokenIdentifier,
        details: ManagedBuffer,
    ) -> u64 {
        require!(
            &shares_requested + &loot_requested <= MAX_NUMBER_OF_SHARES_AND_LOOT,
            ERR_TOO_MANY_SHARES
        );
        require!(
            self.approved_tokens().contains(&tribute_token),
            ERR_TRIBUTE_NOT_WHITELISTED
        );
        require!(
            self.approved_tokens().contains(&payment_token),
            ERR_PAYMENT_NOT_WHITELISTED
        );
        require!(!applicant.is_zero(), ERR_APPLICANT_ZERO);
        require!(!self.is_reserved_address(&applicant), ERR_APPLICANT_RESERVED);
        require!(!self.is_jailed(&applicant), ERR_APPLICANT_JAILED);
        require!(
            self.guild_bank_has_room_for(&tribute_token, &tribute_offered),
            ERR_GUILD_BANK_FULL
        );

        self.require_payment(&tribute_token, &tribute_offered, ERR_INSUFFICIENT_TRIBUTE);
        self.add_to_balance(&self.escrow_address(), &tribute_token, &tribute_offered);

        self.store_new_proposal(
            ProposalKind::Standard,
            Some(applicant),
            shares_requested,
            loot_requested,
            tribute_offered,
            Some(tribute_token),
            payment_requested,
            Some(payment_token),
            details,
        )
    }

    // ========================================================
    // ENDPOINT: submitWhitelistProposal
    // ========================================================

    #[endpoint(submitWhitelistProposal)]
    fn submit_whitelist_proposal(
        &self,
        token_to_whitelist: TokenIdentifier,
        details: ManagedBuffer,
    ) -> u64 {
        require!(token_to_whitelist.is_valid_esdt_identifier(), ERR_MISSING_TOKEN);
        require!(
            !self.approved_tokens().contains(&token_to_whitelist),
            ERR_ALREADY_WHITELISTED
        );
        require!(
            self.approved_tokens().len() < MAX_TOKEN_WHITELIST_COUNT,
            ERR_WHITELIST_FULL_SUBMIT
        );

        self.store_new_proposal(
            ProposalKind::Whitelist,
            None,
            BigUint::zero(),
            BigUint::zero(),
            BigUint::zero(),
            Some(token_to_whitelist),
            BigUint::zero(),
            None,
            details,
        )
    }

    // ========================================================
    // ENDPOINT: submitGuildKickProposal
    // ========================================================

    #[endpoint(submitGuildKickProposal)]
    fn submit_guild_kick_proposal(&self, member_to_kick: ManagedAddress, details: ManagedBuffer) -> u64 {
        let member = self.try_get_member(&member_to_kick);
        require!(
            member.as_ref().map(|m| m.has_stake()).unwrap_or(false),
            ERR_KICK_NO_STAKE
        );
        require!(
            !member.map(|m| m.is_jailed()).unwrap_or(false),
            ERR_KICK_ALREADY_JAILED
        );

        self.store_new_proposal(
            ProposalKind::GuildKick,
            Some(member_to_kick),
            BigUint::zero(),
            BigUint::zero(),
            BigUint::zero(),
            None,
            BigUint::zero(),
            None,
            details,
        )
    }

    // ========================================================
    // ENDPOINT: sponsorProposal
    // A delegate stakes the deposit and queues the proposal.
    // ========================================================

    #[payable("*")]
    #[endpoint(sponsorProposal)]
    fn sponsor_proposal(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let member_address = self.require_delegate(&caller);

        let deposit_token = self.deposit_token().get();
        let deposit = self.proposal_deposit().get();
        self.require_payment(&deposit_token, &deposit, ERR_INSUFFICIENT_DEPOSIT);

        require!(!self.proposals(proposal_id).is_empty(), ERR_NOT_PROPOSED);
        let mut proposal = self.proposals(proposal_id).get();
        require!(!proposal.is_sponsored(), ERR_ALREADY_SPONSORED);
        require!(!proposal.is_cancelled(), ERR_ALREADY_CANCELLED);
        if let Some(applicant) = &proposal.applicant {
            require!(!self.is_jailed(applicant), ERR_APPLICANT_JAILED);
        }
        if let Some(tribute_token) = &proposal.tribute_token {
            require!(
                self.guild_bank_has_room_for(tribute_token, &proposal.tribute_offered),
                ERR_GUILD_BANK_FULL_SPONSOR
            );
        }

        match proposal.kind {
            ProposalKind::Whitelist => {
                let token = self.whitelist_target(&proposal);
                require!(!self.approved_tokens().contains(&token), ERR_ALREADY_WHITELISTED);
                require!(
                    !self.proposed_to_whitelist(&token).get(),
                    ERR_ALREADY_PROPOSED_TO_WHITELIST
                );
                require!(
                    self.approved_tokens().len() < MAX_TOKEN_WHITELIST_COUNT,
                    ERR_WHITELIST_FULL_SPONSOR
                );
                self.proposed_to_whitelist(&token).set(true);
            },
            ProposalKind::GuildKick => {
                let target = self.kick_target(&proposal);
                require!(!self.proposed_to_kick(&target).get(), ERR_ALREADY_PROPOSED_TO_KICK);
                self.proposed_to_kick(&target).set(true);
            },
            ProposalKind::Standard => {},
        }

        self.add_to_balance(&self.escrow_address(), &deposit_token, &deposit);

        // compute starting period: never before the last queued proposal
        let queue = self.proposal_queue();
        let last_starting_period = if queue.is_empty() {
            0
        } else {
            self.proposals(queue.get(queue.len())).get().starting_period
        };
        let starting_period = core::cmp::max(self.current_period(), last_starting_period) + 1;
        let proposal_index = queue.len() as u64;

        proposal.sponsor = Some(member_address.clone());
        proposal.starting_period = starting_period;
        proposal.status = ProposalStatus::Sponsored;
        self.proposals(proposal_id).set(&proposal);
        self.proposal_queue().push(&proposal_id);

        self.sponsor_proposal_event(
            &caller,
            &member_address,
            proposal_id,
            proposal_index,
            starting_period,
        );
    }

    // ========================================================
    // ENDPOINT: cancelProposal
    // Proposer can withdraw an unsponsored proposal; tribute is
    // returned to their internal balance.
    // ========================================================

    #[endpoint(cancelProposal)]
    fn cancel_proposal(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_DOES_NOT_EXIST
        );

        let mut proposal = self.proposals(proposal_id).get();
        require!(!proposal.is_sponsored(), ERR_ALREADY_SPONSORED);
        require!(!proposal.is_cancelled(), ERR_ALREADY_CANCELLED);
        require!(proposal.proposer == caller, ERR_SOLELY_PROPOSER_CAN_CANCEL);

        proposal.status = ProposalStatus::Cancelled;
        self.proposals(proposal_id).set(&proposal);
        self.refund_tribute(&proposal);

        self.cancel_proposal_event(proposal_id, &caller);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    #[allow(clippy::too_many_arguments)]
    fn store_new_proposal(
        &self,
        kind: ProposalKind,
        applicant: Option<ManagedAddress>,
        shares_requested: BigUint,
        loot_requested: BigUint,
        tribute_offered: BigUint,
        tribute_token: Option<TokenIdentifier>,
        payment_requested: BigUint,
        payment_token: Option<TokenIdentifier>,
        details: ManagedBuffer,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        let proposal_id = self.proposal_count().get() + 1u64;

        let proposal = Proposal {
            id: proposal_id,
            applicant,
            proposer: caller.clone(),
            sponsor: None,
            shares_requested,
            loot_requested,
            tribute_offered,
            tribute_token,
            payment_requested,
            payment_token,
            starting_period: 0u64,
            yes_votes: BigUint::zero(),
            no_votes: BigUint::zero(),
            details,
            max_total_shares_and_loot_at_yes_vote: BigUint::zero(),
            kind,
            status: ProposalStatus::Submitted,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        let key_owner = self.member_address_by_delegate_key(&caller);
        let member_address = if key_owner.is_empty() {
            ManagedAddress::zero()
        } else {
            key_owner.get()
        };
        self.submit_proposal_event(proposal_id, &caller, &member_address, &proposal.details);

        proposal_id
    }

    /// Returns escrowed tribute to the proposer's internal balance.
    fn refund_tribute(&self, proposal: &Proposal<Self::Api>) {
        if let Some(tribute_token) = &proposal.tribute_token {
            self.internal_transfer(
                &self.escrow_address(),
                &proposal.proposer,
                tribute_token,
                &proposal.tribute_offered,
            );
        }
    }

    fn whitelist_target(&self, proposal: &Proposal<Self::Api>) -> TokenIdentifier {
        match &proposal.tribute_token {
            Some(token) => token.clone(),
            None => sc_panic!(ERR_MISSING_TOKEN),
        }
    }

    fn kick_target(&self, proposal: &Proposal<Self::Api>) -> ManagedAddress {
        match &proposal.applicant {
            Some(applicant) => applicant.clone(),
            None => sc_panic!(ERR_MEMBER_DOES_NOT_EXIST),
        }
    }

    /// Resolves a 0-based queue index to the stored proposal.
    fn require_queued_proposal(&self, proposal_index: u64) -> Proposal<Self::Api> {
        let queue = self.proposal_queue();
        require!(
            proposal_index < queue.len() as u64,
            ERR_PROPOSAL_DOES_NOT_EXIST
        );
        let proposal_id = queue.get(proposal_index as usize + 1);
        self.proposals(proposal_id).get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> OptionalValue<Proposal<Self::Api>> {
        let mapper = self.proposals(proposal_id);
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    #[view(getProposalFlags)]
    fn get_proposal_flags(&self, proposal_id: u64) -> [bool; 6] {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_DOES_NOT_EXIST
        );
        self.proposals(proposal_id).get().flags()
    }

    #[view(getProposalQueueLength)]
    fn get_proposal_queue_length(&self) -> u64 {
        self.proposal_queue().len() as u64
    }

    #[view(getProposalIdAtIndex)]
    fn get_proposal_id_at_index(&self, proposal_index: u64) -> u64 {
        self.require_queued_proposal(proposal_index).id
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("proposalQueue")]
    fn proposal_queue(&self) -> VecMapper<u64>;

    #[view(isProposedToWhitelist)]
    #[storage_mapper("proposedToWhitelist")]
    fn proposed_to_whitelist(&self, token: &TokenIdentifier) -> SingleValueMapper<bool>;

    #[view(isProposedToKick)]
    #[storage_mapper("proposedToKick")]
    fn proposed_to_kick(&self, member: &ManagedAddress) -> SingleValueMapper<bool>;
}
