multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("summonComplete")]
    fn summon_complete_event(
        &self,
        #[indexed] summoner: &ManagedAddress,
        #[indexed] summoning_time: u64,
        tokens: &ManagedVec<TokenIdentifier>,
    );

    #[event("submitProposal")]
    fn submit_proposal_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] member_address: &ManagedAddress,
        details: &ManagedBuffer,
    );

    #[event("sponsorProposal")]
    fn sponsor_proposal_event(
        &self,
        #[indexed] delegate_key: &ManagedAddress,
        #[indexed] member_address: &ManagedAddress,
        #[indexed] proposal_id: u64,
        #[indexed] proposal_index: u64,
        starting_period: u64,
    );

    #[event("submitVote")]
    fn submit_vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposal_index: u64,
        #[indexed] delegate_key: &ManagedAddress,
        #[indexed] member_address: &ManagedAddress,
        vote: u8,
    );

    #[event("processProposal")]
    fn process_proposal_event(
        &self,
        #[indexed] proposal_index: u64,
        #[indexed] proposal_id: u64,
        did_pass: bool,
    );

    #[event("processWhitelistProposal")]
    fn process_whitelist_proposal_event(
        &self,
        #[indexed] proposal_index: u64,
        #[indexed] proposal_id: u64,
        did_pass: bool,
    );

    #[event("processGuildKickProposal")]
    fn process_guild_kick_proposal_event(
        &self,
        #[indexed] proposal_index: u64,
        #[indexed] proposal_id: u64,
        did_pass: bool,
    );

    #[event("ragequit")]
    fn ragequit_event(
        &self,
        #[indexed] member_address: &ManagedAddress,
        #[indexed] shares_to_burn: &BigUint,
        loot_to_burn: &BigUint,
    );

    #[event("tokensCollected")]
    fn tokens_collected_event(
        &self,
        #[indexed] token: &TokenIdentifier,
        amount_to_collect: &BigUint,
    );

    #[event("cancelProposal")]
    fn cancel_proposal_event(&self, #[indexed] proposal_id: u64, applicant_address: &ManagedAddress);

    #[event("updateDelegateKey")]
    fn update_delegate_key_event(
        &self,
        #[indexed] member_address: &ManagedAddress,
        new_delegate_key: &ManagedAddress,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] member_address: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        amount: &BigUint,
    );
}
