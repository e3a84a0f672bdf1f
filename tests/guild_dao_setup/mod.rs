#![allow(dead_code)]

use multiversx_sc::types::{Address, MultiValueEncoded};
use multiversx_sc_scenario::{
    managed_address, managed_biguint, managed_buffer, managed_token_id, rust_biguint,
    whitebox_legacy::*, DebugApi,
};

pub use guild_dao::config::ConfigModule;
pub use guild_dao::guild_bank::GuildBankModule;
pub use guild_dao::members::MembersModule;
pub use guild_dao::processing::ProcessingModule;
pub use guild_dao::proposals::ProposalsModule;
pub use guild_dao::ragequit::RagequitModule;
pub use guild_dao::types::Vote;
pub use guild_dao::voting::VotingModule;
pub use guild_dao::GuildDao;

pub const WASM_PATH: &str = "output/guild-dao.wasm";

pub const DEPOSIT_TOKEN: &[u8] = b"GUILD-abcdef";
pub const OTHER_TOKEN: &[u8] = b"OTHER-abcdef";

pub const PERIOD_DURATION: u64 = 17_280;
pub const VOTING_PERIOD_LENGTH: u64 = 35;
pub const GRACE_PERIOD_LENGTH: u64 = 35;
pub const PROPOSAL_DEPOSIT: u64 = 10;
pub const DILUTION_BOUND: u64 = 3;
pub const PROCESSING_REWARD: u64 = 1;

pub const INIT_SUMMONER_BALANCE: u64 = 100;
pub const INIT_APPLICANT_BALANCE: u64 = 1_000;

pub const STANDARD_SHARE_REQUEST: u64 = 100;
pub const STANDARD_LOOT_REQUEST: u64 = 73;
pub const STANDARD_TRIBUTE: u64 = 80;
pub const SUMMONER_SHARES: u64 = 1;

pub const YES: u8 = 1;
pub const NO: u8 = 2;

pub fn err(message: &[u8]) -> &str {
    core::str::from_utf8(message).unwrap()
}

pub fn guild() -> Address {
    Address::from(guild_dao::config::GUILD)
}

pub fn escrow() -> Address {
    Address::from(guild_dao::config::ESCROW)
}

pub fn total() -> Address {
    Address::from(guild_dao::config::TOTAL)
}

/// `count` distinct, valid token identifiers.
pub fn token_list(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| format!("TKN{:04}-abcdef", i).into_bytes())
        .collect()
}

// ============================================================
// Deployment configuration
// ============================================================

#[derive(Clone)]
pub struct DaoConfig {
    pub summoner: Address,
    pub period_duration: u64,
    pub voting_period_length: u64,
    pub grace_period_length: u64,
    pub proposal_deposit: u64,
    pub dilution_bound: u64,
    pub processing_reward: u64,
    pub approved_tokens: Vec<Vec<u8>>,
}

impl DaoConfig {
    pub fn new(summoner: &Address) -> Self {
        DaoConfig {
            summoner: summoner.clone(),
            period_duration: PERIOD_DURATION,
            voting_period_length: VOTING_PERIOD_LENGTH,
            grace_period_length: GRACE_PERIOD_LENGTH,
            proposal_deposit: PROPOSAL_DEPOSIT,
            dilution_bound: DILUTION_BOUND,
            processing_reward: PROCESSING_REWARD,
            approved_tokens: vec![DEPOSIT_TOKEN.to_vec()],
        }
    }
}

pub fn deploy_dao<DaoObjBuilder>(
    b_mock: &mut BlockchainStateWrapper,
    owner: &Address,
    dao_builder: DaoObjBuilder,
    config: &DaoConfig,
) -> (
    ContractObjWrapper<guild_dao::ContractObj<DebugApi>, DaoObjBuilder>,
    TxResult,
)
where
    DaoObjBuilder: 'static + Copy + Fn() -> guild_dao::ContractObj<DebugApi>,
{
    let dao_wrapper =
        b_mock.create_sc_account(&rust_biguint!(0), Some(owner), dao_builder, WASM_PATH);

    let result = b_mock.execute_tx(owner, &dao_wrapper, &rust_biguint!(0), |sc| {
        let mut approved_tokens = MultiValueEncoded::new();
        for token in config.approved_tokens.iter() {
            approved_tokens.push(managed_token_id!(token.as_slice()));
        }
        sc.init(
            managed_address!(&config.summoner),
            config.period_duration,
            config.voting_period_length,
            config.grace_period_length,
            managed_biguint!(config.proposal_deposit),
            config.dilution_bound,
            managed_biguint!(config.processing_reward),
            approved_tokens,
        );
    });

    (dao_wrapper, result)
}

// ============================================================
// Proposal requests
// ============================================================

#[derive(Clone)]
pub struct ProposalRequest {
    pub shares_requested: u64,
    pub loot_requested: u64,
    pub tribute_offered: u64,
    /// Amount actually attached to the call.
    pub tribute_paid: u64,
    pub tribute_token: &'static [u8],
    pub payment_requested: u64,
    pub payment_token: &'static [u8],
}

impl ProposalRequest {
    pub fn standard() -> Self {
        Self::shares_and_loot(STANDARD_SHARE_REQUEST, STANDARD_LOOT_REQUEST, STANDARD_TRIBUTE)
    }

    pub fn shares_and_loot(shares: u64, loot: u64, tribute: u64) -> Self {
        ProposalRequest {
            shares_requested: shares,
            loot_requested: loot,
            tribute_offered: tribute,
            tribute_paid: tribute,
            tribute_token: DEPOSIT_TOKEN,
            payment_requested: 0,
            payment_token: DEPOSIT_TOKEN,
        }
    }

    pub fn payment(amount: u64) -> Self {
        ProposalRequest {
            payment_requested: amount,
            ..Self::shares_and_loot(0, 0, 0)
        }
    }
}

// ============================================================
// Plain snapshots of contract state
// ============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct MemberState {
    pub delegate_key: Address,
    pub shares: u64,
    pub loot: u64,
    pub exists: bool,
    pub highest_index_yes_vote: Option<u64>,
    pub jailed: u64,
}

impl MemberState {
    pub fn is_jailed(&self) -> bool {
        self.jailed != 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProposalState {
    pub proposer: Address,
    pub sponsor: Option<Address>,
    pub starting_period: u64,
    pub yes_votes: u64,
    pub no_votes: u64,
    pub max_total_shares_and_loot_at_yes_vote: u64,
    pub flags: [bool; 6],
}

// ============================================================
// Setup
// ============================================================

pub type DaoBuilder = fn() -> guild_dao::ContractObj<DebugApi>;
pub type DefaultDaoSetup = DaoSetup<DaoBuilder>;

pub fn default_setup() -> DefaultDaoSetup {
    DaoSetup::new(guild_dao::contract_obj as DaoBuilder)
}

pub struct DaoSetup<DaoObjBuilder>
where
    DaoObjBuilder: 'static + Copy + Fn() -> guild_dao::ContractObj<DebugApi>,
{
    pub b_mock: BlockchainStateWrapper,
    pub owner: Address,
    pub summoner: Address,
    pub applicant: Address,
    pub second_applicant: Address,
    pub delegate: Address,
    pub processor: Address,
    pub dao_wrapper: ContractObjWrapper<guild_dao::ContractObj<DebugApi>, DaoObjBuilder>,
}

impl<DaoObjBuilder> DaoSetup<DaoObjBuilder>
where
    DaoObjBuilder: 'static + Copy + Fn() -> guild_dao::ContractObj<DebugApi>,
{
    pub fn new(dao_builder: DaoObjBuilder) -> Self {
        Self::with_approved_tokens(dao_builder, vec![DEPOSIT_TOKEN.to_vec()])
    }

    /// The first token becomes the deposit token.
    pub fn with_approved_tokens(dao_builder: DaoObjBuilder, approved_tokens: Vec<Vec<u8>>) -> Self {
        let rust_zero = rust_biguint!(0);
        let mut b_mock = BlockchainStateWrapper::new();
        let owner = b_mock.create_user_account(&rust_zero);
        let summoner = b_mock.create_user_account(&rust_zero);
        let applicant = b_mock.create_user_account(&rust_zero);
        let second_applicant = b_mock.create_user_account(&rust_zero);
        let delegate = b_mock.create_user_account(&rust_zero);
        let processor = b_mock.create_user_account(&rust_zero);

        b_mock.set_esdt_balance(&summoner, DEPOSIT_TOKEN, &rust_biguint!(INIT_SUMMONER_BALANCE));
        b_mock.set_esdt_balance(&applicant, DEPOSIT_TOKEN, &rust_biguint!(INIT_APPLICANT_BALANCE));
        b_mock.set_esdt_balance(
            &second_applicant,
            DEPOSIT_TOKEN,
            &rust_biguint!(INIT_APPLICANT_BALANCE),
        );
        b_mock.set_esdt_balance(&delegate, DEPOSIT_TOKEN, &rust_biguint!(INIT_SUMMONER_BALANCE));
        b_mock.set_esdt_balance(&applicant, OTHER_TOKEN, &rust_biguint!(INIT_APPLICANT_BALANCE));

        b_mock.set_block_timestamp(0);
        let mut config = DaoConfig::new(&summoner);
        config.approved_tokens = approved_tokens;
        let (dao_wrapper, result) = deploy_dao(&mut b_mock, &owner, dao_builder, &config);
        result.assert_ok();

        DaoSetup {
            b_mock,
            owner,
            summoner,
            applicant,
            second_applicant,
            delegate,
            processor,
            dao_wrapper,
        }
    }

    pub fn new_account(&mut self, deposit_tokens: u64) -> Address {
        let account = self.b_mock.create_user_account(&rust_biguint!(0));
        if deposit_tokens > 0 {
            self.b_mock
                .set_esdt_balance(&account, DEPOSIT_TOKEN, &rust_biguint!(deposit_tokens));
        }
        account
    }

    // ── Clock ──

    pub fn move_to_period(&mut self, period: u64) {
        self.b_mock.set_block_timestamp(period * PERIOD_DURATION);
    }

    /// First period in which the proposal at `proposal_index` can be processed.
    pub fn processing_period(&mut self, proposal_index: u64) -> u64 {
        let proposal_id = self.proposal_id_at(proposal_index);
        self.proposal(proposal_id).starting_period + VOTING_PERIOD_LENGTH + GRACE_PERIOD_LENGTH
    }

    // ── Endpoints ──

    pub fn submit_proposal(
        &mut self,
        proposer: &Address,
        applicant: &Address,
        request: &ProposalRequest,
    ) -> TxResult {
        let tx_fn = |sc: guild_dao::ContractObj<DebugApi>| {
            sc.submit_proposal(
                managed_address!(applicant),
                managed_biguint!(request.shares_requested),
                managed_biguint!(request.loot_requested),
                managed_biguint!(request.tribute_offered),
                managed_token_id!(request.tribute_token),
                managed_biguint!(request.payment_requested),
                managed_token_id!(request.payment_token),
                managed_buffer!(b"all hail moloch"),
            );
        };

        if request.tribute_paid > 0 {
            self.b_mock.execute_esdt_transfer(
                proposer,
                &self.dao_wrapper,
                request.tribute_token,
                0,
                &rust_biguint!(request.tribute_paid),
                tx_fn,
            )
        } else {
            self.b_mock
                .execute_tx(proposer, &self.dao_wrapper, &rust_biguint!(0), tx_fn)
        }
    }

    /// Submits and returns the new proposal id.
    pub fn submit_ok(&mut self, proposer: &Address, applicant: &Address, request: &ProposalRequest) -> u64 {
        self.submit_proposal(proposer, applicant, request).assert_ok();
        self.proposal_count()
    }

    pub fn submit_whitelist_proposal(&mut self, proposer: &Address, token: &[u8]) -> TxResult {
        self.b_mock
            .execute_tx(proposer, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.submit_whitelist_proposal(
                    managed_token_id!(token),
                    managed_buffer!(b"whitelist me"),
                );
            })
    }

    pub fn submit_guild_kick_proposal(&mut self, proposer: &Address, member: &Address) -> TxResult {
        self.b_mock
            .execute_tx(proposer, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.submit_guild_kick_proposal(
                    managed_address!(member),
                    managed_buffer!(b"kick me"),
                );
            })
    }

    pub fn sponsor_proposal(&mut self, sponsor: &Address, proposal_id: u64) -> TxResult {
        self.sponsor_proposal_paying(sponsor, proposal_id, PROPOSAL_DEPOSIT)
    }

    pub fn sponsor_proposal_paying(
        &mut self,
        sponsor: &Address,
        proposal_id: u64,
        deposit: u64,
    ) -> TxResult {
        self.b_mock.execute_esdt_transfer(
            sponsor,
            &self.dao_wrapper,
            DEPOSIT_TOKEN,
            0,
            &rust_biguint!(deposit),
            |sc| {
                sc.sponsor_proposal(proposal_id);
            },
        )
    }

    pub fn cancel_proposal(&mut self, caller: &Address, proposal_id: u64) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.cancel_proposal(proposal_id);
            })
    }

    pub fn submit_vote(&mut self, voter: &Address, proposal_index: u64, vote: u8) -> TxResult {
        self.b_mock
            .execute_tx(voter, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.submit_vote(proposal_index, vote);
            })
    }

    pub fn process_proposal(&mut self, caller: &Address, proposal_index: u64) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.process_proposal(proposal_index);
            })
    }

    pub fn process_whitelist_proposal(&mut self, caller: &Address, proposal_index: u64) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.process_whitelist_proposal(proposal_index);
            })
    }

    pub fn process_guild_kick_proposal(&mut self, caller: &Address, proposal_index: u64) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.process_guild_kick_proposal(proposal_index);
            })
    }

    pub fn ragequit(&mut self, member: &Address, shares: u64, loot: u64) -> TxResult {
        self.b_mock
            .execute_tx(member, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.ragequit(managed_biguint!(shares), managed_biguint!(loot));
            })
    }

    pub fn ragekick(&mut self, caller: &Address, member: &Address) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.ragekick(managed_address!(member));
            })
    }

    pub fn update_delegate_key(&mut self, member: &Address, new_delegate_key: &Address) -> TxResult {
        self.b_mock
            .execute_tx(member, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.update_delegate_key(managed_address!(new_delegate_key));
            })
    }

    pub fn withdraw_balance(&mut self, account: &Address, token: &[u8], amount: u64) -> TxResult {
        self.b_mock
            .execute_tx(account, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.withdraw_balance(managed_token_id!(token), managed_biguint!(amount));
            })
    }

    pub fn collect_tokens(&mut self, caller: &Address, token: &[u8]) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.collect_tokens(managed_token_id!(token));
            })
    }

    // ── Flows ──

    /// Sends one unit of each token straight to the contract and has the
    /// summoner collect it into GUILD.
    pub fn fill_guild_bank(&mut self, tokens: &[Vec<u8>]) {
        let summoner = self.summoner.clone();
        let dao_address = self.dao_wrapper.address_ref().clone();
        for token in tokens {
            self.b_mock
                .set_esdt_balance(&dao_address, token, &rust_biguint!(1));
            self.collect_tokens(&summoner, token).assert_ok();
        }
    }

    /// Sponsors with the summoner and returns the queue index.
    pub fn sponsor_ok(&mut self, proposal_id: u64) -> u64 {
        let summoner = self.summoner.clone();
        self.sponsor_proposal(&summoner, proposal_id).assert_ok();
        self.proposal_queue_length() - 1
    }

    /// Submit by the applicant, sponsor and vote by the summoner, then
    /// process once the grace period is over. Returns the queue index.
    pub fn run_standard_proposal(&mut self, applicant: &Address, request: &ProposalRequest, vote: u8) -> u64 {
        self.run_proposal(applicant, applicant, request, vote)
    }

    pub fn run_proposal(
        &mut self,
        proposer: &Address,
        applicant: &Address,
        request: &ProposalRequest,
        vote: u8,
    ) -> u64 {
        let proposal_id = self.submit_ok(proposer, applicant, request);
        let proposal_index = self.sponsor_and_vote(proposal_id, vote);

        let processing_period = self.processing_period(proposal_index);
        self.move_to_period(processing_period);
        let processor = self.processor.clone();
        self.process_proposal(&processor, proposal_index).assert_ok();

        proposal_index
    }

    /// Sponsors with the summoner, then votes with the summoner in the
    /// proposal's starting period. Returns the queue index.
    pub fn sponsor_and_vote(&mut self, proposal_id: u64, vote: u8) -> u64 {
        let proposal_index = self.sponsor_ok(proposal_id);

        let starting_period = self.proposal(proposal_id).starting_period;
        self.move_to_period(starting_period);
        let summoner = self.summoner.clone();
        self.submit_vote(&summoner, proposal_index, vote).assert_ok();

        proposal_index
    }

    /// Guild kick submitted, sponsored and voted Yes by the summoner, then
    /// processed. Returns the queue index.
    pub fn kick_member(&mut self, member: &Address) -> u64 {
        let summoner = self.summoner.clone();
        self.submit_guild_kick_proposal(&summoner, member).assert_ok();
        let proposal_id = self.proposal_count();
        let proposal_index = self.sponsor_and_vote(proposal_id, YES);

        let processing_period = self.processing_period(proposal_index);
        self.move_to_period(processing_period);
        let processor = self.processor.clone();
        self.process_guild_kick_proposal(&processor, proposal_index)
            .assert_ok();

        proposal_index
    }

    // ── Reads ──

    pub fn member(&mut self, address: &Address) -> MemberState {
        let mut state = None;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                let member = sc.members(&managed_address!(address)).get();
                state = Some(MemberState {
                    delegate_key: member.delegate_key.to_address(),
                    shares: member.shares.to_u64().unwrap(),
                    loot: member.loot.to_u64().unwrap(),
                    exists: member.exists,
                    highest_index_yes_vote: member.highest_index_yes_vote,
                    jailed: member.jailed,
                });
            })
            .assert_ok();
        state.unwrap()
    }

    pub fn is_member(&mut self, address: &Address) -> bool {
        let mut exists = false;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                exists = sc.member_exists(&managed_address!(address));
            })
            .assert_ok();
        exists
    }

    pub fn member_address_by_delegate_key(&mut self, delegate_key: &Address) -> Option<Address> {
        let mut member_address = None;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                let mapper = sc.member_address_by_delegate_key(&managed_address!(delegate_key));
                if !mapper.is_empty() {
                    member_address = Some(mapper.get().to_address());
                }
            })
            .assert_ok();
        member_address
    }

    pub fn proposal(&mut self, proposal_id: u64) -> ProposalState {
        let mut state = None;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                let proposal = sc.proposals(proposal_id).get();
                state = Some(ProposalState {
                    proposer: proposal.proposer.to_address(),
                    sponsor: proposal.sponsor.as_ref().map(|sponsor| sponsor.to_address()),
                    starting_period: proposal.starting_period,
                    yes_votes: proposal.yes_votes.to_u64().unwrap(),
                    no_votes: proposal.no_votes.to_u64().unwrap(),
                    max_total_shares_and_loot_at_yes_vote: proposal
                        .max_total_shares_and_loot_at_yes_vote
                        .to_u64()
                        .unwrap(),
                    flags: sc.get_proposal_flags(proposal_id),
                });
            })
            .assert_ok();
        state.unwrap()
    }

    pub fn proposal_id_at(&mut self, proposal_index: u64) -> u64 {
        let mut proposal_id = 0;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                proposal_id = sc.get_proposal_id_at_index(proposal_index);
            })
            .assert_ok();
        proposal_id
    }

    pub fn proposal_count(&mut self) -> u64 {
        let mut count = 0;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                count = sc.proposal_count().get();
            })
            .assert_ok();
        count
    }

    pub fn proposal_queue_length(&mut self) -> u64 {
        let mut length = 0;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                length = sc.get_proposal_queue_length();
            })
            .assert_ok();
        length
    }

    pub fn internal_balance(&mut self, account: &Address, token: &[u8]) -> u64 {
        let mut balance = 0;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                balance = sc
                    .get_user_token_balance(managed_address!(account), managed_token_id!(token))
                    .to_u64()
                    .unwrap();
            })
            .assert_ok();
        balance
    }

    pub fn total_shares(&mut self) -> u64 {
        let mut shares = 0;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                shares = sc.total_shares().get().to_u64().unwrap();
            })
            .assert_ok();
        shares
    }

    pub fn total_loot(&mut self) -> u64 {
        let mut loot = 0;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                loot = sc.total_loot().get().to_u64().unwrap();
            })
            .assert_ok();
        loot
    }

    pub fn total_guild_bank_tokens(&mut self) -> u32 {
        let mut count = 0;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                count = sc.total_guild_bank_tokens().get();
            })
            .assert_ok();
        count
    }

    pub fn is_whitelisted(&mut self, token: &[u8]) -> bool {
        let mut whitelisted = false;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                whitelisted = sc.is_token_whitelisted(managed_token_id!(token));
            })
            .assert_ok();
        whitelisted
    }

    pub fn is_proposed_to_whitelist(&mut self, token: &[u8]) -> bool {
        let mut proposed = false;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                proposed = sc.proposed_to_whitelist(&managed_token_id!(token)).get();
            })
            .assert_ok();
        proposed
    }

    pub fn is_proposed_to_kick(&mut self, member: &Address) -> bool {
        let mut proposed = false;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                proposed = sc.proposed_to_kick(&managed_address!(member)).get();
            })
            .assert_ok();
        proposed
    }

    pub fn member_vote(&mut self, member: &Address, proposal_index: u64) -> Vote {
        let mut vote = Vote::Null;
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                vote = sc.get_member_proposal_vote(managed_address!(member), proposal_index);
            })
            .assert_ok();
        vote
    }

    pub fn check_esdt_balance(&self, account: &Address, token: &[u8], expected: u64) {
        self.b_mock
            .check_esdt_balance(account, token, &rust_biguint!(expected));
    }
}
