multiversx_sc::imports!();

use crate::config::MAX_TOKEN_GUILDBANK_COUNT;
use crate::errors::*;

/// Internal custody ledger. Every whitelisted token held by the contract is
/// attributed to a member, to GUILD or to ESCROW; TOTAL mirrors the sum.
#[multiversx_sc::module]
pub trait GuildBankModule:
    crate::config::ConfigModule + crate::members::MembersModule + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: withdrawBalance / withdrawBalances
    // ========================================================

    #[endpoint(withdrawBalance)]
    fn withdraw_balance(&self, token: TokenIdentifier, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        if amount > 0u64 {
            self.withdraw_to(&caller, &token, &amount);
        }
    }

    /// With `max` set, the whole balance of each listed token is withdrawn
    /// and the amounts are ignored.
    #[endpoint(withdrawBalances)]
    fn withdraw_balances(
        &self,
        max: bool,
        withdrawals: MultiValueEncoded<MultiValue2<TokenIdentifier, BigUint>>,
    ) {
        let caller = self.blockchain().get_caller();
        for withdrawal in withdrawals {
            let (token, requested) = withdrawal.into_tuple();
            let amount = if max {
                self.user_token_balance(&caller, &token).get()
            } else {
                requested
            };
            if amount > 0u64 {
                self.withdraw_to(&caller, &token, &amount);
            }
        }
    }

    // ========================================================
    // ENDPOINT: collectTokens
    // Credits GUILD with tokens that reached the contract
    // outside of the ledger.
    // ========================================================

    #[endpoint(collectTokens)]
    fn collect_tokens(&self, token: TokenIdentifier) {
        let caller = self.blockchain().get_caller();
        self.require_delegate(&caller);

        let held = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token.clone()), 0);
        let accounted = self.user_token_balance(&self.total_address(), &token).get();
        require!(held > accounted, ERR_NO_TOKENS_TO_COLLECT);
        let amount_to_collect = held - accounted;

        require!(
            self.approved_tokens().contains(&token),
            ERR_COLLECT_NOT_WHITELISTED
        );

        let guild = self.guild_address();
        let guild_holds_token = self.user_token_balance(&guild, &token).get() > 0u64;
        require!(
            guild_holds_token || self.total_guild_bank_tokens().get() < MAX_TOKEN_GUILDBANK_COUNT,
            ERR_COLLECT_GUILD_BANK_FULL
        );
        if !guild_holds_token {
            self.total_guild_bank_tokens().update(|count| *count += 1);
        }

        self.add_to_balance(&guild, &token, &amount_to_collect);
        self.tokens_collected_event(&token, &amount_to_collect);
    }

    // ========================================================
    // INTERNAL: intake
    // ========================================================

    /// Validates the ESDT payment attached to the call against what the
    /// caller declared. Nothing is credited here. EGLD is never accepted.
    fn require_payment(&self, token: &TokenIdentifier, amount: &BigUint, error: &'static [u8]) {
        require!(
            self.call_value().egld_value().clone_value() == 0u64,
            ERR_UNEXPECTED_PAYMENT
        );

        let payments = self.call_value().all_esdt_transfers();
        if *amount == 0u64 {
            require!(payments.is_empty(), ERR_UNEXPECTED_PAYMENT);
            return;
        }

        require!(payments.len() == 1, error);
        let payment = payments.get(0);
        require!(
            &payment.token_identifier == token && payment.token_nonce == 0,
            error
        );
        require!(&payment.amount == amount, error);
    }

    /// A proposal paying tribute in a token GUILD does not hold yet would add
    /// a new guild-bank token.
    fn guild_bank_has_room_for(&self, token: &TokenIdentifier, tribute: &BigUint) -> bool {
        *tribute == 0u64
            || self.user_token_balance(&self.guild_address(), token).get() > 0u64
            || self.total_guild_bank_tokens().get() < MAX_TOKEN_GUILDBANK_COUNT
    }

    // ========================================================
    // INTERNAL: ledger moves
    // ========================================================

    fn add_to_balance(&self, account: &ManagedAddress, token: &TokenIdentifier, amount: &BigUint) {
        self.user_token_balance(account, token)
            .update(|balance| *balance += amount);
        self.user_token_balance(&self.total_address(), token)
            .update(|balance| *balance += amount);
    }

    fn subtract_from_balance(
        &self,
        account: &ManagedAddress,
        token: &TokenIdentifier,
        amount: &BigUint,
    ) {
        let balance = self.user_token_balance(account, token).get();
        require!(balance >= *amount, ERR_INSUFFICIENT_BALANCE);
        self.user_token_balance(account, token).set(balance - amount);
        self.user_token_balance(&self.total_address(), token)
            .update(|total| *total -= amount);
    }

    fn internal_transfer(
        &self,
        from: &ManagedAddress,
        to: &ManagedAddress,
        token: &TokenIdentifier,
        amount: &BigUint,
    ) {
        if *amount == 0u64 {
            return;
        }
        self.subtract_from_balance(from, token, amount);
        self.add_to_balance(to, token, amount);
    }

    /// Debits the ledger first, then sends the tokens.
    fn withdraw_to(&self, account: &ManagedAddress, token: &TokenIdentifier, amount: &BigUint) {
        self.subtract_from_balance(account, token, amount);

        self.send().direct_esdt(account, token, 0, amount);
        self.withdraw_event(account, token, amount);
    }

    /// `balance * shares / total_shares`, zero for an empty balance.
    fn fair_share(&self, balance: &BigUint, shares: &BigUint, total_shares: &BigUint) -> BigUint {
        require!(*total_shares > 0u64, ERR_INSUFFICIENT_SHARES);
        if *balance == 0u64 {
            return BigUint::zero();
        }
        balance * shares / total_shares
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getUserTokenBalance)]
    fn get_user_token_balance(&self, user: ManagedAddress, token: TokenIdentifier) -> BigUint {
        self.user_token_balance(&user, &token).get()
    }

    #[view(getTokenCount)]
    fn get_token_count(&self) -> usize {
        self.approved_tokens().len()
    }

    #[view(isTokenWhitelisted)]
    fn is_token_whitelisted(&self, token: TokenIdentifier) -> bool {
        self.approved_tokens().contains(&token)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getApprovedTokens)]
    #[storage_mapper("approvedTokens")]
    fn approved_tokens(&self) -> UnorderedSetMapper<TokenIdentifier>;

    #[storage_mapper("userTokenBalance")]
    fn user_token_balance(
        &self,
        user: &ManagedAddress,
        token: &TokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    /// Number of tokens with a non-zero GUILD balance.
    #[view(getTotalGuildBankTokens)]
    #[storage_mapper("totalGuildBankTokens")]
    fn total_guild_bank_tokens(&self) -> SingleValueMapper<u32>;
}
