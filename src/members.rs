multiversx_sc::imports!();

use crate::errors::*;
use crate::types::Member;

#[multiversx_sc::module]
pub trait MembersModule: crate::config::ConfigModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: updateDelegateKey
    // ========================================================

    #[endpoint(updateDelegateKey)]
    fn update_delegate_key(&self, new_delegate_key: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_shareholder(&caller);
        require!(!new_delegate_key.is_zero(), ERR_DELEGATE_KEY_ZERO);

        // skip checks if the member is setting the delegate key back to their member address
        if new_delegate_key != caller {
            require!(!self.member_exists(&new_delegate_key), ERR_OVERWRITE_MEMBER);
            let key_owner = self.member_address_by_delegate_key(&new_delegate_key);
            require!(
                key_owner.is_empty() || !self.member_exists(&key_owner.get()),
                ERR_OVERWRITE_DELEGATE
            );
        }

        let mut member = self.members(&caller).get();
        self.member_address_by_delegate_key(&member.delegate_key).clear();
        self.member_address_by_delegate_key(&new_delegate_key).set(&caller);
        member.delegate_key = new_delegate_key.clone();
        self.members(&caller).set(&member);

        self.update_delegate_key_event(&caller, &new_delegate_key);
    }

    // ========================================================
    // INTERNAL: role checks
    // ========================================================

    fn member_exists(&self, address: &ManagedAddress) -> bool {
        !self.members(address).is_empty()
    }

    fn try_get_member(&self, address: &ManagedAddress) -> Option<Member<Self::Api>> {
        let mapper = self.members(address);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    fn is_jailed(&self, address: &ManagedAddress) -> bool {
        self.try_get_member(address)
            .map(|member| member.is_jailed())
            .unwrap_or(false)
    }

    /// Holds shares or loot.
    fn require_member(&self, address: &ManagedAddress) -> Member<Self::Api> {
        match self.try_get_member(address) {
            Some(member) if member.has_stake() => member,
            _ => sc_panic!(ERR_NOT_A_MEMBER),
        }
    }

    fn require_shareholder(&self, address: &ManagedAddress) -> Member<Self::Api> {
        match self.try_get_member(address) {
            Some(member) if member.shares > 0u64 => member,
            _ => sc_panic!(ERR_NOT_A_SHAREHOLDER),
        }
    }

    /// Resolves the caller's delegate key to the member it acts for.
    /// The member must hold shares.
    fn require_delegate(&self, delegate_key: &ManagedAddress) -> ManagedAddress {
        let key_owner = self.member_address_by_delegate_key(delegate_key);
        require!(!key_owner.is_empty(), ERR_NOT_A_DELEGATE);
        let member_address = key_owner.get();
        match self.try_get_member(&member_address) {
            Some(member) if member.shares > 0u64 => member_address,
            _ => sc_panic!(ERR_NOT_A_DELEGATE),
        }
    }

    // ========================================================
    // INTERNAL: share ledger
    // ========================================================

    /// Credits shares and loot, creating the member on first grant.
    /// A new member whose address is in use as someone else's delegate key
    /// takes the key back; the previous holder reverts to their own address.
    fn grant_shares_and_loot(&self, address: &ManagedAddress, shares: &BigUint, loot: &BigUint) {
        match self.try_get_member(address) {
            Some(mut member) => {
                member.shares += shares;
                member.loot += loot;
                self.members(address).set(&member);
            },
            None => {
                let key_owner = self.member_address_by_delegate_key(address);
                if !key_owner.is_empty() {
                    let previous_holder = key_owner.get();
                    if let Some(mut overridden) = self.try_get_member(&previous_holder) {
                        overridden.delegate_key = previous_holder.clone();
                        self.members(&previous_holder).set(&overridden);
                        self.member_address_by_delegate_key(&previous_holder)
                            .set(&previous_holder);
                    }
                }

                let member = Member::new(address.clone(), shares.clone(), loot.clone());
                self.members(address).set(&member);
                self.member_address_by_delegate_key(address).set(address);
            },
        }

        self.total_shares().update(|total| *total += shares);
        self.total_loot().update(|total| *total += loot);
    }

    fn burn_shares_and_loot(&self, address: &ManagedAddress, shares: &BigUint, loot: &BigUint) {
        self.members(address).update(|member| {
            member.shares -= shares;
            member.loot -= loot;
        });
        self.total_shares().update(|total| *total -= shares);
        self.total_loot().update(|total| *total -= loot);
    }

    /// Moves every share of a kicked member into loot and jails them.
    fn jail_member(&self, address: &ManagedAddress, proposal_id: u64) {
        let mut member = self.members(address).get();
        let converted = member.shares.clone();
        member.jailed = proposal_id;
        member.loot += &converted;
        member.shares = BigUint::zero();
        self.members(address).set(&member);

        self.total_shares().update(|total| *total -= &converted);
        self.total_loot().update(|total| *total += &converted);
    }

    fn total_shares_and_loot(&self) -> BigUint {
        self.total_shares().get() + self.total_loot().get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMember)]
    fn get_member(&self, address: ManagedAddress) -> OptionalValue<Member<Self::Api>> {
        self.try_get_member(&address).into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("members")]
    fn members(&self, address: &ManagedAddress) -> SingleValueMapper<Member<Self::Api>>;

    #[view(getMemberAddressByDelegateKey)]
    #[storage_mapper("memberAddressByDelegateKey")]
    fn member_address_by_delegate_key(
        &self,
        delegate_key: &ManagedAddress,
    ) -> SingleValueMapper<ManagedAddress>;

    #[view(getTotalShares)]
    #[storage_mapper("totalShares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalLoot)]
    #[storage_mapper("totalLoot")]
    fn total_loot(&self) -> SingleValueMapper<BigUint>;
}
