// src/lib.rs - Fixed-Supply Pausable Token for Arbitrum Stylus
// A burnable token with an immutable admin gating the pause switch

#![cfg_attr(all(not(feature = "export-abi"), not(test)), no_main)]
extern crate alloc;

use alloc::string::String;
use stylus_sdk::{
    alloy_primitives::{Address, U256, Uint},
    alloy_sol_types::sol,
    prelude::*,
};

/// Whole-token supply minted at initialization, scaled by `10^decimals`.
/// Supply only ever decreases afterwards (via `burn`).
const SUPPLY_TOKENS: u64 = 100_000_000;

// ============================================================================
// ERROR DEFINITIONS
// ============================================================================

sol! {
    #[derive(Debug)]
    error Unauthorized(address caller, address admin);
    #[derive(Debug)]
    error Forbidden();
    #[derive(Debug)]
    error InsufficientBalance(uint256 balance, uint256 required);
    #[derive(Debug)]
    error ZeroAddress();
    #[derive(Debug)]
    error AlreadyInitialized();
    #[derive(Debug)]
    error InvalidAmount();
}

#[derive(SolidityError, Debug)]
pub enum TokenError {
    Unauthorized(Unauthorized),
    Forbidden(Forbidden),
    InsufficientBalance(InsufficientBalance),
    ZeroAddress(ZeroAddress),
    AlreadyInitialized(AlreadyInitialized),
    InvalidAmount(InvalidAmount),
}

// ============================================================================
// EVENT DEFINITIONS (EVM Compatible)
// ============================================================================

sol! {
    event Transfer(address indexed from, address indexed to, uint256 amount);
    event Paused(address account);
    event Unpaused(address account);
}

// ============================================================================
// STORAGE LAYOUT
// ============================================================================

sol_storage! {
    #[entrypoint]
    pub struct PausableToken {
        // Ledger State
        uint256 total_supply;
        mapping(address => uint256) balances;

        // Token Metadata
        bool initialized;
        string name;
        string symbol;
        uint8 decimals;

        // Access Control
        address admin;

        // Pausable State
        bool paused;

        // Deployment choice: whether burning is rejected while paused
        bool pause_blocks_burn;
    }
}

// ============================================================================
// IMPLEMENTATION
// ============================================================================

#[public]
impl PausableToken {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the token with metadata, the admin account, and the burn
    /// policy. Mints the full fixed supply to the admin. Can only be called
    /// once; the admin cannot be changed afterwards.
    pub fn initialize(
        &mut self,
        token_name: String,
        token_symbol: String,
        token_decimals: u8,
        admin: Address,
        pause_blocks_burn: bool,
    ) -> Result<(), TokenError> {
        // Check if already initialized
        if self.initialized.get() {
            return Err(TokenError::AlreadyInitialized(AlreadyInitialized {}));
        }

        // Validate admin address
        if admin == Address::ZERO {
            return Err(TokenError::ZeroAddress(ZeroAddress {}));
        }

        // Compute the fixed supply with checked arithmetic
        let scale = U256::from(10u8)
            .checked_pow(U256::from(token_decimals))
            .ok_or(TokenError::InvalidAmount(InvalidAmount {}))?;
        let supply = U256::from(SUPPLY_TOKENS)
            .checked_mul(scale)
            .ok_or(TokenError::InvalidAmount(InvalidAmount {}))?;

        // Set metadata
        self.name.set_str(&token_name);
        self.symbol.set_str(&token_symbol);
        self.decimals.set(Uint::<8, 1>::from(token_decimals));

        // Set admin and burn policy
        self.admin.set(admin);
        self.pause_blocks_burn.set(pause_blocks_burn);

        // Mint the full supply to the admin
        self.balances.setter(admin).set(supply);
        self.total_supply.set(supply);

        // Mark as initialized
        self.initialized.set(true);

        // Emit Transfer event from zero address (mint)
        log(self.vm(), Transfer {
            from: Address::ZERO,
            to: admin,
            amount: supply,
        });

        Ok(())
    }

    // ========================================================================
    // METADATA METHODS
    // ========================================================================

    /// Returns the name of the token
    pub fn name(&self) -> Result<String, TokenError> {
        Ok(self.name.get_string())
    }

    /// Returns the symbol of the token
    pub fn symbol(&self) -> Result<String, TokenError> {
        Ok(self.symbol.get_string())
    }

    /// Returns the number of decimals the token uses
    pub fn decimals(&self) -> Result<u8, TokenError> {
        Ok(self.decimals.get().to_le_bytes::<1>()[0])
    }

    // ========================================================================
    // LEDGER READS
    // ========================================================================

    /// Returns the current total supply
    pub fn total_supply(&self) -> Result<U256, TokenError> {
        Ok(self.total_supply.get())
    }

    /// Returns the balance held by `account`, zero for unknown accounts
    pub fn balance_of(&self, account: Address) -> Result<U256, TokenError> {
        Ok(self.balances.get(account))
    }

    /// Returns the admin account set at initialization
    pub fn admin(&self) -> Result<Address, TokenError> {
        Ok(self.admin.get())
    }

    /// Returns true if the ledger is paused, false otherwise
    pub fn paused(&self) -> Result<bool, TokenError> {
        Ok(self.paused.get())
    }

    /// Returns whether burning is rejected while the ledger is paused
    pub fn pause_blocks_burn(&self) -> Result<bool, TokenError> {
        Ok(self.pause_blocks_burn.get())
    }

    // ========================================================================
    // BALANCE-MUTATING METHODS
    // ========================================================================

    /// Transfers `amount` tokens to address `to`
    /// Rejected while the ledger is paused
    /// Returns true on success, reverts on failure
    pub fn transfer(&mut self, to: Address, amount: U256) -> Result<bool, TokenError> {
        let from = self.vm().msg_sender();

        // Check if ledger is paused
        if self.paused.get() {
            return Err(TokenError::Forbidden(Forbidden {}));
        }

        // Validate recipient address
        if to == Address::ZERO {
            return Err(TokenError::ZeroAddress(ZeroAddress {}));
        }

        // Check sufficient balance
        let from_balance = self.balances.get(from);
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance(InsufficientBalance {
                balance: from_balance,
                required: amount,
            }));
        }

        // Self-transfers leave the ledger untouched
        if from != to {
            let new_from_balance = from_balance
                .checked_sub(amount)
                .ok_or(TokenError::InsufficientBalance(InsufficientBalance {
                    balance: from_balance,
                    required: amount,
                }))?;

            let to_balance = self.balances.get(to);
            let new_to_balance = to_balance
                .checked_add(amount)
                .ok_or(TokenError::InvalidAmount(InvalidAmount {}))?;

            self.balances.setter(from).set(new_from_balance);
            self.balances.setter(to).set(new_to_balance);
        }

        // Emit transfer event
        log(self.vm(), Transfer { from, to, amount });

        Ok(true)
    }

    /// Burns `amount` tokens from the caller's account, shrinking total supply
    /// Rejected while paused only when the deployment opted into that policy
    pub fn burn(&mut self, amount: U256) -> Result<bool, TokenError> {
        let from = self.vm().msg_sender();

        // Check burn policy against pause state
        if self.paused.get() && self.pause_blocks_burn.get() {
            return Err(TokenError::Forbidden(Forbidden {}));
        }

        // Check sufficient balance
        let current_balance = self.balances.get(from);
        if current_balance < amount {
            return Err(TokenError::InsufficientBalance(InsufficientBalance {
                balance: current_balance,
                required: amount,
            }));
        }

        // Update balance with underflow check
        let new_balance = current_balance
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance(InsufficientBalance {
                balance: current_balance,
                required: amount,
            }))?;

        // Update total supply
        let current_supply = self.total_supply.get();
        let new_supply = current_supply
            .checked_sub(amount)
            .ok_or(TokenError::InvalidAmount(InvalidAmount {}))?;

        self.balances.setter(from).set(new_balance);
        self.total_supply.set(new_supply);

        // Emit Transfer event to zero address (burn)
        log(self.vm(), Transfer {
            from,
            to: Address::ZERO,
            amount,
        });

        Ok(true)
    }

    // ========================================================================
    // PAUSABLE METHODS (Admin Only)
    // ========================================================================

    /// Pauses the ledger, blocking transfers
    /// Can only be called by the admin; pausing an already-paused ledger is a
    /// no-op and emits nothing
    pub fn pause(&mut self) -> Result<(), TokenError> {
        // Check admin role
        self.only_admin()?;

        // Already paused: nothing to do
        if self.paused.get() {
            return Ok(());
        }

        self.paused.set(true);

        // Emit Paused event
        log(self.vm(), Paused {
            account: self.vm().msg_sender(),
        });

        Ok(())
    }

    /// Unpauses the ledger, re-enabling transfers
    /// Can only be called by the admin; unpausing an already-unpaused ledger
    /// is a no-op and emits nothing
    pub fn unpause(&mut self) -> Result<(), TokenError> {
        // Check admin role
        self.only_admin()?;

        // Already unpaused: nothing to do
        if !self.paused.get() {
            return Ok(());
        }

        self.paused.set(false);

        // Emit Unpaused event
        log(self.vm(), Unpaused {
            account: self.vm().msg_sender(),
        });

        Ok(())
    }
}

impl PausableToken {
    /// Internal function to check if caller is the admin
    fn only_admin(&self) -> Result<(), TokenError> {
        let caller = self.vm().msg_sender();
        let admin = self.admin.get();

        if caller != admin {
            return Err(TokenError::Unauthorized(Unauthorized { caller, admin }));
        }

        Ok(())
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================
