use crate::{Universe, BASE, MAX, MIN};

/// The number every SteamID format is derived from.
///
/// In `STEAM_X:Y:Z` terms this is `Z * 2 + Y`, in `[U:1:N]` terms it is `N`, and a SteamID64 is
/// `BASE + account_number`.
#[repr(transparent)]
#[derive(Clone, Copy, Deref, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Debug, Display)]
pub struct AccountNumber(u64);

impl AccountNumber {
    /// The smallest account number that converts successfully.
    pub const MIN: Self = Self(MIN - BASE);

    /// The largest account number that converts successfully.
    pub const MAX: Self = Self(MAX - BASE);

    /// Wraps a raw account number. No range check is done.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw account number.
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns the `Y` segment in `STEAM_X:Y:Z`.
    pub const fn y(&self) -> u64 {
        self.0 % 2
    }

    /// Returns the `Z` segment in `STEAM_X:Y:Z`.
    pub const fn z(&self) -> u64 {
        (self.0 - self.y()) / 2
    }

    /// Builds an account number from the `Y` and `Z` segments of `STEAM_X:Y:Z`.
    ///
    /// `y` must be `0` or `1`. Returns [`None`] if `z * 2` overflows.
    pub const fn from_y_z(y: u64, z: u64) -> Option<Self> {
        debug_assert!(y <= 1, "`Y` is a single bit");

        match z.checked_mul(2) {
            // `doubled` is even, so adding a single bit cannot overflow
            Some(doubled) => Some(Self(doubled + y)),
            None => None,
        }
    }

    /// Extracts the account number from a SteamID64.
    ///
    /// Returns [`None`] if `steam_id64` is smaller than [`BASE`].
    pub const fn from_steam_id64(steam_id64: u64) -> Option<Self> {
        match steam_id64.checked_sub(BASE) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the SteamID64 for this account number.
    ///
    /// Returns [`None`] if the result doesn't fit into a `u64`.
    pub const fn to_steam_id64(&self) -> Option<u64> {
        BASE.checked_add(self.0)
    }

    /// Whether the corresponding SteamID64 lies within [`MIN`]`..=`[`MAX`].
    pub const fn is_in_range(&self) -> bool {
        self.0 >= Self::MIN.0 && self.0 <= Self::MAX.0
    }

    /// Renders `STEAM_X:Y:Z`, using `universe` for `X`.
    pub fn to_steam_id(&self, universe: Universe) -> String {
        format!("STEAM_{}:{}:{}", universe.as_digit(), self.y(), self.z())
    }

    /// Renders `[U:1:N]`.
    pub fn to_steam_id3(&self) -> String {
        format!("[U:1:{}]", self.0)
    }
}

impl From<AccountNumber> for u64 {
    fn from(account_number: AccountNumber) -> Self {
        account_number.0
    }
}
