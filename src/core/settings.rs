//! The four persisted loan inputs and their defaults.

use crate::core::store::SettingsStore;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt::Display;
use std::str::FromStr;
use tracing::{debug, warn};

pub const DEFAULT_VEHICLE_PRICE: u64 = 35_000;
pub const DEFAULT_DOWN_PAYMENT: u64 = 7_000;
pub const DEFAULT_INTEREST_RATE: f64 = 6.5;
pub const DEFAULT_LOAN_TERM: LoanTerm = LoanTerm::Sixty;

pub const MIN_INTEREST_RATE: f64 = 0.0;
pub const MAX_INTEREST_RATE: f64 = 20.0;
pub const INTEREST_RATE_STEP: f64 = 0.25;

/// Keys under which each setting is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    VehiclePrice,
    DownPayment,
    InterestRate,
    LoanTerm,
}

impl SettingKey {
    pub const ALL: [SettingKey; 4] = [
        SettingKey::VehiclePrice,
        SettingKey::DownPayment,
        SettingKey::InterestRate,
        SettingKey::LoanTerm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::VehiclePrice => "vehiclePrice",
            SettingKey::DownPayment => "downPayment",
            SettingKey::InterestRate => "interestRate",
            SettingKey::LoanTerm => "loanTerm",
        }
    }
}

impl Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LoanTerm {
    FortyEight,
    Sixty,
    SeventyTwo,
    EightyFour,
}

impl LoanTerm {
    pub const ALL: [LoanTerm; 4] = [
        LoanTerm::FortyEight,
        LoanTerm::Sixty,
        LoanTerm::SeventyTwo,
        LoanTerm::EightyFour,
    ];

    pub fn months(&self) -> u32 {
        match self {
            LoanTerm::FortyEight => 48,
            LoanTerm::Sixty => 60,
            LoanTerm::SeventyTwo => 72,
            LoanTerm::EightyFour => 84,
        }
    }

    pub fn years(&self) -> u32 {
        self.months() / 12
    }
}

impl Default for LoanTerm {
    fn default() -> Self {
        DEFAULT_LOAN_TERM
    }
}

impl TryFrom<u32> for LoanTerm {
    type Error = anyhow::Error;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        LoanTerm::ALL
            .into_iter()
            .find(|t| t.months() == months)
            .ok_or_else(|| anyhow!("Invalid loan term: {months} months (expected 48, 60, 72 or 84)"))
    }
}

impl From<LoanTerm> for u32 {
    fn from(term: LoanTerm) -> u32 {
        term.months()
    }
}

impl FromStr for LoanTerm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let months: u32 = s
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid loan term: {s}"))?;
        LoanTerm::try_from(months)
    }
}

impl Display for LoanTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.months())
    }
}

/// The committed calculator inputs, as persisted between sessions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub vehicle_price: u64,
    pub down_payment: u64,
    pub interest_rate: f64,
    pub loan_term: LoanTerm,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            vehicle_price: DEFAULT_VEHICLE_PRICE,
            down_payment: DEFAULT_DOWN_PAYMENT,
            interest_rate: DEFAULT_INTEREST_RATE,
            loan_term: DEFAULT_LOAN_TERM,
        }
    }
}

impl Settings {
    /// Reads every key from `store`, substituting the default for any key
    /// that is missing, unreadable or out of its domain.
    pub fn load_or_default(store: &dyn SettingsStore) -> Self {
        let defaults = Settings::default();
        let interest_rate = read_or(store, SettingKey::InterestRate, defaults.interest_rate);
        let settings = Settings {
            vehicle_price: read_or(store, SettingKey::VehiclePrice, defaults.vehicle_price),
            down_payment: read_or(store, SettingKey::DownPayment, defaults.down_payment),
            interest_rate: if (MIN_INTEREST_RATE..=MAX_INTEREST_RATE).contains(&interest_rate) {
                interest_rate
            } else {
                debug!(interest_rate, "Stored interest rate out of range, using default");
                defaults.interest_rate
            },
            loan_term: read_or(store, SettingKey::LoanTerm, defaults.loan_term),
        };
        debug!(?settings, "Loaded settings");
        settings
    }

    /// Writes a single setting. Failures are logged and swallowed.
    pub fn save_key(&self, store: &dyn SettingsStore, key: SettingKey) {
        let encoded = match key {
            SettingKey::VehiclePrice => serde_json::to_vec(&self.vehicle_price),
            SettingKey::DownPayment => serde_json::to_vec(&self.down_payment),
            SettingKey::InterestRate => serde_json::to_vec(&self.interest_rate),
            SettingKey::LoanTerm => serde_json::to_vec(&self.loan_term),
        };
        let res = encoded
            .map_err(anyhow::Error::from)
            .and_then(|bytes| store.put(key.as_str(), &bytes));
        match res {
            Ok(()) => debug!(%key, "Saved setting"),
            Err(e) => warn!(%key, error = %e, "Failed to save setting"),
        }
    }

    pub fn save(&self, store: &dyn SettingsStore) {
        for key in SettingKey::ALL {
            self.save_key(store, key);
        }
    }
}

fn read_or<T: DeserializeOwned>(store: &dyn SettingsStore, key: SettingKey, default: T) -> T {
    let res: Result<Option<T>> = store.get(key.as_str()).and_then(|bytes| {
        bytes
            .map(|b| serde_json::from_slice(&b).map_err(anyhow::Error::from))
            .transpose()
    });
    match res {
        Ok(Some(value)) => value,
        Ok(None) => {
            debug!(%key, "Setting not found, using default");
            default
        }
        Err(e) => {
            debug!(%key, error = %e, "Failed to read setting, using default");
            default
        }
    }
}
