//! The interactive calculator state: committed settings, staged field text
//! and the store they are written through to.

use crate::core::estimate::{self, Estimate};
use crate::core::input::{self, CurrencyField};
use crate::core::settings::{LoanTerm, SettingKey, Settings};
use crate::core::store::SettingsStore;
use tracing::{debug, info};

pub struct Calculator<'a> {
    settings: Settings,
    vehicle_price_field: CurrencyField,
    down_payment_field: CurrencyField,
    store: &'a dyn SettingsStore,
}

impl<'a> Calculator<'a> {
    /// Loads the last committed settings from `store`, falling back to
    /// defaults for anything missing.
    pub fn load(store: &'a dyn SettingsStore) -> Self {
        let settings = Settings::load_or_default(store);
        Self {
            vehicle_price_field: CurrencyField::new(settings.vehicle_price),
            down_payment_field: CurrencyField::new(settings.down_payment),
            settings,
            store,
        }
    }

    pub fn get_settings(&self) -> Settings {
        self.settings
    }

    pub fn vehicle_price_text(&self) -> &str {
        self.vehicle_price_field.text()
    }

    pub fn down_payment_text(&self) -> &str {
        self.down_payment_field.text()
    }

    pub fn set_vehicle_price(&mut self, raw: &str) -> Estimate {
        let value = self.vehicle_price_field.input(raw);
        self.vehicle_price_field.commit(value);
        self.settings.vehicle_price = value;
        debug!(raw, value, "Vehicle price committed");
        self.persist(SettingKey::VehiclePrice)
    }

    pub fn set_down_payment(&mut self, raw: &str) -> Estimate {
        let parsed = self.down_payment_field.input(raw);
        let value = input::clamp_down_payment(parsed, self.settings.vehicle_price);
        self.down_payment_field.commit(value);
        self.settings.down_payment = value;
        debug!(raw, value, "Down payment committed");
        self.persist(SettingKey::DownPayment)
    }

    pub fn set_interest_rate(&mut self, value: f64) -> Estimate {
        self.settings.interest_rate = input::normalize_interest_rate(value);
        debug!(value, rate = self.settings.interest_rate, "Interest rate committed");
        self.persist(SettingKey::InterestRate)
    }

    pub fn set_loan_term(&mut self, term: LoanTerm) -> Estimate {
        self.settings.loan_term = term;
        debug!(%term, "Loan term committed");
        self.persist(SettingKey::LoanTerm)
    }

    pub fn blur_vehicle_price(&mut self) {
        self.vehicle_price_field.blur();
    }

    pub fn blur_down_payment(&mut self) {
        self.down_payment_field.blur();
    }

    /// Restores every setting to its default and persists the result.
    pub fn reset(&mut self) -> Estimate {
        if let Err(e) = self.store.clear() {
            debug!(error = %e, "Failed to clear settings store");
        }
        self.settings = Settings::default();
        self.vehicle_price_field = CurrencyField::new(self.settings.vehicle_price);
        self.down_payment_field = CurrencyField::new(self.settings.down_payment);
        self.settings.save(self.store);
        info!("Settings reset to defaults");
        self.estimate()
    }

    pub fn estimate(&self) -> Estimate {
        estimate::compute_derived(&self.settings)
    }

    fn persist(&self, key: SettingKey) -> Estimate {
        self.settings.save_key(self.store, key);
        self.estimate()
    }
}
