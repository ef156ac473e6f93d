//! FX (Foreign Exchange) module - domain models, services, and traits.

pub mod currency;
mod fx_model;
mod fx_service;
mod fx_traits;


pub use currency::{currency_pair_key, normalize_currency_code, validate_currency_code};
pub use fx_model::{Conversion, ForexRate, NewForexRate};
pub use fx_service::FxService;
pub use fx_traits::{FxRepositoryTrait, FxServiceTrait};
