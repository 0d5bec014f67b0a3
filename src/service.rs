//! Conversion service: normalises currency codes, delegates to the rate
//! provider and attaches display names to the result.

use std::collections::HashMap;
use tracing::debug;

use crate::core::currency::{ConversionError, ExchangeRateProvider};

/// Static ISO code to display name mapping. Unknown codes display as themselves.
#[derive(Debug, Clone)]
pub struct CurrencyNames {
    names: HashMap<&'static str, &'static str>,
}

impl Default for CurrencyNames {
    fn default() -> Self {
        let names = HashMap::from([
            ("USD", "dólares estadounidenses"),
            ("ARS", "pesos argentinos"),
            ("BRL", "reales brasileños"),
            ("COP", "pesos colombianos"),
            ("EUR", "euros"),
            ("GBP", "libras esterlinas"),
            ("MXN", "pesos mexicanos"),
            ("CLP", "pesos chilenos"),
            ("BOB", "bolivianos"),
        ]);
        Self { names }
    }
}

impl CurrencyNames {
    pub fn display_name<'a>(&self, code: &'a str) -> &'a str {
        self.names.get(code).copied().unwrap_or(code)
    }
}

/// A conversion ready to be shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayResult {
    pub base_code: String,
    pub target_code: String,
    pub base_name: String,
    pub target_name: String,
    pub original_amount: f64,
    pub conversion_rate: f64,
    pub converted_amount: f64,
}

pub struct ConversionService<P> {
    provider: P,
    names: CurrencyNames,
}

impl<P: ExchangeRateProvider> ConversionService<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            names: CurrencyNames::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn provider(&self) -> &P {
        &self.provider
    }

    pub fn names(&self) -> &CurrencyNames {
        &self.names
    }

    pub async fn convertir(
        &self,
        origin_code: &str,
        target_code: &str,
        amount: f64,
    ) -> Result<DisplayResult, ConversionError> {
        let origin = origin_code.to_ascii_uppercase();
        let target = target_code.to_ascii_uppercase();

        let result = self.provider.convert(&origin, &target, amount).await?;
        debug!(?result, "Received conversion");

        Ok(DisplayResult {
            base_name: self.names.display_name(&result.base_code).to_string(),
            target_name: self.names.display_name(&result.target_code).to_string(),
            base_code: result.base_code,
            target_code: result.target_code,
            original_amount: amount,
            conversion_rate: result.conversion_rate,
            converted_amount: result.conversion_result,
        })
    }
}
