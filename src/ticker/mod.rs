use serde_json::Value;

use crate::core::{UpholdClient, UpholdError};

impl UpholdClient {
    /// Fetch current market rates.
    ///
    /// With an empty `pair_or_currency` all rates are returned (`GET /ticker`); otherwise
    /// only those for that currency or pair (`GET /ticker/{symbol}`, e.g. `BTC` or
    /// `BTCUSD`). Rates exclude the platform's exchange commission.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_ticker(&mut self, pair_or_currency: &str) -> Result<Value, UpholdError> {
        if pair_or_currency.is_empty() {
            self.get("/ticker").await
        } else {
            self.get(&format!("/ticker/{pair_or_currency}")).await
        }
    }
}
