use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::net::Form;

pub(crate) struct Quote<'a> {
    pub(crate) destination: &'a str,
    pub(crate) amount: Decimal,
    pub(crate) currency: &'a str,
}

impl Quote<'_> {
    pub(crate) fn into_form(self) -> Form {
        vec![
            ("denomination[currency]", self.currency.to_string()),
            ("denomination[amount]", self.amount.to_string()),
            ("destination", self.destination.to_string()),
        ]
    }
}

pub(crate) struct Commit<'a> {
    pub(crate) message: Option<&'a str>,
    pub(crate) signature: Option<&'a str>,
}

impl Commit<'_> {
    pub(crate) fn into_form(self) -> Form {
        let mut form = Form::new();
        if let Some(message) = self.message.filter(|m| !m.is_empty()) {
            form.push(("message", message.to_string()));
        }
        if let Some(sig) = self.signature {
            form.push(("sig", sig.to_string()));
        }
        form
    }
}

#[derive(Deserialize)]
pub(crate) struct Prepared {
    pub(crate) id: Option<String>,
}
