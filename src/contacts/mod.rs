use serde_json::Value;

use crate::core::net::{Body, Form};
use crate::core::{UpholdClient, UpholdError};

impl UpholdClient {
    /// List the current user's contacts (`GET /me/contacts`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn list_contacts(&mut self) -> Result<Value, UpholdError> {
        self.get("/me/contacts").await
    }

    /// Fetch a single contact (`GET /me/contacts/{id}`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_contact(&mut self, contact_id: &str) -> Result<Value, UpholdError> {
        self.get(&format!("/me/contacts/{contact_id}")).await
    }

    /// Create a contact (`POST /me/contacts`).
    ///
    /// Each email and each address is sent as its own `emails` / `addresses` form field.
    /// Pass empty slices when there are none.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn create_contact(
        &mut self,
        first_name: &str,
        last_name: &str,
        company: &str,
        emails: &[&str],
        addresses: &[&str],
    ) -> Result<Value, UpholdError> {
        let mut form: Form = vec![
            ("firstName", first_name.to_string()),
            ("lastName", last_name.to_string()),
            ("company", company.to_string()),
        ];
        form.extend(emails.iter().map(|e| ("emails", (*e).to_string())));
        form.extend(addresses.iter().map(|a| ("addresses", (*a).to_string())));

        self.post("/me/contacts", Body::Form(form)).await
    }
}
