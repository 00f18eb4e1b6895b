//! Application client entity

use super::types::{Field, Record};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A registered application client as returned by the client-listing API
///
/// Deserializes from upstream rows; rendering goes through [`Record`] only.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Client {
    /// Last modification time
    pub date_updated: Option<DateTime<Utc>>,
    /// Presence state reported by the client
    pub presence_status: String,
    /// Display name
    pub nickname: String,
    /// Client credential
    pub client_password: String,
    /// Resource URI of the client
    pub uri: String,
    /// Current session identifier
    pub session_id: String,
    /// Owning account SID
    pub account_sid: String,
    /// Owning application SID
    pub application_sid: String,
    /// Client SID
    #[serde(rename = "Sid")]
    pub client_sid: String,
    /// Creation time
    pub date_created: Option<DateTime<Utc>>,
    /// API version the client was created with
    pub api_version: String,
    /// Last known remote address
    pub remote_ip: String,
}

impl Client {
    /// Create a client with the given SID
    pub fn new(client_sid: impl Into<String>) -> Self {
        Self {
            client_sid: client_sid.into(),
            ..Default::default()
        }
    }

    /// Set the nickname
    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Set the owning account and application
    #[must_use]
    pub fn with_owner(
        mut self,
        account_sid: impl Into<String>,
        application_sid: impl Into<String>,
    ) -> Self {
        self.account_sid = account_sid.into();
        self.application_sid = application_sid.into();
        self
    }

    /// Set the creation timestamp
    #[must_use]
    pub fn with_date_created(mut self, date_created: DateTime<Utc>) -> Self {
        self.date_created = Some(date_created);
        self
    }
}

impl Record for Client {
    const ELEMENT: &'static str = "Client";
    const COLLECTION: &'static str = "Clients";

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("DateUpdated", self.date_updated),
            Field::new("PresenceStatus", self.presence_status.as_str()),
            Field::new("Nickname", self.nickname.as_str()),
            Field::new("ClientPassword", self.client_password.as_str()),
            Field::new("Uri", self.uri.as_str()),
            Field::new("SessionId", self.session_id.as_str()),
            Field::new("AccountSid", self.account_sid.as_str()),
            Field::new("ApplicationSid", self.application_sid.as_str()),
            Field::new("Sid", self.client_sid.as_str()),
            Field::new("DateCreated", self.date_created),
            Field::new("ApiVersion", self.api_version.as_str()),
            Field::new("RemoteIp", self.remote_ip.as_str()),
        ]
    }
}
