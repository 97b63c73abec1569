use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Client record as stored by the API.
///
/// `id` is assigned by the server; a record that has not been persisted yet
/// carries an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl Client {
    /// True if any of the four contact fields contains `query_lower`.
    ///
    /// `query_lower` must already be lowercased; callers filter a whole list
    /// with one query, so the lowering happens once on their side.
    pub fn matches_search(&self, query_lower: &str) -> bool {
        self.first_name.to_lowercase().contains(query_lower)
            || self.last_name.to_lowercase().contains(query_lower)
            || self.email.to_lowercase().contains(query_lower)
            || self.phone_number.to_lowercase().contains(query_lower)
    }

    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

// ============================================================================
// Form DTO
// ============================================================================

/// Editable fields of the "new client" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

/// Field selector for [`ClientDto`], used by generic input handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
}

impl ClientField {
    pub fn label(&self) -> &'static str {
        match self {
            ClientField::FirstName => "First Name",
            ClientField::LastName => "Last Name",
            ClientField::Email => "Email",
            ClientField::PhoneNumber => "Phone Number",
        }
    }
}

impl ClientDto {
    pub fn get(&self, field: ClientField) -> &str {
        match field {
            ClientField::FirstName => &self.first_name,
            ClientField::LastName => &self.last_name,
            ClientField::Email => &self.email,
            ClientField::PhoneNumber => &self.phone_number,
        }
    }

    pub fn set(&mut self, field: ClientField, value: String) {
        match field {
            ClientField::FirstName => self.first_name = value,
            ClientField::LastName => self.last_name = value,
            ClientField::Email => self.email = value,
            ClientField::PhoneNumber => self.phone_number = value,
        }
    }

    /// Body for `POST /api/clients`: the form with an empty identifier.
    pub fn to_create_request(&self) -> Client {
        Client {
            id: String::new(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}
