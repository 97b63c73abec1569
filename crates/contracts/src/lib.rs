//! Wire types shared between the admin console frontend and the HTTP API.

pub mod domain;
