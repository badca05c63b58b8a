//! Wire types shared by every webhook exchange of the Radar de Leads client.

pub mod auth;
pub mod logs;
