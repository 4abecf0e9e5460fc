use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw webhook body. Both fields are required but untyped until validated.
#[derive(Deserialize, Debug)]
pub struct PaymentPayload {
    pub amount: Value,
    pub message: Value,
}

/// A validated payment notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub amount: Decimal,
    pub label: String,
}

#[derive(Serialize, Debug)]
pub struct PaymentResponse {
    pub ok: bool,
    pub label: String,
    pub new_total: f64,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub total: f64,
}
