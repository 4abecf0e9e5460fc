use std::str::FromStr;

use axum::{body::Bytes, http::HeaderMap};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde_json::Value;
use subtle::ConstantTimeEq;

use crate::{
    config::TOKEN_HEADER,
    error::AppError::{self, EmptyMessage, InvalidAmount, InvalidJson, MissingFields, Unauthorized},
    models::{LeaderboardEntry, Payment, PaymentPayload},
};

/// Maps a payment note to its leaderboard label.
pub fn normalize_label(note: &str) -> String {
    note.trim().to_string()
}

pub fn authorize(secret: Option<&str>, headers: &HeaderMap) -> Result<(), AppError> {
    let Some(secret) = secret else {
        return Ok(());
    };

    let token = headers.get(TOKEN_HEADER).ok_or(Unauthorized)?;

    if bool::from(token.as_bytes().ct_eq(secret.as_bytes())) {
        Ok(())
    } else {
        Err(Unauthorized)
    }
}

pub fn parse_amount(amount: &Value) -> Result<Decimal, AppError> {
    let text = match amount {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return Err(InvalidAmount),
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| InvalidAmount)
}

/// Booleans and null render as `True`, `False` and `None`, anything else as its JSON text.
pub fn coerce_message(message: &Value) -> String {
    match message {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

pub fn get_payment_from_body(body: &Bytes) -> Result<Payment, AppError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| InvalidJson)?;

    if !value.is_object() {
        return Err(InvalidJson);
    }

    let payload: PaymentPayload = serde_json::from_value(value).map_err(|_| MissingFields)?;

    let amount = parse_amount(&payload.amount)?;

    let label = normalize_label(&coerce_message(&payload.message));
    if label.is_empty() {
        return Err(EmptyMessage);
    }

    Ok(Payment { amount, label })
}

pub fn to_display(total: Decimal) -> f64 {
    // Decimal always fits in an f64, only precision is lost
    total.to_f64().unwrap_or_default()
}

/// Sorts by exact total descending, ties by label ascending.
pub fn rank(mut snapshot: Vec<(String, Decimal)>) -> Vec<LeaderboardEntry> {
    snapshot.sort_by(|(a_label, a_total), (b_label, b_total)| {
        b_total.cmp(a_total).then_with(|| a_label.cmp(b_label))
    });

    snapshot
        .into_iter()
        .map(|(name, total)| LeaderboardEntry {
            name,
            total: to_display(total),
        })
        .collect()
}
