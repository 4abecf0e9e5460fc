use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State as AxumState,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use tracing::{error, info, warn};

use crate::{
    error::AppError,
    models::PaymentResponse,
    state::State,
    utils::{authorize, get_payment_from_body, rank, to_display},
};

pub async fn payment_handler(
    AxumState(state): AxumState<Arc<State>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    authorize(state.config.webhook_secret.as_deref(), &headers).inspect_err(|_| {
        warn!("Rejected payment with missing or bad token");
    })?;

    let payment = get_payment_from_body(&body).inspect_err(|e| {
        warn!("Rejected payment: {e}");
    })?;

    let new_total = state
        .ledger
        .increment(&payment.label, payment.amount)
        .inspect_err(|e| {
            error!("Payment of {} not applied: {e}", payment.amount);
        })?;
    info!("Payment of {} for {}, total {new_total}", payment.amount, payment.label);

    Ok((
        StatusCode::OK,
        Json(PaymentResponse {
            ok: true,
            label: payment.label,
            new_total: to_display(new_total),
        }),
    ))
}

pub async fn leaderboard_handler(AxumState(state): AxumState<Arc<State>>) -> impl IntoResponse {
    (StatusCode::OK, Json(rank(state.ledger.snapshot())))
}
