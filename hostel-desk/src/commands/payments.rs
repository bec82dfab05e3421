//! Payment types and the money flows recorded outside activity bookings:
//! external sales and platform payouts.

use crate::commands::log_db_failure;
use crate::error::Result;
use crate::models::{
    CreateExternalSale, CreatePlatformPayment, ExternalSale, PaymentType, PlatformPayment,
};
use crate::state::AppState;

pub fn add_payment_type(state: &mut AppState, name: &str) -> Result<PaymentType> {
    let created = log_db_failure("add payment type", state.db.insert_payment_type(name))?;
    state.payment_types.push(created.clone());
    Ok(created)
}

pub fn update_payment_type(state: &mut AppState, payment_type: PaymentType) -> Result<PaymentType> {
    let updated = log_db_failure(
        "update payment type",
        state.db.update_payment_type(&payment_type),
    )?;

    if let Some(slot) = state.payment_types.iter_mut().find(|p| p.id == updated.id) {
        *slot = updated.clone();
    }

    Ok(updated)
}

pub fn delete_payment_type(state: &mut AppState, id: &str) -> Result<()> {
    log_db_failure("delete payment type", state.db.delete_payment_type(id))?;
    state.payment_types.retain(|p| p.id != id);
    Ok(())
}

pub fn add_external_sale(state: &mut AppState, sale: CreateExternalSale) -> Result<ExternalSale> {
    let created = log_db_failure("record external sale", state.db.insert_external_sale(sale))?;
    state.external_sales.push(created.clone());
    Ok(created)
}

pub fn update_external_sale(state: &mut AppState, sale: ExternalSale) -> Result<ExternalSale> {
    let updated = log_db_failure(
        "update external sale",
        state.db.update_external_sale(&sale),
    )?;

    if let Some(slot) = state.external_sales.iter_mut().find(|s| s.id == updated.id) {
        *slot = updated.clone();
    }

    Ok(updated)
}

pub fn delete_external_sale(state: &mut AppState, id: &str) -> Result<()> {
    log_db_failure("delete external sale", state.db.delete_external_sale(id))?;
    state.external_sales.retain(|s| s.id != id);
    Ok(())
}

pub fn add_platform_payment(
    state: &mut AppState,
    payment: CreatePlatformPayment,
) -> Result<PlatformPayment> {
    let created = log_db_failure(
        "record platform payment",
        state.db.insert_platform_payment(payment),
    )?;
    state.platform_payments.push(created.clone());
    Ok(created)
}

pub fn update_platform_payment(
    state: &mut AppState,
    payment: PlatformPayment,
) -> Result<PlatformPayment> {
    let updated = log_db_failure(
        "update platform payment",
        state.db.update_platform_payment(&payment),
    )?;

    if let Some(slot) = state.platform_payments.iter_mut().find(|p| p.id == updated.id) {
        *slot = updated.clone();
    }

    Ok(updated)
}

pub fn delete_platform_payment(state: &mut AppState, id: &str) -> Result<()> {
    log_db_failure(
        "delete platform payment",
        state.db.delete_platform_payment(id),
    )?;
    state.platform_payments.retain(|p| p.id != id);
    Ok(())
}
