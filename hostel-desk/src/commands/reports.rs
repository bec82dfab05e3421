//! Range summaries over the in-memory mirrors. Dates are `YYYY-MM-DD`
//! strings, so plain string comparison gives calendar order and ranges are
//! inclusive on both ends.

use crate::error::{Error, Result};
use crate::models::{SalesSummary, StaffCommissionSummary};
use crate::state::AppState;

pub fn sales_summary(state: &AppState, from_date: &str, to_date: &str) -> SalesSummary {
    let mut summary = SalesSummary {
        from_date: from_date.to_string(),
        to_date: to_date.to_string(),
        booking_count: 0,
        gross_revenue: 0.0,
        operating_cost: 0.0,
        employee_commission: 0.0,
        hostel_commission: 0.0,
    };

    for booking in &state.bookings {
        if !in_range(&booking.booking_date, from_date, to_date) {
            continue;
        }

        summary.booking_count += 1;
        // Revenue counts what the customer actually paid: base plus extras
        // minus discount.
        summary.gross_revenue += booking.customer_price + booking.extras_total.unwrap_or(0.0)
            - booking.discount.unwrap_or(0.0);
        summary.operating_cost += booking.item_cost.unwrap_or(0.0);
        summary.employee_commission += booking.employee_commission.unwrap_or(0.0);
        summary.hostel_commission += booking.hostel_commission.unwrap_or(0.0);
    }

    summary
}

pub fn staff_commission(
    state: &AppState,
    staff_id: &str,
    from_date: &str,
    to_date: &str,
) -> Result<StaffCommissionSummary> {
    let staff_name = state
        .staff
        .iter()
        .find(|member| member.id == staff_id)
        .map(|member| member.name.clone())
        .ok_or_else(|| Error::not_found("staff member", staff_id))?;

    let mut booking_count = 0;
    let mut commission_total = 0.0;

    for booking in &state.bookings {
        if booking.staff_id != staff_id || !in_range(&booking.booking_date, from_date, to_date) {
            continue;
        }

        booking_count += 1;
        commission_total += booking.employee_commission.unwrap_or(0.0);
    }

    Ok(StaffCommissionSummary {
        staff_id: staff_id.to_string(),
        staff_name,
        from_date: from_date.to_string(),
        to_date: to_date.to_string(),
        booking_count,
        commission_total,
    })
}

/// Total utility cost recorded in the range, across all categories.
pub fn utility_spend(state: &AppState, from_date: &str, to_date: &str) -> f64 {
    state
        .utility_records
        .iter()
        .filter(|record| in_range(&record.date, from_date, to_date))
        .map(|record| record.cost)
        .sum()
}

fn in_range(date: &str, from_date: &str, to_date: &str) -> bool {
    date >= from_date && date <= to_date
}
