//! The five sale operations. Each one looks up its catalog entry and the
//! seller from the mirrors, prices the sale, persists the booking, and
//! returns the stored record together with the confirmation text shown to
//! the operator. Nothing is written when a lookup or validation fails.

use crate::commands::log_db_failure;
use crate::error::{Error, Result};
use crate::models::{
    Activity, ActivityKind, Booking, BookingConfirmation, CreateBooking, SpeedBoatTrip,
    TaxiBoatOption,
};
use crate::pricing::{
    self, ActivitySale, ExtraSale, PrivateTourSale, SpeedBoatSale, TaxiBoatSale,
};
use crate::state::AppState;

pub fn book_activity(state: &mut AppState, sale: ActivitySale) -> Result<BookingConfirmation> {
    let activity = state
        .activities
        .iter()
        .find(|a| a.id == sale.activity_id)
        .cloned()
        .ok_or_else(|| Error::not_found("activity", &sale.activity_id))?;
    let staff_name = seller_name(state, &sale.staff_id)?;

    let record = pricing::price_activity(&activity, &sale)?;
    let summary = activity_summary(&activity, &record, &staff_name);

    let booking = log_db_failure("confirm booking", state.db.insert_booking(record))?;
    state.bookings.push(booking.clone());

    Ok(BookingConfirmation { booking, summary })
}

pub fn book_speed_boat_trip(
    state: &mut AppState,
    sale: SpeedBoatSale,
) -> Result<BookingConfirmation> {
    let trip = state
        .speed_boat_trips
        .iter()
        .find(|t| t.id == sale.trip_id)
        .cloned()
        .ok_or_else(|| Error::not_found("speed boat trip", &sale.trip_id))?;
    let staff_name = seller_name(state, &sale.staff_id)?;

    let record = pricing::price_speed_boat(&trip, &sale)?;
    let summary = speed_boat_summary(&trip, &record, &staff_name);

    let booking = log_db_failure("confirm booking", state.db.insert_booking(record))?;
    state.bookings.push(booking.clone());

    Ok(BookingConfirmation { booking, summary })
}

pub fn book_private_tour(
    state: &mut AppState,
    sale: PrivateTourSale,
) -> Result<BookingConfirmation> {
    let staff_name = seller_name(state, &sale.staff_id)?;

    let record = pricing::price_private_tour(&sale)?;
    let summary = private_tour_summary(&sale, &record, &staff_name);

    let booking = log_db_failure("confirm booking", state.db.insert_booking(record))?;
    state.bookings.push(booking.clone());

    Ok(BookingConfirmation { booking, summary })
}

pub fn sell_extra(state: &mut AppState, sale: ExtraSale) -> Result<BookingConfirmation> {
    let extra = state
        .extras
        .iter()
        .find(|e| e.id == sale.extra_id)
        .cloned()
        .ok_or_else(|| Error::not_found("extra", &sale.extra_id))?;
    let staff_name = seller_name(state, &sale.staff_id)?;

    let record = pricing::price_extra(&extra, &sale)?;
    let summary = extra_summary(&record, &staff_name);

    let booking = log_db_failure("record sale", state.db.insert_booking(record))?;
    state.bookings.push(booking.clone());

    Ok(BookingConfirmation { booking, summary })
}

pub fn book_taxi_boat(state: &mut AppState, sale: TaxiBoatSale) -> Result<BookingConfirmation> {
    let option = state
        .taxi_boat_options
        .iter()
        .find(|o| o.id == sale.option_id)
        .cloned()
        .ok_or_else(|| Error::not_found("taxi boat option", &sale.option_id))?;
    let staff_name = seller_name(state, &sale.staff_id)?;

    let record = pricing::price_taxi_boat(&option, &sale)?;
    let summary = taxi_boat_summary(&option, &record, &staff_name);

    let booking = log_db_failure("confirm booking", state.db.insert_booking(record))?;
    state.bookings.push(booking.clone());

    Ok(BookingConfirmation { booking, summary })
}

/// Replaces a stored booking wholesale. Bookings have no partial-field
/// patch; an edit re-submits the entire record.
pub fn update_booking(state: &mut AppState, booking: Booking) -> Result<Booking> {
    let updated = log_db_failure("update booking", state.db.update_booking(&booking))?;

    if let Some(slot) = state.bookings.iter_mut().find(|b| b.id == updated.id) {
        *slot = updated.clone();
    }

    Ok(updated)
}

pub fn delete_booking(state: &mut AppState, id: &str) -> Result<()> {
    log_db_failure("delete booking", state.db.delete_booking(id))?;
    state.bookings.retain(|b| b.id != id);
    Ok(())
}

fn seller_name(state: &AppState, staff_id: &str) -> Result<String> {
    state
        .staff
        .iter()
        .find(|member| member.id == staff_id)
        .map(|member| member.name.clone())
        .ok_or_else(|| Error::not_found("staff member", staff_id))
}

fn activity_summary(activity: &Activity, record: &CreateBooking, staff_name: &str) -> String {
    let cost_breakdown = match activity.kind {
        ActivityKind::Internal => format!(
            "\nFuel Cost: {} THB\nCaptain Cost: {} THB",
            record.fuel_cost.unwrap_or(0.0),
            record.captain_cost.unwrap_or(0.0)
        ),
        ActivityKind::External => {
            format!("\nCompany Cost: {} THB", record.item_cost.unwrap_or(0.0))
        }
    };

    format!(
        "Booking confirmed for {} by {}!\n\nBooking Date: {}\n{} person(s) x {} THB = {} THB\nExtras: {} THB\nDiscount: {} THB\nFinal Price: {} THB\nPayment Method: {}{}\nEmployee Commission: {} THB",
        activity.name,
        staff_name,
        record.booking_date,
        record.number_of_people,
        activity.price,
        record.customer_price,
        record.extras_total.unwrap_or(0.0),
        record.discount.unwrap_or(0.0),
        pricing::final_price(record),
        record.payment_method,
        cost_breakdown,
        record.employee_commission.unwrap_or(0.0)
    )
}

fn speed_boat_summary(trip: &SpeedBoatTrip, record: &CreateBooking, staff_name: &str) -> String {
    format!(
        "Booking confirmed for {} by {}!\n\nBooking Date: {}\n{} person(s) x {} THB = {} THB\nPayment Method: {}\n\nEmployee Commission: {} THB",
        trip.route,
        staff_name,
        record.booking_date,
        record.number_of_people,
        trip.price,
        record.customer_price,
        record.payment_method,
        record.employee_commission.unwrap_or(0.0)
    )
}

fn private_tour_summary(
    sale: &PrivateTourSale,
    record: &CreateBooking,
    staff_name: &str,
) -> String {
    format!(
        "Private Tour booking confirmed by {}!\n\nBooking Date: {}\nType: {}\nFor: {} person(s)\nPrice: {} THB\nPayment Method: {}\n\nFuel Cost: {} THB\nCaptain Cost: {} THB\nHostel Commission: {} THB\nEmployee Commission: {} THB",
        staff_name,
        record.booking_date,
        sale.tour_type,
        record.number_of_people,
        record.customer_price,
        record.payment_method,
        record.fuel_cost.unwrap_or(0.0),
        record.captain_cost.unwrap_or(0.0),
        record.hostel_commission.unwrap_or(0.0),
        record.employee_commission.unwrap_or(0.0)
    )
}

fn extra_summary(record: &CreateBooking, staff_name: &str) -> String {
    let mut summary = format!(
        "Sold {} for {} THB by {} on {}.",
        record.item_name, record.customer_price, staff_name, record.booking_date
    );

    if let Some(commission) = record.employee_commission {
        summary.push_str(&format!("\nEmployee Commission: {commission} THB"));
    }

    summary
}

fn taxi_boat_summary(option: &TaxiBoatOption, record: &CreateBooking, staff_name: &str) -> String {
    format!(
        "Taxi Boat ({}) booked for {} person(s) at {} THB by {} on {}.\nEmployee Commission: {} THB",
        option.name,
        record.number_of_people,
        record.customer_price,
        staff_name,
        record.booking_date,
        record.employee_commission.unwrap_or(0.0)
    )
}
