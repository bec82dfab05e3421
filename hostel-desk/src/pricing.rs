//! Booking pricing and commission rules.
//!
//! Each sale type has its own derivation for the three computed fields on a
//! booking: what the customer pays, what the item costs the hostel to run,
//! and what the selling staff member earns. Catalog unit values and sale-time
//! inputs are the only sources; totals are never taken from the caller.
//!
//! Cost storage rules differ by type and are load-bearing for reports:
//! activity costs are stored only when positive so "no cost recorded" stays
//! distinguishable from "recorded zero cost", speed boat costs are stored
//! unconditionally, and extras and taxi boats carry no operating cost at all.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{
    Activity, ActivityKind, BookingExtra, CreateBooking, Extra, ItemType, SpeedBoatTrip,
    TaxiBoatOption, TourType,
};

/// Sale request for a catalog activity.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySale {
    pub activity_id: String,
    pub staff_id: String,
    pub booking_date: String,
    pub number_of_people: i32,
    pub discount: Option<f64>,
    pub extras: Vec<BookingExtra>,
    pub payment_method: String,
    pub receipt_image: Option<String>,
    /// Operating costs, entered for internally run activities.
    pub fuel_cost: Option<f64>,
    pub captain_cost: Option<f64>,
    /// Per-person rate for this sale; overrides the catalog rate when set.
    pub commission_rate: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpeedBoatSale {
    pub trip_id: String,
    pub staff_id: String,
    pub booking_date: String,
    pub number_of_people: i32,
    pub payment_method: String,
    pub receipt_image: Option<String>,
    pub commission_rate: Option<f64>,
}

/// Sale request for a private tour. Tours have no catalog row; the price is
/// agreed at sale time and both commissions are flat amounts.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrivateTourSale {
    pub staff_id: String,
    pub booking_date: String,
    pub tour_type: TourType,
    pub number_of_people: i32,
    pub price: f64,
    pub payment_method: String,
    pub receipt_image: Option<String>,
    pub fuel_cost: Option<f64>,
    pub captain_cost: Option<f64>,
    pub employee_commission: Option<f64>,
    pub hostel_commission: Option<f64>,
}

/// Sale request for a standalone extra. `quantity` counts units (hours,
/// days, or pieces depending on the extra), not people.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtraSale {
    pub extra_id: String,
    pub staff_id: String,
    pub booking_date: String,
    pub quantity: i32,
    pub payment_method: String,
    pub receipt_image: Option<String>,
    pub commission_rate: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxiBoatSale {
    pub option_id: String,
    pub staff_id: String,
    pub booking_date: String,
    pub number_of_people: i32,
    pub payment_method: String,
    pub receipt_image: Option<String>,
    pub commission_rate: Option<f64>,
}

/// Prices an activity sale.
///
/// The customer price is the catalog unit price times headcount, stored
/// pre-discount; the discount only affects the displayed final price.
/// Internal activities cost fuel plus captain, external ones cost the
/// catalog's per-person company cost times headcount.
pub fn price_activity(activity: &Activity, sale: &ActivitySale) -> Result<CreateBooking> {
    check_headcount("numberOfPeople", sale.number_of_people)?;
    check_date(&sale.booking_date)?;
    check_amount("discount", sale.discount)?;
    check_amount("fuelCost", sale.fuel_cost)?;
    check_amount("captainCost", sale.captain_cost)?;
    check_amount("commission rate", sale.commission_rate)?;

    for extra in &sale.extras {
        if extra.price < 0.0 {
            return Err(Error::invalid(format!(
                "extra {:?} cannot have a negative price",
                extra.name
            )));
        }
    }

    let people = sale.number_of_people as f64;
    let customer_price = activity.price * people;
    let extras_total: f64 = sale.extras.iter().map(|extra| extra.price).sum();

    let item_cost = match activity.kind {
        ActivityKind::Internal => {
            let cost = sale.fuel_cost.unwrap_or(0.0) + sale.captain_cost.unwrap_or(0.0);
            if cost > 0.0 {
                Some(cost)
            } else {
                None
            }
        }
        ActivityKind::External => {
            let cost = activity.company_cost.unwrap_or(0.0) * people;
            if cost > 0.0 {
                Some(cost)
            } else {
                None
            }
        }
    };

    let rate = sale.commission_rate.or(activity.commission);
    let employee_commission = rate.unwrap_or(0.0) * people;

    Ok(CreateBooking {
        item_id: activity.id.clone(),
        item_type: ItemType::Activity,
        item_name: activity.name.clone(),
        staff_id: sale.staff_id.clone(),
        booking_date: sale.booking_date.clone(),
        customer_price,
        number_of_people: sale.number_of_people,
        discount: Some(sale.discount.unwrap_or(0.0)),
        extras: Some(sale.extras.clone()),
        extras_total: Some(extras_total),
        payment_method: sale.payment_method.clone(),
        receipt_image: sale.receipt_image.clone(),
        fuel_cost: sale.fuel_cost,
        captain_cost: sale.captain_cost,
        item_cost,
        employee_commission: Some(employee_commission),
        hostel_commission: None,
    })
}

/// Prices a speed boat trip. The per-person operating cost comes from the
/// catalog and is stored even when it is zero.
pub fn price_speed_boat(trip: &SpeedBoatTrip, sale: &SpeedBoatSale) -> Result<CreateBooking> {
    check_headcount("numberOfPeople", sale.number_of_people)?;
    check_date(&sale.booking_date)?;
    check_amount("commission rate", sale.commission_rate)?;

    let people = sale.number_of_people as f64;
    let rate = sale.commission_rate.or(trip.commission);

    Ok(CreateBooking {
        item_id: trip.id.clone(),
        item_type: ItemType::Speedboat,
        item_name: format!("{} ({})", trip.route, trip.company),
        staff_id: sale.staff_id.clone(),
        booking_date: sale.booking_date.clone(),
        customer_price: trip.price * people,
        number_of_people: sale.number_of_people,
        discount: None,
        extras: None,
        extras_total: None,
        payment_method: sale.payment_method.clone(),
        receipt_image: sale.receipt_image.clone(),
        fuel_cost: None,
        captain_cost: None,
        item_cost: Some(trip.cost * people),
        employee_commission: Some(rate.unwrap_or(0.0) * people),
        hostel_commission: None,
    })
}

/// Prices a private tour. Both commissions are flat amounts, never scaled by
/// headcount, and the operating cost is stored even at zero.
pub fn price_private_tour(sale: &PrivateTourSale) -> Result<CreateBooking> {
    check_headcount("numberOfPeople", sale.number_of_people)?;
    check_date(&sale.booking_date)?;

    if sale.price < 0.0 {
        return Err(Error::invalid("price cannot be negative"));
    }
    check_amount("fuelCost", sale.fuel_cost)?;
    check_amount("captainCost", sale.captain_cost)?;
    check_amount("employeeCommission", sale.employee_commission)?;
    check_amount("hostelCommission", sale.hostel_commission)?;

    let item_cost = sale.fuel_cost.unwrap_or(0.0) + sale.captain_cost.unwrap_or(0.0);

    Ok(CreateBooking {
        item_id: "private_tour".to_string(),
        item_type: ItemType::PrivateTour,
        item_name: format!("Private Tour - {}", sale.tour_type),
        staff_id: sale.staff_id.clone(),
        booking_date: sale.booking_date.clone(),
        customer_price: sale.price,
        number_of_people: sale.number_of_people,
        discount: None,
        extras: None,
        extras_total: None,
        payment_method: sale.payment_method.clone(),
        receipt_image: sale.receipt_image.clone(),
        fuel_cost: sale.fuel_cost,
        captain_cost: sale.captain_cost,
        item_cost: Some(item_cost),
        employee_commission: sale.employee_commission,
        hostel_commission: sale.hostel_commission,
    })
}

/// Prices a standalone extra sale. Commission is stored only when the
/// effective per-unit rate is nonzero.
pub fn price_extra(extra: &Extra, sale: &ExtraSale) -> Result<CreateBooking> {
    check_headcount("quantity", sale.quantity)?;
    check_date(&sale.booking_date)?;
    check_amount("commission rate", sale.commission_rate)?;

    let quantity = sale.quantity as f64;
    let rate = sale.commission_rate.or(extra.commission);

    let employee_commission = match rate {
        Some(rate) if rate != 0.0 => Some(rate * quantity),
        _ => None,
    };

    Ok(CreateBooking {
        item_id: extra.id.clone(),
        item_type: ItemType::Extra,
        item_name: extra_item_name(extra, sale.quantity),
        staff_id: sale.staff_id.clone(),
        booking_date: sale.booking_date.clone(),
        customer_price: extra.price * quantity,
        number_of_people: sale.quantity,
        discount: None,
        extras: None,
        extras_total: None,
        payment_method: sale.payment_method.clone(),
        receipt_image: sale.receipt_image.clone(),
        fuel_cost: None,
        captain_cost: None,
        item_cost: None,
        employee_commission,
        hostel_commission: None,
    })
}

/// Prices a taxi boat transfer. Taxi boats carry no operating cost.
pub fn price_taxi_boat(option: &TaxiBoatOption, sale: &TaxiBoatSale) -> Result<CreateBooking> {
    check_headcount("numberOfPeople", sale.number_of_people)?;
    check_date(&sale.booking_date)?;
    check_amount("commission rate", sale.commission_rate)?;

    let people = sale.number_of_people as f64;
    let rate = sale.commission_rate.or(option.commission);

    Ok(CreateBooking {
        item_id: option.id.clone(),
        item_type: ItemType::TaxiBoat,
        item_name: format!("Taxi Boat - {}", option.name),
        staff_id: sale.staff_id.clone(),
        booking_date: sale.booking_date.clone(),
        customer_price: option.price * people,
        number_of_people: sale.number_of_people,
        discount: None,
        extras: None,
        extras_total: None,
        payment_method: sale.payment_method.clone(),
        receipt_image: sale.receipt_image.clone(),
        fuel_cost: None,
        captain_cost: None,
        item_cost: None,
        employee_commission: Some(rate.unwrap_or(0.0) * people),
        hostel_commission: None,
    })
}

/// The amount the customer actually hands over: base price plus extras,
/// minus any discount. The stored customer price stays pre-discount.
pub fn final_price(record: &CreateBooking) -> f64 {
    record.customer_price + record.extras_total.unwrap_or(0.0) - record.discount.unwrap_or(0.0)
}

// Seeded paddle board extras are sold by the hour or by the day; everything
// else gets a generic count suffix. Single units keep the bare catalog name.
fn extra_item_name(extra: &Extra, quantity: i32) -> String {
    if quantity <= 1 {
        return extra.name.clone();
    }

    match extra.id.as_str() {
        "paddle_hour" => format!("{} ({} hours)", extra.name, quantity),
        "paddle_day" => format!("{} ({} days)", extra.name, quantity),
        _ => format!("{} (x{})", extra.name, quantity),
    }
}

fn check_headcount(label: &str, count: i32) -> Result<()> {
    if count < 1 {
        return Err(Error::invalid(format!("{label} must be at least 1")));
    }
    Ok(())
}

fn check_date(date: &str) -> Result<()> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| Error::invalid(format!("bookingDate must be YYYY-MM-DD, got {date:?}")))
}

fn check_amount(label: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(amount) if amount < 0.0 => {
            Err(Error::invalid(format!("{label} cannot be negative")))
        }
        _ => Ok(()),
    }
}
