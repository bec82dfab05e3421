use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Role {
    Admin,
    Staff,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum EntityCondition {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Repair")]
    #[strum(serialize = "Needs Repair")]
    NeedsRepair,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    #[strum(serialize = "In Progress")]
    InProgress,
    Completed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum BedStatus {
    Ready,
    #[serde(rename = "Needs Cleaning")]
    #[strum(serialize = "Needs Cleaning")]
    NeedsCleaning,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum PaymentStatus {
    Paid,
    #[serde(rename = "Deposit Paid")]
    #[strum(serialize = "Deposit Paid")]
    DepositPaid,
    Unpaid,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum ActivityKind {
    Internal,
    External,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ItemType {
    Activity,
    Speedboat,
    PrivateTour,
    Extra,
    TaxiBoat,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum TaxiRoute {
    #[serde(rename = "One Way")]
    #[strum(serialize = "One Way")]
    OneWay,
    #[serde(rename = "Round Trip")]
    #[strum(serialize = "Round Trip")]
    RoundTrip,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum TourType {
    #[serde(rename = "Half Day")]
    #[strum(serialize = "Half Day")]
    HalfDay,
    #[serde(rename = "Full Day")]
    #[strum(serialize = "Full Day")]
    FullDay,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentType {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bed {
    pub id: String,
    pub number: i32,
    pub status: BedStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBed {
    pub number: i32,
    pub status: BedStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub condition: EntityCondition,
    pub maintenance_notes: String,
    pub beds: Vec<Bed>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoom {
    pub name: String,
    pub condition: EntityCondition,
    pub maintenance_notes: String,
    pub beds: Vec<CreateBed>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub salary: f64,
    pub contact: String,
    pub employee_id: String,
    pub phone: Option<String>,
    pub thai_id: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub birthday: Option<String>,
    pub id_photo_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaff {
    pub name: String,
    pub role: Role,
    pub salary: f64,
    pub contact: String,
    pub employee_id: String,
    pub phone: Option<String>,
    pub thai_id: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub birthday: Option<String>,
    pub id_photo_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub staff_id: Option<String>,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub staff_id: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    pub date: String,
    pub staff_name: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub description: String,
    pub assigned_to: String,
    pub due_date: String,
    pub status: TaskStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub description: String,
    pub assigned_to: String,
    pub due_date: String,
    pub status: TaskStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UtilityRecord {
    pub id: String,
    pub utility_type: String,
    pub date: String,
    pub cost: f64,
    pub bill_image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUtilityRecord {
    pub utility_type: String,
    pub date: String,
    pub cost: f64,
    pub bill_image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Absence {
    pub id: String,
    pub staff_id: String,
    pub date: String,
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAbsence {
    pub staff_id: String,
    pub date: String,
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaryAdvance {
    pub id: String,
    pub staff_id: String,
    pub date: String,
    pub amount: f64,
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalaryAdvance {
    pub staff_id: String,
    pub date: String,
    pub amount: f64,
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub commission: Option<f64>, // default per-person rate, overridable per sale
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub company_cost: Option<f64>, // per-person operator cost, External only
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivity {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub commission: Option<f64>,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub company_cost: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpeedBoatTrip {
    pub id: String,
    pub route: String,
    pub company: String,
    pub price: f64,
    pub cost: f64,
    pub commission: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpeedBoatTrip {
    pub route: String,
    pub company: String,
    pub price: f64,
    pub cost: f64,
    pub commission: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxiBoatOption {
    pub id: String,
    pub name: TaxiRoute,
    pub price: f64,
    pub commission: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaxiBoatOption {
    pub name: TaxiRoute,
    pub price: f64,
    pub commission: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Extra {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub commission: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateExtra {
    pub name: String,
    pub price: f64,
    pub commission: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalkInGuest {
    pub id: String,
    pub guest_name: String,
    pub room_id: String,
    pub bed_number: Option<i32>,
    pub check_in_date: String,
    pub number_of_nights: i32,
    pub price_per_night: f64,
    pub amount_paid: f64,
    pub payment_method: String,
    pub nationality: Option<String>,
    pub id_number: Option<String>,
    pub notes: Option<String>,
    pub status: PaymentStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalkInGuest {
    pub guest_name: String,
    pub room_id: String,
    pub bed_number: Option<i32>,
    pub check_in_date: String,
    pub number_of_nights: i32,
    pub price_per_night: f64,
    pub amount_paid: f64,
    pub payment_method: String,
    pub nationality: Option<String>,
    pub id_number: Option<String>,
    pub notes: Option<String>,
    pub status: PaymentStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationBooking {
    pub id: String,
    pub guest_name: String,
    pub platform: String,
    pub room_id: String,
    pub bed_number: Option<i32>,
    pub check_in_date: String,
    pub number_of_nights: i32,
    pub total_price: f64,
    pub amount_paid: f64,
    pub status: PaymentStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccommodationBooking {
    pub guest_name: String,
    pub platform: String,
    pub room_id: String,
    pub bed_number: Option<i32>,
    pub check_in_date: String,
    pub number_of_nights: i32,
    pub total_price: f64,
    pub amount_paid: f64,
    pub status: PaymentStatus,
}

// Add-on line snapshotted into a booking. No id or commission: add-ons
// sold with an activity never pay out separately.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingExtra {
    pub name: String,
    pub price: f64,
}

// One sale, snapshotting name/price/cost at sale time so later catalog
// edits never change stored history.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub item_id: String,
    pub item_type: ItemType,
    pub item_name: String,
    pub staff_id: String,
    pub booking_date: String, // YYYY-MM-DD, independent of record creation time
    pub customer_price: f64,
    pub number_of_people: i32,
    pub discount: Option<f64>,
    pub extras: Option<Vec<BookingExtra>>,
    pub extras_total: Option<f64>,
    pub payment_method: String,
    pub receipt_image: Option<String>,
    pub fuel_cost: Option<f64>,
    pub captain_cost: Option<f64>,
    pub item_cost: Option<f64>,
    pub employee_commission: Option<f64>,
    pub hostel_commission: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub item_id: String,
    pub item_type: ItemType,
    pub item_name: String,
    pub staff_id: String,
    pub booking_date: String,
    pub customer_price: f64,
    pub number_of_people: i32,
    pub discount: Option<f64>,
    pub extras: Option<Vec<BookingExtra>>,
    pub extras_total: Option<f64>,
    pub payment_method: String,
    pub receipt_image: Option<String>,
    pub fuel_cost: Option<f64>,
    pub captain_cost: Option<f64>,
    pub item_cost: Option<f64>,
    pub employee_commission: Option<f64>,
    pub hostel_commission: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSale {
    pub id: String,
    pub date: String,
    pub amount: f64,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateExternalSale {
    pub date: String,
    pub amount: f64,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformPayment {
    pub id: String,
    pub date: String,
    pub platform: String,
    pub amount: f64,
    pub booking_reference: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlatformPayment {
    pub date: String,
    pub platform: String,
    pub amount: f64,
    pub booking_reference: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub booking: Booking,
    pub summary: String, // operator-facing confirmation text
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub from_date: String,
    pub to_date: String,
    pub booking_count: i64,
    pub gross_revenue: f64,
    pub operating_cost: f64,
    pub employee_commission: f64,
    pub hostel_commission: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffCommissionSummary {
    pub staff_id: String,
    pub staff_name: String,
    pub from_date: String,
    pub to_date: String,
    pub booking_count: i64,
    pub commission_total: f64,
}
