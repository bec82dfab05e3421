//! In-memory application state.
//!
//! Every collection the UI renders is mirrored here. Commands write through
//! the database first and update a mirror only from the confirmed result, so
//! a failed write leaves the mirrors untouched.

use crate::auth::{Session, SessionStore};
use crate::db::Database;
use crate::error::Result;
use crate::models::*;

pub struct AppState {
    pub db: Database,
    pub session_store: Option<SessionStore>,
    pub session: Option<Session>,

    pub rooms: Vec<Room>,
    pub staff: Vec<Staff>,
    pub users: Vec<User>,
    pub shifts: Vec<Shift>,
    pub tasks: Vec<Task>,
    pub absences: Vec<Absence>,
    pub salary_advances: Vec<SalaryAdvance>,
    pub utility_records: Vec<UtilityRecord>,
    pub utility_categories: Vec<String>,
    pub activities: Vec<Activity>,
    pub speed_boat_trips: Vec<SpeedBoatTrip>,
    pub taxi_boat_options: Vec<TaxiBoatOption>,
    pub extras: Vec<Extra>,
    pub bookings: Vec<Booking>,
    pub external_sales: Vec<ExternalSale>,
    pub platform_payments: Vec<PlatformPayment>,
    pub walk_in_guests: Vec<WalkInGuest>,
    pub accommodation_bookings: Vec<AccommodationBooking>,
    pub payment_types: Vec<PaymentType>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState {
            db,
            session_store: None,
            session: None,
            rooms: Vec::new(),
            staff: Vec::new(),
            users: Vec::new(),
            shifts: Vec::new(),
            tasks: Vec::new(),
            absences: Vec::new(),
            salary_advances: Vec::new(),
            utility_records: Vec::new(),
            utility_categories: Vec::new(),
            activities: Vec::new(),
            speed_boat_trips: Vec::new(),
            taxi_boat_options: Vec::new(),
            extras: Vec::new(),
            bookings: Vec::new(),
            external_sales: Vec::new(),
            platform_payments: Vec::new(),
            walk_in_guests: Vec::new(),
            accommodation_bookings: Vec::new(),
            payment_types: Vec::new(),
        }
    }

    pub fn with_session_store(db: Database, store: SessionStore) -> Self {
        let mut state = Self::new(db);
        state.session_store = Some(store);
        state
    }

    /// Fills every mirror from the database.
    pub fn load_all(&mut self) -> Result<()> {
        self.rooms = self.db.fetch_rooms()?;
        self.staff = self.db.fetch_staff()?;
        self.users = self.db.fetch_users()?;
        self.shifts = self.db.fetch_shifts()?;
        self.tasks = self.db.fetch_tasks()?;
        self.absences = self.db.fetch_absences()?;
        self.salary_advances = self.db.fetch_salary_advances()?;
        self.utility_records = self.db.fetch_utility_records()?;
        self.utility_categories = self.db.fetch_utility_categories()?;
        self.activities = self.db.fetch_activities()?;
        self.speed_boat_trips = self.db.fetch_speed_boat_trips()?;
        self.taxi_boat_options = self.db.fetch_taxi_boat_options()?;
        self.extras = self.db.fetch_extras()?;
        self.bookings = self.db.fetch_bookings()?;
        self.external_sales = self.db.fetch_external_sales()?;
        self.platform_payments = self.db.fetch_platform_payments()?;
        self.walk_in_guests = self.db.fetch_walk_in_guests()?;
        self.accommodation_bookings = self.db.fetch_accommodation_bookings()?;
        self.payment_types = self.db.fetch_payment_types()?;
        Ok(())
    }

    /// Picks up the session saved by a previous run, if any.
    pub fn restore_session(&mut self) -> Result<Option<Session>> {
        if let Some(store) = &self.session_store {
            self.session = store.load()?;
        }

        Ok(self.session.clone())
    }
}
