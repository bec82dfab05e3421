//! Integration tests for desk operations
//! These tests use an in-memory SQLite database to test business logic

#[cfg(test)]
mod tests {
    use crate::auth::{Session, SessionStore, View, ALL_VIEWS};
    use crate::commands::{
        bookings, hr, payments, reports, rooms, staff, users, utilities,
    };
    use crate::db::Database;
    use crate::error::Error;
    use crate::models::*;
    use crate::pricing::{ActivitySale, ExtraSale, PrivateTourSale, SpeedBoatSale, TaxiBoatSale};
    use crate::state::AppState;

    /// Create application state over a fresh in-memory database
    fn test_state() -> AppState {
        let db = Database::open_in_memory().expect("Failed to create in-memory database");
        db.initialize().expect("Failed to initialize schema");

        let mut state = AppState::new(db);
        state.load_all().expect("Failed to load mirrors");
        state
    }

    /// Seed sellers and a small catalog
    fn seed_desk(state: &mut AppState) {
        {
            let conn = state.db.conn.lock().unwrap();
            conn.execute_batch(
                "
                INSERT INTO staff (id, name, role, salary, contact, employee_id)
                VALUES ('staff-1', 'Somchai', 'Staff', 12000, 'somchai@hostel.test', 'EMP-01');
                INSERT INTO staff (id, name, role, salary, contact, employee_id)
                VALUES ('staff-2', 'Mali', 'Admin', 18000, 'mali@hostel.test', 'EMP-02');

                INSERT INTO activities (id, name, description, price, image_url, commission, type, company_cost)
                VALUES ('act-1', 'Island Hopping', 'Full day longtail tour', 1000, '', 50, 'Internal', NULL);
                INSERT INTO activities (id, name, description, price, image_url, commission, type, company_cost)
                VALUES ('act-2', 'Rock Climbing', 'Guided climb with gear', 1500, '', 100, 'External', 900);

                INSERT INTO speed_boat_trips (id, route, company, price, cost, commission)
                VALUES ('boat-1', 'Tonsai - Phuket', 'Ao Nang Travel', 900, 600, 50);

                INSERT INTO taxi_boat_options (id, name, price, commission)
                VALUES ('taxi-1', 'One Way', 100, 25);

                INSERT INTO extras (id, name, price, commission)
                VALUES ('paddle_hour', 'Paddle Board (hour)', 150, NULL);
                ",
            )
            .expect("Failed to seed test data");
        }

        state.load_all().expect("Failed to reload mirrors");
    }

    fn island_hopping_sale() -> ActivitySale {
        ActivitySale {
            activity_id: "act-1".to_string(),
            staff_id: "staff-1".to_string(),
            booking_date: "2024-03-15".to_string(),
            number_of_people: 2,
            discount: Some(100.0),
            extras: vec![BookingExtra {
                name: "Lunch".to_string(),
                price: 200.0,
            }],
            payment_method: "Cash".to_string(),
            receipt_image: None,
            fuel_cost: Some(500.0),
            captain_cost: Some(300.0),
            commission_rate: None,
        }
    }

    fn taxi_sale(staff_id: &str, date: &str, people: i32) -> TaxiBoatSale {
        TaxiBoatSale {
            option_id: "taxi-1".to_string(),
            staff_id: staff_id.to_string(),
            booking_date: date.to_string(),
            number_of_people: people,
            payment_method: "Cash".to_string(),
            receipt_image: None,
            commission_rate: None,
        }
    }

    fn sample_booking() -> Booking {
        Booking {
            id: "bk-1".to_string(),
            item_id: "act-1".to_string(),
            item_type: ItemType::Activity,
            item_name: "Island Hopping".to_string(),
            staff_id: "staff-1".to_string(),
            booking_date: "2024-03-15".to_string(),
            customer_price: 2000.0,
            number_of_people: 2,
            discount: Some(100.0),
            extras: Some(vec![BookingExtra {
                name: "Lunch".to_string(),
                price: 200.0,
            }]),
            extras_total: Some(200.0),
            payment_method: "Cash".to_string(),
            receipt_image: None,
            fuel_cost: Some(500.0),
            captain_cost: Some(300.0),
            item_cost: Some(800.0),
            employee_commission: Some(100.0),
            hostel_commission: None,
        }
    }

    // ===== BOOKING TESTS =====

    #[test]
    fn test_internal_activity_booking_end_to_end() {
        let mut state = test_state();
        seed_desk(&mut state);

        let confirmation = bookings::book_activity(&mut state, island_hopping_sale())
            .expect("booking should succeed");
        let booking = &confirmation.booking;

        assert!((booking.customer_price - 2000.0).abs() < 0.01);
        assert_eq!(booking.item_cost, Some(800.0));
        assert_eq!(booking.extras_total, Some(200.0));
        assert_eq!(booking.employee_commission, Some(100.0));
        assert_eq!(booking.item_type, ItemType::Activity);
        assert_eq!(state.bookings.len(), 1);

        // The confirmed row is really in the store, snake_case columns and all
        let conn = state.db.conn.lock().unwrap();
        let (item_type, customer_price, item_cost): (String, f64, Option<f64>) = conn
            .query_row(
                "SELECT item_type, customer_price, item_cost FROM bookings WHERE id = ?1",
                [&booking.id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();

        assert_eq!(item_type, "activity");
        assert!((customer_price - 2000.0).abs() < 0.01);
        assert_eq!(item_cost, Some(800.0));
    }

    #[test]
    fn test_activity_confirmation_summary_format() {
        let mut state = test_state();
        seed_desk(&mut state);

        let confirmation =
            bookings::book_activity(&mut state, island_hopping_sale()).unwrap();

        assert_eq!(
            confirmation.summary,
            "Booking confirmed for Island Hopping by Somchai!\n\n\
             Booking Date: 2024-03-15\n\
             2 person(s) x 1000 THB = 2000 THB\n\
             Extras: 200 THB\n\
             Discount: 100 THB\n\
             Final Price: 2100 THB\n\
             Payment Method: Cash\n\
             Fuel Cost: 500 THB\n\
             Captain Cost: 300 THB\n\
             Employee Commission: 100 THB"
        );
    }

    #[test]
    fn test_external_activity_summary_shows_company_cost() {
        let mut state = test_state();
        seed_desk(&mut state);

        let sale = ActivitySale {
            activity_id: "act-2".to_string(),
            discount: None,
            extras: Vec::new(),
            payment_method: "Card".to_string(),
            fuel_cost: None,
            captain_cost: None,
            ..island_hopping_sale()
        };

        let confirmation = bookings::book_activity(&mut state, sale).unwrap();

        assert_eq!(confirmation.booking.item_cost, Some(1800.0));
        assert_eq!(
            confirmation.summary,
            "Booking confirmed for Rock Climbing by Somchai!\n\n\
             Booking Date: 2024-03-15\n\
             2 person(s) x 1500 THB = 3000 THB\n\
             Extras: 0 THB\n\
             Discount: 0 THB\n\
             Final Price: 3000 THB\n\
             Payment Method: Card\n\
             Company Cost: 1800 THB\n\
             Employee Commission: 200 THB"
        );
    }

    #[test]
    fn test_speed_boat_booking_and_summary() {
        let mut state = test_state();
        seed_desk(&mut state);

        let sale = SpeedBoatSale {
            trip_id: "boat-1".to_string(),
            staff_id: "staff-1".to_string(),
            booking_date: "2024-03-15".to_string(),
            number_of_people: 3,
            payment_method: "Cash".to_string(),
            receipt_image: None,
            commission_rate: None,
        };

        let confirmation = bookings::book_speed_boat_trip(&mut state, sale).unwrap();
        let booking = &confirmation.booking;

        assert!((booking.customer_price - 2700.0).abs() < 0.01);
        // Speed boat cost is always stored, scaled by headcount
        assert_eq!(booking.item_cost, Some(1800.0));
        assert_eq!(booking.item_name, "Tonsai - Phuket (Ao Nang Travel)");
        assert_eq!(
            confirmation.summary,
            "Booking confirmed for Tonsai - Phuket by Somchai!\n\n\
             Booking Date: 2024-03-15\n\
             3 person(s) x 900 THB = 2700 THB\n\
             Payment Method: Cash\n\n\
             Employee Commission: 150 THB"
        );
    }

    #[test]
    fn test_private_tour_booking_and_summary() {
        let mut state = test_state();
        seed_desk(&mut state);

        let sale = PrivateTourSale {
            staff_id: "staff-1".to_string(),
            booking_date: "2024-03-15".to_string(),
            tour_type: TourType::HalfDay,
            number_of_people: 4,
            price: 3000.0,
            payment_method: "Cash".to_string(),
            receipt_image: None,
            fuel_cost: Some(400.0),
            captain_cost: Some(200.0),
            employee_commission: Some(150.0),
            hostel_commission: Some(300.0),
        };

        let confirmation = bookings::book_private_tour(&mut state, sale).unwrap();
        let booking = &confirmation.booking;

        assert_eq!(booking.item_id, "private_tour");
        assert_eq!(booking.item_cost, Some(600.0));
        // Flat commissions, untouched by the headcount of 4
        assert_eq!(booking.employee_commission, Some(150.0));
        assert_eq!(booking.hostel_commission, Some(300.0));
        assert_eq!(
            confirmation.summary,
            "Private Tour booking confirmed by Somchai!\n\n\
             Booking Date: 2024-03-15\n\
             Type: Half Day\n\
             For: 4 person(s)\n\
             Price: 3000 THB\n\
             Payment Method: Cash\n\n\
             Fuel Cost: 400 THB\n\
             Captain Cost: 200 THB\n\
             Hostel Commission: 300 THB\n\
             Employee Commission: 150 THB"
        );
    }

    #[test]
    fn test_extra_sale_quantity_naming_and_summary() {
        let mut state = test_state();
        seed_desk(&mut state);

        let sale = ExtraSale {
            extra_id: "paddle_hour".to_string(),
            staff_id: "staff-1".to_string(),
            booking_date: "2024-03-15".to_string(),
            quantity: 3,
            payment_method: "Cash".to_string(),
            receipt_image: None,
            commission_rate: None,
        };

        let confirmation = bookings::sell_extra(&mut state, sale).unwrap();
        let booking = &confirmation.booking;

        assert_eq!(booking.item_name, "Paddle Board (hour) (3 hours)");
        assert!((booking.customer_price - 450.0).abs() < 0.01);
        assert_eq!(booking.employee_commission, None);
        // No commission line without a rate
        assert_eq!(
            confirmation.summary,
            "Sold Paddle Board (hour) (3 hours) for 450 THB by Somchai on 2024-03-15."
        );
    }

    #[test]
    fn test_extra_sale_with_commission_line() {
        let mut state = test_state();
        seed_desk(&mut state);

        let sale = ExtraSale {
            extra_id: "paddle_hour".to_string(),
            staff_id: "staff-1".to_string(),
            booking_date: "2024-03-15".to_string(),
            quantity: 3,
            payment_method: "Cash".to_string(),
            receipt_image: None,
            commission_rate: Some(20.0),
        };

        let confirmation = bookings::sell_extra(&mut state, sale).unwrap();

        assert_eq!(confirmation.booking.employee_commission, Some(60.0));
        assert_eq!(
            confirmation.summary,
            "Sold Paddle Board (hour) (3 hours) for 450 THB by Somchai on 2024-03-15.\n\
             Employee Commission: 60 THB"
        );
    }

    #[test]
    fn test_taxi_boat_booking_and_summary() {
        let mut state = test_state();
        seed_desk(&mut state);

        let confirmation =
            bookings::book_taxi_boat(&mut state, taxi_sale("staff-1", "2024-03-15", 4)).unwrap();
        let booking = &confirmation.booking;

        assert_eq!(booking.item_name, "Taxi Boat - One Way");
        assert!((booking.customer_price - 400.0).abs() < 0.01);
        assert_eq!(booking.employee_commission, Some(100.0));
        assert_eq!(booking.item_cost, None);
        assert_eq!(
            confirmation.summary,
            "Taxi Boat (One Way) booked for 4 person(s) at 400 THB by Somchai on 2024-03-15.\n\
             Employee Commission: 100 THB"
        );
    }

    #[test]
    fn test_receipt_image_kept_for_every_sale_type() {
        let mut state = test_state();
        seed_desk(&mut state);

        let receipt = || Some("receipts/slip-714.jpg".to_string());

        let activity = bookings::book_activity(
            &mut state,
            ActivitySale {
                receipt_image: receipt(),
                ..island_hopping_sale()
            },
        )
        .unwrap();
        assert_eq!(activity.booking.receipt_image, receipt());

        let boat = bookings::book_speed_boat_trip(
            &mut state,
            SpeedBoatSale {
                trip_id: "boat-1".to_string(),
                staff_id: "staff-1".to_string(),
                booking_date: "2024-03-15".to_string(),
                number_of_people: 2,
                payment_method: "Transfer".to_string(),
                receipt_image: receipt(),
                commission_rate: None,
            },
        )
        .unwrap();
        assert_eq!(boat.booking.receipt_image, receipt());

        let tour = bookings::book_private_tour(
            &mut state,
            PrivateTourSale {
                staff_id: "staff-1".to_string(),
                booking_date: "2024-03-15".to_string(),
                tour_type: TourType::FullDay,
                number_of_people: 2,
                price: 5000.0,
                payment_method: "Transfer".to_string(),
                receipt_image: receipt(),
                fuel_cost: None,
                captain_cost: None,
                employee_commission: None,
                hostel_commission: None,
            },
        )
        .unwrap();
        assert_eq!(tour.booking.receipt_image, receipt());

        let extra = bookings::sell_extra(
            &mut state,
            ExtraSale {
                extra_id: "paddle_hour".to_string(),
                staff_id: "staff-1".to_string(),
                booking_date: "2024-03-15".to_string(),
                quantity: 1,
                payment_method: "Cash".to_string(),
                receipt_image: receipt(),
                commission_rate: None,
            },
        )
        .unwrap();
        assert_eq!(extra.booking.receipt_image, receipt());

        let taxi = bookings::book_taxi_boat(
            &mut state,
            TaxiBoatSale {
                receipt_image: receipt(),
                ..taxi_sale("staff-1", "2024-03-15", 2)
            },
        )
        .unwrap();
        assert_eq!(taxi.booking.receipt_image, receipt());

        let conn = state.db.conn.lock().unwrap();
        let stored: Option<String> = conn
            .query_row(
                "SELECT receipt_image FROM bookings WHERE id = ?1",
                [&taxi.booking.id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(stored, receipt(), "Receipt reference must reach the store");
    }

    #[test]
    fn test_unknown_catalog_entry_persists_nothing() {
        let mut state = test_state();
        seed_desk(&mut state);

        let sale = ActivitySale {
            activity_id: "missing".to_string(),
            ..island_hopping_sale()
        };

        let result = bookings::book_activity(&mut state, sale);
        assert!(matches!(result, Err(Error::NotFound { .. })));
        assert!(state.bookings.is_empty());

        let conn = state.db.conn.lock().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0, "Nothing should be written for an unknown item");
    }

    #[test]
    fn test_unknown_seller_persists_nothing() {
        let mut state = test_state();
        seed_desk(&mut state);

        let sale = ActivitySale {
            staff_id: "ghost".to_string(),
            ..island_hopping_sale()
        };

        let result = bookings::book_activity(&mut state, sale);
        assert!(matches!(result, Err(Error::NotFound { .. })));
        assert!(state.bookings.is_empty());
    }

    #[test]
    fn test_invalid_sale_rejected_before_store() {
        let mut state = test_state();
        seed_desk(&mut state);

        let sale = ActivitySale {
            number_of_people: 0,
            ..island_hopping_sale()
        };

        let result = bookings::book_activity(&mut state, sale);
        assert!(matches!(result, Err(Error::Invalid(_))));

        let conn = state.db.conn.lock().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_update_booking_replaces_whole_record() {
        let mut state = test_state();
        seed_desk(&mut state);

        let confirmation =
            bookings::book_taxi_boat(&mut state, taxi_sale("staff-1", "2024-03-15", 4)).unwrap();

        let mut edited = confirmation.booking.clone();
        edited.payment_method = "Transfer".to_string();
        edited.booking_date = "2024-03-16".to_string();

        let updated = bookings::update_booking(&mut state, edited).unwrap();
        assert_eq!(updated.payment_method, "Transfer");
        assert_eq!(state.bookings[0].booking_date, "2024-03-16");

        let conn = state.db.conn.lock().unwrap();
        let method: String = conn
            .query_row(
                "SELECT payment_method FROM bookings WHERE id = ?1",
                [&updated.id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(method, "Transfer");
    }

    #[test]
    fn test_updating_missing_booking_fails() {
        let mut state = test_state();
        seed_desk(&mut state);

        let mut ghost = sample_booking();
        ghost.id = "no-such-id".to_string();

        let result = bookings::update_booking(&mut state, ghost);
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_delete_booking_twice_is_harmless() {
        let mut state = test_state();
        seed_desk(&mut state);

        let first = bookings::book_taxi_boat(&mut state, taxi_sale("staff-1", "2024-03-10", 2))
            .unwrap()
            .booking;
        let second = bookings::book_taxi_boat(&mut state, taxi_sale("staff-1", "2024-03-11", 3))
            .unwrap()
            .booking;

        bookings::delete_booking(&mut state, &first.id).unwrap();
        bookings::delete_booking(&mut state, &first.id).unwrap();

        assert_eq!(state.bookings.len(), 1);
        assert_eq!(state.bookings[0].id, second.id);
    }

    // ===== CRUD COLLECTION TESTS =====

    #[test]
    fn test_staff_ordering_and_update() {
        let mut state = test_state();

        staff::add_staff(
            &mut state,
            CreateStaff {
                name: "Mali".to_string(),
                role: Role::Admin,
                salary: 18000.0,
                contact: "mali@hostel.test".to_string(),
                employee_id: "EMP-02".to_string(),
                phone: None,
                thai_id: None,
                address: None,
                emergency_contact: None,
                birthday: None,
                id_photo_url: None,
            },
        )
        .unwrap();
        let anan = staff::add_staff(
            &mut state,
            CreateStaff {
                name: "Anan".to_string(),
                role: Role::Staff,
                salary: 10000.0,
                contact: "".to_string(),
                employee_id: "EMP-03".to_string(),
                phone: Some("081-000-0000".to_string()),
                thai_id: None,
                address: None,
                emergency_contact: None,
                birthday: None,
                id_photo_url: None,
            },
        )
        .unwrap();

        // Read-all comes back ordered by name
        let fetched = state.db.fetch_staff().unwrap();
        assert_eq!(fetched[0].name, "Anan");
        assert_eq!(fetched[1].name, "Mali");
        assert_eq!(fetched[1].role, Role::Admin);

        let mut edited = anan.clone();
        edited.salary = 11000.0;
        let updated = staff::update_staff(&mut state, edited).unwrap();
        assert!((updated.salary - 11000.0).abs() < 0.01);

        staff::delete_staff(&mut state, &anan.id).unwrap();
        assert_eq!(state.staff.len(), 1);
    }

    #[test]
    fn test_room_lifecycle_with_beds() {
        let mut state = test_state();

        let created = rooms::add_room(
            &mut state,
            CreateRoom {
                name: "Dorm A".to_string(),
                condition: EntityCondition::Good,
                maintenance_notes: String::new(),
                beds: vec![
                    CreateBed {
                        number: 2,
                        status: BedStatus::Ready,
                    },
                    CreateBed {
                        number: 1,
                        status: BedStatus::NeedsCleaning,
                    },
                ],
            },
        )
        .unwrap();

        assert_eq!(created.beds.len(), 2);
        // Beds come back ordered by number regardless of insert order
        assert_eq!(created.beds[0].number, 1);
        assert_eq!(created.beds[0].status, BedStatus::NeedsCleaning);

        let mut edited = created.clone();
        edited.condition = EntityCondition::NeedsRepair;
        edited.beds[0].status = BedStatus::Ready;
        let updated = rooms::update_room(&mut state, edited).unwrap();
        assert_eq!(updated.condition, EntityCondition::NeedsRepair);
        assert_eq!(updated.beds[0].status, BedStatus::Ready);

        rooms::delete_room(&mut state, &created.id).unwrap();
        assert!(state.rooms.is_empty());

        let conn = state.db.conn.lock().unwrap();
        let bed_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM beds", [], |row| row.get(0))
            .unwrap();
        assert_eq!(bed_count, 0, "Beds should be removed with their room");
    }

    #[test]
    fn test_task_status_round_trips_through_store() {
        let mut state = test_state();

        let task = hr::add_task(
            &mut state,
            CreateTask {
                description: "Fix dorm fan".to_string(),
                assigned_to: "Anan".to_string(),
                due_date: "2024-03-20".to_string(),
                status: TaskStatus::InProgress,
            },
        )
        .unwrap();

        // Stored as the display string, read back as the enum
        let conn = state.db.conn.lock().unwrap();
        let status: String = conn
            .query_row("SELECT status FROM tasks WHERE id = ?1", [&task.id], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(status, "In Progress");
        drop(conn);

        state.load_all().unwrap();
        assert_eq!(state.tasks[0].status, TaskStatus::InProgress);
    }

    #[test]
    fn test_utility_category_rules() {
        let mut state = test_state();

        utilities::add_utility_category(&mut state, "Electricity").unwrap();
        utilities::add_utility_category(&mut state, "Water").unwrap();

        // Duplicate names are rejected case-insensitively
        let duplicate = utilities::add_utility_category(&mut state, "electricity");
        assert!(matches!(duplicate, Err(Error::Invalid(_))));

        let empty = utilities::add_utility_category(&mut state, "   ");
        assert!(matches!(empty, Err(Error::Invalid(_))));

        assert_eq!(state.utility_categories, vec!["Electricity", "Water"]);

        utilities::delete_utility_category(&mut state, "Water").unwrap();
        assert_eq!(state.utility_categories, vec!["Electricity"]);
    }

    #[test]
    fn test_walk_in_guest_lifecycle() {
        let mut state = test_state();
        use crate::commands::lodging;

        let guest = lodging::add_walk_in_guest(
            &mut state,
            CreateWalkInGuest {
                guest_name: "Erik".to_string(),
                room_id: "room-1".to_string(),
                bed_number: Some(3),
                check_in_date: "2024-03-15".to_string(),
                number_of_nights: 2,
                price_per_night: 350.0,
                amount_paid: 350.0,
                payment_method: "Cash".to_string(),
                nationality: Some("Sweden".to_string()),
                id_number: None,
                notes: None,
                status: PaymentStatus::DepositPaid,
            },
        )
        .unwrap();

        let conn = state.db.conn.lock().unwrap();
        let status: String = conn
            .query_row(
                "SELECT status FROM walk_in_guests WHERE id = ?1",
                [&guest.id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(status, "Deposit Paid");
        drop(conn);

        let mut edited = guest.clone();
        edited.amount_paid = 700.0;
        edited.status = PaymentStatus::Paid;
        let updated = lodging::update_walk_in_guest(&mut state, edited).unwrap();
        assert_eq!(updated.status, PaymentStatus::Paid);

        lodging::delete_walk_in_guest(&mut state, &guest.id).unwrap();
        assert!(state.walk_in_guests.is_empty());
    }

    #[test]
    fn test_accommodation_booking_lifecycle() {
        let mut state = test_state();
        use crate::commands::lodging;

        let early = lodging::add_accommodation_booking(
            &mut state,
            CreateAccommodationBooking {
                guest_name: "Lena".to_string(),
                platform: "Hostelworld".to_string(),
                room_id: "room-1".to_string(),
                bed_number: Some(2),
                check_in_date: "2024-03-10".to_string(),
                number_of_nights: 3,
                total_price: 1050.0,
                amount_paid: 300.0,
                status: PaymentStatus::DepositPaid,
            },
        )
        .unwrap();
        let late = lodging::add_accommodation_booking(
            &mut state,
            CreateAccommodationBooking {
                guest_name: "Marco".to_string(),
                platform: "Booking.com".to_string(),
                room_id: "room-1".to_string(),
                bed_number: None,
                check_in_date: "2024-03-18".to_string(),
                number_of_nights: 1,
                total_price: 400.0,
                amount_paid: 400.0,
                status: PaymentStatus::Paid,
            },
        )
        .unwrap();

        // Read-all comes back newest check-in first
        let fetched = state.db.fetch_accommodation_bookings().unwrap();
        assert_eq!(fetched[0].id, late.id);
        assert_eq!(fetched[1].id, early.id);

        let mut edited = early.clone();
        edited.amount_paid = 1050.0;
        edited.status = PaymentStatus::Paid;
        let updated = lodging::update_accommodation_booking(&mut state, edited).unwrap();
        assert_eq!(updated.status, PaymentStatus::Paid);
        assert!((updated.amount_paid - 1050.0).abs() < 0.01);

        lodging::delete_accommodation_booking(&mut state, &late.id).unwrap();
        assert_eq!(state.accommodation_bookings.len(), 1);
        assert_eq!(state.accommodation_bookings[0].guest_name, "Lena");
    }

    #[test]
    fn test_shifts_load_newest_first() {
        let mut state = test_state();

        {
            let conn = state.db.conn.lock().unwrap();
            conn.execute_batch(
                "
                INSERT INTO shifts (id, date, staff_name, start_time, end_time)
                VALUES ('shift-1', '2024-03-10', 'Somchai', '08:00', '16:00');
                INSERT INTO shifts (id, date, staff_name, start_time, end_time)
                VALUES ('shift-2', '2024-03-12', 'Mali', '16:00', '23:00');
                ",
            )
            .unwrap();
        }

        state.load_all().unwrap();
        assert_eq!(state.shifts.len(), 2);
        assert_eq!(state.shifts[0].date, "2024-03-12");
        assert_eq!(state.shifts[0].staff_name, "Mali");
        assert_eq!(state.shifts[1].start_time, "08:00");
    }

    #[test]
    fn test_supplemented_collections_store_what_was_given() {
        let mut state = test_state();
        seed_desk(&mut state);

        let absence = hr::add_absence(
            &mut state,
            CreateAbsence {
                staff_id: "staff-1".to_string(),
                date: "2024-03-12".to_string(),
                reason: Some("Sick".to_string()),
            },
        )
        .unwrap();
        let mut edited = absence.clone();
        edited.reason = Some("Family emergency".to_string());
        assert_eq!(
            hr::update_absence(&mut state, edited).unwrap().reason,
            Some("Family emergency".to_string())
        );

        let advance = hr::add_salary_advance(
            &mut state,
            CreateSalaryAdvance {
                staff_id: "staff-2".to_string(),
                date: "2024-03-01".to_string(),
                amount: 3000.0,
                reason: None,
            },
        )
        .unwrap();
        hr::delete_salary_advance(&mut state, &advance.id).unwrap();
        assert!(state.salary_advances.is_empty());

        let sale = payments::add_external_sale(
            &mut state,
            CreateExternalSale {
                date: "2024-03-14".to_string(),
                amount: 1250.0,
                description: Some("Laundry service".to_string()),
            },
        )
        .unwrap();
        let mut edited = sale.clone();
        edited.amount = 1300.0;
        assert!(
            (payments::update_external_sale(&mut state, edited).unwrap().amount - 1300.0).abs()
                < 0.01
        );

        payments::add_platform_payment(
            &mut state,
            CreatePlatformPayment {
                date: "2024-03-13".to_string(),
                platform: "Booking.com".to_string(),
                amount: 4200.0,
                booking_reference: Some("BDC-7781".to_string()),
            },
        )
        .unwrap();
        assert_eq!(state.platform_payments.len(), 1);

        let cash = payments::add_payment_type(&mut state, "Cash").unwrap();
        let mut renamed = cash.clone();
        renamed.name = "Cash (THB)".to_string();
        assert_eq!(
            payments::update_payment_type(&mut state, renamed).unwrap().name,
            "Cash (THB)"
        );
    }

    #[test]
    fn test_failed_update_leaves_mirror_unchanged() {
        let mut state = test_state();
        seed_desk(&mut state);
        let before = state.staff.clone();

        let ghost = Staff {
            id: "ghost".to_string(),
            name: "Nobody".to_string(),
            role: Role::Staff,
            salary: 0.0,
            contact: String::new(),
            employee_id: String::new(),
            phone: None,
            thai_id: None,
            address: None,
            emergency_contact: None,
            birthday: None,
            id_photo_url: None,
        };

        let result = staff::update_staff(&mut state, ghost);
        assert!(matches!(result, Err(Error::NotFound { .. })));
        assert_eq!(state.staff, before, "Mirror must not change on failure");
    }

    #[test]
    fn test_migrations_add_missing_columns() {
        let db = Database::open_in_memory().unwrap();
        {
            // Legacy schema predating the commission and photo columns
            let conn = db.conn.lock().unwrap();
            conn.execute_batch(
                "
                CREATE TABLE bookings (
                    id TEXT PRIMARY KEY,
                    item_id TEXT NOT NULL,
                    item_type TEXT NOT NULL,
                    item_name TEXT NOT NULL,
                    staff_id TEXT NOT NULL,
                    booking_date TEXT NOT NULL,
                    customer_price REAL NOT NULL,
                    number_of_people INTEGER NOT NULL,
                    discount REAL,
                    extras TEXT,
                    extras_total REAL,
                    payment_method TEXT NOT NULL,
                    fuel_cost REAL,
                    captain_cost REAL,
                    item_cost REAL,
                    employee_commission REAL
                );

                CREATE TABLE staff (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    role TEXT NOT NULL,
                    salary REAL NOT NULL DEFAULT 0,
                    contact TEXT NOT NULL DEFAULT '',
                    employee_id TEXT NOT NULL DEFAULT '',
                    phone TEXT,
                    thai_id TEXT,
                    address TEXT,
                    emergency_contact TEXT,
                    birthday TEXT
                );
                ",
            )
            .unwrap();
        }

        db.initialize().unwrap();

        let conn = db.conn.lock().unwrap();
        let booking_columns: Vec<String> = conn
            .prepare("PRAGMA table_info(bookings)")
            .unwrap()
            .query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();
        assert!(booking_columns.contains(&"hostel_commission".to_string()));
        assert!(booking_columns.contains(&"receipt_image".to_string()));

        let staff_columns: Vec<String> = conn
            .prepare("PRAGMA table_info(staff)")
            .unwrap()
            .query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();
        assert!(staff_columns.contains(&"id_photo_url".to_string()));
    }

    // ===== USER & SESSION TESTS =====

    #[test]
    fn test_default_users_seeded_once() {
        let mut state = test_state();

        users::ensure_default_users(&mut state).unwrap();
        assert_eq!(state.users.len(), 2);

        users::ensure_default_users(&mut state).unwrap();
        assert_eq!(state.users.len(), 2, "Seeding must not repeat");

        assert!(state
            .users
            .iter()
            .any(|u| u.username == "admin" && u.role == Role::Admin && u.is_active));
        assert!(state
            .users
            .iter()
            .any(|u| u.username == "staff" && u.role == Role::Staff && u.is_active));
    }

    #[test]
    fn test_login_accepts_seeded_admin() {
        let mut state = test_state();
        users::ensure_default_users(&mut state).unwrap();

        let session = users::login(&mut state, "admin", "admin123").unwrap();
        assert_eq!(session.role, Role::Admin);
        assert_eq!(state.session.as_ref().map(|s| s.username.as_str()), Some("admin"));
    }

    #[test]
    fn test_login_rejects_bad_and_inactive_credentials() {
        let mut state = test_state();
        users::ensure_default_users(&mut state).unwrap();

        let wrong = users::login(&mut state, "admin", "nope");
        assert!(matches!(wrong, Err(Error::Invalid(msg)) if msg == "Invalid username or password"));

        // Deactivate the staff account; same generic message
        let mut deactivated = state
            .users
            .iter()
            .find(|u| u.username == "staff")
            .cloned()
            .unwrap();
        deactivated.is_active = false;
        users::update_user(&mut state, deactivated).unwrap();

        let inactive = users::login(&mut state, "staff", "staff123");
        assert!(
            matches!(inactive, Err(Error::Invalid(msg)) if msg == "Invalid username or password")
        );
        assert!(state.session.is_none());
    }

    #[test]
    fn test_user_field_validation() {
        let mut state = test_state();
        users::ensure_default_users(&mut state).unwrap();

        let short_name = users::add_user(
            &mut state,
            CreateUser {
                username: "ab".to_string(),
                password: "secret99".to_string(),
                role: Role::Staff,
                staff_id: None,
                is_active: true,
            },
        );
        assert!(matches!(short_name, Err(Error::Invalid(_))));

        let short_password = users::add_user(
            &mut state,
            CreateUser {
                username: "newuser".to_string(),
                password: "tiny".to_string(),
                role: Role::Staff,
                staff_id: None,
                is_active: true,
            },
        );
        assert!(matches!(short_password, Err(Error::Invalid(_))));

        assert_eq!(state.users.len(), 2, "Rejected users must not be stored");
    }

    #[test]
    fn test_duplicate_username_rejected_before_store() {
        let mut state = test_state();
        users::ensure_default_users(&mut state).unwrap();

        let duplicate = users::add_user(
            &mut state,
            CreateUser {
                username: "admin".to_string(),
                password: "another123".to_string(),
                role: Role::Staff,
                staff_id: None,
                is_active: true,
            },
        );
        assert!(matches!(duplicate, Err(Error::Invalid(_))));

        let conn = state.db.conn.lock().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_cannot_delete_own_account() {
        let mut state = test_state();
        users::ensure_default_users(&mut state).unwrap();
        users::login(&mut state, "admin", "admin123").unwrap();

        let admin_id = state.session.as_ref().unwrap().user_id.clone();
        let result = users::delete_user(&mut state, &admin_id);

        assert!(
            matches!(result, Err(Error::Invalid(msg)) if msg == "You cannot delete your own account!")
        );
        assert_eq!(state.users.len(), 2);
    }

    #[test]
    fn test_cannot_delete_last_active_admin() {
        let mut state = test_state();
        users::ensure_default_users(&mut state).unwrap();

        let admin_id = state
            .users
            .iter()
            .find(|u| u.role == Role::Admin)
            .map(|u| u.id.clone())
            .unwrap();

        let result = users::delete_user(&mut state, &admin_id);
        assert!(
            matches!(result, Err(Error::Invalid(msg)) if msg == "Cannot delete the last active admin user!")
        );
        assert_eq!(state.users.len(), 2);
    }

    #[test]
    fn test_admin_delete_guard_counts_active_admins() {
        let mut state = test_state();
        users::ensure_default_users(&mut state).unwrap();

        // A second, inactive admin is still shielded while only one admin
        // remains active
        let dormant = users::add_user(
            &mut state,
            CreateUser {
                username: "oldadmin".to_string(),
                password: "retired1".to_string(),
                role: Role::Admin,
                staff_id: None,
                is_active: false,
            },
        )
        .unwrap();

        let result = users::delete_user(&mut state, &dormant.id);
        assert!(matches!(result, Err(Error::Invalid(_))));
    }

    #[test]
    fn test_delete_admin_allowed_with_second_active_admin() {
        let mut state = test_state();
        users::ensure_default_users(&mut state).unwrap();

        users::add_user(
            &mut state,
            CreateUser {
                username: "admin2".to_string(),
                password: "password2".to_string(),
                role: Role::Admin,
                staff_id: None,
                is_active: true,
            },
        )
        .unwrap();

        let first_admin = state
            .users
            .iter()
            .find(|u| u.username == "admin")
            .map(|u| u.id.clone())
            .unwrap();

        users::delete_user(&mut state, &first_admin).unwrap();
        assert_eq!(state.users.len(), 2);
        assert!(state.users.iter().all(|u| u.username != "admin"));
    }

    #[test]
    fn test_role_view_gating() {
        assert_eq!(Role::Admin.allowed_views(), ALL_VIEWS.to_vec());
        assert_eq!(
            Role::Staff.allowed_views(),
            vec![View::Rooms, View::Booking, View::Utilities, View::Activities]
        );
        assert!(!Role::Staff.can_view(View::Users));
        assert!(!Role::Staff.can_view(View::Staff));
        assert_eq!(Role::Staff.default_view(), View::Rooms);
        assert_eq!(View::Rooms.label(), "Rooms & Beds");
        assert_eq!(View::Staff.label(), "Staff & HR");
    }

    #[test]
    fn test_session_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        let session = Session {
            user_id: "u-1".to_string(),
            username: "admin".to_string(),
            role: Role::Admin,
        };

        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);

        // A second clear is a no-op
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_session_file_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = SessionStore::new(path);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_logout_clears_session() {
        let dir = tempfile::tempdir().unwrap();
        let session_path = dir.path().join("session.json");

        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        let mut state = AppState::with_session_store(db, SessionStore::new(&session_path));
        state.load_all().unwrap();
        users::ensure_default_users(&mut state).unwrap();

        users::login(&mut state, "admin", "admin123").unwrap();
        assert!(session_path.exists(), "Login should persist the session");

        users::logout(&mut state).unwrap();
        assert!(state.session.is_none());
        assert!(!session_path.exists(), "Logout should remove the session file");
    }

    #[test]
    fn test_bootstrap_seeds_and_restores_session() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("desk.db");
        let session_path = dir.path().join("session.json");

        let mut state = crate::bootstrap(&db_path, &session_path).unwrap();
        assert_eq!(state.users.len(), 2, "First run seeds the default accounts");
        users::login(&mut state, "admin", "admin123").unwrap();
        drop(state);

        let state = crate::bootstrap(&db_path, &session_path).unwrap();
        assert_eq!(state.users.len(), 2);
        assert_eq!(
            state.session.as_ref().map(|s| s.username.as_str()),
            Some("admin"),
            "Second run picks up the saved session"
        );
    }

    // ===== WIRE FORMAT TESTS =====

    #[test]
    fn test_booking_wire_round_trip() {
        let booking = sample_booking();
        let json = serde_json::to_value(&booking).unwrap();

        assert_eq!(json["itemType"], "activity");
        assert_eq!(json["numberOfPeople"], 2);
        assert_eq!(json["extrasTotal"], 200.0);
        assert_eq!(json["extras"][0]["name"], "Lunch");
        assert!(json.get("number_of_people").is_none());
        assert!(json.get("item_type").is_none());

        let back: Booking = serde_json::from_value(json).unwrap();
        assert_eq!(back, booking);
    }

    #[test]
    fn test_room_and_user_wire_keys() {
        let room = Room {
            id: "room-1".to_string(),
            name: "Dorm A".to_string(),
            condition: EntityCondition::NeedsRepair,
            maintenance_notes: "Broken fan".to_string(),
            beds: vec![Bed {
                id: "bed-1".to_string(),
                number: 1,
                status: BedStatus::NeedsCleaning,
            }],
        };
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["maintenanceNotes"], "Broken fan");
        assert_eq!(json["condition"], "Needs Repair");
        assert_eq!(json["beds"][0]["status"], "Needs Cleaning");

        let back: Room = serde_json::from_value(json).unwrap();
        assert_eq!(back, room);

        let user = User {
            id: "u-1".to_string(),
            username: "admin".to_string(),
            password: "admin123".to_string(),
            role: Role::Admin,
            staff_id: Some("staff-1".to_string()),
            is_active: true,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["isActive"], true);
        assert_eq!(json["staffId"], "staff-1");
        assert!(json.get("createdAt").is_some());

        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_staff_task_and_shift_wire_keys() {
        let member = Staff {
            id: "staff-1".to_string(),
            name: "Somchai".to_string(),
            role: Role::Staff,
            salary: 12000.0,
            contact: "somchai@hostel.test".to_string(),
            employee_id: "EMP-01".to_string(),
            phone: Some("081-000-0000".to_string()),
            thai_id: None,
            address: None,
            emergency_contact: Some("Mali 081-111-1111".to_string()),
            birthday: None,
            id_photo_url: Some("photos/somchai.jpg".to_string()),
        };
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["role"], "Staff");
        assert_eq!(json["employeeId"], "EMP-01");
        assert_eq!(json["emergencyContact"], "Mali 081-111-1111");
        assert_eq!(json["idPhotoUrl"], "photos/somchai.jpg");
        assert!(json.get("employee_id").is_none());

        let back: Staff = serde_json::from_value(json).unwrap();
        assert_eq!(back, member);

        let task = Task {
            id: "task-1".to_string(),
            description: "Fix dorm fan".to_string(),
            assigned_to: "Anan".to_string(),
            due_date: "2024-03-20".to_string(),
            status: TaskStatus::Pending,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["assignedTo"], "Anan");
        assert_eq!(json["dueDate"], "2024-03-20");

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);

        let shift = Shift {
            id: "shift-1".to_string(),
            date: "2024-03-10".to_string(),
            staff_name: "Somchai".to_string(),
            start_time: "08:00".to_string(),
            end_time: "16:00".to_string(),
        };
        let json = serde_json::to_value(&shift).unwrap();
        assert_eq!(json["staffName"], "Somchai");
        assert_eq!(json["startTime"], "08:00");
        assert_eq!(json["endTime"], "16:00");

        let back: Shift = serde_json::from_value(json).unwrap();
        assert_eq!(back, shift);
    }

    #[test]
    fn test_hr_and_utility_wire_keys() {
        let record = UtilityRecord {
            id: "util-1".to_string(),
            utility_type: "Electricity".to_string(),
            date: "2024-03-05".to_string(),
            cost: 4200.0,
            bill_image: Some("bills/march.jpg".to_string()),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["utilityType"], "Electricity");
        assert_eq!(json["billImage"], "bills/march.jpg");

        let back: UtilityRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);

        let absence = Absence {
            id: "abs-1".to_string(),
            staff_id: "staff-1".to_string(),
            date: "2024-03-12".to_string(),
            reason: None,
        };
        let json = serde_json::to_value(&absence).unwrap();
        assert_eq!(json["staffId"], "staff-1");
        assert!(json.get("staff_id").is_none());

        let back: Absence = serde_json::from_value(json).unwrap();
        assert_eq!(back, absence);

        let advance = SalaryAdvance {
            id: "adv-1".to_string(),
            staff_id: "staff-2".to_string(),
            date: "2024-03-01".to_string(),
            amount: 3000.0,
            reason: Some("School fees".to_string()),
        };
        let json = serde_json::to_value(&advance).unwrap();
        assert_eq!(json["staffId"], "staff-2");
        assert_eq!(json["amount"], 3000.0);

        let back: SalaryAdvance = serde_json::from_value(json).unwrap();
        assert_eq!(back, advance);
    }

    #[test]
    fn test_lodging_and_payment_wire_keys() {
        let guest = WalkInGuest {
            id: "guest-1".to_string(),
            guest_name: "Erik".to_string(),
            room_id: "room-1".to_string(),
            bed_number: Some(3),
            check_in_date: "2024-03-15".to_string(),
            number_of_nights: 2,
            price_per_night: 350.0,
            amount_paid: 350.0,
            payment_method: "Cash".to_string(),
            nationality: Some("Sweden".to_string()),
            id_number: None,
            notes: None,
            status: PaymentStatus::DepositPaid,
        };
        let json = serde_json::to_value(&guest).unwrap();
        assert_eq!(json["guestName"], "Erik");
        assert_eq!(json["checkInDate"], "2024-03-15");
        assert_eq!(json["numberOfNights"], 2);
        assert_eq!(json["pricePerNight"], 350.0);
        assert_eq!(json["status"], "Deposit Paid");
        assert!(json.get("price_per_night").is_none());

        let back: WalkInGuest = serde_json::from_value(json).unwrap();
        assert_eq!(back, guest);

        let booking = AccommodationBooking {
            id: "acc-1".to_string(),
            guest_name: "Lena".to_string(),
            platform: "Hostelworld".to_string(),
            room_id: "room-1".to_string(),
            bed_number: None,
            check_in_date: "2024-03-10".to_string(),
            number_of_nights: 3,
            total_price: 1050.0,
            amount_paid: 300.0,
            status: PaymentStatus::DepositPaid,
        };
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["totalPrice"], 1050.0);
        assert_eq!(json["amountPaid"], 300.0);

        let back: AccommodationBooking = serde_json::from_value(json).unwrap();
        assert_eq!(back, booking);

        let sale = ExternalSale {
            id: "ext-1".to_string(),
            date: "2024-03-14".to_string(),
            amount: 1250.0,
            description: Some("Laundry service".to_string()),
        };
        let back: ExternalSale =
            serde_json::from_value(serde_json::to_value(&sale).unwrap()).unwrap();
        assert_eq!(back, sale);

        let payment = PlatformPayment {
            id: "pay-1".to_string(),
            date: "2024-03-13".to_string(),
            platform: "Booking.com".to_string(),
            amount: 4200.0,
            booking_reference: Some("BDC-7781".to_string()),
        };
        let json = serde_json::to_value(&payment).unwrap();
        assert_eq!(json["bookingReference"], "BDC-7781");
        assert!(json.get("booking_reference").is_none());

        let back: PlatformPayment = serde_json::from_value(json).unwrap();
        assert_eq!(back, payment);
    }

    #[test]
    fn test_catalog_wire_keys() {
        let activity = Activity {
            id: "act-2".to_string(),
            name: "Rock Climbing".to_string(),
            description: "Guided climb with gear".to_string(),
            price: 1500.0,
            image_url: "images/climb.jpg".to_string(),
            commission: Some(100.0),
            kind: ActivityKind::External,
            company_cost: Some(900.0),
        };
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["type"], "External");
        assert_eq!(json["imageUrl"], "images/climb.jpg");
        assert_eq!(json["companyCost"], 900.0);
        assert!(json.get("kind").is_none());

        let back: Activity = serde_json::from_value(json).unwrap();
        assert_eq!(back, activity);

        let trip = SpeedBoatTrip {
            id: "boat-1".to_string(),
            route: "Tonsai - Phuket".to_string(),
            company: "Ao Nang Travel".to_string(),
            price: 900.0,
            cost: 600.0,
            commission: Some(50.0),
        };
        let back: SpeedBoatTrip =
            serde_json::from_value(serde_json::to_value(&trip).unwrap()).unwrap();
        assert_eq!(back, trip);

        let option = TaxiBoatOption {
            id: "taxi-1".to_string(),
            name: TaxiRoute::OneWay,
            price: 100.0,
            commission: Some(25.0),
        };
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["name"], "One Way");

        let back: TaxiBoatOption = serde_json::from_value(json).unwrap();
        assert_eq!(back, option);

        let extra = Extra {
            id: "paddle_hour".to_string(),
            name: "Paddle Board (hour)".to_string(),
            price: 150.0,
            commission: None,
        };
        let back: Extra = serde_json::from_value(serde_json::to_value(&extra).unwrap()).unwrap();
        assert_eq!(back, extra);

        let payment_type = PaymentType {
            id: "pt-1".to_string(),
            name: "Cash".to_string(),
        };
        let back: PaymentType =
            serde_json::from_value(serde_json::to_value(&payment_type).unwrap()).unwrap();
        assert_eq!(back, payment_type);
    }

    #[test]
    fn test_enum_display_strings_match_stored_text() {
        assert_eq!(EntityCondition::NeedsRepair.to_string(), "Needs Repair");
        assert_eq!(TaskStatus::InProgress.to_string(), "In Progress");
        assert_eq!(PaymentStatus::DepositPaid.to_string(), "Deposit Paid");
        assert_eq!(ItemType::TaxiBoat.to_string(), "taxi_boat");
        assert_eq!(ItemType::PrivateTour.to_string(), "private_tour");
        assert_eq!(TourType::HalfDay.to_string(), "Half Day");

        assert_eq!("Round Trip".parse::<TaxiRoute>().unwrap(), TaxiRoute::RoundTrip);
        assert_eq!("In Progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("speedboat".parse::<ItemType>().unwrap(), ItemType::Speedboat);
    }

    // ===== REPORT TESTS =====

    #[test]
    fn test_sales_summary_filters_by_range() {
        let mut state = test_state();
        seed_desk(&mut state);

        bookings::book_taxi_boat(&mut state, taxi_sale("staff-1", "2024-03-10", 4)).unwrap();
        bookings::book_taxi_boat(&mut state, taxi_sale("staff-2", "2024-03-15", 2)).unwrap();
        bookings::book_taxi_boat(&mut state, taxi_sale("staff-1", "2024-04-01", 1)).unwrap();

        let summary = reports::sales_summary(&state, "2024-03-01", "2024-03-31");

        assert_eq!(summary.booking_count, 2);
        assert!((summary.gross_revenue - 600.0).abs() < 0.01);
        assert!((summary.operating_cost - 0.0).abs() < 0.01);
        assert!((summary.employee_commission - 150.0).abs() < 0.01);
        assert!((summary.hostel_commission - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_sales_summary_counts_discounts_and_extras() {
        let mut state = test_state();
        seed_desk(&mut state);

        bookings::book_activity(&mut state, island_hopping_sale()).unwrap();

        let summary = reports::sales_summary(&state, "2024-03-01", "2024-03-31");
        assert_eq!(summary.booking_count, 1);
        // 2000 base + 200 extras - 100 discount
        assert!((summary.gross_revenue - 2100.0).abs() < 0.01);
        assert!((summary.operating_cost - 800.0).abs() < 0.01);
    }

    #[test]
    fn test_staff_commission_totals() {
        let mut state = test_state();
        seed_desk(&mut state);

        bookings::book_taxi_boat(&mut state, taxi_sale("staff-1", "2024-03-10", 4)).unwrap();
        bookings::book_taxi_boat(&mut state, taxi_sale("staff-2", "2024-03-15", 2)).unwrap();
        bookings::book_taxi_boat(&mut state, taxi_sale("staff-1", "2024-04-01", 1)).unwrap();

        let summary =
            reports::staff_commission(&state, "staff-1", "2024-03-01", "2024-03-31").unwrap();
        assert_eq!(summary.staff_name, "Somchai");
        assert_eq!(summary.booking_count, 1);
        assert!((summary.commission_total - 100.0).abs() < 0.01);

        let missing = reports::staff_commission(&state, "ghost", "2024-03-01", "2024-03-31");
        assert!(matches!(missing, Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_utility_spend_range() {
        let mut state = test_state();

        for (utility_type, date, cost) in [
            ("Electricity", "2024-03-05", 4200.0),
            ("Water", "2024-03-20", 800.0),
            ("Electricity", "2024-04-02", 3900.0),
        ] {
            utilities::add_utility_record(
                &mut state,
                CreateUtilityRecord {
                    utility_type: utility_type.to_string(),
                    date: date.to_string(),
                    cost,
                    bill_image: None,
                },
            )
            .unwrap();
        }

        let march = reports::utility_spend(&state, "2024-03-01", "2024-03-31");
        assert!((march - 5000.0).abs() < 0.01);

        let april = reports::utility_spend(&state, "2024-04-01", "2024-04-30");
        assert!((april - 3900.0).abs() < 0.01);
    }
}
