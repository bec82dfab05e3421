use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::*;

pub struct Database {
    pub conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        match self.conn.lock() {
            Ok(guard) => guard,
            // The connection stays usable after a panicked holder.
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn initialize(&self) -> Result<()> {
        let conn = self.lock();

        conn.execute_batch(
            "
            -- Rooms and their beds
            CREATE TABLE IF NOT EXISTS rooms (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                condition TEXT NOT NULL,
                maintenance_notes TEXT NOT NULL DEFAULT ''
            );

            CREATE TABLE IF NOT EXISTS beds (
                id TEXT PRIMARY KEY,
                room_id TEXT NOT NULL,
                number INTEGER NOT NULL,
                status TEXT NOT NULL,
                FOREIGN KEY (room_id) REFERENCES rooms(id)
            );

            -- HR records
            CREATE TABLE IF NOT EXISTS staff (
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
                birthday TEXT,
                id_photo_url TEXT
            );

            CREATE TABLE IF NOT EXISTS shifts (
                id TEXT PRIMARY KEY,
                date TEXT NOT NULL,
                staff_name TEXT NOT NULL,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS tasks (
                id TEXT PRIMARY KEY,
                description TEXT NOT NULL,
                assigned_to TEXT NOT NULL,
                due_date TEXT NOT NULL,
                status TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS absences (
                id TEXT PRIMARY KEY,
                staff_id TEXT NOT NULL,
                date TEXT NOT NULL,
                reason TEXT,
                FOREIGN KEY (staff_id) REFERENCES staff(id)
            );

            CREATE TABLE IF NOT EXISTS salary_advances (
                id TEXT PRIMARY KEY,
                staff_id TEXT NOT NULL,
                date TEXT NOT NULL,
                amount REAL NOT NULL,
                reason TEXT,
                FOREIGN KEY (staff_id) REFERENCES staff(id)
            );

            -- Utility spend tracking
            CREATE TABLE IF NOT EXISTS utility_records (
                id TEXT PRIMARY KEY,
                utility_type TEXT NOT NULL,
                date TEXT NOT NULL,
                cost REAL NOT NULL,
                bill_image TEXT
            );

            CREATE TABLE IF NOT EXISTS utility_categories (
                name TEXT PRIMARY KEY COLLATE NOCASE
            );

            -- Sellable catalog
            CREATE TABLE IF NOT EXISTS activities (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                price REAL NOT NULL,
                image_url TEXT NOT NULL DEFAULT '',
                commission REAL,
                type TEXT NOT NULL,
                company_cost REAL
            );

            CREATE TABLE IF NOT EXISTS speed_boat_trips (
                id TEXT PRIMARY KEY,
                route TEXT NOT NULL,
                company TEXT NOT NULL,
                price REAL NOT NULL,
                cost REAL NOT NULL,
                commission REAL
            );

            CREATE TABLE IF NOT EXISTS taxi_boat_options (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                price REAL NOT NULL,
                commission REAL
            );

            CREATE TABLE IF NOT EXISTS extras (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                price REAL NOT NULL,
                commission REAL
            );

            -- Sales
            CREATE TABLE IF NOT EXISTS bookings (
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
                receipt_image TEXT,
                fuel_cost REAL,
                captain_cost REAL,
                item_cost REAL,
                employee_commission REAL,
                hostel_commission REAL,
                FOREIGN KEY (staff_id) REFERENCES staff(id)
            );

            CREATE TABLE IF NOT EXISTS external_sales (
                id TEXT PRIMARY KEY,
                date TEXT NOT NULL,
                amount REAL NOT NULL,
                description TEXT
            );

            CREATE TABLE IF NOT EXISTS platform_payments (
                id TEXT PRIMARY KEY,
                date TEXT NOT NULL,
                platform TEXT NOT NULL,
                amount REAL NOT NULL,
                booking_reference TEXT
            );

            -- Accommodation channels
            CREATE TABLE IF NOT EXISTS walk_in_guests (
                id TEXT PRIMARY KEY,
                guest_name TEXT NOT NULL,
                room_id TEXT NOT NULL,
                bed_number INTEGER,
                check_in_date TEXT NOT NULL,
                number_of_nights INTEGER NOT NULL,
                price_per_night REAL NOT NULL,
                amount_paid REAL NOT NULL,
                payment_method TEXT NOT NULL,
                nationality TEXT,
                id_number TEXT,
                notes TEXT,
                status TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS accommodation_bookings (
                id TEXT PRIMARY KEY,
                guest_name TEXT NOT NULL,
                platform TEXT NOT NULL,
                room_id TEXT NOT NULL,
                bed_number INTEGER,
                check_in_date TEXT NOT NULL,
                number_of_nights INTEGER NOT NULL,
                total_price REAL NOT NULL,
                amount_paid REAL NOT NULL,
                status TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS payment_types (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL
            );

            -- Login accounts
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                role TEXT NOT NULL,
                staff_id TEXT,
                is_active INTEGER NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL
            );
            ",
        )?;

        // Run migrations for existing databases (pass connection to avoid deadlock)
        Self::migrate_conn(&conn)?;

        Ok(())
    }

    fn migrate_conn(conn: &Connection) -> rusqlite::Result<()> {
        let booking_columns: Vec<String> = conn
            .prepare("PRAGMA table_info(bookings)")?
            .query_map([], |row| row.get::<_, String>(1))?
            .filter_map(|r| r.ok())
            .collect();

        if !booking_columns.contains(&"hostel_commission".to_string()) {
            conn.execute("ALTER TABLE bookings ADD COLUMN hostel_commission REAL", [])?;
        }
        if !booking_columns.contains(&"receipt_image".to_string()) {
            conn.execute("ALTER TABLE bookings ADD COLUMN receipt_image TEXT", [])?;
        }

        let staff_columns: Vec<String> = conn
            .prepare("PRAGMA table_info(staff)")?
            .query_map([], |row| row.get::<_, String>(1))?
            .filter_map(|r| r.ok())
            .collect();

        if !staff_columns.contains(&"id_photo_url".to_string()) {
            conn.execute("ALTER TABLE staff ADD COLUMN id_photo_url TEXT", [])?;
        }

        Ok(())
    }

    // ----- staff -----

    pub fn fetch_staff(&self) -> Result<Vec<Staff>> {
        let conn = self.lock();

        let mut stmt = conn.prepare(
            "SELECT id, name, role, salary, contact, employee_id, phone, thai_id, address,
                    emergency_contact, birthday, id_photo_url
             FROM staff ORDER BY name",
        )?;

        let staff = stmt
            .query_map([], |row| {
                Ok(Staff {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    role: parse_text(row, 2)?,
                    salary: row.get(3)?,
                    contact: row.get(4)?,
                    employee_id: row.get(5)?,
                    phone: row.get(6)?,
                    thai_id: row.get(7)?,
                    address: row.get(8)?,
                    emergency_contact: row.get(9)?,
                    birthday: row.get(10)?,
                    id_photo_url: row.get(11)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(staff)
    }

    pub fn insert_staff(&self, staff: CreateStaff) -> Result<Staff> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();

        conn.execute(
            "INSERT INTO staff (id, name, role, salary, contact, employee_id, phone, thai_id,
                                address, emergency_contact, birthday, id_photo_url)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                id,
                staff.name,
                staff.role.to_string(),
                staff.salary,
                staff.contact,
                staff.employee_id,
                staff.phone,
                staff.thai_id,
                staff.address,
                staff.emergency_contact,
                staff.birthday,
                staff.id_photo_url,
            ],
        )?;

        Ok(Staff {
            id,
            name: staff.name,
            role: staff.role,
            salary: staff.salary,
            contact: staff.contact,
            employee_id: staff.employee_id,
            phone: staff.phone,
            thai_id: staff.thai_id,
            address: staff.address,
            emergency_contact: staff.emergency_contact,
            birthday: staff.birthday,
            id_photo_url: staff.id_photo_url,
        })
    }

    pub fn update_staff(&self, staff: &Staff) -> Result<Staff> {
        let conn = self.lock();

        let changed = conn.execute(
            "UPDATE staff SET name = ?1, role = ?2, salary = ?3, contact = ?4, employee_id = ?5,
                              phone = ?6, thai_id = ?7, address = ?8, emergency_contact = ?9,
                              birthday = ?10, id_photo_url = ?11
             WHERE id = ?12",
            params![
                staff.name,
                staff.role.to_string(),
                staff.salary,
                staff.contact,
                staff.employee_id,
                staff.phone,
                staff.thai_id,
                staff.address,
                staff.emergency_contact,
                staff.birthday,
                staff.id_photo_url,
                staff.id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::not_found("staff member", &staff.id));
        }

        Ok(staff.clone())
    }

    pub fn delete_staff(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM staff WHERE id = ?1", [id])?;
        Ok(())
    }

    // ----- shifts (read-only: rows come from the rota importer) -----

    pub fn fetch_shifts(&self) -> Result<Vec<Shift>> {
        let conn = self.lock();

        let mut stmt = conn.prepare(
            "SELECT id, date, staff_name, start_time, end_time FROM shifts ORDER BY date DESC",
        )?;

        let shifts = stmt
            .query_map([], |row| {
                Ok(Shift {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    staff_name: row.get(2)?,
                    start_time: row.get(3)?,
                    end_time: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(shifts)
    }

    // ----- tasks -----

    pub fn fetch_tasks(&self) -> Result<Vec<Task>> {
        let conn = self.lock();

        let mut stmt = conn.prepare(
            "SELECT id, description, assigned_to, due_date, status FROM tasks ORDER BY due_date",
        )?;

        let tasks = stmt
            .query_map([], |row| {
                Ok(Task {
                    id: row.get(0)?,
                    description: row.get(1)?,
                    assigned_to: row.get(2)?,
                    due_date: row.get(3)?,
                    status: parse_text(row, 4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(tasks)
    }

    pub fn insert_task(&self, task: CreateTask) -> Result<Task> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();

        conn.execute(
            "INSERT INTO tasks (id, description, assigned_to, due_date, status)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                id,
                task.description,
                task.assigned_to,
                task.due_date,
                task.status.to_string(),
            ],
        )?;

        Ok(Task {
            id,
            description: task.description,
            assigned_to: task.assigned_to,
            due_date: task.due_date,
            status: task.status,
        })
    }

    pub fn update_task(&self, task: &Task) -> Result<Task> {
        let conn = self.lock();

        let changed = conn.execute(
            "UPDATE tasks SET description = ?1, assigned_to = ?2, due_date = ?3, status = ?4
             WHERE id = ?5",
            params![
                task.description,
                task.assigned_to,
                task.due_date,
                task.status.to_string(),
                task.id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::not_found("task", &task.id));
        }

        Ok(task.clone())
    }

    pub fn delete_task(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
        Ok(())
    }

    // ----- absences -----

    pub fn fetch_absences(&self) -> Result<Vec<Absence>> {
        let conn = self.lock();

        let mut stmt = conn
            .prepare("SELECT id, staff_id, date, reason FROM absences ORDER BY date DESC")?;

        let absences = stmt
            .query_map([], |row| {
                Ok(Absence {
                    id: row.get(0)?,
                    staff_id: row.get(1)?,
                    date: row.get(2)?,
                    reason: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(absences)
    }

    pub fn insert_absence(&self, absence: CreateAbsence) -> Result<Absence> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();

        conn.execute(
            "INSERT INTO absences (id, staff_id, date, reason) VALUES (?1, ?2, ?3, ?4)",
            params![id, absence.staff_id, absence.date, absence.reason],
        )?;

        Ok(Absence {
            id,
            staff_id: absence.staff_id,
            date: absence.date,
            reason: absence.reason,
        })
    }

    pub fn update_absence(&self, absence: &Absence) -> Result<Absence> {
        let conn = self.lock();

        let changed = conn.execute(
            "UPDATE absences SET staff_id = ?1, date = ?2, reason = ?3 WHERE id = ?4",
            params![absence.staff_id, absence.date, absence.reason, absence.id],
        )?;

        if changed == 0 {
            return Err(Error::not_found("absence", &absence.id));
        }

        Ok(absence.clone())
    }

    pub fn delete_absence(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM absences WHERE id = ?1", [id])?;
        Ok(())
    }

    // ----- salary advances -----

    pub fn fetch_salary_advances(&self) -> Result<Vec<SalaryAdvance>> {
        let conn = self.lock();

        let mut stmt = conn.prepare(
            "SELECT id, staff_id, date, amount, reason FROM salary_advances ORDER BY date DESC",
        )?;

        let advances = stmt
            .query_map([], |row| {
                Ok(SalaryAdvance {
                    id: row.get(0)?,
                    staff_id: row.get(1)?,
                    date: row.get(2)?,
                    amount: row.get(3)?,
                    reason: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(advances)
    }

    pub fn insert_salary_advance(&self, advance: CreateSalaryAdvance) -> Result<SalaryAdvance> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();

        conn.execute(
            "INSERT INTO salary_advances (id, staff_id, date, amount, reason)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, advance.staff_id, advance.date, advance.amount, advance.reason],
        )?;

        Ok(SalaryAdvance {
            id,
            staff_id: advance.staff_id,
            date: advance.date,
            amount: advance.amount,
            reason: advance.reason,
        })
    }

    pub fn update_salary_advance(&self, advance: &SalaryAdvance) -> Result<SalaryAdvance> {
        let conn = self.lock();

        let changed = conn.execute(
            "UPDATE salary_advances SET staff_id = ?1, date = ?2, amount = ?3, reason = ?4
             WHERE id = ?5",
            params![
                advance.staff_id,
                advance.date,
                advance.amount,
                advance.reason,
                advance.id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::not_found("salary advance", &advance.id));
        }

        Ok(advance.clone())
    }

    pub fn delete_salary_advance(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM salary_advances WHERE id = ?1", [id])?;
        Ok(())
    }

    // ----- utility records -----

    pub fn fetch_utility_records(&self) -> Result<Vec<UtilityRecord>> {
        let conn = self.lock();

        let mut stmt = conn.prepare(
            "SELECT id, utility_type, date, cost, bill_image
             FROM utility_records ORDER BY date DESC",
        )?;

        let records = stmt
            .query_map([], |row| {
                Ok(UtilityRecord {
                    id: row.get(0)?,
                    utility_type: row.get(1)?,
                    date: row.get(2)?,
                    cost: row.get(3)?,
                    bill_image: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    pub fn insert_utility_record(&self, record: CreateUtilityRecord) -> Result<UtilityRecord> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();

        conn.execute(
            "INSERT INTO utility_records (id, utility_type, date, cost, bill_image)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, record.utility_type, record.date, record.cost, record.bill_image],
        )?;

        Ok(UtilityRecord {
            id,
            utility_type: record.utility_type,
            date: record.date,
            cost: record.cost,
            bill_image: record.bill_image,
        })
    }

    pub fn update_utility_record(&self, record: &UtilityRecord) -> Result<UtilityRecord> {
        let conn = self.lock();

        let changed = conn.execute(
            "UPDATE utility_records SET utility_type = ?1, date = ?2, cost = ?3, bill_image = ?4
             WHERE id = ?5",
            params![
                record.utility_type,
                record.date,
                record.cost,
                record.bill_image,
                record.id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::not_found("utility record", &record.id));
        }

        Ok(record.clone())
    }

    pub fn delete_utility_record(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM utility_records WHERE id = ?1", [id])?;
        Ok(())
    }

    // ----- utility categories (name-keyed, no ids) -----

    pub fn fetch_utility_categories(&self) -> Result<Vec<String>> {
        let conn = self.lock();

        let mut stmt = conn.prepare("SELECT name FROM utility_categories ORDER BY name")?;

        let categories = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(categories)
    }

    pub fn insert_utility_category(&self, name: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("INSERT INTO utility_categories (name) VALUES (?1)", [name])?;
        Ok(())
    }

    pub fn delete_utility_category(&self, name: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM utility_categories WHERE name = ?1", [name])?;
        Ok(())
    }

    // ----- rooms (beds nested) -----

    pub fn fetch_rooms(&self) -> Result<Vec<Room>> {
        let conn = self.lock();

        let mut stmt = conn.prepare(
            "SELECT id, name, condition, maintenance_notes FROM rooms ORDER BY name",
        )?;

        let shells = stmt
            .query_map([], |row| {
                Ok(Room {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    condition: parse_text(row, 2)?,
                    maintenance_notes: row.get(3)?,
                    beds: Vec::new(),
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut rooms = Vec::with_capacity(shells.len());
        for mut room in shells {
            room.beds = fetch_beds(&conn, &room.id)?;
            rooms.push(room);
        }

        Ok(rooms)
    }

    pub fn insert_room(&self, room: CreateRoom) -> Result<Room> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();

        conn.execute(
            "INSERT INTO rooms (id, name, condition, maintenance_notes) VALUES (?1, ?2, ?3, ?4)",
            params![id, room.name, room.condition.to_string(), room.maintenance_notes],
        )?;

        for bed in &room.beds {
            conn.execute(
                "INSERT INTO beds (id, room_id, number, status) VALUES (?1, ?2, ?3, ?4)",
                params![
                    Uuid::new_v4().to_string(),
                    id,
                    bed.number,
                    bed.status.to_string(),
                ],
            )?;
        }

        fetch_room_by_id(&conn, &id)
    }

    pub fn update_room(&self, room: &Room) -> Result<Room> {
        let conn = self.lock();

        let changed = conn.execute(
            "UPDATE rooms SET name = ?1, condition = ?2, maintenance_notes = ?3 WHERE id = ?4",
            params![
                room.name,
                room.condition.to_string(),
                room.maintenance_notes,
                room.id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::not_found("room", &room.id));
        }

        for bed in &room.beds {
            conn.execute(
                "UPDATE beds SET number = ?1, status = ?2 WHERE id = ?3",
                params![bed.number, bed.status.to_string(), bed.id],
            )?;
        }

        fetch_room_by_id(&conn, &room.id)
    }

    pub fn delete_room(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM beds WHERE room_id = ?1", [id])?;
        conn.execute("DELETE FROM rooms WHERE id = ?1", [id])?;
        Ok(())
    }

    // ----- activities -----

    pub fn fetch_activities(&self) -> Result<Vec<Activity>> {
        let conn = self.lock();

        let mut stmt = conn.prepare(
            "SELECT id, name, description, price, image_url, commission, type, company_cost
             FROM activities ORDER BY name",
        )?;

        let activities = stmt
            .query_map([], |row| {
                Ok(Activity {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    price: row.get(3)?,
                    image_url: row.get(4)?,
                    commission: row.get(5)?,
                    kind: parse_text(row, 6)?,
                    company_cost: row.get(7)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(activities)
    }

    pub fn insert_activity(&self, activity: CreateActivity) -> Result<Activity> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();

        conn.execute(
            "INSERT INTO activities (id, name, description, price, image_url, commission, type,
                                     company_cost)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                id,
                activity.name,
                activity.description,
                activity.price,
                activity.image_url,
                activity.commission,
                activity.kind.to_string(),
                activity.company_cost,
            ],
        )?;

        Ok(Activity {
            id,
            name: activity.name,
            description: activity.description,
            price: activity.price,
            image_url: activity.image_url,
            commission: activity.commission,
            kind: activity.kind,
            company_cost: activity.company_cost,
        })
    }

    pub fn update_activity(&self, activity: &Activity) -> Result<Activity> {
        let conn = self.lock();

        let changed = conn.execute(
            "UPDATE activities SET name = ?1, description = ?2, price = ?3, image_url = ?4,
                                   commission = ?5, type = ?6, company_cost = ?7
             WHERE id = ?8",
            params![
                activity.name,
                activity.description,
                activity.price,
                activity.image_url,
                activity.commission,
                activity.kind.to_string(),
                activity.company_cost,
                activity.id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::not_found("activity", &activity.id));
        }

        Ok(activity.clone())
    }

    pub fn delete_activity(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM activities WHERE id = ?1", [id])?;
        Ok(())
    }

    // ----- speed boat trips -----

    pub fn fetch_speed_boat_trips(&self) -> Result<Vec<SpeedBoatTrip>> {
        let conn = self.lock();

        let mut stmt = conn.prepare(
            "SELECT id, route, company, price, cost, commission
             FROM speed_boat_trips ORDER BY route",
        )?;

        let trips = stmt
            .query_map([], |row| {
                Ok(SpeedBoatTrip {
                    id: row.get(0)?,
                    route: row.get(1)?,
                    company: row.get(2)?,
                    price: row.get(3)?,
                    cost: row.get(4)?,
                    commission: row.get(5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(trips)
    }

    pub fn insert_speed_boat_trip(&self, trip: CreateSpeedBoatTrip) -> Result<SpeedBoatTrip> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();

        conn.execute(
            "INSERT INTO speed_boat_trips (id, route, company, price, cost, commission)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![id, trip.route, trip.company, trip.price, trip.cost, trip.commission],
        )?;

        Ok(SpeedBoatTrip {
            id,
            route: trip.route,
            company: trip.company,
            price: trip.price,
            cost: trip.cost,
            commission: trip.commission,
        })
    }

    pub fn update_speed_boat_trip(&self, trip: &SpeedBoatTrip) -> Result<SpeedBoatTrip> {
        let conn = self.lock();

        let changed = conn.execute(
            "UPDATE speed_boat_trips SET route = ?1, company = ?2, price = ?3, cost = ?4,
                                         commission = ?5
             WHERE id = ?6",
            params![
                trip.route,
                trip.company,
                trip.price,
                trip.cost,
                trip.commission,
                trip.id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::not_found("speed boat trip", &trip.id));
        }

        Ok(trip.clone())
    }

    pub fn delete_speed_boat_trip(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM speed_boat_trips WHERE id = ?1", [id])?;
        Ok(())
    }

    // ----- taxi boat options -----

    pub fn fetch_taxi_boat_options(&self) -> Result<Vec<TaxiBoatOption>> {
        let conn = self.lock();

        let mut stmt = conn.prepare(
            "SELECT id, name, price, commission FROM taxi_boat_options ORDER BY name",
        )?;

        let options = stmt
            .query_map([], |row| {
                Ok(TaxiBoatOption {
                    id: row.get(0)?,
                    name: parse_text(row, 1)?,
                    price: row.get(2)?,
                    commission: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(options)
    }

    pub fn insert_taxi_boat_option(&self, option: CreateTaxiBoatOption) -> Result<TaxiBoatOption> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();

        conn.execute(
            "INSERT INTO taxi_boat_options (id, name, price, commission) VALUES (?1, ?2, ?3, ?4)",
            params![id, option.name.to_string(), option.price, option.commission],
        )?;

        Ok(TaxiBoatOption {
            id,
            name: option.name,
            price: option.price,
            commission: option.commission,
        })
    }

    pub fn update_taxi_boat_option(&self, option: &TaxiBoatOption) -> Result<TaxiBoatOption> {
        let conn = self.lock();

        let changed = conn.execute(
            "UPDATE taxi_boat_options SET name = ?1, price = ?2, commission = ?3 WHERE id = ?4",
            params![
                option.name.to_string(),
                option.price,
                option.commission,
                option.id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::not_found("taxi boat option", &option.id));
        }

        Ok(option.clone())
    }

    pub fn delete_taxi_boat_option(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM taxi_boat_options WHERE id = ?1", [id])?;
        Ok(())
    }

    // ----- extras -----

    pub fn fetch_extras(&self) -> Result<Vec<Extra>> {
        let conn = self.lock();

        let mut stmt =
            conn.prepare("SELECT id, name, price, commission FROM extras ORDER BY name")?;

        let extras = stmt
            .query_map([], |row| {
                Ok(Extra {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    price: row.get(2)?,
                    commission: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(extras)
    }

    pub fn insert_extra(&self, extra: CreateExtra) -> Result<Extra> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();

        conn.execute(
            "INSERT INTO extras (id, name, price, commission) VALUES (?1, ?2, ?3, ?4)",
            params![id, extra.name, extra.price, extra.commission],
        )?;

        Ok(Extra {
            id,
            name: extra.name,
            price: extra.price,
            commission: extra.commission,
        })
    }

    pub fn update_extra(&self, extra: &Extra) -> Result<Extra> {
        let conn = self.lock();

        let changed = conn.execute(
            "UPDATE extras SET name = ?1, price = ?2, commission = ?3 WHERE id = ?4",
            params![extra.name, extra.price, extra.commission, extra.id],
        )?;

        if changed == 0 {
            return Err(Error::not_found("extra", &extra.id));
        }

        Ok(extra.clone())
    }

    pub fn delete_extra(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM extras WHERE id = ?1", [id])?;
        Ok(())
    }

    // ----- bookings -----

    pub fn fetch_bookings(&self) -> Result<Vec<Booking>> {
        let conn = self.lock();

        let mut stmt = conn.prepare(
            "SELECT id, item_id, item_type, item_name, staff_id, booking_date, customer_price,
                    number_of_people, discount, extras, extras_total, payment_method,
                    receipt_image, fuel_cost, captain_cost, item_cost, employee_commission,
                    hostel_commission
             FROM bookings ORDER BY booking_date DESC",
        )?;

        let bookings = stmt
            .query_map([], |row| {
                let extras_json: Option<String> = row.get(9)?;
                let extras = match extras_json {
                    Some(text) => Some(decode_extras(&text, 9)?),
                    None => None,
                };

                Ok(Booking {
                    id: row.get(0)?,
                    item_id: row.get(1)?,
                    item_type: parse_text(row, 2)?,
                    item_name: row.get(3)?,
                    staff_id: row.get(4)?,
                    booking_date: row.get(5)?,
                    customer_price: row.get(6)?,
                    number_of_people: row.get(7)?,
                    discount: row.get(8)?,
                    extras,
                    extras_total: row.get(10)?,
                    payment_method: row.get(11)?,
                    receipt_image: row.get(12)?,
                    fuel_cost: row.get(13)?,
                    captain_cost: row.get(14)?,
                    item_cost: row.get(15)?,
                    employee_commission: row.get(16)?,
                    hostel_commission: row.get(17)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(bookings)
    }

    pub fn insert_booking(&self, booking: CreateBooking) -> Result<Booking> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();

        let extras_json = match &booking.extras {
            Some(extras) => Some(serde_json::to_string(extras)?),
            None => None,
        };

        conn.execute(
            "INSERT INTO bookings (id, item_id, item_type, item_name, staff_id, booking_date,
                                   customer_price, number_of_people, discount, extras,
                                   extras_total, payment_method, receipt_image, fuel_cost,
                                   captain_cost, item_cost, employee_commission,
                                   hostel_commission)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16,
                     ?17, ?18)",
            params![
                id,
                booking.item_id,
                booking.item_type.to_string(),
                booking.item_name,
                booking.staff_id,
                booking.booking_date,
                booking.customer_price,
                booking.number_of_people,
                booking.discount,
                extras_json,
                booking.extras_total,
                booking.payment_method,
                booking.receipt_image,
                booking.fuel_cost,
                booking.captain_cost,
                booking.item_cost,
                booking.employee_commission,
                booking.hostel_commission,
            ],
        )?;

        Ok(Booking {
            id,
            item_id: booking.item_id,
            item_type: booking.item_type,
            item_name: booking.item_name,
            staff_id: booking.staff_id,
            booking_date: booking.booking_date,
            customer_price: booking.customer_price,
            number_of_people: booking.number_of_people,
            discount: booking.discount,
            extras: booking.extras,
            extras_total: booking.extras_total,
            payment_method: booking.payment_method,
            receipt_image: booking.receipt_image,
            fuel_cost: booking.fuel_cost,
            captain_cost: booking.captain_cost,
            item_cost: booking.item_cost,
            employee_commission: booking.employee_commission,
            hostel_commission: booking.hostel_commission,
        })
    }

    pub fn update_booking(&self, booking: &Booking) -> Result<Booking> {
        let conn = self.lock();

        let extras_json = match &booking.extras {
            Some(extras) => Some(serde_json::to_string(extras)?),
            None => None,
        };

        let changed = conn.execute(
            "UPDATE bookings SET item_id = ?1, item_type = ?2, item_name = ?3, staff_id = ?4,
                                 booking_date = ?5, customer_price = ?6, number_of_people = ?7,
                                 discount = ?8, extras = ?9, extras_total = ?10,
                                 payment_method = ?11, receipt_image = ?12, fuel_cost = ?13,
                                 captain_cost = ?14, item_cost = ?15, employee_commission = ?16,
                                 hostel_commission = ?17
             WHERE id = ?18",
            params![
                booking.item_id,
                booking.item_type.to_string(),
                booking.item_name,
                booking.staff_id,
                booking.booking_date,
                booking.customer_price,
                booking.number_of_people,
                booking.discount,
                extras_json,
                booking.extras_total,
                booking.payment_method,
                booking.receipt_image,
                booking.fuel_cost,
                booking.captain_cost,
                booking.item_cost,
                booking.employee_commission,
                booking.hostel_commission,
                booking.id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::not_found("booking", &booking.id));
        }

        Ok(booking.clone())
    }

    pub fn delete_booking(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM bookings WHERE id = ?1", [id])?;
        Ok(())
    }

    // ----- external sales -----

    pub fn fetch_external_sales(&self) -> Result<Vec<ExternalSale>> {
        let conn = self.lock();

        let mut stmt = conn.prepare(
            "SELECT id, date, amount, description FROM external_sales ORDER BY date DESC",
        )?;

        let sales = stmt
            .query_map([], |row| {
                Ok(ExternalSale {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    amount: row.get(2)?,
                    description: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(sales)
    }

    pub fn insert_external_sale(&self, sale: CreateExternalSale) -> Result<ExternalSale> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();

        conn.execute(
            "INSERT INTO external_sales (id, date, amount, description) VALUES (?1, ?2, ?3, ?4)",
            params![id, sale.date, sale.amount, sale.description],
        )?;

        Ok(ExternalSale {
            id,
            date: sale.date,
            amount: sale.amount,
            description: sale.description,
        })
    }

    pub fn update_external_sale(&self, sale: &ExternalSale) -> Result<ExternalSale> {
        let conn = self.lock();

        let changed = conn.execute(
            "UPDATE external_sales SET date = ?1, amount = ?2, description = ?3 WHERE id = ?4",
            params![sale.date, sale.amount, sale.description, sale.id],
        )?;

        if changed == 0 {
            return Err(Error::not_found("external sale", &sale.id));
        }

        Ok(sale.clone())
    }

    pub fn delete_external_sale(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM external_sales WHERE id = ?1", [id])?;
        Ok(())
    }

    // ----- platform payments -----

    pub fn fetch_platform_payments(&self) -> Result<Vec<PlatformPayment>> {
        let conn = self.lock();

        let mut stmt = conn.prepare(
            "SELECT id, date, platform, amount, booking_reference
             FROM platform_payments ORDER BY date DESC",
        )?;

        let payments = stmt
            .query_map([], |row| {
                Ok(PlatformPayment {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    platform: row.get(2)?,
                    amount: row.get(3)?,
                    booking_reference: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(payments)
    }

    pub fn insert_platform_payment(&self, payment: CreatePlatformPayment) -> Result<PlatformPayment> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();

        conn.execute(
            "INSERT INTO platform_payments (id, date, platform, amount, booking_reference)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, payment.date, payment.platform, payment.amount, payment.booking_reference],
        )?;

        Ok(PlatformPayment {
            id,
            date: payment.date,
            platform: payment.platform,
            amount: payment.amount,
            booking_reference: payment.booking_reference,
        })
    }

    pub fn update_platform_payment(&self, payment: &PlatformPayment) -> Result<PlatformPayment> {
        let conn = self.lock();

        let changed = conn.execute(
            "UPDATE platform_payments SET date = ?1, platform = ?2, amount = ?3,
                                          booking_reference = ?4
             WHERE id = ?5",
            params![
                payment.date,
                payment.platform,
                payment.amount,
                payment.booking_reference,
                payment.id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::not_found("platform payment", &payment.id));
        }

        Ok(payment.clone())
    }

    pub fn delete_platform_payment(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM platform_payments WHERE id = ?1", [id])?;
        Ok(())
    }

    // ----- walk-in guests -----

    pub fn fetch_walk_in_guests(&self) -> Result<Vec<WalkInGuest>> {
        let conn = self.lock();

        let mut stmt = conn.prepare(
            "SELECT id, guest_name, room_id, bed_number, check_in_date, number_of_nights,
                    price_per_night, amount_paid, payment_method, nationality, id_number, notes,
                    status
             FROM walk_in_guests ORDER BY check_in_date DESC",
        )?;

        let guests = stmt
            .query_map([], |row| {
                Ok(WalkInGuest {
                    id: row.get(0)?,
                    guest_name: row.get(1)?,
                    room_id: row.get(2)?,
                    bed_number: row.get(3)?,
                    check_in_date: row.get(4)?,
                    number_of_nights: row.get(5)?,
                    price_per_night: row.get(6)?,
                    amount_paid: row.get(7)?,
                    payment_method: row.get(8)?,
                    nationality: row.get(9)?,
                    id_number: row.get(10)?,
                    notes: row.get(11)?,
                    status: parse_text(row, 12)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(guests)
    }

    pub fn insert_walk_in_guest(&self, guest: CreateWalkInGuest) -> Result<WalkInGuest> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();

        conn.execute(
            "INSERT INTO walk_in_guests (id, guest_name, room_id, bed_number, check_in_date,
                                         number_of_nights, price_per_night, amount_paid,
                                         payment_method, nationality, id_number, notes, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            params![
                id,
                guest.guest_name,
                guest.room_id,
                guest.bed_number,
                guest.check_in_date,
                guest.number_of_nights,
                guest.price_per_night,
                guest.amount_paid,
                guest.payment_method,
                guest.nationality,
                guest.id_number,
                guest.notes,
                guest.status.to_string(),
            ],
        )?;

        Ok(WalkInGuest {
            id,
            guest_name: guest.guest_name,
            room_id: guest.room_id,
            bed_number: guest.bed_number,
            check_in_date: guest.check_in_date,
            number_of_nights: guest.number_of_nights,
            price_per_night: guest.price_per_night,
            amount_paid: guest.amount_paid,
            payment_method: guest.payment_method,
            nationality: guest.nationality,
            id_number: guest.id_number,
            notes: guest.notes,
            status: guest.status,
        })
    }

    pub fn update_walk_in_guest(&self, guest: &WalkInGuest) -> Result<WalkInGuest> {
        let conn = self.lock();

        let changed = conn.execute(
            "UPDATE walk_in_guests SET guest_name = ?1, room_id = ?2, bed_number = ?3,
                                       check_in_date = ?4, number_of_nights = ?5,
                                       price_per_night = ?6, amount_paid = ?7,
                                       payment_method = ?8, nationality = ?9, id_number = ?10,
                                       notes = ?11, status = ?12
             WHERE id = ?13",
            params![
                guest.guest_name,
                guest.room_id,
                guest.bed_number,
                guest.check_in_date,
                guest.number_of_nights,
                guest.price_per_night,
                guest.amount_paid,
                guest.payment_method,
                guest.nationality,
                guest.id_number,
                guest.notes,
                guest.status.to_string(),
                guest.id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::not_found("walk-in guest", &guest.id));
        }

        Ok(guest.clone())
    }

    pub fn delete_walk_in_guest(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM walk_in_guests WHERE id = ?1", [id])?;
        Ok(())
    }

    // ----- accommodation bookings -----

    pub fn fetch_accommodation_bookings(&self) -> Result<Vec<AccommodationBooking>> {
        let conn = self.lock();

        let mut stmt = conn.prepare(
            "SELECT id, guest_name, platform, room_id, bed_number, check_in_date,
                    number_of_nights, total_price, amount_paid, status
             FROM accommodation_bookings ORDER BY check_in_date DESC",
        )?;

        let bookings = stmt
            .query_map([], |row| {
                Ok(AccommodationBooking {
                    id: row.get(0)?,
                    guest_name: row.get(1)?,
                    platform: row.get(2)?,
                    room_id: row.get(3)?,
                    bed_number: row.get(4)?,
                    check_in_date: row.get(5)?,
                    number_of_nights: row.get(6)?,
                    total_price: row.get(7)?,
                    amount_paid: row.get(8)?,
                    status: parse_text(row, 9)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(bookings)
    }

    pub fn insert_accommodation_booking(
        &self,
        booking: CreateAccommodationBooking,
    ) -> Result<AccommodationBooking> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();

        conn.execute(
            "INSERT INTO accommodation_bookings (id, guest_name, platform, room_id, bed_number,
                                                 check_in_date, number_of_nights, total_price,
                                                 amount_paid, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                id,
                booking.guest_name,
                booking.platform,
                booking.room_id,
                booking.bed_number,
                booking.check_in_date,
                booking.number_of_nights,
                booking.total_price,
                booking.amount_paid,
                booking.status.to_string(),
            ],
        )?;

        Ok(AccommodationBooking {
            id,
            guest_name: booking.guest_name,
            platform: booking.platform,
            room_id: booking.room_id,
            bed_number: booking.bed_number,
            check_in_date: booking.check_in_date,
            number_of_nights: booking.number_of_nights,
            total_price: booking.total_price,
            amount_paid: booking.amount_paid,
            status: booking.status,
        })
    }

    pub fn update_accommodation_booking(
        &self,
        booking: &AccommodationBooking,
    ) -> Result<AccommodationBooking> {
        let conn = self.lock();

        let changed = conn.execute(
            "UPDATE accommodation_bookings SET guest_name = ?1, platform = ?2, room_id = ?3,
                                               bed_number = ?4, check_in_date = ?5,
                                               number_of_nights = ?6, total_price = ?7,
                                               amount_paid = ?8, status = ?9
             WHERE id = ?10",
            params![
                booking.guest_name,
                booking.platform,
                booking.room_id,
                booking.bed_number,
                booking.check_in_date,
                booking.number_of_nights,
                booking.total_price,
                booking.amount_paid,
                booking.status.to_string(),
                booking.id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::not_found("accommodation booking", &booking.id));
        }

        Ok(booking.clone())
    }

    pub fn delete_accommodation_booking(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM accommodation_bookings WHERE id = ?1", [id])?;
        Ok(())
    }

    // ----- payment types -----

    pub fn fetch_payment_types(&self) -> Result<Vec<PaymentType>> {
        let conn = self.lock();

        let mut stmt = conn.prepare("SELECT id, name FROM payment_types ORDER BY name")?;

        let types = stmt
            .query_map([], |row| {
                Ok(PaymentType {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(types)
    }

    pub fn insert_payment_type(&self, name: &str) -> Result<PaymentType> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();

        conn.execute(
            "INSERT INTO payment_types (id, name) VALUES (?1, ?2)",
            params![id, name],
        )?;

        Ok(PaymentType {
            id,
            name: name.to_string(),
        })
    }

    pub fn update_payment_type(&self, payment_type: &PaymentType) -> Result<PaymentType> {
        let conn = self.lock();

        let changed = conn.execute(
            "UPDATE payment_types SET name = ?1 WHERE id = ?2",
            params![payment_type.name, payment_type.id],
        )?;

        if changed == 0 {
            return Err(Error::not_found("payment type", &payment_type.id));
        }

        Ok(payment_type.clone())
    }

    pub fn delete_payment_type(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM payment_types WHERE id = ?1", [id])?;
        Ok(())
    }

    // ----- users -----

    pub fn fetch_users(&self) -> Result<Vec<User>> {
        let conn = self.lock();

        let mut stmt = conn.prepare(
            "SELECT id, username, password, role, staff_id, is_active, created_at
             FROM users ORDER BY username",
        )?;

        let users = stmt
            .query_map([], |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    password: row.get(2)?,
                    role: parse_text(row, 3)?,
                    staff_id: row.get(4)?,
                    is_active: row.get(5)?,
                    created_at: row.get(6)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(users)
    }

    pub fn insert_user(&self, user: CreateUser) -> Result<User> {
        let conn = self.lock();
        let id = Uuid::new_v4().to_string();
        let created_at = chrono::Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO users (id, username, password, role, staff_id, is_active, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                id,
                user.username,
                user.password,
                user.role.to_string(),
                user.staff_id,
                user.is_active,
                created_at,
            ],
        )?;

        Ok(User {
            id,
            username: user.username,
            password: user.password,
            role: user.role,
            staff_id: user.staff_id,
            is_active: user.is_active,
            created_at,
        })
    }

    pub fn update_user(&self, user: &User) -> Result<User> {
        let conn = self.lock();

        let changed = conn.execute(
            "UPDATE users SET username = ?1, password = ?2, role = ?3, staff_id = ?4,
                              is_active = ?5
             WHERE id = ?6",
            params![
                user.username,
                user.password,
                user.role.to_string(),
                user.staff_id,
                user.is_active,
                user.id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::not_found("user", &user.id));
        }

        Ok(user.clone())
    }

    pub fn delete_user(&self, id: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM users WHERE id = ?1", [id])?;
        Ok(())
    }
}

fn fetch_beds(conn: &Connection, room_id: &str) -> rusqlite::Result<Vec<Bed>> {
    let mut stmt =
        conn.prepare("SELECT id, number, status FROM beds WHERE room_id = ?1 ORDER BY number")?;

    let beds = stmt
        .query_map([room_id], |row| {
            Ok(Bed {
                id: row.get(0)?,
                number: row.get(1)?,
                status: parse_text(row, 2)?,
            })
        })?
        .collect();
    beds
}

fn fetch_room_by_id(conn: &Connection, id: &str) -> Result<Room> {
    let mut stmt =
        conn.prepare("SELECT id, name, condition, maintenance_notes FROM rooms WHERE id = ?1")?;

    let mut room = stmt
        .query_row([id], |row| {
            Ok(Room {
                id: row.get(0)?,
                name: row.get(1)?,
                condition: parse_text(row, 2)?,
                maintenance_notes: row.get(3)?,
                beds: Vec::new(),
            })
        })
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => Error::not_found("room", id),
            other => Error::Db(other),
        })?;

    room.beds = fetch_beds(conn, &room.id)?;

    Ok(room)
}

fn parse_text<T>(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let text: String = row.get(idx)?;
    text.parse().map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
    })
}

fn decode_extras(text: &str, idx: usize) -> rusqlite::Result<Vec<BookingExtra>> {
    serde_json::from_str(text).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
    })
}
