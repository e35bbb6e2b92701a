use chrono::{Duration, NaiveDate, Utc};
use rusqlite::{params, params_from_iter, OptionalExtension, Row, ToSql};
use serde::Deserialize;

use crate::db::queries::*;
use crate::db::Database;
use crate::error::{Result, StoreError};
use crate::models::{Flight, NewFlight};

const ENTITY: &str = "flight";

/// Raw query-string filters as they arrive on `GET /flights`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightQuery {
    pub trips: Option<String>,
    pub price: Option<String>,
    pub travellers: Option<String>,
    pub trip_date: Option<String>,
    pub sort: Option<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SortField { Price, DepartureTime, ArrivalTime, TotalSeats, FlightNumber }

impl SortField {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "price" => Some(SortField::Price),
            "departureTime" => Some(SortField::DepartureTime),
            "arrivalTime" => Some(SortField::ArrivalTime),
            "totalSeats" => Some(SortField::TotalSeats),
            "flightNumber" => Some(SortField::FlightNumber),
            _ => None,
        }
    }

    fn column(self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::DepartureTime => "departureTime",
            SortField::ArrivalTime => "arrivalTime",
            SortField::TotalSeats => "totalSeats",
            SortField::FlightNumber => "flightNumber",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SortDir { Asc, Desc }

/// Validated flight search. Every field narrows the result set; `sort` is
/// applied left to right with `id` as the final tie-break.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlightFilter {
    pub route: Option<(String, String)>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_seats: Option<i64>,
    pub departure_day: Option<NaiveDate>,
    pub sort: Vec<(SortField, SortDir)>,
}

fn invalid(msg: impl Into<String>) -> StoreError {
    StoreError::InvalidInput(msg.into())
}

impl FlightFilter {
    pub fn parse(q: &FlightQuery) -> Result<Self> {
        let mut f = FlightFilter::default();

        if let Some(trips) = q.trips.as_deref() {
            let (dep, arr) = trips
                .split_once('-')
                .ok_or_else(|| invalid(format!("trips must look like DEP-ARR, got {trips:?}")))?;
            let (dep, arr) = (dep.trim(), arr.trim());
            if dep.is_empty() || arr.is_empty() {
                return Err(invalid("trips needs both a departure and an arrival code"));
            }
            if dep == arr {
                return Err(invalid("departure and arrival airport cannot be the same"));
            }
            f.route = Some((dep.to_string(), arr.to_string()));
        }

        if let Some(price) = q.price.as_deref() {
            let parse_price = |s: &str| {
                s.trim().parse::<i64>().map_err(|_| invalid(format!("price bound {s:?} is not an integer")))
            };
            match price.split_once('-') {
                Some((lo, hi)) => {
                    let (lo, hi) = (parse_price(lo)?, parse_price(hi)?);
                    if lo > hi {
                        return Err(invalid("price range is inverted"));
                    }
                    f.min_price = Some(lo);
                    f.max_price = Some(hi);
                }
                None => f.min_price = Some(parse_price(price)?),
            }
        }

        if let Some(t) = q.travellers.as_deref() {
            let n = t.trim().parse::<i64>().map_err(|_| invalid(format!("travellers {t:?} is not an integer")))?;
            if n < 1 {
                return Err(invalid("travellers must be at least 1"));
            }
            f.min_seats = Some(n);
        }

        if let Some(d) = q.trip_date.as_deref() {
            let day = NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
                .map_err(|_| invalid(format!("tripDate {d:?} is not YYYY-MM-DD")))?;
            f.departure_day = Some(day);
        }

        if let Some(sort) = q.sort.as_deref() {
            for part in sort.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                let (field, dir) = part
                    .rsplit_once('_')
                    .ok_or_else(|| invalid(format!("sort entry {part:?} must look like field_ASC")))?;
                let field = SortField::parse(field).ok_or_else(|| invalid(format!("cannot sort by {field:?}")))?;
                let dir = match dir.to_ascii_uppercase().as_str() {
                    "ASC" => SortDir::Asc,
                    "DESC" => SortDir::Desc,
                    _ => return Err(invalid(format!("sort direction {dir:?} must be ASC or DESC"))),
                };
                f.sort.push((field, dir));
            }
        }

        Ok(f)
    }

    fn to_sql(&self) -> Result<(String, Vec<Box<dyn ToSql>>)> {
        let mut clauses: Vec<&str> = Vec::new();
        let mut args: Vec<Box<dyn ToSql>> = Vec::new();
        if let Some((dep, arr)) = &self.route {
            clauses.push("departureAirportId = ? AND arrivalAirportId = ?");
            args.push(Box::new(dep.clone()));
            args.push(Box::new(arr.clone()));
        }
        if let Some(lo) = self.min_price {
            clauses.push("price >= ?");
            args.push(Box::new(lo));
        }
        if let Some(hi) = self.max_price {
            clauses.push("price <= ?");
            args.push(Box::new(hi));
        }
        if let Some(n) = self.min_seats {
            clauses.push("totalSeats >= ?");
            args.push(Box::new(n));
        }
        if let Some(day) = self.departure_day {
            let start = day
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| invalid("tripDate out of range"))?
                .and_utc();
            let end = start + Duration::days(1);
            // Compare in the same text encoding the rows were written with.
            clauses.push("departureTime >= ? AND departureTime < ?");
            args.push(Box::new(start));
            args.push(Box::new(end));
        }

        let mut sql = format!("SELECT {FLIGHT_COLUMNS} FROM Flights");
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY ");
        for (field, dir) in &self.sort {
            sql.push_str(field.column());
            sql.push_str(match dir { SortDir::Asc => " ASC, ", SortDir::Desc => " DESC, " });
        }
        sql.push_str("id ASC");
        Ok((sql, args))
    }
}

fn map_flight_row(r: &Row) -> rusqlite::Result<Flight> {
    Ok(Flight {
        id: r.get("id")?,
        flight_number: r.get("flightNumber")?,
        airplane_id: r.get("airplaneId")?,
        departure_airport_id: r.get("departureAirportId")?,
        arrival_airport_id: r.get("arrivalAirportId")?,
        departure_time: r.get("departureTime")?,
        arrival_time: r.get("arrivalTime")?,
        price: r.get("price")?,
        boarding_gate: r.get("boardingGate")?,
        total_seats: r.get("totalSeats")?,
        created_at: r.get("createdAt")?,
        updated_at: r.get("updatedAt")?,
    })
}

impl Database {
    pub fn create_flight(&self, new: &NewFlight) -> Result<Flight> {
        self.conn().prepare_cached(INSERT_FLIGHT)?.execute(params![
            new.flight_number,
            new.airplane_id,
            new.departure_airport_id,
            new.arrival_airport_id,
            new.departure_time,
            new.arrival_time,
            new.price,
            new.boarding_gate,
            new.total_seats,
            Utc::now(),
        ])?;
        let id = self.conn().last_insert_rowid();
        self.fetch_flight(id)?.ok_or(StoreError::NotFound { entity: ENTITY, id })
    }

    pub fn list_flights(&self, filter: &FlightFilter) -> Result<Vec<Flight>> {
        let (sql, args) = filter.to_sql()?;
        let mut stmt = self.conn().prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(args))?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(map_flight_row(r)?);
        }
        Ok(out)
    }

    pub fn fetch_flight(&self, id: i64) -> Result<Option<Flight>> {
        let mut stmt = self.conn().prepare_cached(FLIGHT_BY_ID)?;
        let row = stmt.query_row(params![id], map_flight_row).optional()?;
        Ok(row)
    }

    /// Book (`dec = true`) or release `seats` on a flight atomically. Overbooking
    /// trips the `totalSeats >= 0` check and surfaces as a constraint error; a
    /// release that would not fit in an `i64` is invalid input.
    pub fn adjust_flight_seats(&mut self, id: i64, seats: i64, dec: bool) -> Result<Flight> {
        if seats <= 0 {
            return Err(invalid("seats must be positive"));
        }
        let tx = self.transaction()?;
        let current: i64 = tx
            .prepare_cached(FLIGHT_SEATS)?
            .query_row(params![id], |r| r.get(0))
            .optional()?
            .ok_or(StoreError::NotFound { entity: ENTITY, id })?;
        let total = match dec {
            true => current.checked_sub(seats),
            false => current.checked_add(seats),
        }
        .ok_or_else(|| invalid(format!("seat count for flight {id} out of range")))?;
        tx.prepare_cached(SET_FLIGHT_SEATS)?.execute(params![id, total, Utc::now()])?;
        let flight = tx.prepare_cached(FLIGHT_BY_ID)?.query_row(params![id], map_flight_row)?;
        tx.commit()?;
        Ok(flight)
    }
}
