pub const INSERT_AIRPLANE: &str = "INSERT INTO Airplanes (modelNumber, capacity, createdAt, updatedAt) VALUES (?1, ?2, ?3, ?3)";
pub const ALL_AIRPLANES: &str = "SELECT id, modelNumber, capacity, createdAt, updatedAt FROM Airplanes ORDER BY id";
pub const AIRPLANE_BY_ID: &str = "SELECT id, modelNumber, capacity, createdAt, updatedAt FROM Airplanes WHERE id = ?1";
pub const UPDATE_AIRPLANE: &str = "UPDATE Airplanes SET \
    modelNumber = COALESCE(?2, modelNumber), \
    capacity = COALESCE(?3, capacity), \
    updatedAt = ?4 \
    WHERE id = ?1";
pub const DELETE_AIRPLANE: &str = "DELETE FROM Airplanes WHERE id = ?1";

pub const INSERT_CITY: &str = "INSERT INTO Cities (name, createdAt, updatedAt) VALUES (?1, ?2, ?2)";
pub const ALL_CITIES: &str = "SELECT id, name, createdAt, updatedAt FROM Cities ORDER BY id";
pub const CITY_BY_ID: &str = "SELECT id, name, createdAt, updatedAt FROM Cities WHERE id = ?1";
pub const UPDATE_CITY: &str = "UPDATE Cities SET name = COALESCE(?2, name), updatedAt = ?3 WHERE id = ?1";
pub const DELETE_CITY: &str = "DELETE FROM Cities WHERE id = ?1";

pub const INSERT_AIRPORT: &str = "INSERT INTO Airports (name, code, address, cityId, createdAt, updatedAt) \
    VALUES (?1, ?2, ?3, ?4, ?5, ?5)";
pub const ALL_AIRPORTS: &str = "SELECT id, name, code, address, cityId, createdAt, updatedAt FROM Airports ORDER BY id";
pub const AIRPORT_BY_ID: &str = "SELECT id, name, code, address, cityId, createdAt, updatedAt FROM Airports WHERE id = ?1";
pub const UPDATE_AIRPORT: &str = "UPDATE Airports SET \
    name = COALESCE(?2, name), \
    code = COALESCE(?3, code), \
    address = CASE WHEN ?4 THEN ?5 ELSE address END, \
    cityId = COALESCE(?6, cityId), \
    updatedAt = ?7 \
    WHERE id = ?1";
pub const DELETE_AIRPORT: &str = "DELETE FROM Airports WHERE id = ?1";

pub const FLIGHT_COLUMNS: &str = "id, flightNumber, airplaneId, departureAirportId, arrivalAirportId, \
    departureTime, arrivalTime, price, boardingGate, totalSeats, createdAt, updatedAt";
pub const INSERT_FLIGHT: &str = "INSERT INTO Flights (flightNumber, airplaneId, departureAirportId, arrivalAirportId, \
    departureTime, arrivalTime, price, boardingGate, totalSeats, createdAt, updatedAt) \
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)";
pub const FLIGHT_BY_ID: &str = "SELECT id, flightNumber, airplaneId, departureAirportId, arrivalAirportId, \
    departureTime, arrivalTime, price, boardingGate, totalSeats, createdAt, updatedAt \
    FROM Flights WHERE id = ?1";
pub const FLIGHT_SEATS: &str = "SELECT totalSeats FROM Flights WHERE id = ?1";
pub const SET_FLIGHT_SEATS: &str = "UPDATE Flights SET totalSeats = ?2, updatedAt = ?3 WHERE id = ?1";
