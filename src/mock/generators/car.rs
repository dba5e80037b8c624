//! Vehicle generators.

use crate::mock::generators::pick;

const MAKERS: &[&str] = &[
	"Alfa Romeo", "Audi", "BMW", "Chevrolet", "Citroen", "Fiat", "Ford", "Honda", "Hyundai", "Kia", "Mazda", "Mercedes-Benz",
	"Nissan", "Peugeot", "Renault", "Seat", "Skoda", "Subaru", "Toyota", "Volkswagen", "Volvo",
];

const MODELS: &[&str] = &[
	"Accord", "Altima", "Camry", "Civic", "Corolla", "Elantra", "Fiesta", "Focus", "Golf", "Impreza", "Jetta", "Malibu", "Octavia",
	"Outback", "Passat", "Sentra", "Sonata", "Sorento",
];

const TYPES: &[&str] = &[
	"Passenger car mini", "Passenger car light", "Passenger car compact", "Passenger car medium", "Passenger car large",
	"Sport utility vehicle", "Pickup truck", "Van",
];

const FUEL_TYPES: &[&str] = &["Gasoline", "Methanol", "Ethanol", "Diesel", "LPG", "CNG", "Electric"];

const TRANSMISSION_TYPES: &[&str] = &["Manual", "Automatic"];

/// Generate a car maker.
pub fn maker() -> String {
	pick(MAKERS).to_owned()
}

/// Generate a car model.
pub fn model() -> String {
	pick(MODELS).to_owned()
}

/// Generate a car body type.
pub fn car_type() -> String {
	pick(TYPES).to_owned()
}

/// Generate a fuel type.
pub fn fuel_type() -> String {
	pick(FUEL_TYPES).to_owned()
}

/// Generate a transmission type.
pub fn transmission_type() -> String {
	pick(TRANSMISSION_TYPES).to_owned()
}
