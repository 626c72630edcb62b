//! Display implementations for domain models.
//!
//! Everything renders as markdown. Trips use a level-one heading, sections
//! within a trip a level-two heading and itinerary days a level-three one,
//! so a [`TripDetails`] reads as a single document.

use std::fmt;

use super::{
    count_of,
    datetime::{DayHeading, TripDates},
    money,
};
use crate::{
    itinerary::{Itinerary, ItineraryDay},
    models::{Activity, Flight, Hotel, Trip, TripDetails, TripSummary},
};

fn title_or_placeholder(title: &str) -> &str {
    if title.trim().is_empty() {
        "(untitled trip)"
    } else {
        title
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# {}. {} ({})",
            self.id,
            title_or_placeholder(&self.title),
            self.start_date.year()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- Dates: {}",
            TripDates {
                start: &self.start_date,
                end: &self.end_date,
            }
        )
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let carrier = [self.airline.as_deref(), self.flight_number.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let carrier = if carrier.is_empty() {
            "Flight".to_string()
        } else {
            carrier
        };

        write!(f, "- **{carrier}** (ID: {})", self.id)?;
        if let Some(seat) = &self.seat {
            write!(f, ", seat {seat}")?;
        }
        write!(f, ", Cost: {}", money(self.cost))?;
        if let Some(confirmation) = &self.confirmation {
            write!(f, ", Confirmation: {confirmation}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("Hotel");

        write!(
            f,
            "- **{name}** (ID: {}), {}",
            self.id,
            count_of(self.rooms as usize, "room", "rooms")
        )?;
        if let Some(address) = &self.address {
            write!(f, ", {address}")?;
        }
        write!(f, ", Cost: {}", money(self.cost))?;
        if let Some(confirmation) = &self.confirmation {
            write!(f, ", Confirmation: {confirmation}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("(unnamed activity)");
        match self.time.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            Some(time) => writeln!(f, "- **{time}** {name}")?,
            None => writeln!(f, "- {name}")?,
        }

        if let Some(cost) = self.cost {
            writeln!(f, "  - Cost: {}", money(cost))?;
        }
        if let Some(address) = &self.address {
            writeln!(f, "  - Address: {address}")?;
        }
        if let Some(confirmation) = &self.confirmation {
            writeln!(f, "  - Confirmation: {confirmation}")?;
        }
        if let Some(path) = &self.file_path {
            let label = std::path::Path::new(path)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.clone());
            writeln!(f, "  - Attachment: [{label}]({path})")?;
        }

        Ok(())
    }
}

impl fmt::Display for ItineraryDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", DayHeading(&self.date))?;
        writeln!(f)?;

        if self.is_empty() {
            writeln!(f, "_No activities planned._")?;
        } else {
            for activity in &self.activities {
                write!(f, "{activity}")?;
            }
        }

        writeln!(f)
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No days in this trip.");
        }

        for day in self.days() {
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TripDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.trip)?;
        writeln!(f, "- Total cost: {}", money(self.total_cost()))?;

        writeln!(f, "\n## Flights")?;
        writeln!(f)?;
        if self.flights.is_empty() {
            writeln!(f, "No flights booked.")?;
        }
        for flight in &self.flights {
            write!(f, "{flight}")?;
        }

        writeln!(f, "\n## Hotels")?;
        writeln!(f)?;
        if self.hotels.is_empty() {
            writeln!(f, "No hotels booked.")?;
        }
        for hotel in &self.hotels {
            write!(f, "{hotel}")?;
        }

        writeln!(f, "\n## Itinerary")?;
        writeln!(f)?;
        write!(f, "{}", self.itinerary)
    }
}

impl fmt::Display for TripSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} ({}) (ID: {})",
            title_or_placeholder(&self.title),
            self.start_date.year(),
            self.id
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Dates**: {}",
            TripDates {
                start: &self.start_date,
                end: &self.end_date,
            }
        )?;
        writeln!(
            f,
            "- **Bookings**: {}, {}, {}",
            count_of(self.flight_count as usize, "flight", "flights"),
            count_of(self.hotel_count as usize, "hotel", "hotels"),
            count_of(self.activity_count as usize, "activity", "activities")
        )?;
        writeln!(f, "- **Total cost**: {}", money(self.total_cost))?;
        writeln!(f)
    }
}
