// ABOUTME: Appointment booking against doctor availability slots
// ABOUTME: Slot validation, virtual meeting links, cancellation, and upcoming checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Base URL for virtual visit rooms; the doctor id is appended
pub const MEETING_BASE_URL: &str = "https://meet.example.com";

/// A doctor and the slots they offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    /// Doctor identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Specialization, e.g. "Gynecologist"
    pub specialization: String,
    /// Offered time slots (e.g. "10:00 AM") per date
    #[serde(default)]
    pub availability: BTreeMap<NaiveDate, Vec<String>>,
}

impl Doctor {
    /// Dates with at least one slot, ascending
    pub fn available_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.availability
            .iter()
            .filter(|(_, slots)| !slots.is_empty())
            .map(|(date, _)| *date)
    }

    /// Slots offered on `date`; empty when none
    #[must_use]
    pub fn available_times(&self, date: NaiveDate) -> &[String] {
        self.availability.get(&date).map_or(&[], Vec::as_slice)
    }

    /// Whether `time` is offered on `date`
    #[must_use]
    pub fn offers(&self, date: NaiveDate, time: &str) -> bool {
        self.available_times(date).iter().any(|slot| slot == time)
    }
}

/// Appointment lifecycle state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Booked and not yet held
    Scheduled,
    /// Held
    Completed,
    /// Cancelled by the patient
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scheduled => write!(f, "scheduled"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// What the patient asks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Requested date
    pub date: NaiveDate,
    /// Requested slot, exactly as offered
    pub time: String,
    /// Notes for the doctor
    #[serde(default)]
    pub notes: Option<String>,
    /// Video visit instead of in person
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,
}

/// A booked appointment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Appointment identifier
    pub id: String,
    /// Doctor identifier
    pub doctor_id: String,
    /// Doctor name at booking time
    pub doctor_name: String,
    /// Doctor specialization at booking time
    pub specialization: String,
    /// Date
    pub date: NaiveDate,
    /// Slot label, e.g. "2:30 PM"
    pub time: String,
    /// Lifecycle state
    pub status: AppointmentStatus,
    /// Notes for the doctor
    #[serde(default)]
    pub notes: Option<String>,
    /// Video visit
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
    /// Room link for virtual visits
    #[serde(default)]
    pub meeting_link: Option<String>,
}

/// Book `request` with `doctor`
///
/// # Errors
///
/// Returns `InvalidInput` when the doctor does not offer the requested date and time
pub fn book(doctor: &Doctor, request: BookingRequest) -> AppResult<Appointment> {
    if !doctor.offers(request.date, &request.time) {
        return Err(AppError::invalid_input(format!(
            "{} has no {} slot on {}",
            doctor.name, request.time, request.date
        )));
    }

    let appointment = Appointment {
        id: Uuid::new_v4().to_string(),
        doctor_id: doctor.id.clone(),
        doctor_name: doctor.name.clone(),
        specialization: doctor.specialization.clone(),
        date: request.date,
        time: request.time,
        status: AppointmentStatus::Scheduled,
        notes: request.notes.filter(|n| !n.trim().is_empty()),
        is_virtual: request.is_virtual,
        meeting_link: request
            .is_virtual
            .then(|| format!("{MEETING_BASE_URL}/{}", doctor.id)),
    };
    info!(
        appointment_id = %appointment.id,
        doctor_id = %appointment.doctor_id,
        date = %appointment.date,
        is_virtual = appointment.is_virtual,
        "Appointment booked"
    );
    Ok(appointment)
}

impl Appointment {
    /// Cancel a scheduled appointment
    ///
    /// # Errors
    ///
    /// Returns `ResourceConflict` if the appointment is not scheduled
    pub fn cancel(&mut self) -> AppResult<()> {
        if self.status != AppointmentStatus::Scheduled {
            return Err(AppError::conflict(format!(
                "Appointment {} is {} and cannot be cancelled",
                self.id, self.status
            )));
        }
        self.status = AppointmentStatus::Cancelled;
        Ok(())
    }

    /// Date and time of the slot
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the slot label is neither `H:MM AM/PM` nor `HH:MM`
    pub fn starts_at(&self) -> AppResult<NaiveDateTime> {
        let time = parse_slot(&self.time)?;
        Ok(self.date.and_time(time))
    }

    /// Scheduled and starting after `now`
    ///
    /// An unparsable slot label falls back to comparing dates only.
    #[must_use]
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        if self.status != AppointmentStatus::Scheduled {
            return false;
        }
        self.starts_at()
            .map_or(self.date > now.date(), |starts_at| starts_at > now)
    }
}

/// Parse a slot label such as "9:00 AM" or "14:30"
///
/// # Errors
///
/// Returns `InvalidInput` for any other format
pub fn parse_slot(slot: &str) -> AppResult<NaiveTime> {
    let trimmed = slot.trim();
    NaiveTime::parse_from_str(trimmed, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|e| {
            AppError::invalid_input(format!("Unrecognized time slot '{slot}'")).with_source(e)
        })
}

/// Scheduled appointments after `now`, soonest first
#[must_use]
pub fn upcoming(appointments: &[Appointment], now: NaiveDateTime) -> Vec<&Appointment> {
    let mut list: Vec<&Appointment> = appointments
        .iter()
        .filter(|a| a.is_upcoming(now))
        .collect();
    list.sort_by_key(|a| (a.date, a.starts_at().ok()));
    list
}
