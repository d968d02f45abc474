//! Day/night sleep window
//!
//! The sleep window runs on UNscaled wall time: a pet sleeps through the
//! same real-world night whether the simulation runs at 1x or 1000x.

use serde::{Deserialize, Serialize};

use crate::core::error::{PetError, Result};
use crate::core::types::WallMillis;

const MS_PER_HOUR: u64 = 3_600_000;

/// How the sleep state is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepMode {
    /// Follow the configured sleep/wake hours
    Automatic,
    /// Follow the room lights, ignoring the schedule
    Manual,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepSchedule {
    pub mode: SleepMode,
    /// Hour of day (0..=23) the automatic window opens
    pub sleep_hour: u8,
    /// Hour of day (0..=23) the automatic window closes
    pub wake_hour: u8,
    /// Manual mode: lights off means asleep
    pub lights_off: bool,
    /// Active temporary wake-up expires at this wall time
    #[serde(skip)]
    temp_wake_until: Option<WallMillis>,
}

impl Default for SleepSchedule {
    fn default() -> Self {
        SleepSchedule {
            mode: SleepMode::Automatic,
            sleep_hour: 22,
            wake_hour: 7,
            lights_off: false,
            temp_wake_until: None,
        }
    }
}

/// Hour of day for an epoch-ms timestamp, shifted by a UTC offset
pub fn hour_of_day(now: WallMillis, utc_offset_hours: i8) -> u8 {
    let utc_hour = (now / MS_PER_HOUR) as i64;
    (utc_hour + utc_offset_hours as i64).rem_euclid(24) as u8
}

impl SleepSchedule {
    /// Whether `hour` falls inside the automatic sleep window. The window
    /// may cross midnight (22 → 7 sleeps 22,23,0..6).
    fn in_window(&self, hour: u8) -> bool {
        if self.sleep_hour == self.wake_hour {
            return false;
        }
        if self.sleep_hour < self.wake_hour {
            hour >= self.sleep_hour && hour < self.wake_hour
        } else {
            hour >= self.sleep_hour || hour < self.wake_hour
        }
    }

    /// Expire a finished temporary wake-up. Call once per tick with
    /// unscaled wall time.
    pub fn advance(&mut self, now: WallMillis) {
        if let Some(until) = self.temp_wake_until {
            if now >= until {
                self.temp_wake_until = None;
            }
        }
    }

    pub fn is_asleep(&self, now: WallMillis, utc_offset_hours: i8) -> bool {
        match self.mode {
            SleepMode::Manual => self.lights_off,
            SleepMode::Automatic => {
                if self.temp_wake_until.is_some_and(|until| now < until) {
                    return false;
                }
                self.in_window(hour_of_day(now, utc_offset_hours))
            }
        }
    }

    pub fn set_schedule(&mut self, sleep_hour: u8, wake_hour: u8) -> Result<()> {
        if sleep_hour > 23 {
            return Err(PetError::InvalidSchedule(sleep_hour));
        }
        if wake_hour > 23 {
            return Err(PetError::InvalidSchedule(wake_hour));
        }
        self.sleep_hour = sleep_hour;
        self.wake_hour = wake_hour;
        Ok(())
    }

    /// Wake the pet during the automatic window for a bounded stretch of
    /// wall time. Interacting again refreshes the window.
    pub fn temporary_wake(&mut self, now: WallMillis, duration_ms: u64) {
        if self.mode == SleepMode::Automatic {
            self.temp_wake_until = Some(now + duration_ms);
        }
    }

    pub fn set_lights(&mut self, on: bool) {
        self.lights_off = !on;
    }
}
