use std::fmt;

use serde::Serialize;

use crate::error::WorkoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub fn from_code(code: &str) -> Result<Self, WorkoutError> {
        match code {
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            "SWM" => Ok(Self::Swimming),
            other => Err(WorkoutError::UnsupportedWorkoutType(other.to_string())),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Duration is always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutRecord {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl WorkoutRecord {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
    ) -> Result<Self, WorkoutError> {
        if !duration_hours.is_finite() || duration_hours <= 0.0 {
            return Err(WorkoutError::InvalidInput(format!(
                "duration must be positive, got {duration_hours}"
            )));
        }
        if !weight_kg.is_finite() || weight_kg < 0.0 {
            return Err(WorkoutError::InvalidInput(format!(
                "weight must be non-negative, got {weight_kg}"
            )));
        }

        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
        })
    }

    pub fn action_count(&self) -> u32 {
        self.action_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(WorkoutRecord),
    SportsWalking {
        record: WorkoutRecord,
        height_cm: u32,
    },
    Swimming {
        record: WorkoutRecord,
        pool_length_m: u32,
        pool_lap_count: u32,
    },
}

impl Workout {
    pub fn running(record: WorkoutRecord) -> Self {
        Self::Running(record)
    }

    pub fn sports_walking(record: WorkoutRecord, height_cm: u32) -> Result<Self, WorkoutError> {
        if height_cm == 0 {
            return Err(WorkoutError::InvalidInput(
                "height must be positive".to_string(),
            ));
        }
        Ok(Self::SportsWalking { record, height_cm })
    }

    pub fn swimming(record: WorkoutRecord, pool_length_m: u32, pool_lap_count: u32) -> Self {
        Self::Swimming {
            record,
            pool_length_m,
            pool_lap_count,
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running(_) => WorkoutKind::Running,
            Self::SportsWalking { .. } => WorkoutKind::SportsWalking,
            Self::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    pub fn record(&self) -> &WorkoutRecord {
        match self {
            Self::Running(record)
            | Self::SportsWalking { record, .. }
            | Self::Swimming { record, .. } => record,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: String,
    pub values: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            values: values.into(),
        }
    }
}
