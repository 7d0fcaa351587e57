use tracing::debug;

use crate::models::{InfoMessage, Metrics, Workout};

/// Distance covered by one step or stroke, in metres.
pub const LEN_STEP: f64 = 0.65;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
pub const KMH_IN_MSEC: f64 = 0.278;
pub const CM_IN_M: f64 = 100.0;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

pub fn step_distance(action_count: u32) -> f64 {
    action_count as f64 * LEN_STEP / M_IN_KM
}

pub fn pool_distance(pool_length_m: u32, pool_lap_count: u32) -> f64 {
    pool_length_m as f64 * pool_lap_count as f64 / M_IN_KM
}

pub fn mean_speed(distance_km: f64, duration_hours: f64) -> f64 {
    distance_km / duration_hours
}

pub fn running_calories(speed_kmh: f64, weight_kg: f64, duration_hours: f64) -> f64 {
    (RUN_SPEED_MULTIPLIER * speed_kmh + RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
        * MIN_IN_H
        * duration_hours
}

pub fn walking_calories(
    speed_kmh: f64,
    weight_kg: f64,
    height_cm: u32,
    duration_hours: f64,
) -> f64 {
    let speed_ms = speed_kmh * KMH_IN_MSEC;
    let height_m = height_cm as f64 / CM_IN_M;
    (WALK_WEIGHT_MULTIPLIER * weight_kg
        + speed_ms.powi(2) / height_m * WALK_SPEED_HEIGHT_MULTIPLIER * weight_kg)
        * MIN_IN_H
        * duration_hours
}

pub fn swimming_calories(speed_kmh: f64, weight_kg: f64, duration_hours: f64) -> f64 {
    (speed_kmh + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * weight_kg * duration_hours
}

impl Workout {
    /// Distance in km. Swimming measures it from the pool, not from strokes.
    pub fn distance(&self) -> f64 {
        match *self {
            Workout::Running(record) | Workout::SportsWalking { record, .. } => {
                step_distance(record.action_count())
            }
            Workout::Swimming {
                pool_length_m,
                pool_lap_count,
                ..
            } => pool_distance(pool_length_m, pool_lap_count),
        }
    }

    pub fn mean_speed(&self) -> f64 {
        mean_speed(self.distance(), self.record().duration_hours())
    }

    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed();
        match *self {
            Workout::Running(record) => {
                running_calories(speed, record.weight_kg(), record.duration_hours())
            }
            Workout::SportsWalking { record, height_cm } => walking_calories(
                speed,
                record.weight_kg(),
                height_cm,
                record.duration_hours(),
            ),
            Workout::Swimming { record, .. } => {
                swimming_calories(speed, record.weight_kg(), record.duration_hours())
            }
        }
    }

    pub fn metrics(&self) -> Metrics {
        let metrics = Metrics {
            distance_km: self.distance(),
            mean_speed_kmh: self.mean_speed(),
            calories_kcal: self.spent_calories(),
        };
        debug!(kind = %self.kind(), ?metrics, "computed workout metrics");
        metrics
    }

    pub fn show_training_info(&self) -> InfoMessage {
        let metrics = self.metrics();
        InfoMessage {
            training_type: self.kind().label().to_string(),
            duration: self.record().duration_hours(),
            distance: metrics.distance_km,
            speed: metrics.mean_speed_kmh,
            calories: metrics.calories_kcal,
        }
    }
}
