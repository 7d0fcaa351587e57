use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::error::WorkoutError;
use crate::models::{Package, Workout, WorkoutKind, WorkoutRecord};

/// Builds the workout described by a sensor package.
///
/// `values` are positional: action count, duration in hours and weight in kg,
/// followed by height in cm for walking, or pool length in metres and lap
/// count for swimming.
pub fn read_package(code: &str, values: &[f64]) -> Result<Workout, WorkoutError> {
    let kind = WorkoutKind::from_code(code)?;
    if values.len() != kind.arity() {
        return Err(WorkoutError::InvalidArgumentCount {
            kind,
            expected: kind.arity(),
            actual: values.len(),
        });
    }

    let record = WorkoutRecord::new(whole(values[0], "action count")?, values[1], values[2])?;
    let workout = match kind {
        WorkoutKind::Running => Workout::running(record),
        WorkoutKind::SportsWalking => {
            Workout::sports_walking(record, whole(values[3], "height")?)?
        }
        WorkoutKind::Swimming => Workout::swimming(
            record,
            whole(values[3], "pool length")?,
            whole(values[4], "pool lap count")?,
        ),
    };

    let metrics = workout.metrics();
    if ![metrics.distance_km, metrics.mean_speed_kmh, metrics.calories_kcal]
        .iter()
        .all(|value| value.is_finite())
    {
        return Err(WorkoutError::InvalidInput(format!(
            "{kind} metrics overflow: {metrics:?}"
        )));
    }

    debug!(code = kind.code(), kind = %kind, "read sensor package");
    Ok(workout)
}

fn whole(value: f64, field: &str) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidInput(format!(
            "{field} must be a whole non-negative number, got {value}"
        )))
    }
}

pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Reads packages from a headerless CSV file with rows like `RUN,15000,1,75`.
pub fn load_packages(path: &Path) -> anyhow::Result<Vec<Package>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open packages file {}", path.display()))?;
    parse_packages(file)
}

pub fn parse_packages<R: std::io::Read>(input: R) -> anyhow::Result<Vec<Package>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(input);
    let mut packages = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("malformed CSV row {}", index + 1))?;
        let mut fields = row.iter();
        let code = match fields.next() {
            Some(code) if !code.is_empty() => code,
            _ => continue,
        };

        let values = fields
            .map(|field| {
                field
                    .parse::<f64>()
                    .with_context(|| format!("row {}: `{field}` is not a number", index + 1))
            })
            .collect::<anyhow::Result<Vec<f64>>>()?;

        packages.push(Package::new(code, values));
    }

    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_codes_to_variants() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(
            workout,
            Workout::swimming(WorkoutRecord::new(720, 1.0, 80.0).unwrap(), 25, 40)
        );

        let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(workout.kind(), WorkoutKind::Running);

        let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert!(matches!(
            workout,
            Workout::SportsWalking { height_cm: 180, .. }
        ));
    }

    #[test]
    fn unknown_code_is_unsupported() {
        let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(err, WorkoutError::UnsupportedWorkoutType("XYZ".to_string()));
    }

    #[test]
    fn too_few_values_is_an_arity_error() {
        let err = read_package("RUN", &[1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            WorkoutError::InvalidArgumentCount {
                kind: WorkoutKind::Running,
                expected: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn too_many_values_is_an_arity_error() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidArgumentCount {
                expected: 4,
                actual: 5,
                ..
            }
        ));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidInput(_)));
    }

    #[test]
    fn fractional_counts_are_rejected() {
        let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.5, 40.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidInput(_)));

        let err = read_package("RUN", &[-3.0, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidInput(_)));
    }

    #[test]
    fn overflowing_metrics_are_rejected() {
        let err = read_package("RUN", &[15000.0, 1.0, 1e308]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidInput(_)));

        let err = read_package("SWM", &[720.0, 1e-308, 80.0, 25.0, 40.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidInput(_)));
    }

    #[test]
    fn sample_packages_all_dispatch() {
        for package in sample_packages() {
            assert!(read_package(&package.code, &package.values).is_ok());
        }
    }

    #[test]
    fn parses_flexible_csv_rows() {
        let input = "# code,values...\nSWM, 720, 1, 80, 25, 40\nRUN,15000,1,75\n\nWLK,9000,1.5,75,180\n";
        let packages = parse_packages(input.as_bytes()).unwrap();
        assert_eq!(packages.len(), 3);
        assert_eq!(packages[0], Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]));
        assert_eq!(packages[2].values, vec![9000.0, 1.5, 75.0, 180.0]);
    }

    #[test]
    fn non_numeric_csv_value_fails() {
        let err = parse_packages("RUN,15000,one,75\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("`one` is not a number"));
    }
}
