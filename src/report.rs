use std::fmt::{self, Write};

use tracing::warn;

use crate::models::{InfoMessage, Package};
use crate::reader;

impl InfoMessage {
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub output: String,
    pub rendered: usize,
    pub skipped: usize,
}

pub fn build_report<I>(packages: I, format: OutputFormat) -> anyhow::Result<Report>
where
    I: IntoIterator<Item = Package>,
{
    let mut report = Report::default();

    for (index, package) in packages.into_iter().enumerate() {
        let workout = match reader::read_package(&package.code, &package.values) {
            Ok(workout) => workout,
            Err(err) => {
                // Bad packages never abort the session.
                warn!(index, code = %package.code, error = %err, "skipping package");
                report.skipped += 1;
                continue;
            }
        };

        let info = workout.show_training_info();
        match format {
            OutputFormat::Text => {
                let _ = writeln!(report.output, "{}", info.get_message());
            }
            OutputFormat::Json => {
                let _ = writeln!(report.output, "{}", serde_json::to_string(&info)?);
            }
        }
        report.rendered += 1;
    }

    Ok(report)
}
