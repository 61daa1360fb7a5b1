//! # Career Predictor Module
//!
//! State for the career predictor page: the profile being edited, the
//! in-flight prediction, and the results once they arrive.
//!
//! ## Flow
//!
//! ```text
//! Idle ──submit──▶ Loading ──(delay elapses)──▶ Ready
//!   ▲                 │                            │
//!   └──────reset──────┴────────────reset───────────┘
//! ```
//!
//! Predictions run on a tokio task that sleeps for the configured delay
//! before asking the [`CareerModel`]. The result comes back over a oneshot
//! channel which the UI loop checks with [`Predictor::poll`].

pub mod form;
pub mod model;

pub use form::{CareerProfile, FieldKind, ProfileField};
pub use model::{mock_predictions, CareerModel, CareerPrediction, MockCareerModel};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Artificial delay before results appear.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionStatus {
    Idle,
    Loading,
    Ready(Vec<CareerPrediction>),
}

/// Saved "Download Report" contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerReport {
    pub generated_at: DateTime<Utc>,
    pub profile: CareerProfile,
    pub predictions: Vec<CareerPrediction>,
}

pub struct Predictor {
    pub profile: CareerProfile,
    selected: usize,
    status: PredictionStatus,
    pending: Option<oneshot::Receiver<Vec<CareerPrediction>>>,
    model: Arc<dyn CareerModel>,
    delay: Duration,
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("profile", &self.profile)
            .field("selected", &self.selected)
            .field("status", &self.status)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new(Arc::new(MockCareerModel), DEFAULT_DELAY)
    }
}

impl Predictor {
    pub fn new(model: Arc<dyn CareerModel>, delay: Duration) -> Self {
        Self {
            profile: CareerProfile::default(),
            selected: 0,
            status: PredictionStatus::Idle,
            pending: None,
            model,
            delay,
        }
    }

    pub fn status(&self) -> &PredictionStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == PredictionStatus::Loading
    }

    pub fn predictions(&self) -> Option<&[CareerPrediction]> {
        match &self.status {
            PredictionStatus::Ready(predictions) => Some(predictions),
            _ => None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn selected_field(&self) -> ProfileField {
        ProfileField::ALL[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % ProfileField::ALL.len();
    }

    pub fn previous_field(&mut self) {
        let len = ProfileField::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Step the selected field's value up or down.
    pub fn adjust_selected(&mut self, forward: bool) {
        let field = self.selected_field();
        self.profile.adjust(field, forward);
    }

    /// Type a character into the selected field. Returns `false` when the
    /// field doesn't take text.
    pub fn push_char(&mut self, c: char) -> bool {
        let field = self.selected_field();
        match self.profile.text_mut(field) {
            Some(buffer) => {
                buffer.push(c);
                true
            }
            None => false,
        }
    }

    pub fn pop_char(&mut self) {
        let field = self.selected_field();
        if let Some(buffer) = self.profile.text_mut(field) {
            buffer.pop();
        }
    }

    /// Start a prediction for the current profile.
    ///
    /// Returns `Ok(false)` if a prediction is already running.
    pub fn submit(&mut self) -> Result<bool> {
        if self.is_loading() {
            return Ok(false);
        }

        let runtime = tokio::runtime::Handle::try_current()
            .context("Predictions require a running tokio runtime")?;

        self.profile.normalize();
        let profile = self.profile.clone();
        let model = Arc::clone(&self.model);
        let delay = self.delay;
        let (tx, rx) = oneshot::channel();

        runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let predictions = model.predict(&profile);
            // Receiver is gone if the form was reset meanwhile.
            let _ = tx.send(predictions);
        });

        self.pending = Some(rx);
        self.status = PredictionStatus::Loading;
        log::info!("Career prediction requested");
        Ok(true)
    }

    /// Pick up a finished prediction. Returns `true` when results arrived.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };

        match rx.try_recv() {
            Ok(predictions) => {
                log::info!("Career prediction ready ({} matches)", predictions.len());
                self.pending = None;
                self.status = PredictionStatus::Ready(predictions);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Closed) => {
                log::error!("Career prediction task ended without a result");
                self.pending = None;
                self.status = PredictionStatus::Idle;
                false
            }
        }
    }

    /// Restore the default answers and drop any results or pending work.
    pub fn reset(&mut self) {
        self.profile = CareerProfile::default();
        self.pending = None;
        self.status = PredictionStatus::Idle;
    }

    /// Write the current results to a timestamped JSON file in `dir`.
    pub fn save_report(&self, dir: &Path) -> Result<PathBuf> {
        let Some(predictions) = self.predictions() else {
            bail!("No predictions to save yet");
        };

        let report = CareerReport {
            generated_at: Utc::now(),
            profile: self.profile.clone(),
            predictions: predictions.to_vec(),
        };

        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create report directory: {}", dir.display()))?;

        let path = dir.join(format!(
            "career-report-{}.json",
            report.generated_at.format("%Y%m%d-%H%M%S")
        ));
        let contents =
            serde_json::to_string_pretty(&report).context("Failed to serialize career report")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;

        log::info!("Career report saved to {}", path.display());
        Ok(path)
    }
}
