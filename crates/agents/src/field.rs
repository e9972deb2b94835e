use std::sync::Arc;
use std::time::Duration;

use aarogya_core::{
    simulated_location, simulated_sensor_readings, AlertBoard, Channel, CoreError, HealthReport,
    ManualWaterTest, SensorId, SensorReading,
};
use aarogya_observability::AppMetrics;
use tracing::{info, instrument};

use crate::notify::{Notification, Notifier};
use crate::scheduler::ReplyScheduler;

const GPS_CAPTURE_DELAY: Duration = Duration::from_millis(1500);
const VOICE_NOTE_DELAY: Duration = Duration::from_secs(2);
const SENSOR_REFRESH_DELAY: Duration = Duration::from_secs(2);
const KIT_ANALYSIS_DELAY: Duration = Duration::from_secs(3);

pub const REPORT_SUBMITTED_TOAST: &str =
    "Health report submitted successfully! Alert sent to authorities.";
pub const WATER_TEST_SUBMITTED_TOAST: &str = "Manual test data submitted successfully!";

/// Field-worker forms: health reports, water tests and the alert feed.
/// Device access (GPS, microphone, camera, sensors) is simulated with fixed
/// results after a delay; every visible effect goes through the notifier.
pub struct FieldDesk<S, N>
where
    S: ReplyScheduler,
    N: Notifier,
{
    scheduler: S,
    notifier: N,
    metrics: Arc<AppMetrics>,
}

impl<S, N> FieldDesk<S, N>
where
    S: ReplyScheduler,
    N: Notifier,
{
    pub fn new(scheduler: S, notifier: N, metrics: Arc<AppMetrics>) -> Self {
        Self {
            scheduler,
            notifier,
            metrics,
        }
    }

    pub fn metrics(&self) -> &AppMetrics {
        &self.metrics
    }

    pub async fn capture_location(&self, report: &mut HealthReport) {
        self.emit(Notification::toast("Capturing GPS location..."));
        self.scheduler.wait(GPS_CAPTURE_DELAY).await;
        let (label, coordinates) = simulated_location();
        report.set_location(label, coordinates);
        self.emit(Notification::toast("Location captured successfully!"));
    }

    /// Records a voice note and appends its canned transcription to the
    /// report's notes.
    pub async fn record_voice_note(&self, report: &mut HealthReport) {
        self.emit(Notification::toast(
            "Voice recording started. Speak clearly in your preferred language.",
        ));
        self.emit(Notification::toast(
            "Voice recording stopped. Converting to text...",
        ));
        self.scheduler.wait(VOICE_NOTE_DELAY).await;
        report.append_voice_note();
        self.emit(Notification::toast("Voice converted to text successfully!"));
    }

    /// Hands the report to the authorities' channel and resets the form.
    #[instrument(skip_all)]
    pub fn submit_report(&self, report: &mut HealthReport) -> HealthReport {
        let submitted = std::mem::take(report);
        self.metrics.inc_report();

        let location = if submitted.location.is_empty() {
            "unknown location"
        } else {
            submitted.location.as_str()
        };
        self.emit(Notification::new(
            Channel::Sms,
            "New health report",
            format!("{}: {}", location, submitted.symptoms.join(", ")),
        ));
        self.emit(Notification::toast(REPORT_SUBMITTED_TOAST));

        info!(
            symptoms = submitted.symptoms.len(),
            language = %submitted.language.as_code(),
            "health report submitted"
        );
        submitted
    }

    pub async fn refresh_sensors(&self, sensor_id: &SensorId) -> Vec<SensorReading> {
        self.scheduler.wait(SENSOR_REFRESH_DELAY).await;
        let readings = simulated_sensor_readings(sensor_id);
        self.emit(Notification::toast("Sensor data refreshed successfully!"));
        info!(sensor_id = %sensor_id.0, readings = readings.len(), "sensor data refreshed");
        readings
    }

    /// Reads values off a test-kit photo into the form.
    pub async fn analyze_test_kit(&self, test: &mut ManualWaterTest) {
        self.emit(Notification::toast(
            "Image uploaded! AI is analyzing test kit results...",
        ));
        self.scheduler.wait(KIT_ANALYSIS_DELAY).await;
        test.apply_kit_analysis();
        self.emit(Notification::toast(
            "AI analysis complete! Values extracted from test kit image.",
        ));
    }

    #[instrument(skip_all)]
    pub fn submit_water_test(&self, test: &mut ManualWaterTest) -> ManualWaterTest {
        let submitted = std::mem::take(test);
        self.metrics.inc_water_test();
        self.emit(Notification::toast(WATER_TEST_SUBMITTED_TOAST));
        info!(location = %submitted.location, "manual water test submitted");
        submitted
    }

    pub fn acknowledge_alert(&self, board: &mut AlertBoard, id: u32) -> Result<(), CoreError> {
        board.acknowledge(id)?;
        self.metrics.inc_alert_action();
        self.emit(Notification::toast("Alert acknowledged successfully!"));
        Ok(())
    }

    pub fn dismiss_alert(&self, board: &mut AlertBoard, id: u32) -> Result<(), CoreError> {
        board.dismiss(id)?;
        self.metrics.inc_alert_action();
        self.emit(Notification::toast("Alert dismissed!"));
        Ok(())
    }

    fn emit(&self, notification: Notification) {
        self.metrics.inc_notification();
        self.notifier.notify(notification);
    }
}
