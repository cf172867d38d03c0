//! Rotating presence status.
//!
//! The rotation cycles through `status.entries` from the settings, advancing one entry
//! every `status.interval_secs`. The first entry is shown as soon as the rotation
//! starts rather than after the first interval.

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use serenity::all::ActivityData;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    config::settings::{StatusEntry, StatusKind, StatusSettings},
    error::AppError,
};

/// Receiver of presence updates.
pub trait PresenceSink: Send + Sync + 'static {
    fn set_presence(&self, activity: ActivityData);
}

/// Converts a settings entry to the activity Discord displays.
pub fn activity_for(entry: &StatusEntry) -> ActivityData {
    match entry.kind {
        StatusKind::Playing => ActivityData::playing(&entry.text),
        StatusKind::Watching => ActivityData::watching(&entry.text),
        StatusKind::Listening => ActivityData::listening(&entry.text),
        StatusKind::Competing => ActivityData::competing(&entry.text),
        StatusKind::Custom => ActivityData::custom(&entry.text),
    }
}

/// Cursor over the status entries.
struct Rotation {
    entries: Vec<StatusEntry>,
    index: AtomicUsize,
}

impl Rotation {
    fn new(entries: Vec<StatusEntry>) -> Self {
        Self {
            entries,
            index: AtomicUsize::new(0),
        }
    }

    /// Pushes the entry at the cursor, then advances it modulo the entry count.
    fn tick(&self, sink: &dyn PresenceSink) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }

        let (Ok(current) | Err(current)) =
            self.index
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |i| Some((i + 1) % len));

        if let Some(entry) = self.entries.get(current) {
            tracing::debug!("Setting status to '{}'", entry.text);
            sink.set_presence(activity_for(entry));
        }
    }
}

/// Handle to a running status rotation.
pub struct StatusRotation {
    scheduler: JobScheduler,
}

impl StatusRotation {
    /// Shows the first status immediately and schedules the rest.
    ///
    /// # Arguments
    /// - `settings` - Status entries and rotation interval
    /// - `sink` - Where presence updates are pushed
    ///
    /// # Returns
    /// - `Ok(StatusRotation)` - Rotation running; keep the handle to stop it
    /// - `Err(AppError::SchedulerErr)` - Scheduler could not be created or started
    pub async fn start<S: PresenceSink>(
        settings: &StatusSettings,
        sink: S,
    ) -> Result<Self, AppError> {
        let rotation = Arc::new(Rotation::new(settings.entries.clone()));
        let sink: Arc<dyn PresenceSink> = Arc::new(sink);

        rotation.tick(sink.as_ref());

        let scheduler = JobScheduler::new().await?;

        let job_rotation = rotation.clone();
        let job_sink = sink.clone();
        let job = Job::new_repeated_async(
            Duration::from_secs(settings.interval_secs),
            move |_uuid, _lock| {
                let rotation = job_rotation.clone();
                let sink = job_sink.clone();

                Box::pin(async move {
                    rotation.tick(sink.as_ref());
                })
            },
        )?;

        scheduler.add(job).await?;
        scheduler.start().await?;

        tracing::info!(
            "Status rotation started with {} entries every {}s",
            settings.entries.len(),
            settings.interval_secs
        );

        Ok(Self { scheduler })
    }

    /// Stops the rotation. The last pushed status stays visible.
    pub async fn stop(mut self) -> Result<(), AppError> {
        self.scheduler.shutdown().await?;
        tracing::info!("Status rotation stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Clone, Default)]
    struct RecordingSink {
        names: Arc<Mutex<Vec<String>>>,
    }

    impl PresenceSink for RecordingSink {
        fn set_presence(&self, activity: ActivityData) {
            self.names.lock().unwrap().push(activity.name);
        }
    }

    fn entry(text: &str) -> StatusEntry {
        StatusEntry {
            text: text.to_string(),
            kind: StatusKind::Watching,
        }
    }

    /// Tests that ticks walk the entries and wrap around.
    ///
    /// Expected: a, b, c, a
    #[test]
    fn cycles_entries_in_order() {
        let sink = RecordingSink::default();
        let rotation = Rotation::new(vec![entry("a"), entry("b"), entry("c")]);

        for _ in 0..4 {
            rotation.tick(&sink);
        }

        assert_eq!(*sink.names.lock().unwrap(), vec!["a", "b", "c", "a"]);
    }

    /// Tests a single-entry rotation.
    ///
    /// Expected: the same entry every tick
    #[test]
    fn single_entry_repeats() {
        let sink = RecordingSink::default();
        let rotation = Rotation::new(vec![entry("mcrep.gg")]);

        rotation.tick(&sink);
        rotation.tick(&sink);

        assert_eq!(*sink.names.lock().unwrap(), vec!["mcrep.gg", "mcrep.gg"]);
    }

    /// Tests that starting shows the first status without waiting for the interval.
    ///
    /// Expected: first entry pushed once, stop succeeds
    #[tokio::test(flavor = "multi_thread")]
    async fn start_sets_first_status_immediately() {
        let sink = RecordingSink::default();
        let settings = StatusSettings {
            interval_secs: 3600,
            entries: vec![entry("first"), entry("second")],
        };

        let rotation = StatusRotation::start(&settings, sink.clone()).await.unwrap();

        assert_eq!(*sink.names.lock().unwrap(), vec!["first"]);
        rotation.stop().await.unwrap();
    }

    /// Tests the mapping of entry kinds to activities.
    ///
    /// Expected: activity name carries the text
    #[test]
    fn maps_entry_to_activity() {
        let activity = activity_for(&StatusEntry {
            text: "with fire".to_string(),
            kind: StatusKind::Playing,
        });

        assert_eq!(activity.name, "with fire");
    }
}
