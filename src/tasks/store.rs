//! Owned task store with controlled mutation
//!
//! The task list lives for the session and is never persisted. New tasks
//! are inserted at the head so the newest is always first; tasks are never
//! removed. All mutation goes through the transition methods below, which
//! enforce the lifecycle: Pending -> Downloading -> Completed | Failed,
//! with a user-triggered Failed -> Downloading retry. Completed is final.

use crate::tasks::{DownloadTask, TaskStatus};
use std::path::PathBuf;
use tracing::{debug, warn};

/// In-memory list of download tasks, newest first
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<DownloadTask>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Insert a task at the head of the list and return its id
    pub fn add(&mut self, task: DownloadTask) -> String {
        let id = task.id.clone();
        self.tasks.insert(0, task);
        debug!("Added task {}", id);
        id
    }

    /// All tasks, newest first
    pub fn tasks(&self) -> &[DownloadTask] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&DownloadTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Pending -> Downloading, when execution starts
    pub fn mark_downloading(&mut self, id: &str) -> bool {
        self.transition(id, |task| {
            if task.status == TaskStatus::Pending {
                task.status = TaskStatus::Downloading;
                true
            } else {
                false
            }
        })
    }

    /// Downloading -> Completed; sets progress to 100 and records the file
    pub fn complete(&mut self, id: &str, path: PathBuf) -> bool {
        self.transition(id, |task| {
            if task.status == TaskStatus::Downloading {
                task.status = TaskStatus::Completed;
                task.progress = 100;
                task.file_path = Some(path);
                true
            } else {
                false
            }
        })
    }

    /// Downloading -> Failed, carrying the reason verbatim
    pub fn fail(&mut self, id: &str, reason: String) -> bool {
        self.transition(id, |task| {
            if task.status == TaskStatus::Downloading {
                task.status = TaskStatus::Failed(reason);
                true
            } else {
                false
            }
        })
    }

    /// Failed -> Downloading, for a user-triggered retry. Completed tasks
    /// do not support retry.
    pub fn retry(&mut self, id: &str) -> bool {
        self.transition(id, |task| {
            if matches!(task.status, TaskStatus::Failed(_)) {
                task.status = TaskStatus::Downloading;
                task.progress = 0;
                true
            } else {
                false
            }
        })
    }

    fn transition(&mut self, id: &str, apply: impl FnOnce(&mut DownloadTask) -> bool) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                let applied = apply(task);
                if !applied {
                    warn!("Rejected transition for task {} in state {:?}", id, task.status);
                }
                applied
            }
            None => {
                warn!("Task {} not found", id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{DownloadFormat, Quality, VideoQuality};
    use proptest::prelude::*;

    fn sample_task(title: &str) -> DownloadTask {
        DownloadTask::new(
            "https://example.com/v1",
            title,
            DownloadFormat::Mp4,
            Quality::Video(VideoQuality::P720),
        )
    }

    #[test]
    fn test_new_task_is_pending_with_zero_progress() {
        let task = sample_task("a");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.progress, 0);
        assert!(task.file_path.is_none());
    }

    #[test]
    fn test_lifecycle_to_completed() {
        let mut store = TaskStore::new();
        let id = store.add(sample_task("a"));

        assert!(store.mark_downloading(&id));
        assert!(store.complete(&id, PathBuf::from("/tmp/a.mp4")));

        let task = store.get(&id).unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.progress, 100);
        assert_eq!(task.file_path.as_deref(), Some(std::path::Path::new("/tmp/a.mp4")));
    }

    #[test]
    fn test_completed_is_final() {
        let mut store = TaskStore::new();
        let id = store.add(sample_task("a"));
        store.mark_downloading(&id);
        store.complete(&id, PathBuf::from("/tmp/a.mp4"));

        assert!(!store.fail(&id, "late error".to_string()));
        assert!(!store.retry(&id));
        assert!(!store.mark_downloading(&id));
        assert_eq!(store.get(&id).unwrap().status, TaskStatus::Completed);
    }

    #[test]
    fn test_only_failed_supports_retry() {
        let mut store = TaskStore::new();
        let id = store.add(sample_task("a"));
        store.mark_downloading(&id);
        store.fail(&id, "403 blocked".to_string());

        assert_eq!(
            store.get(&id).unwrap().status,
            TaskStatus::Failed("403 blocked".to_string())
        );
        assert!(store.retry(&id));
        assert_eq!(store.get(&id).unwrap().status, TaskStatus::Downloading);

        // Pending tasks cannot retry
        let other = store.add(sample_task("b"));
        assert!(!store.retry(&other));
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let mut store = TaskStore::new();
        assert!(!store.mark_downloading("nope"));
        assert!(!store.fail("nope", "x".to_string()));
    }

    proptest! {
        #[test]
        fn prop_newest_task_is_always_first(titles in proptest::collection::vec("[a-z]{1,12}", 1..24)) {
            let mut store = TaskStore::new();
            for title in &titles {
                let id = store.add(sample_task(title));
                prop_assert_eq!(&store.tasks()[0].id, &id);
                prop_assert_eq!(&store.tasks()[0].title, title);
            }
            prop_assert_eq!(store.len(), titles.len());
        }

        #[test]
        fn prop_progress_is_zero_or_hundred(fail_first in proptest::bool::ANY) {
            let mut store = TaskStore::new();
            let id = store.add(sample_task("a"));
            prop_assert!(store.tasks().iter().all(|t| t.progress == 0 || t.progress == 100));

            store.mark_downloading(&id);
            prop_assert!(store.tasks().iter().all(|t| t.progress == 0 || t.progress == 100));

            if fail_first {
                store.fail(&id, "boom".to_string());
                store.retry(&id);
            }
            store.complete(&id, PathBuf::from("/tmp/a.mp4"));
            prop_assert!(store.tasks().iter().all(|t| t.progress == 0 || t.progress == 100));
        }
    }
}
