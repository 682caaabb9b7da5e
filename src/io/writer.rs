use std::path::PathBuf;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use crate::model::TaskList;

use super::StoreError;
use super::task_io::write_tasks;

/// Background writer for the task file.
///
/// The event loop hands over snapshots with [`TaskWriter::save`] and never
/// waits on the disk. Snapshots queued while a write is in flight collapse
/// into the newest one. The first failure stops the worker and is reported
/// through [`TaskWriter::poll_error`], which the event loop checks each tick.
pub struct TaskWriter {
    tx: Option<mpsc::Sender<TaskList>>,
    errors: mpsc::Receiver<StoreError>,
    handle: Option<JoinHandle<()>>,
}

impl TaskWriter {
    pub fn spawn(path: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();
        let (err_tx, errors) = mpsc::channel();
        let handle = thread::spawn(move || run_writer(path, rx, err_tx));
        TaskWriter {
            tx: Some(tx),
            errors,
            handle: Some(handle),
        }
    }

    /// Queue a snapshot for writing.
    pub fn save(&self, tasks: TaskList) {
        if let Some(tx) = &self.tx {
            // A closed channel means the worker already failed; that error
            // is waiting in `errors`.
            let _ = tx.send(tasks);
        }
    }

    /// Non-blocking check for a failed write.
    pub fn poll_error(&self) -> Option<StoreError> {
        self.errors.try_recv().ok()
    }

    /// Wait for every queued snapshot to hit the disk.
    pub fn finish(mut self) -> Result<(), StoreError> {
        self.shutdown();
        match self.errors.try_recv() {
            Ok(err) => Err(err),
            Err(_) => Ok(()),
        }
    }

    fn shutdown(&mut self) {
        drop(self.tx.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TaskWriter {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_writer(path: PathBuf, rx: mpsc::Receiver<TaskList>, err_tx: mpsc::Sender<StoreError>) {
    while let Ok(mut tasks) = rx.recv() {
        while let Ok(newer) = rx.try_recv() {
            tasks = newer;
        }
        match write_tasks(&path, &tasks) {
            Ok(()) => log::debug!("saved {} tasks to {}", tasks.len(), path.display()),
            Err(e) => {
                log::error!("task save failed: {e}");
                let _ = err_tx.send(e);
                return;
            }
        }
    }
}
