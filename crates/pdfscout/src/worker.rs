//! Background extraction.
//!
//! [`ExtractionWorker`] runs a [`TextBackend`] on a dedicated thread per
//! upload and reports back over a channel. Results are applied to a
//! [`Session`] by polling, so the session itself stays single-threaded and a
//! result whose ticket has been superseded is simply discarded.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use pdfscout_core::{RawExtraction, ScoutError};
use pdfscout_parse::TextBackend;

use crate::session::{Session, UploadOutcome, UploadRequest, UploadTicket};

/// A finished extraction, tagged with the ticket it was started for.
#[derive(Debug)]
pub struct FinishedExtraction {
    pub ticket: UploadTicket,
    pub result: Result<RawExtraction, ScoutError>,
}

/// Runs extractions off the calling thread.
pub struct ExtractionWorker<B> {
    backend: Arc<B>,
    tx: Sender<FinishedExtraction>,
    rx: Receiver<FinishedExtraction>,
    in_flight: usize,
}

impl<B> std::fmt::Debug for ExtractionWorker<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionWorker")
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl<B: TextBackend + Send + Sync + 'static> ExtractionWorker<B> {
    pub fn new(backend: B) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            backend: Arc::new(backend),
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Start extracting `bytes` for `ticket`.
    ///
    /// A panicking backend is reported as an extraction failure.
    pub fn submit(&mut self, ticket: UploadTicket, bytes: Vec<u8>) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        self.in_flight += 1;

        thread::spawn(move || {
            let result = catch_unwind(AssertUnwindSafe(|| backend.extract(&bytes)))
                .unwrap_or_else(|_| {
                    Err(pdfscout_parse::BackendError::Parse(
                        "decoder panicked".to_string(),
                    ))
                })
                .map_err(ScoutError::from);
            // The receiver only goes away with the worker; nothing to report to.
            let _ = tx.send(FinishedExtraction { ticket, result });
        });
    }

    /// Number of submitted extractions not yet received.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Take a finished extraction without blocking.
    pub fn try_recv(&mut self) -> Option<FinishedExtraction> {
        match self.rx.try_recv() {
            Ok(done) => {
                self.in_flight -= 1;
                Some(done)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Block until an extraction finishes. `None` when nothing is in flight.
    pub fn wait(&mut self) -> Option<FinishedExtraction> {
        if self.in_flight == 0 {
            return None;
        }
        let done = self.rx.recv().ok()?;
        self.in_flight -= 1;
        Some(done)
    }
}

impl Session {
    /// Accept `request` and hand its bytes to `worker`.
    pub fn start_upload<B: TextBackend + Send + Sync + 'static>(
        &mut self,
        request: UploadRequest,
        worker: &mut ExtractionWorker<B>,
    ) -> Result<UploadTicket, ScoutError> {
        let ticket = self.begin_upload(&request)?;
        worker.submit(ticket.clone(), request.bytes);
        Ok(ticket)
    }

    /// Apply every result the worker has ready, in arrival order.
    pub fn poll_worker<B: TextBackend + Send + Sync + 'static>(
        &mut self,
        worker: &mut ExtractionWorker<B>,
    ) -> Vec<UploadOutcome> {
        let mut outcomes = Vec::new();
        while let Some(done) = worker.try_recv() {
            outcomes.push(self.complete_upload(done.ticket, done.result));
        }
        outcomes
    }

    /// Block until the current upload is applied or fails.
    ///
    /// Stale results received along the way are discarded. Returns `None`
    /// when the worker has nothing left in flight.
    pub fn wait_for_upload<B: TextBackend + Send + Sync + 'static>(
        &mut self,
        worker: &mut ExtractionWorker<B>,
    ) -> Option<UploadOutcome> {
        while let Some(done) = worker.wait() {
            match self.complete_upload(done.ticket, done.result) {
                UploadOutcome::Discarded => continue,
                outcome => return Some(outcome),
            }
        }
        None
    }
}
