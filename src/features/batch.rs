use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::encoded::EncodedBarcode;
use crate::core::format::Format;
use crate::errors::BarcodeError;
use crate::generator::BarcodeGenerator;

/// Outcome for one batch entry.
#[derive(Debug)]
pub struct BatchItem {
    pub content: String,
    pub result: Result<EncodedBarcode, BarcodeError>,
}

impl BatchItem {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Success and failure counts for a finished batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_items(items: &[BatchItem]) -> Self {
        let succeeded = items.iter().filter(|item| item.is_ok()).count();
        Self {
            total: items.len(),
            succeeded,
            failed: items.len() - succeeded,
        }
    }
}

type ProgressFn<'a> = dyn Fn(usize, usize) + Send + Sync + 'a;

/// Encodes many contents with one generator.
///
/// Each item keeps its own result, so one bad line never aborts the batch.
/// With the `parallel` feature items are encoded on the rayon pool; output
/// order always matches input order.
pub struct BatchEncoder<'a> {
    generator: &'a BarcodeGenerator,
    progress: Option<Box<ProgressFn<'a>>>,
}

impl<'a> BatchEncoder<'a> {
    pub fn new(generator: &'a BarcodeGenerator) -> Self {
        Self {
            generator,
            progress: None,
        }
    }

    /// Calls `callback(completed, total)` after every item.
    ///
    /// In parallel mode calls may arrive from several threads, but
    /// `completed` still counts up to `total` exactly once per item.
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize, usize) + Send + Sync + 'a,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Encodes every item, auto-detecting per item when `format` is `None`.
    pub fn encode_all<S>(&self, items: &[S], format: Option<Format>) -> Vec<BatchItem>
    where
        S: AsRef<str> + Sync,
    {
        let total = items.len();
        let completed = AtomicUsize::new(0);

        let encode_one = |content: &S| {
            let content = content.as_ref();
            let item = BatchItem {
                content: content.to_string(),
                result: self.generator.generate(content, format),
            };
            let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some(progress) = &self.progress {
                progress(done, total);
            }
            item
        };

        #[cfg(feature = "parallel")]
        let results: Vec<BatchItem> = items.par_iter().map(encode_one).collect();
        #[cfg(not(feature = "parallel"))]
        let results: Vec<BatchItem> = items.iter().map(encode_one).collect();

        let summary = BatchSummary::from_items(&results);
        info!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "batch encoding finished"
        );
        results
    }
}

impl std::fmt::Debug for BatchEncoder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchEncoder")
            .field("generator", &self.generator)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}
