// Dweve Inclusion - Nested Inclusion Directives
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Batch processing for many directives with parallel execution and progress reporting.
//!
//! A batch is a list of directives, usually the non-empty lines of a file.
//! Each directive is processed independently; failures are collected with
//! their line numbers instead of stopping the run.
//!
//! # Examples
//!
//! ```rust
//! use inclusion_cli::batch::{BatchConfig, BatchProcessor, DirectiveLine, ValidationOperation};
//!
//! # fn main() -> Result<(), inclusion_cli::error::CliError> {
//! let lines = DirectiveLine::from_text("tags\npeople(account\n\nposts(tags)\n");
//! assert_eq!(lines.len(), 3);
//!
//! let processor = BatchProcessor::new(BatchConfig::default());
//! let results = processor.process(&lines, ValidationOperation::default(), false)?;
//!
//! assert_eq!(results.failure_count(), 1);
//! assert_eq!(results.failures().next().unwrap().line, 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Performance Characteristics
//!
//! - **Small batches**: serial processing to avoid thread pool overhead
//! - **Large batches** (at or above `parallel_threshold`): Rayon `par_iter`

use crate::error::CliError;
use colored::Colorize;
use inclusion_core::{parse_with_options, ParseOptions};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Configuration for batch processing operations.
///
/// # Examples
///
/// ```rust
/// use inclusion_cli::batch::BatchConfig;
///
/// let config = BatchConfig {
///     parallel_threshold: 1,  // Always parallel
///     max_threads: Some(4),   // Dedicated pool of 4 threads
///     verbose: true,          // Report every line
/// };
/// ```
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Minimum number of directives to trigger parallel processing.
    ///
    /// Default: 100
    pub parallel_threshold: usize,

    /// Size of a dedicated thread pool for parallel processing.
    ///
    /// None means Rayon's global pool. Default: None
    pub max_threads: Option<usize>,

    /// Report each processed line on stderr.
    ///
    /// Default: false
    pub verbose: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 100,
            max_threads: None,
            verbose: false,
        }
    }
}

/// One directive of a batch and the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveLine {
    /// 1-based line number
    pub line: usize,
    /// The directive, surrounding whitespace removed
    pub directive: String,
}

impl DirectiveLine {
    /// Split text into directives, one per non-blank line.
    pub fn from_text(text: &str) -> Vec<Self> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| Self {
                line: index + 1,
                directive: line.trim().to_string(),
            })
            .collect()
    }
}

/// Result of processing a single directive in a batch operation.
#[derive(Debug, Clone)]
pub struct LineResult<T> {
    /// 1-based line number of the directive
    pub line: usize,
    /// The directive that was processed
    pub directive: String,
    /// The result of processing (Ok or Err)
    pub result: Result<T, CliError>,
}

impl<T> LineResult<T> {
    /// Check if the result is successful.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Check if the result is a failure.
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}

/// Aggregated results from a batch processing operation.
#[derive(Debug, Clone)]
pub struct BatchResults<T> {
    /// Individual results, in input order
    pub results: Vec<LineResult<T>>,
    /// Total processing time in milliseconds
    pub elapsed_ms: u128,
}

impl<T> BatchResults<T> {
    /// Create new batch results.
    pub fn new(results: Vec<LineResult<T>>, elapsed_ms: u128) -> Self {
        Self { results, elapsed_ms }
    }

    /// Get the total number of directives processed.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Get the number of successfully processed directives.
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    /// Get the number of failed directives.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Check if any directive failed.
    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| r.is_failure())
    }

    /// Get an iterator over failed results.
    pub fn failures(&self) -> impl Iterator<Item = &LineResult<T>> {
        self.results.iter().filter(|r| r.is_failure())
    }
}

/// Trait for batch operations on directives.
///
/// The operation must be `Send + Sync` to support parallel processing.
///
/// # Examples
///
/// ```rust
/// use inclusion_cli::batch::BatchOperation;
/// use inclusion_cli::error::CliError;
///
/// struct CountNames;
///
/// impl BatchOperation for CountNames {
///     type Output = usize;
///
///     fn process_directive(&self, directive: &str) -> Result<usize, CliError> {
///         Ok(inclusion_core::parse(directive)?.total_count())
///     }
///
///     fn name(&self) -> &str {
///         "count-names"
///     }
/// }
/// ```
pub trait BatchOperation: Send + Sync {
    /// The output type for successful processing
    type Output: Send;

    /// Process a single directive.
    fn process_directive(&self, directive: &str) -> Result<Self::Output, CliError>;

    /// Get a human-readable name for this operation.
    fn name(&self) -> &str;
}

/// Lock-free progress counters shared by the workers.
#[derive(Debug)]
struct ProgressTracker {
    total: usize,
    processed: AtomicUsize,
    failed: AtomicUsize,
    verbose: bool,
    start_time: Instant,
}

impl ProgressTracker {
    fn new(total: usize, verbose: bool) -> Self {
        Self {
            total,
            processed: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            verbose,
            start_time: Instant::now(),
        }
    }

    fn record<T>(&self, line: usize, result: &Result<T, CliError>) {
        let processed = self.processed.fetch_add(1, Ordering::Relaxed) + 1;

        if let Err(e) = result {
            self.failed.fetch_add(1, Ordering::Relaxed);
            if self.verbose {
                eprintln!("{} [{}/{}] line {} - {}", "✗".red().bold(), processed, self.total, line, e);
            }
        } else if self.verbose {
            eprintln!("{} [{}/{}] line {}", "✓".green().bold(), processed, self.total, line);
        }
    }

    fn print_summary(&self, operation_name: &str) {
        let processed = self.processed.load(Ordering::Relaxed);
        let failed = self.failed.load(Ordering::Relaxed);
        let elapsed = self.start_time.elapsed();

        println!("{}", "═".repeat(60).bright_blue());
        println!(
            "{} {}",
            "Batch Operation:".bright_blue().bold(),
            operation_name.bright_white()
        );
        println!("{}", "═".repeat(60).bright_blue());
        println!("  {} {}", "Total directives:".bright_cyan(), processed);
        println!("  {} {}", "Succeeded:".green().bold(), processed - failed);
        println!("  {} {}", "Failed:".red().bold(), failed);
        println!("  {} {:.2}s", "Elapsed:".bright_cyan(), elapsed.as_secs_f64());
        println!("{}", "═".repeat(60).bright_blue());
    }
}

/// Batch processor for directives.
///
/// Chooses serial or parallel processing from the configuration and the
/// batch size. Results keep input order either way.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    config: BatchConfig,
}

impl BatchProcessor {
    /// Create a new batch processor with the given configuration.
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Process every directive with the given operation.
    ///
    /// Individual failures end up in the results; only thread pool creation
    /// can fail the whole call.
    pub fn process<O>(
        &self,
        lines: &[DirectiveLine],
        operation: O,
        show_summary: bool,
    ) -> Result<BatchResults<O::Output>, CliError>
    where
        O: BatchOperation,
    {
        let start_time = Instant::now();

        if lines.is_empty() {
            return Ok(BatchResults::new(vec![], 0));
        }

        let tracker = ProgressTracker::new(lines.len(), self.config.verbose);
        let parallel = lines.len() >= self.config.parallel_threshold;
        tracing::debug!(
            operation = operation.name(),
            count = lines.len(),
            parallel,
            "starting batch"
        );

        let results: Vec<LineResult<O::Output>> = if !parallel {
            lines
                .iter()
                .map(|line| Self::process_line(line, &operation, &tracker))
                .collect()
        } else if let Some(threads) = self.config.max_threads {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| CliError::ThreadPool(e.to_string()))?;
            pool.install(|| Self::process_parallel(lines, &operation, &tracker))
        } else {
            Self::process_parallel(lines, &operation, &tracker)
        };

        if show_summary {
            tracker.print_summary(operation.name());
        }

        Ok(BatchResults::new(results, start_time.elapsed().as_millis()))
    }

    fn process_parallel<O>(
        lines: &[DirectiveLine],
        operation: &O,
        tracker: &ProgressTracker,
    ) -> Vec<LineResult<O::Output>>
    where
        O: BatchOperation,
    {
        lines
            .par_iter()
            .map(|line| Self::process_line(line, operation, tracker))
            .collect()
    }

    fn process_line<O>(
        line: &DirectiveLine,
        operation: &O,
        tracker: &ProgressTracker,
    ) -> LineResult<O::Output>
    where
        O: BatchOperation,
    {
        let result = operation.process_directive(&line.directive);
        tracker.record(line.line, &result);

        LineResult {
            line: line.line,
            directive: line.directive.clone(),
            result,
        }
    }
}

// ============================================================================
// Standard Operations
// ============================================================================

/// Batch validation operation.
///
/// Parses each directive under the given options.
#[derive(Debug, Clone, Default)]
pub struct ValidationOperation {
    /// Parser options, default limits unless overridden
    pub options: ParseOptions,
}

impl BatchOperation for ValidationOperation {
    type Output = ();

    fn process_directive(&self, directive: &str) -> Result<Self::Output, CliError> {
        parse_with_options(directive, &self.options)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "validate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockOperation;

    impl BatchOperation for MockOperation {
        type Output = usize;

        fn process_directive(&self, directive: &str) -> Result<usize, CliError> {
            if directive.starts_with("fail") {
                Err(CliError::invalid_input(directive))
            } else {
                Ok(directive.len())
            }
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    fn lines(directives: &[&str]) -> Vec<DirectiveLine> {
        directives
            .iter()
            .enumerate()
            .map(|(i, d)| DirectiveLine {
                line: i + 1,
                directive: d.to_string(),
            })
            .collect()
    }

    // ==================== DirectiveLine tests ====================

    #[test]
    fn test_from_text_skips_blank_lines() {
        let parsed = DirectiveLine::from_text("a\n\n  \n b(c) \r\nd");
        assert_eq!(
            parsed,
            vec![
                DirectiveLine { line: 1, directive: "a".to_string() },
                DirectiveLine { line: 4, directive: "b(c)".to_string() },
                DirectiveLine { line: 5, directive: "d".to_string() },
            ]
        );
    }

    // ==================== BatchProcessor tests ====================

    #[test]
    fn test_empty_batch() {
        let processor = BatchProcessor::new(BatchConfig::default());
        let results = processor.process(&[], MockOperation, false).unwrap();
        assert_eq!(results.total(), 0);
        assert!(!results.has_failures());
    }

    #[test]
    fn test_serial_processing() {
        let processor = BatchProcessor::new(BatchConfig::default());
        let results = processor
            .process(&lines(&["ab", "fail", "abc"]), MockOperation, false)
            .unwrap();

        assert_eq!(results.total(), 3);
        assert_eq!(results.success_count(), 2);
        assert_eq!(results.failure_count(), 1);
        assert_eq!(results.failures().next().unwrap().line, 2);
    }

    #[test]
    fn test_parallel_processing_keeps_order() {
        let directives: Vec<String> = (0..500)
            .map(|i| if i % 7 == 0 { format!("fail{}", i) } else { "x".repeat(i % 5 + 1) })
            .collect();
        let refs: Vec<&str> = directives.iter().map(String::as_str).collect();

        let config = BatchConfig {
            parallel_threshold: 1,
            max_threads: Some(4),
            verbose: false,
        };
        let results = BatchProcessor::new(config)
            .process(&lines(&refs), MockOperation, false)
            .unwrap();

        assert_eq!(results.total(), 500);
        assert_eq!(results.failure_count(), (0..500).filter(|i| i % 7 == 0).count());
        for (index, result) in results.results.iter().enumerate() {
            assert_eq!(result.line, index + 1);
        }
    }

    #[test]
    fn test_validation_operation() {
        let operation = ValidationOperation::default();
        assert!(operation.process_directive("tags,people(account)").is_ok());

        let err = operation.process_directive("tags,(account)").unwrap_err();
        assert!(matches!(err, CliError::Parse(_)));
    }

    #[test]
    fn test_validation_operation_applies_limits() {
        let operation = ValidationOperation {
            options: ParseOptions::builder().max_depth(1).build(),
        };
        assert!(operation.process_directive("a(b)").is_ok());
        assert!(operation.process_directive("a(b(c))").is_err());
    }
}
