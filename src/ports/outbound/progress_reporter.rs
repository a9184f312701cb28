/// ProgressReporter port for user feedback while an analysis runs
///
/// Implementations write somewhere other than the report destination
/// (stderr for the CLI) so progress never mixes with report output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a counted workload
    ///
    /// # Arguments
    /// * `current` - Items done so far
    /// * `total` - Total expected items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
