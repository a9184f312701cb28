use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Selects the formatter adapter for an output format. It belongs in the
/// application layer as it picks infrastructure adapters based on
/// application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use rigscore::application::dto::OutputFormat;
    /// use rigscore::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use rigscore::application::dto::OutputFormat;
    /// use rigscore::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON report...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
        }
    }
}
