/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod analysis_request;
mod analysis_response;
mod output_format;

pub use analysis_request::{AnalysisRequest, BottleneckRequest};
pub use analysis_response::{AnalysisResponse, BottleneckResponse, CompatibilityResponse};
pub use output_format::OutputFormat;
