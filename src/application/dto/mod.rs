/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod inspect_request;
mod inspect_response;
mod render_options;
mod report_format;

pub use inspect_request::InspectRequest;
pub use inspect_response::InspectResponse;
pub use render_options::RenderOptions;
pub use report_format::ReportFormat;
