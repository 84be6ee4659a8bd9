/// Ports module defining interfaces for hexagonal architecture
///
/// The application core is driven directly by the CLI, so only outbound
/// (driven) ports are defined here.
pub mod outbound;
