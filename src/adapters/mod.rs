/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports,
/// providing the actual integration with composer, Packagist, the
/// file system and the terminal.
pub mod outbound;
