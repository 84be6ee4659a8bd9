/// Use cases module containing application business logic orchestration
mod inspect_dependencies;

pub use inspect_dependencies::InspectDependenciesUseCase;
