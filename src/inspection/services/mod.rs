pub mod advisory_matcher;
pub mod reason_parser;
pub mod score_calculator;

pub use advisory_matcher::AdvisoryMatcher;
pub use reason_parser::ReasonParser;
pub use score_calculator::ScoreCalculator;
