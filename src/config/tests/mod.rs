//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `field_resolution`: Base URL, headline, and evaluator resolution tests
//! - `loading`: Environment and CLI loading through ortho-config
//! - `validation`: Configuration consistency validation tests

mod helpers;
