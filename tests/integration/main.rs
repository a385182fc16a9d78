//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the fuel system through
//! its public API against a recording sink.

mod fuel_system_tests;
mod mock_sink;
mod scenario_tests;
