// Testing Tools Library
//
// Live checks of the meetings SDK against a running Boooply server.
// Currently includes:
// - smoke-test: connection, organization and platform scenarios

pub mod output;
pub mod scenarios;
