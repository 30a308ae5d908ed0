mod home_tests;
mod record_flow_tests;
