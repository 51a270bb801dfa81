mod router_tests;
mod utils;
