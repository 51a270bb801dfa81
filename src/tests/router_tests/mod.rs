mod compare_tests;
mod property_tests;
mod zip_tests;
