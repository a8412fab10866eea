mod core_test;
mod watch_test;
