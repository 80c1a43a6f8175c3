mod concurrency_test;
mod create_key_test;
