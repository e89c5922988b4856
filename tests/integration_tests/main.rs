mod common;
mod incremental_test;
mod workflow_test;
