pub mod workflow_logger;
