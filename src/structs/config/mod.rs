pub mod reporter_config;
