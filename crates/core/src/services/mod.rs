pub mod distribution_service;
pub mod normalization;
pub mod rollup_service;
pub mod statistics_service;
pub mod summary_service;
