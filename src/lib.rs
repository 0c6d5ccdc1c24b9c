//! Adoption Compass - Guided AI Adoption Readiness Assessment
//!
//! This crate walks a respondent through a fixed questionnaire with
//! conditional follow-ups and turns the completed answer set into a
//! multi-category maturity score, a risk classification, and tool
//! recommendations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
