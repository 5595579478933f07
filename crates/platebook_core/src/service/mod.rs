//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate lesson sources and the builder into platebook use-cases.
//! - Keep CLI callers decoupled from import details.

pub mod platebook_service;
