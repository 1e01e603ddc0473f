//! # API crate: typed client for the offers dashboard backend
//!
//! This crate is the dashboard's only door to the network. Every page talks to
//! the backend through one [`ApiClient`], which carries the shared
//! [`store::SessionStore`] and authorises each request with its current
//! credential.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: request construction with bearer injection, JSON decoding, one method per endpoint |
//! | [`error`] | [`ApiError`]: transport, server-rejected and decode failures |
//! | [`list`] | [`ListQuery`], [`ListPage`] and the [`ListSource`] seam used by paginated list controllers |
//! | [`models`] | Per-endpoint request/response schemas and offer draft validation |
//!
//! Response bodies are decoded into explicit schemas at the boundary; a body
//! that does not match is an [`ApiError::Decode`], never a partially filled
//! value.

pub mod client;
pub mod error;
pub mod list;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use list::{ListPage, ListQuery, ListSource, OffersSource};
pub use models::{
    Addition, DashboardStat, DashboardSummary, LoginResponse, NewOffer, OfferDraft, OfferRow,
    OfferStatus, PlanType, StatFilter, SummaryFilter, SummaryRecord, User, ValidationErrors, Visits,
    WEEKDAYS,
};
pub use store::Identity;
