//! Request and response schemas, one module per endpoint family.

mod dashboard;
mod offer;
mod page;
mod user;

pub use dashboard::{DashboardStat, DashboardSummary, StatFilter, SummaryFilter, SummaryRecord, Visits, WEEKDAYS};
pub use offer::{Addition, NewOffer, OfferDraft, OfferRow, OfferStatus, PlanType, ValidationErrors};
pub use page::{Page, PageMeta};
pub use user::{LoginRequest, LoginResponse, User};
