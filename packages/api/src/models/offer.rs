//! # Offers
//!
//! ## Listing
//!
//! [`OfferRow`] is one entry of `GET /offers`. Its `status` is one of
//! `accepted`, `rejected`, `pending`; other values are kept verbatim in
//! [`OfferStatus::Other`] so a new backend status still renders.
//!
//! ## Creation
//!
//! The form edits an [`OfferDraft`] made of raw input strings.
//! [`OfferDraft::validate`] is the only way to obtain a [`NewOffer`], the body
//! of `POST /offers`:
//!
//! ```json
//! {"plan_type":"monthly","additions":["refundable"],"user_id":"42","expired":"2025-03-01","price":99.5}
//! ```

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use store::models::string_or_number;

/// Billing plan of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    PayAsYouGo,
    Monthly,
    Yearly,
}

impl PlanType {
    pub const ALL: [PlanType; 3] = [PlanType::PayAsYouGo, PlanType::Monthly, PlanType::Yearly];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PayAsYouGo => "pay_as_you_go",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PayAsYouGo => "Pay As You Go",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }
}

/// Optional terms attached to an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Addition {
    Refundable,
    OnDemand,
    Negotiable,
}

impl Addition {
    pub const ALL: [Addition; 3] = [Addition::Refundable, Addition::OnDemand, Addition::Negotiable];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Refundable => "refundable",
            Self::OnDemand => "on_demand",
            Self::Negotiable => "negotiable",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Refundable => "Refundable",
            Self::OnDemand => "On Demand",
            Self::Negotiable => "Negotiable",
        }
    }
}

/// Body of `POST /offers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOffer {
    pub plan_type: PlanType,
    pub additions: BTreeSet<Addition>,
    pub user_id: String,
    pub expired: NaiveDate,
    pub price: f64,
}

/// Offer form state as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferDraft {
    pub plan_type: Option<PlanType>,
    pub additions: BTreeSet<Addition>,
    pub user: String,
    pub expired: String,
    pub price: String,
}

impl Default for OfferDraft {
    fn default() -> Self {
        Self {
            plan_type: Some(PlanType::Monthly),
            additions: BTreeSet::new(),
            user: String::new(),
            expired: String::new(),
            price: String::new(),
        }
    }
}

/// Per-field validation messages. Empty when the draft is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    pub plan_type: Option<String>,
    pub user: Option<String>,
    pub expired: Option<String>,
    pub price: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.plan_type.is_none()
            && self.user.is_none()
            && self.expired.is_none()
            && self.price.is_none()
    }
}

impl OfferDraft {
    /// Toggle an addition checkbox.
    pub fn set_addition(&mut self, addition: Addition, checked: bool) {
        if checked {
            self.additions.insert(addition);
        } else {
            self.additions.remove(&addition);
        }
    }

    /// Check every field and build the request body.
    pub fn validate(&self) -> Result<NewOffer, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.plan_type.is_none() {
            errors.plan_type = Some("Plan Type is required".to_string());
        }

        let user = self.user.trim();
        if user.is_empty() {
            errors.user = Some("User is required".to_string());
        }

        let expired = self.expired.trim();
        let date = if expired.is_empty() {
            errors.expired = Some("Expiration date is required".to_string());
            None
        } else {
            match NaiveDate::parse_from_str(expired, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.expired =
                        Some("Expiration date must be a valid date (YYYY-MM-DD)".to_string());
                    None
                }
            }
        };

        let price = self.price.trim();
        let amount = if price.is_empty() {
            errors.price = Some("Price is required".to_string());
            None
        } else {
            match price.parse::<f64>() {
                Ok(p) if p.is_finite() && p > 0.0 => Some(p),
                Ok(_) => {
                    errors.price = Some("Price must be greater than 0".to_string());
                    None
                }
                Err(_) => {
                    errors.price = Some("Price must be a number".to_string());
                    None
                }
            }
        };

        match (self.plan_type, date, amount) {
            (Some(plan_type), Some(expired), Some(price)) if errors.is_empty() => Ok(NewOffer {
                plan_type,
                additions: self.additions.clone(),
                user_id: user.to_string(),
                expired,
                price,
            }),
            _ => Err(errors),
        }
    }
}

/// Lifecycle state of a sent offer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum OfferStatus {
    Accepted,
    Rejected,
    Pending,
    Other(String),
}

impl From<String> for OfferStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "accepted" => Self::Accepted,
            "rejected" => Self::Rejected,
            "pending" => Self::Pending,
            _ => Self::Other(s),
        }
    }
}

impl OfferStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Pending => "pending",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

/// One row of the offers list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OfferRow {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, rename = "jobTitle")]
    pub job_title: String,
    #[serde(default, rename = "type")]
    pub r#type: String,
    pub status: OfferStatus,
}
