//! Donation domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::id::RecordId;
use validator::Validate;

use crate::store::{Draft, Record, RecordFilter, SearchTerm, Selection, SubmitContext};

labeled_enum! {
    /// Processing state of a donation.
    pub enum DonationStatus {
        Pending => "Pending",
        Completed => "Completed",
        Failed => "Failed",
    }
}

labeled_enum! {
    /// What was donated.
    pub enum DonationType {
        Food => "Food",
        Money => "Money",
        Clothing => "Clothing",
        Other => "Other",
    }
}

impl Default for DonationStatus {
    fn default() -> Self {
        DonationStatus::Pending
    }
}

impl Default for DonationType {
    fn default() -> Self {
        DonationType::Food
    }
}

/// A recorded donation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: RecordId,
    pub donor: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: DonationStatus,
    #[serde(rename = "type")]
    pub donation_type: DonationType,
}

impl Record for Donation {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

/// Editable donation fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationDraft {
    pub donor: String,
    pub amount: f64,
    pub donation_type: DonationType,
    pub status: DonationStatus,
}

impl Draft for DonationDraft {
    type Record = Donation;

    fn from_record(record: &Donation) -> Self {
        Self {
            donor: record.donor.clone(),
            amount: record.amount,
            donation_type: record.donation_type,
            status: record.status,
        }
    }

    fn is_complete(&self) -> bool {
        !self.donor.is_empty() && self.amount != 0.0
    }

    fn into_record(self, ctx: &SubmitContext) -> Donation {
        Donation {
            id: RecordId::unassigned(),
            donor: self.donor,
            amount: self.amount,
            date: ctx.today(),
            status: self.status,
            donation_type: self.donation_type,
        }
    }

    fn merge_into(self, record: &mut Donation) {
        record.donor = self.donor;
        record.amount = self.amount;
        record.donation_type = self.donation_type;
        record.status = self.status;
    }
}

/// Request payload for recording a donation.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationRequest {
    #[serde(default)]
    #[validate(length(max = 200, message = "Donor must be at most 200 characters"))]
    pub donor: String,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub amount: f64,

    #[serde(default, rename = "type")]
    pub donation_type: DonationType,

    #[serde(default)]
    pub status: DonationStatus,
}

impl CreateDonationRequest {
    pub fn into_draft(self) -> DonationDraft {
        DonationDraft {
            donor: self.donor,
            amount: self.amount,
            donation_type: self.donation_type,
            status: self.status,
        }
    }
}

/// Request payload for updating a donation (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDonationRequest {
    #[validate(length(max = 200, message = "Donor must be at most 200 characters"))]
    pub donor: Option<String>,

    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub amount: Option<f64>,

    #[serde(rename = "type")]
    pub donation_type: Option<DonationType>,

    pub status: Option<DonationStatus>,
}

impl UpdateDonationRequest {
    /// Overlays the supplied fields onto a draft loaded from the record.
    pub fn apply_to(self, draft: &mut DonationDraft) {
        if let Some(donor) = self.donor {
            draft.donor = donor;
        }
        if let Some(amount) = self.amount {
            draft.amount = amount;
        }
        if let Some(donation_type) = self.donation_type {
            draft.donation_type = donation_type;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
    }
}

/// Donation list filters, read from query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DonationFilter {
    pub status: Selection<DonationStatus>,
    #[serde(rename = "type")]
    pub donation_type: Selection<DonationType>,
    pub search: SearchTerm,
}

impl RecordFilter<Donation> for DonationFilter {
    fn matches(&self, donation: &Donation) -> bool {
        self.status.matches(&donation.status)
            && self.donation_type.matches(&donation.donation_type)
            && self.search.matches_any(&[&donation.donor])
    }
}

/// Stat cards for the donations page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationStats {
    pub total_donations: usize,
    pub total_amount: f64,
    pub pending_donations: usize,
    pub completed_donations: usize,
}

impl DonationStats {
    pub fn from_records<'a>(donations: impl IntoIterator<Item = &'a Donation>) -> Self {
        donations.into_iter().fold(Self::default(), |mut stats, d| {
            stats.total_donations += 1;
            stats.total_amount += d.amount;
            match d.status {
                DonationStatus::Pending => stats.pending_donations += 1,
                DonationStatus::Completed => stats.completed_donations += 1,
                DonationStatus::Failed => {}
            }
            stats
        })
    }
}
