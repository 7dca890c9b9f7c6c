//! NGO partner domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::id::RecordId;
use validator::Validate;

use crate::store::{Draft, Record, RecordFilter, SearchTerm, Selection, SubmitContext};

labeled_enum! {
    /// Partnership state.
    pub enum PartnerStatus {
        Active => "Active",
        Inactive => "Inactive",
        Pending => "Pending",
    }
}

impl Default for PartnerStatus {
    fn default() -> Self {
        PartnerStatus::Active
    }
}

/// A partner organization.
///
/// `total_donations` is maintained outside the dashboard and never changed
/// by partner edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NgoPartner {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub partner_type: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub status: PartnerStatus,
    pub partnership_date: NaiveDate,
    pub last_interaction: NaiveDate,
    pub total_donations: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Record for NgoPartner {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

/// Editable partner fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartnerDraft {
    pub name: String,
    pub partner_type: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub status: PartnerStatus,
}

impl Draft for PartnerDraft {
    type Record = NgoPartner;

    fn from_record(record: &NgoPartner) -> Self {
        Self {
            name: record.name.clone(),
            partner_type: record.partner_type.clone(),
            contact_person: record.contact_person.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            location: record.location.clone(),
            status: record.status,
        }
    }

    fn is_complete(&self) -> bool {
        !self.name.is_empty()
    }

    fn into_record(self, ctx: &SubmitContext) -> NgoPartner {
        let today = ctx.today();
        NgoPartner {
            id: RecordId::unassigned(),
            name: self.name,
            partner_type: self.partner_type,
            contact_person: self.contact_person,
            email: self.email,
            phone: self.phone,
            location: self.location,
            status: self.status,
            partnership_date: today,
            last_interaction: today,
            total_donations: 0,
            logo: None,
        }
    }

    fn merge_into(self, record: &mut NgoPartner) {
        record.name = self.name;
        record.partner_type = self.partner_type;
        record.contact_person = self.contact_person;
        record.email = self.email;
        record.phone = self.phone;
        record.location = self.location;
        record.status = self.status;
    }
}

/// Request payload for adding a partner.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartnerRequest {
    #[serde(default)]
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name: String,

    #[serde(default, rename = "type")]
    pub partner_type: String,

    #[serde(default)]
    pub contact_person: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub status: PartnerStatus,
}

impl CreatePartnerRequest {
    pub fn into_draft(self) -> PartnerDraft {
        PartnerDraft {
            name: self.name,
            partner_type: self.partner_type,
            contact_person: self.contact_person,
            email: self.email.unwrap_or_default(),
            phone: self.phone,
            location: self.location,
            status: self.status,
        }
    }
}

/// Request payload for updating a partner (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePartnerRequest {
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub partner_type: Option<String>,

    pub contact_person: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    pub location: Option<String>,

    pub status: Option<PartnerStatus>,
}

impl UpdatePartnerRequest {
    pub fn apply_to(self, draft: &mut PartnerDraft) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(partner_type) = self.partner_type {
            draft.partner_type = partner_type;
        }
        if let Some(contact_person) = self.contact_person {
            draft.contact_person = contact_person;
        }
        if let Some(email) = self.email {
            draft.email = email;
        }
        if let Some(phone) = self.phone {
            draft.phone = phone;
        }
        if let Some(location) = self.location {
            draft.location = location;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
    }
}

/// Partner list filters, read from query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartnerFilter {
    #[serde(rename = "type")]
    pub partner_type: Selection<String>,
    pub status: Selection<PartnerStatus>,
    pub search: SearchTerm,
}

impl RecordFilter<NgoPartner> for PartnerFilter {
    fn matches(&self, partner: &NgoPartner) -> bool {
        self.partner_type.matches(&partner.partner_type)
            && self.status.matches(&partner.status)
            && self
                .search
                .matches_any(&[&partner.name, &partner.contact_person, &partner.location])
    }
}

/// Distinct partner types in first-seen order.
pub fn distinct_types<'a>(partners: impl IntoIterator<Item = &'a NgoPartner>) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for partner in partners {
        if !types.contains(&partner.partner_type) {
            types.push(partner.partner_type.clone());
        }
    }
    types
}

/// Stat cards for the partners page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerStats {
    pub total_partners: usize,
    pub active_partners: usize,
    pub total_donations: u64,
    pub partner_types: usize,
}

impl PartnerStats {
    pub fn from_records<'a>(partners: impl IntoIterator<Item = &'a NgoPartner> + Clone) -> Self {
        let mut stats = partners.clone().into_iter().fold(Self::default(), |mut stats, p| {
            stats.total_partners += 1;
            stats.total_donations += p.total_donations;
            if p.status == PartnerStatus::Active {
                stats.active_partners += 1;
            }
            stats
        });
        stats.partner_types = distinct_types(partners).len();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{filter_view, InsertPosition, RecordStore, UpsertForm};

    fn partner(id: &str, name: &str, partner_type: &str, status: PartnerStatus, total: u64) -> NgoPartner {
        NgoPartner {
            id: RecordId::new(id),
            name: name.to_string(),
            partner_type: partner_type.to_string(),
            contact_person: "Sarah Johnson".to_string(),
            email: "sarah@foodforall.org".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "New York, NY".to_string(),
            status,
            partnership_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            last_interaction: NaiveDate::from_ymd_opt(2024, 3, 28).unwrap(),
            total_donations: total,
            logo: None,
        }
    }

    fn store() -> RecordStore<NgoPartner> {
        let mut chicago = partner("3", "Global Hunger Relief", "International NGO", PartnerStatus::Pending, 0);
        chicago.contact_person = "Emma Wilson".to_string();
        chicago.location = "Chicago, IL".to_string();
        RecordStore::with_records(
            InsertPosition::Back,
            vec![
                partner("1", "Food for All Foundation", "Food Bank", PartnerStatus::Active, 1500),
                partner("2", "Community Care Initiative", "Local NGO", PartnerStatus::Active, 800),
                chicago,
            ],
        )
        .unwrap()
    }

    fn ctx() -> SubmitContext {
        SubmitContext::new(
            NaiveDate::from_ymd_opt(2024, 4, 5)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_add_sets_dates_and_zero_donations() {
        let mut store = store();
        let mut form = UpsertForm::<PartnerDraft>::new();
        form.open_new();
        form.draft_mut().name = "Harvest Hope".to_string();
        let outcome = form.submit(&mut store, &ctx()).unwrap();

        let added = store.get(outcome.id()).unwrap();
        assert_eq!(added.partnership_date, ctx().today());
        assert_eq!(added.last_interaction, ctx().today());
        assert_eq!(added.total_donations, 0);
        assert_eq!(added.status, PartnerStatus::Active);
        assert_eq!(store.iter().last().unwrap().id, added.id);
    }

    #[test]
    fn test_edit_preserves_total_donations() {
        let mut store = store();
        let before = store.get(&RecordId::new("1")).unwrap().clone();
        let mut form = UpsertForm::<PartnerDraft>::new();
        form.open_edit(&before);
        form.draft_mut().status = PartnerStatus::Inactive;
        form.submit(&mut store, &ctx()).unwrap();

        let updated = store.get(&RecordId::new("1")).unwrap();
        assert_eq!(updated.status, PartnerStatus::Inactive);
        assert_eq!(updated.total_donations, 1500);
        assert_eq!(updated.partnership_date, before.partnership_date);
    }

    #[test]
    fn test_draft_requires_name() {
        assert!(!PartnerDraft::default().is_complete());
    }

    #[test]
    fn test_search_matches_contact_and_location() {
        let store = store();
        let by_contact = PartnerFilter {
            search: SearchTerm::new("emma"),
            ..Default::default()
        };
        assert_eq!(filter_view(&store, &by_contact).len(), 1);

        let by_location = PartnerFilter {
            search: SearchTerm::new("chicago"),
            ..Default::default()
        };
        assert_eq!(filter_view(&store, &by_location)[0].id, RecordId::new("3"));
    }

    #[test]
    fn test_filter_by_type_and_status() {
        let store = store();
        let filter: PartnerFilter = serde_json::from_value(serde_json::json!({
            "type": "Local NGO",
            "status": "Active"
        }))
        .unwrap();
        let view = filter_view(&store, &filter);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Community Care Initiative");
    }

    #[test]
    fn test_create_request_rejects_bad_email() {
        let request = CreatePartnerRequest {
            name: "X".to_string(),
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_stats_and_types() {
        let store = store();
        let stats = PartnerStats::from_records(store.iter());
        assert_eq!(stats.total_partners, 3);
        assert_eq!(stats.active_partners, 2);
        assert_eq!(stats.total_donations, 2300);
        assert_eq!(stats.partner_types, 3);
        assert_eq!(
            distinct_types(store.iter()),
            vec!["Food Bank", "Local NGO", "International NGO"]
        );
    }
}
