use serde::Deserialize;

/// Public booking form. Intake fields beyond the required four are folded
/// into a single note blob; nothing is persisted per-field.
#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub service_type: Option<String>,
    pub start_time: Option<String>,
    pub organization: Option<String>,
    pub role: Option<String>,
    pub website: Option<String>,
    pub social: Option<String>,
    pub goals: Option<String>,
    pub notes: Option<String>,
}

impl CreateBookingRequest {
    pub fn composed_note(&self) -> Option<String> {
        let fields = [
            ("Organization", &self.organization),
            ("Role", &self.role),
            ("Website", &self.website),
            ("Social", &self.social),
            ("Goals", &self.goals),
            ("Notes", &self.notes),
        ];

        let parts: Vec<String> = fields
            .iter()
            .filter_map(|(label, value)| {
                value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(|v| format!("{label}: {v}"))
            })
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n"))
        }
    }
}

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub date: String,
}

#[derive(Deserialize)]
pub struct CreateFeedRequest {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composed_note_folds_intake_fields_in_order() {
        let req = CreateBookingRequest {
            client_name: Some("Alice".into()),
            client_email: Some("alice@example.com".into()),
            service_type: Some("discovery-call".into()),
            start_time: None,
            organization: Some("Acme".into()),
            role: Some("  ".into()),
            website: None,
            social: Some("@acme".into()),
            goals: None,
            notes: Some("Bring moodboard".into()),
        };

        assert_eq!(
            req.composed_note().unwrap(),
            "Organization: Acme\nSocial: @acme\nNotes: Bring moodboard"
        );
    }

    #[test]
    fn composed_note_is_none_when_everything_is_blank() {
        let req = CreateBookingRequest {
            client_name: None,
            client_email: None,
            service_type: None,
            start_time: None,
            organization: None,
            role: None,
            website: Some("".into()),
            social: None,
            goals: None,
            notes: None,
        };

        assert!(req.composed_note().is_none());
    }
}
