use crate::models::{PrescriptionDraft, ShareMessage};

const WHATSAPP_SHARE_URL: &str = "https://wa.me/?text=";

pub fn share_text(patient_id: i64, draft: &PrescriptionDraft) -> String {
    format!(
        "Prescription for Patient #{}:\n\nMedicines:\n{}\n\nTherapies:\n{}\n\nRecommendations:\n{}\n\nNext Steps:\n{}",
        patient_id, draft.medicines, draft.therapies, draft.recommendations, draft.next_steps
    )
}

pub fn share_message(patient_id: i64, draft: &PrescriptionDraft) -> ShareMessage {
    let text = share_text(patient_id, draft);
    let link = format!("{}{}", WHATSAPP_SHARE_URL, urlencoding::encode(&text));
    ShareMessage { text, link }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_text_layout() {
        let draft = PrescriptionDraft {
            medicines: "Triphala 5g at bedtime".into(),
            therapies: "Abhyanga".into(),
            recommendations: "Sleep by 10 PM".into(),
            next_steps: "Review in 2 weeks".into(),
            consultation_notes: "not shared".into(),
        };

        let text = share_text(22, &draft);
        assert!(text.starts_with("Prescription for Patient #22:\n\nMedicines:\nTriphala 5g at bedtime"));
        assert!(text.ends_with("Next Steps:\nReview in 2 weeks"));
        assert!(!text.contains("not shared"));
    }

    #[test]
    fn test_share_link_is_encoded() {
        let message = share_message(5, &PrescriptionDraft::default());
        assert!(message.link.starts_with("https://wa.me/?text=Prescription%20for%20Patient%20%235%3A%0A%0AMedicines"));
        assert!(!message.link[WHATSAPP_SHARE_URL.len()..].contains(' '));
    }
}
