use serde::{Deserialize, Serialize};

use shared_rpc::Doctor;

// ==============================================================================
// CONTENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Speciality {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ServiceCategory {
    #[serde(rename = "External Therapies")]
    ExternalTherapies,
    #[serde(rename = "Internal Medicine")]
    InternalMedicine,
    #[serde(rename = "Detoxification")]
    Detoxification,
    #[serde(rename = "Lifestyle")]
    Lifestyle,
}

impl ServiceCategory {
    /// Order in which the services page lists the groups.
    pub const PAGE_ORDER: [ServiceCategory; 4] = [
        ServiceCategory::ExternalTherapies,
        ServiceCategory::Detoxification,
        ServiceCategory::InternalMedicine,
        ServiceCategory::Lifestyle,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            ServiceCategory::ExternalTherapies => "Rejuvenation & Stress Relief (External Therapies)",
            ServiceCategory::InternalMedicine => "Inner Healing: Herbology & Dietetics",
            ServiceCategory::Detoxification => "Panchakarma & Detoxification",
            ServiceCategory::Lifestyle => "Lifestyle & Wellness",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ClinicService {
    pub title: &'static str,
    pub category: ServiceCategory,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
    pub rating: u8,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ClinicValue {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub address_lines: Vec<&'static str>,
    pub phone: &'static str,
    pub email: &'static str,
    pub hours: Vec<OpeningHours>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CallToAction {
    pub title: &'static str,
    pub body: &'static str,
    pub label: &'static str,
    pub link: &'static str,
}

// ==============================================================================
// PAGE VIEW MODELS
// ==============================================================================

/// One visible item of a rotating panel plus the indices its arrows lead to.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Carousel<T> {
    pub index: usize,
    pub total: usize,
    pub previous_index: usize,
    pub next_index: usize,
    pub current: T,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarouselQuery {
    pub doctor: Option<i64>,
    pub testimonial: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub primary_label: &'static str,
    pub primary_link: &'static str,
    pub secondary_label: &'static str,
    pub secondary_link: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub hero: Hero,
    pub welcome_title: &'static str,
    pub welcome_body: &'static str,
    pub specialities: Vec<Speciality>,
    pub services: Vec<ClinicService>,
    pub doctors: Option<Carousel<Doctor>>,
    pub testimonials: Option<Carousel<Testimonial>>,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorCard {
    pub doctor: Doctor,
    pub book_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutPage {
    pub tagline: &'static str,
    pub story: Vec<&'static str>,
    pub doctors: Vec<DoctorCard>,
    pub contact: ContactInfo,
    pub values: Vec<ClinicValue>,
    pub book_link: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceGroup {
    pub category: ServiceCategory,
    pub heading: &'static str,
    pub services: Vec<ClinicService>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServicesPage {
    pub tagline: &'static str,
    pub groups: Vec<ServiceGroup>,
    pub cta: CallToAction,
}
