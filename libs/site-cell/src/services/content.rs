use crate::models::{
    CallToAction, ClinicService, ClinicValue, ContactInfo, OpeningHours, ServiceCategory,
    Speciality, Testimonial,
};

pub const BOOK_PATH: &str = "/appointments";

pub const HERO_TITLE: &str = "Restore Balance. Heal Naturally.";
pub const HERO_SUBTITLE: &str =
    "Personalized Ayurvedic care rooted in ancient wisdom for modern chronic ailments and holistic wellness.";

pub const WELCOME_TITLE: &str = "Welcome to Punarvasu Clinic";
pub const WELCOME_BODY: &str = "Personalized Ayurvedic care rooted in ancient wisdom for modern chronic ailments and holistic wellness. Our clinic combines traditional Ayurvedic knowledge with modern diagnostic techniques to provide comprehensive treatment plans tailored to your unique constitution.";

pub const ABOUT_TAGLINE: &str = "Dedicated to bringing authentic Ayurvedic healing to modern healthcare";
pub const SERVICES_TAGLINE: &str =
    "Comprehensive Ayurvedic treatments designed to restore balance and promote holistic wellness";

pub const STORY: [&str; 3] = [
    "Punarvasu Clinic was founded with a mission to bridge the gap between ancient Ayurvedic wisdom and modern healthcare. Our name \"Punarvasu\" means \"return to wellness\" in Sanskrit, reflecting our commitment to helping patients restore their health and vitality.",
    "With over 15 years of combined experience, our team of certified Ayurvedic doctors brings together traditional knowledge and contemporary clinical practice. We believe that true healing comes from understanding the root cause of illness and treating the whole person, not just the symptoms.",
    "Our clinic is equipped with modern facilities while maintaining the authentic principles of Ayurvedic treatment. We are committed to providing personalized care, transparent communication, and measurable results for every patient.",
];

pub const SPECIALITIES: [Speciality; 4] = [
    Speciality {
        name: "Chronic Pain",
        description: "Joint, back and nerve pain treated through Vata-balancing therapies.",
    },
    Speciality {
        name: "Digestive Health",
        description: "Restoring Agni for acidity, IBS and sluggish metabolism.",
    },
    Speciality {
        name: "Stress & Sleep",
        description: "Calming the mind with Shirodhara, herbs and daily routine.",
    },
    Speciality {
        name: "Skin & Hair",
        description: "Blood-purifying care for eczema, psoriasis and hair fall.",
    },
];

pub const SERVICES: [ClinicService; 8] = [
    ClinicService {
        title: "Abhyanga",
        category: ServiceCategory::ExternalTherapies,
        description: "Full-body warm herbal oil massage that calms Vata and improves circulation.",
        image: "/images/services/abhyanga.jpg",
    },
    ClinicService {
        title: "Shirodhara",
        category: ServiceCategory::ExternalTherapies,
        description: "A steady stream of medicated oil over the forehead for deep nervous-system rest.",
        image: "/images/services/shirodhara.jpg",
    },
    ClinicService {
        title: "Vamana & Virechana",
        category: ServiceCategory::Detoxification,
        description: "Classical Panchakarma cleansing of Kapha and Pitta under close supervision.",
        image: "/images/services/panchakarma.jpg",
    },
    ClinicService {
        title: "Basti",
        category: ServiceCategory::Detoxification,
        description: "Medicated enema course, the primary Panchakarma therapy for Vata disorders.",
        image: "/images/services/basti.jpg",
    },
    ClinicService {
        title: "Herbal Formulations",
        category: ServiceCategory::InternalMedicine,
        description: "Classical and clinic-prepared formulations matched to your Prakriti.",
        image: "/images/services/herbs.jpg",
    },
    ClinicService {
        title: "Ayurvedic Dietetics",
        category: ServiceCategory::InternalMedicine,
        description: "Personal diet plans built around your constitution and the season.",
        image: "/images/services/dietetics.jpg",
    },
    ClinicService {
        title: "Yoga & Pranayama",
        category: ServiceCategory::Lifestyle,
        description: "Guided sessions that support treatment and long-term balance.",
        image: "/images/services/yoga.jpg",
    },
    ClinicService {
        title: "Dinacharya Counselling",
        category: ServiceCategory::Lifestyle,
        description: "Daily and seasonal routines for sleep, digestion and energy.",
        image: "/images/services/dinacharya.jpg",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Priya S.",
        text: "After years of migraines, three months of treatment here changed everything. I finally sleep through the night.",
        rating: 5,
        image: "/images/testimonials/priya.jpg",
    },
    Testimonial {
        name: "Rahul M.",
        text: "The Panchakarma programme was thorough and the doctors explained every step. My digestion has never been better.",
        rating: 5,
        image: "/images/testimonials/rahul.jpg",
    },
    Testimonial {
        name: "Lakshmi K.",
        text: "Caring staff and a treatment plan that actually fit my routine. My joint pain is down to almost nothing.",
        rating: 4,
        image: "/images/testimonials/lakshmi.jpg",
    },
];

pub const VALUES: [ClinicValue; 6] = [
    ClinicValue {
        title: "Certified Doctors",
        description: "All our doctors are certified Ayurvedic practitioners with years of experience.",
    },
    ClinicValue {
        title: "Personalized Treatment",
        description: "Each patient receives a customized treatment plan based on their unique constitution.",
    },
    ClinicValue {
        title: "Modern Facilities",
        description: "State-of-the-art equipment combined with traditional Ayurvedic practices.",
    },
    ClinicValue {
        title: "Holistic Approach",
        description: "We treat the root cause, not just the symptoms, for lasting wellness.",
    },
    ClinicValue {
        title: "Patient Care",
        description: "Compassionate care and transparent communication throughout your healing journey.",
    },
    ClinicValue {
        title: "Proven Results",
        description: "Thousands of satisfied patients who have experienced transformative healing.",
    },
];

pub const HOME_CTA: CallToAction = CallToAction {
    title: "Ready to Begin Your Healing Journey?",
    body: "Book your consultation with our experienced Ayurvedic doctors today.",
    label: "Book Now",
    link: BOOK_PATH,
};

pub const SERVICES_CTA: CallToAction = CallToAction {
    title: "Unsure Which Therapy is Right For You?",
    body: "Our experienced doctors can help determine the best treatment plan for your unique needs.",
    label: "Schedule Consultation",
    link: BOOK_PATH,
};

pub fn contact_info() -> ContactInfo {
    ContactInfo {
        address_lines: vec!["123 Wellness Street", "Healing City, HC 12345", "India"],
        phone: "(555) 123-4567",
        email: "info@punarvasu.com",
        hours: vec![
            OpeningHours {
                days: "Monday - Friday",
                hours: "9:00 AM - 6:00 PM",
            },
            OpeningHours {
                days: "Saturday",
                hours: "10:00 AM - 4:00 PM",
            },
            OpeningHours {
                days: "Sunday",
                hours: "Closed",
            },
        ],
    }
}
