use doctor_cell::services::doctor_directory;
use shared_rpc::Doctor;

use crate::models::{
    AboutPage, Carousel, CarouselQuery, DoctorCard, Hero, HomePage, ServiceCategory,
    ServiceGroup, ServicesPage,
};
use crate::services::content::{
    contact_info, ABOUT_TAGLINE, BOOK_PATH, HERO_SUBTITLE, HERO_TITLE, HOME_CTA, SERVICES,
    SERVICES_CTA, SERVICES_TAGLINE, SPECIALITIES, STORY, TESTIMONIALS, VALUES, WELCOME_BODY,
    WELCOME_TITLE,
};

/// Any integer maps onto `0..len`, so stepping past either end wraps around.
pub fn wrap_index(requested: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    requested.rem_euclid(len as i64) as usize
}

/// `None` for an empty list; there is nothing to rotate.
pub fn carousel<T: Clone>(items: &[T], requested: i64) -> Option<Carousel<T>> {
    let total = items.len();
    let index = wrap_index(requested, total);
    items.get(index).map(|current| Carousel {
        index,
        total,
        previous_index: wrap_index(index as i64 - 1, total),
        next_index: wrap_index(index as i64 + 1, total),
        current: current.clone(),
    })
}

fn book_label(doctor: &Doctor) -> String {
    let name = doctor.name.split(',').next().unwrap_or(doctor.name.as_str());
    format!("Book with {}", name.trim())
}

pub fn home_page(query: &CarouselQuery) -> HomePage {
    HomePage {
        hero: Hero {
            title: HERO_TITLE,
            subtitle: HERO_SUBTITLE,
            primary_label: "Schedule Your Assessment",
            primary_link: BOOK_PATH,
            secondary_label: "What is Ayurveda?",
            secondary_link: "/services",
        },
        welcome_title: WELCOME_TITLE,
        welcome_body: WELCOME_BODY,
        specialities: SPECIALITIES.to_vec(),
        services: SERVICES.to_vec(),
        doctors: carousel(&doctor_directory(), query.doctor.unwrap_or(0)),
        testimonials: carousel(&TESTIMONIALS, query.testimonial.unwrap_or(0)),
        cta: HOME_CTA,
    }
}

pub fn about_page() -> AboutPage {
    AboutPage {
        tagline: ABOUT_TAGLINE,
        story: STORY.to_vec(),
        doctors: doctor_directory()
            .into_iter()
            .map(|doctor| DoctorCard {
                book_label: book_label(&doctor),
                doctor,
            })
            .collect(),
        contact: contact_info(),
        values: VALUES.to_vec(),
        book_link: BOOK_PATH,
    }
}

pub fn services_page() -> ServicesPage {
    ServicesPage {
        tagline: SERVICES_TAGLINE,
        groups: ServiceCategory::PAGE_ORDER
            .iter()
            .map(|category| ServiceGroup {
                category: *category,
                heading: category.heading(),
                services: SERVICES
                    .iter()
                    .filter(|service| service.category == *category)
                    .copied()
                    .collect(),
            })
            .collect(),
        cta: SERVICES_CTA,
    }
}
