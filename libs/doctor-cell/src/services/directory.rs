use shared_rpc::Doctor;

struct DirectoryEntry {
    id: i64,
    name: &'static str,
    specialization: &'static str,
    qualifications: &'static str,
    experience: i32,
    bio: &'static str,
    image: &'static str,
}

const DIRECTORY: &[DirectoryEntry] = &[
    DirectoryEntry {
        id: 1,
        name: "Dr. Anjali Deshpande",
        specialization: "Kayachikitsa (Internal Medicine)",
        qualifications: "BAMS, MD (Ayurveda)",
        experience: 15,
        bio: "Treats chronic digestive and metabolic disorders with classical Ayurvedic protocols.",
        image: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=400&h=400&fit=crop",
    },
    DirectoryEntry {
        id: 2,
        name: "Dr. Rajesh Kulkarni",
        specialization: "Panchakarma",
        qualifications: "BAMS, MD (Panchakarma)",
        experience: 12,
        bio: "Leads the clinic's detoxification programmes and seasonal cleanses.",
        image: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=400&h=400&fit=crop",
    },
    DirectoryEntry {
        id: 3,
        name: "Dr. Meera Nair",
        specialization: "Stree Roga (Women's Health)",
        qualifications: "BAMS, MS (Prasuti Tantra)",
        experience: 10,
        bio: "Focuses on hormonal balance, fertility support and post-natal care.",
        image: "https://images.unsplash.com/photo-1594824476967-48c8b964273f?w=400&h=400&fit=crop",
    },
    DirectoryEntry {
        id: 4,
        name: "Dr. Vikram Joshi",
        specialization: "Shalya Tantra (Musculoskeletal Care)",
        qualifications: "BAMS, MS (Shalya)",
        experience: 18,
        bio: "Manages joint pain, spine conditions and sports injuries with therapies and herbs.",
        image: "https://images.unsplash.com/photo-1622253692010-333f2da6031d?w=400&h=400&fit=crop",
    },
];

/// The clinic's own roster, shown on marketing pages and used whenever the
/// live doctor list cannot be fetched.
pub fn doctor_directory() -> Vec<Doctor> {
    DIRECTORY
        .iter()
        .map(|entry| Doctor {
            id: entry.id,
            name: entry.name.to_string(),
            specialization: entry.specialization.to_string(),
            qualifications: entry.qualifications.to_string(),
            experience: entry.experience,
            bio: entry.bio.to_string(),
            image: entry.image.to_string(),
        })
        .collect()
}
