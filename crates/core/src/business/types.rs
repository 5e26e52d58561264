//! Industry catalogue: each supported business type carries a display name
//! and the section-name suggestions fed to content generation.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BusinessType {
    pub id: &'static str,
    pub name: &'static str,
    pub sections: &'static [&'static str],
}

pub const BUSINESS_TYPES: &[BusinessType] = &[
    BusinessType {
        id: "restaurant",
        name: "Restaurant & Dining",
        sections: &["Menu", "Reservations", "Gallery", "Reviews", "Events", "Catering"],
    },
    BusinessType {
        id: "salon",
        name: "Beauty & Wellness",
        sections: &["Services", "Team", "Booking", "Gallery", "Pricing", "Products"],
    },
    BusinessType {
        id: "fitness",
        name: "Fitness & Health",
        sections: &["Programs", "Trainers", "Membership", "Schedule", "Facilities", "Nutrition"],
    },
    BusinessType {
        id: "retail",
        name: "Retail & E-commerce",
        sections: &["Products", "Collections", "About", "Shipping", "Reviews", "Contact"],
    },
    BusinessType {
        id: "photography",
        name: "Creative Services",
        sections: &["Portfolio", "Services", "Packages", "About", "Testimonials", "Booking"],
    },
    BusinessType {
        id: "consulting",
        name: "Professional Services",
        sections: &["Services", "Expertise", "Team", "Case Studies", "Insights", "Contact"],
    },
    BusinessType {
        id: "medical",
        name: "Healthcare",
        sections: &["Services", "Providers", "Patient Portal", "Insurance", "Locations", "Resources"],
    },
    BusinessType {
        id: "realestate",
        name: "Real Estate",
        sections: &["Listings", "Agents", "Neighborhoods", "Resources", "Testimonials", "Contact"],
    },
    BusinessType {
        id: "education",
        name: "Education & Training",
        sections: &["Courses", "Instructors", "Programs", "Resources", "Enrollment", "Alumni"],
    },
    BusinessType {
        id: "hospitality",
        name: "Hospitality & Travel",
        sections: &["Accommodations", "Amenities", "Experiences", "Dining", "Events", "Booking"],
    },
    BusinessType {
        id: "technology",
        name: "Technology & SaaS",
        sections: &["Products", "Features", "Pricing", "Documentation", "Blog", "Support"],
    },
    BusinessType {
        id: "nonprofit",
        name: "Non-Profit & Charity",
        sections: &["Mission", "Programs", "Impact", "Get Involved", "Donate", "Events"],
    },
];

/// Look up a business type by its id tag.
pub fn business_type(id: &str) -> Option<&'static BusinessType> {
    BUSINESS_TYPES.iter().find(|t| t.id == id)
}
