//! src/routes/home/properties.rs

/// A showcased home on the landing page.
pub struct Property {
    pub location: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const PROPERTIES: &[Property] = &[
    Property {
        location: "Austin, Texas",
        description: "Modern 3-bedroom townhome in growing tech hub area with excellent schools and amenities.",
        icon: "🏘️",
    },
    Property {
        location: "Denver, Colorado",
        description: "Charming 2-bedroom condo with mountain views, close to downtown and outdoor recreation.",
        icon: "🏡",
    },
    Property {
        location: "Raleigh, North Carolina",
        description: "Spacious 4-bedroom single-family home in family-friendly neighborhood with great schools.",
        icon: "🏠",
    },
    Property {
        location: "Phoenix, Arizona",
        description: "Contemporary 2-bedroom apartment with resort-style amenities and desert landscape views.",
        icon: "🏢",
    },
    Property {
        location: "Nashville, Tennessee",
        description: "Historic 3-bedroom home renovated with modern amenities in vibrant music district.",
        icon: "🏘️",
    },
    Property {
        location: "Tampa, Florida",
        description: "Beachside 2-bedroom condo with ocean access and year-round sunshine lifestyle.",
        icon: "🏡",
    },
];

/// Choices of the `interest` select. The server stores whatever it receives.
pub struct InterestOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const INTEREST_OPTIONS: &[InterestOption] = &[
    InterestOption { value: "first-time-buyer", label: "First-time homebuyer" },
    InterestOption { value: "upgrading", label: "Upgrading my current home" },
    InterestOption { value: "investment", label: "Investment property" },
    InterestOption { value: "relocation", label: "Relocating to new area" },
    InterestOption { value: "just-curious", label: "Just curious about the concept" },
];
