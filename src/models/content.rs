// Marketing copy for the static pages.

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

/// Titled card used by the About values and the Features grid.
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME_STATS: [Stat; 4] = [
    Stat { value: "500+", label: "Items Donated" },
    Stat { value: "50+", label: "NGO Partners" },
    Stat { value: "1000+", label: "Happy Donors" },
    Stat { value: "95%", label: "Success Rate" },
];

pub const HOW_IT_WORKS: [Step; 3] = [
    Step {
        number: 1,
        title: "List Your Item",
        description: "Upload photos and details of items you want to donate",
    },
    Step {
        number: 2,
        title: "Connect with NGOs",
        description: "We match you with nearby NGOs that need your items",
    },
    Step {
        number: 3,
        title: "Schedule Pickup",
        description: "Arrange a convenient time for item collection",
    },
];

pub const VALUES: [Card; 3] = [
    Card {
        icon: "recycle",
        title: "Reuse",
        description: "We believe every item deserves a second chance. Reduce waste by giving items new homes.",
    },
    Card {
        icon: "users",
        title: "Help",
        description: "Connect donors with those in need through our trusted NGO network.",
    },
    Card {
        icon: "leaf",
        title: "Sustainability",
        description: "Promote environmental consciousness through responsible consumption and donation.",
    },
];

pub const FEATURES: [Card; 6] = [
    Card {
        icon: "upload",
        title: "Easy Item Upload",
        description: "Upload photos and descriptions of items you want to donate in just a few clicks. Support for multiple categories including clothes, books, and furniture.",
    },
    Card {
        icon: "map-pin",
        title: "Nearby NGO Finder",
        description: "Discover verified NGOs in your area using our integrated map. Filter by distance and category to find the perfect match for your donation.",
    },
    Card {
        icon: "calendar",
        title: "Flexible Pickup Scheduling",
        description: "Choose a convenient time for item collection. Coordinate directly with NGOs to arrange pickup that fits your schedule.",
    },
    Card {
        icon: "bell",
        title: "Real-Time Updates",
        description: "Stay informed with instant notifications about your donations. Track pickup status and receive confirmation when items are received.",
    },
    Card {
        icon: "shield",
        title: "Verified NGO Network",
        description: "All NGOs on our platform are thoroughly verified. Donate with confidence knowing your items reach legitimate organizations.",
    },
    Card {
        icon: "zap",
        title: "Quick & Seamless",
        description: "From listing to pickup, the entire process is streamlined. Make a difference without the hassle. It's that simple.",
    },
];

pub const DONOR_BENEFITS: [&str; 4] = [
    "Declutter your space while helping others",
    "Reduce environmental impact through reuse",
    "Get tax receipts for your donations",
    "Track the impact of your generosity",
];

pub const NGO_BENEFITS: [&str; 4] = [
    "Access a steady stream of donations",
    "Connect with local donors easily",
    "Manage donations efficiently",
    "Expand your reach and impact",
];
