use serde::Deserialize;

/// Radius prefilled in the search box, in kilometres.
pub const DEFAULT_RADIUS_KM: f64 = 5.0;
pub const MAX_RADIUS_KM: f64 = 100.0;

/// A partner organisation shown on the finder page.
#[derive(Debug, Clone, PartialEq)]
pub struct Ngo {
    pub name: &'static str,
    pub focus: &'static str,
    pub distance_km: f64,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

impl Ngo {
    pub fn distance_label(&self) -> String {
        format!("{:.1} km", self.distance_km)
    }
}

/// Mock directory until a real NGO registry exists.
pub const DIRECTORY: [Ngo; 4] = [
    Ngo {
        name: "Hope Foundation",
        focus: "General Donations",
        distance_km: 2.3,
        address: "123 Charity Lane, Downtown",
        phone: "+1 234-567-8900",
        email: "contact@hopefoundation.org",
    },
    Ngo {
        name: "Books for All",
        focus: "Books & Education",
        distance_km: 3.7,
        address: "456 Reading Road, East Side",
        phone: "+1 234-567-8901",
        email: "info@booksforall.org",
    },
    Ngo {
        name: "Clothing Circle",
        focus: "Clothes & Textiles",
        distance_km: 4.1,
        address: "789 Fashion Ave, West End",
        phone: "+1 234-567-8902",
        email: "hello@clothingcircle.org",
    },
    Ngo {
        name: "Furniture Helpers",
        focus: "Furniture & Household",
        distance_km: 5.8,
        address: "321 Home Street, North District",
        phone: "+1 234-567-8903",
        email: "support@furniturehelpers.org",
    },
];

#[derive(Debug, Default, Deserialize)]
pub struct FinderQuery {
    pub radius: Option<String>,
}

/// What the finder page shows for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct FinderResult {
    /// Echoed back into the search box.
    pub radius_input: String,
    pub radius_km: Option<f64>,
    pub error: Option<String>,
    pub ngos: Vec<Ngo>,
}

/// Parse a radius in km; must be positive and at most [`MAX_RADIUS_KM`].
pub fn parse_radius(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw.trim()))?;
    if !value.is_finite() || value <= 0.0 {
        return Err("Search radius must be greater than 0 km".to_string());
    }
    if value > MAX_RADIUS_KM {
        return Err(format!("Search radius must be at most {MAX_RADIUS_KM} km"));
    }
    Ok(value)
}

/// NGOs within `radius_km`, nearest first.
pub fn within_radius(radius_km: f64) -> Vec<Ngo> {
    let mut found: Vec<Ngo> = DIRECTORY
        .iter()
        .filter(|ngo| ngo.distance_km <= radius_km)
        .cloned()
        .collect();
    found.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    found
}

/// No radius lists the whole directory; a bad radius lists it too, with an error.
pub fn search(query: &FinderQuery) -> FinderResult {
    let raw = query.radius.as_deref().map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return FinderResult {
            radius_input: format!("{DEFAULT_RADIUS_KM}"),
            radius_km: None,
            error: None,
            ngos: DIRECTORY.to_vec(),
        };
    }

    match parse_radius(raw) {
        Ok(radius) => FinderResult {
            radius_input: raw.to_string(),
            radius_km: Some(radius),
            error: None,
            ngos: within_radius(radius),
        },
        Err(e) => FinderResult {
            radius_input: raw.to_string(),
            radius_km: None,
            error: Some(e),
            ngos: DIRECTORY.to_vec(),
        },
    }
}
