//! Static emergency directory, support resources and telephony requests.

/// Closed set of service categories. Presentation maps each to a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    Police,
    Medical,
    GenderViolence,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyService {
    pub id: &'static str,
    pub name: &'static str,
    pub number: &'static str,
    pub description: &'static str,
    pub category: ServiceCategory,
    pub available: &'static str,
}

/// A request to hand a literal number to the platform dialer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialRequest {
    pub number: String,
    pub label: String,
}

impl DialRequest {
    #[must_use]
    pub fn new(number: &str, label: &str) -> Self {
        Self {
            number: number.to_owned(),
            label: label.to_owned(),
        }
    }
}

static SERVICES: &[EmergencyService] = &[
    EmergencyService {
        id: "police",
        name: "Police",
        number: "10111",
        description: "Report crime and request immediate police assistance",
        category: ServiceCategory::Police,
        available: "24/7",
    },
    EmergencyService {
        id: "ambulance",
        name: "Emergency Medical",
        number: "10177",
        description: "Request ambulance and emergency medical services",
        category: ServiceCategory::Medical,
        available: "24/7",
    },
    EmergencyService {
        id: "gbv",
        name: "GBV Command Centre",
        number: "0800 428 428",
        description: "Gender-based violence support and counseling",
        category: ServiceCategory::GenderViolence,
        available: "24/7",
    },
    EmergencyService {
        id: "childline",
        name: "Childline",
        number: "116",
        description: "Support and protection for children in danger",
        category: ServiceCategory::Child,
        available: "24/7",
    },
];

/// The emergency service catalog, in display order.
#[must_use]
pub fn emergency_services() -> &'static [EmergencyService] {
    SERVICES
}

pub static SAFETY_TIPS: &[&str] = &[
    "Call from a safe location if possible",
    "Stay on the line until help arrives",
    "Share your exact location with the operator",
    "Use the Silent Alert mode if you can't speak",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyResource {
    pub name: &'static str,
    pub distance_km: f32,
}

pub static NEARBY_RESOURCES: &[NearbyResource] = &[
    NearbyResource {
        name: "Johannesburg Central Police Station",
        distance_km: 2.3,
    },
    NearbyResource {
        name: "Charlotte Maxeke Hospital",
        distance_km: 3.7,
    },
];

/// Support line listed on the home screen's emergency support card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportResource {
    pub name: &'static str,
    pub description: &'static str,
    pub number: &'static str,
}

pub static SUPPORT_RESOURCES: &[SupportResource] = &[
    SupportResource {
        name: "GBV Hotline",
        description: "Gender-based violence support",
        number: "66",
    },
    SupportResource {
        name: "Childline",
        description: "24/7 support for children",
        number: "07",
    },
];

/// Directory state: the catalog plus a highlight with no further effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyDirectory {
    services: &'static [EmergencyService],
    selected: Option<&'static str>,
}

impl Default for SafetyDirectory {
    fn default() -> Self {
        Self {
            services: SERVICES,
            selected: None,
        }
    }
}

impl SafetyDirectory {
    #[must_use]
    pub fn services(&self) -> &'static [EmergencyService] {
        self.services
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn select(&mut self, id: &str) -> bool {
        match self.services.iter().find(|service| service.id == id) {
            Some(service) => {
                self.selected = Some(service.id);
                true
            }
            None => false,
        }
    }

    /// Build the dial request for one service. Does not change selection.
    #[must_use]
    pub fn call(&self, id: &str) -> Option<DialRequest> {
        self.services
            .iter()
            .find(|service| service.id == id)
            .map(|service| DialRequest::new(service.number, service.name))
    }

    /// The quick-emergency button dials the first listed service.
    #[must_use]
    pub fn quick_emergency(&self) -> Option<DialRequest> {
        self.services
            .first()
            .map(|service| DialRequest::new(service.number, service.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_snapshot() {
        let rows: Vec<String> = emergency_services()
            .iter()
            .map(|s| format!("{}:{}:{:?}", s.id, s.number, s.category))
            .collect();
        assert_eq!(
            rows.join("|"),
            "police:10111:Police|ambulance:10177:Medical|gbv:0800 428 428:GenderViolence|childline:116:Child"
        );
    }

    #[test]
    fn call_passes_literal_number() {
        let directory = SafetyDirectory::default();
        assert_eq!(
            directory.call("gbv"),
            Some(DialRequest::new("0800 428 428", "GBV Command Centre"))
        );
        assert_eq!(directory.call("fire"), None);
    }

    #[test]
    fn select_only_highlights_known_services() {
        let mut directory = SafetyDirectory::default();
        assert!(directory.select("ambulance"));
        assert!(!directory.select("fire"));
        assert_eq!(directory.selected(), Some("ambulance"));
    }

    #[test]
    fn quick_emergency_dials_police() {
        let directory = SafetyDirectory::default();
        assert_eq!(
            directory.quick_emergency().map(|req| req.number),
            Some("10111".to_owned())
        );
    }
}
