use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CoachService {
    pub name: String,
    pub price: i64,
}

/// Fixed city and coach-service catalog. Built once at startup and carried in
/// `AppState`; fares and the form's select options both come from here.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub services: Vec<CoachService>,
    pub cities: Vec<String>,
}

impl Catalog {
    pub fn standard() -> Self {
        let services = [
            ("Sakeer Express", 2700),
            ("RS Express", 2900),
            ("Myown Express", 2700),
            ("Al Ahla", 2800),
            ("Al Rashith", 2700),
            ("Star Travels", 1600),
            ("Lloyds Travels", 2700),
            ("Super Line", 2700),
        ]
        .into_iter()
        .map(|(name, price)| CoachService {
            name: name.to_string(),
            price,
        })
        .collect();

        let cities = [
            "Nintavur",
            "Addalaichenai",
            "Akkaraipattu",
            "Pottuvil",
            "Panama",
            "Lahugala",
            "Monaragala",
            "Bibile",
            "Medagama",
            "Wellawaya",
            "Badulla",
            "Bandarawela",
            "Hali-Ela",
            "Passara",
            "Mahiyanganaya",
            "Kandy",
            "Peradeniya",
            "Gampola",
            "Nawalapitiya",
            "Hatton",
            "Nanu Oya",
            "Nuwara Eliya",
            "Kalmunai",
            "Sainthamaruthu",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self { services, cities }
    }

    pub fn price_of(&self, service: &str) -> Option<i64> {
        self.services
            .iter()
            .find(|s| s.name == service)
            .map(|s| s.price)
    }

    /// Total fare for a service and seat count. An unknown service prices at
    /// 0; callers treat a zero total as an incomplete selection, not a free
    /// fare.
    pub fn fare(&self, service: &str, seats: u32) -> i64 {
        self.price_of(service).unwrap_or(0) * seats as i64
    }
}

/// Format an LKR amount with thousands separators, e.g. 5400 -> "5,400".
pub fn format_lkr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if amount < 0 {
        out.insert(0, '-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fare_is_price_times_seats() {
        let catalog = Catalog::standard();
        for service in &catalog.services {
            for seats in 1..=6u32 {
                assert_eq!(
                    catalog.fare(&service.name, seats),
                    service.price * seats as i64
                );
            }
        }
    }

    #[test]
    fn test_fare_unknown_service_is_zero() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.fare("Ghost Line", 1), 0);
        assert_eq!(catalog.fare("Ghost Line", 6), 0);
        assert_eq!(catalog.fare("", 3), 0);
    }

    #[test]
    fn test_catalog_contents() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.services.len(), 8);
        assert_eq!(catalog.cities.len(), 24);
        assert_eq!(catalog.price_of("Star Travels"), Some(1600));
        assert_eq!(catalog.price_of("RS Express"), Some(2900));
        assert!(catalog.cities.iter().any(|c| c == "Nintavur"));
        assert!(catalog.cities.iter().any(|c| c == "Kandy"));
    }

    #[test]
    fn test_format_lkr() {
        assert_eq!(format_lkr(0), "0");
        assert_eq!(format_lkr(900), "900");
        assert_eq!(format_lkr(1600), "1,600");
        assert_eq!(format_lkr(3200), "3,200");
        assert_eq!(format_lkr(1234567), "1,234,567");
    }
}
